pub mod command;
mod config;

pub use config::{Config, CONFIG_FILE};
