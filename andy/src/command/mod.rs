mod convert;
mod dpi;

pub use convert::convert;
pub use dpi::dpi;
