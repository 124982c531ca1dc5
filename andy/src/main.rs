use andy::{command, Config};
use anyhow::Result;
use clap::{Parser, Subcommand};
use drawable::Resolver;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[clap(long, default_value = andy::CONFIG_FILE)]
    config: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ANDY_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run(&args.config)
}

#[derive(Subcommand)]
enum Commands {
    /// Take an asset and resize it for the lower densities
    Dpi {
        /// Asset path or filename
        #[clap(required = true)]
        assets: Vec<PathBuf>,
        /// Resource folder to look up bare filenames in, tried in order
        #[clap(long = "res-dir")]
        res_dirs: Vec<PathBuf>,
    },
    /// Convert a dp value to pixels for every density
    Convert {
        /// Value with unit, e.g. 30dp
        #[clap(allow_hyphen_values = true)]
        value: String,
    },
}

impl Commands {
    pub fn run(self, config: &Path) -> Result<()> {
        match self {
            Self::Dpi { assets, res_dirs } => {
                let resolver = if res_dirs.is_empty() {
                    Config::parse(config)?.resolver()
                } else {
                    Resolver::new(res_dirs)
                };
                command::dpi(&resolver, &assets)?;
            }
            Self::Convert { value } => command::convert(&value)?,
        }
        Ok(())
    }
}
