use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no res folder found for `{}`", .0.display())]
    NoResourceRootFound(PathBuf),
    #[error("no density found for `{}`", .0.display())]
    NoDensityFound(PathBuf),
    #[error("failed to open `{}`", .path.display())]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode `{}`", .path.display())]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create `{}`", .path.display())]
    OutputCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode `{}`", .path.display())]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid unit `{0}`, expected an integer followed by `dp`")]
    InvalidUnitFormat(String),
}
