//! Error types for the icon pipeline

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering, exporting or packaging the icon
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed (directory create/remove, file write)
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or write an image
    #[error("Failed to write image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Requested dimensions cannot be rendered
    #[error("Invalid icon size: {0}")]
    InvalidSize(String),

    /// The packaging program could not be started
    #[error("Failed to launch `{program}`: {source}")]
    PackagerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The packaging program ran but reported failure
    #[error("`{program}` exited with {status}: {stderr}")]
    PackagerFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
