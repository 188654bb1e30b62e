use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a conversion run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error("could not parse OGN device database")]
    Parse(#[from] serde_json::Error),

    #[error("could not write output to {}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure to get hold of the raw DDB bytes.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("OGN device database download from {url} failed: {message}")]
    Network { url: String, message: String },
}
