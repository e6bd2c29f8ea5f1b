use std::path::PathBuf;

use thiserror::Error;

/// An upstream field had a JSON shape the normalizers do not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unsupported number list format: {0}")]
    UnsupportedValueShape(String),
    #[error("unsupported scaling format: {0}")]
    UnsupportedScalingShape(String),
}

/// Reading or decoding the set data file failed. Fatal to startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server stopped with error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("unit data failed to load: {0}")]
    Data(String),
}
