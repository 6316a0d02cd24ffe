//! error types for stow

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StowError {
    #[error("unknown adaptor: {0}")]
    UnknownAdaptor(String),

    #[error("adaptor already registered: {0}")]
    DuplicateAdaptor(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("invalid property: {0}")]
    InvalidProperty(String),

    #[error("invalid location: {0}")]
    InvalidLocation(String),

    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("not connected: {0}")]
    NotConnected(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StowError>;
