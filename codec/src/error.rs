//! Error types for encoding operations

use thiserror::Error;

/// Error type for encoding operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unencodable value: {0}")]
    Unencodable(&'static str), // shape
    #[error("depth exceeded: {0}")]
    DepthExceeded(usize), // max
    #[error("formatting failed")]
    Fmt(#[from] std::fmt::Error),
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, &'static str), // context, message
    #[error("custom: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}
