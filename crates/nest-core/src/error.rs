//! Error Types for the Property Directory

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NestError>;

#[derive(Error, Debug)]
pub enum NestError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid link: {0}")]
    Link(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
