//! Error handling module for the car configurator
//!
//! Fatal errors only. Order rejections are ordinary results and live in
//! `order::OrderRejection`.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Main error type for the configurator
#[derive(Error, Debug)]
pub enum CarDealerError {
    /// Console IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Option catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configurator operations
pub type Result<T> = std::result::Result<T, CarDealerError>;
