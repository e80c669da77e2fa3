//! # Error Types
//!
//! Storage errors for the order-history file.
//!
//! A `StoreError` never aborts a sale: the controller degrades a read
//! failure to "no history" and logs a write failure after payment instead of
//! rolling back.

use std::path::PathBuf;
use thiserror::Error;

/// Order-history storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failure (read, write or create).
    #[error("history file I/O failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
