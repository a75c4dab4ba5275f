//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `evac-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// The external source could not be decoded into a grid.  No partial
    /// grid is ever returned alongside this error.
    #[error("unreadable grid source: {0}")]
    Unreadable(String),
}

pub type GridResult<T> = Result<T, GridError>;
