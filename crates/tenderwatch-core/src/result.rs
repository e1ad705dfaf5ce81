//! Application result alias.

use crate::error::AppError;

/// Result type used across all TenderWatch crates.
pub type AppResult<T> = Result<T, AppError>;
