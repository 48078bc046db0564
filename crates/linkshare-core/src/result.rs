//! Convenience result type alias for linkshare.

use crate::error::AppError;

/// A specialized `Result` type for linkshare operations.
pub type AppResult<T> = Result<T, AppError>;
