//! Convenience result type alias for pagekit.

use crate::error::AppError;

/// A specialized `Result` type for pagekit operations.
pub type AppResult<T> = Result<T, AppError>;
