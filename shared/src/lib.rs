//! Shared types for the Layo storefront
//!
//! Error codes, the application error type and the JSON error body used by
//! every HTTP surface.

pub mod error;

// Re-exports
pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use http;
