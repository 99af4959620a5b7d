//! Error codes shared by every HTTP-facing error.

pub mod error_code;

pub use error_code::ErrorCode;
