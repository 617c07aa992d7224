//! Cache backend error types.

use std::fmt;

/// Errors raised while setting up a cache backend.
///
/// Reads and writes never surface errors; they are logged and absorbed.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache setup.
pub type CacheResult<T> = Result<T, CacheError>;
