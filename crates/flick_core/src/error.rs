//! Scroll error types

use thiserror::Error;

/// Errors surfaced by scroll controller construction
///
/// Runtime conditions (disabled input, sub-threshold gestures, out-of-range
/// scroll targets) are handled by silent policy instead of errors.
#[derive(Error, Debug)]
pub enum ScrollError {
    /// The container has no content element to translate
    #[error("empty element can not scroll")]
    EmptyContent,
}

/// Result type for scroll operations
pub type Result<T> = std::result::Result<T, ScrollError>;
