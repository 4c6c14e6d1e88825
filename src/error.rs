//! Error types for the specsieve library.
//!
//! Extraction itself never fails: every problem inside a pass degrades to a
//! smaller or empty result. These errors travel across the [`Page`](crate::Page)
//! seam and out of option validation, and are swallowed by the core where the
//! heuristic allows it.

use thiserror::Error;

/// Result type alias for specsieve operations
pub type Result<T> = std::result::Result<T, SpecError>;

/// Errors that can occur while configuring or driving an extraction pass
#[derive(Error, Debug)]
pub enum SpecError {
    /// A configured CSS selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Clicking or otherwise interacting with an element failed
    #[error("Interaction failed: {0}")]
    Interaction(String),

    /// An interaction did not complete within its timeout
    #[error("Timed out after {0}ms")]
    Timeout(u128),

    /// The element handle no longer refers to a node in the page
    #[error("Element detached from document")]
    Detached,

    /// Page markup could not be produced or parsed
    #[error("Failed to parse page: {0}")]
    ParseError(String),

    /// Serializing a result record failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General error
    #[error("specsieve error: {0}")]
    Other(String),
}
