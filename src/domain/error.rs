//! Error types for the artlist controller.
//!
//! This module defines the centralized error type [`ArtlistError`] and a type alias
//! [`Result`] used throughout the crate. Errors are derived with `thiserror`.
//!
//! The controller itself never fails on missing data: partial query results
//! degrade to empty defaults. Errors here come from the edges of the system
//! (configuration, fixture files, the query collaborator) or from page arithmetic
//! that would leave the `u32` range.

use thiserror::Error;

/// The main error type for artlist operations.
///
/// # Examples
///
/// ```
/// use artlist::ArtlistError;
///
/// fn validate_page_size(size: u32) -> Result<(), ArtlistError> {
///     if size == 0 {
///         return Err(ArtlistError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ArtlistError {
    /// The query service reported a failure.
    ///
    /// Produced by executors when the remote service answers with GraphQL
    /// errors and no data, or when the transport fails.
    #[error("Query error: {0}")]
    Query(String),

    /// No recorded response matches the requested variables.
    ///
    /// Returned by the fixture replay executor.
    #[error("No recorded response for page {page} (term: {term:?})")]
    NoRecordedResponse {
        /// Requested page.
        page: u32,
        /// Requested committed term.
        term: Option<String>,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page arithmetic left the representable page range.
    #[error("Page out of range: {0}")]
    PageOutOfRange(String),
}

/// A specialized `Result` type for artlist operations.
pub type Result<T> = std::result::Result<T, ArtlistError>;
