//! Domain layer for the artlist controller.
//!
//! Core types shared by every other layer, independent of the query transport
//! and of any UI toolkit.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`artwork`]: List item model
//! - [`query`]: Query variables and normalized query results
//! - [`pagination`]: Cursor convention of the pagination protocol

pub mod artwork;
pub mod error;
pub mod pagination;
pub mod query;

pub use artwork::Artwork;
pub use error::{ArtlistError, Result};
pub use pagination::{CursorConvention, RetreatPolicy, DEFAULT_ADVANCE_OFFSET};
pub use query::{QueryParams, QueryResult};
