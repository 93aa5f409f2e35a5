//! Query sources backing the list.
//!
//! # Modules
//!
//! - `backend`: [`QueryExecutor`] trait, the query-execution collaborator seam
//! - `models`: GraphQL wire records and their normalization into results
//! - `json`: Fixture replay executor backed by a JSON file

pub mod backend;
pub mod json;
pub mod models;

pub use backend::QueryExecutor;
pub use json::{FixtureEntry, JsonFixtureSource, RecordedRequest};
pub use models::{GraphQlError, GraphQlResponse};
