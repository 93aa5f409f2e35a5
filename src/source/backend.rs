//! Query-execution collaborator abstraction.
//!
//! [`QueryExecutor`] is the seam between the controller and whatever actually
//! answers list queries: a GraphQL client, a cache, or recorded fixtures. The
//! controller never looks behind it, so transport, caching and retry policy stay
//! with the implementation.
//!
//! Implementations may resolve immediately (a cached or recorded answer) or
//! suspend on network I/O; the controller reflects the difference only through
//! its `loading` flag.

use crate::domain::error::Result;
use crate::domain::{QueryParams, QueryResult};
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Runs list queries against the backing service.
///
/// # Implementations
///
/// - [`JsonFixtureSource`](crate::source::JsonFixtureSource): replays recorded
///   responses from a JSON file
///
/// # Examples
///
/// ```
/// use artlist::source::QueryExecutor;
/// use artlist::{QueryParams, QueryResult, Result};
/// use futures_util::future::BoxFuture;
///
/// struct EmptyCatalogue;
///
/// impl QueryExecutor for EmptyCatalogue {
///     fn execute(&self, _params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>> {
///         Box::pin(std::future::ready(Ok(QueryResult::default())))
///     }
/// }
/// ```
pub trait QueryExecutor: Send + Sync {
    /// Runs one query with the given variables.
    ///
    /// Missing fields in the answer should be left as `None`, not invented;
    /// the controller applies the empty defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or answers with an
    /// error and no data.
    fn execute(&self, params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>>;
}

impl<T: QueryExecutor + ?Sized> QueryExecutor for Arc<T> {
    fn execute(&self, params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>> {
        (**self).execute(params)
    }
}

impl<T: QueryExecutor + ?Sized> QueryExecutor for Box<T> {
    fn execute(&self, params: &QueryParams) -> BoxFuture<'_, Result<QueryResult>> {
        (**self).execute(params)
    }
}
