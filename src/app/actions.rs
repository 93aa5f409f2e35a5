//! Actions representing side effects requested by the event handler.
//!
//! The handler never talks to the query collaborator directly. It returns
//! actions, and the [`ListController`](crate::ListController) (or any other
//! runtime) executes them.

use crate::worker::QueryRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a query with the request's parameters.
    ///
    /// A newer `IssueQuery` supersedes any older one that has not been sent
    /// yet; an older one that is already in flight will have its response
    /// ignored.
    IssueQuery(QueryRequest),
}
