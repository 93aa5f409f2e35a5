//! List state management and view model computation.
//!
//! This module defines [`ListState`], the single source of truth for one list
//! view: pagination, search input, the committed search term, and the latest
//! query outcome. It lives as long as the view and is never shared.
//!
//! # State Components
//!
//! - **Page**: Page number driving the query, always ≥ 1 under the default
//!   retreat policy
//! - **Search input**: Uncommitted text; typing never triggers a query
//! - **Term**: Committed filter; `None` means no filter
//! - **Phase**: Whether a query is outstanding (see [`QueryPhase`])
//! - **Result**: Last resolved result, kept visible while the next one loads
//!
//! Everything the UI shows about the result (`items`, `previous_page`,
//! `total`) is derived from `result` on demand, never stored separately.

use super::modes::QueryPhase;
use crate::domain::error::Result;
use crate::domain::{Artwork, CursorConvention, QueryParams, QueryResult};
use crate::ui::viewmodel::ListView;
use crate::worker::{QueryRequest, QueryResponse};

/// Page every new list and every new search starts on.
pub const FIRST_PAGE: u32 = 1;

/// Per-view list state container.
///
/// Mutated by the event handler in response to UI events and query responses.
#[derive(Debug, Clone)]
pub struct ListState {
    /// Items per page, fixed for the state's lifetime.
    pub page_size: u32,

    /// Page requested by the current query.
    pub page: u32,

    /// Text in the search field, not yet committed.
    pub search_input_value: String,

    /// Committed search term driving the query.
    pub term: Option<String>,

    /// Query lifecycle phase.
    pub phase: QueryPhase,

    /// Last result applied, `None` before the first resolution or after a failure.
    pub result: Option<QueryResult>,

    /// Message of the last failed query, cleared by the next success.
    pub last_error: Option<String>,

    /// Unix timestamp of the last applied result.
    pub last_resolved_at: Option<i64>,

    /// Page arithmetic of the backing service.
    pub convention: CursorConvention,

    /// Id handed to the most recently issued request.
    last_request_id: u64,
}

impl ListState {
    /// Creates the state of a freshly mounted list: page 1, no term, no result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use artlist::{CursorConvention, ListState};
    ///
    /// let state = ListState::new(20, CursorConvention::default());
    /// assert_eq!(state.page, 1);
    /// assert_eq!(state.previous_page(), 0);
    /// assert!(state.items().is_empty());
    /// ```
    #[must_use]
    pub fn new(page_size: u32, convention: CursorConvention) -> Self {
        Self {
            page_size,
            page: FIRST_PAGE,
            search_input_value: String::new(),
            term: None,
            phase: QueryPhase::Idle,
            result: None,
            last_error: None,
            last_resolved_at: None,
            convention,
            last_request_id: 0,
        }
    }

    /// Query variables for the current page and term.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::new(self.page_size, self.page, self.term.clone())
    }

    /// Previous-page cursor of the last result, `0` when absent.
    #[must_use]
    pub fn previous_page(&self) -> u32 {
        self.result.as_ref().map_or(0, QueryResult::previous_page)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.result.as_ref().map_or(0, QueryResult::total)
    }

    #[must_use]
    pub fn items(&self) -> &[Artwork] {
        self.result
            .as_ref()
            .map(QueryResult::items)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Replaces the uncommitted search text. Never touches `page` or `term`.
    ///
    /// Returns `true` if the text changed.
    pub fn set_search_input_value(&mut self, text: &str) -> bool {
        if self.search_input_value == text {
            return false;
        }
        self.search_input_value.clear();
        self.search_input_value.push_str(text);
        true
    }

    /// Commits the search input as the new term and returns to the first page.
    ///
    /// Blank input commits "no filter" rather than an empty term. Returns
    /// `true` if the query parameters changed.
    pub fn commit_search(&mut self) -> bool {
        let term = if self.search_input_value.trim().is_empty() {
            None
        } else {
            Some(self.search_input_value.clone())
        };

        let changed = term != self.term || self.page != FIRST_PAGE;

        tracing::debug!(
            term = ?term,
            previous_term = ?self.term,
            previous_page = self.page,
            changed = changed,
            "search committed"
        );

        self.term = term;
        self.page = FIRST_PAGE;
        changed
    }

    /// Moves to the page after the one the last result describes.
    ///
    /// Reads the derived cursor, not `page`, so repeated calls without a new
    /// result land on the same page. Returns `true` if the page changed.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`](crate::ArtlistError::PageOutOfRange) if the
    /// target page overflows; the state is left untouched.
    pub fn advance_page(&mut self) -> Result<bool> {
        let previous_page = self.previous_page();
        let target = self.convention.next_page(previous_page)?;

        tracing::debug!(previous_page = previous_page, target = target, "advancing page");
        Ok(self.set_page(target))
    }

    /// Moves to the page the last result reports as previous.
    ///
    /// Returns `true` if the page changed.
    pub fn retreat_page(&mut self) -> bool {
        let previous_page = self.previous_page();
        let target = self.convention.retreat_page(previous_page);

        tracing::debug!(
            previous_page = previous_page,
            target = target,
            policy = ?self.convention.retreat_policy(),
            "retreating page"
        );
        self.set_page(target)
    }

    fn set_page(&mut self, page: u32) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Starts a query for the current parameters and enters `Loading`.
    ///
    /// Any request still outstanding is superseded: its response will be
    /// ignored when it arrives.
    pub fn begin_query(&mut self) -> QueryRequest {
        self.last_request_id = self.last_request_id.wrapping_add(1);
        let request_id = self.last_request_id;

        if let QueryPhase::Loading { request_id: superseded } = self.phase {
            tracing::debug!(superseded = superseded, request_id = request_id, "superseding query");
        }

        self.phase = QueryPhase::Loading { request_id };
        QueryRequest::new(request_id, self.params())
    }

    /// Applies a query response if it answers the outstanding request.
    ///
    /// Returns `false` for stale responses, which leave the state untouched.
    pub fn apply_response(&mut self, response: &QueryResponse) -> bool {
        let request_id = response.request_id();
        if !self.phase.awaits(request_id) {
            tracing::debug!(request_id = request_id, phase = ?self.phase, "ignoring stale response");
            return false;
        }

        self.phase = QueryPhase::Idle;

        match response {
            QueryResponse::Resolved {
                result,
                resolved_at,
                ..
            } => {
                self.result = Some(result.clone());
                self.last_error = None;
                self.last_resolved_at = Some(*resolved_at);
            }
            QueryResponse::Failed { message, .. } => {
                tracing::warn!(request_id = request_id, error = %message, "list query failed");
                self.result = None;
                self.last_error = Some(message.clone());
            }
        }

        true
    }

    /// Computes the view model the UI renders from.
    #[must_use]
    pub fn compute_view(&self) -> ListView {
        ListView {
            items: self.items().to_vec(),
            previous_page: self.previous_page(),
            total: self.total(),
            loading: self.is_loading(),
            search_input_value: self.search_input_value.clone(),
            page: self.page,
            page_size: self.page_size,
            term: self.term.clone(),
            error: self.last_error.clone(),
            last_resolved_at: self.last_resolved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RetreatPolicy;

    fn state_with_cursor(previous_page: u32) -> ListState {
        let mut state = ListState::new(20, CursorConvention::default());
        state.result = Some(QueryResult {
            total: Some(100),
            previous_page: Some(previous_page),
            items: Some(vec![]),
        });
        state
    }

    #[test]
    fn blank_input_commits_no_term() {
        let mut state = ListState::new(20, CursorConvention::default());
        state.term = Some("klee".to_string());
        state.set_search_input_value("   ");

        assert!(state.commit_search());
        assert_eq!(state.term, None);
    }

    #[test]
    fn commit_resets_page_even_with_same_term() {
        let mut state = state_with_cursor(2);
        state.page = 3;
        state.search_input_value = "klee".to_string();
        state.term = Some("klee".to_string());

        assert!(state.commit_search());
        assert_eq!(state.page, FIRST_PAGE);
        assert!(!state.commit_search());
    }

    #[test]
    fn typing_does_not_touch_query_parameters() {
        let mut state = state_with_cursor(4);
        state.page = 5;
        let before = state.params();

        assert!(state.set_search_input_value("david"));
        assert!(!state.set_search_input_value("david"));
        assert_eq!(state.params(), before);
    }

    #[test]
    fn advance_reads_cursor_not_page() {
        let mut state = state_with_cursor(1);
        assert!(state.advance_page().unwrap());
        assert_eq!(state.page, 3);
        assert!(!state.advance_page().unwrap());
        assert_eq!(state.page, 3);
    }

    #[test]
    fn advance_overflow_leaves_page_alone() {
        let mut state = state_with_cursor(u32::MAX);
        state.page = 9;
        assert!(state.advance_page().is_err());
        assert_eq!(state.page, 9);
    }

    #[test]
    fn retreat_without_cursor_clamps_by_default() {
        let mut state = ListState::new(20, CursorConvention::default());
        state.page = 2;
        assert!(state.retreat_page());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn retreat_without_cursor_follows_cursor_when_configured() {
        let mut state = ListState::new(20, CursorConvention::new(2, RetreatPolicy::FollowCursor));
        assert!(state.retreat_page());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = ListState::new(20, CursorConvention::default());
        let first = state.begin_query();
        let second = state.begin_query();

        let stale = QueryResponse::resolved(
            first.request_id,
            QueryResult {
                total: Some(1),
                ..QueryResult::default()
            },
        );
        assert!(!state.apply_response(&stale));
        assert!(state.is_loading());

        let fresh = QueryResponse::resolved(
            second.request_id,
            QueryResult {
                total: Some(2),
                ..QueryResult::default()
            },
        );
        assert!(state.apply_response(&fresh));
        assert!(!state.is_loading());
        assert_eq!(state.total(), 2);
    }

    #[test]
    fn failure_clears_result_and_records_error() {
        let mut state = state_with_cursor(3);
        let request = state.begin_query();

        assert!(state.apply_response(&QueryResponse::Failed {
            request_id: request.request_id,
            message: "offline".to_string(),
        }));

        let view = state.compute_view();
        assert_eq!(view.previous_page, 0);
        assert_eq!(view.total, 0);
        assert!(view.items.is_empty());
        assert_eq!(view.error.as_deref(), Some("offline"));
        assert!(!view.loading);
    }

    #[test]
    fn stale_result_stays_visible_while_loading() {
        let mut state = state_with_cursor(3);
        state.begin_query();

        let view = state.compute_view();
        assert!(view.loading);
        assert_eq!(view.previous_page, 3);
        assert_eq!(view.total, 100);
    }
}
