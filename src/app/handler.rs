//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes UI events and query
//! responses, translating them into state changes and actions.
//!
//! # Architecture
//!
//! 1. Events arrive from the UI or from the query worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ListState` methods
//! 4. A query is issued whenever the query parameters changed
//!
//! # Example
//!
//! ```rust
//! use artlist::{handle_event, Action, CursorConvention, Event, ListState};
//!
//! let mut state = ListState::new(20, CursorConvention::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions.as_slice(), [Action::IssueQuery(_)]));
//! assert!(state.is_loading());
//! # Ok::<(), artlist::ArtlistError>(())
//! ```

use crate::app::{Action, ListState};
use crate::domain::error::Result;
use crate::worker::QueryResponse;

/// Events triggered by the UI or by query responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The list view was created; issues the first query.
    Mount,
    /// Replaces the uncommitted search text.
    SetSearchInputValue(String),
    /// Commits the search text as the term and returns to page 1.
    CommitSearch,
    /// Moves to the next page according to the cursor convention.
    AdvancePage,
    /// Moves to the page the last result reports as previous.
    RetreatPage,
    /// Re-issues the current query unchanged.
    Refresh,
    /// Wraps the outcome of an issued query.
    QueryResponse(QueryResponse),
}

/// Processes an event, mutates list state, and returns actions to execute.
///
/// The returned flag reports whether the derived view changed and should be
/// re-rendered.
///
/// # Errors
///
/// Returns [`PageOutOfRange`](crate::ArtlistError::PageOutOfRange) when
/// advancing would overflow the page number. The state is left unchanged.
pub fn handle_event(state: &mut ListState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount | Event::Refresh => {
            Ok((true, vec![Action::IssueQuery(state.begin_query())]))
        }
        Event::SetSearchInputValue(text) => {
            let changed = state.set_search_input_value(text);
            tracing::trace!(len = text.len(), changed = changed, "search input updated");
            Ok((changed, vec![]))
        }
        Event::CommitSearch => {
            let changed = state.commit_search();
            Ok(reissue_if(state, changed))
        }
        Event::AdvancePage => {
            let changed = state.advance_page()?;
            Ok(reissue_if(state, changed))
        }
        Event::RetreatPage => {
            let changed = state.retreat_page();
            Ok(reissue_if(state, changed))
        }
        Event::QueryResponse(response) => {
            let applied = state.apply_response(response);
            Ok((applied, vec![]))
        }
    }
}

/// Issues a query for the new parameters, or nothing if they did not change.
fn reissue_if(state: &mut ListState, changed: bool) -> (bool, Vec<Action>) {
    if changed {
        (true, vec![Action::IssueQuery(state.begin_query())])
    } else {
        tracing::debug!("query parameters unchanged, skipping query");
        (false, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CursorConvention, QueryParams, QueryResult};

    fn issued(actions: &[Action]) -> Vec<QueryParams> {
        actions
            .iter()
            .map(|action| match action {
                Action::IssueQuery(request) => request.params.clone(),
            })
            .collect()
    }

    fn resolve(state: &mut ListState, result: QueryResult) {
        let crate::app::modes::QueryPhase::Loading { request_id } = state.phase else {
            panic!("no query outstanding");
        };
        handle_event(
            state,
            &Event::QueryResponse(QueryResponse::resolved(request_id, result)),
        )
        .unwrap();
    }

    #[test]
    fn mount_issues_first_page_without_term() {
        let mut state = ListState::new(20, CursorConvention::default());
        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();

        assert!(render);
        assert_eq!(issued(&actions), vec![QueryParams::new(20, 1, None)]);
        assert!(state.is_loading());
    }

    #[test]
    fn typing_issues_no_query() {
        let mut state = ListState::new(20, CursorConvention::default());
        let (render, actions) =
            handle_event(&mut state, &Event::SetSearchInputValue("bowie".to_string())).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.term, None);
    }

    #[test]
    fn committing_a_search_from_page_three_queries_page_one() {
        let mut state = ListState::new(20, CursorConvention::default());
        state.page = 3;
        handle_event(&mut state, &Event::SetSearchInputValue("david bowie".to_string())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::CommitSearch).unwrap();
        assert_eq!(
            issued(&actions),
            vec![QueryParams::new(20, 1, Some("david bowie".to_string()))]
        );
    }

    #[test]
    fn recommitting_the_same_search_issues_nothing() {
        let mut state = ListState::new(20, CursorConvention::default());
        handle_event(&mut state, &Event::CommitSearch).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::CommitSearch).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn advance_then_retreat_read_the_same_cursor() {
        let mut state = ListState::new(20, CursorConvention::default());
        handle_event(&mut state, &Event::Mount).unwrap();
        resolve(
            &mut state,
            QueryResult {
                total: Some(100),
                previous_page: Some(2),
                items: Some(vec![]),
            },
        );
        state.page = 3;

        let (_, advanced) = handle_event(&mut state, &Event::AdvancePage).unwrap();
        assert_eq!(issued(&advanced)[0].page, 4);

        let (_, retreated) = handle_event(&mut state, &Event::RetreatPage).unwrap();
        assert_eq!(issued(&retreated)[0].page, 2);
    }

    #[test]
    fn refresh_reissues_unchanged_parameters() {
        let mut state = ListState::new(20, CursorConvention::default());
        handle_event(&mut state, &Event::Mount).unwrap();
        resolve(&mut state, QueryResult::default());

        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert_eq!(issued(&actions), vec![QueryParams::new(20, 1, None)]);
        assert!(state.is_loading());
    }

    #[test]
    fn stale_response_does_not_render() {
        let mut state = ListState::new(20, CursorConvention::default());
        handle_event(&mut state, &Event::Mount).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::QueryResponse(QueryResponse::resolved(99, QueryResult::default())),
        )
        .unwrap();
        assert!(!render);
        assert!(state.is_loading());
    }
}
