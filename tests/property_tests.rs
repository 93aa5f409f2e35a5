//! Property tests for page and search transitions.

use artlist::{handle_event, CursorConvention, Event, ListState, QueryResult, RetreatPolicy};
use proptest::prelude::*;

fn state_after(previous_page: u32, page: u32, policy: RetreatPolicy) -> ListState {
    let mut state = ListState::new(20, CursorConvention::new(2, policy));
    state.page = page;
    state.result = Some(QueryResult {
        total: Some(1_000),
        previous_page: Some(previous_page),
        items: Some(vec![]),
    });
    state
}

proptest! {
    #[test]
    fn advance_lands_two_past_the_cursor(previous in 0u32..1_000_000, page in 1u32..1_000_000) {
        let mut state = state_after(previous, page, RetreatPolicy::default());
        handle_event(&mut state, &Event::AdvancePage).unwrap();
        prop_assert_eq!(state.page, previous + 2);
    }

    #[test]
    fn retreat_lands_on_the_cursor(previous in 1u32..1_000_000, page in 1u32..1_000_000) {
        let mut state = state_after(previous, page, RetreatPolicy::ClampToFirstPage);
        handle_event(&mut state, &Event::RetreatPage).unwrap();
        prop_assert_eq!(state.page, previous);
    }

    #[test]
    fn follow_cursor_retreat_never_clamps(previous in 0u32..1_000_000, page in 1u32..1_000_000) {
        let mut state = state_after(previous, page, RetreatPolicy::FollowCursor);
        handle_event(&mut state, &Event::RetreatPage).unwrap();
        prop_assert_eq!(state.page, previous);
    }

    #[test]
    fn clamped_retreat_never_leaves_page_one(page in 1u32..1_000_000) {
        let mut state = state_after(0, page, RetreatPolicy::ClampToFirstPage);
        handle_event(&mut state, &Event::RetreatPage).unwrap();
        prop_assert!(state.page >= 1);
    }

    #[test]
    fn commit_always_returns_to_page_one(page in 1u32..1_000_000, text in "\\PC{0,24}") {
        let mut state = state_after(page.saturating_sub(1), page, RetreatPolicy::default());
        handle_event(&mut state, &Event::SetSearchInputValue(text.clone())).unwrap();
        handle_event(&mut state, &Event::CommitSearch).unwrap();

        prop_assert_eq!(state.page, 1);
        if text.trim().is_empty() {
            prop_assert_eq!(state.term, None);
        } else {
            prop_assert_eq!(state.term, Some(text));
        }
    }

    #[test]
    fn typing_never_moves_the_query(page in 1u32..1_000_000, text in "\\PC{0,24}") {
        let mut state = state_after(0, page, RetreatPolicy::default());
        let (_, actions) =
            handle_event(&mut state, &Event::SetSearchInputValue(text)).unwrap();

        prop_assert!(actions.is_empty());
        prop_assert_eq!(state.page, page);
        prop_assert_eq!(state.term, None);
    }

    #[test]
    fn whitespace_commits_no_filter(text in "[ \\t\\n]{0,8}") {
        let mut state = ListState::new(20, CursorConvention::default());
        state.term = Some("klee".to_string());
        handle_event(&mut state, &Event::SetSearchInputValue(text)).unwrap();
        handle_event(&mut state, &Event::CommitSearch).unwrap();
        prop_assert_eq!(state.term, None);
    }
}
