//! View model representing renderable list state.
//!
//! [`ListView`] is computed from [`ListState`](crate::app::ListState) on demand
//! and handed to whatever renders the list. It contains no business logic, only
//! display-ready data with every absent field already defaulted.
//!
//! # Example
//!
//! ```rust
//! use artlist::ListView;
//!
//! let view = ListView {
//!     total: 45,
//!     page: 2,
//!     page_size: 20,
//!     previous_page: 1,
//!     ..ListView::default()
//! };
//! assert!(view.has_previous_page());
//! assert!(view.has_next_page());
//! ```

use crate::domain::Artwork;
use serde::Serialize;

/// Derived view state of one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Items of the displayed page; empty until a result resolves.
    pub items: Vec<Artwork>,

    /// Previous-page cursor of the displayed result, `0` when absent.
    pub previous_page: u32,

    /// Total matching items, `0` when absent.
    pub total: u64,

    /// Whether a query is outstanding.
    pub loading: bool,

    /// Uncommitted search field text.
    pub search_input_value: String,

    /// Page requested by the current query.
    pub page: u32,

    /// Items per page.
    pub page_size: u32,

    /// Committed search term.
    pub term: Option<String>,

    /// Message of the last failed query.
    pub error: Option<String>,

    /// Unix timestamp of the displayed result.
    pub last_resolved_at: Option<i64>,
}

impl ListView {
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.previous_page > 0
    }

    /// Whether items exist beyond the requested page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) * u64::from(self.page_size) < self.total
    }

    /// Whether there is nothing to show and nothing on the way.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_has_no_next() {
        let view = ListView {
            total: 40,
            page: 2,
            page_size: 20,
            ..ListView::default()
        };
        assert!(!view.has_next_page());
    }

    #[test]
    fn loading_list_is_not_empty() {
        let view = ListView {
            loading: true,
            ..ListView::default()
        };
        assert!(!view.is_empty());
        assert!(ListView::default().is_empty());
    }
}
