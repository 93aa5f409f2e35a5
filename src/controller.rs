//! List controller tying the state machine to a query executor.
//!
//! [`ListController`] is what a UI holds for one list view. It owns the
//! [`ListState`], turns UI calls into [`Event`]s, keeps the query the state
//! machine asked for, and runs it through a [`QueryWorker`].
//!
//! ```text
//! ┌──────────────┐ commit_search / advance_page / …  ┌────────────────┐
//! │      UI      │ ─────────────────────────────────▶ │ ListController │
//! │              │ ◀───────────────────────── view()  │                │
//! └──────────────┘                                    └────────────────┘
//!                                                        │ pending request
//!                                                        ▼
//!                                     settle() ──▶ QueryWorker ──▶ QueryExecutor
//! ```
//!
//! Only the newest request is ever kept pending. Hosts with their own task
//! scheduling can use [`take_pending`](ListController::take_pending) and
//! [`receive`](ListController::receive) instead of `settle`; responses to
//! superseded requests are dropped by the state machine either way.

use crate::app::{handle_event, Action, Event, ListState};
use crate::domain::error::Result;
use crate::domain::QueryParams;
use crate::source::QueryExecutor;
use crate::ui::ListView;
use crate::worker::{QueryRequest, QueryResponse, QueryWorker};
use crate::Config;

/// Pagination and search controller for one list view.
#[derive(Debug)]
pub struct ListController<E> {
    state: ListState,
    worker: QueryWorker<E>,

    /// Newest query the state machine issued that has not been handed out yet.
    pending: Option<QueryRequest>,
}

impl<E: QueryExecutor> ListController<E> {
    /// Creates a controller and issues the first query.
    ///
    /// The first query is left pending, so the view starts out loading.
    ///
    /// # Errors
    ///
    /// Returns [`ArtlistError::Config`](crate::ArtlistError::Config) if the
    /// configuration is invalid.
    pub fn new(config: &Config, executor: E) -> Result<Self> {
        config.validate()?;

        let mut controller = Self {
            state: ListState::new(config.page_size, config.cursor_convention()),
            worker: QueryWorker::new(executor),
            pending: None,
        };
        controller.dispatch(&Event::Mount)?;

        tracing::debug!(page_size = config.page_size, "list controller created");
        Ok(controller)
    }

    /// Feeds one event through the state machine and executes its actions.
    ///
    /// Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (changed, actions) = handle_event(&mut self.state, event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(changed)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::IssueQuery(request) => {
                if let Some(superseded) = self.pending.replace(request) {
                    tracing::debug!(
                        superseded = superseded.request_id,
                        "dropping unsent query"
                    );
                }
            }
        }
    }

    /// Updates the uncommitted search text. Issues no query.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every other handler.
    pub fn set_search_input_value(&mut self, text: impl Into<String>) -> Result<bool> {
        self.dispatch(&Event::SetSearchInputValue(text.into()))
    }

    /// Commits the search text as the filter and returns to page 1.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every other handler.
    pub fn commit_search(&mut self) -> Result<bool> {
        self.dispatch(&Event::CommitSearch)
    }

    /// Moves to the next page.
    ///
    /// # Errors
    ///
    /// Returns [`PageOutOfRange`](crate::ArtlistError::PageOutOfRange) if the
    /// next page number would overflow.
    pub fn advance_page(&mut self) -> Result<bool> {
        self.dispatch(&Event::AdvancePage)
    }

    /// Moves to the page the displayed result reports as previous.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every other handler.
    pub fn retreat_page(&mut self) -> Result<bool> {
        self.dispatch(&Event::RetreatPage)
    }

    /// Re-issues the current query.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every other handler.
    pub fn refresh(&mut self) -> Result<bool> {
        self.dispatch(&Event::Refresh)
    }

    /// Feeds a query response back in. Stale responses are ignored.
    ///
    /// # Errors
    ///
    /// Never fails in practice; returns `Result` like every other handler.
    pub fn receive(&mut self, response: QueryResponse) -> Result<bool> {
        self.dispatch(&Event::QueryResponse(response))
    }

    /// Hands out the pending query for the caller to execute.
    pub fn take_pending(&mut self) -> Option<QueryRequest> {
        self.pending.take()
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs pending queries until none remain and applies their responses.
    ///
    /// Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Never fails in practice: collaborator failures are applied as
    /// [`QueryResponse::Failed`] and show up in [`ListView::error`].
    pub async fn settle(&mut self) -> Result<bool> {
        let mut changed = false;
        while let Some(request) = self.pending.take() {
            let response = self.worker.handle_message(request).await;
            changed |= self.receive(response)?;
        }
        Ok(changed)
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        self.state.compute_view()
    }

    #[must_use]
    pub fn params(&self) -> QueryParams {
        self.state.params()
    }

    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    #[must_use]
    pub fn executor(&self) -> &E {
        self.worker.executor()
    }
}
