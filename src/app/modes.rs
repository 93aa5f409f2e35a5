//! Query lifecycle state for the list.
//!
//! # State Machine
//!
//! ```text
//!            parameter change / refresh
//!   ┌──────┐ ─────────────────────────▶ ┌─────────────────────┐
//!   │ Idle │                            │ Loading{request_id} │ ──┐ newer change:
//!   └──────┘ ◀───────────────────────── └─────────────────────┘ ◀─┘ id replaced
//!             response for request_id
//! ```
//!
//! `Idle` shows the last resolved result, or nothing before the first one.

/// Whether a query is outstanding, and which one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryPhase {
    /// No query outstanding.
    #[default]
    Idle,

    /// Waiting for the response to `request_id`.
    ///
    /// Responses carrying any other id are stale and ignored.
    Loading {
        /// Id of the newest issued request.
        request_id: u64,
    },
}

impl QueryPhase {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Returns `true` if `request_id` is the outstanding request.
    #[must_use]
    pub const fn awaits(&self, request_id: u64) -> bool {
        match self {
            Self::Loading { request_id: pending } => *pending == request_id,
            Self::Idle => false,
        }
    }
}
