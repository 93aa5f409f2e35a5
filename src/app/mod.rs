//! Application layer: the pagination and search state machine.
//!
//! This module is pure: it never awaits and never calls the query collaborator.
//! Handlers mutate [`ListState`] and describe the queries to run as
//! [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! UI handler → Event → handle_event → ListState mutation → Action::IssueQuery
//!                 ↑                                               ↓
//!                 └──────── Event::QueryResponse ◀── query worker ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Query lifecycle phase
//! - [`state`]: List state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::QueryPhase;
pub use state::{ListState, FIRST_PAGE};
