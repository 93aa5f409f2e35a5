//! Query worker for running list queries outside the state machine.
//!
//! The state machine in [`crate::app`] only ever emits requests and consumes
//! responses; this module is where those requests are actually executed.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation wrapping a [`QueryExecutor`](crate::source::QueryExecutor)

pub mod handler;
pub mod messages;

pub use handler::QueryWorker;
pub use messages::{QueryRequest, QueryResponse, TraceContext};
