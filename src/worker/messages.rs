//! Query request and response types exchanged with the query worker.
//!
//! This module defines the protocol between the controller and the worker that
//! runs queries through the [`QueryExecutor`](crate::source::QueryExecutor). It
//! also carries distributed tracing context so spans created while a query is
//! outstanding link back to the handler that issued it.

use crate::domain::{QueryParams, QueryResult};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-task span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so the worker can
/// parent its span to the issuing handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across tasks.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span has no valid OpenTelemetry context,
    /// which is the case whenever tracing was not initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::trace!("span context is not valid");
            None
        }
    }

    /// Renders the W3C `traceparent` header value for this context.
    ///
    /// Executors that talk to a remote service can forward it so server-side
    /// spans join the client trace.
    ///
    /// # Examples
    ///
    /// ```
    /// use artlist::worker::TraceContext;
    ///
    /// let context = TraceContext {
    ///     trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
    ///     parent_span_id: "00f067aa0ba902b7".to_string(),
    /// };
    /// assert_eq!(
    ///     context.traceparent(),
    ///     "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01"
    /// );
    /// ```
    #[must_use]
    pub fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_span_id)
    }
}

/// A query to run, tagged with the id the controller expects back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Monotonically increasing id; only the newest outstanding id is applied.
    pub request_id: u64,

    /// Variables to run the query with.
    pub params: QueryParams,

    /// Trace context for linking spans across tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_context: Option<TraceContext>,
}

impl QueryRequest {
    /// Create a request with the current trace context attached.
    #[must_use]
    pub fn new(request_id: u64, params: QueryParams) -> Self {
        Self {
            request_id,
            params,
            trace_context: TraceContext::from_current(),
        }
    }
}

/// Outcome of one [`QueryRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryResponse {
    /// The collaborator returned a result, possibly partial.
    Resolved {
        /// Id of the request this answers.
        request_id: u64,

        /// Result as reported by the collaborator.
        result: QueryResult,

        /// Unix timestamp at which the result arrived.
        resolved_at: i64,
    },

    /// The collaborator failed.
    Failed {
        /// Id of the request this answers.
        request_id: u64,

        /// Human-readable error message.
        message: String,
    },
}

impl QueryResponse {
    /// Id of the request this response answers.
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        match self {
            Self::Resolved { request_id, .. } | Self::Failed { request_id, .. } => *request_id,
        }
    }

    /// Builds a `Resolved` response stamped with the current time.
    #[must_use]
    pub fn resolved(request_id: u64, result: QueryResult) -> Self {
        Self::Resolved {
            request_id,
            result,
            resolved_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_outside_a_trace_carry_no_context() {
        let request = QueryRequest::new(1, QueryParams::new(20, 1, None));
        assert_eq!(request.trace_context, None);

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("trace_context").is_none());
    }

    #[test]
    fn both_response_kinds_report_their_request() {
        assert_eq!(QueryResponse::resolved(4, QueryResult::default()).request_id(), 4);
        let failed = QueryResponse::Failed {
            request_id: 9,
            message: "timeout".to_string(),
        };
        assert_eq!(failed.request_id(), 9);
    }
}
