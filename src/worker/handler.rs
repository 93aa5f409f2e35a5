//! Query worker that runs requests through the query executor.
//!
//! The worker is the only place where the controller's requests meet the
//! collaborator. It wraps each execution in a span parented to the issuing
//! handler's trace context, measures how long the collaborator took, and turns
//! collaborator errors into [`QueryResponse::Failed`] so the state machine never
//! sees a raw error.

use crate::domain::error::Result;
use crate::domain::QueryResult;
use crate::source::QueryExecutor;
use crate::worker::{QueryRequest, QueryResponse, TraceContext};
use tracing::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Runs [`QueryRequest`]s against an executor.
#[derive(Debug)]
pub struct QueryWorker<E> {
    executor: E,
}

impl<E: QueryExecutor> QueryWorker<E> {
    #[must_use]
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Returns the wrapped executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Maps an executor outcome onto the response protocol with consistent logging.
    fn into_response(request_id: u64, result: Result<QueryResult>) -> QueryResponse {
        match result {
            Ok(result) => {
                tracing::debug!(
                    request_id = request_id,
                    total = result.total(),
                    items = result.items().len(),
                    "query resolved"
                );
                QueryResponse::resolved(request_id, result)
            }
            Err(e) => {
                tracing::debug!(request_id = request_id, error = %e, "query failed");
                QueryResponse::Failed {
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Rebuilds the OpenTelemetry parent context carried by a request.
    fn parent_context(trace_context: &TraceContext) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }

    /// Executes one request and returns its response.
    ///
    /// Never fails: executor errors become [`QueryResponse::Failed`].
    pub async fn handle_message(&self, request: QueryRequest) -> QueryResponse {
        let span = tracing::debug_span!("worker_handle_query",
            request_id = request.request_id,
            page = request.params.page,
            page_size = request.params.page_size,
            term = ?request.params.term
        );

        if let Some(parent) = request.trace_context.as_ref().and_then(Self::parent_context) {
            span.set_parent(parent);
        }

        let request_id = request.request_id;
        let params = request.params;

        async move {
            let started = chrono::Utc::now();
            let result = self.executor.execute(&params).await;
            let elapsed_ms = (chrono::Utc::now() - started).num_milliseconds();

            tracing::debug!(elapsed_ms = elapsed_ms, ok = result.is_ok(), "executor returned");
            Self::into_response(request_id, result)
        }
        .instrument(span)
        .await
    }
}
