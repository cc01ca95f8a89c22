//! Task-local trace id for the request being handled.
//!
//! `RequestTrace` scopes every request future with its id, so error
//! responses and logs can pick it up without threading the request through.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Returned outside any request scope.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F: Future>(trace_id: String, future: F) -> F::Output {
    TRACE_ID.scope(trace_id, future).await
}
