use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};

use crate::AppState;
use crate::request_types::VisitorRequest;
use crate::response_types::VisitorAcceptedResponse;

/// Record a page view. Always 202: the insert runs detached and its outcome
/// is never reported back. An unreadable body records an empty page URL.
pub async fn track_visitor(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<VisitorRequest>, JsonRejection>,
) -> (StatusCode, Json<VisitorAcceptedResponse>) {
    let req = payload.map_or_else(
        |rejection| {
            tracing::debug!(error = %rejection, "unreadable visitor body");
            VisitorRequest::default()
        },
        |Json(req)| req,
    );

    let user_agent = req.user_agent.unwrap_or_else(|| {
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    });

    // detached: the handle is dropped, the write still completes
    let _ = state.visitor_tracker.track(req.page_url, user_agent);

    (StatusCode::ACCEPTED, Json(VisitorAcceptedResponse { accepted: true }))
}
