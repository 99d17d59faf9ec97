use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use waitlist_core::Notice;

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::SignupRequest;
use crate::response_types::{NoticeBody, SignupResponse, millis};

const X_FORWARDED_FOR: &str = "x-forwarded-for";

pub async fn submit_signup(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable signup body");
        ApiError::unreadable_body(state.notice_ttl)
    })?;

    let client = client_key(&headers, peer, state.trust_forwarded_for);
    if let Err(remaining) = state.throttle.check(&client).await {
        tracing::debug!(client = %client, ?remaining, "signup suppressed during cooldown");
        return Err(ApiError::cooling_down(remaining, state.notice_ttl));
    }

    let record = state
        .waitlist_service
        .submit(&req.email)
        .await
        .map_err(|e| ApiError::from_service(&e, state.notice_ttl))?;

    state.throttle.arm(&client).await;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            body: NoticeBody::new(Notice::signup_success(), state.notice_ttl),
            email: record.email,
            cooldown_ms: millis(state.throttle.window()),
        }),
    ))
}

/// Throttle key for a request: the first `X-Forwarded-For` hop when trusted
/// and present, else the peer IP.
fn client_key(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = headers
            .get(X_FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|hop| !hop.is_empty());
        if let Some(hop) = forwarded {
            return hop.to_owned();
        }
    }
    peer.ip().to_string()
}
