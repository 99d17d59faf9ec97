//! HTTP API server for the waitlist.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(missing_debug_implementations, reason = "State holds trait objects")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use waitlist_core::WaitlistConfig;
use waitlist_service::{SubmitThrottle, VisitorTracker, WaitlistService};
use waitlist_storage::StorageBackend;

pub use response_types::{
    NoticeBody, ReadinessResponse, SignupResponse, VersionResponse, VisitorAcceptedResponse,
};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Backend handle, kept for readiness probes
    pub storage: StorageBackend,
    /// Signup validation, duplicate check, insert
    pub waitlist_service: Arc<WaitlistService>,
    /// Detached visitor recording
    pub visitor_tracker: VisitorTracker,
    /// Per-client cooldown after a successful signup
    pub throttle: Arc<SubmitThrottle>,
    /// Key the throttle on `X-Forwarded-For` instead of the peer address
    pub trust_forwarded_for: bool,
    /// Reported to clients as `dismiss_after_ms`
    pub notice_ttl: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(storage: StorageBackend, config: &WaitlistConfig) -> Self {
        let shared = Arc::new(storage.clone());
        Self {
            waitlist_service: Arc::new(WaitlistService::new(
                Arc::clone(&shared) as Arc<dyn waitlist_storage::SignupStore>,
                config.project_name.clone(),
            )),
            visitor_tracker: VisitorTracker::new(shared, config.project_name.clone()),
            throttle: Arc::new(SubmitThrottle::new(config.submit_cooldown)),
            trust_forwarded_for: config.trust_forwarded_for,
            notice_ttl: config.notice_ttl,
            storage,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/api/waitlist", post(handlers::waitlist::submit_signup))
        .route("/api/visitors", post(handlers::visitors::track_visitor))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    let backend = state.storage.kind();
    match state.storage.ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadinessResponse { status: "ready", backend, message: None })),
        Err(e) => {
            tracing::warn!(error = %e, backend, "readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    backend,
                    message: Some(e.to_string()),
                }),
            )
        },
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
