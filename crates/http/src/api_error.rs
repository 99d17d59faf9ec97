//! Typed API error for HTTP handlers.
//!
//! Converts signup failures into HTTP responses whose JSON body carries the
//! notice the page should show.

use std::time::Duration;

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use waitlist_core::{MSG_COOLING_DOWN, Notice, SignupErrorKind};
use waitlist_service::ServiceError;

use crate::response_types::{NoticeBody, millis};

/// API error with HTTP status code and a user-facing notice.
///
/// `Internal` returns the generic failure notice only; the underlying error
/// was already logged by the service.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: input failed validation.
    BadRequest(NoticeBody),
    /// 409 Conflict: email already registered.
    Conflict(NoticeBody),
    /// 429 Too Many Requests: client is inside its submit cooldown.
    TooManyRequests { body: NoticeBody, retry_after: Duration },
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(NoticeBody),
    /// 503 Service Unavailable: storage could not serve the request.
    ServiceUnavailable(NoticeBody),
}

impl ApiError {
    #[must_use]
    pub fn from_service(err: &ServiceError, dismiss_after: Duration) -> Self {
        let kind = err.kind();
        let body = NoticeBody::new(err.notice(), dismiss_after).with_error(kind);
        match kind {
            SignupErrorKind::InvalidInput => Self::BadRequest(body),
            SignupErrorKind::DuplicateEmail => Self::Conflict(body),
            SignupErrorKind::PersistenceUnavailable => Self::ServiceUnavailable(body),
            SignupErrorKind::Unexpected => Self::Internal(body),
        }
    }

    /// Body was missing, not JSON, or had the wrong shape. Reported the same
    /// way as a malformed address.
    #[must_use]
    pub fn unreadable_body(dismiss_after: Duration) -> Self {
        let kind = SignupErrorKind::InvalidInput;
        let body = NoticeBody::new(Notice::signup_failure(kind, None), dismiss_after).with_error(kind);
        Self::BadRequest(body)
    }

    #[must_use]
    pub fn cooling_down(remaining: Duration, dismiss_after: Duration) -> Self {
        let mut body = NoticeBody::new(Notice::error(MSG_COOLING_DOWN), dismiss_after);
        body.retry_after_ms = Some(millis(remaining));
        Self::TooManyRequests { body, retry_after: remaining }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::TooManyRequests { body, retry_after } => {
                // Retry-After is whole seconds; round up so clients never retry early
                let secs = retry_after.as_millis().div_ceil(1000).max(1);
                let mut resp = (status, Json(body)).into_response();
                if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                    resp.headers_mut().insert(header::RETRY_AFTER, value);
                }
                resp
            },
            Self::Internal(body) => {
                tracing::error!(status = %status, "internal server error");
                (status, Json(body)).into_response()
            },
            Self::BadRequest(body) | Self::Conflict(body) | Self::ServiceUnavailable(body) => {
                (status, Json(body)).into_response()
            },
        }
    }
}
