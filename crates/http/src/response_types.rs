//! Response types (Serialize)

use std::time::Duration;

use serde::{Deserialize, Serialize};
use waitlist_core::{EmailAddress, Notice, SignupErrorKind};

/// Body of every notice-bearing response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeBody {
    pub notice: Notice,
    pub dismiss_after_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SignupErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_ms: Option<u64>,
}

impl NoticeBody {
    #[must_use]
    pub fn new(notice: Notice, dismiss_after: Duration) -> Self {
        Self { notice, dismiss_after_ms: millis(dismiss_after), error: None, retry_after_ms: None }
    }

    #[must_use]
    pub const fn with_error(mut self, kind: SignupErrorKind) -> Self {
        self.error = Some(kind);
        self
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    #[serde(flatten)]
    pub body: NoticeBody,
    pub email: EmailAddress,
    pub cooldown_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct VisitorAcceptedResponse {
    pub accepted: bool,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

pub(crate) fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
