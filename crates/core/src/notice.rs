//! Transient user-facing notices.
//!
//! A [`NoticeSlot`] holds at most one notice. Showing a new notice replaces
//! the current one and restarts its timer; the slot reads as empty once the
//! time-to-live has passed.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::constants::{
    MSG_DUPLICATE_EMAIL, MSG_INSERT_FAILED, MSG_INVALID_EMAIL, MSG_REGISTRATION_FAILED,
    MSG_SIGNUP_SUCCESS,
};
use crate::error::SignupErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Which storage call failed when persistence was unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Lookup,
    Insert,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }

    #[must_use]
    pub fn signup_success() -> Self {
        Self::success(MSG_SIGNUP_SUCCESS)
    }

    /// Notice shown for a failed signup.
    ///
    /// `stage` only matters for `PersistenceUnavailable`: an insert failure
    /// reads differently from a failed duplicate lookup.
    #[must_use]
    pub fn signup_failure(kind: SignupErrorKind, stage: Option<FailureStage>) -> Self {
        let message = match (kind, stage) {
            (SignupErrorKind::InvalidInput, _) => MSG_INVALID_EMAIL,
            (SignupErrorKind::DuplicateEmail, _) => MSG_DUPLICATE_EMAIL,
            (SignupErrorKind::PersistenceUnavailable, Some(FailureStage::Insert)) => {
                MSG_INSERT_FAILED
            },
            (SignupErrorKind::PersistenceUnavailable, _) | (SignupErrorKind::Unexpected, _) => {
                MSG_REGISTRATION_FAILED
            },
        };
        Self::error(message)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NoticeKind::Error)
    }
}

#[derive(Debug, Clone)]
pub struct NoticeSlot {
    ttl: Duration,
    current: Option<(Notice, Instant)>,
}

impl NoticeSlot {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replace whatever is showing; the timer restarts from `now`.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        self.current = Some((notice, now + self.ttl));
    }

    /// The visible notice, if any has not yet expired.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        match &self.current {
            Some((notice, expires_at)) if now < *expires_at => Some(notice),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
