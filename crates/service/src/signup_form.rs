//! Headless model of the landing-page signup form.
//!
//! Owns the same state the page does (input text, one notice, submit
//! cooldown) and drives [`WaitlistService`] the way the page's submit handler
//! would. Time is passed in so callers decide the clock.
//!
//! `submit` borrows the form mutably, so a single form never has two
//! submissions in flight.

use std::time::{Duration, Instant};

use waitlist_core::{Cooldown, Notice, NoticeSlot, SignupErrorKind, SignupRecord, WaitlistConfig};

use crate::waitlist_service::WaitlistService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(SignupRecord),
    Rejected(SignupErrorKind),
    /// Submit ignored: the form is still cooling down from a success.
    Suppressed { remaining: Duration },
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    input: String,
    notice: NoticeSlot,
    cooldown: Cooldown,
}

impl SignupForm {
    #[must_use]
    pub fn new(config: &WaitlistConfig) -> Self {
        Self {
            input: String::new(),
            notice: NoticeSlot::new(config.notice_ttl),
            cooldown: Cooldown::new(config.submit_cooldown),
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.current(now)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss();
    }

    #[must_use]
    pub fn can_submit(&self, now: Instant) -> bool {
        !self.cooldown.is_active(now)
    }

    pub async fn submit(&mut self, service: &WaitlistService, now: Instant) -> SubmitOutcome {
        if self.cooldown.is_active(now) {
            return SubmitOutcome::Suppressed { remaining: self.cooldown.remaining(now) };
        }

        match service.submit(&self.input).await {
            Ok(record) => {
                self.input.clear();
                self.notice.show(Notice::signup_success(), now);
                self.cooldown.arm(now);
                SubmitOutcome::Registered(record)
            },
            Err(err) => {
                self.notice.show(err.notice(), now);
                SubmitOutcome::Rejected(err.kind())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use waitlist_core::{EmailAddress, MSG_DUPLICATE_EMAIL, MSG_INSERT_FAILED, NoticeKind};
    use waitlist_storage::{MemoryStorage, SignupStore, StorageError};

    use super::*;

    struct ReadOnlyStore;

    #[async_trait]
    impl SignupStore for ReadOnlyStore {
        async fn find_signup(
            &self,
            _email: &EmailAddress,
        ) -> Result<Option<SignupRecord>, StorageError> {
            Ok(None)
        }

        async fn insert_signup(
            &self,
            _email: &EmailAddress,
            _project_name: &str,
        ) -> Result<SignupRecord, StorageError> {
            Err(StorageError::Unavailable("read-only replica".into()))
        }
    }

    fn setup() -> (SignupForm, WaitlistService, MemoryStorage) {
        let store = MemoryStorage::new();
        let service = WaitlistService::new(Arc::new(store.clone()), "botvault");
        (SignupForm::new(&WaitlistConfig::default()), service, store)
    }

    #[tokio::test]
    async fn test_success_clears_input_and_notice_expires() {
        let (mut form, service, _store) = setup();
        let t0 = Instant::now();
        form.set_input("Fan@Example.com");

        let outcome = form.submit(&service, t0).await;
        assert!(matches!(outcome, SubmitOutcome::Registered(ref r) if r.email.as_str() == "fan@example.com"));
        assert_eq!(form.input(), "");

        let notice = form.notice(t0).unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(form.notice(t0 + Duration::from_millis(2999)).is_some());
        assert!(form.notice(t0 + Duration::from_millis(3000)).is_none());
    }

    #[tokio::test]
    async fn test_cooldown_suppresses_then_releases() {
        let (mut form, service, store) = setup();
        let t0 = Instant::now();
        form.set_input("first@example.com");
        form.submit(&service, t0).await;

        form.set_input("second@example.com");
        let t1 = t0 + Duration::from_millis(1000);
        assert!(!form.can_submit(t1));
        let outcome = form.submit(&service, t1).await;
        assert_eq!(outcome, SubmitOutcome::Suppressed { remaining: Duration::from_millis(2000) });
        assert_eq!(store.signup_count().await, 1);

        let t2 = t0 + Duration::from_millis(3000);
        assert!(matches!(form.submit(&service, t2).await, SubmitOutcome::Registered(_)));
        assert_eq!(store.signup_count().await, 2);
    }

    #[tokio::test]
    async fn test_invalid_input_keeps_text_and_shows_error() {
        let (mut form, service, _store) = setup();
        let t0 = Instant::now();
        form.set_input("not-an-email");

        let outcome = form.submit(&service, t0).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(SignupErrorKind::InvalidInput));
        assert_eq!(form.input(), "not-an-email");
        assert!(form.notice(t0).unwrap().is_error());
        // errors do not arm the cooldown
        assert!(form.can_submit(t0));
    }

    #[tokio::test]
    async fn test_duplicate_shows_already_registered() {
        let (mut form, service, _store) = setup();
        let t0 = Instant::now();
        form.set_input("again@example.com");
        form.submit(&service, t0).await;

        let t1 = t0 + Duration::from_secs(5);
        form.set_input("AGAIN@example.com");
        let outcome = form.submit(&service, t1).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(SignupErrorKind::DuplicateEmail));
        assert_eq!(form.notice(t1).unwrap().message, MSG_DUPLICATE_EMAIL);
    }

    #[tokio::test]
    async fn test_insert_failure_shows_error_only() {
        let service = WaitlistService::new(Arc::new(ReadOnlyStore), "botvault");
        let mut form = SignupForm::new(&WaitlistConfig::default());
        let t0 = Instant::now();
        form.set_input("a@b.com");

        let outcome = form.submit(&service, t0).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(SignupErrorKind::PersistenceUnavailable));
        assert_eq!(form.notice(t0).unwrap().message, MSG_INSERT_FAILED);
        assert_eq!(form.input(), "a@b.com");
    }

    #[tokio::test]
    async fn test_separate_forms_are_not_deduplicated() {
        let (mut tab_a, service, store) = setup();
        let mut tab_b = SignupForm::new(&WaitlistConfig::default());
        let t0 = Instant::now();
        tab_a.set_input("same@example.com");
        tab_b.set_input("SAME@example.com");

        let (a, b) = tokio::join!(tab_a.submit(&service, t0), tab_b.submit(&service, t0));

        let registered =
            [&a, &b].iter().filter(|o| matches!(o, SubmitOutcome::Registered(_))).count();
        assert_eq!(registered, 1);
        assert!(
            [&a, &b].contains(&&SubmitOutcome::Rejected(SignupErrorKind::DuplicateEmail)),
            "{a:?} / {b:?}"
        );
        assert_eq!(store.signup_count().await, 1);
    }

    #[tokio::test]
    async fn test_new_notice_replaces_previous() {
        let (mut form, service, _store) = setup();
        let t0 = Instant::now();
        form.set_input("bad");
        form.submit(&service, t0).await;

        let t1 = t0 + Duration::from_millis(2500);
        form.set_input("good@example.com");
        form.submit(&service, t1).await;

        // the success notice runs its own full ttl from t1
        let shown = form.notice(t0 + Duration::from_millis(4000)).unwrap();
        assert_eq!(shown.kind, NoticeKind::Success);
    }
}
