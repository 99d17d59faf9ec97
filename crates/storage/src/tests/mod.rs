//! Test utilities and module declarations for storage tests.

mod visitor_tests;

use chrono::Utc;
use waitlist_core::{EmailAddress, VisitorRecord};

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn email(raw: &str) -> EmailAddress {
    EmailAddress::parse(raw).unwrap()
}

pub fn create_test_visitor(id: &str) -> VisitorRecord {
    VisitorRecord::new(
        id.to_owned(),
        "https://botvault.example/",
        "Mozilla/5.0 (test)",
        "botvault".to_owned(),
        Utc::now(),
    )
}
