//! Service layer for the waitlist
//!
//! Centralizes business logic between the HTTP/CLI surfaces and storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Services hold trait objects")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod signup_form;
mod throttle;
mod visitor_tracker;
mod waitlist_service;

pub use error::ServiceError;
pub use signup_form::{SignupForm, SubmitOutcome};
pub use throttle::SubmitThrottle;
pub use visitor_tracker::VisitorTracker;
pub use waitlist_service::WaitlistService;
