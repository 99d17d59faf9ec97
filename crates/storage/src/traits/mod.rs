//! Storage backend trait abstraction
//!
//! Defines the async operations the waitlist consumes from its persistence
//! collaborator. Services hold these as trait objects so any backend (or a
//! test double) can sit behind them.

pub mod signup;
pub mod visitor;

pub use signup::SignupStore;
pub use visitor::VisitorStore;
