//! Core types for the waitlist service
//!
//! This crate contains domain types shared across all other crates.

pub mod config;
pub mod constants;
pub mod cooldown;
pub mod email;
pub mod env_config;
mod error;
pub mod notice;
mod signup;

pub use config::WaitlistConfig;
pub use constants::*;
pub use cooldown::Cooldown;
pub use email::{EmailAddress, normalize_email};
pub use error::*;
pub use notice::{FailureStage, Notice, NoticeKind, NoticeSlot};
pub use signup::{SignupRecord, VisitorRecord};
