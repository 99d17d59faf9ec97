//! Shared constants for the waitlist service.
//!
//! Centralizes timings, pool sizing, and the user-facing notice texts.

/// Project name stamped on every stored record unless overridden.
pub const DEFAULT_PROJECT_NAME: &str = "botvault";

/// How long a notice stays visible before it auto-dismisses.
pub const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// How long submits are suppressed after a successful signup.
pub const DEFAULT_SUBMIT_COOLDOWN_MS: u64 = 3000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Upper bound on accepted email length (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Upper bound on stored page URL and user agent lengths.
pub const MAX_VISITOR_FIELD_LEN: usize = 2048;

pub const MSG_SIGNUP_SUCCESS: &str = "Successfully registered!";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_DUPLICATE_EMAIL: &str = "This email is already registered";
pub const MSG_INSERT_FAILED: &str = "Failed to register email. Please try again.";
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const MSG_COOLING_DOWN: &str = "Please wait before submitting again";
