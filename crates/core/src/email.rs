//! Email shape validation and normalization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_EMAIL_LEN;
use crate::error::CoreError;

#[allow(clippy::unwrap_used, reason = "static pattern is known to compile")]
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A validated, lowercased email address.
///
/// Every constructor goes through [`EmailAddress::parse`] (deserialization
/// included), so holding an `EmailAddress` means the value passed the
/// `local@domain.tld` shape check and is already in its stored form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate raw form input and normalize it.
    ///
    /// Input is not trimmed: surrounding whitespace fails the shape check.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::InvalidEmail("empty input".to_owned()));
        }
        if raw.len() > MAX_EMAIL_LEN {
            return Err(CoreError::InvalidEmail(format!(
                "longer than {MAX_EMAIL_LEN} bytes"
            )));
        }
        if !EMAIL_SHAPE.is_match(raw) {
            return Err(CoreError::InvalidEmail("expected local@domain.tld".to_owned()));
        }
        Ok(Self(normalize_email(raw)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Domain part, used as a low-cardinality logging field.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = CoreError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lowercase an email for comparison and storage. Idempotent.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase()
}
