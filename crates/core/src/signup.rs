use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_VISITOR_FIELD_LEN;
use crate::email::EmailAddress;

/// A stored waitlist registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub id: String,
    pub email: EmailAddress,
    pub project_name: String,
    pub created_at: DateTime<Utc>,
}

impl SignupRecord {
    #[must_use]
    pub const fn new(
        id: String,
        email: EmailAddress,
        project_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, email, project_name, created_at }
    }
}

/// A stored page-view analytics entry. Write-only from the service's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub id: String,
    pub page_url: String,
    pub user_agent: String,
    pub project_name: String,
    pub created_at: DateTime<Utc>,
}

impl VisitorRecord {
    /// Build a visitor record, truncating oversized client-supplied fields.
    #[must_use]
    pub fn new(
        id: String,
        page_url: &str,
        user_agent: &str,
        project_name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            page_url: truncate_on_char_boundary(page_url, MAX_VISITOR_FIELD_LEN).to_owned(),
            user_agent: truncate_on_char_boundary(user_agent, MAX_VISITOR_FIELD_LEN).to_owned(),
            project_name,
            created_at,
        }
    }
}

fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
