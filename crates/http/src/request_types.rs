//! Request body types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Raw form value. A missing field is treated as empty input.
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisitorRequest {
    #[serde(default)]
    pub page_url: String,
    /// Overrides the `User-Agent` header when present.
    #[serde(default)]
    pub user_agent: Option<String>,
}
