//! DTOs for link management endpoints.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The destination URL (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL exceeds 2048 characters"))]
    pub target_url: String,

    /// Optional custom short code (6-8 alphanumeric characters).
    #[validate(regex(
        path = *CUSTOM_CODE_REGEX,
        message = "Code must be 6-8 alphanumeric characters"
    ))]
    pub custom_code: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub code: String,
    pub target_url: String,
    pub clicks: i32,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Confirmation payload for destructive operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
