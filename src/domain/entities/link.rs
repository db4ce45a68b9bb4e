//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counters.
///
/// The short code is the primary key; both the code and the target URL are
/// immutable once the row exists. Only the redirect operation mutates a
/// link, bumping `clicks` and stamping `last_clicked`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub clicks: i32,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
///
/// Counters are not part of the input: a freshly inserted link always has
/// `clicks = 0`, `last_clicked = NULL`, and a store-assigned `created_at`.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
