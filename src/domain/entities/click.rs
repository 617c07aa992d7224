//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short URL is followed.
///
/// Append-only; never mutated after insertion.
#[derive(Debug, Clone)]
pub struct Click {
    #[allow(dead_code)]
    pub id: i64,
    pub url_hash: String,
    pub clicked_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub browser: Option<String>,
    pub platform: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        url_hash: String,
        clicked_at: DateTime<Utc>,
        ip: Option<String>,
        browser: Option<String>,
        platform: Option<String>,
    ) -> Self {
        Self {
            id,
            url_hash,
            clicked_at,
            ip,
            browser,
            platform,
        }
    }
}

/// Input data for recording a click.
///
/// The timestamp is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_hash: String,
    pub ip: Option<String>,
    pub browser: Option<String>,
    pub platform: Option<String>,
}
