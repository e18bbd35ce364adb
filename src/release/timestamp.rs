use chrono::{DateTime, Utc};
use log::warn;

use crate::provider::Release;

/// Parse an ISO 8601 timestamp as returned by the API.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(t) => Some(t.with_timezone(&Utc)),
        Err(e) => {
            warn!("Ignoring unparseable timestamp {:?}: {}", value, e);
            None
        }
    }
}

/// When the latest build was produced.
///
/// Each asset contributes its `updated_at`, else its `created_at`, else the
/// release's `published_at`; the newest of those wins. A release without
/// assets falls back to `published_at`.
pub fn build_timestamp(release: &Release) -> Option<DateTime<Utc>> {
    if release.assets.is_empty() {
        return release.published_at.as_deref().and_then(parse_timestamp);
    }

    release
        .assets
        .iter()
        .filter_map(|asset| {
            asset
                .updated_at
                .as_deref()
                .or(asset.created_at.as_deref())
                .or(release.published_at.as_deref())
        })
        .filter_map(parse_timestamp)
        .max()
}

/// Relative time for ages under a day, otherwise the calendar date.
pub fn format_build_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds();

    if secs < 10 {
        return "just now".to_string();
    }
    if secs < 60 {
        return format!("{}s ago", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{} mins ago", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    then.format("%Y-%m-%d").to_string()
}
