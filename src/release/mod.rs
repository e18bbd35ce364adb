//! Latest-release metadata.
//!
//! Every lookup here degrades instead of failing: a missing releases list
//! means "no data", and a commit that cannot be resolved is simply omitted.

mod timestamp;

pub use timestamp::{build_timestamp, format_build_time, parse_timestamp};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::provider::{Release, ReleaseSource};

/// What the page shows about the most recent release.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseSummary {
    pub built_at: Option<DateTime<Utc>>,
    pub tag_name: Option<String>,
    pub commit_sha: Option<String>,
}

/// First entry of the releases list. The API lists newest first, including
/// pre-releases, so that entry is the latest build.
#[tracing::instrument(skip(source))]
pub async fn latest_release<S: ReleaseSource + ?Sized>(source: &S) -> Option<Release> {
    match source.list_releases().await {
        Ok(releases) => {
            let latest = releases.into_iter().next();
            if latest.is_none() {
                info!("No releases published yet");
            }
            latest
        }
        Err(e) => {
            warn!("Failed to list releases: {:#}", e);
            None
        }
    }
}

/// Resolve a tag to the commit it points at.
///
/// The commits endpoint accepts a tag name directly. If that fails the tag
/// ref is resolved instead, and an annotated tag is dereferenced once more to
/// reach its commit.
#[tracing::instrument(skip(source))]
pub async fn resolve_commit<S: ReleaseSource + ?Sized>(source: &S, tag: &str) -> Option<String> {
    match source.get_commit_by_ref(tag).await {
        Ok(commit) => return Some(commit.sha),
        Err(e) => debug!("Commit lookup for {} failed ({:#}), resolving tag ref", tag, e),
    }

    let git_ref = match source.get_tag_ref(tag).await {
        Ok(git_ref) => git_ref,
        Err(e) => {
            debug!("Tag ref lookup for {} failed: {:#}", tag, e);
            return None;
        }
    };

    let object = git_ref.object?;
    let sha = object.sha.clone()?;

    if !object.is_annotated_tag() {
        return Some(sha);
    }

    match source.get_tag_object(&sha).await {
        Ok(tag_object) => Some(tag_object.object.and_then(|o| o.sha).unwrap_or(sha)),
        Err(e) => {
            debug!("Tag object lookup for {} failed: {:#}", sha, e);
            Some(sha)
        }
    }
}

/// Summarize the latest release, or `None` when there is no release data.
#[tracing::instrument(skip(source))]
pub async fn fetch_summary<S: ReleaseSource + ?Sized>(source: &S) -> Option<ReleaseSummary> {
    let latest = latest_release(source).await?;

    let built_at = build_timestamp(&latest);
    let prerelease = latest.prerelease;
    let tag_name = latest.tag_name.filter(|t| !t.is_empty());

    let commit_sha = match &tag_name {
        Some(tag) => resolve_commit(source, tag).await,
        None => None,
    };

    debug!(
        "Latest release: tag={:?} prerelease={} built_at={:?} commit={:?}",
        tag_name, prerelease, built_at, commit_sha
    );

    Some(ReleaseSummary {
        built_at,
        tag_name,
        commit_sha,
    })
}
