//! Release-hosting API abstraction.
//!
//! The metadata fetcher only needs four lookups from the hosting platform.
//! They sit behind [`ReleaseSource`] so resolution logic can run against
//! fakes without network access.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub use github::{DEFAULT_API_URL, GitHubSource};

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A file attached to a release.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ReleaseAsset {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A release as listed by the API, newest first.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Release {
    /// Version tag (e.g., "nightly")
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Publication date (ISO 8601)
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Commit {
    pub sha: String,
}

/// Object a git ref or tag points at.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GitObject {
    #[serde(default)]
    pub sha: Option<String>,
    /// `commit` for lightweight tags, `tag` for annotated tags
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl GitObject {
    pub fn is_annotated_tag(&self) -> bool {
        self.kind.as_deref() == Some("tag")
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GitRef {
    #[serde(default)]
    pub object: Option<GitObject>,
}

/// An annotated tag object.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct TagObject {
    #[serde(default)]
    pub object: Option<GitObject>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// List releases, most recent first (pre-releases included).
    async fn list_releases(&self) -> Result<Vec<Release>>;

    /// Look up the commit a ref (branch, tag or sha) points at.
    async fn get_commit_by_ref(&self, reference: &str) -> Result<Commit>;

    /// Resolve `refs/tags/<tag>`.
    async fn get_tag_ref(&self, tag: &str) -> Result<GitRef>;

    /// Fetch an annotated tag object by its sha.
    async fn get_tag_object(&self, sha: &str) -> Result<TagObject>;
}
