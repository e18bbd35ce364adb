//! GitHub REST implementation of [`ReleaseSource`].

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use crate::http::HttpClient;

use super::{Commit, GitRef, Release, ReleaseSource, RepoId, TagObject};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GitHubSource {
    http_client: HttpClient,
    api_url: String,
    repo: RepoId,
}

impl GitHubSource {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str, repo: RepoId) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build `<api>/repos/<owner>/<repo>/<segments...>`, percent-encoding
    /// each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid API URL: {}", self.api_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL cannot be a base: {}", self.api_url))?
            .pop_if_empty()
            .extend(["repos", self.repo.owner.as_str(), self.repo.repo.as_str()])
            .extend(segments);
        Ok(url.to_string())
    }
}

#[async_trait]
impl ReleaseSource for GitHubSource {
    #[tracing::instrument(skip(self))]
    async fn list_releases(&self) -> Result<Vec<Release>> {
        let url = self.endpoint(&["releases"])?;
        debug!("Fetching releases from {}...", url);
        self.http_client.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_commit_by_ref(&self, reference: &str) -> Result<Commit> {
        let url = self.endpoint(&["commits", reference])?;
        debug!("Fetching commit for ref {} from {}...", reference, url);
        self.http_client.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_tag_ref(&self, tag: &str) -> Result<GitRef> {
        let url = self.endpoint(&["git", "ref", "tags", tag])?;
        debug!("Fetching tag ref {} from {}...", tag, url);
        self.http_client.get_json(&url).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_tag_object(&self, sha: &str) -> Result<TagObject> {
        let url = self.endpoint(&["git", "tags", sha])?;
        debug!("Fetching tag object {} from {}...", sha, url);
        self.http_client.get_json(&url).await
    }
}
