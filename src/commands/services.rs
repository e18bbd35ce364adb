//! Service factory for building application dependencies.
//!
//! This module separates the construction of service dependencies (HTTP
//! client, release source) from the configuration. Services are built based
//! on configuration values but are not part of the configuration itself.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{http::HttpClient, provider::GitHubSource};

use super::config::Config;

const USER_AGENT: &str = "quickdl-cli";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;

    Ok(HttpClient::new(client))
}

/// Build the release source (GitHub) from configuration
pub fn build_source(config: &Config) -> Result<GitHubSource> {
    let http_client = build_http_client(config.token.as_deref())?;
    Ok(GitHubSource::from_http_client(
        http_client,
        &config.api_url,
        config.site.repo.clone(),
    ))
}
