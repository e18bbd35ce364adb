use anyhow::{Context, Result};
use log::debug;

use crate::asset::{
    AssetTarget, DEFAULT_DISPLAY_NAME, DEFAULT_HOST, DEFAULT_PRODUCT, OsToken, ReleaseSite,
};
use crate::platform::Arch;
use crate::provider::{DEFAULT_API_URL, RepoId};
use crate::runtime::Runtime;

pub const DEFAULT_REPO: &str = "Pumpkin-MC/Pumpkin";

/// Values supplied on the command line (or their environment fallbacks).
/// Anything left unset takes its default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub repo: Option<String>,
    pub host: Option<String>,
    pub product: Option<String>,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub fallback_arch: Option<Arch>,
}

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub site: ReleaseSite,
    pub api_url: String,
    /// GitHub token for API authentication
    pub token: Option<String>,
    /// Asset offered when the OS cannot be detected
    pub fallback: AssetTarget,
}

impl Config {
    pub fn load<R: Runtime + ?Sized>(runtime: &R, overrides: ConfigOverrides) -> Result<Self> {
        let repo_str = overrides.repo.as_deref().unwrap_or(DEFAULT_REPO);
        let repo: RepoId = repo_str
            .parse()
            .with_context(|| format!("Invalid repository '{}'", repo_str))?;

        let host = overrides.host.as_deref().unwrap_or(DEFAULT_HOST);
        if !host.starts_with("http://") && !host.starts_with("https://") {
            anyhow::bail!("Invalid host '{}'. Expected an http(s) URL.", host);
        }

        let site = ReleaseSite::new(
            host,
            repo,
            overrides.product.unwrap_or_else(|| DEFAULT_PRODUCT.to_string()),
            overrides
                .display_name
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        );

        let token = runtime
            .env_var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_some() {
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let fallback = AssetTarget {
            os: OsToken::Linux,
            arch: overrides
                .fallback_arch
                .map(Into::into)
                .unwrap_or(AssetTarget::DEFAULT_FALLBACK.arch),
        };

        Ok(Self {
            site,
            api_url: overrides
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
            fallback,
        })
    }
}
