use crate::provider::RepoId;

use super::AssetTarget;

pub const DEFAULT_HOST: &str = "https://github.com";
pub const DEFAULT_PRODUCT: &str = "pumpkin";
pub const DEFAULT_DISPLAY_NAME: &str = "Pumpkin";
pub const NIGHTLY_TAG: &str = "nightly";

/// Where the product's releases are hosted and how its assets are named.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSite {
    /// Web host, e.g. `https://github.com` (no trailing slash)
    pub host: String,
    pub repo: RepoId,
    /// Asset file name prefix, e.g. `pumpkin`
    pub product: String,
    /// Human readable product name, e.g. `Pumpkin`
    pub display_name: String,
}

impl Default for ReleaseSite {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            repo: RepoId {
                owner: "Pumpkin-MC".to_string(),
                repo: "Pumpkin".to_string(),
            },
            product: DEFAULT_PRODUCT.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl ReleaseSite {
    pub fn new(
        host: &str,
        repo: RepoId,
        product: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            repo,
            product: product.into(),
            display_name: display_name.into(),
        }
    }

    fn repo_url(&self) -> String {
        format!("{}/{}/{}", self.host, self.repo.owner, self.repo.repo)
    }

    pub fn download_url(&self, target: &AssetTarget) -> String {
        format!(
            "{}/releases/download/{}/{}",
            self.repo_url(),
            NIGHTLY_TAG,
            target.file_name(&self.product)
        )
    }

    pub fn releases_url(&self) -> String {
        format!("{}/releases", self.repo_url())
    }

    pub fn commit_url(&self, sha: &str) -> String {
        format!("{}/commit/{}", self.repo_url(), sha)
    }
}
