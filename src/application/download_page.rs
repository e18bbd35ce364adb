//! Download page action - fills the three page regions.
//!
//! This action coordinates:
//! - Detecting the visitor's platform and picking the asset to offer
//! - Writing the detected label and download button (no network needed)
//! - Fetching latest-release metadata and writing the metadata line
//! - Replacing everything with the static fallback if any step fails

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::asset::{AssetTarget, ReleaseSite};
use crate::platform::{Os, PlatformDetector};
use crate::presentation::{
    Button, CommitLink, Fallback, Metadata, PresentationSink, VIEW_RELEASES,
};
use crate::provider::ReleaseSource;
use crate::release::{ReleaseSummary, fetch_summary, format_build_time};
use crate::runtime::Runtime;

/// The part of the page computed locally from detection alone.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryView {
    pub target: AssetTarget,
    pub label: String,
    pub button: Button,
}

impl PrimaryView {
    pub fn compute<D: PlatformDetector + ?Sized>(
        detector: &D,
        site: &ReleaseSite,
        fallback: AssetTarget,
    ) -> Self {
        let guess = detector.detect();
        let target = AssetTarget::from_guess(&guess, fallback);
        if guess.os == Os::Unknown {
            debug!("Platform not recognized, assuming {} / {}", target.os, target.arch);
        }

        let text = format!(
            "Download {} for {} ({})",
            site.display_name, target.os, target.arch
        );

        Self {
            target,
            label: format!("{} — {}", target.os, target.arch),
            button: Button {
                href: site.download_url(&target),
                aria_label: text.clone(),
                text,
            },
        }
    }
}

/// Download page action
pub struct DownloadPageAction<'a, D, S, R>
where
    D: PlatformDetector + ?Sized,
    S: ReleaseSource + ?Sized,
    R: Runtime + ?Sized,
{
    detector: &'a D,
    source: &'a S,
    runtime: &'a R,
    site: &'a ReleaseSite,
    fallback: AssetTarget,
}

impl<'a, D, S, R> DownloadPageAction<'a, D, S, R>
where
    D: PlatformDetector + ?Sized,
    S: ReleaseSource + ?Sized,
    R: Runtime + ?Sized,
{
    pub fn new(
        detector: &'a D,
        source: &'a S,
        runtime: &'a R,
        site: &'a ReleaseSite,
        fallback: AssetTarget,
    ) -> Self {
        Self {
            detector,
            source,
            runtime,
            site,
            fallback,
        }
    }

    /// Fill the page. Any failure replaces all three regions with the
    /// fallback content; only a failure to write the fallback is returned.
    #[tracing::instrument(skip(self, sink))]
    pub async fn run<P: PresentationSink + ?Sized>(&self, sink: &mut P) -> Result<()> {
        match self.fill(sink).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Failed to build download page, showing fallback: {:#}", e);
                Fallback::apply(sink, self.site).context("Failed to show fallback content")
            }
        }
    }

    async fn fill<P: PresentationSink + ?Sized>(&self, sink: &mut P) -> Result<()> {
        let primary = PrimaryView::compute(self.detector, self.site, self.fallback);
        sink.set_detected_label(&primary.label)?;
        sink.set_button(&primary.button)?;

        let metadata = match fetch_summary(self.source).await {
            Some(summary) => self.describe(&summary),
            None => Metadata::releases_link(self.site, VIEW_RELEASES),
        };
        sink.set_metadata(&metadata)
    }

    fn describe(&self, summary: &ReleaseSummary) -> Metadata {
        let built = summary
            .built_at
            .map(|t| format_build_time(t, self.runtime.now()));
        let commit = summary
            .commit_sha
            .as_deref()
            .map(|sha| CommitLink::new(self.site, sha));

        if built.is_none() && commit.is_none() {
            debug!("Latest release has neither a build time nor a commit");
            return Metadata::releases_link(self.site, VIEW_RELEASES);
        }
        Metadata::Build { built, commit }
    }
}
