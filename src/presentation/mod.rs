//! Presentation of the detection and release results.
//!
//! The page has exactly three regions: the detected-platform label, the
//! download button and the release-metadata line. Writers implement
//! [`PresentationSink`]; [`PageState`] is the in-memory implementation.

mod page;

pub use page::{OutputFormat, PageState};

use anyhow::Result;
use serde::Serialize;

use crate::asset::ReleaseSite;

pub const FALLBACK_LABEL: &str = "Unable to auto-detect platform. Use the manual options below.";
pub const FALLBACK_BUTTON_TEXT: &str = "Releases";
pub const VIEW_RELEASES: &str = "View releases on GitHub";
pub const VIEW_BUILDS: &str = "View builds on GitHub";

const SHORT_SHA_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub href: String,
    pub text: String,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// Link to the commit a release was built from, labelled with the short sha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitLink {
    pub sha: String,
    pub href: String,
    pub label: String,
}

impl CommitLink {
    pub fn new(site: &ReleaseSite, sha: &str) -> Self {
        Self {
            sha: sha.to_string(),
            href: site.commit_url(sha),
            label: sha.chars().take(SHORT_SHA_LEN).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metadata {
    /// Details of the latest build.
    Build {
        built: Option<String>,
        commit: Option<CommitLink>,
    },
    /// Generic link to the releases page when no details are available.
    Releases(Link),
}

impl Metadata {
    pub fn releases_link(site: &ReleaseSite, label: &str) -> Self {
        Metadata::Releases(Link {
            href: site.releases_url(),
            label: label.to_string(),
        })
    }
}

/// The three page regions.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationSink {
    fn set_detected_label(&mut self, label: &str) -> Result<()>;
    fn set_button(&mut self, button: &Button) -> Result<()>;
    fn set_metadata(&mut self, metadata: &Metadata) -> Result<()>;
}

/// Static content shown when the pipeline fails.
pub struct Fallback;

impl Fallback {
    pub fn button(site: &ReleaseSite) -> Button {
        Button {
            href: site.releases_url(),
            text: FALLBACK_BUTTON_TEXT.to_string(),
            aria_label: VIEW_RELEASES.to_string(),
        }
    }

    pub fn metadata(site: &ReleaseSite) -> Metadata {
        Metadata::releases_link(site, VIEW_BUILDS)
    }

    /// Overwrite all three regions.
    pub fn apply<P: PresentationSink + ?Sized>(sink: &mut P, site: &ReleaseSite) -> Result<()> {
        sink.set_detected_label(FALLBACK_LABEL)?;
        sink.set_button(&Self::button(site))?;
        sink.set_metadata(&Self::metadata(site))
    }
}
