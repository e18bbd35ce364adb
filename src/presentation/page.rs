use std::str::FromStr;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use tera::Tera;

use super::{Button, Metadata, PresentationSink};

const PAGE_TEMPLATE: &str = "page.html";

/// How a [`PageState`] is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown output format: {}. Expected text, html, or json.", s),
        }
    }
}

/// In-memory record of the three page regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    pub detected_label: String,
    pub button: Option<Button>,
    pub metadata: Option<Metadata>,
}

impl PresentationSink for PageState {
    fn set_detected_label(&mut self, label: &str) -> Result<()> {
        self.detected_label = label.to_string();
        Ok(())
    }

    fn set_button(&mut self, button: &Button) -> Result<()> {
        self.button = Some(button.clone());
        Ok(())
    }

    fn set_metadata(&mut self, metadata: &Metadata) -> Result<()> {
        self.metadata = Some(metadata.clone());
        Ok(())
    }
}

impl PageState {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Html => self.to_html(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize page state")
            }
        }
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![format!("Detected: {}", self.detected_label)];

        if let Some(button) = &self.button {
            lines.push(format!("Download: {}", button.text));
            lines.push(format!("          {}", button.href));
        }

        match &self.metadata {
            Some(Metadata::Build { built, commit }) => {
                let mut parts = Vec::new();
                if let Some(built) = built {
                    parts.push(format!("Latest build: {}", built));
                }
                if let Some(commit) = commit {
                    parts.push(format!("commit {} ({})", commit.label, commit.href));
                }
                if !parts.is_empty() {
                    lines.push(format!("Release:  {}", parts.join(" • ")));
                }
            }
            Some(Metadata::Releases(link)) => {
                lines.push(format!("Release:  {} ({})", link.label, link.href));
            }
            None => {}
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Render the regions as an HTML fragment carrying the element ids the
    /// download page uses.
    pub fn to_html(&self) -> Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("page.html.tera"))
            .context("Failed to load page template")?;
        tera.set_escape_fn(escape_html);

        let context =
            tera::Context::from_serialize(self).context("Failed to build template context")?;

        debug!("Rendering template: {}", PAGE_TEMPLATE);
        tera.render(PAGE_TEMPLATE, &context)
            .context("Failed to render page template")
    }
}

/// HTML escaping that leaves `/` alone so URLs are emitted verbatim.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
