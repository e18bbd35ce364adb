use anyhow::Result;

use crate::application::PrimaryView;
use crate::platform::EnvironmentDetector;
use crate::runtime::Runtime;

use super::ClientOptions;
use super::config::{Config, ConfigOverrides};

/// Print the nightly download URL for the given client. No network access.
#[tracing::instrument(skip(runtime, overrides, client))]
pub fn link<R: Runtime>(
    runtime: R,
    overrides: ConfigOverrides,
    client: ClientOptions,
) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let view = primary_view(&config, client);

    eprintln!("Detected: {}", view.label);
    println!("{}", view.button.href);

    Ok(())
}

fn primary_view(config: &Config, client: ClientOptions) -> PrimaryView {
    let detector = EnvironmentDetector::new(client.environment());
    PrimaryView::compute(&detector, &config.site, config.fallback)
}
