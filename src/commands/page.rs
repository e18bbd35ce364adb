use anyhow::Result;

use crate::application::DownloadPageAction;
use crate::platform::{Environment, EnvironmentDetector};
use crate::presentation::{OutputFormat, PageState};
use crate::provider::ReleaseSource;
use crate::runtime::Runtime;

use super::ClientOptions;
use super::config::{Config, ConfigOverrides};
use super::services::build_source;

/// Render the full download page: detected label, button and release metadata.
#[tracing::instrument(skip(runtime, overrides, client))]
pub async fn page<R: Runtime>(
    runtime: R,
    overrides: ConfigOverrides,
    client: ClientOptions,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load(&runtime, overrides)?;
    let source = build_source(&config)?;

    let output = render_page(&runtime, &config, &source, client.environment(), format).await?;
    println!("{}", output);

    Ok(())
}

async fn render_page<R, S>(
    runtime: &R,
    config: &Config,
    source: &S,
    env: Environment,
    format: OutputFormat,
) -> Result<String>
where
    R: Runtime + ?Sized,
    S: ReleaseSource + ?Sized,
{
    let detector = EnvironmentDetector::new(env);
    let action = DownloadPageAction::new(&detector, source, runtime, &config.site, config.fallback);

    let mut state = PageState::default();
    action.run(&mut state).await?;
    state.render(format)
}
