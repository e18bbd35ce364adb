use anyhow::Result;
use clap::Parser;
use quickdl::commands::{self, ClientOptions, config::ConfigOverrides};
use quickdl::platform::Arch;
use quickdl::presentation::OutputFormat;

/// quickdl - nightly build quick download
///
/// Detect a visitor's platform from browser identification strings, build the
/// matching nightly download URL and show the latest release metadata.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding API rate limits.
///
/// Examples:
///   quickdl link --user-agent "Mozilla/5.0 (Windows NT 10.0; Win64; x64)" --platform Win32
///   quickdl page --format html
#[derive(Parser, Debug)]
#[command(author, version = env!("QUICKDL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository publishing the nightly builds, "owner/repo"
    #[arg(long, env = "QUICKDL_REPO", value_name = "OWNER/REPO", global = true)]
    pub repo: Option<String>,

    /// Asset file name prefix (defaults to "pumpkin")
    #[arg(long, env = "QUICKDL_PRODUCT", value_name = "NAME", global = true)]
    pub product: Option<String>,

    /// Product name shown on the download button
    #[arg(long = "display-name", value_name = "NAME", global = true)]
    pub display_name: Option<String>,

    /// Web host serving the releases (defaults to https://github.com)
    #[arg(long, env = "QUICKDL_HOST", value_name = "URL", global = true)]
    pub host: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Architecture offered when the OS cannot be detected (defaults to ARM64)
    #[arg(long = "fallback-arch", value_name = "ARCH", global = true)]
    pub fallback_arch: Option<Arch>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the download URL for a client (no network access)
    Link(ClientArgs),

    /// Render the download page including latest release metadata
    Page(PageArgs),
}

#[derive(clap::Args, Debug)]
pub struct ClientArgs {
    /// Browser user-agent string (defaults to one synthesized for this host)
    #[arg(long = "user-agent", value_name = "UA")]
    pub user_agent: Option<String>,

    /// Browser platform string, e.g. "Win32" or "MacIntel"
    #[arg(long, value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Architecture reported by structured user-agent data, e.g. "arm"
    #[arg(long = "ua-arch", value_name = "ARCH")]
    pub ua_arch: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct PageArgs {
    #[command(flatten)]
    pub client: ClientArgs,

    /// Output format: text, html or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl From<ClientArgs> for ClientOptions {
    fn from(args: ClientArgs) -> Self {
        ClientOptions {
            user_agent: args.user_agent,
            platform: args.platform,
            ua_arch: args.ua_arch,
        }
    }
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo: self.repo.clone(),
            host: self.host.clone(),
            product: self.product.clone(),
            display_name: self.display_name.clone(),
            api_url: self.api_url.clone(),
            fallback_arch: self.fallback_arch,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = quickdl::runtime::RealRuntime;
    let overrides = cli.overrides();

    match cli.command {
        Commands::Link(args) => commands::link(runtime, overrides, args.into())?,
        Commands::Page(args) => {
            commands::page(
                runtime,
                overrides,
                args.client.into(),
                args.format.unwrap_or_default(),
            )
            .await?
        }
    }
    Ok(())
}
