//! Command handlers
//!
//! Each resource group lives in its own module. Handlers take a [`Context`]
//! and write their result to the supplied writer so tests can capture it.

mod acls;
mod adgroups;
mod campaigns;
mod keywords;
mod negative_keywords;
mod reports;
mod search;

use std::io::Write;
use std::sync::Arc;

use anyhow::Context as _;
use searchads_domain::Profile;
use searchads_infra::config::{self, LoadOptions};
use searchads_infra::{AclService, ApiClient, ApiClientConfig, AuthTransport, TracingObserver};

use crate::cli::{Cli, Commands, OutputFormat};

/// Everything a handler needs for one invocation
pub struct Context {
    pub client: Arc<ApiClient>,
    pub profile: Profile,
    pub format: OutputFormat,
}

impl Context {
    /// Resolve the profile and build an authenticated client.
    ///
    /// `--verbose` attaches a request/response logging observer.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let options =
            LoadOptions { config_path: cli.config.clone(), profile: cli.profile.clone() };
        let profile = config::load(&options).context("loading config")?;
        Self::from_profile(profile, cli.output, cli.verbose)
    }

    pub fn from_profile(
        profile: Profile,
        format: OutputFormat,
        verbose: bool,
    ) -> anyhow::Result<Self> {
        let auth = AuthTransport::from_profile(&profile).context("setting up authentication")?;
        let mut builder =
            ApiClient::builder().config(ApiClientConfig::from_profile(&profile)).auth(auth);
        if verbose {
            builder = builder.observer(Arc::new(TracingObserver::new()));
        }
        let client = builder.build().context("creating API client")?;

        Ok(Self { client: Arc::new(client), profile, format })
    }

    /// Currency of the active organization, used for every money amount
    pub async fn currency(&self) -> anyhow::Result<String> {
        AclService::new(Arc::clone(&self.client))
            .resolve_currency(&self.profile.org_id)
            .await
            .context("resolving organization currency")
    }
}

/// Execute a parsed command line and flush `out`.
///
/// A failed flush is reported even when the command itself succeeded.
pub async fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let ctx = Context::from_cli(&cli)?;
    let result = dispatch(&ctx, cli.command, out).await;
    let flushed = out.flush().context("flushing output");
    result.and(flushed)
}

/// Route a command to its handler with an already-built context.
pub async fn dispatch(ctx: &Context, command: Commands, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Commands::Campaigns { command } => campaigns::run(ctx, command, out).await,
        Commands::AdGroups { command } => adgroups::run(ctx, command, out).await,
        Commands::Keywords { command } => keywords::run(ctx, command, out).await,
        Commands::NegativeKeywords { command } => negative_keywords::run(ctx, command, out).await,
        Commands::Apps { command } => search::run_apps(ctx, command, out).await,
        Commands::Geo { command } => search::run_geo(ctx, command, out).await,
        Commands::Acls { command } => acls::run(ctx, command, out).await,
        Commands::Reports { command } => reports::run(ctx, command, out).await,
    }
}
