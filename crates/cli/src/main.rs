use clap::Parser;
use routefinder_domain::{CliOverrides, DomainError};
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;
mod output;

use output::OutputFormat;

/// Exit status for fetch failures and bad input.
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "routefinder")]
#[command(version)]
#[command(about = "Find the domain or routes a hostname belongs to on a Cloud Foundry platform")]
struct Cli {
    /// Fully-qualified hostname to resolve
    hostname: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Cloud Controller API endpoint (defaults to the cf CLI target)
    #[arg(long, value_name = "URL")]
    api: Option<String>,

    /// OAuth access token (defaults to the cf CLI token)
    #[arg(long, env = "CF_OAUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    skip_ssl_validation: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let cli_overrides = CliOverrides {
        api_url: cli.api.clone(),
        token: cli.token.clone(),
        skip_ssl_validation: cli.skip_ssl_validation,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging);

    let hostname = cli.hostname.as_str();
    if hostname.is_empty() {
        return Err(DomainError::InvalidHostname("hostname cannot be empty".to_string()).into());
    }

    info!(hostname = %hostname, "Resolving hostname");

    let transport = di::build_transport(&config.api)?;
    let use_cases = di::UseCases::new(transport);

    let resolution = use_cases.resolve_hostname.execute(hostname).await?;
    info!(
        outcome = resolution.kind(),
        domain = resolution.domain().map(|d| d.name.as_ref()).unwrap_or("-"),
        routes = resolution.routes().len(),
        "Resolution complete"
    );

    print!("{}", output::render(&resolution, cli.format)?);
    Ok(output::exit_code(&resolution))
}
