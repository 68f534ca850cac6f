//! Adviser CLI - CI helpers for the cloudflared controller

use std::path::PathBuf;
use std::time::Duration;

use adviser_core::{API_USER_ENV, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, FetchOptions};
use adviser_crd::{CLOUDFLARE_OPENAPI_URL, OutputFormat};
use adviser_release::GITHUB_API_URL;
use adviser_schema::DEFAULT_MAX_DEPTH;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod exit_codes;

use error::{CliError, Result};

#[derive(Parser)]
#[command(name = "adviser")]
#[command(version)]
#[command(about = "CI helpers: Cloudflare CRDs and latest GitHub release versions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Maximum redirects followed per request
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_REDIRECTS)]
    max_redirects: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Kubernetes CRDs for Cloudflare resources
    BuildCrd {
        /// URL or file path of the Cloudflare OpenAPI document
        #[arg(long, default_value = CLOUDFLARE_OPENAPI_URL)]
        source: String,

        /// Output file (if not set, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (json or yaml)
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Maximum schema nesting depth while resolving references
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },

    /// Print NAME_VERSION=tag for the latest release of each repository
    QueryVersions {
        /// Repositories as owner/name
        #[arg(required = true)]
        repos: Vec<String>,

        /// GitHub credential sent as Basic auth (user:token)
        #[arg(long, env = API_USER_ENV, hide_env_values = true)]
        api_user: Option<String>,

        /// GitHub API base URL
        #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
        api_url: String,
    },
}

fn main() {
    miette::set_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.debug);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Logs go to stderr; stdout carries only the generated output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let fetch = FetchOptions::default()
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_max_redirects(cli.max_redirects);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::internal(format!("Failed to start async runtime: {}", e)))?;

    match cli.command {
        Commands::BuildCrd {
            source,
            output,
            format,
            max_depth,
        } => runtime.block_on(commands::build_crd::run(
            &source,
            output.as_deref(),
            format,
            max_depth,
            fetch,
        )),

        Commands::QueryVersions {
            repos,
            api_user,
            api_url,
        } => runtime.block_on(commands::query_versions::run(
            &repos,
            api_user.as_deref(),
            &api_url,
            fetch,
        )),
    }
}
