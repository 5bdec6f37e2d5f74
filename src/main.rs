//! CRM Dashboard settings service.
//!
//! Serves the dashboard's appearance settings and session-gated pages, and
//! offers CLI access to the same persisted settings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crmdash::cli::{self, ConfigArgs, SidebarArgs, ThemeArgs};
use crmdash::config::Config;

/// CRM Dashboard settings service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Manage configuration
    Config(ConfigArgs),
    /// Select and inspect themes
    Theme(ThemeArgs),
    /// Inspect and change the sidebar layout
    Sidebar(SidebarArgs),
    /// Restore default appearance and sidebar layout
    Reset,
}

/// Run the HTTP server
#[cfg(feature = "web")]
#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        #[cfg(feature = "web")]
        Command::Serve(serve) => serve_blocking(load_config()?, serve),
        Command::Config(cmd) => cmd.execute(),
        Command::Theme(cmd) => cmd.execute(&load_config()?),
        Command::Sidebar(cmd) => cmd.execute(&load_config()?),
        Command::Reset => cli::reset(&load_config()?),
    }
}

/// Loads configuration, falling back to defaults when no file exists.
fn load_config() -> Result<Config> {
    Config::load().context("Failed to load configuration")
}

#[cfg(feature = "web")]
fn serve_blocking(mut config: Config, args: ServeArgs) -> Result<()> {
    use std::net::SocketAddr;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    tracing::info!("{} v{}", crmdash::constants::APP_NAME, env!("CARGO_PKG_VERSION"));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(crmdash::web::run_server(config, addr))
}
