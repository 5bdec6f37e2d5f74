//! Configuration management CLI commands.

use crate::config::{Config, ThemeMode};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Directory backing the settings store
    #[arg(long, value_name = "DIR")]
    storage_dir: Option<PathBuf>,

    /// Host the server binds to
    #[arg(long, value_name = "HOST")]
    host: Option<String>,

    /// Port the server listens on
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    server: ServerOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    storage_dir: String,
}

#[derive(Serialize, Debug)]
struct ServerOutput {
    host: String,
    port: u16,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load().context("Failed to load configuration")?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> Result<()> {
        // At least one argument must be provided
        if self.storage_dir.is_none()
            && self.host.is_none()
            && self.port.is_none()
            && self.theme.is_none()
        {
            anyhow::bail!(
                "At least one configuration option must be specified: --storage-dir, --host, --port, or --theme"
            );
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.storage_dir {
            std::fs::create_dir_all(path).context(format!(
                "Failed to create storage directory {}",
                path.display()
            ))?;
            config.paths.storage_dir = Some(path.clone());
        }

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = theme_str.parse::<ThemeMode>()?;
        }

        config.save().context("Failed to save configuration")?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> Result<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            storage_dir: config.storage_dir()?.to_string_lossy().to_string(),
        },
        server: ServerOutput {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.as_str().to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .context("Failed to serialize configuration to JSON")?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> Result<()> {
    println!("Dashboard Configuration");
    println!("=======================");
    println!();

    println!("Paths:");
    println!("  Storage Directory: {}", config.storage_dir()?.display());
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!();

    Ok(())
}
