//! Theme selection CLI commands.

use crate::cli::open_settings;
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::theme::{self, StyleAssignments};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Theme selection commands
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// List named themes and tweak presets
    List(ThemeListArgs),
    /// Select a named theme
    Select(SelectArgs),
    /// Select a tweak preset
    Preset(SelectArgs),
    /// Set the corner radius (CSS length, e.g. 0.75rem)
    Radius(RadiusArgs),
    /// Import a theme from a CSS or JSON file
    Import(ImportArgs),
    /// Print the computed stylesheet
    Css(CssArgs),
}

/// List themes
#[derive(Args, Debug)]
pub struct ThemeListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Select a theme or preset by id (empty string clears the selection)
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Theme or preset id
    #[arg(value_name = "ID")]
    id: String,
}

/// Set the corner radius
#[derive(Args, Debug)]
pub struct RadiusArgs {
    /// CSS length
    #[arg(value_name = "LENGTH")]
    radius: String,
}

/// Import a theme
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File containing `:root`/`.dark` CSS blocks or a JSON theme
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Print the computed stylesheet
#[derive(Args, Debug)]
pub struct CssArgs {
    /// Render the dark variant
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Render the light variant
    #[arg(long)]
    light: bool,
}

#[derive(Serialize, Debug)]
struct CatalogEntry {
    id: &'static str,
    label: &'static str,
    kind: &'static str,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            ThemeCommand::List(args) => args.execute(),
            ThemeCommand::Select(args) => {
                if !args.id.is_empty() && theme::find_named_theme(&args.id).is_none() {
                    anyhow::bail!(
                        "Unknown theme '{}'. Run `{APP_BINARY_NAME} theme list` to see available themes",
                        args.id
                    );
                }
                let mut ctx = open_settings(config)?;
                print_assignments(&ctx.select_theme(&args.id));
                Ok(())
            }
            ThemeCommand::Preset(args) => {
                if !args.id.is_empty() && theme::find_tweak_preset(&args.id).is_none() {
                    anyhow::bail!(
                        "Unknown preset '{}'. Run `{APP_BINARY_NAME} theme list` to see available presets",
                        args.id
                    );
                }
                let mut ctx = open_settings(config)?;
                print_assignments(&ctx.select_tweakcn_theme(&args.id));
                Ok(())
            }
            ThemeCommand::Radius(args) => {
                let radius = args.radius.trim();
                if radius.is_empty() {
                    anyhow::bail!("Radius cannot be empty");
                }
                let mut ctx = open_settings(config)?;
                print_assignments(&ctx.set_radius(radius));
                Ok(())
            }
            ThemeCommand::Import(args) => {
                let input = std::fs::read_to_string(&args.file)
                    .context(format!("Failed to read {}", args.file.display()))?;
                let imported = theme::parse_theme(&input)?;
                let mut ctx = open_settings(config)?;
                print_assignments(&ctx.import_theme(imported));
                Ok(())
            }
            ThemeCommand::Css(args) => {
                let mut ctx = open_settings(config)?;
                if args.dark || args.light {
                    ctx.set_dark_mode(args.dark);
                }
                print!("{}", ctx.scope().to_css());
                Ok(())
            }
        }
    }
}

impl ThemeListArgs {
    /// Execute list command
    pub fn execute(&self) -> Result<()> {
        let entries: Vec<CatalogEntry> = theme::NAMED_THEMES
            .iter()
            .map(|t| CatalogEntry {
                id: t.id,
                label: t.label,
                kind: "theme",
            })
            .chain(theme::TWEAK_PRESETS.iter().map(|p| CatalogEntry {
                id: p.id,
                label: p.label,
                kind: "preset",
            }))
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        println!("Themes:");
        for entry in entries.iter().filter(|e| e.kind == "theme") {
            println!("  {:<16} {}", entry.id, entry.label);
        }
        println!();
        println!("Presets:");
        for entry in entries.iter().filter(|e| e.kind == "preset") {
            println!("  {:<16} {}", entry.id, entry.label);
        }

        Ok(())
    }
}

fn print_assignments(assignments: &StyleAssignments) {
    for (name, value) in assignments {
        println!("{name}: {value}");
    }
}
