//! Sidebar layout CLI commands.

use crate::cli::open_settings;
use crate::config::Config;
use crate::models::{SidebarCollapsible, SidebarConfig, SidebarPatch, SidebarSide, SidebarVariant};
use anyhow::Result;
use clap::{Args, Subcommand};

/// Sidebar layout commands
#[derive(Args, Debug)]
pub struct SidebarArgs {
    #[command(subcommand)]
    command: SidebarCommand,
}

#[derive(Subcommand, Debug)]
enum SidebarCommand {
    /// Display the current layout
    Show(SidebarShowArgs),
    /// Change one or more layout options
    Set(SidebarSetArgs),
}

/// Display the current layout
#[derive(Args, Debug)]
pub struct SidebarShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change layout options
#[derive(Args, Debug)]
pub struct SidebarSetArgs {
    /// sidebar, floating, or inset
    #[arg(long, value_name = "VARIANT")]
    variant: Option<SidebarVariant>,

    /// offcanvas, icon, or none
    #[arg(long, value_name = "MODE")]
    collapsible: Option<SidebarCollapsible>,

    /// left or right
    #[arg(long, value_name = "SIDE")]
    side: Option<SidebarSide>,
}

impl SidebarArgs {
    /// Execute sidebar subcommand
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            SidebarCommand::Show(args) => {
                let ctx = open_settings(config)?;
                print_config(ctx.sidebar(), args.json)
            }
            SidebarCommand::Set(args) => {
                let patch = SidebarPatch {
                    variant: args.variant,
                    collapsible: args.collapsible,
                    side: args.side,
                };
                if patch.is_empty() {
                    anyhow::bail!(
                        "At least one option must be specified: --variant, --collapsible, or --side"
                    );
                }
                let mut ctx = open_settings(config)?;
                print_config(ctx.update_sidebar(&patch), false)
            }
        }
    }
}

fn print_config(config: SidebarConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("Variant:     {}", config.variant);
        println!("Collapsible: {}", config.collapsible);
        println!("Side:        {}", config.side);
    }
    Ok(())
}
