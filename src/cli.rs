//! Command-line interface definition and dispatch for koda.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand is
//! routed to its handler.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::agent::Agent;
use crate::config::Config;
use crate::output::StdoutRenderer;
use crate::provider::AnthropicClient;
use crate::tools::ToolRegistry;

/// Top-level CLI structure for koda.
///
/// Parsed from command-line arguments via [`clap::Parser`]. Contains a single
/// required subcommand that determines which action koda performs.
#[derive(Parser)]
#[command(name = "koda", about = "A minimal code-editing AI agent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the koda CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Model to use (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current config
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chat { model } => {
            let mut config = Config::load()?;
            if let Some(m) = model {
                config.model = m;
            }

            // Missing credential is the one fatal startup condition.
            let api_key = config.resolve_api_key().context(
                "No API key found. Set ANTHROPIC_API_KEY or configure it in config.toml",
            )?;

            let client = AnthropicClient::new(
                api_key,
                config.model.clone(),
                config.max_tokens(),
                config.system_prompt.clone(),
                config.base_url(),
            );
            let tools = ToolRegistry::with_builtins();

            println!(
                "{} [model: {}] (Ctrl+D to exit)",
                "koda chat".bold().cyan(),
                config.model.yellow(),
            );
            println!();

            let mut agent = Agent::new(Box::new(client), tools);
            let mut renderer = StdoutRenderer::new();
            agent.run(&mut renderer).await
        }
        Commands::Config { action } => {
            let config = Config::load()?;
            match action {
                ConfigAction::Show => {
                    let path = Config::config_path()?;
                    println!("{} {}", "Config path:".bold(), path.display());
                    println!();
                    let toml_str = toml::to_string_pretty(&config)?;
                    println!("{}", toml_str);
                }
            }
            Ok(())
        }
    }
}
