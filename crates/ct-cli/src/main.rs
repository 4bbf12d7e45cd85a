use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ct_cli::commands::{describe, parse};
use ct_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let now = Local::now().naive_local();
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Parse {
            text,
            prefer,
            title,
        }) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");
            parse::run(
                &mut stdout,
                &config,
                &text.join(" "),
                *prefer,
                title.as_deref(),
                now,
            )?;
        }
        Some(Commands::Describe) => {
            describe::run(std::io::stdin().lock(), &mut stdout, now)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
