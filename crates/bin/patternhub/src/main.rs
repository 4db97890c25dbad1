//! # patternhub — pattern demo runner
//!
//! Composition root that wires the console adapter to the pattern
//! subsystems and runs the selected demo.
//!
//! ## Responsibilities
//! - Parse command-line arguments
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber (stderr, so demo output stays clean)
//! - Run the selected demo against the terminal

use anyhow::Context;
use clap::Parser;
use patternhub::cli::Cli;
use patternhub::config::Config;
use patternhub::demos;
use patternhub_adapter_console::TerminalConsole;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter `{}`", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        demo = %cli.demo,
        slots = config.remote.slots,
        join_notice = %config.chat.join_notice,
        "starting"
    );

    let mut console = TerminalConsole::stdio();
    demos::run(cli.demo, &config, &mut console).context("demo failed")?;

    Ok(())
}
