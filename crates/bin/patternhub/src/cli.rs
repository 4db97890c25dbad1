//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "patternhub.toml";

/// Run the command, template method and mediator demos.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Demo to run.
    #[arg(value_enum, default_value_t = Demo::All)]
    pub demo: Demo,

    /// Configuration file; missing files fall back to defaults.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Remote controls with undo and macros.
    Command,
    /// Beverage and report skeletons.
    Template,
    /// Chat room.
    Mediator,
    /// Every demo, in the order above.
    All,
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => f.write_str("command"),
            Self::Template => f.write_str("template"),
            Self::Mediator => f.write_str("mediator"),
            Self::All => f.write_str("all"),
        }
    }
}
