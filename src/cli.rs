//! Command-line arguments.

use crate::app::config::StartupOverrides;
use crate::domain::store::MissingFilePolicy;
use crate::theme::PaletteType;
use clap::Parser;
use std::path::PathBuf;

/// A sticky note of commands you keep forgetting, searchable from the terminal
#[derive(Parser, Debug)]
#[command(name = "stickynote", version, about, long_about = None)]
pub struct Args {
    /// Commands file to open (defaults to ./commands.json)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty note when the file does not exist
    #[arg(long, conflicts_with = "defaults")]
    pub strict: bool,

    /// Show the built-in Vim commands when the file does not exist
    #[arg(long)]
    pub defaults: bool,

    /// Color theme: frappe, mocha, nord or gruvbox (overrides config)
    #[arg(short, long)]
    pub theme: Option<PaletteType>,
}

impl Args {
    #[must_use]
    pub fn overrides(&self) -> StartupOverrides {
        let policy = if self.strict {
            Some(MissingFilePolicy::Strict)
        } else if self.defaults {
            Some(MissingFilePolicy::WithDefaults)
        } else {
            None
        };
        StartupOverrides {
            file: self.file.clone(),
            policy,
            theme: self.theme,
        }
    }
}
