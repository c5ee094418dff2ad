//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// doxbridge: Doxygen → Breathe bridge for the documentation build
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "doxbridge.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default doxbridge.toml
    Init,

    /// Run doxygen when on the docs host, then write the bridge manifest
    Build {
        /// Run doxygen even outside the docs host
        #[arg(long)]
        hosted: bool,
    },

    /// Print the documentation URLs of an external type
    Resolve {
        /// Short type name, e.g. `InputDevice`
        alias: String,

        /// Package group to look in (default: first group defining the alias)
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Validate the configuration and the cross-reference tables
    Check,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
}
