//! CLI argument definitions using clap
//!
//! Commands:
//! - shapeguard validate --schema <path> --value <path>
//! - shapeguard compat --source <path> --target <path>
//! - shapeguard inspect --schema <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shapeguard - runtime schema validation and type-compatibility checking
#[derive(Parser, Debug)]
#[command(name = "shapeguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON value against a schema file
    Validate {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
        /// Path to the value JSON file
        #[arg(long)]
        value: PathBuf,
    },

    /// Check directional compatibility of two schema files
    Compat {
        /// Path to the source schema JSON file
        #[arg(long)]
        source: PathBuf,
        /// Path to the target schema JSON file
        #[arg(long)]
        target: PathBuf,
    },

    /// Print a summary of a schema file
    Inspect {
        /// Path to the schema JSON file
        #[arg(long)]
        schema: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
