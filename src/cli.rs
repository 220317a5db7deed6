//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Insert include guards into C/C++ header files
#[derive(Parser, Debug)]
#[command(name = "auto-header")]
#[command(about = "Inserts include-guard headers and footers into .h/.hpp files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert an include guard into a header file
    Insert {
        /// Path to the header file to edit in place
        file: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print a greeting to check the installation
    Hello,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
