//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::export::ExportArgs;

#[derive(Parser)]
#[command(name = "daybook", version, about = "Terminal personal organizer")]
pub struct Cli {
    /// Data directory (defaults to ~/.daybook)
    #[arg(long, env = "DAYBOOK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Print the resolved data directory and its files
    Paths,

    /// Dump all collections as JSON to stdout
    Export(ExportArgs),
}
