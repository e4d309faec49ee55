//! Daybook - Terminal personal organizer

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use daybook::cli::{self, Cli, Commands};
use daybook::session;

fn main() -> Result<()> {
    if std::env::var("DAYBOOK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("daybook=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "daybook", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Paths) => cli::paths::run(cli.data_dir),
        Some(Commands::Export(args)) => cli::export::run(cli.data_dir, args),
        None => session::run_interactive(cli.data_dir),
    }
}
