//! folio binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands};
use folio::theme::current_theme;
use folio::Config;

fn main() {
    if let Err(e) = run() {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    folio::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    tracing::debug!(path = %config_path.display(), "config path resolved");

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::handle_shell(&config_path),
        Commands::Repl => commands::shell::handle_repl(&config_path),
        Commands::Run { lines, json } => commands::run::handle_run(&config_path, &lines, json),
        Commands::Commands => commands::run::handle_list_commands(&config_path),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config_path),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(&config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(&config_path, force)
        }
        Commands::Completions { shell } => commands::completions::handle_completions(shell),
    }
}
