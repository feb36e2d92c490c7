//! Coregen - core feature module generator for Angular workspaces

use clap::Parser;

use coregen::cli::{Cli, Commands};
use coregen::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => {
            commands::generate::run(cli.workspace, cli.config, cli.verbose, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
