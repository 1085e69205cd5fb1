//! tol-helper - generates the tol runtime helper header.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Initialize logging subscriber; RUST_LOG controls the level.
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Emit(args) => commands::emit::run(args),
        Command::Types => {
            commands::types::run();
            Ok(())
        }
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
