//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// tol-helper - runtime helper-header generator for the tol compiler
#[derive(Parser, Debug)]
#[command(name = "tol-helper", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit the helper header for the given element types
    Emit(EmitArgs),

    /// List the tol scalar types and their C renderings
    Types,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `emit` command.
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Element types in tol spelling (e.g. `i32`, `lutang`, `[]u8`)
    #[arg(required = true)]
    pub types: Vec<String>,

    /// Write the header to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
