//! The `copper` binary: compile, inspect, and run programs.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "copper", version, about = "Assembler and virtual machine for a small register-based bytecode")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile source files into `.raw` bytecode images.
    Compile {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the lexed token stream of source files.
    Dump {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Execute compiled bytecode images.
    Execute {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Compile and immediately run source files.
    Run {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the version string.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ok = match cli.command {
        Command::Compile { files } => commands::compile::run(&files),
        Command::Dump { files } => commands::dump::run(&files),
        Command::Execute { files } => commands::execute::run(&files),
        Command::Run { files } => commands::run::run(&files),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            true
        }
    };
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
