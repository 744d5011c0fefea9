//! questbind CLI - Build-time binding generator for QuEST

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("questbind=debug")
    } else {
        EnvFilter::new("questbind=info")
    };

    // Logs go to stderr so `cdef` and `build --plan` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Precision(args) => commands::precision::execute(args),
        Commands::Cdef(args) => commands::cdef::execute(args),
    }
}
