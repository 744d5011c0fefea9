//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// questbind - Build-time binding generator for the QuEST simulator
#[derive(Parser)]
#[command(name = "questbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the binding module
    Build(BuildArgs),

    /// Print the precision of the native library
    Precision(PrecisionArgs),

    /// Print the cleaned declarations handed to the generator
    Cdef(CdefArgs),
}

/// Arguments shared by every command that reads the project layout.
#[derive(Args)]
pub struct ProjectArgs {
    /// Project root (defaults to current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Use this precision code instead of querying the library (1, 2 or 4)
    #[arg(long, allow_negative_numbers = true)]
    pub precision: Option<i32>,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory, relative to the current directory (defaults to the
    /// library directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Name of the generated module
    #[arg(long)]
    pub module: Option<String>,

    /// Print the generator inputs as JSON without building
    #[arg(long)]
    pub plan: bool,
}

#[derive(Args)]
pub struct PrecisionArgs {
    /// Project root (defaults to current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the shared library (defaults to the project layout)
    #[arg(long)]
    pub library: Option<PathBuf>,
}

#[derive(Args)]
pub struct CdefArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Header to transform (defaults to the project layout)
    #[arg(long)]
    pub header: Option<PathBuf>,
}
