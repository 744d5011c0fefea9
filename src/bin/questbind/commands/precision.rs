//! `questbind precision` command

use anyhow::Result;

use super::Project;
use crate::cli::PrecisionArgs;
use questbind::native::{detect_precision, NativeLibrary};

pub fn execute(args: PrecisionArgs) -> Result<()> {
    let path = match args.library {
        Some(path) => path,
        None => Project::load(args.root)?.layout.library_path(),
    };

    let library = NativeLibrary::open(&path)?;
    let precision = detect_precision(&library)?;

    println!(
        "{} (code {}, qreal = {})",
        precision,
        precision.code(),
        precision.c_type()
    );

    Ok(())
}
