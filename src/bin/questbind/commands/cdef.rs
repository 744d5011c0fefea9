//! `questbind cdef` command

use std::io::Write;

use anyhow::Result;

use super::Project;
use crate::cli::CdefArgs;
use questbind::native::detect_precision;
use questbind::ops::{open_probe, prepare_cdef, BuildOptions};

pub fn execute(args: CdefArgs) -> Result<()> {
    let project = Project::load(args.project.root)?;
    let mut layout = project.layout;
    if let Some(header) = args.header {
        layout = layout.with_header(header);
    }

    let opts = BuildOptions::new(layout).with_precision_override(args.project.precision);
    let probe = open_probe(&opts)?;
    let precision = detect_precision(probe.as_ref())?;
    let cdef = prepare_cdef(&opts.layout.header, precision)?;

    std::io::stdout().lock().write_all(cdef.text().as_bytes())?;

    Ok(())
}
