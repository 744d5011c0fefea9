//! `questbind build` command

use anyhow::{Context, Result};

use super::Project;
use crate::cli::BuildArgs;
use questbind::builder::generator::NativeModuleGenerator;
use questbind::builder::toolchain::detect_toolchain;
use questbind::ops::{build_bindings, open_probe, plan_bindings, BuildOptions};

pub fn execute(args: BuildArgs) -> Result<()> {
    let project = Project::load(args.project.root)?;
    let generator_config = project.config.generator;

    let mut opts = BuildOptions::new(project.layout)
        .with_precision_override(args.project.precision);

    // CLI > config > defaults
    if let Some(name) = args.module.or(generator_config.module_name) {
        opts = opts.with_module_name(name);
    }
    // A flag is relative to the working directory, a config value to the root
    let out_dir = match args.out_dir {
        Some(dir) => Some(
            std::env::current_dir()
                .context("failed to determine current directory")?
                .join(dir),
        ),
        None => generator_config.out_dir.map(|dir| opts.layout.root.join(dir)),
    };
    if let Some(out_dir) = out_dir {
        opts = opts.with_out_dir(out_dir);
    }
    if let Some(link_args) = generator_config.extra_link_args {
        opts = opts.with_extra_link_args(link_args);
    }

    let probe = open_probe(&opts)?;

    if args.plan {
        let plan = plan_bindings(&opts, probe.as_ref())?;
        println!("{}", serde_json::to_string_pretty(&plan.request)?);
        return Ok(());
    }

    let toolchain = detect_toolchain(generator_config.cc.as_deref())?;
    let generator = NativeModuleGenerator::new(toolchain);
    let outcome = build_bindings(&opts, probe.as_ref(), &generator)?;

    eprintln!(
        "    Finished `{}` ({} precision) -> {}",
        outcome.plan.request.module_name,
        outcome.plan.precision,
        outcome.generated.module.display()
    );

    Ok(())
}
