//! Apply command implementation.
//!
//! Resolves the module's relative imports against the filesystem, then runs
//! it through the assembled plugin pipeline and prints the result.

use frontkit_config::{BuildConfiguration, ModuleRecord};
use std::fs;
use std::path::Path;

use crate::cli::ApplyArgs;
use crate::commands::utils;
use crate::config::Settings;
use crate::error::{Result, ResultExt};

/// Execute the apply command.
pub fn execute(args: ApplyArgs, settings: &Settings) -> Result<()> {
    let path = utils::resolve_path(&args.file, &utils::get_cwd()?);
    let code = fs::read_to_string(&path).with_path(&path)?;

    let configs = utils::build_all(settings)?;
    for config in &configs {
        if configs.len() > 1 {
            println!("// {}", config.axes.target());
        }
        let output = transform(config, &path, &code)?;
        if output.ends_with('\n') {
            print!("{output}");
        } else {
            println!("{output}");
        }
    }
    Ok(())
}

/// Module text after every stage of `config`'s pipeline. Every import of a
/// source module must resolve first.
pub fn transform(config: &BuildConfiguration, path: &Path, code: &str) -> Result<String> {
    let module = ModuleRecord::new(path, code);

    if let Some(resolution) = config.pipeline().resolution() {
        for (specifier, resolved) in resolution.resolve_imports(&module, Path::is_file)? {
            tracing::debug!(%specifier, ?resolved, "resolved import");
        }
    }

    let module = config.pipeline().run(module)?;
    Ok(module.code)
}
