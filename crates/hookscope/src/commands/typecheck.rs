use std::path::{Path, PathBuf};

use clap::Args;
use which::which;

use crate::commands;
use crate::error::{CliError, Result};
use crate::tool::{ToolCommand, run_all};

/// mypy is run through whichever package manager hosts it, so the project's
/// own environment resolves the imports being checked.
const RUNNERS: &[&str] = &["poetry", "uv"];

#[derive(Args)]
pub(crate) struct TypecheckArgs {
    /// Filenames the hook runner believes are changed
    filenames: Vec<PathBuf>,

    /// Extra arguments forwarded to mypy, after `--`
    #[arg(last = true)]
    extra: Vec<String>,
}

pub(crate) fn run(args: &TypecheckArgs, start_path: &Path) -> Result<bool> {
    let runner = RUNNERS
        .iter()
        .find_map(|name| which(name).ok())
        .ok_or(CliError::MissingExecutable {
            tools: "either poetry or uv",
        })?;

    let packages = commands::changed_packages(start_path, &args.filenames)?;

    run_all(packages.iter().map(|package| {
        ToolCommand::new(&runner)
            .arg("run")
            .arg("mypy")
            .args(&args.extra)
            .arg(package.path())
            .current_dir(package.path())
    }))
}
