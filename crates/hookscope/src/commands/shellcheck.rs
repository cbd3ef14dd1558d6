use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use hookscope_git::Repository;
use hookscope_resolve::normalize;
use tracing::debug;
use which::which;

use crate::error::{CliError, Result};
use crate::shell;
use crate::tool::{ToolCommand, run_all};

#[derive(Args)]
pub(crate) struct ShellcheckArgs {
    /// Filenames the hook runner believes are changed
    filenames: Vec<PathBuf>,

    /// Extra arguments forwarded to shellcheck, after `--`
    #[arg(last = true)]
    extra: Vec<String>,
}

pub(crate) fn run(args: &ShellcheckArgs, start_path: &Path) -> Result<bool> {
    // A uv-managed shellcheck stands in when none is installed directly.
    let (program, leading): (PathBuf, &[&str]) = match which("shellcheck") {
        Ok(path) => (path, &[]),
        Err(_) => match which("uv") {
            Ok(path) => (path, &["run", "shellcheck"]),
            Err(_) => {
                return Err(CliError::MissingExecutable {
                    tools: "shellcheck",
                });
            }
        },
    };

    let repo = Repository::open(start_path)?;
    let mut files: BTreeSet<PathBuf> = repo
        .staged_changes()?
        .iter()
        .map(|change| normalize(repo.root(), &change.path))
        .collect();
    files.extend(args.filenames.iter().map(|file| normalize(start_path, file)));

    let mut tool_commands = Vec::new();
    for file in files {
        if !shell::is_shell_script(&file) {
            debug!(path = %file.display(), "not a shell script");
            continue;
        }

        tool_commands.push(
            ToolCommand::new(&program)
                .args(leading)
                .args(&args.extra)
                .arg(&file)
                .current_dir(start_path),
        );
    }

    run_all(tool_commands)
}
