use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use which::which;

use crate::commands;
use crate::error::{CliError, Result};
use crate::tool::{ToolCommand, run_all};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LockAction {
    /// Verify that the lock file is up to date
    Check,
    /// Rewrite the lock file
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LockBackend {
    /// First of poetry, uv found on the search path
    Auto,
    Poetry,
    Uv,
}

#[derive(Args)]
pub(crate) struct LockArgs {
    #[arg(value_enum)]
    action: LockAction,

    /// Filenames the hook runner believes are changed
    filenames: Vec<PathBuf>,

    /// Lock manager to invoke
    #[arg(long, value_enum, default_value = "auto")]
    backend: LockBackend,

    /// Extra arguments forwarded to the lock manager, after `--`
    #[arg(last = true)]
    extra: Vec<String>,
}

enum ResolvedBackend {
    Poetry(PathBuf),
    Uv(PathBuf),
}

impl ResolvedBackend {
    fn command(
        &self,
        package: &Path,
        action: LockAction,
        extra: &[String],
        start_path: &Path,
    ) -> ToolCommand {
        match self {
            // poetry resolves the project through -C and runs in the package
            Self::Poetry(program) => ToolCommand::new(program)
                .arg("-C")
                .arg(package)
                .arg(match action {
                    LockAction::Check => "check",
                    LockAction::Lock => "lock",
                })
                .args(extra)
                .current_dir(package),
            // uv takes the project as a flag and runs from the start path
            Self::Uv(program) => {
                let mut command = ToolCommand::new(program)
                    .arg("--project")
                    .arg(package)
                    .arg("lock");
                if action == LockAction::Check {
                    command = command.arg("--check");
                }
                command.args(extra).current_dir(start_path)
            }
        }
    }
}

fn select_backend(requested: LockBackend) -> Result<ResolvedBackend> {
    match requested {
        LockBackend::Poetry => which("poetry")
            .map(ResolvedBackend::Poetry)
            .map_err(|_| CliError::MissingExecutable { tools: "poetry" }),
        LockBackend::Uv => which("uv")
            .map(ResolvedBackend::Uv)
            .map_err(|_| CliError::MissingExecutable { tools: "uv" }),
        LockBackend::Auto => which("poetry")
            .map(ResolvedBackend::Poetry)
            .or_else(|_| which("uv").map(ResolvedBackend::Uv))
            .map_err(|_| CliError::MissingExecutable {
                tools: "either poetry or uv",
            }),
    }
}

pub(crate) fn run(args: &LockArgs, start_path: &Path) -> Result<bool> {
    let backend = select_backend(args.backend)?;

    let packages = commands::changed_packages(start_path, &args.filenames)?;

    run_all(
        packages
            .iter()
            .map(|package| backend.command(package.path(), args.action, &args.extra, start_path)),
    )
}
