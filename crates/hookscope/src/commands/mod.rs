mod lock;
mod shellcheck;
mod typecheck;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use hookscope_git::Repository;
use hookscope_resolve::{PackageIndexCache, PackageRoot, resolve_changed_packages};

use crate::error::Result;

/// Manifest marking a directory as a Python package root.
pub(crate) const PYTHON_MANIFEST_PATTERN: &str = "**/pyproject.toml";

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run mypy against each changed package
    Typecheck(typecheck::TypecheckArgs),
    /// Verify or rewrite dependency lock files for changed packages
    Lock(lock::LockArgs),
    /// Run shellcheck against changed shell scripts
    Shellcheck(shellcheck::ShellcheckArgs),
}

impl Commands {
    /// Returns whether any wrapped tool invocation failed.
    pub(crate) fn execute(self, start_path: &Path) -> Result<bool> {
        match self {
            Self::Typecheck(args) => typecheck::run(&args, start_path),
            Self::Lock(args) => lock::run(&args, start_path),
            Self::Shellcheck(args) => shellcheck::run(&args, start_path),
        }
    }
}

/// Packages touched by staged changes or by the hook-supplied filenames.
pub(crate) fn changed_packages(
    start_path: &Path,
    filenames: &[PathBuf],
) -> Result<BTreeSet<PackageRoot>> {
    let repo = Repository::open(start_path)?;
    let mut cache = PackageIndexCache::new(start_path);
    let packages = resolve_changed_packages(
        &repo,
        start_path,
        PYTHON_MANIFEST_PATTERN,
        filenames,
        &mut cache,
    )?;
    Ok(packages)
}
