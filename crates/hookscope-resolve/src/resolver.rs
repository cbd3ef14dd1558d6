use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hookscope_git::Repository;
use tracing::debug;

use crate::Result;
use crate::index::{PackageIndexCache, PackageRoot};
use crate::path::normalize;

/// Immediate parent directory of each file, deduplicated.
///
/// Files need not exist; a bare filename maps to the empty path, which
/// [`normalize`] later resolves to the base directory.
#[must_use]
pub fn changed_directories<I>(files: I) -> BTreeSet<PathBuf>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    files
        .into_iter()
        .map(|file| {
            file.as_ref()
                .parent()
                .map_or_else(PathBuf::new, Path::to_path_buf)
        })
        .collect()
}

/// Package roots containing at least one changed directory.
///
/// `changed_dirs` must hold resolved absolute paths (see [`normalize`]).
/// Every matching root is returned: changes spanning several packages yield
/// several roots, and nested roots enclosing the same change all match.
/// Membership does not depend on index order.
#[must_use]
pub fn resolve(changed_dirs: &BTreeSet<PathBuf>, index: &[PackageRoot]) -> BTreeSet<PackageRoot> {
    index
        .iter()
        .filter(|root| changed_dirs.iter().any(|dir| root.contains(dir)))
        .cloned()
        .collect()
}

/// Packages touched by the staged changes of `repo` or by the explicitly
/// supplied `filenames`.
///
/// Staged paths are resolved against the repository root, supplied paths
/// against `start_path`; both feed the index memoized for `pattern`.
///
/// # Errors
///
/// Propagates staged-diff failures and index build failures.
pub fn resolve_changed_packages(
    repo: &Repository,
    start_path: &Path,
    pattern: &str,
    filenames: &[PathBuf],
    cache: &mut PackageIndexCache,
) -> Result<BTreeSet<PackageRoot>> {
    let staged = repo.staged_changes()?;

    let mut dirs: BTreeSet<PathBuf> = changed_directories(staged.iter().map(|change| &change.path))
        .iter()
        .map(|dir| normalize(repo.root(), dir))
        .collect();
    dirs.extend(
        changed_directories(filenames)
            .iter()
            .map(|dir| normalize(start_path, dir)),
    );

    let index = cache.index(pattern)?;
    let packages = resolve(&dirs, index);

    debug!(
        changed_dirs = dirs.len(),
        packages = packages.len(),
        "changed packages resolved"
    );
    Ok(packages)
}
