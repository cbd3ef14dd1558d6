mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{FileChange, FileStatus};

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// Relative paths of files staged for commit with status in
/// {Added, Copied, Modified, Renamed}.
///
/// # Errors
///
/// Returns an error if the path is not inside a git repository or if the
/// staged diff cannot be computed.
pub fn staged_files(path: &Path) -> Result<Vec<PathBuf>> {
    let changes = Repository::open(path)?.staged_changes()?;
    Ok(changes.into_iter().map(|change| change.path).collect())
}
