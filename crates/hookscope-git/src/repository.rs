use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{FileChange, FileStatus, GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner.workdir().ok_or_else(|| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        // Use dunce to get a path without the \\?\ prefix on Windows
        let root = dunce::simplified(root).to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerates files staged for commit, keeping additions, copies,
    /// modifications and renames and skipping deletions.
    ///
    /// Paths are relative to the repository root. The equivalent porcelain
    /// query is `git diff --cached --name-only --diff-filter=ACMR`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Git`] if the index or HEAD tree cannot be read,
    /// or [`GitError::MissingDeltaPath`] if a delta carries no path.
    pub fn staged_changes(&self) -> Result<Vec<FileChange>> {
        // On an unborn branch there is no HEAD tree; diffing against None
        // reports the whole index as added.
        let head_tree = match self.inner.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                None
            }
            Err(e) => return Err(e.into()),
        };

        let index = self.inner.index()?;
        let mut diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        find_opts.copies(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Copied => FileStatus::Copied,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            changes.push(FileChange::new(path, status));
        }

        debug!(count = changes.len(), "staged changes collected");
        Ok(changes)
    }
}
