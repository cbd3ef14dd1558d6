use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base` into an absolute comparison key.
///
/// Existing paths are canonicalized (symlink-free, `\\?\`-free on Windows).
/// Paths that do not exist on disk are made absolute and cleaned lexically
/// so that directory derivation still works for them.
#[must_use]
pub fn normalize(base: &Path, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    dunce::canonicalize(&absolute).unwrap_or_else(|_| clean(&absolute))
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}
