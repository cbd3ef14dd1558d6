use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use tracing::debug;

use crate::Result;
use crate::error::ResolveError;

/// Directory containing a manifest file, identified by its resolved path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageRoot(PathBuf);

impl PackageRoot {
    /// The path should be absolute and symlink-free; [`build_index`] only
    /// produces such roots.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Whether `path` lies inside this root.
    ///
    /// Matching is per path segment, so a sibling directory sharing a name
    /// prefix (`pkg-ab` next to `pkg-a`) is not contained.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.0)
    }
}

/// Enumerates package roots under `root`: parents of files matching the
/// manifest glob `pattern`, deduplicated, longest resolved path first.
///
/// # Errors
///
/// Returns [`ResolveError::GlobPattern`] for an invalid pattern and
/// [`ResolveError::Io`] if the directory walk fails; no partial index is
/// produced.
pub fn build_index(root: &Path, pattern: &str) -> Result<Vec<PackageRoot>> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| ResolveError::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut dirs = BTreeSet::new();
    collect_manifest_dirs(root, root, &glob, &mut dirs)?;

    let mut index: Vec<PackageRoot> = dirs.into_iter().map(PackageRoot).collect();
    // Most specific root first; path order breaks length ties so the
    // sequence is deterministic for a given filesystem state.
    index.sort_by(|a, b| {
        b.0.as_os_str()
            .len()
            .cmp(&a.0.as_os_str().len())
            .then_with(|| a.0.cmp(&b.0))
    });

    debug!(pattern, count = index.len(), "package index built");
    Ok(index)
}

fn collect_manifest_dirs(
    base: &Path,
    current: &Path,
    glob: &globset::GlobMatcher,
    results: &mut BTreeSet<PathBuf>,
) -> Result<()> {
    for entry in std::fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_manifest_dirs(base, &path, glob, results)?;
            continue;
        }

        let relative = path.strip_prefix(base).unwrap_or(&path);
        if glob.is_match(relative) {
            if let Some(parent) = path.parent() {
                results.insert(dunce::canonicalize(parent)?);
            }
        }
    }

    Ok(())
}

/// Per-process index cache keyed by the exact pattern string.
///
/// The first build per pattern is frozen for the cache's lifetime; later
/// lookups never re-scan the filesystem. A failed build caches nothing.
pub struct PackageIndexCache {
    root: PathBuf,
    entries: HashMap<String, Vec<PackageRoot>>,
}

impl PackageIndexCache {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// # Errors
    ///
    /// Propagates [`build_index`] failures on the first lookup of a pattern.
    pub fn index(&mut self, pattern: &str) -> Result<&[PackageRoot]> {
        match self.entries.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(slot) => {
                let built = build_index(&self.root, pattern)?;
                Ok(slot.insert(built).as_slice())
            }
        }
    }
}
