//! Maps changed file paths to the package roots that contain them.
//!
//! A package root is the parent directory of a manifest file matched by a
//! glob pattern. Roots are enumerated once per pattern into a depth-sorted,
//! memoized index; changed paths are resolved against that index by
//! path-segment containment.

mod error;
mod index;
mod path;
mod resolver;

pub use error::ResolveError;
pub use index::{PackageIndexCache, PackageRoot, build_index};
pub use path::normalize;
pub use resolver::{changed_directories, resolve, resolve_changed_packages};

pub type Result<T> = std::result::Result<T, ResolveError>;
