use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("invalid manifest pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("git error")]
    Git(#[from] hookscope_git::GitError),
}
