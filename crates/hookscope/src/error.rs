use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("unable to locate {tools}")]
    MissingExecutable { tools: &'static str },

    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("git error")]
    Git(#[from] hookscope_git::GitError),

    #[error("resolution error")]
    Resolve(#[from] hookscope_resolve::ResolveError),
}

pub(crate) type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CliError;

    #[test]
    fn missing_executable_names_the_tools() {
        let err = CliError::MissingExecutable {
            tools: "either poetry or uv",
        };

        assert_eq!(err.to_string(), "unable to locate either poetry or uv");
    }

    #[test]
    fn not_a_directory_includes_path() {
        let err = CliError::NotADirectory(PathBuf::from("/no/such/dir"));

        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn git_error_converts_via_from() {
        let git_err = hookscope_git::GitError::NotARepository {
            path: PathBuf::from("/tmp/x"),
        };

        let cli_err: CliError = git_err.into();

        assert!(matches!(cli_err, CliError::Git(_)));
    }

    #[test]
    fn git_error_has_source_chain() {
        let git_err = hookscope_git::GitError::NotARepository {
            path: PathBuf::from("/tmp/x"),
        };
        let cli_err: CliError = git_err.into();

        assert!(std::error::Error::source(&cli_err).is_some());
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");

        let cli_err: CliError = io_err.into();

        assert!(matches!(cli_err, CliError::Io(_)));
    }
}
