use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::error::Result;

/// One external tool invocation. Stdout and stderr are inherited so the
/// wrapped tool's output streams straight to the hook runner.
pub(crate) struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub(crate) fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub(crate) fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub(crate) fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    pub(crate) fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    fn status(&self) -> std::io::Result<ExitStatus> {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command.status()
    }

    fn rendered(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// Runs every command in order, blocking on each until it exits. A failing
/// invocation does not stop the remaining ones; the return value says
/// whether any invocation exited unsuccessfully.
///
/// # Errors
///
/// Returns [`crate::error::CliError::Io`] if a command cannot be spawned.
pub(crate) fn run_all(commands: impl IntoIterator<Item = ToolCommand>) -> Result<bool> {
    let mut any_failed = false;

    for command in commands {
        info!("{}", command.rendered());
        let status = command.status()?;
        if !status.success() {
            any_failed = true;
        }
    }

    Ok(any_failed)
}
