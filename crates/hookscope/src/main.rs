mod commands;
mod error;
mod shell;
mod tool;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "hookscope")]
#[command(about = "Pre-commit hooks scoped to changed packages", long_about = None)]
struct Cli {
    /// Directory to resolve changed packages from (default: current directory)
    #[arg(long = "cwd", short = 'C', global = true)]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .without_time()
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let start_path = match resolve_start_path(cli.cwd) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.execute(&start_path) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_start_path(cwd: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let path = match cwd {
        Some(path) => path,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };

    if !path.is_dir() {
        return Err(CliError::NotADirectory(path));
    }

    Ok(dunce::canonicalize(path)?)
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
