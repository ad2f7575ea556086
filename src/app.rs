use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::domain::error::AppError;
use crate::interfaces::cli::{build_cli, dispatch};

pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let matches = build_cli().get_matches();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(dispatch(matches)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            exit_code_for(&err)
        }
    }
}

/// `2` when there was nothing to export, `1` for everything else
fn exit_code_for(err: &AppError) -> ExitCode {
    match err {
        AppError::EmptyExport(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
