use std::{ffi::OsString, process::ExitStatus};

use thiserror::Error;
use tokio::process::Command;

/// Failure from an external command invocation.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Exited {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Executes an external command and blocks until it exits.
///
/// The pipeline only needs success or failure: stdout is discarded and
/// stderr is captured solely to populate the failure error. No timeout.
pub trait ProcessRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> std::result::Result<(), RunError>;
}

/// Runner backed by real system processes found on PATH.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[OsString]) -> std::result::Result<(), RunError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|source| RunError::Launch {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunError::Exited {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
