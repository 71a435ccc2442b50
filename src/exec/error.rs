// ABOUTME: Error types for external command execution.
// ABOUTME: Covers spawn failures, pipe I/O failures, and non-zero exits.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {subcommand} exited with {}: {stderr}", describe_exit(.exit_code))]
    NonZeroExit {
        program: String,
        subcommand: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}
