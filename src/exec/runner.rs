// ABOUTME: CommandRunner trait and the tokio::process implementation.
// ABOUTME: Captures exit code, stdout and stderr, optionally echoing output as it arrives.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use super::error::ExecError;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// How a command is run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Do not echo the command's output.
    pub silent: bool,
    /// Return the output instead of failing when the exit code is non-zero.
    pub ignore_return_code: bool,
}

impl ExecOptions {
    /// Quiet mode for capability probes: no echo, non-zero exit is not an error.
    pub fn probe() -> Self {
        Self {
            silent: true,
            ignore_return_code: true,
        }
    }
}

/// Runs external programs to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// Unless `options.ignore_return_code` is set, a non-zero exit is
    /// reported as [`ExecError::NonZeroExit`].
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        options: ExecOptions,
    ) -> Result<CommandOutput, ExecError>;
}

/// Runs commands as local child processes in the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        options: ExecOptions,
    ) -> Result<CommandOutput, ExecError> {
        let subcommand = args.first().copied().unwrap_or_default();
        // Arguments can carry credentials, so only the subcommand is logged.
        tracing::debug!(program, subcommand, "running command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let echo = !options.silent;
        let io_error = |source| ExecError::Io {
            program: program.to_string(),
            source,
        };

        let (stdout, stderr) = tokio::try_join!(
            drain(child.stdout.take(), echo),
            drain(child.stderr.take(), echo)
        )
        .map_err(io_error)?;

        let status = child.wait().await.map_err(io_error)?;

        let output = CommandOutput {
            exit_code: status.code(),
            stdout,
            stderr,
        };

        if !output.success() && !options.ignore_return_code {
            tracing::warn!(program, subcommand, exit_code = ?output.exit_code, "command failed");
            return Err(ExecError::NonZeroExit {
                program: program.to_string(),
                subcommand: subcommand.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output)
    }
}

/// Read a child pipe to the end, echoing each line to our stderr when asked.
///
/// Echoed output goes to stderr so stdout stays reserved for results.
async fn drain<R>(stream: Option<R>, echo: bool) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut collected = String::new();
    let Some(stream) = stream else {
        return Ok(collected);
    };

    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if echo {
            eprint!("{line}");
        }
        collected.push_str(&line);
    }

    Ok(collected)
}
