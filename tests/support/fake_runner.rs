// ABOUTME: Scripted CommandRunner that records every invocation.
// ABOUTME: Responses are consumed in order; an empty script answers with success.

use async_trait::async_trait;
use launchpad::exec::{CommandOutput, CommandRunner, ExecError, ExecOptions};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub options: ExecOptions,
}

#[derive(Default)]
pub struct FakeRunner {
    responses: Mutex<VecDeque<Result<CommandOutput, ExecError>>>,
    calls: Mutex<Vec<RecordedCommand>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next command exits 0 with no output.
    pub fn then_ok(self) -> Self {
        self.then_output(0, "")
    }

    /// Next command returns this exit code and stderr.
    pub fn then_output(self, exit_code: i32, stderr: &str) -> Self {
        self.push(Ok(CommandOutput {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }))
    }

    /// Next command fails the way a non-zero exit does in default mode.
    pub fn then_fail(self, subcommand: &str, stderr: &str) -> Self {
        self.push(Err(ExecError::NonZeroExit {
            program: "docker".to_string(),
            subcommand: subcommand.to_string(),
            exit_code: Some(1),
            stderr: stderr.to_string(),
        }))
    }

    fn push(self, response: Result<CommandOutput, ExecError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// First argument of every recorded command.
    pub fn subcommands(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|call| call.args.first().cloned().unwrap_or_default())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        options: ExecOptions,
    ) -> Result<CommandOutput, ExecError> {
        self.calls.lock().unwrap().push(RecordedCommand {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            options,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput {
                exit_code: Some(0),
                ..Default::default()
            }))
    }
}
