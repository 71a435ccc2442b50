// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::api::Deployment;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Only final results, for capturing in CI steps
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    fn elapsed_secs(&self) -> Option<f64> {
        self.start_time.map(|t| t.elapsed().as_secs_f64())
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            eprintln!("{message}");
        }
    }

    /// Print a plain result line. JSON mode wraps it in a `result` event.
    pub fn result(&self, value: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => println!("{value}"),
            OutputMode::Json => self.emit_stdout(&JsonEvent::new("result").value(value)),
        }
    }

    /// Report a registered deployment.
    pub fn deployed(&self, deployment: &Deployment) {
        match self.mode {
            OutputMode::Normal => match self.elapsed_secs() {
                Some(elapsed) => println!("Deployed: {} ({:.1}s)", deployment.url, elapsed),
                None => println!("Deployed: {}", deployment.url),
            },
            OutputMode::Quiet => println!("{}", deployment.url),
            OutputMode::Json => {
                let event = JsonEvent::new("deployed")
                    .url(&deployment.url)
                    .duration(self.elapsed_secs());
                self.emit_stdout(&event);
            }
        }
    }

    /// Print a success message (suppressed in quiet mode).
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => println!("{message}"),
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit_stdout(&JsonEvent::new("success").message(message)),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = JsonEvent::new("error")
                    .message(message)
                    .duration(self.elapsed_secs());
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn emit_stdout(&self, event: &JsonEvent<'_>) {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{json}");
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

impl<'a> JsonEvent<'a> {
    fn new(event: &'a str) -> Self {
        Self {
            event,
            message: None,
            value: None,
            url: None,
            duration_secs: None,
        }
    }

    fn message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    fn url(mut self, url: &'a str) -> Self {
        self.url = Some(url);
        self
    }

    fn duration(mut self, duration_secs: Option<f64>) -> Self {
        self.duration_secs = duration_secs;
        self
    }
}
