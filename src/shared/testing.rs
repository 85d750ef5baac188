//! Test doubles for shared infrastructure.

use std::sync::Mutex;

use crate::shared::exec::{CommandRunner, ExecOutput};

/// One recorded invocation of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

impl RecordedCall {
    /// The full argument vector including the program name, for compact
    /// assertions in tests.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// A [`CommandRunner`] that records every invocation and replays canned
/// outputs in order. Once the queue is exhausted it returns empty successes.
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<Vec<ExecOutput>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned output for the next unanswered invocation.
    pub fn respond_with(self, output: ExecOutput) -> Self {
        self.responses.lock().unwrap().push(output);
        self
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ok(stdout: &str) -> ExecOutput {
        ExecOutput {
            success: true,
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }
    }

    pub fn fail(stderr: &str) -> ExecOutput {
        ExecOutput {
            success: false,
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<ExecOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
        });

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(ExecOutput {
                success: true,
                stdout: Vec::new(),
                stderr: Vec::new(),
            })
        } else {
            Ok(responses.remove(0))
        }
    }
}
