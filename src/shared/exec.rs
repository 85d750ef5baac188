//! Subprocess execution behind a narrow capability interface.
//!
//! All external collaborators (`git`, `gh`) are invoked through
//! [`CommandRunner`] so that command-building code can be tested with a
//! recording fake instead of spawning real processes.

use std::process::Command;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Run an external command and capture its output.
///
/// Arguments are always passed as a vector, never through a shell, so
/// caller-supplied strings cannot be interpreted as shell syntax.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<ExecOutput>;
}

/// Runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<ExecOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(ExecOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
