//! Issue file origins: working tree, git branch, or GitHub gist.
//!
//! Origin selection and identifier validation happen up front, before any
//! file or subprocess access, so bad flags fail as usage errors rather than
//! surfacing as confusing I/O failures.

use std::fs;

use lazy_regex::regex_is_match;

use super::{MkissueArgs, MkissueError, Result};
use crate::shared::exec::CommandRunner;

/// Where the issue file comes from. Variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueSource {
    /// Read directly from the filesystem.
    Filesystem { path: String },

    /// Read from a git branch without touching the working tree,
    /// via `git show <branch>:<path>`.
    Branch { branch: String, path: String },

    /// Read a named file from a GitHub gist via `gh gist view`.
    Gist { gist_id: String, file_name: String },
}

impl IssueSource {
    /// Select and validate the origin from command-line flags.
    pub fn from_args(args: &MkissueArgs) -> Result<Self> {
        match (&args.branch, &args.gist) {
            (Some(_), Some(_)) => Err(MkissueError::Usage(
                "--branch and --gist cannot be used together".to_string(),
            )),
            (Some(branch), None) => {
                validate_git_input("branch name", branch)?;
                validate_git_input("file path", &args.file)?;
                Ok(Self::Branch {
                    branch: branch.clone(),
                    path: args.file.clone(),
                })
            }
            (None, Some(gist_id)) => {
                validate_gist_id(gist_id)?;
                validate_gist_file_name(&args.file)?;
                Ok(Self::Gist {
                    gist_id: gist_id.clone(),
                    file_name: args.file.clone(),
                })
            }
            (None, None) => Ok(Self::Filesystem {
                path: args.file.clone(),
            }),
        }
    }

    /// Fetch the raw file content.
    pub fn read(&self, runner: &dyn CommandRunner) -> Result<String> {
        match self {
            Self::Filesystem { path } => {
                fs::read_to_string(path).map_err(|source| MkissueError::FileNotFound {
                    path: path.clone(),
                    source,
                })
            }
            Self::Branch { branch, path } => {
                let output = runner.run("git", &["show".to_string(), format!("{branch}:{path}")])?;
                if !output.success {
                    return Err(MkissueError::SourceUnavailable {
                        origin: "branch",
                        stderr: output.stderr_text(),
                    });
                }
                Ok(output.stdout_text())
            }
            Self::Gist { gist_id, file_name } => {
                let output = runner.run(
                    "gh",
                    &[
                        "gist".to_string(),
                        "view".to_string(),
                        gist_id.clone(),
                        "--filename".to_string(),
                        file_name.clone(),
                        "--raw".to_string(),
                    ],
                )?;
                if !output.success {
                    return Err(MkissueError::SourceUnavailable {
                        origin: "gist",
                        stderr: output.stderr_text(),
                    });
                }
                Ok(output.stdout_text())
            }
        }
    }
}

/// Reject control characters that would break the `git show` invocation.
fn validate_git_input(what: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| matches!(c, '\0' | '\n' | '\r')) {
        return Err(MkissueError::Usage(format!(
            "invalid {what}: contains prohibited characters"
        )));
    }
    Ok(())
}

fn validate_gist_id(gist_id: &str) -> Result<()> {
    if !regex_is_match!(r"^[0-9a-f]{32}$", gist_id) {
        return Err(MkissueError::Usage(
            "invalid gist ID: must be a 32-character hexadecimal string".to_string(),
        ));
    }
    Ok(())
}

/// Gist file names may not contain path separators or shell metacharacters.
fn validate_gist_file_name(file_name: &str) -> Result<()> {
    if !regex_is_match!(r"^[A-Za-z0-9._-]+$", file_name) {
        return Err(MkissueError::Usage(
            "invalid file name: only alphanumeric characters, dots, underscores, and hyphens are allowed"
                .to_string(),
        ));
    }
    Ok(())
}
