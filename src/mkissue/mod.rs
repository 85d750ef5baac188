//! Create a GitHub issue from a markdown file.
//!
//! The file carries issue metadata (title, assignees, labels, milestone,
//! projects) in a `---`-delimited frontmatter block followed by the issue
//! body. The frontmatter is parsed, referenced labels are created remotely
//! when missing, and the issue is created through the `gh` CLI.

mod frontmatter;
mod publish;
mod source;

use clap::Args;
use thiserror::Error;

use crate::shared::exec::{CommandRunner, SystemRunner};

#[derive(Error, Debug)]
pub enum MkissueError {
    /// Invalid flags or identifiers, detected before any I/O.
    #[error("{0}")]
    Usage(String),

    #[error("file '{path}' not found: {source}")]
    FileNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read file from {origin}: {stderr}")]
    SourceUnavailable {
        origin: &'static str,
        stderr: String,
    },

    #[error("invalid format: {0}")]
    MalformedInput(String),

    #[error("'title' is required in frontmatter")]
    TitleMissing,

    #[error("{context}: {stderr}")]
    CommandFailed { context: String, stderr: String },

    #[error("failed to parse label list: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MkissueError>;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct MkissueArgs {
    /// Path to the markdown file containing issue content. With --gist this
    /// is the name of the file inside the gist.
    #[arg(short = 'f', long = "file")]
    pub file: String,

    /// Read the file from a git branch instead of the working tree
    #[arg(short = 'b', long = "branch", conflicts_with = "gist")]
    pub branch: Option<String>,

    /// Read the file from a GitHub gist by its identifier
    #[arg(short = 'g', long = "gist", conflicts_with = "branch")]
    pub gist: Option<String>,
}

pub fn run(args: &MkissueArgs) -> Result<()> {
    run_with_runner(args, &SystemRunner)
}

fn run_with_runner(args: &MkissueArgs, runner: &dyn CommandRunner) -> Result<()> {
    let source = source::IssueSource::from_args(args)?;
    let content = source.read(runner)?;

    let (metadata, body) = frontmatter::parse_issue_file(&content)?;
    if metadata.title.is_empty() {
        return Err(MkissueError::TitleMissing);
    }

    publish::ensure_labels(runner, &metadata.labels)?;
    publish::create_issue(runner, &metadata, &body)?;

    println!("✅ Issue created successfully from {}", args.file);
    Ok(())
}
