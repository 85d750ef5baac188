//! Remote label and issue creation through the `gh` CLI.

use std::io::Write;

use serde::Deserialize;

use super::frontmatter::{IssueMetadata, Label};
use super::{MkissueError, Result};
use crate::shared::exec::CommandRunner;

#[derive(Debug, Deserialize)]
struct RemoteLabel {
    name: String,
}

/// Create every label that carries creation metadata and is not already
/// present remotely. Name-only labels reference existing labels and cause
/// no remote calls at all.
pub fn ensure_labels(runner: &dyn CommandRunner, labels: &[Label]) -> Result<()> {
    for label in labels {
        if !label.has_creation_metadata() {
            continue;
        }
        ensure_label_exists(runner, label)?;
    }
    Ok(())
}

fn ensure_label_exists(runner: &dyn CommandRunner, label: &Label) -> Result<()> {
    let output = runner.run(
        "gh",
        &[
            "label".to_string(),
            "list".to_string(),
            "--json".to_string(),
            "name".to_string(),
        ],
    )?;
    if !output.success {
        return Err(MkissueError::CommandFailed {
            context: "failed to list labels".to_string(),
            stderr: output.stderr_text(),
        });
    }

    let existing: Vec<RemoteLabel> = serde_json::from_slice(&output.stdout)?;
    if existing.iter().any(|l| l.name == label.name) {
        return Ok(());
    }

    println!("Creating label: {}", label.name);

    let mut args = vec![
        "label".to_string(),
        "create".to_string(),
        label.name.clone(),
    ];
    if !label.color.is_empty() {
        args.push("--color".to_string());
        args.push(label.color.clone());
    }
    if !label.desc.is_empty() {
        args.push("--description".to_string());
        args.push(label.desc.clone());
    }

    let output = runner.run("gh", &args)?;
    if !output.success {
        return Err(MkissueError::CommandFailed {
            context: "failed to create label".to_string(),
            stderr: output.stderr_text(),
        });
    }
    Ok(())
}

/// Create the issue with all metadata attached.
///
/// A non-empty body is passed via a temporary file; the file is removed on
/// every exit path, including remote failures, when the guard drops.
pub fn create_issue(
    runner: &dyn CommandRunner,
    metadata: &IssueMetadata,
    body: &str,
) -> Result<()> {
    let mut args = vec![
        "issue".to_string(),
        "create".to_string(),
        "--title".to_string(),
        metadata.title.clone(),
    ];

    let body_file = if body.is_empty() {
        None
    } else {
        let mut file = tempfile::Builder::new()
            .prefix("issue-body-")
            .suffix(".md")
            .tempfile()?;
        file.write_all(body.as_bytes())?;
        file.flush()?;
        Some(file)
    };
    if let Some(file) = &body_file {
        args.push("--body-file".to_string());
        args.push(file.path().to_string_lossy().into_owned());
    }

    for assignee in &metadata.assignees {
        args.push("--assignee".to_string());
        // "me" is a sentinel for the authenticated caller; gh spells it @me.
        if assignee == "me" {
            args.push("@me".to_string());
        } else {
            args.push(assignee.clone());
        }
    }

    for label in &metadata.labels {
        args.push("--label".to_string());
        args.push(label.name.clone());
    }

    if !metadata.milestone.is_empty() {
        args.push("--milestone".to_string());
        args.push(metadata.milestone.clone());
    }

    for project in &metadata.projects {
        args.push("--project".to_string());
        args.push(project.clone());
    }

    println!("Creating issue...");
    let output = runner.run("gh", &args)?;
    if !output.success {
        return Err(MkissueError::CommandFailed {
            context: "gh command failed".to_string(),
            stderr: output.stderr_text(),
        });
    }

    Ok(())
}
