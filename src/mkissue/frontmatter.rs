//! Line-oriented frontmatter scanner for issue files.
//!
//! This is deliberately not a YAML parser. It recognizes exactly the subset
//! of syntax used by our issue templates: scalar `key: value` lines, inline
//! `[a, b]` arrays, indented `- item` lists, and the `- name:`/`color:`/
//! `desc:` record form for labels. Unknown keys are skipped without error so
//! templates can carry fields this tool does not know about.

use super::{MkissueError, Result};

/// Parsed metadata of one issue file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueMetadata {
    pub title: String,
    pub assignees: Vec<String>,
    pub labels: Vec<Label>,
    pub milestone: String,
    pub projects: Vec<String>,
}

/// One label reference. `color` and `desc` are creation hints; a label with
/// both empty refers to an existing label and is never created.
#[derive(Debug, Clone, Default)]
pub struct Label {
    pub name: String,
    pub color: String,
    pub desc: String,
}

impl Label {
    /// Whether this label carries metadata that may require creating it
    /// remotely.
    pub fn has_creation_metadata(&self) -> bool {
        !self.color.is_empty() || !self.desc.is_empty()
    }
}

// Labels are identified by name alone; color and desc do not participate.
impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Label {}

/// Split file content into `(metadata, body)`.
///
/// The content must contain at least two `---` delimiters: everything before
/// the first is ignored, the segment between the first and second is the
/// frontmatter, and the rest is the body. Further `---` occurrences inside
/// the body are rejoined verbatim.
pub fn parse_issue_file(content: &str) -> Result<(IssueMetadata, String)> {
    let parts: Vec<&str> = content.split("---").collect();
    if parts.len() < 3 {
        return Err(MkissueError::MalformedInput(
            "frontmatter not found".to_string(),
        ));
    }

    let frontmatter = parts[1].trim();
    let body = parts[2..].join("---").trim().to_string();

    let lines: Vec<&str> = frontmatter.split('\n').collect();
    let mut metadata = IssueMetadata::default();

    let mut i = 0;
    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.starts_with("title:") {
            metadata.title = extract_value(trimmed, "title:");
        } else if trimmed.starts_with("assign:") {
            (metadata.assignees, i) = parse_list_field(&lines, i, "assign:");
        } else if trimmed.starts_with("labels:") {
            (metadata.labels, i) = parse_labels(&lines, i);
        } else if trimmed.starts_with("milestone:") {
            metadata.milestone = extract_value(trimmed, "milestone:");
        } else if trimmed.starts_with("projects:") {
            (metadata.projects, i) = parse_list_field(&lines, i, "projects:");
        }
        // Anything else is an unrecognized field; skip it.

        i += 1;
    }

    Ok((metadata, body))
}

/// Strip `prefix` from `line`, trim whitespace, then trim any leading or
/// trailing quote characters.
///
/// Quotes are trimmed from both ends independently, so `"mismatched'` loses
/// both quotes. Matched-pair checking would reject inputs that historically
/// parsed fine, so the loose behavior is kept.
fn extract_value(line: &str, prefix: &str) -> String {
    line.strip_prefix(prefix)
        .unwrap_or(line)
        .trim()
        .trim_matches(['"', '\''])
        .to_string()
}

/// Parse a flat list field (assignees, projects) starting at `start_idx`.
///
/// Accepts either the inline form `key: [a, b]` (consumes no extra lines) or
/// the block form of indented `- item` lines. Returns the items and the index
/// of the last line consumed; the caller resumes one line after it.
fn parse_list_field(lines: &[&str], start_idx: usize, prefix: &str) -> (Vec<String>, usize) {
    let trimmed = lines[start_idx].trim();

    if trimmed.contains('[') {
        let content = trimmed
            .strip_prefix(prefix)
            .unwrap_or(trimmed)
            .trim()
            .trim_matches(['[', ']']);

        let items = content
            .split(',')
            .map(|item| item.trim().trim_matches(['"', '\'', '@']).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        return (items, start_idx);
    }

    let mut items = Vec::new();
    let mut i = start_idx + 1;
    while i < lines.len() {
        let line = lines[i];
        let item_line = line.trim();

        if !item_line.starts_with('-') {
            // A non-indented `key:` line starts the next top-level field.
            if line.contains(':') && !line.starts_with(' ') && !line.starts_with('\t') {
                break;
            }
            i += 1;
            continue;
        }

        let item = item_line
            .strip_prefix('-')
            .unwrap_or(item_line)
            .trim()
            .trim_matches(['"', '\'', '@']);
        if !item.is_empty() {
            items.push(item.to_string());
        }
        i += 1;
    }

    (items, i - 1)
}

/// Parse the `labels:` block starting at `start_idx`.
///
/// Each `- name:` line opens a record; indented `color:` and `desc:` lines
/// attach to it until the next `- name:` or a non-indented line. Returns the
/// labels and the index of the last line consumed.
fn parse_labels(lines: &[&str], start_idx: usize) -> (Vec<Label>, usize) {
    let mut labels = Vec::new();
    let mut i = start_idx + 1;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        // A non-indented `key:` line starts the next top-level field.
        if !line.starts_with(' ') && !line.starts_with('\t') && line.contains(':') {
            break;
        }

        if trimmed.starts_with("- name:") {
            let mut label = Label {
                name: extract_value(trimmed, "- name:"),
                ..Label::default()
            };

            // Collect sub-fields until another record or a non-indented line,
            // then rewind one so the outer loop sees that line.
            i += 1;
            while i < lines.len() {
                let next_line = lines[i];
                let next_trimmed = next_line.trim();

                if next_trimmed.starts_with("- name:") {
                    i -= 1;
                    break;
                }
                if !next_line.starts_with(' ') && !next_line.starts_with('\t') {
                    i -= 1;
                    break;
                }

                if next_trimmed.starts_with("color:") {
                    label.color = extract_value(next_trimmed, "color:");
                } else if next_trimmed.starts_with("desc:") {
                    label.desc = extract_value(next_trimmed, "desc:");
                }

                i += 1;
            }

            labels.push(label);
        }

        i += 1;
    }

    (labels, i.min(lines.len()) - 1)
}
