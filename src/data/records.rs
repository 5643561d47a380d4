// ============================================================
// Layer 4 — Corpus Record Parsing
// ============================================================
// Parses the two plain-text corpus file formats into raw records,
// before any annotation happens.
//
// Story file layout:
//   line 1:   HEADLINE: <text>
//   line 2:   DATE: <value>
//   line 3:   STORYID: <id>
//   lines 4-6: reserved (ignored)
//   lines 7+: body text, joined with single spaces
//
// Questions file layout — repeating 4-line records:
//   Identifier: <id>
//   Question: <text>
//   Difficulty: <value>
//   <blank separator>
//
// Anything that breaks these shapes is a MalformedRecordError,
// raised here so the engine only ever sees well-formed records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A corpus file that does not match its declared record format.
#[derive(Debug, Error)]
pub enum MalformedRecordError {
    #[error("{file}: line {line}: expected `{label}: <value>`, found `{found}`")]
    MissingLabel {
        file:  String,
        line:  usize,
        label: &'static str,
        found: String,
    },

    #[error("{file}: story file has {found} lines, need at least 7")]
    TruncatedStory { file: String, found: usize },

    #[error("{file}: question record starting at line {line} is truncated")]
    TruncatedQuestion { file: String, line: usize },
}

/// A story as read from disk, before annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: String,
    pub headline: String,
    pub date: String,
    /// Body lines joined with single spaces
    pub body: String,
}

/// One question as read from disk, before annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub text: String,
    pub difficulty: String,
}

/// Parse the pre-split, trimmed lines of a `.story` file.
pub fn parse_story(file: &str, lines: &[String]) -> Result<StoryRecord, MalformedRecordError> {
    if lines.len() < 7 {
        return Err(MalformedRecordError::TruncatedStory {
            file:  file.to_string(),
            found: lines.len(),
        });
    }

    let headline = labelled_value(file, lines, 0, "HEADLINE")?;
    let date     = labelled_value(file, lines, 1, "DATE")?;
    let id       = labelled_value(file, lines, 2, "STORYID")?;
    // Lines 4-6 are reserved; the body starts at line 7
    let body = lines[6..].join(" ");

    Ok(StoryRecord { id, headline, date, body })
}

/// Parse the pre-split, trimmed lines of a `.questions` file.
pub fn parse_questions(
    file: &str,
    lines: &[String],
) -> Result<Vec<QuestionRecord>, MalformedRecordError> {
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        // Tolerate stray blank lines between records
        if lines[i].is_empty() {
            i += 1;
            continue;
        }
        if i + 2 >= lines.len() {
            return Err(MalformedRecordError::TruncatedQuestion {
                file: file.to_string(),
                line: i + 1,
            });
        }

        let id         = labelled_value(file, lines, i, "Identifier")?;
        let text       = labelled_value(file, lines, i + 1, "Question")?;
        let difficulty = labelled_value(file, lines, i + 2, "Difficulty")?;
        records.push(QuestionRecord { id, text, difficulty });

        // Record body plus the blank separator
        i += 4;
    }

    Ok(records)
}

/// Extract the value of a `LABEL: value` line, verifying the label.
fn labelled_value(
    file: &str,
    lines: &[String],
    index: usize,
    label: &'static str,
) -> Result<String, MalformedRecordError> {
    let line = &lines[index];
    let value = line
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(|rest| rest.trim().to_string());

    value.ok_or_else(|| MalformedRecordError::MissingLabel {
        file:  file.to_string(),
        line:  index + 1,
        label,
        found: line.clone(),
    })
}
