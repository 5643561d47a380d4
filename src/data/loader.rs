// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads a batch run's input from disk:
//
//   run manifest (plain text)
//     line 1:  base directory for all corpus files
//     line 2+: one story basename per line
//
//   per basename X:
//     X.story      — headline/date/id header + body text
//     X.questions  — 4-line question records
//
// The loader reads files and hands the raw lines to the record
// parsers; it knows nothing about annotations or the engine.
// I/O failures carry the offending path via anyhow context,
// format violations surface as MalformedRecordError.
//
// Reference: Rust Book §9 (Error Handling), §12 (I/O)

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::records::{self, QuestionRecord, StoryRecord};

/// A parsed run manifest: where the corpus lives and which story
/// basenames to process, in input order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub base_dir: PathBuf,
    pub basenames: Vec<String>,
}

/// Read and parse a run manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let lines = read_trimmed_lines(path)?;

    let Some(base_dir) = lines.first().filter(|l| !l.is_empty()) else {
        bail!("manifest '{}' is empty — line 1 must be the base directory", path.display());
    };

    let basenames: Vec<String> = lines[1..]
        .iter()
        .filter(|l| !l.is_empty())
        .cloned()
        .collect();

    if basenames.is_empty() {
        tracing::warn!("manifest '{}' names no stories", path.display());
    }

    Ok(Manifest {
        base_dir: PathBuf::from(base_dir),
        basenames,
    })
}

/// Loads story/question file pairs relative to the manifest's
/// base directory.
pub struct CorpusLoader {
    base_dir: PathBuf,
}

impl CorpusLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Load the `.story`/`.questions` pair for one basename.
    pub fn load(&self, basename: &str) -> Result<(StoryRecord, Vec<QuestionRecord>)> {
        let story_path = self.base_dir.join(format!("{basename}.story"));
        let story_lines = read_trimmed_lines(&story_path)?;
        let story = records::parse_story(&story_path.to_string_lossy(), &story_lines)?;

        let questions_path = self.base_dir.join(format!("{basename}.questions"));
        let question_lines = read_trimmed_lines(&questions_path)?;
        let questions =
            records::parse_questions(&questions_path.to_string_lossy(), &question_lines)?;

        tracing::debug!(
            "loaded story '{}' ({} questions) from basename '{}'",
            story.id,
            questions.len(),
            basename,
        );

        Ok((story, questions))
    }
}

/// Read a file into whitespace-trimmed lines.
fn read_trimmed_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}
