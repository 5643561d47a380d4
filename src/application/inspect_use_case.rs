// ============================================================
// Layer 2 — Inspect Use Case
// ============================================================
// Renders a readable report of what the loader and classifier made
// of a corpus: story metadata, detected entities, and each
// question's type and answer-type set. Purely a debugging aid for
// corpus authors — no answers are computed here.
//
// Returns the report as a String so the CLI decides where it goes
// (this layer never prints).

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use crate::data::loader::{load_manifest, CorpusLoader};
use crate::domain::question::Question;
use crate::domain::story::Story;
use crate::domain::traits::Annotator;

pub struct InspectUseCase {
    annotator: Box<dyn Annotator>,
}

impl InspectUseCase {
    pub fn new(annotator: Box<dyn Annotator>) -> Self {
        Self { annotator }
    }

    /// Load, annotate, and classify the corpus, and describe it.
    pub fn execute(&self, manifest_path: &Path) -> Result<String> {
        let manifest = load_manifest(manifest_path)?;
        let loader = CorpusLoader::new(&manifest.base_dir);

        let mut report = String::new();

        for basename in &manifest.basenames {
            let (story_record, question_records) = loader.load(basename)?;
            let text = self.annotator.annotate(&story_record.body)?;
            let story = Story::new(
                story_record.id,
                story_record.headline,
                story_record.date,
                text,
            );

            writeln!(report, "STORYID: {}", story.id)?;
            writeln!(report, "HEADLINE: {}", story.headline)?;
            writeln!(report, "DATE: {}", story.date)?;
            writeln!(report, "SENTENCES: {}", story.text.sentences.len())?;
            let entities: Vec<String> = story.entities.iter()
                .map(|e| format!("({}, {})", e.text, e.label.as_str()))
                .collect();
            writeln!(report, "ENTITIES: [{}]", entities.join(", "))?;
            writeln!(report)?;

            for record in question_records {
                let question_text = self.annotator.annotate(&record.text)?;
                let question = Question::new(
                    record.id,
                    story.id.clone(),
                    question_text,
                    record.difficulty,
                );

                writeln!(report, "QUESTIONID: {}", question.id)?;
                writeln!(report, "QUESTION: {}", question.text.text())?;
                writeln!(
                    report,
                    "QUESTION_TYPE: {}",
                    question.qtype.map(|t| t.as_str()).unwrap_or("-"),
                )?;
                let answer_types: Vec<&str> = question.answer_type.iter()
                    .map(|t| t.as_str())
                    .collect();
                writeln!(report, "ANSWER_TYPE: [{}]", answer_types.join(", "))?;
                writeln!(report, "DIFFICULTY: {}", question.difficulty)?;
                writeln!(report)?;
            }
        }

        Ok(report)
    }
}
