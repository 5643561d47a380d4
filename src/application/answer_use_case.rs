// ============================================================
// Layer 2 — Answer Use Case
// ============================================================
// The batch workflow: manifest → corpus files → annotated domain
// objects → one engine pass per question → responses in input
// order. This layer only coordinates; parsing lives in Layer 4 and
// all selection logic in Layer 5.
//
// The engine processes one story's question set fully before
// advancing to the next story. Questions never share mutable
// state — each one's answer is written exactly once, here.

use anyhow::Result;
use std::path::Path;

use crate::data::loader::{load_manifest, CorpusLoader};
use crate::domain::question::Question;
use crate::domain::story::Story;
use crate::domain::traits::{Annotator, Thesaurus};
use crate::engine;

/// One answered question, in engine output terms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Response {
    pub question_id: String,
    pub answer: String,
}

/// Runs a whole manifest through the answer-selection engine.
pub struct AnswerUseCase {
    annotator: Box<dyn Annotator>,
    thesaurus: Box<dyn Thesaurus>,
}

impl AnswerUseCase {
    /// Both collaborators are injected fully initialized, before
    /// any story is processed.
    pub fn new(annotator: Box<dyn Annotator>, thesaurus: Box<dyn Thesaurus>) -> Self {
        Self { annotator, thesaurus }
    }

    /// Process every (story, question) pair the manifest names and
    /// return the responses in input order.
    pub fn execute(&self, manifest_path: &Path) -> Result<Vec<Response>> {
        let manifest = load_manifest(manifest_path)?;
        let loader = CorpusLoader::new(&manifest.base_dir);

        let mut responses = Vec::new();

        for basename in &manifest.basenames {
            let (story_record, question_records) = loader.load(basename)?;

            let text = self.annotator.annotate(&story_record.body)?;
            let story = Story::new(
                story_record.id,
                story_record.headline,
                story_record.date,
                text,
            );
            tracing::info!(
                "answering {} questions for story '{}'",
                question_records.len(),
                story.id,
            );

            for record in question_records {
                let question_text = self.annotator.annotate(&record.text)?;
                let mut question = Question::new(
                    record.id,
                    story.id.clone(),
                    question_text,
                    record.difficulty,
                );

                let answer =
                    engine::answer_question(&question, &story, self.thesaurus.as_ref());
                question.record_answer(answer);

                responses.push(Response {
                    question_id: question.id.clone(),
                    answer:      question.answer().to_string(),
                });
            }
        }

        Ok(responses)
    }
}
