// ============================================================
// Layer 5 — Answer-Selection Engine
// ============================================================
// The decision procedure that picks one story sentence (or entity
// span within it) per question. One question flows through:
//
//   classifier   → question type + acceptable entity types
//       │            (decided at Question construction)
//       ▼
//   expander     → thesaurus-widened word/verb lemma sets
//       │
//       ▼
//   scorer       → composite score per sentence (overlap + gate)
//       │
//       ▼
//   ranker       → layered stable sorts + dependency narrowing
//       │
//       ▼
//   extractor    → final answer string
//
// Everything here is pure computation over in-memory annotations:
// no I/O, no shared mutable state, fully deterministic. Questions
// are independent of each other, so this pipeline could run in
// parallel across (story, question) pairs — nothing below requires
// or forbids that.

// Question-type trigger tables and classification
pub mod classifier;

// Thesaurus-based lemma expansion
pub mod expander;

// Per-sentence composite scoring with entity gating
pub mod scorer;

// Layered-sort ranking and dependency narrowing
pub mod ranker;

// Final answer assembly and question-echo stripping
pub mod extractor;

// The shared stop-word configuration
pub mod stop_words;

use crate::domain::question::Question;
use crate::domain::story::Story;
use crate::domain::traits::Thesaurus;
use expander::LexicalExpander;

/// Run the full selection pipeline for one question against its
/// story and return the answer string.
pub fn answer_question(
    question: &Question,
    story: &Story,
    thesaurus: &dyn Thesaurus,
) -> String {
    let expander = LexicalExpander::new(thesaurus);
    let words_from_question = expander.question_words(&question.text);
    let verbs_from_question = expander.question_verbs(&question.text);

    let scores = scorer::score_sentences(
        question, story,
        &words_from_question, &verbs_from_question,
    );
    let candidates = ranker::rank(
        question, story,
        &words_from_question, &verbs_from_question,
        &scores.scores,
    );

    tracing::debug!(
        question_id = %question.id,
        qtype = question.qtype.map(|t| t.as_str()).unwrap_or("-"),
        high_score = scores.high_score,
        candidates = candidates.len(),
        "ranked question"
    );

    extractor::extract(question, &candidates, &scores, story)
}
