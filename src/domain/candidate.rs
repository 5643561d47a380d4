// ============================================================
// Layer 3 — Candidate Domain Type
// ============================================================
// A Candidate pairs one story sentence with everything the ranker
// needs to order it against the other sentences for one question:
// the entity spans that could answer, the similarity to the
// question, and the three overlap counts.
//
// Candidates are transient — built during the ranking of a single
// question, dropped as soon as its answer is chosen. They borrow
// the sentence from the Story rather than cloning it.
//
// Reference: Rust Book §10 (Lifetimes)

use crate::domain::annotation::AnnotatedSentence;
use crate::domain::entity::Entity;

/// One scored (question, sentence) pairing.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The story sentence under consideration
    pub sentence: &'a AnnotatedSentence,

    /// Entities in the sentence whose type is acceptable for the
    /// question; empty on the unfiltered fallback path
    pub answer_spans: Vec<Entity>,

    /// Whole-sentence similarity to the question text
    pub similarity: f32,

    /// Composite score from the scorer (overlap + weighted verb
    /// overlap + entity-gate bonus, or 0 when vetoed)
    pub weighted_score: i64,

    /// Raw content-lemma overlap count with the expanded question
    pub overlap_score: usize,

    /// Raw verb-lemma overlap count with the expanded question
    pub verb_overlap_score: usize,
}
