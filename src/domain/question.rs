// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// One question about one story.
//
// Two invariants are enforced structurally here:
//   1. `qtype` and `answer_type` are decided ONCE, at construction,
//      by the classifier — nothing may revise them afterwards.
//   2. `answer` starts empty and is written exactly once by the
//      extraction step; `record_answer` is the only write path.
//
// A Question holds its story's id rather than the Story itself —
// a non-owning back-reference, since many questions share a story.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use crate::domain::annotation::AnnotatedText;
use crate::domain::entity::EntityType;
use crate::engine::classifier;

/// The closed set of question types the classifier can assign.
/// The classifier's trigger table is evaluated in exactly this
/// order; the enum exists so type decisions are compared, matched,
/// and printed without string juggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Who,
    What,
    When,
    Why,
    Which,
    Where,
    Measure,
    How,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Who     => "WHO",
            QuestionType::What    => "WHAT",
            QuestionType::When    => "WHEN",
            QuestionType::Why     => "WHY",
            QuestionType::Which   => "WHICH",
            QuestionType::Where   => "WHERE",
            QuestionType::Measure => "MEASURE",
            QuestionType::How     => "HOW",
        }
    }
}

/// An annotated question bound to one story.
#[derive(Debug, Clone)]
pub struct Question {
    /// Corpus-assigned question identifier
    pub id: String,

    /// Id of the story this question is about (non-owning)
    pub story_id: String,

    /// The annotated question text
    pub text: AnnotatedText,

    /// Difficulty label from the questions file (kept verbatim)
    pub difficulty: String,

    /// Classified question type; None when no trigger matched
    pub qtype: Option<QuestionType>,

    /// Acceptable answer entity types; empty when the type carries
    /// no fixed entity-type set (WHAT/WHY/WHICH/HOW or unclassified)
    pub answer_type: Vec<EntityType>,

    /// The chosen answer — empty until extraction writes it once
    answer: String,
}

impl Question {
    /// Build a Question and classify it immediately. The surface
    /// text drives classification, so the type is fixed before the
    /// question is ever scored.
    pub fn new(
        id:         impl Into<String>,
        story_id:   impl Into<String>,
        text:       AnnotatedText,
        difficulty: impl Into<String>,
    ) -> Self {
        let (qtype, answer_type) = classifier::classify(&text.text());
        Self {
            id:         id.into(),
            story_id:   story_id.into(),
            text,
            difficulty: difficulty.into(),
            qtype,
            answer_type,
            answer:     String::new(),
        }
    }

    /// True when the classifier assigned a fixed entity-type set.
    pub fn has_answer_type(&self) -> bool {
        !self.answer_type.is_empty()
    }

    /// Write the final answer. Called exactly once per question by
    /// the extraction step; a second write is a logic error upstream.
    pub fn record_answer(&mut self, answer: String) {
        debug_assert!(self.answer.is_empty(), "answer written twice");
        self.answer = answer;
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{AnnotatedSentence, AnnotatedToken};

    fn word(text: &str) -> AnnotatedToken {
        AnnotatedToken {
            text:        text.to_string(),
            lemma:       text.to_lowercase(),
            pos:         "X".to_string(),
            dep:         String::new(),
            is_stop:     false,
            is_alpha:    true,
            is_digit:    false,
            is_currency: false,
            is_punct:    false,
        }
    }

    fn question_text(words: &[&str]) -> AnnotatedText {
        AnnotatedText::new(vec![AnnotatedSentence {
            tokens:   words.iter().map(|w| word(w)).collect(),
            entities: vec![],
            chunks:   vec![],
            vector:   vec![],
        }])
    }

    #[test]
    fn test_classified_on_construction() {
        let q = Question::new("Q1", "S1", question_text(&["Who", "won"]), "Easy");
        assert_eq!(q.qtype, Some(QuestionType::Who));
        assert!(q.has_answer_type());
    }

    #[test]
    fn test_unclassified_question_has_no_type() {
        let q = Question::new("Q2", "S1", question_text(&["Name", "the", "winner"]), "Hard");
        assert_eq!(q.qtype, None);
        assert!(!q.has_answer_type());
    }

    #[test]
    fn test_answer_starts_empty_and_records_once() {
        let mut q = Question::new("Q3", "S1", question_text(&["Who", "won"]), "Easy");
        assert_eq!(q.answer(), "");
        q.record_answer("John Smith".to_string());
        assert_eq!(q.answer(), "John Smith");
    }
}
