// ============================================================
// Layer 6 — Basic Annotator (stand-in pipeline)
// ============================================================
// The real annotation pipeline is a trained model that lives
// outside this crate and is injected through the Annotator trait.
// BasicAnnotator is the stand-in wired in when nothing better is
// available, so the binary always runs end-to-end:
//
//   - sentences split on terminal punctuation (". ! ?")
//   - tokens split on whitespace
//   - lemma = lower-cased surface with edge punctuation trimmed
//   - stop flags from the shared stop-word set
//   - NO dependency roles, NO entities, NO vectors
//
// With no entities, every entity-typed question degrades to the
// unfiltered lexical-overlap path — degraded answers, never a
// crash. Deterministic by construction: same text in, same
// annotations out.

use anyhow::Result;

use crate::domain::annotation::{AnnotatedSentence, AnnotatedText, AnnotatedToken};
use crate::domain::traits::Annotator;
use crate::engine::stop_words::is_stop_word;

/// Deterministic, dependency-free stand-in for the real pipeline.
pub struct BasicAnnotator;

impl BasicAnnotator {
    pub fn new() -> Self {
        Self
    }

    fn annotate_token(word: &str) -> AnnotatedToken {
        let trimmed = word.trim_matches(|c: char| c.is_ascii_punctuation());
        let lemma = if trimmed.is_empty() {
            word.to_lowercase()
        } else {
            trimmed.to_lowercase()
        };

        AnnotatedToken {
            text:        word.to_string(),
            lemma:       lemma.clone(),
            pos:         String::new(),
            dep:         String::new(),
            is_stop:     is_stop_word(&lemma),
            is_alpha:    word.chars().all(|c| c.is_alphabetic()),
            is_digit:    word.chars().all(|c| c.is_ascii_digit()),
            is_currency: word.chars().all(|c| matches!(c, '$' | '€' | '£' | '¥')),
            is_punct:    word.chars().all(|c| c.is_ascii_punctuation()),
        }
    }

    fn is_sentence_end(word: &str) -> bool {
        word.ends_with('.') || word.ends_with('!') || word.ends_with('?')
    }
}

impl Default for BasicAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for BasicAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedText> {
        let mut sentences = Vec::new();
        let mut tokens: Vec<AnnotatedToken> = Vec::new();

        for word in text.split_whitespace() {
            tokens.push(Self::annotate_token(word));
            if Self::is_sentence_end(word) {
                sentences.push(AnnotatedSentence {
                    tokens:   std::mem::take(&mut tokens),
                    entities: Vec::new(),
                    chunks:   Vec::new(),
                    vector:   Vec::new(),
                });
            }
        }

        // Trailing words without terminal punctuation still form a sentence
        if !tokens.is_empty() {
            sentences.push(AnnotatedSentence {
                tokens,
                entities: Vec::new(),
                chunks:   Vec::new(),
                vector:   Vec::new(),
            });
        }

        Ok(AnnotatedText::new(sentences))
    }
}
