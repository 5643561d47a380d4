// ============================================================
// Layer 3 — Annotation Carrier Types
// ============================================================
// The linguistic pipeline (tokenization, sentence segmentation,
// POS tagging, dependency parsing, NER, sentence vectors) lives
// OUTSIDE this crate. What the engine consumes is the pipeline's
// already-computed output, carried by these three types:
//
//   AnnotatedText
//     └── sentences: Vec<AnnotatedSentence>
//           ├── tokens:   Vec<AnnotatedToken>
//           ├── entities: Vec<Entity>
//           ├── chunks:   noun-phrase token ranges
//           └── vector:   sentence embedding
//
// Everything derived (lemma sets, similarity, surface text) is
// computed on demand from these fields, so two runs over the same
// annotations always see identical values.
//
// All fields are public: the pipeline adapter constructs these
// directly, and tests build fixtures by hand.
//
// Reference: Rust Book §5 (Structs and Methods)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;

/// One token as annotated by the external pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedToken {
    /// Surface form exactly as it appears in the text
    pub text: String,

    /// Canonical dictionary form ("ran" → "run")
    pub lemma: String,

    /// Coarse part-of-speech tag ("VERB", "NOUN", ...)
    pub pos: String,

    /// Dependency role relative to the governing token
    /// ("ROOT", "dobj", "nsubj", "pobj", ...); empty when unparsed
    pub dep: String,

    /// True for high-frequency function words
    pub is_stop: bool,

    /// Character-class flags, as computed by the pipeline
    pub is_alpha: bool,
    pub is_digit: bool,
    pub is_currency: bool,
    pub is_punct: bool,
}

impl AnnotatedToken {
    /// A content token carries lexical signal: it is not a stop word
    /// and is alphabetic, numeric, currency, or at least not pure
    /// punctuation. Only content tokens participate in overlap
    /// scoring and lexical expansion.
    pub fn is_content(&self) -> bool {
        !self.is_stop && (self.is_alpha || self.is_digit || self.is_currency || !self.is_punct)
    }

    /// A scoring-relevant verb: non-stop token tagged VERB.
    pub fn is_content_verb(&self) -> bool {
        !self.is_stop && self.pos == "VERB"
    }
}

/// One sentence: ordered tokens plus the sentence-level annotations
/// the pipeline attaches (entities, noun chunks, embedding vector).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    pub tokens: Vec<AnnotatedToken>,

    /// Entities whose spans fall inside this sentence, in text order
    pub entities: Vec<Entity>,

    /// Noun-phrase chunks as half-open token index ranges
    pub chunks: Vec<(usize, usize)>,

    /// Sentence embedding; empty when the pipeline provides none,
    /// in which case every similarity involving it is 0.0
    pub vector: Vec<f32>,
}

impl AnnotatedSentence {
    /// Surface text of the sentence, token texts joined by single spaces.
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.tokens.iter().map(|t| t.text.as_str()).collect();
        parts.join(" ")
    }

    /// Lower-cased lemmas of all content tokens.
    pub fn content_lemmas(&self) -> HashSet<String> {
        self.tokens.iter()
            .filter(|t| t.is_content())
            .map(|t| t.lemma.to_lowercase())
            .collect()
    }

    /// Lower-cased lemmas of all non-stop VERB tokens.
    pub fn verb_lemmas(&self) -> HashSet<String> {
        self.tokens.iter()
            .filter(|t| t.is_content_verb())
            .map(|t| t.lemma.to_lowercase())
            .collect()
    }

    /// Lower-cased word-set of each noun-phrase chunk.
    pub fn noun_phrase_word_sets(&self) -> Vec<HashSet<String>> {
        self.chunks.iter()
            .map(|&(start, end)| {
                self.tokens[start..end.min(self.tokens.len())]
                    .iter()
                    .map(|t| t.text.to_lowercase())
                    .collect()
            })
            .collect()
    }

    /// Cosine similarity between this sentence's vector and an
    /// arbitrary span vector. Mismatched or empty vectors give 0.0
    /// rather than an error — an unvectorized pipeline simply
    /// contributes nothing to ranking.
    pub fn similarity(&self, other: &[f32]) -> f32 {
        cosine(&self.vector, other)
    }
}

/// A whole annotated text: the ordered sentence sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedText {
    pub sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedText {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    /// Full surface text, sentences joined by single spaces.
    pub fn text(&self) -> String {
        let parts: Vec<String> = self.sentences.iter().map(|s| s.text()).collect();
        parts.join(" ")
    }

    /// All tokens across all sentences, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &AnnotatedToken> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    /// All entities across all sentences, in text order.
    pub fn entities(&self) -> Vec<Entity> {
        self.sentences.iter()
            .flat_map(|s| s.entities.iter().cloned())
            .collect()
    }

    /// Mean of the sentence vectors — the whole-span embedding used
    /// when this text is the similarity target.
    pub fn vector(&self) -> Vec<f32> {
        let dims = self.sentences.iter()
            .map(|s| s.vector.len())
            .max()
            .unwrap_or(0);
        if dims == 0 {
            return Vec::new();
        }
        let mut mean = vec![0.0f32; dims];
        let mut count = 0usize;
        for sentence in &self.sentences {
            if sentence.vector.len() != dims {
                continue;
            }
            for (acc, v) in mean.iter_mut().zip(&sentence.vector) {
                *acc += v;
            }
            count += 1;
        }
        if count > 0 {
            for v in &mut mean {
                *v /= count as f32;
            }
        }
        mean
    }
}

/// Cosine similarity of two vectors; 0.0 on dimension mismatch,
/// empty input, or zero magnitude.
fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}
