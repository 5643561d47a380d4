// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external collaborators the engine depends on are modelled
// as traits and injected where the engine is constructed:
//
//   - Annotator: the linguistic pipeline. Given raw text it returns
//     tokens, lemmas, POS tags, dependency roles, sentence
//     boundaries, entities, noun chunks, and sentence vectors.
//     The real pipeline (a trained model) is outside this crate;
//     BasicAnnotator in the infra layer is a degraded stand-in.
//
//   - Thesaurus: synonym lookup. Given a lemma it returns related
//     lemmas (possibly multi-word). FileThesaurus in the infra
//     layer loads a flat lexicon file; the empty default returns
//     nothing, which turns lexical expansion into identity.
//
// Both are pure function-call interfaces: no file or network I/O
// happens per call, and the same input always yields the same
// output — the engine's determinism rests on that.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use anyhow::Result;

use crate::domain::annotation::AnnotatedText;

// ─── Annotator ────────────────────────────────────────────────────────────────
/// The injected linguistic annotation pipeline.
///
/// Initialized before any story is processed; no mid-run teardown.
pub trait Annotator {
    /// Annotate raw text into sentences, tokens, entities, chunks,
    /// and vectors.
    fn annotate(&self, text: &str) -> Result<AnnotatedText>;
}

// ─── Thesaurus ────────────────────────────────────────────────────────────────
/// The injected synonym lookup service.
pub trait Thesaurus {
    /// All lemmas related to the given lemma. Multi-word entries
    /// use `_` or spaces as internal separators; the caller splits
    /// them. An unknown lemma returns an empty list.
    fn related(&self, lemma: &str) -> Vec<String>;
}
