// ============================================================
// Layer 6 — Infrastructure
// ============================================================
// Concrete implementations of the injected external collaborators.
// The engine only ever sees the traits from the domain layer; this
// layer supplies what gets plugged in when the process starts.

/// Deterministic stand-in annotation pipeline
pub mod annotator;

/// Tab-separated-file synonym lexicon
pub mod thesaurus;
