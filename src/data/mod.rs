// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the corpus files on disk and the annotated
// domain objects the engine consumes:
//
//   run manifest
//       │
//       ▼
//   CorpusLoader      → reads .story/.questions file pairs
//       │
//       ▼
//   record parsers    → StoryRecord / QuestionRecord (typed errors)
//       │
//       ▼
//   Annotator         → (injected, Layer 6) annotated text
//       │
//       ▼
//   Story / Question  → domain objects, built by the use case
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §12 (I/O and File Handling)

/// Reads the run manifest and story/question file pairs
pub mod loader;

/// Raw record shapes and the corpus format parsers
pub mod records;
