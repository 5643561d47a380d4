// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits defining what the system's
// concepts ARE, independent of how they are computed.
//
// Rules for this layer:
//   - NO file I/O or process state
//   - NO scoring or ranking logic (that's the engine layer)
//   - Only plain data types, derived accessors, and the trait
//     seams for the injected external collaborators
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Annotation carrier types produced by the external pipeline
pub mod annotation;

// Transient per-(question, sentence) scoring record
pub mod candidate;

// The closed named-entity taxonomy
pub mod entity;

// A question with its construction-time classification
pub mod question;

// An immutable annotated story
pub mod story;

// Seams for the injected annotation pipeline and thesaurus
pub mod traits;
