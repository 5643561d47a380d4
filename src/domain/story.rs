// ============================================================
// Layer 3 — Story Domain Type
// ============================================================
// One narrative text from the corpus, fully annotated.
// Immutable after construction: the engine only ever reads it.
//
// The derived whole-story entity list is computed once at
// construction (not on every access) so the ordering seen by the
// engine is fixed for the lifetime of the run.
//
// Reference: Rust Book §5 (Structs and Methods)

use crate::domain::annotation::AnnotatedText;
use crate::domain::entity::Entity;

/// An annotated story with its corpus metadata.
#[derive(Debug, Clone)]
pub struct Story {
    /// Corpus-assigned story identifier (the STORYID header field)
    pub id: String,

    /// Headline line from the story file
    pub headline: String,

    /// Publication date line from the story file
    pub date: String,

    /// The annotated body text, in sentence order
    pub text: AnnotatedText,

    /// All entities in the whole text, in text order —
    /// derived once at construction
    pub entities: Vec<Entity>,
}

impl Story {
    /// Build a Story from parsed metadata and the annotated body.
    /// The entity list is snapshotted here so it never changes.
    pub fn new(
        id:       impl Into<String>,
        headline: impl Into<String>,
        date:     impl Into<String>,
        text:     AnnotatedText,
    ) -> Self {
        let entities = text.entities();
        Self {
            id:       id.into(),
            headline: headline.into(),
            date:     date.into(),
            text,
            entities,
        }
    }
}
