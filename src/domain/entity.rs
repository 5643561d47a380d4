// ============================================================
// Layer 3 — Named-Entity Domain Types
// ============================================================
// A named entity is a span of text the annotation pipeline has
// labelled with one of a CLOSED set of categories (the OntoNotes
// taxonomy: PERSON, DATE, GPE, ...).
//
// The engine never invents labels — it only compares labels the
// pipeline produced against the fixed answer-type tables, so the
// taxonomy is modelled as an enum rather than free-form strings.
// An unknown label from the pipeline is a parse failure, not a
// silently accepted new category.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// One label from the closed named-entity taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

/// Label string ↔ enum table, shared by `parse` and `as_str`.
const LABELS: [(EntityType, &str); 18] = [
    (EntityType::Person,    "PERSON"),
    (EntityType::Norp,      "NORP"),
    (EntityType::Fac,       "FAC"),
    (EntityType::Org,       "ORG"),
    (EntityType::Gpe,       "GPE"),
    (EntityType::Loc,       "LOC"),
    (EntityType::Product,   "PRODUCT"),
    (EntityType::Event,     "EVENT"),
    (EntityType::WorkOfArt, "WORK_OF_ART"),
    (EntityType::Law,       "LAW"),
    (EntityType::Language,  "LANGUAGE"),
    (EntityType::Date,      "DATE"),
    (EntityType::Time,      "TIME"),
    (EntityType::Percent,   "PERCENT"),
    (EntityType::Money,     "MONEY"),
    (EntityType::Quantity,  "QUANTITY"),
    (EntityType::Ordinal,   "ORDINAL"),
    (EntityType::Cardinal,  "CARDINAL"),
];

impl EntityType {
    /// Parse a pipeline label string ("PERSON", "GPE", ...).
    /// Returns None for labels outside the closed taxonomy.
    pub fn parse(label: &str) -> Option<Self> {
        LABELS.iter()
            .find(|(_, s)| *s == label)
            .map(|(t, _)| *t)
    }

    /// The canonical label string for this entity type.
    pub fn as_str(&self) -> &'static str {
        LABELS.iter()
            .find(|(t, _)| t == self)
            .map(|(_, s)| *s)
            .unwrap_or("UNKNOWN")
    }
}

/// A labelled entity span: the surface text plus its taxonomy label.
///
/// Example: ("John Smith", Person) or ("1990", Date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The exact surface text of the span
    pub text: String,

    /// The taxonomy label the pipeline assigned
    pub label: EntityType,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityType) -> Self {
        Self { text: text.into(), label }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for (ty, label) in LABELS {
            assert_eq!(EntityType::parse(label), Some(ty));
            assert_eq!(ty.as_str(), label);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(EntityType::parse("PLANET"), None);
        assert_eq!(EntityType::parse("person"), None);
    }
}
