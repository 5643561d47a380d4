// ============================================================
// Layer 6 — File-Backed Thesaurus
// ============================================================
// Loads a synonym lexicon from a flat tab-separated file:
//
//   lemma<TAB>synonym,synonym,...
//
//   visit	see,call_on,travel_to
//   buy	purchase,take_over
//
// Multi-word entries keep their `_` separators — splitting them
// into individual words is the lexical expander's job, not the
// lookup's. Lines starting with `#` and blank lines are skipped.
//
// The empty thesaurus is the default: lookups return nothing and
// lexical expansion degrades to identity.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::traits::Thesaurus;

/// An in-memory synonym table loaded once at startup.
pub struct FileThesaurus {
    entries: HashMap<String, Vec<String>>,
}

impl FileThesaurus {
    /// A thesaurus that knows no synonyms.
    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Load a lexicon file. Malformed lines (no tab) are skipped
    /// with a warning rather than failing the whole file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read thesaurus '{}'", path.display()))?;

        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lemma, synonyms)) = line.split_once('\t') else {
                tracing::warn!(
                    "thesaurus '{}': skipping malformed line {}",
                    path.display(),
                    number + 1,
                );
                continue;
            };
            let list: Vec<String> = synonyms
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            entries
                .entry(lemma.trim().to_lowercase())
                .or_default()
                .extend(list);
        }

        tracing::info!(
            "loaded thesaurus '{}' with {} lemmas",
            path.display(),
            entries.len(),
        );
        Ok(Self { entries })
    }

    /// Build from in-memory pairs (used by tests and embedders).
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(lemma, synonyms)| {
                (
                    lemma.into().to_lowercase(),
                    synonyms.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}

impl Thesaurus for FileThesaurus {
    fn related(&self, lemma: &str) -> Vec<String> {
        self.entries
            .get(&lemma.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}
