// ============================================================
// Layer 5 — Lexical Expander
// ============================================================
// Questions rarely reuse the story's exact wording ("visited" vs
// "went to"), so raw lemma overlap alone under-scores the right
// sentence. The expander widens each question lemma into a set of
// related lemmas via the injected thesaurus:
//
//   expand("buy") → { "buy", "purchase", "bribe", ... }
//
// Multi-word thesaurus entries ("take_over") are split into their
// individual words, stop words are discarded, and everything is
// lower-cased. The token's own lemma is always included, so with
// an empty thesaurus expansion degrades to identity.
//
// Two expanded sets are produced per question: one over all content
// tokens, one over the verb subset. The scorer weights the verb set
// separately.

use std::collections::HashSet;

use crate::domain::annotation::{AnnotatedText, AnnotatedToken};
use crate::domain::traits::Thesaurus;
use crate::engine::stop_words::is_stop_word;

/// Expands question tokens into thesaurus-widened lemma sets.
pub struct LexicalExpander<'a> {
    thesaurus: &'a dyn Thesaurus,
}

impl<'a> LexicalExpander<'a> {
    pub fn new(thesaurus: &'a dyn Thesaurus) -> Self {
        Self { thesaurus }
    }

    /// Related lemmas for one token: its own lower-cased lemma plus
    /// every thesaurus-derived word that survives the stop filter.
    pub fn expand(&self, token: &AnnotatedToken) -> HashSet<String> {
        let mut lemmas = HashSet::new();

        for entry in self.thesaurus.related(&token.lemma) {
            // Multi-word entries become individual words
            for word in entry.split(['_', ' ']) {
                if word.is_empty() {
                    continue;
                }
                let word = word.to_lowercase();
                if !is_stop_word(&word) {
                    lemmas.insert(word);
                }
            }
        }

        lemmas.insert(token.lemma.to_lowercase());
        lemmas
    }

    /// Expanded lemma set over all content tokens of the question.
    pub fn question_words(&self, question: &AnnotatedText) -> HashSet<String> {
        let mut lemmas = HashSet::new();
        for token in question.tokens().filter(|t| t.is_content()) {
            lemmas.extend(self.expand(token));
        }
        lemmas
    }

    /// Expanded lemma set over the question's non-stop VERB tokens.
    pub fn question_verbs(&self, question: &AnnotatedText) -> HashSet<String> {
        let mut lemmas = HashSet::new();
        for token in question.tokens().filter(|t| t.is_content_verb()) {
            lemmas.extend(self.expand(token));
        }
        lemmas
    }
}
