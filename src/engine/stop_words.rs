// ============================================================
// Layer 5 — Stop-Word Set
// ============================================================
// High-frequency function words carry no answer-selecting signal,
// so lexical expansion discards any thesaurus entry that is a stop
// word (a synonym set for "run" should not contribute "go" → "to").
//
// The set is process-wide immutable configuration: built once on
// first use, read-only afterwards. Token-level stop flags come from
// the annotation pipeline; this set only filters thesaurus output,
// which arrives as bare strings with no flags attached.

use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // articles & determiners
        "the", "a", "an", "this", "that", "these", "those",
        "each", "every", "either", "neither", "both", "few", "more",
        "most", "other", "some", "such", "any", "all", "another",
        // be-verbs & auxiliaries
        "is", "are", "was", "were", "be", "been", "being", "am",
        "have", "has", "had", "having", "do", "does", "did", "doing",
        // modals
        "will", "would", "shall", "should", "may", "might",
        "can", "could", "must", "ought",
        // prepositions
        "to", "of", "in", "for", "on", "with", "at", "by", "from",
        "into", "onto", "about", "against", "between", "through",
        "during", "before", "after", "above", "below", "under",
        "over", "up", "down", "out", "off", "upon", "within",
        "without", "along", "across", "behind", "beyond", "near",
        // conjunctions & negation
        "and", "or", "but", "nor", "not", "no", "if", "then",
        "than", "so", "as", "because", "while", "until", "unless",
        "although", "though", "whether", "since",
        // pronouns
        "i", "you", "he", "she", "it", "we", "they",
        "me", "him", "her", "us", "them",
        "my", "your", "his", "its", "our", "their",
        "mine", "yours", "hers", "ours", "theirs",
        "myself", "yourself", "himself", "herself", "itself",
        "ourselves", "themselves",
        "someone", "something", "anyone", "anything",
        "everyone", "everything", "nobody", "nothing",
        // interrogatives & relatives
        "who", "whom", "whose", "what", "which", "when", "where",
        "why", "how",
        // adverbs & quantifiers
        "very", "also", "just", "too", "only", "own", "same",
        "again", "further", "once", "here", "there", "now",
        "then", "always", "never", "ever", "still", "yet",
        "much", "many", "several", "quite", "rather",
        // common light verbs
        "get", "got", "make", "made", "go", "went", "gone",
        "say", "said", "says",
        // contractions' survivors and fillers
        "s", "t", "d", "ll", "m", "re", "ve", "o", "y",
    ]
    .into_iter()
    .collect()
});

/// True when the lower-cased word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words_are_stops() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("who"));
        assert!(is_stop_word("of"));
    }

    #[test]
    fn test_content_words_are_not_stops() {
        assert!(!is_stop_word("visit"));
        assert!(!is_stop_word("paris"));
        assert!(!is_stop_word("president"));
    }
}
