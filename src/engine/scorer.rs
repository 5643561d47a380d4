// ============================================================
// Layer 5 — Candidate Scorer
// ============================================================
// Computes one composite relevance score per story sentence:
//
//   base  = |content-lemma overlap| + 3 × |verb-lemma overlap|
//
// Verb overlap is weighted 3× — verbs carry most of the
// disambiguating signal for "who did what" answers.
//
// For the entity-typed question types (WHO/WHEN/WHERE/MEASURE) an
// entity gate is applied on top of the base score. The sentence's
// entities are walked in text order with a descending position
// bonus; the first entity of an acceptable type whose text is not
// already echoed in the question wins the bonus and stops the scan:
//
//   index  = max(entity_count + 2, floor)     floor: 7 (5 for MEASURE)
//   bonus  = weight × index                   weight: 7 (5 for MEASURE)
//
// A sentence with NO qualifying entity scores exactly 0 — the gate
// is a veto, not a bonus. A WHO question cannot be answered by a
// sentence containing no person-like entity, however strong its
// lexical overlap.
//
// Scoring is a pure function of (question, sentence, lexical sets):
// no state, no I/O, deterministic across runs.

use std::collections::HashSet;

use crate::domain::question::{Question, QuestionType};
use crate::domain::story::Story;

/// Per-sentence composite scores plus the running maximum,
/// kept for the extractor's max-score fallback. The stored values
/// are the POST-gate scores: a vetoed sentence contributes 0 to the
/// fallback as well.
#[derive(Debug)]
pub struct SentenceScores {
    pub scores: Vec<i64>,
    pub high_score: i64,
}

/// Gate parameters per question type: (weight, floor).
/// None means the type is not entity-gated.
fn gate_params(qtype: Option<QuestionType>) -> Option<(i64, i64)> {
    match qtype {
        Some(QuestionType::Who)
        | Some(QuestionType::When)
        | Some(QuestionType::Where) => Some((7, 7)),
        Some(QuestionType::Measure) => Some((5, 5)),
        _ => None,
    }
}

/// Score every sentence of the story against the question.
pub fn score_sentences(
    question: &Question,
    story: &Story,
    words_from_question: &HashSet<String>,
    verbs_from_question: &HashSet<String>,
) -> SentenceScores {
    let question_text = question.text.text();
    let mut scores = Vec::with_capacity(story.text.sentences.len());
    let mut high_score = 0i64;

    for sentence in &story.text.sentences {
        let word_overlap = overlap(&sentence.content_lemmas(), words_from_question);
        let verb_overlap = overlap(&sentence.verb_lemmas(), verbs_from_question);
        let mut score = word_overlap as i64 + 3 * verb_overlap as i64;

        if let Some((weight, floor)) = gate_params(question.qtype) {
            let entity_count = sentence.entities.len() as i64;
            let mut index = (entity_count + 2).max(floor);
            let mut found = false;

            for entity in &sentence.entities {
                // An entity already named in the question cannot be
                // the answer to it
                if question.answer_type.contains(&entity.label)
                    && !question_text.contains(&entity.text)
                {
                    score += weight * index;
                    found = true;
                    break;
                }
                index -= 1;
            }

            if !found {
                score = 0;
            }
        }

        if score > high_score {
            high_score = score;
        }
        scores.push(score);
    }

    SentenceScores { scores, high_score }
}

/// Size of the intersection of two lemma sets.
pub fn overlap(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.intersection(b).count()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{AnnotatedSentence, AnnotatedText, AnnotatedToken};
    use crate::domain::entity::{Entity, EntityType};

    fn token(text: &str, lemma: &str, pos: &str, is_stop: bool) -> AnnotatedToken {
        AnnotatedToken {
            text:        text.to_string(),
            lemma:       lemma.to_string(),
            pos:         pos.to_string(),
            dep:         String::new(),
            is_stop,
            is_alpha:    text.chars().all(|c| c.is_alphabetic()),
            is_digit:    text.chars().all(|c| c.is_ascii_digit()),
            is_currency: false,
            is_punct:    text.chars().all(|c| c.is_ascii_punctuation()),
        }
    }

    fn sentence(tokens: Vec<AnnotatedToken>, entities: Vec<Entity>) -> AnnotatedSentence {
        AnnotatedSentence { tokens, entities, chunks: vec![], vector: vec![] }
    }

    fn story_of(sentences: Vec<AnnotatedSentence>) -> Story {
        Story::new("S1", "h", "d", AnnotatedText::new(sentences))
    }

    fn who_question(words: &[(&str, &str)]) -> Question {
        let tokens = words.iter()
            .map(|(text, lemma)| token(text, lemma, "X", false))
            .collect();
        Question::new(
            "Q1", "S1",
            AnnotatedText::new(vec![sentence(tokens, vec![])]),
            "Easy",
        )
    }

    fn lemma_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_verb_overlap_weighted_three_times() {
        let story = story_of(vec![sentence(
            vec![
                token("soldiers", "soldier", "NOUN", false),
                token("marched", "march", "VERB", false),
            ],
            vec![Entity::new("anyone", EntityType::Person)],
        )]);
        let question = who_question(&[("Who", "who"), ("marched", "march")]);
        assert_eq!(question.qtype, Some(QuestionType::Who));

        let words = lemma_set(&["march"]);
        let verbs = lemma_set(&["march"]);
        let result = score_sentences(&question, &story, &words, &verbs);

        // overlap 1 + 3×1 verb + gate 7×7 (one entity, floor 7)
        assert_eq!(result.scores[0], 1 + 3 + 49);
    }

    #[test]
    fn test_gate_vetoes_sentence_without_matching_entity() {
        let story = story_of(vec![sentence(
            vec![
                token("soldiers", "soldier", "NOUN", false),
                token("marched", "march", "VERB", false),
            ],
            // DATE entity cannot answer a WHO question
            vec![Entity::new("1990", EntityType::Date)],
        )]);
        let question = who_question(&[("Who", "who"), ("marched", "march")]);

        let words = lemma_set(&["march", "soldier"]);
        let verbs = lemma_set(&["march"]);
        let result = score_sentences(&question, &story, &words, &verbs);

        // Strong lexical overlap, but the gate forces 0
        assert_eq!(result.scores[0], 0);
        assert_eq!(result.high_score, 0);
    }

    #[test]
    fn test_entity_echoed_in_question_is_skipped() {
        let story = story_of(vec![sentence(
            vec![token("met", "meet", "VERB", false)],
            vec![
                Entity::new("John Smith", EntityType::Person),
                Entity::new("Mary Jones", EntityType::Person),
            ],
        )]);
        // "John Smith" appears in the question text, so the scan
        // must pass over it and award the bonus at the next entity
        let question = who_question(&[
            ("Who", "who"), ("met", "meet"), ("John", "john"), ("Smith", "smith"),
        ]);

        let words = lemma_set(&["meet"]);
        let verbs = lemma_set(&["meet"]);
        let result = score_sentences(&question, &story, &words, &verbs);

        // index starts at max(2+2, 7) = 7, decremented once for the
        // skipped echo: 1 + 3 + 7×6
        assert_eq!(result.scores[0], 1 + 3 + 42);
    }

    #[test]
    fn test_untyped_question_is_not_gated() {
        let story = story_of(vec![sentence(
            vec![token("exploded", "explode", "VERB", false)],
            vec![], // no entities at all
        )]);
        let question = who_question(&[("What", "what"), ("exploded", "explode")]);
        assert_eq!(question.qtype, Some(QuestionType::What));

        let words = lemma_set(&["explode"]);
        let verbs = lemma_set(&["explode"]);
        let result = score_sentences(&question, &story, &words, &verbs);

        // Lexical score stands alone: no veto for WHAT
        assert_eq!(result.scores[0], 1 + 3);
    }

    #[test]
    fn test_index_floor_lifts_with_entity_count() {
        // 8 entities: index starts at 8+2=10, above the floor of 7
        let entities: Vec<Entity> = (0..7)
            .map(|i| Entity::new(format!("d{i}"), EntityType::Date))
            .chain(std::iter::once(Entity::new("Ana", EntityType::Person)))
            .collect();
        let story = story_of(vec![sentence(
            vec![token("won", "win", "VERB", false)],
            entities,
        )]);
        let question = who_question(&[("Who", "who"), ("won", "win")]);

        let words = lemma_set(&["win"]);
        let verbs = lemma_set(&["win"]);
        let result = score_sentences(&question, &story, &words, &verbs);

        // 7 non-matching entities decrement 10 → 3, then 7×3 bonus
        assert_eq!(result.scores[0], 1 + 3 + 21);
    }
}
