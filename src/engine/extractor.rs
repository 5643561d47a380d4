// ============================================================
// Layer 5 — Answer Extractor
// ============================================================
// Produces the final answer string from the top-ranked candidate.
//
// Primary path:
//   - entity-typed question → the space-joined text of the chosen
//     sentence's acceptable entity spans
//   - untyped question      → the chosen sentence's full text
//
// Post-processing strips question echo: any whitespace token of the
// answer that already appears verbatim inside the question text is
// dropped ("Who visited Paris?" never gets "Paris" back as part of
// the answer).
//
// Fallback path: when stripping leaves nothing (or a bare "."), the
// extractor rescans the per-sentence composite scores and assembles
// an answer from every sentence tied at the maximum — entity spans
// when the question is entity-typed, full text otherwise. A later
// tied sentence is only appended when its text is shorter than what
// has accumulated, keeping the baseline answer the shortest seen.
// The fallback reads the POST-gate scores, so a sentence vetoed by
// entity gating can never resurface here.
//
// An empty final answer is a legitimate output: it means no sentence
// ever scored above zero for this question.

use crate::domain::candidate::Candidate;
use crate::domain::question::Question;
use crate::domain::story::Story;
use crate::engine::scorer::SentenceScores;

/// Build the answer string for the question from the ranked
/// candidates and the per-sentence scores.
pub fn extract(
    question: &Question,
    candidates: &[Candidate<'_>],
    scores: &SentenceScores,
    story: &Story,
) -> String {
    let question_text = question.text.text();

    let mut answer = String::new();
    if let Some(top) = candidates.first() {
        if question.has_answer_type() {
            answer = join_spans(top);
        } else {
            let sentence_text = top.sentence.text();
            if answer.is_empty() || sentence_text.len() < answer.len() {
                answer = sentence_text;
            }
        }
    }

    answer = strip_question_echo(&answer, &question_text);

    if answer.is_empty() || answer == "." {
        answer = strip_question_echo(
            &max_score_fallback(question, scores, story),
            &question_text,
        );
    }

    answer
}

/// Space-joined text of a candidate's entity answer spans.
fn join_spans(candidate: &Candidate<'_>) -> String {
    let parts: Vec<&str> = candidate.answer_spans.iter()
        .map(|e| e.text.as_str())
        .collect();
    parts.join(" ")
}

/// Drop every answer token that appears verbatim inside the
/// question text, rejoining the survivors with single spaces.
fn strip_question_echo(answer: &str, question_text: &str) -> String {
    let kept: Vec<&str> = answer
        .split_whitespace()
        .filter(|word| !question_text.contains(*word))
        .collect();
    kept.join(" ")
}

/// Assemble an answer from every sentence tied at the maximum
/// composite score.
fn max_score_fallback(
    question: &Question,
    scores: &SentenceScores,
    story: &Story,
) -> String {
    let mut answer = String::new();

    for (i, &score) in scores.scores.iter().enumerate() {
        if score != scores.high_score {
            continue;
        }
        let sentence = &story.text.sentences[i];
        let piece = if question.has_answer_type() {
            let parts: Vec<&str> = sentence.entities.iter()
                .filter(|e| question.answer_type.contains(&e.label))
                .map(|e| e.text.as_str())
                .collect();
            parts.join(" ")
        } else {
            sentence.text()
        };

        if answer.is_empty() {
            answer = piece;
        } else if sentence.text().len() < answer.len() {
            // Prefer accumulating from shorter sentences only
            if !piece.is_empty() {
                answer.push(' ');
                answer.push_str(&piece);
            }
        }
    }

    answer.trim().to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{AnnotatedSentence, AnnotatedText, AnnotatedToken};
    use crate::domain::entity::{Entity, EntityType};

    fn token(text: &str) -> AnnotatedToken {
        AnnotatedToken {
            text:        text.to_string(),
            lemma:       text.to_lowercase(),
            pos:         "X".to_string(),
            dep:         String::new(),
            is_stop:     false,
            is_alpha:    true,
            is_digit:    text.chars().all(|c| c.is_ascii_digit()),
            is_currency: false,
            is_punct:    false,
        }
    }

    fn sentence(words: &[&str], entities: Vec<Entity>) -> AnnotatedSentence {
        AnnotatedSentence {
            tokens: words.iter().map(|w| token(w)).collect(),
            entities,
            chunks: vec![],
            vector: vec![],
        }
    }

    fn question_of(words: &[&str]) -> Question {
        Question::new(
            "Q1", "S1",
            AnnotatedText::new(vec![sentence(words, vec![])]),
            "Easy",
        )
    }

    fn candidate<'a>(s: &'a AnnotatedSentence, question: &Question) -> Candidate<'a> {
        Candidate {
            sentence: s,
            answer_spans: s.entities.iter()
                .filter(|e| question.answer_type.contains(&e.label))
                .cloned()
                .collect(),
            similarity:         0.0,
            weighted_score:     1,
            overlap_score:      1,
            verb_overlap_score: 0,
        }
    }

    #[test]
    fn test_entity_answer_strips_question_echo() {
        let question = question_of(&["Who", "visited", "Paris", "?"]);
        let chosen = sentence(
            &["John", "Smith", "visited", "Paris"],
            vec![
                Entity::new("John Smith", EntityType::Person),
                Entity::new("Paris", EntityType::Gpe),
            ],
        );
        let story = Story::new("S1", "h", "d", AnnotatedText::new(vec![chosen.clone()]));
        let cands = vec![candidate(&chosen, &question)];
        let scores = SentenceScores { scores: vec![50], high_score: 50 };

        // "Paris" is echoed in the question and must disappear
        let answer = extract(&question, &cands, &scores, &story);
        assert_eq!(answer, "John Smith");
    }

    #[test]
    fn test_untyped_answer_is_sentence_text_minus_echo() {
        let question = question_of(&["What", "fell", "?"]);
        let chosen = sentence(&["heavy", "rain", "fell"], vec![]);
        let story = Story::new("S1", "h", "d", AnnotatedText::new(vec![chosen.clone()]));
        let cands = vec![candidate(&chosen, &question)];
        let scores = SentenceScores { scores: vec![2], high_score: 2 };

        // "fell" is echoed; the rest of the sentence survives
        let answer = extract(&question, &cands, &scores, &story);
        assert_eq!(answer, "heavy rain");
    }

    #[test]
    fn test_fallback_scans_max_score_sentences() {
        let question = question_of(&["When", "did", "it", "happen", "?"]);
        assert!(question.has_answer_type());

        // Chosen sentence has no TIME/DATE span → primary answer empty
        let chosen = sentence(&["it", "did", "happen"], vec![]);
        let dated = sentence(
            &["fighting", "began", "in", "1990"],
            vec![Entity::new("1990", EntityType::Date)],
        );
        let story = Story::new(
            "S1", "h", "d",
            AnnotatedText::new(vec![chosen.clone(), dated.clone()]),
        );
        let cands = vec![candidate(&chosen, &question)];
        let scores = SentenceScores { scores: vec![0, 56], high_score: 56 };

        let answer = extract(&question, &cands, &scores, &story);
        assert_eq!(answer, "1990");
    }

    #[test]
    fn test_all_zero_scores_can_yield_empty_answer() {
        let question = question_of(&["Who", "won", "?"]);
        // Entity-typed question, but no sentence carries a matching
        // entity — every score is gated to 0
        let s = sentence(&["nothing", "happened"], vec![]);
        let story = Story::new("S1", "h", "d", AnnotatedText::new(vec![s.clone()]));
        let cands = vec![candidate(&s, &question)];
        let scores = SentenceScores { scores: vec![0], high_score: 0 };

        let answer = extract(&question, &cands, &scores, &story);
        assert_eq!(answer, "");
    }

    #[test]
    fn test_no_candidates_falls_back() {
        let question = question_of(&["What", "now", "?"]);
        let s = sentence(&["silence", "followed"], vec![]);
        let story = Story::new("S1", "h", "d", AnnotatedText::new(vec![s]));
        let scores = SentenceScores { scores: vec![0], high_score: 0 };

        let answer = extract(&question, &[], &scores, &story);
        assert_eq!(answer, "silence followed");
    }
}
