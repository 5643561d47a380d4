// ============================================================
// Layer 5 — Answer Ranker
// ============================================================
// Orders the scored sentences and narrows them down to the one the
// extractor will answer from. Four steps:
//
//   1. Build one Candidate per sentence, carrying its entity-
//      filtered answer spans, question similarity, composite score,
//      and the two raw overlap counts.
//   2. Fall back to unfiltered candidates (no entity spans) when
//      the question has no answer-type set, is a WHY question, or
//      the entity-typed list came out empty.
//   3. Sort by a layered tie-break chain of THREE sequential stable
//      sorts: similarity desc, then raw overlap desc, then weighted
//      score desc. Because each stable sort preserves the previous
//      order among equal keys, the LAST sort dominates: final order
//      is weighted score first, raw overlap breaking its ties,
//      similarity breaking the remaining ones. Do not collapse this
//      into one composite comparator — the layered form is the
//      contract.
//   4. Narrow by dependency anchors: the question's ROOT, direct
//      object, subject and prepositional object lemmas, applied in
//      that fixed order. Each anchor keeps only candidates whose
//      sentence contains a token with the same lemma, but an anchor
//      that would empty the list is skipped — narrowing only ever
//      shrinks the list, never to nothing.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::annotation::AnnotatedText;
use crate::domain::candidate::Candidate;
use crate::domain::question::{Question, QuestionType};
use crate::domain::story::Story;
use crate::engine::scorer::overlap;

/// Rank the story's sentences for the question, best first.
///
/// `scores` are the per-sentence composite scores from the scorer,
/// index-aligned with `story.text.sentences`.
pub fn rank<'a>(
    question: &Question,
    story: &'a Story,
    words_from_question: &HashSet<String>,
    verbs_from_question: &HashSet<String>,
    scores: &[i64],
) -> Vec<Candidate<'a>> {
    let question_vector = question.text.vector();

    // Step 1 — entity-typed candidates
    let mut candidates: Vec<Candidate<'a>> = Vec::new();
    if question.has_answer_type() {
        for (i, sentence) in story.text.sentences.iter().enumerate() {
            let answer_spans = sentence.entities.iter()
                .filter(|e| question.answer_type.contains(&e.label))
                .cloned()
                .collect();
            candidates.push(Candidate {
                sentence,
                answer_spans,
                similarity:         sentence.similarity(&question_vector),
                weighted_score:     scores[i],
                overlap_score:      overlap(&sentence.content_lemmas(), words_from_question),
                verb_overlap_score: overlap(&sentence.verb_lemmas(), verbs_from_question),
            });
        }
    }

    // Step 2 — unfiltered fallback. WHY answers are rarely entities,
    // so WHY always takes this path even when typed candidates exist.
    if candidates.is_empty() || question.qtype == Some(QuestionType::Why) {
        candidates = story.text.sentences.iter().enumerate()
            .map(|(i, sentence)| Candidate {
                sentence,
                answer_spans:       Vec::new(),
                similarity:         sentence.similarity(&question_vector),
                weighted_score:     scores[i],
                overlap_score:      overlap(&sentence.content_lemmas(), words_from_question),
                verb_overlap_score: overlap(&sentence.verb_lemmas(), verbs_from_question),
            })
            .collect();
    }

    // Step 3 — layered stable sorts, least significant first
    candidates.sort_by(|a, b| {
        b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal)
    });
    candidates.sort_by(|a, b| b.overlap_score.cmp(&a.overlap_score));
    candidates.sort_by(|a, b| b.weighted_score.cmp(&a.weighted_score));

    // Step 4 — monotone narrowing by dependency anchors
    for anchor in dependency_anchors(&question.text).iter().flatten() {
        let narrowed: Vec<Candidate<'a>> = candidates.iter()
            .filter(|c| c.sentence.tokens.iter().any(|t| &t.lemma == anchor))
            .cloned()
            .collect();
        if !narrowed.is_empty() {
            candidates = narrowed;
        }
    }

    candidates
}

/// Extract the question's anchor lemmas in narrowing order:
/// ROOT, direct object, subject, prepositional object.
/// When several tokens carry the same role, the last one wins.
fn dependency_anchors(question: &AnnotatedText) -> [Option<String>; 4] {
    let mut anchors: [Option<String>; 4] = [None, None, None, None];
    for token in question.tokens() {
        let slot = match token.dep.as_str() {
            "ROOT"  => 0,
            "dobj"  => 1,
            "nsubj" => 2,
            "pobj"  => 3,
            _ => continue,
        };
        anchors[slot] = Some(token.lemma.clone());
    }
    anchors
}
