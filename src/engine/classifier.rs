// ============================================================
// Layer 5 — Question Classifier
// ============================================================
// Assigns a question type (WHO, WHAT, WHEN, ...) and the set of
// entity types an answer may carry, from the question's surface
// text alone.
//
// Precedence is an explicit contract: the trigger table is an
// ordered slice, evaluated top to bottom, and the FIRST type with
// any matching trigger wins. Several triggers are ambiguous
// ("how many" vs "who"), so reordering the table changes answers.
// Never replace the slice with a map — map iteration order is
// incidental and must not drive control flow.
//
// MEASURE is the one special case: its triggers are adjectives and
// quantity nouns ("many", "cost", "long") that only signal a
// measurement question next to the word "how", so a MEASURE trigger
// matches only when "how" is also present in the lower-cased text.
// Every other trigger matches on plain substring containment.
//
// All tables are process-wide constants — classification is a pure
// function over fixed configuration.

use crate::domain::entity::EntityType;
use crate::domain::question::QuestionType;

use EntityType::*;
use QuestionType::*;

/// Trigger table in evaluation order. First matching type wins.
const TYPE_TRIGGERS: &[(QuestionType, &[&str])] = &[
    (Who,   &["whom", "who", "whose"]),
    (What,  &["what"]),
    (When,  &["when"]),
    (Why,   &["why"]),
    (Which, &["which"]),
    (Where, &["where"]),
    (Measure, &[
        "many years", "much money",
        "cost",
        "many", "much",
        "often", "few",
        "long", "short", "tall", "fast", "slow",
        "high", "low",
        "big", "small",
        "close", "near", "far",
        "new", "old",
        "heavy", "light",
    ]),
    (How,   &["how"]),
];

/// Fixed answer-type sets for the types that constrain entities.
/// WHAT, WHY, WHICH and HOW answers are not entity-typed.
const WHO_ANSWERS:   &[EntityType] = &[Person, Org, Gpe, Norp];
const WHEN_ANSWERS:  &[EntityType] = &[Time, Date];
const WHERE_ANSWERS: &[EntityType] = &[Loc, Fac, Org, Gpe];

/// Which entity types a MEASURE answer may carry, per trigger.
/// "how many years" asks for a duration; "how much money" for an
/// amount; size/speed/weight adjectives for quantities.
const MEASURE_MAP: &[(&str, &[EntityType])] = &[
    ("many years", &[Date, Time]),
    ("much money", &[Money]),
    ("cost",       &[Money]),
    ("many",       &[Cardinal, Quantity, Percent]),
    ("much",       &[Money, Quantity, Percent]),
    ("often",      &[Time, Date, Percent]),
    ("few",        &[Quantity, Cardinal]),
    ("long",       &[Time, Date, Quantity]),
    ("close",      &[Time, Date, Quantity]),
    ("near",       &[Time, Date, Quantity]),
    ("far",        &[Time, Date, Quantity]),
    ("new",        &[Time, Date]),
    ("old",        &[Time, Date]),
    ("heavy",      &[Quantity]),
    ("light",      &[Quantity]),
    ("short",      &[Quantity]),
    ("tall",       &[Quantity]),
    ("fast",       &[Quantity]),
    ("slow",       &[Quantity]),
    ("big",        &[Quantity, Percent, Cardinal]),
    ("small",      &[Quantity, Percent, Cardinal]),
    ("high",       &[Quantity, Cardinal]),
    ("low",        &[Quantity, Cardinal]),
];

/// Classify a question from its surface text.
///
/// Returns the assigned type (None when no trigger matches) and the
/// acceptable answer entity types (empty when the type carries no
/// fixed set, or when unclassified).
pub fn classify(question_text: &str) -> (Option<QuestionType>, Vec<EntityType>) {
    let lowered = question_text.to_lowercase();

    for (qtype, triggers) in TYPE_TRIGGERS {
        for trigger in *triggers {
            let matched = if *qtype == Measure {
                // MEASURE adjectives only count next to "how"
                lowered.contains(trigger) && lowered.contains("how")
            } else {
                lowered.contains(trigger)
            };
            if matched {
                return (Some(*qtype), answer_types_for(*qtype, trigger));
            }
        }
    }

    (None, Vec::new())
}

/// Look up the answer-type set for a matched (type, trigger) pair.
fn answer_types_for(qtype: QuestionType, trigger: &str) -> Vec<EntityType> {
    match qtype {
        Who   => WHO_ANSWERS.to_vec(),
        When  => WHEN_ANSWERS.to_vec(),
        Where => WHERE_ANSWERS.to_vec(),
        Measure => MEASURE_MAP.iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, types)| types.to_vec())
            .unwrap_or_default(),
        What | Why | Which | How => Vec::new(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_who_question() {
        let (qtype, answers) = classify("Who was elected president?");
        assert_eq!(qtype, Some(Who));
        assert_eq!(answers, vec![Person, Org, Gpe, Norp]);
    }

    #[test]
    fn test_measure_requires_how() {
        // "many years" alone is not a measurement question
        let (qtype, _) = classify("She lived there for many years.");
        assert_eq!(qtype, None);

        let (qtype, answers) = classify("How many years did he serve?");
        assert_eq!(qtype, Some(Measure));
        assert_eq!(answers, vec![Date, Time]);
    }

    #[test]
    fn test_measure_trigger_selects_entity_set() {
        let (qtype, answers) = classify("How much money was stolen?");
        assert_eq!(qtype, Some(Measure));
        assert_eq!(answers, vec![Money]);

        let (_, answers) = classify("How many people attended?");
        assert_eq!(answers, vec![Cardinal, Quantity, Percent]);
    }

    #[test]
    fn test_when_and_where_sets() {
        let (qtype, answers) = classify("When did the war end?");
        assert_eq!(qtype, Some(When));
        assert_eq!(answers, vec![Time, Date]);

        let (qtype, answers) = classify("Where was the treaty signed?");
        assert_eq!(qtype, Some(Where));
        assert_eq!(answers, vec![Loc, Fac, Org, Gpe]);
    }

    #[test]
    fn test_untyped_questions_get_no_entity_set() {
        for text in ["What happened next?", "Why did he leave?", "Which team won?"] {
            let (qtype, answers) = classify(text);
            assert!(qtype.is_some());
            assert!(answers.is_empty(), "{text} should carry no entity set");
        }
    }

    #[test]
    fn test_precedence_first_type_wins() {
        // "who" appears before "what" in the table; both substrings present
        let (qtype, _) = classify("Who knows what happened?");
        assert_eq!(qtype, Some(Who));

        // HOW is evaluated last: a bare "how" with no MEASURE adjective
        let (qtype, answers) = classify("How did the fire start?");
        assert_eq!(qtype, Some(How));
        assert!(answers.is_empty());
    }

    #[test]
    fn test_no_trigger_leaves_unset() {
        let (qtype, answers) = classify("Name the capital of France.");
        assert_eq!(qtype, None);
        assert!(answers.is_empty());
    }
}
