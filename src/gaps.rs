//! Gap register construction: the deficiency list surfaced to reporting.

use crate::fixed::FixedRow;
use crate::score::question_score;
use crate::types::answer::AnswerMap;
use crate::types::question::Section;
use crate::types::result::GapEntry;

/// Builds the typed-mode gap register: every question that counts toward
/// the score (`effective_weight > 0`) and did not earn full credit, in
/// section order then ordinal position.
pub fn build_gap_register(sections: &[Section], answers: &AnswerMap) -> Vec<GapEntry> {
    let mut gaps = Vec::new();
    for section in sections {
        for question in &section.questions {
            let value = answers.get(&question.code);
            let scored = question_score(question, value);
            let deficient = scored
                .ratio()
                .map(|ratio| ratio < 1.0)
                .unwrap_or(false);
            if deficient {
                gaps.push(GapEntry {
                    section: section.name.clone(),
                    requirement: String::new(),
                    code: question.code.clone(),
                    text: question.text.clone(),
                    answer: value.map(ToString::to_string).unwrap_or_default(),
                    hint: question.hint.clone(),
                    weight: question.weight,
                });
            }
        }
    }
    gaps
}

/// Builds the fixed-vocabulary gap register: rows answered exactly `No` or
/// `Partial`, in input order.
pub fn fixed_gap_register(rows: &[FixedRow]) -> Vec<GapEntry> {
    rows.iter()
        .filter(|row| row.answer.is_gap())
        .map(|row| GapEntry {
            section: row.section.clone(),
            requirement: row.requirement.clone(),
            code: row.code.clone(),
            text: row.text.clone(),
            answer: row.answer.to_string(),
            hint: row.hint.clone(),
            weight: row.weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedAnswer;
    use crate::types::answer::AnswerValue;
    use crate::types::question::{
        parse_options_spec, sections_from_questions, Question, QuestionType,
    };

    fn answers(entries: &[(&str, AnswerValue)]) -> AnswerMap {
        entries
            .iter()
            .map(|(code, value)| (code.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn partial_credit_answers_are_gaps() {
        let sections = sections_from_questions(vec![
            Question::new("Q1", "Backups?", QuestionType::YesNo)
                .in_section("Ops")
                .with_hint("Schedule nightly backups"),
            Question::new("Q2", "Coverage", QuestionType::Scale)
                .in_section("Ops")
                .with_bounds(0.0, 10.0),
            Question::new("Q3", "Controls", QuestionType::Single)
                .in_section("Gov")
                .with_options(parse_options_spec("Full=1 | Partial=0.5")),
        ]);
        let submitted = answers(&[
            ("Q1", AnswerValue::from("yes")),
            ("Q2", AnswerValue::Number(6.0)),
            ("Q3", AnswerValue::from("Partial")),
        ]);

        let gaps = build_gap_register(&sections, &submitted);
        let codes: Vec<&str> = gaps.iter().map(|gap| gap.code.as_str()).collect();
        assert_eq!(codes, vec!["Q2", "Q3"]);
        assert_eq!(gaps[0].answer, "6");
        assert_eq!(gaps[1].section, "Gov");
    }

    #[test]
    fn unanswered_scoring_questions_are_gaps() {
        let sections = sections_from_questions(vec![
            Question::new("Q1", "a", QuestionType::YesNo).with_hint("do the thing")
        ]);
        let gaps = build_gap_register(&sections, &AnswerMap::new());
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].answer, "");
        assert_eq!(gaps[0].hint, "do the thing");
    }

    #[test]
    fn text_questions_never_appear_as_gaps() {
        let sections = sections_from_questions(vec![
            Question::new("Q1", "comments", QuestionType::Text)
        ]);
        let gaps = build_gap_register(&sections, &AnswerMap::new());
        assert!(gaps.is_empty());
    }

    #[test]
    fn bonus_credit_is_not_a_gap() {
        let sections = sections_from_questions(vec![
            Question::new("Q1", "a", QuestionType::Single)
                .with_options(parse_options_spec("Exceptional=1.5 | Baseline=1")),
        ]);
        let submitted = answers(&[("Q1", AnswerValue::from("Exceptional"))]);
        let gaps = build_gap_register(&sections, &submitted);
        assert!(gaps.is_empty());
    }

    #[test]
    fn fixed_register_keeps_requirement_and_hint() {
        let rows = vec![
            FixedRow::new("S", "Q1", "a", FixedAnswer::Yes),
            FixedRow::new("S", "Q2", "b", FixedAnswer::Partial)
                .with_requirement("Art. 5")
                .with_hint("document the policy"),
            FixedRow::new("S", "Q3", "c", FixedAnswer::NotApplicable),
        ];
        let gaps = fixed_gap_register(&rows);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].requirement, "Art. 5");
        assert_eq!(gaps[0].hint, "document the policy");
        assert_eq!(gaps[0].answer, "Partial");
    }
}
