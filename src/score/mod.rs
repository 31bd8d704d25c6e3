pub mod choice;
pub mod numeric;
pub mod yesno;

use crate::classify::{classify, Thresholds};
use crate::types::answer::{AnswerMap, AnswerValue};
use crate::types::question::{Question, QuestionType, Section};
use crate::types::result::{ScoreResult, SectionScores};
use indexmap::IndexMap;
use tracing::debug;

/// One question's weighted outcome: what it earned and how much of the
/// denominator it occupies. `Text` and unsupported questions occupy none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionScore {
    pub contribution: f64,
    pub effective_weight: f64,
}

impl QuestionScore {
    const EXCLUDED: QuestionScore = QuestionScore {
        contribution: 0.0,
        effective_weight: 0.0,
    };

    /// Share of full credit earned, when the question counts at all.
    pub fn ratio(&self) -> Option<f64> {
        (self.effective_weight > 0.0).then(|| self.contribution / self.effective_weight)
    }
}

/// Dispatches a question to its scoring strategy.
pub fn question_score(question: &Question, value: Option<&AnswerValue>) -> QuestionScore {
    match question.kind {
        QuestionType::YesNo => yesno::yesno_score(value, question.weight),
        QuestionType::Single => choice::single_score(value, &question.options, question.weight),
        QuestionType::Multi => choice::multi_score(value, &question.options, question.weight),
        QuestionType::Scale | QuestionType::Number => {
            numeric::linear_score(value, question.min, question.max, question.weight)
        }
        QuestionType::Text | QuestionType::Unsupported => QuestionScore::EXCLUDED,
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn percentage(contribution: f64, weight: f64) -> f64 {
    if weight > 0.0 {
        100.0 * contribution / weight
    } else {
        0.0
    }
}

/// Scores one submission against a questionnaire definition.
///
/// Pure and deterministic: identical inputs yield identical results, and no
/// input can make it fail. Malformed values resolve to zero credit per the
/// scorer rules; answers keyed by unknown codes are never read.
pub fn score(sections: &[Section], answers: &AnswerMap, thresholds: &Thresholds) -> ScoreResult {
    let mut total_contribution = 0.0;
    let mut total_weight = 0.0;
    let mut section_totals: IndexMap<&str, (f64, f64)> = IndexMap::new();
    let mut required_total = 0usize;
    let mut required_answered = 0usize;

    for section in sections {
        for question in &section.questions {
            let value = answers.get(&question.code);
            if question.required {
                required_total += 1;
                if value.map(AnswerValue::is_answered).unwrap_or(false) {
                    required_answered += 1;
                }
            }

            let scored = question_score(question, value);
            total_contribution += scored.contribution;
            total_weight += scored.effective_weight;
            let entry = section_totals.entry(section.name.as_str()).or_insert((0.0, 0.0));
            entry.0 += scored.contribution;
            entry.1 += scored.effective_weight;
        }
    }

    let by_section: SectionScores = section_totals
        .into_iter()
        .map(|(name, (contribution, weight))| {
            (name.to_string(), round1(percentage(contribution, weight)))
        })
        .collect();

    let overall = percentage(total_contribution, total_weight);
    let progress_pct = if required_total > 0 {
        (100.0 * required_answered as f64 / required_total as f64).round() as u8
    } else {
        0
    };
    let color = classify(overall, thresholds);
    debug!(
        score_pct = overall,
        %color,
        progress_pct,
        sections = by_section.len(),
        "submission scored"
    );

    ScoreResult {
        score_pct: round1(overall),
        color,
        required_total,
        required_answered,
        progress_pct,
        by_section,
    }
}
