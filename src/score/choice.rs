use crate::score::QuestionScore;
use crate::types::answer::AnswerValue;
use crate::types::question::ChoiceOption;

fn lookup(options: &[ChoiceOption], label: &str) -> Option<f64> {
    options
        .iter()
        .find(|option| option.label == label)
        .map(|option| option.weight)
}

/// Single-choice: the chosen label's option weight times the question
/// weight. Labels absent from the table default to 1.0; no choice scores 0.
///
/// Deliberately unclamped: an option weight above 1.0 yields a contribution
/// above the question weight (bonus credit).
pub fn single_score(
    value: Option<&AnswerValue>,
    options: &[ChoiceOption],
    weight: f64,
) -> QuestionScore {
    let contribution = match value.and_then(AnswerValue::as_label) {
        Some(label) => lookup(options, label).unwrap_or(1.0) * weight,
        None => 0.0,
    };
    QuestionScore {
        contribution,
        effective_weight: weight,
    }
}

/// Multi-choice: sum of the selected labels' option weights, normalized by
/// the sum of ALL option weights and clamped to [0, 1].
///
/// Without an options table, any selection earns full credit. Known quirk,
/// kept deliberately until product decides otherwise.
pub fn multi_score(
    value: Option<&AnswerValue>,
    options: &[ChoiceOption],
    weight: f64,
) -> QuestionScore {
    let selected = value.and_then(AnswerValue::as_labels).unwrap_or(&[]);
    if selected.is_empty() {
        return QuestionScore {
            contribution: 0.0,
            effective_weight: weight,
        };
    }

    let ratio = if options.is_empty() {
        1.0
    } else {
        let total: f64 = options.iter().map(|option| option.weight).sum();
        let denominator = if total == 0.0 { 1.0 } else { total };
        let earned: f64 = selected
            .iter()
            .map(|label| lookup(options, label).unwrap_or(0.0))
            .sum();
        (earned / denominator).clamp(0.0, 1.0)
    };

    QuestionScore {
        contribution: ratio * weight,
        effective_weight: weight,
    }
}
