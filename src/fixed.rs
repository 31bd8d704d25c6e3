//! Fixed-vocabulary scoring: the simplified assessment variant where every
//! question takes one of four answers instead of a typed value. `N.A.`
//! removes the question's weight from the denominator entirely.

use crate::classify::{classify, Thresholds};
use crate::gaps::fixed_gap_register;
use crate::score::{percentage, round1};
use crate::types::result::{GapEntry, Score, ScoreColor, SectionScores};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The four-value answer vocabulary. Serialized forms are the exact,
/// case-sensitive strings `Yes`, `Partial`, `No`, `N.A.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FixedAnswer {
    Yes,
    Partial,
    No,
    #[default]
    #[serde(rename = "N.A.")]
    NotApplicable,
}

impl FixedAnswer {
    /// Score fraction, or `None` for `N.A.` (excluded, not zero).
    pub fn score(&self) -> Option<f64> {
        match self {
            FixedAnswer::Yes => Some(1.0),
            FixedAnswer::Partial => Some(0.5),
            FixedAnswer::No => Some(0.0),
            FixedAnswer::NotApplicable => None,
        }
    }

    /// Whether the answer belongs in the gap register.
    pub fn is_gap(&self) -> bool {
        matches!(self, FixedAnswer::No | FixedAnswer::Partial)
    }
}

impl fmt::Display for FixedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FixedAnswer::Yes => "Yes",
            FixedAnswer::Partial => "Partial",
            FixedAnswer::No => "No",
            FixedAnswer::NotApplicable => "N.A.",
        })
    }
}

/// One answered row of a fixed-vocabulary assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRow {
    #[serde(default)]
    pub section: String,
    /// Regulatory requirement reference carried through to the gap register.
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub answer: FixedAnswer,
}

fn default_weight() -> f64 {
    1.0
}

impl FixedRow {
    pub fn new(
        section: impl Into<String>,
        code: impl Into<String>,
        text: impl Into<String>,
        answer: FixedAnswer,
    ) -> Self {
        Self {
            section: section.into(),
            requirement: String::new(),
            code: code.into(),
            text: text.into(),
            hint: String::new(),
            weight: 1.0,
            answer,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = requirement.into();
        self
    }
}

/// Outcome of scoring a fixed-vocabulary assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedScores {
    pub score_pct: Score,
    pub color: ScoreColor,
    pub by_section: SectionScores,
    pub gaps: Vec<GapEntry>,
}

/// Scores a flat row list with the `{Yes, Partial, No, N.A.}` vocabulary,
/// sharing the weighted-average mathematics of the typed mode.
pub fn score_fixed_vocabulary(rows: &[FixedRow], thresholds: &Thresholds) -> FixedScores {
    let mut total_earned = 0.0;
    let mut total_weight = 0.0;
    let mut section_totals: IndexMap<&str, (f64, f64)> = IndexMap::new();

    for row in rows {
        let entry = section_totals.entry(row.section.as_str()).or_insert((0.0, 0.0));
        if let Some(fraction) = row.answer.score() {
            total_earned += fraction * row.weight;
            total_weight += row.weight;
            entry.0 += fraction * row.weight;
            entry.1 += row.weight;
        }
    }

    let by_section: SectionScores = section_totals
        .into_iter()
        .map(|(name, (earned, weight))| (name.to_string(), round1(percentage(earned, weight))))
        .collect();

    let score_pct = round1(percentage(total_earned, total_weight));
    let color = classify(score_pct, thresholds);
    let gaps = fixed_gap_register(rows);
    debug!(score_pct, %color, gaps = gaps.len(), "fixed-vocabulary assessment scored");

    FixedScores {
        score_pct,
        color,
        by_section,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<FixedRow> {
        vec![
            FixedRow::new("SEC1", "Q1", "A?", FixedAnswer::Yes),
            FixedRow::new("SEC1", "Q2", "B?", FixedAnswer::No),
            FixedRow::new("SEC2", "Q3", "C?", FixedAnswer::Partial).with_weight(2.0),
            FixedRow::new("SEC2", "Q4", "D?", FixedAnswer::NotApplicable),
        ]
    }

    #[test]
    fn weighted_average_excludes_not_applicable() {
        let scores = score_fixed_vocabulary(&sample_rows(), &Thresholds::default());
        // (1*1 + 0*1 + 0.5*2) / (1 + 1 + 2) = 50%.
        assert_eq!(scores.score_pct, 50.0);
        assert_eq!(scores.color, ScoreColor::Red);
        assert_eq!(scores.by_section["SEC1"], 50.0);
        assert_eq!(scores.by_section["SEC2"], 50.0);
    }

    #[test]
    fn gaps_list_no_and_partial_in_order() {
        let scores = score_fixed_vocabulary(&sample_rows(), &Thresholds::default());
        let codes: Vec<&str> = scores.gaps.iter().map(|gap| gap.code.as_str()).collect();
        assert_eq!(codes, vec!["Q2", "Q3"]);
    }

    #[test]
    fn removing_na_row_leaves_score_unchanged() {
        let rows = sample_rows();
        let trimmed: Vec<FixedRow> = rows
            .iter()
            .filter(|row| row.answer != FixedAnswer::NotApplicable)
            .cloned()
            .collect();
        let full = score_fixed_vocabulary(&rows, &Thresholds::default());
        let without = score_fixed_vocabulary(&trimmed, &Thresholds::default());
        assert_eq!(full.score_pct, without.score_pct);
    }

    #[test]
    fn all_yes_scores_green_with_no_gaps() {
        let rows = vec![
            FixedRow::new("S", "Q1", "a", FixedAnswer::Yes),
            FixedRow::new("S", "Q2", "b", FixedAnswer::Yes),
        ];
        let scores = score_fixed_vocabulary(&rows, &Thresholds::default());
        assert_eq!(scores.score_pct, 100.0);
        assert_eq!(scores.color, ScoreColor::Green);
        assert!(scores.gaps.is_empty());
    }

    #[test]
    fn all_not_applicable_scores_zero_red() {
        let rows = vec![
            FixedRow::new("S", "Q1", "a", FixedAnswer::NotApplicable),
            FixedRow::new("S", "Q2", "b", FixedAnswer::NotApplicable),
        ];
        let scores = score_fixed_vocabulary(&rows, &Thresholds::default());
        assert_eq!(scores.score_pct, 0.0);
        assert_eq!(scores.color, ScoreColor::Red);
        assert_eq!(scores.by_section["S"], 0.0);
    }

    #[test]
    fn upgrading_no_to_yes_never_lowers_the_score() {
        let mut rows = sample_rows();
        let before = score_fixed_vocabulary(&rows, &Thresholds::default());
        rows[1].answer = FixedAnswer::Yes;
        let after = score_fixed_vocabulary(&rows, &Thresholds::default());
        assert!(after.score_pct >= before.score_pct);
    }

    #[test]
    fn answer_vocabulary_uses_exact_strings() {
        assert_eq!(
            serde_json::to_string(&FixedAnswer::NotApplicable)
                .expect("answer should serialize"),
            "\"N.A.\""
        );
        let parsed: FixedAnswer =
            serde_json::from_str("\"Partial\"").expect("answer should deserialize");
        assert_eq!(parsed, FixedAnswer::Partial);
        assert!(serde_json::from_str::<FixedAnswer>("\"partial\"").is_err());
    }

    #[test]
    fn missing_answer_defaults_to_not_applicable() {
        let row: FixedRow = serde_json::from_str(r#"{"section": "S", "code": "Q1"}"#)
            .expect("row should deserialize");
        assert_eq!(row.answer, FixedAnswer::NotApplicable);
        assert_eq!(row.weight, 1.0);
    }
}
