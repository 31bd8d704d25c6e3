use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentage score in [0, 100].
pub type Score = f64;

/// Per-section sub-scores in first-seen section order.
pub type SectionScores = IndexMap<String, Score>;

/// Traffic-light classification of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Amber,
    Red,
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScoreColor::Green => "green",
            ScoreColor::Amber => "amber",
            ScoreColor::Red => "red",
        })
    }
}

/// Outcome of scoring one submission, recomputed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Overall percentage, rounded to one decimal.
    pub score_pct: Score,
    pub color: ScoreColor,
    pub required_total: usize,
    pub required_answered: usize,
    /// Share of required questions answered, rounded to the nearest integer.
    pub progress_pct: u8,
    pub by_section: SectionScores,
}

/// One row of the gap register: a question whose answer did not earn
/// full credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub section: String,
    /// Regulatory requirement reference, when the questionnaire carries one.
    #[serde(default)]
    pub requirement: String,
    pub code: String,
    pub text: String,
    /// The raw answer as submitted, rendered for display.
    pub answer: String,
    pub hint: String,
    pub weight: f64,
}
