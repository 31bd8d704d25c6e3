use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Submitted answers keyed by question code. Codes not present in the
/// questionnaire are never read.
pub type AnswerMap = HashMap<String, AnswerValue>;

/// A submitted answer value, resolved to one shape at the boundary so
/// scorer dispatch is exhaustive instead of probing runtime types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Labels(Vec<String>),
}

impl AnswerValue {
    /// Whether the value counts as answered for progress bookkeeping.
    /// Empty strings and empty label lists do not.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Text(text) => !text.is_empty(),
            AnswerValue::Labels(labels) => !labels.is_empty(),
            _ => true,
        }
    }

    /// Yes/no truthiness: `true`, or a string in the truthy vocabulary
    /// (case-insensitive), or the number 1. There is no neutral state.
    pub fn is_truthy(&self) -> bool {
        match self {
            AnswerValue::Bool(value) => *value,
            AnswerValue::Number(value) => *value == 1.0,
            AnswerValue::Text(text) => {
                matches!(
                    text.to_lowercase().as_str(),
                    "1" | "true" | "t" | "yes" | "y"
                )
            }
            AnswerValue::Labels(_) => false,
        }
    }

    /// Numeric view for `scale`/`number` questions. Numeric strings parse;
    /// anything else is non-numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Chosen label for `single` questions.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Selected labels for `multi` questions.
    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Labels(labels) => Some(labels),
            _ => None,
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::Labels(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        AnswerValue::Labels(value.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(value) => write!(f, "{value}"),
            AnswerValue::Number(value) => write!(f, "{value}"),
            AnswerValue::Text(text) => f.write_str(text),
            AnswerValue::Labels(labels) => f.write_str(&labels.join(", ")),
        }
    }
}
