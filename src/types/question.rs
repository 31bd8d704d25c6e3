use crate::error::{Result, ScorecardError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Determines which scoring strategy applies to a question.
///
/// Unrecognized type strings in upstream data resolve to `Unsupported`,
/// which is excluded from scoring like `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum QuestionType {
    YesNo,
    Single,
    Multi,
    Scale,
    Number,
    Text,
    Unsupported,
}

impl From<String> for QuestionType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "yesno" => QuestionType::YesNo,
            "single" => QuestionType::Single,
            "multi" => QuestionType::Multi,
            "scale" => QuestionType::Scale,
            "number" => QuestionType::Number,
            "text" => QuestionType::Text,
            _ => QuestionType::Unsupported,
        }
    }
}

/// One selectable option of a `single`/`multi` question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// Parses an options spec of the form `"Label=1 | Other=0.5 | Plain"`.
///
/// Entries without `=` or with an unparseable weight fall back to 1.0.
/// An empty or blank spec yields no options.
pub fn parse_options_spec(spec: &str) -> Vec<ChoiceOption> {
    if spec.trim().is_empty() {
        return Vec::new();
    }
    spec.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((label, weight)) => ChoiceOption::new(
                label.trim(),
                weight.trim().parse::<f64>().unwrap_or(1.0),
            ),
            None => ChoiceOption::new(part, 1.0),
        })
        .collect()
}

/// Immutable definition of one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Grouping label; not unique across questions.
    #[serde(default)]
    pub section: String,

    /// Unique identifier within one questionnaire version. Blank codes are
    /// filled by [`sections_from_questions`].
    #[serde(default)]
    pub code: String,

    /// Prompt shown to the respondent.
    #[serde(default)]
    pub text: String,

    #[serde(rename = "type")]
    pub kind: QuestionType,

    /// Only meaningful for `single`/`multi`.
    #[serde(default)]
    pub options: Vec<ChoiceOption>,

    /// Contribution weight relative to other questions (default 1.0).
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Used only for progress computation, never scoring.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Remediation hint surfaced verbatim in gap entries.
    #[serde(default)]
    pub hint: String,

    /// Linear normalization endpoints for `scale`/`number`.
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

fn default_weight() -> f64 {
    1.0
}

fn default_required() -> bool {
    true
}

impl Question {
    pub fn new(code: impl Into<String>, text: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            section: String::new(),
            code: code.into(),
            text: text.into(),
            kind,
            options: Vec::new(),
            weight: 1.0,
            required: true,
            hint: String::new(),
            min: None,
            max: None,
        }
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Named grouping of questions for sub-score reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub questions: Vec<Question>,
}

/// Groups a flat, ordered question list into sections by first appearance.
///
/// Questions with a blank section label land in `"General"`; blank codes are
/// filled as `Q001`, `Q002`, ... by position in the flat list.
pub fn sections_from_questions(questions: Vec<Question>) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for (index, mut question) in questions.into_iter().enumerate() {
        if question.section.trim().is_empty() {
            question.section = "General".to_string();
        }
        if question.code.trim().is_empty() {
            question.code = format!("Q{:03}", index + 1);
        }
        match sections
            .iter_mut()
            .find(|section| section.name == question.section)
        {
            Some(section) => section.questions.push(question),
            None => sections.push(Section {
                name: question.section.clone(),
                questions: vec![question],
            }),
        }
    }
    sections
}

/// Upstream-boundary validation of a questionnaire definition.
///
/// Scoring itself never calls this; it is total over any input. Ingestion
/// and admin components call it to reject malformed definitions early.
pub fn validate_sections(sections: &[Section]) -> Result<()> {
    let mut seen = HashSet::<&str>::new();
    for section in sections {
        for question in &section.questions {
            if !seen.insert(question.code.as_str()) {
                return Err(ScorecardError::DuplicateCode(question.code.clone()));
            }
            if !question.weight.is_finite() || question.weight < 0.0 {
                return Err(ScorecardError::InvalidWeight {
                    code: question.code.clone(),
                    weight: question.weight,
                });
            }
            if matches!(question.kind, QuestionType::Scale | QuestionType::Number) {
                if let (Some(min), Some(max)) = (question.min, question.max) {
                    if min == max {
                        return Err(ScorecardError::DegenerateBounds(question.code.clone()));
                    }
                }
            }
        }
    }
    Ok(())
}
