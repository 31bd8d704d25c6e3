use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("duplicate question code: {0}")]
    DuplicateCode(String),

    #[error("question {code} has invalid weight {weight} (must be finite and >= 0)")]
    InvalidWeight { code: String, weight: f64 },

    #[error("question {0} has equal min/max bounds; its score is always 0")]
    DegenerateBounds(String),

    #[error("threshold {name} = {value} is outside 0..=100")]
    ThresholdRange { name: &'static str, value: f64 },

    #[error("green threshold {green} is below amber threshold {amber}")]
    ThresholdOrder { green: f64, amber: f64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
