use crate::error::Result;
use crate::types::result::{GapEntry, ScoreResult};
use serde::Serialize;

#[derive(Serialize)]
struct AssessmentReport<'a> {
    result: &'a ScoreResult,
    gaps: &'a [GapEntry],
}

pub fn to_json(result: &ScoreResult, gaps: &[GapEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&AssessmentReport {
        result,
        gaps,
    })?)
}
