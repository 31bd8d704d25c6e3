pub mod csv;
pub mod json;
pub mod md;

use crate::error::Result;
use crate::types::result::{GapEntry, ScoreResult};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    /// Gap register only, one row per deficiency.
    Csv,
}

pub fn render(result: &ScoreResult, gaps: &[GapEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(result, gaps),
        OutputFormat::Md => Ok(md::to_markdown(result, gaps)),
        OutputFormat::Csv => csv::gap_register_csv(gaps),
    }
}
