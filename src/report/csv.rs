use crate::error::Result;
use crate::types::result::GapEntry;

/// Renders the gap register as CSV, one record per deficiency, with a
/// header row. Yields only the header for an empty register.
pub fn gap_register_csv(gaps: &[GapEntry]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        if gaps.is_empty() {
            writer.write_record([
                "section",
                "requirement",
                "code",
                "text",
                "answer",
                "hint",
                "weight",
            ])?;
        }
        for gap in gaps {
            writer.serialize(gap)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
