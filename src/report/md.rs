use crate::types::result::{GapEntry, ScoreResult};

pub fn to_markdown(result: &ScoreResult, gaps: &[GapEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Report\n\n");
    output.push_str(&format!(
        "Overall score: {:.1}% ({})\n\n",
        result.score_pct, result.color
    ));
    output.push_str(&format!(
        "Progress: {}% ({} of {} required questions answered)\n\n",
        result.progress_pct, result.required_answered, result.required_total
    ));

    output.push_str("## Section Scores\n\n");
    if result.by_section.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (section, score) in &result.by_section {
            output.push_str(&format!("- {section}: {score:.1}%\n"));
        }
        output.push('\n');
    }

    output.push_str("## Gap Register\n\n");
    if gaps.is_empty() {
        output.push_str("- none\n");
    } else {
        for gap in gaps {
            output.push_str(&format!(
                "- [{}] {} — answer: {}",
                gap.code,
                gap.text,
                if gap.answer.is_empty() {
                    "(unanswered)"
                } else {
                    gap.answer.as_str()
                },
            ));
            if !gap.hint.is_empty() {
                output.push_str(&format!(" — hint: {}", gap.hint));
            }
            output.push('\n');
        }
    }

    output
}
