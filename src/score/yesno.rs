use crate::score::QuestionScore;
use crate::types::answer::AnswerValue;

/// Yes/no questions have no neutral state: anything outside the truthy
/// vocabulary, including a missing answer, scores as no.
pub fn yesno_score(value: Option<&AnswerValue>, weight: f64) -> QuestionScore {
    let truthy = value.map(AnswerValue::is_truthy).unwrap_or(false);
    QuestionScore {
        contribution: if truthy { weight } else { 0.0 },
        effective_weight: weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_answer_earns_full_weight() {
        let answer = AnswerValue::from("yes");
        let scored = yesno_score(Some(&answer), 2.0);
        assert_eq!(scored.contribution, 2.0);
        assert_eq!(scored.effective_weight, 2.0);
    }

    #[test]
    fn missing_answer_counts_as_no() {
        let scored = yesno_score(None, 1.5);
        assert_eq!(scored.contribution, 0.0);
        assert_eq!(scored.effective_weight, 1.5);
    }

    #[test]
    fn unrecognized_string_counts_as_no() {
        let answer = AnswerValue::from("perhaps");
        let scored = yesno_score(Some(&answer), 1.0);
        assert_eq!(scored.contribution, 0.0);
        assert_eq!(scored.effective_weight, 1.0);
    }
}
