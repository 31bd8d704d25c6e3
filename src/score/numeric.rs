use crate::score::QuestionScore;
use crate::types::answer::AnswerValue;

/// Shared rule for `scale` and `number`: linear interpolation of the value
/// between `min` and `max`, clamped to [0, 1]. Missing bounds, equal bounds
/// or a non-numeric value score 0 with the weight still counted.
pub fn linear_score(
    value: Option<&AnswerValue>,
    min: Option<f64>,
    max: Option<f64>,
    weight: f64,
) -> QuestionScore {
    let ratio = match (value.and_then(AnswerValue::as_number), min, max) {
        (Some(value), Some(min), Some(max)) if max != min => {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        }
        _ => 0.0,
    };
    QuestionScore {
        contribution: ratio * weight,
        effective_weight: weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_earns_half_weight() {
        let answer = AnswerValue::Number(3.0);
        let scored = linear_score(Some(&answer), Some(1.0), Some(5.0), 2.0);
        assert_eq!(scored.contribution, 1.0);
        assert_eq!(scored.effective_weight, 2.0);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let low = AnswerValue::Number(-10.0);
        assert_eq!(
            linear_score(Some(&low), Some(0.0), Some(10.0), 1.0).contribution,
            0.0
        );
        let high = AnswerValue::Number(99.0);
        assert_eq!(
            linear_score(Some(&high), Some(0.0), Some(10.0), 1.0).contribution,
            1.0
        );
    }

    #[test]
    fn equal_bounds_score_zero() {
        let answer = AnswerValue::Number(3.0);
        let scored = linear_score(Some(&answer), Some(3.0), Some(3.0), 1.0);
        assert_eq!(scored.contribution, 0.0);
        assert_eq!(scored.effective_weight, 1.0);
    }

    #[test]
    fn missing_bounds_or_value_score_zero() {
        let answer = AnswerValue::Number(3.0);
        assert_eq!(
            linear_score(Some(&answer), None, Some(5.0), 1.0).contribution,
            0.0
        );
        assert_eq!(linear_score(None, Some(1.0), Some(5.0), 1.0).contribution, 0.0);
    }

    #[test]
    fn numeric_string_interpolates() {
        let answer = AnswerValue::from("4");
        let scored = linear_score(Some(&answer), Some(0.0), Some(8.0), 1.0);
        assert_eq!(scored.contribution, 0.5);
    }

    #[test]
    fn non_numeric_value_scores_zero() {
        let answer = AnswerValue::from("lots");
        let scored = linear_score(Some(&answer), Some(0.0), Some(8.0), 1.0);
        assert_eq!(scored.contribution, 0.0);
        assert_eq!(scored.effective_weight, 1.0);
    }
}
