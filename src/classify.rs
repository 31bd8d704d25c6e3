use crate::error::{Result, ScorecardError};
use crate::types::result::{Score, ScoreColor};
use serde::{Deserialize, Serialize};

/// Configurable percentage cut-points for the three-band classification.
///
/// Always passed explicitly into a scoring call; the engine never reads
/// ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_green")]
    pub green: f64,
    #[serde(default = "default_amber")]
    pub amber: f64,
}

fn default_green() -> f64 {
    80.0
}

fn default_amber() -> f64 {
    60.0
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            green: default_green(),
            amber: default_amber(),
        }
    }
}

impl Thresholds {
    pub fn new(green: f64, amber: f64) -> Self {
        Self { green, amber }
    }

    /// Boundary validation for the admin component. [`classify`] itself is
    /// total and accepts any threshold pair, inverted or not.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("green", self.green), ("amber", self.amber)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ScorecardError::ThresholdRange { name, value });
            }
        }
        if self.green < self.amber {
            return Err(ScorecardError::ThresholdOrder {
                green: self.green,
                amber: self.amber,
            });
        }
        Ok(())
    }
}

/// Maps an overall percentage to a traffic-light band. Total function,
/// no error cases.
pub fn classify(score_pct: Score, thresholds: &Thresholds) -> ScoreColor {
    if score_pct >= thresholds.green {
        ScoreColor::Green
    } else if score_pct >= thresholds.amber {
        ScoreColor::Amber
    } else {
        ScoreColor::Red
    }
}
