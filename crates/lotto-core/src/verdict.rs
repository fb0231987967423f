use std::fmt;

use serde::Serialize;

/// Threshold below which the p-value rejects uniformity.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Significant,
    NotSignificant,
}

impl Verdict {
    pub fn from_p_value(p_value: f64, significance: f64) -> Self {
        if p_value < significance {
            Self::Significant
        } else {
            Self::NotSignificant
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Significant => write!(
                f,
                "The result is statistically significant. \
                 The numbers do not seem to follow a uniform distribution."
            ),
            Self::NotSignificant => write!(
                f,
                "The result is not statistically significant. \
                 The numbers seem to follow a uniform distribution."
            ),
        }
    }
}
