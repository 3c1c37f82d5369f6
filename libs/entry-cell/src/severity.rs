use serde::{Deserialize, Serialize};

use shared_models::HealthCheckRating;

/// Severity bucket shown for a health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Lowest,
    Low,
    Medium,
    Highest,
}

impl Severity {
    /// Never fails: anything at or above 3, and anything below 0, lands in `Highest`.
    pub fn from_rating(rating: HealthCheckRating) -> Self {
        match rating.value() {
            0 => Severity::Lowest,
            1 => Severity::Low,
            2 => Severity::Medium,
            _ => Severity::Highest,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Lowest => "green",
            Severity::Low => "yellow",
            Severity::Medium => "orange",
            Severity::Highest => "red",
        }
    }
}

impl From<HealthCheckRating> for Severity {
    fn from(rating: HealthCheckRating) -> Self {
        Severity::from_rating(rating)
    }
}
