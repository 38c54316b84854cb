//! Weight vector for the adherence risk score.
//! See ARCHITECTURE.md §2.2 — weights sum to 1.0.

use serde::{Deserialize, Serialize};

/// The 3-component weight vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskWeights {
    /// Appointment-gap component
    pub appointment: f64,
    /// Refill-gap component
    pub refill: f64,
    /// Activity-drop component
    pub activity: f64,
}

impl Default for RiskWeights {
    /// Canonical weights from ARCHITECTURE.md §2.2
    fn default() -> Self {
        Self {
            appointment: 0.40,
            refill:      0.40,
            activity:    0.20,
        }
    }
}

impl RiskWeights {
    /// Validate that all weights sum to ~1.0
    pub fn validate(&self) -> bool {
        let sum = self.appointment + self.refill + self.activity;
        (sum - 1.0).abs() < 1e-6
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.appointment + self.refill + self.activity;
        if sum > 0.0 {
            self.appointment /= sum;
            self.refill      /= sum;
            self.activity    /= sum;
        }
    }

    /// Convert to array for iteration.
    pub fn as_array(&self) -> [f64; 3] {
        [self.appointment, self.refill, self.activity]
    }
}
