//! Risk banding for the patient queue.
//! See ARCHITECTURE.md §2.4

use serde::{Deserialize, Serialize};

/// Band a final risk score falls into. The dashboard renders critical
/// patients with an intervention banner and everyone else as routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Critical,
    Stable,
}

impl RiskTier {
    /// Strictly above the threshold is critical; the threshold itself is not.
    pub fn for_score(risk_score: f64, critical_threshold: f64) -> Self {
        if risk_score > critical_threshold {
            RiskTier::Critical
        } else {
            RiskTier::Stable
        }
    }
}
