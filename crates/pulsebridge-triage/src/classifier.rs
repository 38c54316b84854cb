//! Threshold classifier over the "worst" morphology measurements.
//! See ARCHITECTURE.md §3 for the rule table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::BiopsyFeatures;

/// Reported confidence for a malignant call.
pub const MALIGNANT_CONFIDENCE: f64 = 0.94;
/// Reported confidence for a benign call.
pub const BENIGN_CONFIDENCE: f64 = 0.12;

/// Points a sample must exceed before it is called malignant.
const MALIGNANT_POINTS: u32 = 5;

/// Binary triage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    Malignant,
    Benign,
}

impl Diagnosis {
    /// Follow-up the dashboard surfaces next to the label.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Diagnosis::Malignant => "Immediate oncology referral",
            Diagnosis::Benign => "Routine annual screening",
        }
    }
}

/// Which threshold rules a sample tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageFlag {
    RadiusWorst,
    TextureWorst,
    AreaWorst,
    ConcavityWorst,
}

/// Triage outcome: label, fixed confidence, and the tripped rules so the
/// presentation layer can explain the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    pub diagnosis: Diagnosis,
    pub confidence: f64,
    pub flags: Vec<TriageFlag>,
}

/// Apply the rule table. All thresholds are strict: a measurement sitting
/// exactly on a threshold does not trip its rule.
pub fn classify(features: &BiopsyFeatures) -> TriageResult {
    let mut points = 0u32;
    let mut flags = Vec::new();

    if features.radius_worst > 18.0 {
        points += 3;
        flags.push(TriageFlag::RadiusWorst);
    }
    if features.texture_worst > 25.0 {
        points += 2;
        flags.push(TriageFlag::TextureWorst);
    }
    if features.area_worst > 1000.0 {
        points += 3;
        flags.push(TriageFlag::AreaWorst);
    }
    if features.concavity_worst > 0.5 {
        points += 2;
        flags.push(TriageFlag::ConcavityWorst);
    }

    let diagnosis = if points > MALIGNANT_POINTS {
        Diagnosis::Malignant
    } else {
        Diagnosis::Benign
    };
    let confidence = match diagnosis {
        Diagnosis::Malignant => MALIGNANT_CONFIDENCE,
        Diagnosis::Benign => BENIGN_CONFIDENCE,
    };

    debug!(points, ?diagnosis, "biopsy sample triaged");

    TriageResult {
        diagnosis,
        confidence,
        flags,
    }
}
