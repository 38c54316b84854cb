/// Core entity types shared by the scoring, triage and cohort crates.
/// These are the Rust representations of the patient records the
/// dashboard renders.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Primary condition being monitored for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Diabetes,
    BreastCancerSurvivor,
    Copd,
    Other(String),
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Diabetes => write!(f, "Diabetes"),
            Condition::BreastCancerSurvivor => write!(f, "Breast Cancer Survivor"),
            Condition::Copd => write!(f, "COPD"),
            Condition::Other(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Adherence signals
// ---------------------------------------------------------------------------

/// The three engagement signals the risk model consumes.
///
/// `activity_drop_pct` is trusted as a 0–100 percentage; callers validate
/// range before constructing (see ARCHITECTURE.md §2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdherenceSignals {
    /// Days since last clinical appointment.
    pub days_since_appt: u32,
    /// Days since last medication refill.
    pub days_since_refill: u32,
    /// Decline in monitored activity, as a percentage.
    pub activity_drop_pct: f64,
}

impl AdherenceSignals {
    pub fn new(days_since_appt: u32, days_since_refill: u32, activity_drop_pct: f64) -> Self {
        Self {
            days_since_appt,
            days_since_refill,
            activity_drop_pct,
        }
    }

    /// Derive the day counts from calendar dates against an observation date.
    /// Dates in the future count as zero days elapsed.
    pub fn from_dates(
        last_appt: NaiveDate,
        last_refill: NaiveDate,
        activity_drop_pct: f64,
        observed: NaiveDate,
    ) -> Self {
        let elapsed = |d: NaiveDate| (observed - d).num_days().max(0) as u32;
        Self {
            days_since_appt: elapsed(last_appt),
            days_since_refill: elapsed(last_refill),
            activity_drop_pct,
        }
    }
}

// ---------------------------------------------------------------------------
// Patient record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: Uuid,
    pub name: String,
    pub condition: Condition,
    pub adherence: AdherenceSignals,
    pub created_at: DateTime<Utc>,
}

impl PatientRecord {
    pub fn new(
        name: impl Into<String>,
        condition: Condition,
        adherence: AdherenceSignals,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            condition,
            adherence,
            created_at: Utc::now(),
        }
    }
}
