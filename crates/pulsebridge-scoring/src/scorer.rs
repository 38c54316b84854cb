//! Adherence risk computation.
//! Implements the R(p) formula from ARCHITECTURE.md §2.

use pulsebridge_common::AdherenceSignals;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intervals::{overdue_days, saturation_score, CareIntervals};
use crate::model::RiskModel;
use crate::weights::RiskWeights;

/// Full decomposition of a risk score, kept alongside the final value so the
/// presentation layer can explain WHY a patient ranks where they do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Days past the appointment interval (uncapped).
    pub appt_overdue_days: u32,
    /// Days past the refill interval (uncapped).
    pub refill_overdue_days: u32,
    /// Appointment contribution, 0–100.
    pub appt_score: f64,
    /// Refill contribution, 0–100.
    pub refill_score: f64,
    /// Activity contribution, the trusted input percentage.
    pub activity_score: f64,
    /// Compounding multiplier applied (1.0 or the configured amplification).
    pub multiplier: f64,
    /// Weighted sum after the multiplier, before rounding and clamping.
    pub raw: f64,
    /// Final bounded score in [0, 100], one decimal place.
    pub risk_score: f64,
}

/// Round half away from zero to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compute the full risk breakdown for one patient's signals.
///
/// R(p) = min(100, round₁((w_a·s_a + w_r·s_r + w_x·x) × m))
///
/// where m is the compounding multiplier when BOTH raw overdue amounts are
/// positive. The caps feed only the saturation scores, never the multiplier
/// condition (ARCHITECTURE.md §2.3).
pub fn compute_breakdown(
    signals: &AdherenceSignals,
    intervals: &CareIntervals,
    weights: &RiskWeights,
    compounding_multiplier: f64,
) -> RiskBreakdown {
    let appt_overdue = overdue_days(signals.days_since_appt, intervals.appt_interval_days);
    let refill_overdue = overdue_days(signals.days_since_refill, intervals.refill_interval_days);

    let appt_score = saturation_score(appt_overdue, intervals.appt_cap_days);
    let refill_score = saturation_score(refill_overdue, intervals.refill_cap_days);
    let activity_score = signals.activity_drop_pct;

    // Silent drop-off: both care activities lapsed at once
    let multiplier = if appt_overdue > 0 && refill_overdue > 0 {
        compounding_multiplier
    } else {
        1.0
    };

    let components = [appt_score, refill_score, activity_score];
    let weighted_sum: f64 = components
        .iter()
        .zip(weights.as_array().iter())
        .map(|(c, w)| c * w)
        .sum();
    let raw = weighted_sum * multiplier;

    let risk_score = round1(raw).min(100.0);

    debug!(
        appt_overdue,
        refill_overdue,
        multiplier,
        risk_score,
        "adherence risk computed"
    );

    RiskBreakdown {
        appt_overdue_days: appt_overdue,
        refill_overdue_days: refill_overdue,
        appt_score,
        refill_score,
        activity_score,
        multiplier,
        raw,
        risk_score,
    }
}

/// Convenience entry point: score three raw signals through the default
/// model and return just the bounded percentage.
///
/// Pure and deterministic; safe to call from any number of threads.
pub fn compute_risk(days_since_appt: u32, days_since_refill: u32, activity_drop: f64) -> f64 {
    let signals = AdherenceSignals::new(days_since_appt, days_since_refill, activity_drop);
    RiskModel::default().score(&signals).risk_score
}
