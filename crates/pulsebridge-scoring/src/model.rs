//! Risk model configuration.
//!
//! Bundles the scoring constants (ARCHITECTURE.md §2) so deployments can
//! override them from a YAML document. The compiled-in defaults are the
//! canonical values; `validate` rejects configurations the scorer cannot
//! sensibly run with.

use pulsebridge_common::{AdherenceSignals, PulseBridgeError, Result};
use serde::{Deserialize, Serialize};

use crate::intervals::CareIntervals;
use crate::scorer::{compute_breakdown, RiskBreakdown};
use crate::weights::RiskWeights;

fn default_compounding_multiplier() -> f64 {
    1.2
}

fn default_critical_threshold() -> f64 {
    50.0
}

/// Complete adherence risk model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskModel {
    /// Care cadence and saturation caps
    #[serde(default)]
    pub intervals: CareIntervals,

    /// Component weights
    #[serde(default)]
    pub weights: RiskWeights,

    /// Amplification applied when both tracked activities are overdue at once
    #[serde(default = "default_compounding_multiplier")]
    pub compounding_multiplier: f64,

    /// Risk score above which a patient lands in the critical tier
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            intervals: CareIntervals::default(),
            weights: RiskWeights::default(),
            compounding_multiplier: default_compounding_multiplier(),
            critical_threshold: default_critical_threshold(),
        }
    }
}

impl RiskModel {
    /// Parse a model from YAML and validate it. Missing fields fall back to
    /// the canonical defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let model: RiskModel = serde_yaml::from_str(yaml)?;
        model.validate()?;
        Ok(model)
    }

    /// Reject configurations the scorer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !self.weights.validate() {
            return Err(PulseBridgeError::Config(
                "risk weights must sum to 1.0".into(),
            ));
        }
        if self.intervals.appt_cap_days == 0 || self.intervals.refill_cap_days == 0 {
            return Err(PulseBridgeError::Config(
                "saturation caps must be positive".into(),
            ));
        }
        if self.compounding_multiplier < 1.0 {
            return Err(PulseBridgeError::Config(
                "compounding multiplier must be >= 1.0".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.critical_threshold) {
            return Err(PulseBridgeError::Config(
                "critical threshold must lie in [0, 100]".into(),
            ));
        }
        Ok(())
    }

    /// Score one patient's signals through this model.
    pub fn score(&self, signals: &AdherenceSignals) -> RiskBreakdown {
        compute_breakdown(
            signals,
            &self.intervals,
            &self.weights,
            self.compounding_multiplier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_valid() {
        assert!(RiskModel::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_overrides_with_defaults() {
        let yaml = "compounding_multiplier: 1.5\n";
        let model = RiskModel::from_yaml_str(yaml).unwrap();
        assert_eq!(model.compounding_multiplier, 1.5);
        assert_eq!(model.intervals.appt_interval_days, 90);
        assert_eq!(model.critical_threshold, 50.0);
    }

    #[test]
    fn test_yaml_rejects_broken_weights() {
        let yaml = "weights:\n  appointment: 0.9\n  refill: 0.9\n  activity: 0.9\n";
        let err = RiskModel::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PulseBridgeError::Config(_)));
    }

    #[test]
    fn test_yaml_rejects_zero_cap() {
        let yaml = "intervals:\n  appt_interval_days: 90\n  appt_cap_days: 0\n  refill_interval_days: 30\n  refill_cap_days: 30\n";
        let err = RiskModel::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, PulseBridgeError::Config(_)));
    }

    #[test]
    fn test_custom_multiplier_flows_through() {
        let mut model = RiskModel::default();
        model.compounding_multiplier = 1.0;
        // Both saturated but amplification disabled: plain weighted sum
        let b = model.score(&AdherenceSignals::new(150, 65, 0.0));
        assert_eq!(b.risk_score, 80.0);
    }
}
