//! High-risk queue: every roster record scored and tiered, worst first.

use pulsebridge_common::PatientRecord;
use pulsebridge_scoring::{RiskBreakdown, RiskModel, RiskTier};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One queue entry: the record together with its score decomposition and
/// tier. Serialises directly for the dashboard's queue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPatient {
    pub record: PatientRecord,
    pub breakdown: RiskBreakdown,
    pub tier: RiskTier,
}

/// Score a roster through the model and return it sorted by descending
/// risk. Ties keep roster order.
pub fn score_roster(model: &RiskModel, roster: &[PatientRecord]) -> Vec<ScoredPatient> {
    let mut scored: Vec<ScoredPatient> = roster
        .iter()
        .map(|record| {
            let breakdown = model.score(&record.adherence);
            let tier = RiskTier::for_score(breakdown.risk_score, model.critical_threshold);
            ScoredPatient {
                record: record.clone(),
                breakdown,
                tier,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.breakdown.risk_score.total_cmp(&a.breakdown.risk_score));

    debug!(patients = scored.len(), "high-risk queue rebuilt");
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_roster;

    #[test]
    fn test_queue_order_and_scores() {
        let queue = score_roster(&RiskModel::default(), &demo_roster());
        let names: Vec<&str> = queue.iter().map(|p| p.record.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Mrs. Robert Chen", "Ms. John Doe", "Ms. Sarah Miller", "Ms. Jane Smith"]
        );

        let scores: Vec<f64> = queue.iter().map(|p| p.breakdown.risk_score).collect();
        assert_eq!(scores, vec![100.0, 49.6, 5.6, 1.0]);
    }

    #[test]
    fn test_tiers_split_at_threshold() {
        let queue = score_roster(&RiskModel::default(), &demo_roster());
        assert_eq!(queue[0].tier, RiskTier::Critical); // 100.0
        assert_eq!(queue[1].tier, RiskTier::Stable); // 49.6 does not clear 50
        assert_eq!(queue[3].tier, RiskTier::Stable);
    }

    #[test]
    fn test_empty_roster() {
        let queue = score_roster(&RiskModel::default(), &[]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_serialises() {
        let queue = score_roster(&RiskModel::default(), &demo_roster());
        let json = serde_json::to_value(&queue).unwrap();
        assert_eq!(json[0]["tier"], "critical");
        assert_eq!(json[0]["breakdown"]["risk_score"], 100.0);
        assert_eq!(json[0]["record"]["name"], "Mrs. Robert Chen");
    }
}
