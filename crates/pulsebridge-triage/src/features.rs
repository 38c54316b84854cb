//! Biopsy feature vector.
//!
//! Field names (and the two space-containing serde names) match the upstream
//! cytology export format, so a form payload deserialises directly.

use serde::{Deserialize, Serialize};

/// Ten cytological measurements collected by the intake form. Only the four
/// "worst" morphology fields drive the §3 rules; the rest travel with the
/// record for display and audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiopsyFeatures {
    pub texture_worst: f64,
    pub radius_worst: f64,
    pub area_worst: f64,
    pub symmetry_worst: f64,
    pub concavity_worst: f64,
    pub radius_se: f64,
    pub area_se: f64,
    pub concavity_mean: f64,
    #[serde(rename = "concave points_mean")]
    pub concave_points_mean: f64,
    #[serde(rename = "concave points_worst")]
    pub concave_points_worst: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialises_upstream_field_names() {
        let json = r#"{
            "texture_worst": 25.0, "radius_worst": 18.0, "area_worst": 1000.0,
            "symmetry_worst": 0.4, "concavity_worst": 0.5, "radius_se": 0.5,
            "area_se": 40.0, "concavity_mean": 0.2,
            "concave points_mean": 0.05, "concave points_worst": 0.15
        }"#;
        let f: BiopsyFeatures = serde_json::from_str(json).unwrap();
        assert_eq!(f.radius_worst, 18.0);
        assert_eq!(f.concave_points_worst, 0.15);
    }
}
