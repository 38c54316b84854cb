//! The four-patient demo roster the dashboard renders.

use pulsebridge_common::{AdherenceSignals, Condition, PatientRecord};

/// Build the demo roster. Records get fresh ids and timestamps on every
/// call; the signals themselves are fixed.
pub fn demo_roster() -> Vec<PatientRecord> {
    vec![
        PatientRecord::new(
            "Ms. John Doe",
            Condition::Diabetes,
            AdherenceSignals::new(110, 45, 40.0),
        ),
        PatientRecord::new(
            "Ms. Jane Smith",
            Condition::BreastCancerSurvivor,
            AdherenceSignals::new(85, 20, 5.0),
        ),
        PatientRecord::new(
            "Mrs. Robert Chen",
            Condition::Diabetes,
            AdherenceSignals::new(150, 65, 60.0),
        ),
        PatientRecord::new(
            "Ms. Sarah Miller",
            Condition::Copd,
            AdherenceSignals::new(92, 31, 10.0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_shape() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].adherence.days_since_appt, 110);
        assert_eq!(roster[2].condition, Condition::Diabetes);
    }

    #[test]
    fn test_ids_are_unique() {
        let roster = demo_roster();
        for (i, a) in roster.iter().enumerate() {
            for b in &roster[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
