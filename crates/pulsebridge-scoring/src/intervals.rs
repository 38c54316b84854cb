//! Care-cadence intervals and overdue arithmetic.
//! See ARCHITECTURE.md §2.1

use serde::{Deserialize, Serialize};

/// Expected cadence of the two tracked care activities, plus the caps at
/// which their score contribution saturates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CareIntervals {
    /// Expected days between clinical appointments.
    pub appt_interval_days: u32,
    /// Days past the appointment interval at which the contribution saturates.
    pub appt_cap_days: u32,
    /// Expected days between medication refills.
    pub refill_interval_days: u32,
    /// Days past the refill interval at which the contribution saturates.
    pub refill_cap_days: u32,
}

impl Default for CareIntervals {
    /// Canonical cadence from ARCHITECTURE.md §2.1
    fn default() -> Self {
        Self {
            appt_interval_days: 90,
            appt_cap_days: 60,
            refill_interval_days: 30,
            refill_cap_days: 30,
        }
    }
}

/// Days elapsed beyond the expected interval, floored at zero.
pub fn overdue_days(days_since: u32, interval_days: u32) -> u32 {
    days_since.saturating_sub(interval_days)
}

/// Saturating 0–100 contribution: overdue days scaled against the cap.
/// A zero cap is a degenerate configuration and contributes nothing;
/// `RiskModel::validate` rejects it before scoring.
pub fn saturation_score(overdue: u32, cap_days: u32) -> f64 {
    if cap_days == 0 {
        return 0.0;
    }
    (overdue.min(cap_days) as f64 / cap_days as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_floors_at_zero() {
        assert_eq!(overdue_days(90, 90), 0);
        assert_eq!(overdue_days(10, 90), 0);
        assert_eq!(overdue_days(110, 90), 20);
    }

    #[test]
    fn test_saturation_scales_linearly() {
        assert!((saturation_score(0, 60) - 0.0).abs() < 1e-9);
        assert!((saturation_score(30, 60) - 50.0).abs() < 1e-9);
        assert!((saturation_score(60, 60) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_saturation_caps_at_hundred() {
        assert!((saturation_score(500, 60) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_cap_contributes_nothing() {
        assert_eq!(saturation_score(10, 0), 0.0);
    }
}
