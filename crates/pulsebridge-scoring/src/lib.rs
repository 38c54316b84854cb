//! pulsebridge-scoring — Patient adherence risk engine.
//! Implements the scoring model from ARCHITECTURE.md §2.

pub mod intervals;
pub mod model;
pub mod scorer;
pub mod tier;
pub mod weights;

pub use intervals::CareIntervals;
pub use model::RiskModel;
pub use scorer::{compute_risk, RiskBreakdown};
pub use tier::RiskTier;
pub use weights::RiskWeights;
