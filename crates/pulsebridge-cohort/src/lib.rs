//! pulsebridge-cohort — Demo patient roster and the scored high-risk queue.
//! See ARCHITECTURE.md §4.

pub mod queue;
pub mod roster;

pub use queue::{score_roster, ScoredPatient};
pub use roster::demo_roster;
