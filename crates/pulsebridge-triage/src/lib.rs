//! pulsebridge-triage — Rule-based biopsy triage heuristic.
//! Implements the threshold screen from ARCHITECTURE.md §3.

pub mod classifier;
pub mod features;

pub use classifier::{classify, Diagnosis, TriageFlag, TriageResult};
pub use features::BiopsyFeatures;
