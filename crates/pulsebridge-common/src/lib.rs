//! pulsebridge-common — Shared types and errors used across all PulseBridge crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{AdherenceSignals, Condition, PatientRecord};
pub use error::{PulseBridgeError, Result};
