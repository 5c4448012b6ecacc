//! Eligibility Engine
//!
//! Evaluates beneficiary records against a fixed, ordered set of threshold
//! rules and emits scheme recommendations. Entirely independent of the
//! extraction pipeline: pure, synchronous and free of shared state, so it
//! is safe to call concurrently from any handler.

mod engine;
mod rules;
mod types;

pub use engine::EligibilityEngine;
pub use types::BeneficiaryRecord;
