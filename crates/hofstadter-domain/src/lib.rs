//! Hofstadter Domain Layer
//!
//! This crate contains the core estimation logic for Hofstadter, a
//! contextual delay estimator for research tasks. It has ZERO external
//! dependencies and defines the value types and the closed-form formula
//! that every other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **EstimateInput**: the five scalar factors describing a task and its
//!   environment
//! - **EstimateResult**: lower / mode / upper completion times, in weeks
//! - **Sigma**: combined standard deviation of the estimated delay, built
//!   from three independent variance contributions
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure functions only - deterministic, no I/O, no hidden state
//! - Request parsing and response formatting live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod estimate;
pub mod estimate_computation;

// Re-exports for convenience
pub use estimate::{EstimateInput, EstimateResult};
pub use estimate_computation::compute_delay_estimate;
