//! Delay estimate computation
//!
//! Implements the deterministic closed-form formula for turning task and
//! environment factors into a three-point (lower / mode / upper) completion
//! estimate. The variance coefficients are part of the calibrated model and
//! are deliberately not tunable.

use crate::{EstimateInput, EstimateResult};

/// Compute a three-point completion estimate
///
/// Combines three independent variance contributions into a single standard
/// deviation `sigma`:
///
/// 1. R&D share of the task
/// 2. Collaboration overhead (HPC dependence plus coauthor feedback)
/// 3. Ambient stress
///
/// and reports, each rounded to one decimal place:
///
/// - `lower` = best case
/// - `mode`  = best case + sigma
/// - `upper` = best case + 2 * sigma
///
/// The computation is total: deterministic, no side effects, and no panics
/// for any input. Non-finite inputs (NaN/infinity) propagate through the
/// result per IEEE-754 semantics. Domain constraints on the factors are not
/// validated here.
pub fn compute_delay_estimate(input: &EstimateInput) -> EstimateResult {
    let n = input.best_case_weeks;

    let sigma_squared = research_variance(n, input.fraction_rd)
        + collaboration_variance(n, input.hpc_factor, input.num_coauthors)
        + stress_variance(n, input.stress_level);
    let sigma = sigma_squared.sqrt();

    EstimateResult {
        lower: round_to_tenth(n),
        mode: round_to_tenth(n + sigma),
        upper: round_to_tenth(n + 2.0 * sigma),
    }
}

/// Variance contribution from the R&D share of the task
///
/// sigma1^2 = (n/4)^2 * ((2 * n * fdev)^2 + (1 - fdev)^2)
fn research_variance(n: f64, fraction_rd: f64) -> f64 {
    (n / 4.0).powi(2) * ((2.0 * n * fraction_rd).powi(2) + (1.0 - fraction_rd).powi(2))
}

/// Variance contribution from HPC dependence and coauthor feedback
///
/// sigma2^2 = (n/4)^2 * (4 * a^2 + b^2 + 2)
fn collaboration_variance(n: f64, hpc_factor: f64, num_coauthors: f64) -> f64 {
    (n / 4.0).powi(2) * (4.0 * hpc_factor.powi(2) + num_coauthors.powi(2) + 2.0)
}

/// Variance contribution from ambient stress
///
/// sigma3^2 = (c * n / 8)^2
fn stress_variance(n: f64, stress_level: f64) -> f64 {
    (stress_level * n / 8.0).powi(2)
}

/// Round to one decimal place; ties round away from zero (`f64::round`)
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_estimate() {
        // All uncertainty factors zero: sigma^2 = (n/4)^2 * 1 + (n/4)^2 * 2.
        // For n = 4 that is sigma = sqrt(3) ~= 1.732.
        let input = EstimateInput::new(4.0, 0.0, 0.0, 0.0, 0.0);
        let result = compute_delay_estimate(&input);

        assert_eq!(result.lower, 4.0);
        assert_eq!(result.mode, 5.7);
        assert_eq!(result.upper, 7.5);
    }

    #[test]
    fn test_research_heavy_estimate() {
        // Worked example: 2 weeks best case, 80% R&D, average HPC, one
        // coauthor, typical stress. sigma^2 = 2.57 + 1.75 + 0.0625 = 4.3825,
        // sigma ~= 2.093.
        let input = EstimateInput::new(2.0, 0.8, 1.0, 1.0, 1.0);
        let result = compute_delay_estimate(&input);

        assert_eq!(result.lower, 2.0);
        assert_eq!(result.mode, 4.1);
        assert_eq!(result.upper, 6.2);
    }

    #[test]
    fn test_zero_best_case_collapses_estimate() {
        // Every variance term scales with n, so sigma is zero
        let input = EstimateInput::new(0.0, 0.5, 1.0, 2.0, 1.0);
        let result = compute_delay_estimate(&input);

        assert_eq!(result.lower, 0.0);
        assert_eq!(result.mode, 0.0);
        assert_eq!(result.upper, 0.0);
    }

    #[test]
    fn test_lower_bound_ignores_uncertainty_factors() {
        let calm = EstimateInput::new(3.0, 0.0, 0.0, 0.0, 0.5);
        let frantic = EstimateInput::new(3.0, 1.0, 5.0, 10.0, 3.0);

        assert_eq!(compute_delay_estimate(&calm).lower, 3.0);
        assert_eq!(compute_delay_estimate(&frantic).lower, 3.0);
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let input = EstimateInput::new(f64::NAN, 0.5, 1.0, 1.0, 1.0);
        let result = compute_delay_estimate(&input);

        assert!(result.lower.is_nan());
        assert!(result.mode.is_nan());
        assert!(result.upper.is_nan());
    }

    #[test]
    fn test_research_variance_no_rd() {
        // fdev = 0 leaves only the (1 - fdev)^2 term
        assert_eq!(research_variance(4.0, 0.0), 1.0);
    }

    #[test]
    fn test_research_variance_full_rd() {
        // fdev = 1 leaves only the (2n)^2 term: (n/4)^2 * 4n^2
        assert_eq!(research_variance(2.0, 1.0), 4.0);
    }

    #[test]
    fn test_collaboration_variance_baseline() {
        // a = b = 0 keeps the constant environmental term: (n/4)^2 * 2
        assert_eq!(collaboration_variance(4.0, 0.0, 0.0), 2.0);
        assert_eq!(collaboration_variance(2.0, 1.0, 1.0), 1.75);
    }

    #[test]
    fn test_stress_variance() {
        assert_eq!(stress_variance(4.0, 0.0), 0.0);
        assert_eq!(stress_variance(2.0, 1.0), 0.0625);
        assert_eq!(stress_variance(8.0, 1.0), 1.0);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(4.04), 4.0);
        assert_eq!(round_to_tenth(4.06), 4.1);
        assert_eq!(round_to_tenth(5.0), 5.0);
        // Ties round away from zero
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }
}
