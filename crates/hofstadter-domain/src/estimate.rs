//! Value types for three-point delay estimates

/// Input factors for a delay estimate
///
/// All fields are plain floats. The intended domains (fractions in [0, 1],
/// non-negative counts) are deliberately not enforced here; validation,
/// where wanted, belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    /// Best-case completion time, in weeks
    pub best_case_weeks: f64,

    /// Fraction of the task that is R&D (intended domain [0, 1])
    pub fraction_rd: f64,

    /// HPC reliability factor (0 = no HPC dependency, 1 = average)
    pub hpc_factor: f64,

    /// Number of coauthors who must give feedback, excluding the PI
    pub num_coauthors: f64,

    /// Ambient stress factor (1 = typical, <1 = low, >1 = high)
    pub stress_level: f64,
}

impl EstimateInput {
    /// Create a new estimate input
    pub fn new(
        best_case_weeks: f64,
        fraction_rd: f64,
        hpc_factor: f64,
        num_coauthors: f64,
        stress_level: f64,
    ) -> Self {
        Self {
            best_case_weeks,
            fraction_rd,
            hpc_factor,
            num_coauthors,
            stress_level,
        }
    }
}

/// Three-point completion estimate, in weeks
///
/// Each bound is rounded to one decimal place. `lower <= mode <= upper`
/// holds whenever sigma is non-negative, which is always the case since
/// sigma is the square root of a sum of squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateResult {
    /// Best case: the raw input time
    pub lower: f64,

    /// Most likely completion time (best case plus one sigma)
    pub mode: f64,

    /// Pessimistic bound (best case plus two sigma)
    pub upper: f64,
}

impl EstimateResult {
    /// Width of the full estimate range (uncertainty measure)
    pub fn spread(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check whether a duration falls inside the estimated range
    pub fn contains(&self, weeks: f64) -> bool {
        weeks >= self.lower && weeks <= self.upper
    }
}
