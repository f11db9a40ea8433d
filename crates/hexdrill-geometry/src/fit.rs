//! Best-fit drill size search.
//!
//! Sweeps increment-aligned drill diameters from the feasible minimum
//! upwards until the over-drill area reaches the requested multiple of the
//! under-drill area. The sweep is deterministic: the same inputs always
//! select the same diameter.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::pattern::{HexPattern, HexPatternParams};

/// Configuration for a best-fit sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitSearch {
    /// Flat-to-flat width of the hexagon.
    pub hex_size: f64,
    /// Stop once `overdrill_area / underdrill_area` reaches this value.
    pub target_ratio: f64,
    /// Drill size step; candidate diameters are aligned to this increment.
    pub increment: f64,
}

/// Outcome of a best-fit sweep.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// The selected pattern.
    pub pattern: HexPattern,
    /// Over-drill area of the selected pattern.
    pub overdrill: f64,
    /// Under-drill area of the selected pattern.
    pub underdrill: f64,
    /// Achieved over/under ratio.
    pub ratio: f64,
    /// Number of candidate diameters evaluated.
    pub steps: usize,
}

impl FitSearch {
    /// Creates a sweep with the standard 1/64" increment and a target
    /// ratio of 1.0 (over-drill balancing under-drill).
    pub fn new(hex_size: f64) -> Self {
        Self {
            hex_size,
            target_ratio: 1.0,
            increment: HexPattern::DRILL_INCREMENT,
        }
    }

    /// Sets the target over/under-drill ratio.
    pub fn with_target_ratio(mut self, target_ratio: f64) -> Self {
        self.target_ratio = target_ratio;
        self
    }

    /// Sets the drill size increment.
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    /// Runs the sweep.
    ///
    /// Starts from a requested diameter of zero, which the pattern
    /// constructor silently clamps to the feasible minimum, and advances to
    /// the next increment-aligned diameter until the target ratio is met.
    /// If the candidate diameter stops advancing (the target ratio is
    /// unreachable below the feasible maximum), the sweep stops at the
    /// clamped maximum and reports the ratio achieved there.
    pub fn run(&self) -> FitResult {
        debug_assert!(
            self.increment > 0.0 && self.target_ratio > 0.0,
            "increment and target_ratio must be positive"
        );

        let mut drill = 0.0;
        let mut previous = f64::NAN;
        let mut steps = 0;
        loop {
            let pattern = HexPattern::new(HexPatternParams::new(self.hex_size, drill));
            let overdrill = pattern.overdrill_area();
            let underdrill = pattern.underdrill_area();
            let ratio = overdrill / underdrill;
            steps += 1;
            debug!(
                drill = pattern.drill_diameter(),
                overdrill, underdrill, ratio, "fit step"
            );

            // Clamping pins the diameter once the candidate passes the
            // feasible maximum; a repeated diameter means no further
            // progress is possible.
            let stalled = pattern.drill_diameter() == previous;
            if ratio >= self.target_ratio || stalled {
                if ratio < self.target_ratio {
                    warn!(
                        target = self.target_ratio,
                        achieved = ratio,
                        "target ratio unreachable below the maximum drill size"
                    );
                }
                return FitResult {
                    pattern,
                    overdrill,
                    underdrill,
                    ratio,
                    steps,
                };
            }
            previous = pattern.drill_diameter();
            drill = (previous + self.increment) - (previous + self.increment) % self.increment;
        }
    }
}
