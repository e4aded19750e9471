// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::model::SegmentCost;
use sls_core::{PointStore, RangeSums};

/// Ordinary-least-squares line cost: minimal sum of squared vertical
/// residuals of the best line through a range, computed in O(1) from the
/// store's prefix moments.
///
/// When every x in the range coincides the design matrix is singular and no
/// finite-slope line is defined; the cost falls back to the best constant
/// fit y = mean(y), the limiting OLS solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CostLinear;

/// Fitted line parameters for one segment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub sse: f64,
}

fn x_variance_tolerance(sum_x: f64, sum_xx: f64, m: f64) -> f64 {
    let cross = if m > 0.0 { (sum_x * sum_x) / m } else { 0.0 };
    let scale = sum_xx.abs().max(cross.abs()).max(1.0);
    32.0 * f64::EPSILON * scale
}

fn centered_moments(sums: &RangeSums) -> (f64, f64, f64, f64) {
    let m = sums.len as f64;
    let sxx = sums.sum_xx - (sums.sum_x * sums.sum_x) / m;
    let sxy = sums.sum_xy - (sums.sum_x * sums.sum_y) / m;
    let syy = sums.sum_yy - (sums.sum_y * sums.sum_y) / m;
    (m, sxx, sxy, syy)
}

impl CostLinear {
    /// Fits the best line over `[start, end)` and reports its residual sum
    /// of squares. The constant-fit fallback reports slope 0.
    pub fn fit(&self, store: &PointStore, start: usize, end: usize) -> LineFit {
        let sums = store.range_sums(start, end);
        if sums.len == 1 {
            return LineFit {
                slope: 0.0,
                intercept: sums.sum_y,
                sse: 0.0,
            };
        }

        let (m, sxx, sxy, syy) = centered_moments(&sums);
        if sxx <= x_variance_tolerance(sums.sum_x, sums.sum_xx, m) {
            return LineFit {
                slope: 0.0,
                intercept: sums.sum_y / m,
                sse: syy.max(0.0),
            };
        }

        let slope = sxy / sxx;
        let intercept = (sums.sum_y - slope * sums.sum_x) / m;
        let sse = (syy - (sxy * sxy) / sxx).max(0.0);
        LineFit {
            slope,
            intercept,
            sse,
        }
    }
}

impl SegmentCost for CostLinear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn cost(&self, store: &PointStore, start: usize, end: usize) -> f64 {
        let sums = store.range_sums(start, end);
        if sums.len == 1 {
            return 0.0;
        }

        let (m, sxx, sxy, syy) = centered_moments(&sums);
        if sxx <= x_variance_tolerance(sums.sum_x, sums.sum_xx, m) {
            return syy.max(0.0);
        }

        (syy - (sxy * sxy) / sxx).max(0.0)
    }
}
