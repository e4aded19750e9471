// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::diagnostics::Diagnostics;
use crate::partition::{Segment, validate_partition};
use crate::SlsError;

/// Output of a segmentation run: the optimal partition, its total objective
/// (fitting error plus per-segment penalties), and run diagnostics.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FitResult {
    pub n: usize,
    pub segments: Vec<Segment>,
    pub objective: f64,
    pub diagnostics: Diagnostics,
}

impl FitResult {
    /// Validates the partition contract before exposing the result.
    pub fn new(
        n: usize,
        segments: Vec<Segment>,
        objective: f64,
        diagnostics: Diagnostics,
    ) -> Result<Self, SlsError> {
        validate_partition(n, &segments)?;
        if !objective.is_finite() {
            return Err(SlsError::numerical_issue(format!(
                "result objective must be finite; got {objective}"
            )));
        }
        Ok(Self {
            n,
            segments,
            objective,
            diagnostics,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
