// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sls_core::PointStore;

/// Segment cost contract: the minimal fitting error of one model instance
/// over a contiguous range of x-sorted points.
///
/// Implementations are pure functions of the range: they hold no mutable
/// state and may be queried in any order.
pub trait SegmentCost {
    /// Stable identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Cost of fitting the half-open range `[start, end)`. Must be finite
    /// and non-negative for any store built from finite coordinates.
    fn cost(&self, store: &PointStore, start: usize, end: usize) -> f64;
}
