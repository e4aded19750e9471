// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SlsError;
use crate::prefix::prefix_sums_compensated;

/// A planar sample point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Moments of a contiguous index range, each obtained as the difference of
/// two prefix entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSums {
    pub len: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_xy: f64,
    pub sum_yy: f64,
}

/// Immutable x-sorted point set with prefix accumulators for Σx, Σy, Σx²,
/// Σxy, and Σy², enabling O(1) range-moment queries.
///
/// Sorting is stable, so points sharing an x coordinate keep their input
/// order. The store is read-only after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
    prefix_x: Vec<f64>,
    prefix_y: Vec<f64>,
    prefix_xx: Vec<f64>,
    prefix_xy: Vec<f64>,
    prefix_yy: Vec<f64>,
}

impl PointStore {
    /// Builds the sorted store and its prefix arrays in O(n log n).
    pub fn from_points(mut points: Vec<Point>) -> Result<Self, SlsError> {
        if points.is_empty() {
            return Err(SlsError::invalid_input("PointStore requires n >= 1; got n=0"));
        }
        if let Some((idx, point)) = points
            .iter()
            .enumerate()
            .find(|(_, point)| !point.is_finite())
        {
            return Err(SlsError::invalid_input(format!(
                "point {idx} has a non-finite coordinate: ({}, {})",
                point.x, point.y
            )));
        }

        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let xxs: Vec<f64> = points.iter().map(|p| p.x * p.x).collect();
        let xys: Vec<f64> = points.iter().map(|p| p.x * p.y).collect();
        let yys: Vec<f64> = points.iter().map(|p| p.y * p.y).collect();

        Ok(Self {
            prefix_x: prefix_sums_compensated(&xs),
            prefix_y: prefix_sums_compensated(&ys),
            prefix_xx: prefix_sums_compensated(&xxs),
            prefix_xy: prefix_sums_compensated(&xys),
            prefix_yy: prefix_sums_compensated(&yys),
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in x-sorted order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Moments over the half-open index range `[start, end)`.
    pub fn range_sums(&self, start: usize, end: usize) -> RangeSums {
        assert!(
            start < end,
            "range_sums requires start < end; got start={start}, end={end}"
        );
        assert!(
            end <= self.points.len(),
            "range_sums end out of bounds: end={end}, n={}",
            self.points.len()
        );

        RangeSums {
            len: end - start,
            sum_x: self.prefix_x[end] - self.prefix_x[start],
            sum_y: self.prefix_y[end] - self.prefix_y[start],
            sum_xx: self.prefix_xx[end] - self.prefix_xx[start],
            sum_xy: self.prefix_xy[end] - self.prefix_xy[start],
            sum_yy: self.prefix_yy[end] - self.prefix_yy[start],
        }
    }
}
