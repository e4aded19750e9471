// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod linear;
pub mod model;

pub use linear::{CostLinear, LineFit};
pub use model::SegmentCost;
