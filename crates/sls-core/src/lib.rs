// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod error;
pub mod partition;
pub mod point;
pub mod prefix;
pub mod result;

pub use diagnostics::{DIAGNOSTICS_SCHEMA_VERSION, Diagnostics};
pub use error::SlsError;
pub use partition::{Segment, validate_partition};
pub use point::{Point, PointStore, RangeSums};
pub use prefix::prefix_sums_compensated;
pub use result::FitResult;
