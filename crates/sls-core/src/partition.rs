// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SlsError;

/// A contiguous run of x-sorted points, half-open over store indices.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Checks that `segments` is an ordered, gap-free, overlap-free cover of
/// `[0, n)`.
pub fn validate_partition(n: usize, segments: &[Segment]) -> Result<(), SlsError> {
    if n == 0 {
        return Err(SlsError::invalid_input(
            "partition validation requires n >= 1; got n=0",
        ));
    }
    if segments.is_empty() {
        return Err(SlsError::invalid_input(
            "partition must contain at least one segment",
        ));
    }

    let mut cursor = 0usize;
    for (idx, segment) in segments.iter().enumerate() {
        if segment.start != cursor {
            return Err(SlsError::invalid_input(format!(
                "segment {idx} starts at {} but expected {cursor}; partition must be contiguous",
                segment.start
            )));
        }
        if segment.is_empty() {
            return Err(SlsError::invalid_input(format!(
                "segment {idx} is empty: [{}, {})",
                segment.start, segment.end
            )));
        }
        cursor = segment.end;
    }

    if cursor != n {
        return Err(SlsError::invalid_input(format!(
            "partition ends at {cursor} but must cover all n={n} points"
        )));
    }

    Ok(())
}
