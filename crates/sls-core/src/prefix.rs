// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Compensated prefix sums with a leading zero: output has length
/// `values.len() + 1`, entry `k` holds the sum of the first `k` values.
///
/// Uses Neumaier's variant of compensated summation, which also tracks the
/// error term when an incoming value dwarfs the running sum, so large
/// intermediate cancellations do not lose small contributions.
pub fn prefix_sums_compensated(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(0.0);
    let mut acc = 0.0;
    let mut compensation = 0.0;
    for &value in values {
        let next = acc + value;
        if acc.abs() >= value.abs() {
            compensation += (acc - next) + value;
        } else {
            compensation += (value - next) + acc;
        }
        acc = next;
        out.push(acc + compensation);
    }
    out
}
