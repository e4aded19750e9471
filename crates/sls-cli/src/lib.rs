// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sls_core::{FitResult, Point, PointStore, SlsError};
use sls_costs::CostLinear;
use sls_solver::{OptimalPartitioner, PartitionerConfig};
use std::fmt::Write as _;

/// One whitespace-tokenized problem instance: the points to segment and the
/// per-segment penalty.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub points: Vec<Point>,
    pub penalty: f64,
}

/// Parses the text problem format: a point count `n`, then `n` `x y` pairs,
/// then the penalty `C`, all whitespace-separated. The token stream must
/// contain exactly `2n + 2` tokens.
pub fn parse_problem(input: &str) -> Result<Problem, SlsError> {
    let mut tokens = input.split_whitespace();

    let raw_n = tokens
        .next()
        .ok_or_else(|| SlsError::invalid_input("input is empty; expected a point count"))?;
    let n = raw_n.parse::<usize>().map_err(|_| {
        SlsError::invalid_input(format!(
            "point count must be a non-negative integer, got '{raw_n}'"
        ))
    })?;

    // Cap the reservation by what the input could possibly hold; the token
    // count check below rejects an oversized n before it matters.
    let mut points = Vec::with_capacity(n.min(input.len() / 2));
    for idx in 0..n {
        let x = parse_coordinate(tokens.next(), idx, "x")?;
        let y = parse_coordinate(tokens.next(), idx, "y")?;
        points.push(Point::new(x, y));
    }

    let raw_penalty = tokens.next().ok_or_else(|| {
        SlsError::invalid_input(format!("missing penalty after {n} point(s)"))
    })?;
    let penalty = raw_penalty.parse::<f64>().map_err(|_| {
        SlsError::invalid_input(format!("penalty must be a number, got '{raw_penalty}'"))
    })?;
    if !penalty.is_finite() || penalty < 0.0 {
        return Err(SlsError::invalid_input(format!(
            "penalty must be finite and >= 0; got {penalty}"
        )));
    }

    if let Some(extra) = tokens.next() {
        return Err(SlsError::invalid_input(format!(
            "unexpected trailing token '{extra}'; expected exactly {} tokens",
            2 * n + 2
        )));
    }

    Ok(Problem { points, penalty })
}

fn parse_coordinate(
    token: Option<&str>,
    idx: usize,
    axis: &str,
) -> Result<f64, SlsError> {
    let raw = token.ok_or_else(|| {
        SlsError::invalid_input(format!("missing {axis} coordinate for point {idx}"))
    })?;
    let value = raw.parse::<f64>().map_err(|_| {
        SlsError::invalid_input(format!(
            "point {idx} {axis} coordinate is not a valid number: '{raw}'"
        ))
    })?;
    if !value.is_finite() {
        return Err(SlsError::invalid_input(format!(
            "point {idx} {axis} coordinate must be finite; got {value}"
        )));
    }
    Ok(value)
}

/// Solves one parsed problem with the linear cost model.
pub fn solve_problem(problem: &Problem) -> Result<FitResult, SlsError> {
    let store = PointStore::from_points(problem.points.clone())?;
    let partitioner = OptimalPartitioner::new(
        CostLinear,
        PartitionerConfig {
            penalty: problem.penalty,
        },
    )?;
    partitioner.solve(&store)
}

/// Renders the plain text report: segment count, then one inclusive
/// `start end` index pair per segment in left-to-right order.
pub fn render_plain(result: &FitResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.segment_count());
    for segment in &result.segments {
        let _ = writeln!(out, "{} {}", segment.start, segment.end - 1);
    }
    out
}

/// Renders the full result as pretty JSON, diagnostics included.
pub fn render_json(result: &FitResult) -> Result<String, SlsError> {
    serde_json::to_string_pretty(result)
        .map_err(|err| SlsError::numerical_issue(format!("failed to encode result: {err}")))
}

/// Parses, solves, and renders in one step.
pub fn segment_text(input: &str, json: bool) -> Result<String, SlsError> {
    let problem = parse_problem(input)?;
    let result = solve_problem(&problem)?;
    if json {
        render_json(&result)
    } else {
        Ok(render_plain(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::{Problem, parse_problem, render_plain, segment_text, solve_problem};
    use sls_core::{Point, Segment};

    #[test]
    fn parse_accepts_a_well_formed_problem() {
        let problem =
            parse_problem("3\n0 1\n1 2\n2 3\n0.5").expect("well-formed input should parse");
        assert_eq!(
            problem,
            Problem {
                points: vec![
                    Point::new(0.0, 1.0),
                    Point::new(1.0, 2.0),
                    Point::new(2.0, 3.0),
                ],
                penalty: 0.5,
            }
        );
    }

    #[test]
    fn parse_is_agnostic_to_whitespace_shape() {
        let compact = parse_problem("2 0 0 1 1 3").expect("compact form should parse");
        let spread = parse_problem("  2\n\n0   0\n\t1 1\n   3  ").expect("spread form should parse");
        assert_eq!(compact, spread);
    }

    #[test]
    fn parse_rejects_empty_input() {
        let err = parse_problem("").expect_err("empty input must fail");
        assert!(err.to_string().contains("point count"));
    }

    #[test]
    fn parse_rejects_non_integer_count() {
        let err = parse_problem("two 0 0 1").expect_err("bad count must fail");
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn parse_rejects_truncated_points() {
        let err = parse_problem("2 0 0 1").expect_err("missing coordinate must fail");
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn parse_rejects_non_numeric_coordinate() {
        let err = parse_problem("1 0 oops 3").expect_err("bad coordinate must fail");
        assert!(err.to_string().contains("'oops'"));
        assert!(err.to_string().contains("point 0 y"));
    }

    #[test]
    fn parse_rejects_non_finite_coordinate() {
        let err = parse_problem("1 inf 0 3").expect_err("inf coordinate must fail");
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn parse_rejects_oversized_count_without_reserving_for_it() {
        // A count near usize::MAX must come back as a parse error, not abort
        // inside Vec::with_capacity.
        let err = parse_problem("4611686018427387904 0 0 1")
            .expect_err("oversized count must fail");
        assert!(err.to_string().contains("missing"));
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn parse_rejects_missing_penalty() {
        let err = parse_problem("1 0 0").expect_err("missing penalty must fail");
        assert!(err.to_string().contains("missing penalty"));
    }

    #[test]
    fn parse_rejects_negative_penalty() {
        let err = parse_problem("1 0 0 -2").expect_err("negative penalty must fail");
        assert!(err.to_string().contains(">= 0"));
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        let err = parse_problem("1 0 0 3 99").expect_err("trailing token must fail");
        assert!(err.to_string().contains("'99'"));
    }

    #[test]
    fn single_point_renders_one_trivial_range() {
        let out = segment_text("1 4.5 -2 10", false).expect("single point should solve");
        assert_eq!(out, "1\n0 0\n");
    }

    #[test]
    fn collinear_points_render_one_range() {
        let out = segment_text("4 0 0 1 1 2 2 3 3 1", false).expect("line should solve");
        assert_eq!(out, "1\n0 3\n");
    }

    #[test]
    fn corner_splits_into_two_ranges_under_cheap_penalty() {
        // y = x up to x = 5, then y = 10 - x.
        let input = "11 0 0 1 1 2 2 3 3 4 4 5 5 6 4 7 3 8 2 9 1 10 0 0.01";
        let out = segment_text(input, false).expect("corner should solve");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("2"));
    }

    #[test]
    fn ranges_are_reported_in_sorted_x_order() {
        // Points arrive x-unsorted; output indices refer to sorted order.
        let problem = parse_problem("4 3 3 0 0 2 2 1 1 0.5").expect("input should parse");
        let result = solve_problem(&problem).expect("line should solve");
        assert_eq!(result.segments, vec![Segment::new(0, 4)]);
        assert_eq!(render_plain(&result), "1\n0 3\n");
    }

    #[test]
    fn json_output_carries_segments_and_diagnostics() {
        let out = segment_text("2 0 0 1 1 3", true).expect("pair should solve");
        let value: serde_json::Value =
            serde_json::from_str(&out).expect("output should be valid JSON");
        assert_eq!(value["n"], 2);
        assert_eq!(value["segments"][0]["start"], 0);
        assert_eq!(value["segments"][0]["end"], 2);
        assert!(value["diagnostics"]["algorithm"].is_string());
    }

    #[test]
    fn repeated_runs_produce_identical_text() {
        let input = "6 0 0 1 2 2 1 3 4 4 3 5 5 2";
        let first = segment_text(input, false).expect("input should solve");
        let second = segment_text(input, false).expect("input should solve");
        assert_eq!(first, second);
    }
}
