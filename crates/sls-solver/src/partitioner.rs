// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use sls_core::{Diagnostics, FitResult, PointStore, Segment, SlsError};
use sls_costs::SegmentCost;
use std::borrow::Cow;
use std::time::Instant;

/// Configuration for [`OptimalPartitioner`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionerConfig {
    /// Fixed cost charged per segment, discouraging over-segmentation.
    pub penalty: f64,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self { penalty: 1.0 }
    }
}

impl PartitionerConfig {
    fn validate(&self) -> Result<(), SlsError> {
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(SlsError::invalid_input(format!(
                "PartitionerConfig.penalty must be finite and >= 0; got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}

/// Exact dynamic-programming partitioner.
///
/// Finds the partition of the x-sorted points into contiguous segments that
/// minimizes total segment cost plus `penalty` per segment. O(n²) time with
/// O(1) cost evaluation per candidate, O(n) additional space: segment costs
/// are recomputed from prefix moments on demand rather than memoized.
#[derive(Debug)]
pub struct OptimalPartitioner<C: SegmentCost> {
    cost_model: C,
    config: PartitionerConfig,
}

#[derive(Default, Clone, Copy, Debug)]
struct RuntimeStats {
    cost_evals: usize,
}

#[derive(Clone, Debug)]
struct DpTables {
    best: Vec<f64>,
    choice: Vec<usize>,
}

fn checked_counter_increment(counter: &mut usize, name: &str) -> Result<(), SlsError> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| SlsError::resource_limit(format!("{name} counter overflow")))?;
    Ok(())
}

fn run_dp_sweep<C: SegmentCost>(
    model: &C,
    store: &PointStore,
    penalty: f64,
    runtime: &mut RuntimeStats,
) -> Result<DpTables, SlsError> {
    let n = store.len();
    let inf = f64::INFINITY;

    // best[k] is the minimum objective over the first k points; choice[k]
    // is the start of the last segment in that optimum.
    let mut best = vec![inf; n + 1];
    let mut choice = vec![usize::MAX; n + 1];
    best[0] = 0.0;

    for end in 1..=n {
        let mut best_objective = inf;
        let mut best_start = usize::MAX;

        for start in 0..end {
            checked_counter_increment(&mut runtime.cost_evals, "cost_evals")?;
            let segment_cost = model.cost(store, start, end);
            if !segment_cost.is_finite() {
                return Err(SlsError::numerical_issue(format!(
                    "non-finite segment cost at [{start}, {end}): {segment_cost}"
                )));
            }

            let objective = best[start] + segment_cost + penalty;
            if !objective.is_finite() {
                return Err(SlsError::numerical_issue(format!(
                    "non-finite objective at end={end}, start={start}: best[start]={}, segment_cost={segment_cost}, penalty={penalty}",
                    best[start]
                )));
            }

            // Equal objectives resolve to the smallest start, so the last
            // segment of every prefix optimum is as long as possible and
            // repeated runs reproduce identical output.
            let is_better = objective < best_objective
                || (objective == best_objective && start < best_start);
            if is_better {
                best_objective = objective;
                best_start = start;
            }
        }

        best[end] = best_objective;
        choice[end] = best_start;
    }

    Ok(DpTables { best, choice })
}

fn reconstruct_segments(n: usize, choice: &[usize]) -> Result<Vec<Segment>, SlsError> {
    let mut reversed = Vec::new();
    let mut cursor = n;
    let mut hops = 0usize;

    while cursor > 0 {
        hops = hops
            .checked_add(1)
            .ok_or_else(|| SlsError::resource_limit("backtrack hop overflow"))?;
        if hops > n {
            return Err(SlsError::invalid_input(
                "invalid DP backtrack state: cycle detected",
            ));
        }

        let start = choice[cursor];
        if start == usize::MAX {
            return Err(SlsError::invalid_input(format!(
                "invalid DP backtrack state: missing predecessor at end={cursor}"
            )));
        }
        if start >= cursor {
            return Err(SlsError::invalid_input(format!(
                "invalid DP backtrack state: predecessor start={start} is not < end={cursor}"
            )));
        }

        reversed.push(Segment::new(start, cursor));
        cursor = start;
    }

    reversed.reverse();
    Ok(reversed)
}

impl<C: SegmentCost> OptimalPartitioner<C> {
    pub fn new(cost_model: C, config: PartitionerConfig) -> Result<Self, SlsError> {
        config.validate()?;
        Ok(Self { cost_model, config })
    }

    pub fn cost_model(&self) -> &C {
        &self.cost_model
    }

    pub fn config(&self) -> &PartitionerConfig {
        &self.config
    }

    /// Solves for the globally optimal partition of `store`.
    pub fn solve(&self, store: &PointStore) -> Result<FitResult, SlsError> {
        self.config.validate()?;

        let n = store.len();
        if n == 0 {
            return Err(SlsError::invalid_input(
                "solve requires a non-empty point store",
            ));
        }

        let started_at = Instant::now();
        let mut runtime = RuntimeStats::default();

        let tables = run_dp_sweep(&self.cost_model, store, self.config.penalty, &mut runtime)?;
        let segments = reconstruct_segments(n, &tables.choice)?;
        let objective = tables.best[n];

        let runtime_ms = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        let diagnostics = Diagnostics {
            n,
            runtime_ms: Some(runtime_ms),
            notes: vec![
                format!("penalty={}", self.config.penalty),
                format!("final_objective={objective}, segment_count={}", segments.len()),
                format!("cost_evals={}", runtime.cost_evals),
            ],
            algorithm: Cow::Borrowed("optimal-dp"),
            cost_model: Cow::Borrowed(self.cost_model.name()),
            ..Diagnostics::default()
        };

        FitResult::new(n, segments, objective, diagnostics)
    }
}
