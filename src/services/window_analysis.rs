//! Window feasibility analysis.
//!
//! The algorithmic core of the scheduler: given an hourly series and a task
//! constraint, compute a per-hour go/no-go signal and every offset at which
//! a run of `duration_hours` consecutive admissible hours begins.

use crate::models::{HourlyPoint, TaskConstraint};

/// Result of a window feasibility analysis.
///
/// `admissible` is index-aligned with the input series. `start_offsets`
/// holds every index `i` such that `admissible[i..i + duration_hours]` is
/// all true, in ascending order, each at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub admissible: Vec<bool>,
    pub start_offsets: Vec<usize>,
}

/// Analyze an hourly series against a task constraint.
///
/// Admissibility is a direct `wave_height <= height_limit` comparison with
/// no tolerance, so boundary-equal values count as admissible. The start
/// offsets are found with a single sliding pass tracking the current run of
/// consecutive admissible hours; a window of length `d` ends at index `i`
/// exactly when that run reaches `d`, giving start offset `i + 1 - d`.
///
/// Degenerate cases: an empty series yields two empty vectors, and a
/// duration longer than the series yields no start offsets. A zero duration
/// cannot occur; [`TaskConstraint`] rejects it at construction.
///
/// Pure and deterministic: no input mutation, output depends only on the
/// arguments, and the cost is O(n).
pub fn analyze(series: &[HourlyPoint], constraint: &TaskConstraint) -> AnalysisResult {
    let d = constraint.duration_hours as usize;
    let admissible: Vec<bool> = series
        .iter()
        .map(|point| point.wave_height <= constraint.height_limit)
        .collect();

    let mut start_offsets = Vec::new();
    let mut run = 0usize;
    for (i, ok) in admissible.iter().enumerate() {
        run = if *ok { run + 1 } else { 0 };
        if run >= d {
            start_offsets.push(i + 1 - d);
        }
    }

    AnalysisResult {
        admissible,
        start_offsets,
    }
}

#[cfg(test)]
#[path = "window_analysis_tests.rs"]
mod window_analysis_tests;
