//! Search runners
//!
//! - linear search scans the array in order, one [`StepKind::Probe`] per
//!   index, and stops at the first match
//! - binary and interpolation search require sorted input; both sort a
//!   private copy ascending first (numeric only) and record one
//!   [`StepKind::Bound`] per probe with the `low`/`high`/`pos` bounds and the
//!   narrowing decision
//!
//! Every trace ends in a [`StepKind::Found`] or [`StepKind::NotFound`]
//! terminal step, and the outcome is the found index or
//! [`Outcome::NotFound`]. For the same array and target, all three searches
//! agree on presence.

use super::errors::RunnerError;
use crate::trace::{BoundDecision, Element, Outcome, Snapshot, Step, StepKind, Trace, TraceBuilder};

/// Scan indices 0..n in order until the target is found.
pub fn linear_search(input: &[Element], target: &Element) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let arr = input.to_vec();
    let mut trace = TraceBuilder::new();

    for (i, item) in arr.iter().enumerate() {
        trace
            .record(Step {
                kind: StepKind::Probe { index: i },
                snapshot: Snapshot::Array(arr.clone()),
                label: format!("Checking index {}: {}", i, item),
            })
            .map_err(RunnerError::from_trace_limit)?;

        if item == target {
            trace
                .record(Step {
                    kind: StepKind::Found { index: i },
                    snapshot: Snapshot::Array(arr.clone()),
                    label: format!("Target found at index {}", i),
                })
                .map_err(RunnerError::from_trace_limit)?;
            return Ok(trace.finalize(Outcome::Found(i)));
        }
    }

    trace
        .record(Step {
            kind: StepKind::NotFound,
            snapshot: Snapshot::Array(arr.clone()),
            label: "Target not found in the array".to_string(),
        })
        .map_err(RunnerError::from_trace_limit)?;
    Ok(trace.finalize(Outcome::NotFound))
}

/// Binary search. Sorts a private copy ascending before searching.
pub fn binary_search(input: &[i64], target: i64) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut nums = input.to_vec();
    nums.sort_unstable();
    let arr: Vec<Element> = nums.iter().map(|&n| Element::Int(n)).collect();
    let mut trace = TraceBuilder::new();

    let mut low = 0usize;
    let mut high = nums.len() - 1;
    loop {
        let mid = (low + high) / 2;
        let mut label = format!("Checking middle index {} (value: {})", mid, nums[mid]);

        if nums[mid] == target {
            label.push_str(&format!(" => Target found at index {}!", mid));
            record_bound(&mut trace, &arr, low, high, mid, BoundDecision::Match, label)?;
            return Ok(trace.finalize(Outcome::Found(mid)));
        }

        if nums[mid] < target {
            label.push_str(" => Discarding left half");
            record_bound(&mut trace, &arr, low, high, mid, BoundDecision::Right, label)?;
            low = mid + 1;
            if low > high {
                break;
            }
        } else {
            label.push_str(" => Discarding right half");
            record_bound(&mut trace, &arr, low, high, mid, BoundDecision::Left, label)?;
            if mid == 0 {
                break;
            }
            high = mid - 1;
            if low > high {
                break;
            }
        }
    }

    record_not_found(&mut trace, &arr)?;
    Ok(trace.finalize(Outcome::NotFound))
}

/// Interpolation search. Sorts a private copy ascending before searching.
///
/// The probe formula divides by `arr[high] - arr[low]`; when the bounds hold
/// equal values that is guarded by a direct equality check (the whole range
/// is uniform, so the target is at `low` or nowhere).
pub fn interpolation_search(input: &[i64], target: i64) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut nums = input.to_vec();
    nums.sort_unstable();
    let arr: Vec<Element> = nums.iter().map(|&n| Element::Int(n)).collect();
    let mut trace = TraceBuilder::new();

    let mut low = 0usize;
    let mut high = nums.len() - 1;

    while low <= high && nums[low] <= target && nums[high] >= target {
        if nums[low] == nums[high] {
            // Uniform range: the interpolation formula would divide by zero.
            if nums[low] == target {
                let label = format!("Range is uniform => Target found at index {}!", low);
                record_bound(&mut trace, &arr, low, high, low, BoundDecision::Match, label)?;
                return Ok(trace.finalize(Outcome::Found(low)));
            }
            break;
        }

        let span = (nums[high] - nums[low]) as i128;
        let offset = ((target - nums[low]) as i128 * (high - low) as i128) / span;
        let pos = low + offset as usize;

        if nums[pos] == target {
            let label = format!(
                "Probing position {} (value: {}) => Target found at index {}!",
                pos, nums[pos], pos
            );
            record_bound(&mut trace, &arr, low, high, pos, BoundDecision::Match, label)?;
            return Ok(trace.finalize(Outcome::Found(pos)));
        }

        if nums[pos] > target {
            let label = format!(
                "Probing position {} (value: {}) => Target is smaller, search left side",
                pos, nums[pos]
            );
            record_bound(&mut trace, &arr, low, high, pos, BoundDecision::Left, label)?;
            if pos == 0 {
                break;
            }
            high = pos - 1;
        } else {
            let label = format!(
                "Probing position {} (value: {}) => Target is larger, search right side",
                pos, nums[pos]
            );
            record_bound(&mut trace, &arr, low, high, pos, BoundDecision::Right, label)?;
            low = pos + 1;
        }
    }

    record_not_found(&mut trace, &arr)?;
    Ok(trace.finalize(Outcome::NotFound))
}

fn record_bound(
    trace: &mut TraceBuilder,
    arr: &[Element],
    low: usize,
    high: usize,
    pos: usize,
    decision: BoundDecision,
    label: String,
) -> Result<(), RunnerError> {
    trace
        .record(Step {
            kind: StepKind::Bound {
                low,
                high,
                pos,
                decision,
            },
            snapshot: Snapshot::Array(arr.to_vec()),
            label,
        })
        .map_err(RunnerError::from_trace_limit)
}

fn record_not_found(trace: &mut TraceBuilder, arr: &[Element]) -> Result<(), RunnerError> {
    trace
        .record(Step {
            kind: StepKind::NotFound,
            snapshot: Snapshot::Array(arr.to_vec()),
            label: "Target not found in the array".to_string(),
        })
        .map_err(RunnerError::from_trace_limit)
}
