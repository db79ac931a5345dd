//! Sorting runners
//!
//! Each runner copies its input, sorts the copy to completion, and records a
//! step per observable event:
//!
//! - bubble sort: one [`StepKind::Compare`] per adjacent comparison, flagged
//!   with whether it swapped (no early exit on a swap-free pass)
//! - quicksort: Lomuto partition (pivot = last element of the active range),
//!   one [`StepKind::PivotPlaced`] per completed partition, left recursion
//!   before right
//! - merge sort: a [`StepKind::Divide`] per split and a [`StepKind::Merge`]
//!   per combine, over a working array so snapshots show progressive sorting;
//!   plus a structural variant that returns the full merge tree
//! - heap sort: one [`StepKind::HeapSwap`] per swap inside heapify and per
//!   root extraction
//! - counting sort: non-negative integers only, one [`StepKind::Place`] per
//!   placement of the stable backward fill

use super::errors::RunnerError;
use super::join;
use crate::trace::{
    Element, HeapPhase, MergeNode, Outcome, Snapshot, Step, StepKind, Trace, TraceBuilder,
};

/// Classic adjacent-pair bubble sort.
pub fn bubble_sort(input: &[Element]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut arr = input.to_vec();
    let mut trace = TraceBuilder::new();
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            let swapped = arr[j] > arr[j + 1];
            let mut label = format!("Comparing {} and {}", arr[j], arr[j + 1]);
            if swapped {
                arr.swap(j, j + 1);
                label.push_str(" => Swapped");
            }
            trace
                .record(Step {
                    kind: StepKind::Compare {
                        i: j,
                        j: j + 1,
                        swapped,
                    },
                    snapshot: Snapshot::Array(arr.clone()),
                    label,
                })
                .map_err(RunnerError::from_trace_limit)?;
        }
    }

    Ok(trace.finalize(Outcome::Sorted(arr)))
}

/// Quicksort with the Lomuto partition scheme.
pub fn quick_sort(input: &[Element]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut arr = input.to_vec();
    let mut trace = TraceBuilder::new();
    quick_recurse(&mut arr, 0, input.len() - 1, &mut trace)?;
    Ok(trace.finalize(Outcome::Sorted(arr)))
}

fn quick_recurse(
    arr: &mut [Element],
    low: usize,
    high: usize,
    trace: &mut TraceBuilder,
) -> Result<(), RunnerError> {
    if low >= high {
        return Ok(());
    }
    let pi = partition(arr, low, high);
    let pivot = arr[pi].clone();
    let left = arr[low..pi].to_vec();
    let right = arr[pi + 1..=high].to_vec();

    trace
        .record(Step {
            kind: StepKind::PivotPlaced {
                pivot: pivot.clone(),
                index: pi,
                low,
                high,
                left,
                right,
            },
            snapshot: Snapshot::Array(arr.to_vec()),
            label: format!("Pivot {} placed at index {}", pivot, pi),
        })
        .map_err(RunnerError::from_trace_limit)?;

    if pi > 0 {
        quick_recurse(arr, low, pi - 1, trace)?;
    }
    quick_recurse(arr, pi + 1, high, trace)
}

/// Lomuto partition: pivot is the last element of the range; returns its
/// final index.
fn partition(arr: &mut [Element], low: usize, high: usize) -> usize {
    let pivot = arr[high].clone();
    let mut i = low;
    for j in low..high {
        if arr[j] <= pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    i
}

/// Merge sort over a working array, recording divide and merge steps.
pub fn merge_sort(input: &[Element]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut arr = input.to_vec();
    let mut trace = TraceBuilder::new();
    merge_recurse(&mut arr, 0, input.len(), &mut trace)?;
    Ok(trace.finalize(Outcome::Sorted(arr)))
}

fn merge_recurse(
    arr: &mut Vec<Element>,
    lo: usize,
    hi: usize,
    trace: &mut TraceBuilder,
) -> Result<(), RunnerError> {
    if hi - lo <= 1 {
        return Ok(());
    }
    let mid = lo + (hi - lo) / 2;
    let left = arr[lo..mid].to_vec();
    let right = arr[mid..hi].to_vec();

    trace
        .record(Step {
            label: format!("Dividing [{}] into [{}] and [{}]", join(&arr[lo..hi]), join(&left), join(&right)),
            kind: StepKind::Divide {
                left,
                right,
            },
            snapshot: Snapshot::Array(arr.clone()),
        })
        .map_err(RunnerError::from_trace_limit)?;

    merge_recurse(arr, lo, mid, trace)?;
    merge_recurse(arr, mid, hi, trace)?;

    let left_sorted = arr[lo..mid].to_vec();
    let right_sorted = arr[mid..hi].to_vec();
    let merged = merge_two(&left_sorted, &right_sorted);
    arr[lo..hi].clone_from_slice(&merged);

    trace
        .record(Step {
            label: format!(
                "Merging [{}] and [{}] => [{}]",
                join(&left_sorted),
                join(&right_sorted),
                join(&merged)
            ),
            kind: StepKind::Merge {
                left: left_sorted,
                right: right_sorted,
                merged,
            },
            snapshot: Snapshot::Array(arr.clone()),
        })
        .map_err(RunnerError::from_trace_limit)?;

    Ok(())
}

/// Stable two-way merge: equal keys take the left element first, preserving
/// input order.
fn merge_two(left: &[Element], right: &[Element]) -> Vec<Element> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Structural merge-sort variant: no animation steps, just the full binary
/// merge tree (each node holds the sub-array it received, the merged result,
/// and its child calls) for static rendering.
pub fn merge_sort_tree(input: &[Element]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let root = build_merge_tree(input);
    let trace = TraceBuilder::new();
    Ok(trace.finalize(Outcome::MergeTree(root)))
}

/// Recursively build the merge tree for a sub-array.
pub fn build_merge_tree(arr: &[Element]) -> MergeNode {
    if arr.len() <= 1 {
        return MergeNode {
            original: arr.to_vec(),
            merged: arr.to_vec(),
            left: None,
            right: None,
        };
    }
    let mid = arr.len() / 2;
    let left = build_merge_tree(&arr[..mid]);
    let right = build_merge_tree(&arr[mid..]);
    let merged = merge_two(&left.merged, &right.merged);
    MergeNode {
        original: arr.to_vec(),
        merged,
        left: Some(Box::new(left)),
        right: Some(Box::new(right)),
    }
}

/// Heap sort: build a max-heap, then repeatedly extract the root.
pub fn heap_sort(input: &[Element]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut arr = input.to_vec();
    let mut trace = TraceBuilder::new();
    let n = arr.len();

    // Build phase: heapify every internal node bottom-up.
    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i, HeapPhase::Build, &mut trace)?;
    }

    // Extraction phase: swap the root to the end of the active range and
    // re-heapify. The degenerate i == 0 self-swap is skipped.
    for i in (1..n).rev() {
        arr.swap(0, i);
        trace
            .record(Step {
                label: format!("Moved {} to index {}", arr[i], i),
                kind: StepKind::HeapSwap {
                    i: 0,
                    j: i,
                    phase: HeapPhase::Extract,
                },
                snapshot: Snapshot::Array(arr.clone()),
            })
            .map_err(RunnerError::from_trace_limit)?;
        heapify(&mut arr, i, 0, HeapPhase::Extract, &mut trace)?;
    }

    Ok(trace.finalize(Outcome::Sorted(arr)))
}

/// Sift the value at `i` down within `arr[..n]`, recording each swap.
/// Child-vs-largest comparison is strict `>`.
fn heapify(
    arr: &mut Vec<Element>,
    n: usize,
    i: usize,
    phase: HeapPhase,
    trace: &mut TraceBuilder,
) -> Result<(), RunnerError> {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && arr[left] > arr[largest] {
        largest = left;
    }
    if right < n && arr[right] > arr[largest] {
        largest = right;
    }

    if largest != i {
        let label = format!("Swapped {} and {}", arr[i], arr[largest]);
        arr.swap(i, largest);
        trace
            .record(Step {
                label,
                kind: StepKind::HeapSwap {
                    i,
                    j: largest,
                    phase,
                },
                snapshot: Snapshot::Array(arr.clone()),
            })
            .map_err(RunnerError::from_trace_limit)?;
        heapify(arr, n, largest, phase, trace)?;
    }
    Ok(())
}

/// Counting sort over non-negative integers, stable backward fill.
pub fn counting_sort(input: &[i64]) -> Result<Trace, RunnerError> {
    if input.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    if let Some(&value) = input.iter().find(|&&v| v < 0) {
        return Err(RunnerError::NegativeValue { value });
    }

    let max = input.iter().copied().max().unwrap_or(0) as usize;
    let mut count = vec![0usize; max + 1];
    for &v in input {
        count[v as usize] += 1;
    }
    for i in 1..=max {
        count[i] += count[i - 1];
    }

    let mut trace = TraceBuilder::new();
    let mut output: Vec<Option<Element>> = vec![None; input.len()];

    // Walking the input backwards keeps equal keys in input order.
    for &v in input.iter().rev() {
        count[v as usize] -= 1;
        let index = count[v as usize];
        output[index] = Some(Element::Int(v));
        trace
            .record(Step {
                kind: StepKind::Place { index, value: v },
                snapshot: Snapshot::Slots(output.clone()),
                label: format!("Placed {} at index {}", v, index),
            })
            .map_err(RunnerError::from_trace_limit)?;
    }

    let sorted: Vec<Element> = output.into_iter().flatten().collect();
    Ok(trace.finalize(Outcome::Sorted(sorted)))
}
