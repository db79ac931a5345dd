//! Algorithm runners
//!
//! This module provides the execution engines:
//! - [`sorting`]: bubble, quick, merge, heap, counting sort
//! - [`searching`]: linear, binary, interpolation search
//! - [`graphs`]: BFS, DFS, Dijkstra, Prim, Kruskal
//! - [`trees`]: BST, AVL, traversals
//! - [`errors`]: runner error types
//!
//! # Execution Model
//!
//! A runner consumes a private copy of its input and computes the entire
//! trace in one synchronous, non-preemptible pass: `idle → running →
//! (step-recording)* → completed`. There is no pause or cancel mid-run, no
//! shared state between runs, and no randomness — the same input always
//! yields the identical trace. Playback over the sealed trace is a separate
//! layer ([`crate::playback`]).

pub mod errors;
pub mod graphs;
pub mod searching;
pub mod sorting;
pub mod trees;

use crate::graph::Graph;
use crate::input::{self, InputFormat};
use crate::trace::Trace;
use errors::RunnerError;

/// Names accepted by [`run`], for usage text.
pub const ALGORITHMS: &[&str] = &[
    "bubble",
    "quick",
    "merge",
    "merge-tree",
    "heap",
    "counting",
    "linear",
    "binary",
    "interpolation",
    "bfs",
    "dfs",
    "dijkstra",
    "prim",
    "kruskal",
    "bst",
    "avl",
    "preorder",
    "inorder",
    "postorder",
];

/// Parse the input text for the named algorithm and run it to completion.
///
/// `target` is required by the search algorithms and ignored by the rest.
pub fn run(
    algorithm: &str,
    text: &str,
    format: InputFormat,
    target: Option<&str>,
) -> Result<Trace, RunnerError> {
    match algorithm.to_ascii_lowercase().as_str() {
        "bubble" | "bubble-sort" => sorting::bubble_sort(&input::parse_elements(text, format)?),
        "quick" | "quicksort" | "quick-sort" => {
            sorting::quick_sort(&input::parse_elements(text, format)?)
        }
        "merge" | "merge-sort" => sorting::merge_sort(&input::parse_elements(text, format)?),
        "merge-tree" => sorting::merge_sort_tree(&input::parse_elements(text, format)?),
        "heap" | "heap-sort" => sorting::heap_sort(&input::parse_elements(text, format)?),
        "counting" | "counting-sort" => {
            sorting::counting_sort(&input::parse_numbers(text, format)?)
        }
        "linear" | "linear-search" => {
            let target = input::parse_target(target.ok_or(RunnerError::EmptyTarget)?)?;
            searching::linear_search(&input::parse_elements(text, format)?, &target)
        }
        "binary" | "binary-search" => {
            let target = input::parse_numeric_target(target.ok_or(RunnerError::EmptyTarget)?)?;
            searching::binary_search(&input::parse_numbers(text, format)?, target)
        }
        "interpolation" | "interpolation-search" => {
            let target = input::parse_numeric_target(target.ok_or(RunnerError::EmptyTarget)?)?;
            searching::interpolation_search(&input::parse_numbers(text, format)?, target)
        }
        "bfs" => graphs::bfs(&Graph::parse(text)),
        "dfs" => graphs::dfs(&Graph::parse(text)),
        "dijkstra" => graphs::dijkstra(&Graph::parse(text)),
        "prim" => graphs::prim(&Graph::parse(text)),
        "kruskal" => graphs::kruskal(&Graph::parse(text)),
        "bst" => trees::bst(&input::parse_tree_ops(text)?),
        "avl" => trees::avl(&input::parse_tree_ops(text)?),
        "preorder" => trees::traverse(
            &input::parse_numbers(text, format)?,
            trees::TraversalOrder::Preorder,
        ),
        "inorder" => trees::traverse(
            &input::parse_numbers(text, format)?,
            trees::TraversalOrder::Inorder,
        ),
        "postorder" => trees::traverse(
            &input::parse_numbers(text, format)?,
            trees::TraversalOrder::Postorder,
        ),
        other => Err(RunnerError::UnknownAlgorithm {
            name: other.to_string(),
        }),
    }
}

/// Join displayable items with `", "` for step labels.
pub(crate) fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
