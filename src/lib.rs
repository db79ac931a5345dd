//! # Introduction
//!
//! Algoscope runs a classic algorithm over a user-supplied input, recording a
//! full snapshot of the working data structure at every observable event. The
//! recorded trace is then navigated forward and backward through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input file → Parser → Runner → Trace → Playback → TUI
//! ```
//!
//! 1. [`input`] — parses plain, JSON, and CSV input files into typed arrays,
//!    targets, and tree operation lists.
//! 2. [`graph`] — the adjacency-list text format used by the graph runners.
//! 3. [`runner`] — executes the chosen algorithm to completion, recording one
//!    [`trace::Step`] per event (comparison, swap, probe, visit, rotation, ...).
//! 4. [`trace`] — the immutable step sequence: each step carries a deep
//!    [`trace::Snapshot`] of the data structure plus a human-readable label.
//! 5. [`playback`] — a cursor over the sealed trace; stepping never re-enters
//!    the algorithm.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, quick, merge (animated and structural tree), heap,
//! counting. Searching: linear, binary, interpolation. Graphs: BFS, DFS,
//! Dijkstra, Prim, Kruskal. Trees: BST and AVL insert/delete, preorder,
//! inorder, and postorder traversals.

pub mod graph;
pub mod input;
pub mod playback;
pub mod runner;
pub mod trace;
pub mod ui;
