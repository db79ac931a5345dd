//! Trace recording for algorithm playback
//!
//! Every runner executes its algorithm to completion while appending [`Step`]s
//! to a [`TraceBuilder`]. A step carries three things:
//!
//! - [`StepKind`]: the semantic event (compare, swap, pivot placement, visit,
//!   backtrack, edge acceptance, rotation, ...), including the kind-specific
//!   annotations the renderer needs
//! - [`Snapshot`]: a full deep copy of the primary data structure at that
//!   instant — never a live reference, so later mutation cannot corrupt
//!   earlier steps
//! - a human-readable label for the step log
//!
//! The builder is sealed into an immutable [`Trace`] together with the final
//! [`Outcome`]. Replaying the steps in order reproduces every intermediate
//! state of the run.

use std::fmt;

/// Graph node identifier.
pub type NodeId = String;

/// Default cap on recorded steps per run.
///
/// Runs are pedagogical (tens of elements); anything approaching this limit is
/// a pathological input and fails with a descriptive error instead of
/// exhausting memory.
pub const DEFAULT_STEP_LIMIT: usize = 100_000;

/// An array element: either an integer or an alphanumeric word.
///
/// A parsed input array is homogeneous — if every token parses as an integer
/// the whole array is numeric, otherwise every element is a word. Ordering is
/// numeric for integers and lexicographic for words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Int(i64),
    Word(String),
}

impl Element {
    /// Get the integer value, returns None if this is a word
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(n) => Some(*n),
            Element::Word(_) => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(n) => write!(f, "{}", n),
            Element::Word(w) => write!(f, "{}", w),
        }
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Element::Int(a), Element::Int(b)) => a.cmp(b),
            (Element::Word(a), Element::Word(b)) => a.cmp(b),
            // Arrays are homogeneous by construction; this arm only matters
            // for totality.
            (Element::Int(_), Element::Word(_)) => std::cmp::Ordering::Less,
            (Element::Word(_), Element::Int(_)) => std::cmp::Ordering::Greater,
        }
    }
}

/// An undirected weighted edge, as used by the MST runners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u64,
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// Value copy of a binary tree, detached from the runner's working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSnapshot {
    pub value: i64,
    pub left: Option<Box<TreeSnapshot>>,
    pub right: Option<Box<TreeSnapshot>>,
}

impl TreeSnapshot {
    pub fn leaf(value: i64) -> Self {
        TreeSnapshot {
            value,
            left: None,
            right: None,
        }
    }
}

/// One node of the structural merge-sort tree: the sub-array a recursive call
/// received, the merged result it produced, and its two child calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeNode {
    pub original: Vec<Element>,
    pub merged: Vec<Element>,
    pub left: Option<Box<MergeNode>>,
    pub right: Option<Box<MergeNode>>,
}

/// Which heap-sort phase a swap belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapPhase {
    Build,
    Extract,
}

/// The narrowing decision of one binary/interpolation search probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundDecision {
    /// The probed position holds the target.
    Match,
    /// Target is smaller; continue in the left part.
    Left,
    /// Target is larger; continue in the right part.
    Right,
}

/// The four AVL rotation cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationKind {
    LL,
    RR,
    LR,
    RL,
}

impl fmt::Display for RotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationKind::LL => write!(f, "left-left"),
            RotationKind::RR => write!(f, "right-right"),
            RotationKind::LR => write!(f, "left-right"),
            RotationKind::RL => write!(f, "right-left"),
        }
    }
}

/// One rotation applied during AVL rebalancing, around the subtree root that
/// was unbalanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub kind: RotationKind,
    pub around: i64,
}

/// The semantic type of a recorded event, with its annotations.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Adjacent-pair comparison (bubble sort).
    Compare { i: usize, j: usize, swapped: bool },
    /// A quicksort partition finished: the pivot landed at `index` inside the
    /// active range, splitting it into left/right partitions (value lists,
    /// since elements may be words).
    PivotPlaced {
        pivot: Element,
        index: usize,
        low: usize,
        high: usize,
        left: Vec<Element>,
        right: Vec<Element>,
    },
    /// Merge sort split a sub-array in two.
    Divide {
        left: Vec<Element>,
        right: Vec<Element>,
    },
    /// Merge sort combined two sorted halves.
    Merge {
        left: Vec<Element>,
        right: Vec<Element>,
        merged: Vec<Element>,
    },
    /// A swap inside heapify or the extraction swap of the heap root.
    HeapSwap {
        i: usize,
        j: usize,
        phase: HeapPhase,
    },
    /// Counting sort placed a value into the output array.
    Place { index: usize, value: i64 },
    /// Linear search inspected an index.
    Probe { index: usize },
    /// Binary/interpolation search probed `pos` within `[low, high]`.
    Bound {
        low: usize,
        high: usize,
        pos: usize,
        decision: BoundDecision,
    },
    /// Search succeeded at `index`.
    Found { index: usize },
    /// Search exhausted its range without a match.
    NotFound,
    /// A traversal visited (BFS: dequeued, DFS: entered) a node.
    Visit { node: NodeId },
    /// DFS recursion unwound past a node.
    Backtrack { node: NodeId },
    /// Dijkstra selected the unprocessed node with minimum tentative distance.
    Select { node: NodeId },
    /// Prim/Kruskal accepted an edge into the spanning tree.
    EdgeAdded { edge: WeightedEdge },
    /// A value was inserted into a BST/AVL tree. `rotations` lists the AVL
    /// rebalancing rotations the insert triggered (empty for plain BSTs).
    TreeInsert {
        value: i64,
        rotations: Vec<Rotation>,
    },
    /// A value was deleted from a BST/AVL tree.
    TreeDelete {
        value: i64,
        rotations: Vec<Rotation>,
    },
    /// A tree traversal visited a node.
    TreeVisit { value: i64 },
}

/// Full state of the primary data structure at one instant.
///
/// Always an owned copy. Which variant a runner produces is fixed per
/// algorithm family.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// The working array (sorting, searching).
    Array(Vec<Element>),
    /// Counting sort's output array mid-fill; `None` slots are still empty.
    Slots(Vec<Option<Element>>),
    /// Visited/backtracked node sets, in visit order (BFS/DFS).
    NodeSets {
        visited: Vec<NodeId>,
        backtracked: Vec<NodeId>,
    },
    /// Dijkstra's processed set and tentative distances, in node order.
    /// `None` means unreachable so far.
    Distances {
        processed: Vec<NodeId>,
        dist: Vec<(NodeId, Option<u64>)>,
    },
    /// The partial spanning tree (Prim/Kruskal).
    Edges(Vec<WeightedEdge>),
    /// The whole tree after a structural change or during traversal.
    Tree(Option<Box<TreeSnapshot>>),
}

/// An immutable record of one observable moment of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    pub snapshot: Snapshot,
    pub label: String,
}

/// The final result of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sorted(Vec<Element>),
    Found(usize),
    NotFound,
    /// Node visit order of a graph traversal.
    Traversal(Vec<NodeId>),
    /// Final tentative distances, in node order.
    Distances(Vec<(NodeId, Option<u64>)>),
    Mst {
        edges: Vec<WeightedEdge>,
        total_weight: u64,
    },
    /// Final tree shape after all operations.
    Tree(Option<Box<TreeSnapshot>>),
    /// Value order of a tree traversal.
    Order(Vec<i64>),
    /// The structural merge-sort tree (non-animated rendering).
    MergeTree(MergeNode),
}

/// The complete, ordered, immutable step sequence of one run plus its result.
///
/// Created fresh per run, sealed by [`TraceBuilder::finalize`], and replaced
/// wholesale on the next run. No cross-run state.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    steps: Vec<Step>,
    result: Outcome,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn result(&self) -> &Outcome {
        &self.result
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Appendable step sequence used by runners while an algorithm executes.
#[derive(Debug)]
pub struct TraceBuilder {
    steps: Vec<Step>,
    limit: usize,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_STEP_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        TraceBuilder {
            steps: Vec::new(),
            limit,
        }
    }

    /// Append a step to the trace.
    ///
    /// Fails when the step limit is exceeded; runners surface this as a
    /// runtime error rather than recording an unbounded trace.
    pub fn record(&mut self, step: Step) -> Result<(), String> {
        if self.steps.len() >= self.limit {
            return Err(format!(
                "step limit exceeded: {} steps recorded, limit is {}",
                self.steps.len(),
                self.limit
            ));
        }
        self.steps.push(step);
        Ok(())
    }

    /// Get the number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace with the run's final result. No step recorded before
    /// this point can be mutated afterwards.
    pub fn finalize(self, result: Outcome) -> Trace {
        Trace {
            steps: self.steps,
            result,
        }
    }
}

impl Default for TraceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(index: usize) -> Step {
        Step {
            kind: StepKind::Probe { index },
            snapshot: Snapshot::Array(vec![Element::Int(1)]),
            label: format!("Checking index {}", index),
        }
    }

    #[test]
    fn builder_records_in_order() {
        let mut builder = TraceBuilder::new();
        builder.record(probe(0)).unwrap();
        builder.record(probe(1)).unwrap();
        let trace = builder.finalize(Outcome::NotFound);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().kind, StepKind::Probe { index: 0 });
        assert_eq!(trace.get(1).unwrap().kind, StepKind::Probe { index: 1 });
    }

    #[test]
    fn builder_enforces_step_limit() {
        let mut builder = TraceBuilder::with_limit(2);
        builder.record(probe(0)).unwrap();
        builder.record(probe(1)).unwrap();
        assert!(builder.record(probe(2)).is_err());
    }

    #[test]
    fn element_ordering() {
        assert!(Element::Int(2) < Element::Int(10));
        assert!(Element::Word("a".into()) < Element::Word("b".into()));
        assert_eq!(Element::Int(3).to_string(), "3");
    }
}
