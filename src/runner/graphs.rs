//! Graph runners
//!
//! All runners operate on the read-only [`Graph`] model and start from the
//! first node in insertion order. Determinism comes entirely from insertion
//! order: neighbor lists keep input order, and every tie-break is
//! first-encountered.
//!
//! - BFS marks a node visited when it is dequeued and records one
//!   [`StepKind::Visit`] per dequeue
//! - DFS records a [`StepKind::Visit`] on entering a node and a
//!   [`StepKind::Backtrack`] when recursion unwinds past it — the renderer
//!   needs both to distinguish "currently exploring" from "fully explored"
//! - Dijkstra uses array-based minimum selection over `|V|-1` rounds,
//!   recording one [`StepKind::Select`] per processed node
//! - Prim and Kruskal record one [`StepKind::EdgeAdded`] per accepted edge;
//!   cycle-forming edges Kruskal rejects are not recorded

use super::errors::RunnerError;
use crate::graph::Graph;
use crate::trace::{
    NodeId, Outcome, Snapshot, Step, StepKind, Trace, TraceBuilder, WeightedEdge,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Breadth-first traversal from the first node.
pub fn bfs(graph: &Graph) -> Result<Trace, RunnerError> {
    let start = graph.first().ok_or(RunnerError::EmptyGraph)?;
    let mut trace = TraceBuilder::new();

    let mut queue = VecDeque::new();
    let mut enqueued = FxHashSet::default();
    let mut visited: Vec<NodeId> = Vec::new();

    queue.push_back(start.clone());
    enqueued.insert(start.clone());

    while let Some(node) = queue.pop_front() {
        visited.push(node.clone());
        trace
            .record(Step {
                kind: StepKind::Visit { node: node.clone() },
                snapshot: Snapshot::NodeSets {
                    visited: visited.clone(),
                    backtracked: Vec::new(),
                },
                label: format!("Visited {}", node),
            })
            .map_err(RunnerError::from_trace_limit)?;

        for neighbor in graph.neighbors(&node) {
            if enqueued.insert(neighbor.id.clone()) {
                queue.push_back(neighbor.id.clone());
            }
        }
    }

    Ok(trace.finalize(Outcome::Traversal(visited)))
}

/// Depth-first traversal from the first node, with backtrack tracking.
pub fn dfs(graph: &Graph) -> Result<Trace, RunnerError> {
    let start = graph.first().ok_or(RunnerError::EmptyGraph)?;
    let mut trace = TraceBuilder::new();

    let mut visited: Vec<NodeId> = Vec::new();
    let mut seen = FxHashSet::default();
    let mut backtracked: Vec<NodeId> = Vec::new();

    dfs_recurse(
        graph,
        start,
        &mut seen,
        &mut visited,
        &mut backtracked,
        &mut trace,
    )?;

    Ok(trace.finalize(Outcome::Traversal(visited)))
}

fn dfs_recurse(
    graph: &Graph,
    node: &NodeId,
    seen: &mut FxHashSet<NodeId>,
    visited: &mut Vec<NodeId>,
    backtracked: &mut Vec<NodeId>,
    trace: &mut TraceBuilder,
) -> Result<(), RunnerError> {
    seen.insert(node.clone());
    visited.push(node.clone());
    trace
        .record(Step {
            kind: StepKind::Visit { node: node.clone() },
            snapshot: Snapshot::NodeSets {
                visited: visited.clone(),
                backtracked: backtracked.clone(),
            },
            label: format!("Exploring {}", node),
        })
        .map_err(RunnerError::from_trace_limit)?;

    for neighbor in graph.neighbors(node) {
        if !seen.contains(&neighbor.id) {
            dfs_recurse(graph, &neighbor.id, seen, visited, backtracked, trace)?;
        }
    }

    backtracked.push(node.clone());
    trace
        .record(Step {
            kind: StepKind::Backtrack { node: node.clone() },
            snapshot: Snapshot::NodeSets {
                visited: visited.clone(),
                backtracked: backtracked.clone(),
            },
            label: format!("Backtracked from {}", node),
        })
        .map_err(RunnerError::from_trace_limit)?;

    Ok(())
}

/// Dijkstra's shortest paths from the first node, array-based selection.
///
/// Every neighbor must carry a weight (`node-weight` form). Runs `|V|-1`
/// selection rounds, stopping early when no reachable unprocessed node
/// remains.
pub fn dijkstra(graph: &Graph) -> Result<Trace, RunnerError> {
    let start = graph.first().ok_or(RunnerError::EmptyGraph)?;

    // Validate weights up front so no partial trace is recorded.
    for node in graph.nodes() {
        for neighbor in graph.neighbors(node) {
            if neighbor.weight.is_none() {
                return Err(RunnerError::MissingWeight {
                    from: node.clone(),
                    to: neighbor.id.clone(),
                });
            }
        }
    }

    let mut trace = TraceBuilder::new();
    let mut dist: FxHashMap<&NodeId, Option<u64>> =
        graph.nodes().iter().map(|n| (n, None)).collect();
    dist.insert(start, Some(0));
    let mut processed: Vec<NodeId> = Vec::new();
    let mut done = FxHashSet::default();

    for _ in 0..graph.len().saturating_sub(1) {
        // Unprocessed node with minimum tentative distance, ties broken by
        // node insertion order.
        let current = graph
            .nodes()
            .iter()
            .filter(|n| !done.contains(*n))
            .filter_map(|n| dist[n].map(|d| (n, d)))
            .min_by_key(|&(_, d)| d)
            .map(|(n, _)| n.clone());

        let Some(current) = current else {
            break; // nothing reachable remains
        };

        done.insert(current.clone());
        processed.push(current.clone());

        trace
            .record(Step {
                kind: StepKind::Select {
                    node: current.clone(),
                },
                snapshot: Snapshot::Distances {
                    processed: processed.clone(),
                    dist: snapshot_distances(graph, &dist),
                },
                label: format!(
                    "Processed {} (distance {})",
                    current,
                    dist[&current].unwrap_or(0)
                ),
            })
            .map_err(RunnerError::from_trace_limit)?;

        let base = dist[&current].unwrap_or(0);
        for neighbor in graph.neighbors(&current) {
            if done.contains(&neighbor.id) {
                continue;
            }
            let weight = neighbor.weight.unwrap_or(0);
            let candidate = base + weight;
            let entry = dist.get_mut(&neighbor.id);
            if let Some(entry) = entry {
                if entry.map_or(true, |d| candidate < d) {
                    *entry = Some(candidate);
                }
            }
        }
    }

    let final_dist = snapshot_distances(graph, &dist);
    Ok(trace.finalize(Outcome::Distances(final_dist)))
}

fn snapshot_distances(
    graph: &Graph,
    dist: &FxHashMap<&NodeId, Option<u64>>,
) -> Vec<(NodeId, Option<u64>)> {
    graph
        .nodes()
        .iter()
        .map(|n| (n.clone(), dist.get(n).copied().flatten()))
        .collect()
}

/// Prim's MST: grow a single tree from the first node by repeatedly adding
/// the minimum-weight edge crossing the cut. Ties break on lowest
/// source-then-target identifier.
pub fn prim(graph: &Graph) -> Result<Trace, RunnerError> {
    let start = graph.first().ok_or(RunnerError::EmptyGraph)?;
    let edges = graph.undirected_edges()?;

    let mut trace = TraceBuilder::new();
    let mut in_tree = FxHashSet::default();
    in_tree.insert(start.clone());
    let mut mst: Vec<WeightedEdge> = Vec::new();
    let mut total_weight = 0u64;

    loop {
        let crossing = edges
            .iter()
            .filter(|e| in_tree.contains(&e.from) != in_tree.contains(&e.to))
            .min_by(|a, b| {
                a.weight
                    .cmp(&b.weight)
                    .then_with(|| a.from.cmp(&b.from))
                    .then_with(|| a.to.cmp(&b.to))
            });

        let Some(edge) = crossing else {
            break; // tree spans its component
        };
        let edge = edge.clone();

        in_tree.insert(edge.from.clone());
        in_tree.insert(edge.to.clone());
        total_weight += edge.weight;
        mst.push(edge.clone());

        trace
            .record(Step {
                label: format!("Added edge {}", edge),
                kind: StepKind::EdgeAdded { edge },
                snapshot: Snapshot::Edges(mst.clone()),
            })
            .map_err(RunnerError::from_trace_limit)?;
    }

    Ok(trace.finalize(Outcome::Mst {
        edges: mst,
        total_weight,
    }))
}

/// Kruskal's MST: consider edges by ascending weight (ties keep input order)
/// and accept each edge that does not form a cycle. Rejected edges are not
/// recorded as steps.
pub fn kruskal(graph: &Graph) -> Result<Trace, RunnerError> {
    if graph.is_empty() {
        return Err(RunnerError::EmptyGraph);
    }
    let mut edges = graph.undirected_edges()?;
    edges.sort_by_key(|e| e.weight); // stable: ties keep input order

    let mut trace = TraceBuilder::new();
    let mut dsu = DisjointSet::new(graph.nodes());
    let mut mst: Vec<WeightedEdge> = Vec::new();
    let mut total_weight = 0u64;

    for edge in edges {
        if !dsu.union(&edge.from, &edge.to) {
            continue; // would form a cycle
        }
        total_weight += edge.weight;
        mst.push(edge.clone());
        trace
            .record(Step {
                label: format!("Added edge {}", edge),
                kind: StepKind::EdgeAdded { edge },
                snapshot: Snapshot::Edges(mst.clone()),
            })
            .map_err(RunnerError::from_trace_limit)?;
    }

    Ok(trace.finalize(Outcome::Mst {
        edges: mst,
        total_weight,
    }))
}

/// Union-find over node identifiers, used by Kruskal for cycle detection.
struct DisjointSet {
    index: FxHashMap<NodeId, usize>,
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(nodes: &[NodeId]) -> Self {
        DisjointSet {
            index: nodes
                .iter()
                .enumerate()
                .map(|(i, n)| (n.clone(), i))
                .collect(),
            parent: (0..nodes.len()).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    /// Join the sets containing `a` and `b`; false if already joined.
    fn union(&mut self, a: &NodeId, b: &NodeId) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let (ra, rb) = (self.find(ia), self.find(ib));
        if ra == rb {
            return false;
        }
        self.parent[rb] = ra;
        true
    }
}
