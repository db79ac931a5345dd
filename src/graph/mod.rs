//! Adjacency-list graph model
//!
//! Graphs are parsed from comma-separated edge-list text:
//!
//! ```text
//! 1: 2 3, 2: 4, 3: , 4:
//! ```
//!
//! Each entry is `node: neighbor neighbor ...`. Weighted neighbors use the
//! `node-weight` form (`a: b-4 c-2`). Parsing is lenient: an entry with no
//! colon or an empty neighbor list yields a node with no outgoing edges, never
//! a parse failure. Nodes that only appear as neighbors are added to the node
//! set at first reference, so isolated and referenced-only nodes are always
//! present.
//!
//! The node set keeps insertion order — traversals start from the first node
//! and tie-breaks use first-encountered order, so determinism depends on it.

use crate::runner::errors::RunnerError;
use crate::trace::{NodeId, WeightedEdge};
use rustc_hash::FxHashMap;

/// An outgoing edge to `id`, optionally weighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub id: NodeId,
    pub weight: Option<u64>,
}

/// A read-only adjacency-list graph with insertion-ordered nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<NodeId>,
    adj: FxHashMap<NodeId, Vec<Neighbor>>,
}

impl Graph {
    /// Parse graph text into an adjacency list.
    pub fn parse(text: &str) -> Self {
        let mut graph = Graph::default();
        for entry in text.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (node, neighbors) = match entry.split_once(':') {
                Some((node, rest)) => (node.trim(), rest.trim()),
                // Malformed entry (no colon): a node with no outgoing edges.
                None => (entry, ""),
            };
            if node.is_empty() {
                continue;
            }
            graph.ensure_node(node);
            for token in neighbors.split_whitespace() {
                let neighbor = parse_neighbor(token);
                graph.ensure_node(&neighbor.id);
                if let Some(list) = graph.adj.get_mut(node) {
                    list.push(neighbor);
                }
            }
        }
        graph
    }

    fn ensure_node(&mut self, id: &str) {
        if !self.adj.contains_key(id) {
            self.order.push(id.to_string());
            self.adj.insert(id.to_string(), Vec::new());
        }
    }

    /// All node identifiers, in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// Outgoing neighbors of a node, in input order. Empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first node in insertion order (the default traversal start).
    pub fn first(&self) -> Option<&NodeId> {
        self.order.first()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Collect the undirected weighted edge set, in input order.
    ///
    /// A reverse duplicate (`b: a-4` after `a: b-4`) is folded into the first
    /// occurrence. Every edge must carry a weight; the MST and shortest-path
    /// runners refuse unweighted input outright rather than guessing.
    pub fn undirected_edges(&self) -> Result<Vec<WeightedEdge>, RunnerError> {
        let mut edges: Vec<WeightedEdge> = Vec::new();
        for node in &self.order {
            for neighbor in self.neighbors(node) {
                let weight = neighbor.weight.ok_or_else(|| RunnerError::MissingWeight {
                    from: node.clone(),
                    to: neighbor.id.clone(),
                })?;
                let seen = edges.iter().any(|e| {
                    (e.from == *node && e.to == neighbor.id)
                        || (e.from == neighbor.id && e.to == *node)
                });
                if !seen {
                    edges.push(WeightedEdge {
                        from: node.clone(),
                        to: neighbor.id.clone(),
                        weight,
                    });
                }
            }
        }
        Ok(edges)
    }
}

/// Parse a neighbor token: `b` (unweighted) or `b-4` (weight 4).
///
/// A suffix that is not a number is treated as part of the identifier.
fn parse_neighbor(token: &str) -> Neighbor {
    if let Some((id, weight)) = token.rsplit_once('-') {
        if let Ok(weight) = weight.parse::<u64>() {
            if !id.is_empty() {
                return Neighbor {
                    id: id.to_string(),
                    weight: Some(weight),
                };
            }
        }
    }
    Neighbor {
        id: token.to_string(),
        weight: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_adjacency_list() {
        let g = Graph::parse("1: 2 3, 2: 4, 3: , 4: ");
        assert_eq!(g.nodes(), ["1", "2", "3", "4"]);
        assert_eq!(g.neighbors("1").len(), 2);
        assert_eq!(g.neighbors("1")[0].id, "2");
        assert!(g.neighbors("3").is_empty());
    }

    #[test]
    fn malformed_entry_yields_isolated_node() {
        let g = Graph::parse("a: b, c");
        assert_eq!(g.nodes(), ["a", "b", "c"]);
        assert!(g.neighbors("c").is_empty());
    }

    #[test]
    fn referenced_only_nodes_join_the_node_set() {
        let g = Graph::parse("a: b c");
        assert_eq!(g.nodes(), ["a", "b", "c"]);
    }

    #[test]
    fn weighted_neighbors() {
        let g = Graph::parse("a: b-4 c-2, b: c-1");
        assert_eq!(g.neighbors("a")[0].weight, Some(4));
        assert_eq!(g.neighbors("a")[1].weight, Some(2));
        let edges = g.undirected_edges().unwrap();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn reverse_duplicate_edges_fold() {
        let g = Graph::parse("a: b-4, b: a-4 c-1");
        let edges = g.undirected_edges().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from, "a");
        assert_eq!(edges[0].to, "b");
    }

    #[test]
    fn unweighted_edge_rejected_for_mst() {
        let g = Graph::parse("a: b");
        assert_eq!(
            g.undirected_edges().unwrap_err(),
            RunnerError::MissingWeight {
                from: "a".to_string(),
                to: "b".to_string()
            }
        );
    }
}
