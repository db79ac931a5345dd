//! Tree runners: BST, AVL, and traversals
//!
//! Trees are built by applying an operation script ([`TreeOp`]) in order. One
//! step is recorded per operation, carrying a full value snapshot of the tree
//! after the operation and, for AVL, the list of rotations the rebalancing
//! applied.
//!
//! - BST: unbalanced insert/delete; two-child delete splices in the in-order
//!   successor (minimum of the right subtree)
//! - AVL: the same shape plus height maintenance and the four rotation cases
//!   (LL, RR, LR, RL). Deletion rebalances at every level of the unwind, not
//!   just the splice point, so one delete can trigger cascading rotations
//! - traversal: preorder/inorder/postorder over a complete binary tree built
//!   level-order from the input, one step per visited node
//!
//! Invariants: BST ordering (`left < node < right`) with duplicates rejected;
//! AVL balance factor within `[-1, 1]` at every node after every operation
//! (checked with a debug assertion — a violation is a programming error).

use super::errors::RunnerError;
use crate::input::TreeOp;
use crate::trace::{
    Outcome, Rotation, RotationKind, Snapshot, Step, StepKind, Trace, TraceBuilder, TreeSnapshot,
};

/// Which traversal order to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    Preorder,
    Inorder,
    Postorder,
}

// === Plain binary / BST nodes ===

#[derive(Debug)]
struct BstNode {
    value: i64,
    left: Option<Box<BstNode>>,
    right: Option<Box<BstNode>>,
}

impl BstNode {
    fn new(value: i64) -> Box<Self> {
        Box::new(BstNode {
            value,
            left: None,
            right: None,
        })
    }
}

/// Run a BST operation script.
pub fn bst(ops: &[TreeOp]) -> Result<Trace, RunnerError> {
    if ops.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut root: Option<Box<BstNode>> = None;
    let mut trace = TraceBuilder::new();

    for &op in ops {
        let (kind, label) = match op {
            TreeOp::Insert(value) => {
                root = bst_insert(root.take(), value)?;
                (
                    StepKind::TreeInsert {
                        value,
                        rotations: Vec::new(),
                    },
                    format!("Inserted {}", value),
                )
            }
            TreeOp::Delete(value) => {
                if !bst_contains(&root, value) {
                    return Err(RunnerError::ValueNotFound { value });
                }
                root = bst_delete(root.take(), value);
                (
                    StepKind::TreeDelete {
                        value,
                        rotations: Vec::new(),
                    },
                    format!("Deleted {}", value),
                )
            }
        };
        trace
            .record(Step {
                kind,
                snapshot: Snapshot::Tree(bst_snapshot(&root)),
                label,
            })
            .map_err(RunnerError::from_trace_limit)?;
    }

    let final_tree = bst_snapshot(&root);
    Ok(trace.finalize(Outcome::Tree(final_tree)))
}

fn bst_insert(
    node: Option<Box<BstNode>>,
    value: i64,
) -> Result<Option<Box<BstNode>>, RunnerError> {
    let Some(mut n) = node else {
        return Ok(Some(BstNode::new(value)));
    };
    if value < n.value {
        n.left = bst_insert(n.left.take(), value)?;
    } else if value > n.value {
        n.right = bst_insert(n.right.take(), value)?;
    } else {
        return Err(RunnerError::DuplicateValue { value });
    }
    Ok(Some(n))
}

fn bst_delete(node: Option<Box<BstNode>>, value: i64) -> Option<Box<BstNode>> {
    let mut n = node?;
    if value < n.value {
        n.left = bst_delete(n.left.take(), value);
    } else if value > n.value {
        n.right = bst_delete(n.right.take(), value);
    } else {
        match (n.left.take(), n.right.take()) {
            (None, None) => return None,
            (Some(l), None) => return Some(l),
            (None, Some(r)) => return Some(r),
            (Some(l), Some(r)) => {
                // Two children: splice in the in-order successor.
                let successor = min_value(&r);
                n.value = successor;
                n.left = Some(l);
                n.right = bst_delete(Some(r), successor);
            }
        }
    }
    Some(n)
}

fn min_value(node: &BstNode) -> i64 {
    node.left.as_deref().map_or(node.value, min_value)
}

fn bst_contains(node: &Option<Box<BstNode>>, value: i64) -> bool {
    match node {
        None => false,
        Some(n) if value < n.value => bst_contains(&n.left, value),
        Some(n) if value > n.value => bst_contains(&n.right, value),
        Some(_) => true,
    }
}

fn bst_snapshot(node: &Option<Box<BstNode>>) -> Option<Box<TreeSnapshot>> {
    node.as_ref().map(|n| {
        Box::new(TreeSnapshot {
            value: n.value,
            left: bst_snapshot(&n.left),
            right: bst_snapshot(&n.right),
        })
    })
}

// === AVL nodes ===

#[derive(Debug)]
struct AvlNode {
    value: i64,
    height: i32,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
}

impl AvlNode {
    fn new(value: i64) -> Box<Self> {
        Box::new(AvlNode {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }
}

/// Run an AVL operation script with rotation tracking.
pub fn avl(ops: &[TreeOp]) -> Result<Trace, RunnerError> {
    if ops.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let mut root: Option<Box<AvlNode>> = None;
    let mut trace = TraceBuilder::new();

    for &op in ops {
        let mut rotations = Vec::new();
        let (value, mut label) = match op {
            TreeOp::Insert(value) => {
                root = avl_insert(root.take(), value, &mut rotations)?;
                (value, format!("Inserted {}", value))
            }
            TreeOp::Delete(value) => {
                if !avl_contains(&root, value) {
                    return Err(RunnerError::ValueNotFound { value });
                }
                root = avl_delete(root.take(), value, &mut rotations);
                (value, format!("Deleted {}", value))
            }
        };
        debug_assert!(
            avl_check(&root).is_some(),
            "balance invariant violated after {:?}",
            op
        );

        if !rotations.is_empty() {
            let cases: Vec<String> = rotations.iter().map(|r| r.kind.to_string()).collect();
            label.push_str(&format!(" ({} rotation)", cases.join(", ")));
        }
        let step_kind = match op {
            TreeOp::Insert(_) => StepKind::TreeInsert { value, rotations },
            TreeOp::Delete(_) => StepKind::TreeDelete { value, rotations },
        };
        trace
            .record(Step {
                kind: step_kind,
                snapshot: Snapshot::Tree(avl_snapshot(&root)),
                label,
            })
            .map_err(RunnerError::from_trace_limit)?;
    }

    let final_tree = avl_snapshot(&root);
    Ok(trace.finalize(Outcome::Tree(final_tree)))
}

fn height(node: &Option<Box<AvlNode>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

fn update_height(node: &mut AvlNode) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor(node: &AvlNode) -> i32 {
    height(&node.left) - height(&node.right)
}

fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y; // only reached with a left child present
    };
    y.left = x.right.take();
    update_height(&mut y);
    x.right = Some(y);
    update_height(&mut x);
    x
}

fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    update_height(&mut x);
    y.left = Some(x);
    update_height(&mut y);
    y
}

/// Restore the balance invariant at this node, recording any rotation.
///
/// Case selection is balance-factor based (not inserted-value based) so the
/// same routine serves insert and delete, including delete's cascading
/// rotations up the unwind.
fn rebalance(mut node: Box<AvlNode>, rotations: &mut Vec<Rotation>) -> Box<AvlNode> {
    update_height(&mut node);
    let bf = balance_factor(&node);

    if bf > 1 {
        let left_bf = node.left.as_deref().map_or(0, balance_factor);
        if left_bf >= 0 {
            rotations.push(Rotation {
                kind: RotationKind::LL,
                around: node.value,
            });
            rotate_right(node)
        } else {
            rotations.push(Rotation {
                kind: RotationKind::LR,
                around: node.value,
            });
            if let Some(l) = node.left.take() {
                node.left = Some(rotate_left(l));
            }
            rotate_right(node)
        }
    } else if bf < -1 {
        let right_bf = node.right.as_deref().map_or(0, balance_factor);
        if right_bf <= 0 {
            rotations.push(Rotation {
                kind: RotationKind::RR,
                around: node.value,
            });
            rotate_left(node)
        } else {
            rotations.push(Rotation {
                kind: RotationKind::RL,
                around: node.value,
            });
            if let Some(r) = node.right.take() {
                node.right = Some(rotate_right(r));
            }
            rotate_left(node)
        }
    } else {
        node
    }
}

fn avl_insert(
    node: Option<Box<AvlNode>>,
    value: i64,
    rotations: &mut Vec<Rotation>,
) -> Result<Option<Box<AvlNode>>, RunnerError> {
    let Some(mut n) = node else {
        return Ok(Some(AvlNode::new(value)));
    };
    if value < n.value {
        n.left = avl_insert(n.left.take(), value, rotations)?;
    } else if value > n.value {
        n.right = avl_insert(n.right.take(), value, rotations)?;
    } else {
        return Err(RunnerError::DuplicateValue { value });
    }
    Ok(Some(rebalance(n, rotations)))
}

fn avl_delete(
    node: Option<Box<AvlNode>>,
    value: i64,
    rotations: &mut Vec<Rotation>,
) -> Option<Box<AvlNode>> {
    let mut n = node?;
    if value < n.value {
        n.left = avl_delete(n.left.take(), value, rotations);
    } else if value > n.value {
        n.right = avl_delete(n.right.take(), value, rotations);
    } else {
        match (n.left.take(), n.right.take()) {
            (None, None) => return None,
            (Some(l), None) => return Some(l),
            (None, Some(r)) => return Some(r),
            (Some(l), Some(r)) => {
                let successor = avl_min(&r);
                n.value = successor;
                n.left = Some(l);
                n.right = avl_delete(Some(r), successor, rotations);
            }
        }
    }
    // Re-check balance at every ancestor of the splice point.
    Some(rebalance(n, rotations))
}

fn avl_min(node: &AvlNode) -> i64 {
    node.left.as_deref().map_or(node.value, avl_min)
}

fn avl_contains(node: &Option<Box<AvlNode>>, value: i64) -> bool {
    match node {
        None => false,
        Some(n) if value < n.value => avl_contains(&n.left, value),
        Some(n) if value > n.value => avl_contains(&n.right, value),
        Some(_) => true,
    }
}

fn avl_snapshot(node: &Option<Box<AvlNode>>) -> Option<Box<TreeSnapshot>> {
    node.as_ref().map(|n| {
        Box::new(TreeSnapshot {
            value: n.value,
            left: avl_snapshot(&n.left),
            right: avl_snapshot(&n.right),
        })
    })
}

/// Verify the balance invariant; returns the subtree height, or None on a
/// violation. Used by the debug assertion after every operation.
fn avl_check(node: &Option<Box<AvlNode>>) -> Option<i32> {
    let Some(n) = node else {
        return Some(0);
    };
    let lh = avl_check(&n.left)?;
    let rh = avl_check(&n.right)?;
    if (lh - rh).abs() > 1 {
        return None;
    }
    Some(1 + lh.max(rh))
}

// === Traversal ===

/// Traverse a complete binary tree built level-order from the input values,
/// recording one step per visited node.
pub fn traverse(values: &[i64], order: TraversalOrder) -> Result<Trace, RunnerError> {
    if values.is_empty() {
        return Err(RunnerError::EmptyInput);
    }
    let root = build_complete(values, 0);
    let shape = bst_snapshot(&root);
    let mut trace = TraceBuilder::new();
    let mut result = Vec::new();

    walk(&root, order, &shape, &mut result, &mut trace)?;

    Ok(trace.finalize(Outcome::Order(result)))
}

/// Build a complete binary tree in level order: node `i` has children
/// `2i + 1` and `2i + 2`.
fn build_complete(values: &[i64], i: usize) -> Option<Box<BstNode>> {
    if i >= values.len() {
        return None;
    }
    Some(Box::new(BstNode {
        value: values[i],
        left: build_complete(values, 2 * i + 1),
        right: build_complete(values, 2 * i + 2),
    }))
}

fn walk(
    node: &Option<Box<BstNode>>,
    order: TraversalOrder,
    shape: &Option<Box<TreeSnapshot>>,
    result: &mut Vec<i64>,
    trace: &mut TraceBuilder,
) -> Result<(), RunnerError> {
    let Some(n) = node else {
        return Ok(());
    };
    let visit = |result: &mut Vec<i64>, trace: &mut TraceBuilder| -> Result<(), RunnerError> {
        result.push(n.value);
        trace
            .record(Step {
                kind: StepKind::TreeVisit { value: n.value },
                snapshot: Snapshot::Tree(shape.clone()),
                label: format!("Visiting {}", n.value),
            })
            .map_err(RunnerError::from_trace_limit)
    };

    match order {
        TraversalOrder::Preorder => {
            visit(result, trace)?;
            walk(&n.left, order, shape, result, trace)?;
            walk(&n.right, order, shape, result, trace)?;
        }
        TraversalOrder::Inorder => {
            walk(&n.left, order, shape, result, trace)?;
            visit(result, trace)?;
            walk(&n.right, order, shape, result, trace)?;
        }
        TraversalOrder::Postorder => {
            walk(&n.left, order, shape, result, trace)?;
            walk(&n.right, order, shape, result, trace)?;
            visit(result, trace)?;
        }
    }
    Ok(())
}
