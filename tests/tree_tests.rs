// Integration tests for the tree runners

use algoscope::input::TreeOp;
use algoscope::runner::errors::RunnerError;
use algoscope::runner::trees::{self, TraversalOrder};
use algoscope::trace::{Outcome, RotationKind, Snapshot, StepKind, TreeSnapshot};

fn inserts(values: &[i64]) -> Vec<TreeOp> {
    values.iter().map(|&v| TreeOp::Insert(v)).collect()
}

fn root_of(outcome: &Outcome) -> &TreeSnapshot {
    match outcome {
        Outcome::Tree(Some(root)) => root,
        other => panic!("expected a non-empty tree outcome, got {:?}", other),
    }
}

#[test]
fn test_bst_insert_shape() {
    let trace = trees::bst(&inserts(&[50, 30, 70, 20, 40])).expect("run failed");
    assert_eq!(trace.len(), 5);

    let root = root_of(trace.result());
    assert_eq!(root.value, 50);
    assert_eq!(root.left.as_ref().expect("left").value, 30);
    assert_eq!(root.right.as_ref().expect("right").value, 70);
    assert_eq!(
        root.left.as_ref().expect("left").left.as_ref().expect("ll").value,
        20
    );
}

#[test]
fn test_bst_two_child_delete_uses_inorder_successor() {
    let ops = [
        TreeOp::Insert(50),
        TreeOp::Insert(30),
        TreeOp::Insert(70),
        TreeOp::Insert(20),
        TreeOp::Insert(40),
        TreeOp::Delete(50),
    ];
    let trace = trees::bst(&ops).expect("run failed");

    let last = trace.get(trace.len() - 1).expect("delete step");
    assert_eq!(last.label, "Deleted 50");
    assert!(matches!(last.kind, StepKind::TreeDelete { value: 50, .. }));

    // 70 is the minimum of the right subtree
    let root = root_of(trace.result());
    assert_eq!(root.value, 70);
    assert_eq!(root.left.as_ref().expect("left").value, 30);
    assert!(root.right.is_none());
}

#[test]
fn test_bst_rejects_duplicates() {
    let err = trees::bst(&inserts(&[10, 10])).unwrap_err();
    assert_eq!(err, RunnerError::DuplicateValue { value: 10 });
}

#[test]
fn test_bst_delete_of_absent_value_fails() {
    let ops = [TreeOp::Insert(10), TreeOp::Delete(99)];
    let err = trees::bst(&ops).unwrap_err();
    assert_eq!(err, RunnerError::ValueNotFound { value: 99 });
}

#[test]
fn test_avl_right_right_rotation() {
    let trace = trees::avl(&inserts(&[10, 20, 30])).expect("run failed");

    let third = trace.get(2).expect("third insert");
    assert_eq!(third.label, "Inserted 30 (right-right rotation)");
    match &third.kind {
        StepKind::TreeInsert { value, rotations } => {
            assert_eq!(*value, 30);
            assert_eq!(rotations.len(), 1);
            assert_eq!(rotations[0].kind, RotationKind::RR);
            assert_eq!(rotations[0].around, 10);
        }
        other => panic!("expected TreeInsert, got {:?}", other),
    }

    // The rotation lifts 20 to the root
    let root = root_of(trace.result());
    assert_eq!(root.value, 20);
    assert_eq!(root.left.as_ref().expect("left").value, 10);
    assert_eq!(root.right.as_ref().expect("right").value, 30);
}

#[test]
fn test_avl_left_right_rotation() {
    let trace = trees::avl(&inserts(&[30, 10, 20])).expect("run failed");

    let third = trace.get(2).expect("third insert");
    assert_eq!(third.label, "Inserted 20 (left-right rotation)");

    let root = root_of(trace.result());
    assert_eq!(root.value, 20);
}

#[test]
fn test_avl_balanced_insert_records_no_rotation() {
    let trace = trees::avl(&inserts(&[20, 10, 30])).expect("run failed");
    for step in trace.steps() {
        match &step.kind {
            StepKind::TreeInsert { rotations, .. } => assert!(rotations.is_empty()),
            other => panic!("expected TreeInsert, got {:?}", other),
        }
    }
}

#[test]
fn test_avl_delete_triggers_rotation() {
    // 10,20,30 rebalances to 20(10,30); 40 and 50 then rebalance the right
    // subtree to 40(30,50). Deleting 10 unbalances the root.
    let mut ops = inserts(&[10, 20, 30, 40, 50]);
    ops.push(TreeOp::Delete(10));
    let trace = trees::avl(&ops).expect("run failed");

    let last = trace.get(trace.len() - 1).expect("delete step");
    match &last.kind {
        StepKind::TreeDelete { value, rotations } => {
            assert_eq!(*value, 10);
            assert_eq!(rotations.len(), 1);
            assert_eq!(rotations[0].kind, RotationKind::RR);
            assert_eq!(rotations[0].around, 20);
        }
        other => panic!("expected TreeDelete, got {:?}", other),
    }

    let root = root_of(trace.result());
    assert_eq!(root.value, 40);
    assert_eq!(root.left.as_ref().expect("left").value, 20);
    assert_eq!(root.right.as_ref().expect("right").value, 50);
}

#[test]
fn test_avl_stays_balanced_under_ascending_inserts() {
    let trace = trees::avl(&inserts(&[1, 2, 3, 4, 5, 6, 7, 8])).expect("run failed");

    fn check(node: &TreeSnapshot) -> i32 {
        let lh = node.left.as_deref().map_or(0, check);
        let rh = node.right.as_deref().map_or(0, check);
        assert!((lh - rh).abs() <= 1, "unbalanced at {}", node.value);
        1 + lh.max(rh)
    }
    check(root_of(trace.result()));
}

#[test]
fn test_traversal_orders() {
    let values = [1, 2, 3, 4, 5, 6, 7];

    let pre = trees::traverse(&values, TraversalOrder::Preorder).expect("preorder");
    assert_eq!(*pre.result(), Outcome::Order(vec![1, 2, 4, 5, 3, 6, 7]));

    let ino = trees::traverse(&values, TraversalOrder::Inorder).expect("inorder");
    assert_eq!(*ino.result(), Outcome::Order(vec![4, 2, 5, 1, 6, 3, 7]));

    let post = trees::traverse(&values, TraversalOrder::Postorder).expect("postorder");
    assert_eq!(*post.result(), Outcome::Order(vec![4, 5, 2, 6, 7, 3, 1]));

    // One visit step per node, all over the same tree shape
    assert_eq!(pre.len(), 7);
    assert_eq!(pre.get(0).expect("first").label, "Visiting 1");
    let Snapshot::Tree(Some(shape)) = &pre.get(0).expect("first").snapshot else {
        panic!("expected a tree snapshot");
    };
    assert_eq!(shape.value, 1);
}

#[test]
fn test_empty_scripts_rejected() {
    assert_eq!(trees::bst(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(trees::avl(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(
        trees::traverse(&[], TraversalOrder::Inorder).unwrap_err(),
        RunnerError::EmptyInput
    );
}
