// Integration tests for the sorting runners

use algoscope::runner::errors::RunnerError;
use algoscope::runner::sorting;
use algoscope::trace::{Element, Outcome, Snapshot, StepKind};

fn ints(values: &[i64]) -> Vec<Element> {
    values.iter().map(|&n| Element::Int(n)).collect()
}

fn words(values: &[&str]) -> Vec<Element> {
    values.iter().map(|&w| Element::Word(w.to_string())).collect()
}

#[test]
fn test_bubble_sort_records_every_comparison() {
    let trace = sorting::bubble_sort(&ints(&[5, 3, 8, 1])).expect("run failed");

    // n(n-1)/2 comparisons, no early exit
    assert_eq!(trace.len(), 6);

    let first = trace.get(0).expect("first step");
    assert_eq!(
        first.kind,
        StepKind::Compare {
            i: 0,
            j: 1,
            swapped: true
        }
    );
    assert_eq!(first.label, "Comparing 5 and 3 => Swapped");
    assert_eq!(first.snapshot, Snapshot::Array(ints(&[3, 5, 8, 1])));

    assert_eq!(*trace.result(), Outcome::Sorted(ints(&[1, 3, 5, 8])));
}

#[test]
fn test_bubble_sort_sorted_input_still_compares() {
    let trace = sorting::bubble_sort(&ints(&[1, 2, 3])).expect("run failed");
    assert_eq!(trace.len(), 3);
    for step in trace.steps() {
        assert!(matches!(
            step.kind,
            StepKind::Compare { swapped: false, .. }
        ));
    }
}

#[test]
fn test_quick_sort_words() {
    let trace = sorting::quick_sort(&words(&["b", "a", "c"])).expect("run failed");

    // Two completed partitions for three elements
    assert_eq!(trace.len(), 2);
    let first = trace.get(0).expect("first step");
    assert_eq!(first.label, "Pivot c placed at index 2");
    match &first.kind {
        StepKind::PivotPlaced { index, low, high, .. } => {
            assert_eq!((*index, *low, *high), (2, 0, 2));
        }
        other => panic!("expected PivotPlaced, got {:?}", other),
    }

    assert_eq!(*trace.result(), Outcome::Sorted(words(&["a", "b", "c"])));
}

#[test]
fn test_quick_sort_duplicates_and_reverse() {
    let trace = sorting::quick_sort(&ints(&[3, 3, 2, 1, 2])).expect("run failed");
    assert_eq!(*trace.result(), Outcome::Sorted(ints(&[1, 2, 2, 3, 3])));
}

#[test]
fn test_merge_sort_divide_and_merge_steps() {
    let trace = sorting::merge_sort(&ints(&[5, 3, 8, 1])).expect("run failed");

    // Three splits and three merges for four elements
    let divides = trace
        .steps()
        .iter()
        .filter(|s| matches!(s.kind, StepKind::Divide { .. }))
        .count();
    let merges = trace
        .steps()
        .iter()
        .filter(|s| matches!(s.kind, StepKind::Merge { .. }))
        .count();
    assert_eq!(divides, 3);
    assert_eq!(merges, 3);

    let first = trace.get(0).expect("first step");
    assert_eq!(first.label, "Dividing [5, 3, 8, 1] into [5, 3] and [8, 1]");

    // The last merge combines the two sorted halves
    let last = trace.get(trace.len() - 1).expect("last step");
    assert_eq!(last.label, "Merging [3, 5] and [1, 8] => [1, 3, 5, 8]");
    assert_eq!(last.snapshot, Snapshot::Array(ints(&[1, 3, 5, 8])));

    assert_eq!(*trace.result(), Outcome::Sorted(ints(&[1, 3, 5, 8])));
}

#[test]
fn test_merge_sort_tree_structure() {
    let trace = sorting::merge_sort_tree(&ints(&[5, 3, 8, 1])).expect("run failed");

    // The structural variant records no animation steps
    assert!(trace.is_empty());

    let Outcome::MergeTree(root) = trace.result() else {
        panic!("expected a merge tree outcome");
    };
    assert_eq!(root.original, ints(&[5, 3, 8, 1]));
    assert_eq!(root.merged, ints(&[1, 3, 5, 8]));

    let left = root.left.as_ref().expect("left child");
    assert_eq!(left.original, ints(&[5, 3]));
    assert_eq!(left.merged, ints(&[3, 5]));

    // Leaves are single elements with no children
    let leaf = left.left.as_ref().expect("leaf");
    assert_eq!(leaf.original, ints(&[5]));
    assert!(leaf.left.is_none() && leaf.right.is_none());
}

#[test]
fn test_heap_sort() {
    let trace = sorting::heap_sort(&ints(&[5, 3, 8, 1, 9, 2])).expect("run failed");
    assert_eq!(*trace.result(), Outcome::Sorted(ints(&[1, 2, 3, 5, 8, 9])));
    assert!(trace
        .steps()
        .iter()
        .all(|s| matches!(s.kind, StepKind::HeapSwap { .. })));
}

#[test]
fn test_counting_sort_stable_backward_fill() {
    let trace = sorting::counting_sort(&[4, 2, 2, 8, 3, 3, 1]).expect("run failed");

    // One placement per element
    assert_eq!(trace.len(), 7);

    // Backward walk places the last input element first
    let first = trace.get(0).expect("first step");
    assert_eq!(first.kind, StepKind::Place { index: 0, value: 1 });
    assert_eq!(first.label, "Placed 1 at index 0");
    match &first.snapshot {
        Snapshot::Slots(slots) => {
            assert_eq!(slots[0], Some(Element::Int(1)));
            assert!(slots[1..].iter().all(Option::is_none));
        }
        other => panic!("expected Slots snapshot, got {:?}", other),
    }

    assert_eq!(
        *trace.result(),
        Outcome::Sorted(ints(&[1, 2, 2, 3, 3, 4, 8]))
    );
}

#[test]
fn test_counting_sort_rejects_negatives() {
    let err = sorting::counting_sort(&[3, -1, 2]).unwrap_err();
    assert_eq!(err, RunnerError::NegativeValue { value: -1 });
}

#[test]
fn test_empty_input_rejected() {
    assert_eq!(sorting::bubble_sort(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(sorting::quick_sort(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(sorting::merge_sort(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(sorting::heap_sort(&[]).unwrap_err(), RunnerError::EmptyInput);
    assert_eq!(sorting::counting_sort(&[]).unwrap_err(), RunnerError::EmptyInput);
}

#[test]
fn test_single_element_arrays() {
    let one = ints(&[7]);
    assert_eq!(
        *sorting::bubble_sort(&one).expect("bubble").result(),
        Outcome::Sorted(one.clone())
    );
    assert_eq!(
        *sorting::quick_sort(&one).expect("quick").result(),
        Outcome::Sorted(one.clone())
    );
    assert_eq!(
        *sorting::heap_sort(&one).expect("heap").result(),
        Outcome::Sorted(one)
    );
}

#[test]
fn test_every_permutation_sorts_to_the_same_array() {
    // Heap's algorithm over a small multiset with a duplicate
    fn permutations(values: &mut Vec<i64>, k: usize, out: &mut Vec<Vec<i64>>) {
        if k <= 1 {
            out.push(values.clone());
            return;
        }
        for i in 0..k {
            permutations(values, k - 1, out);
            if k % 2 == 0 {
                values.swap(i, k - 1);
            } else {
                values.swap(0, k - 1);
            }
        }
    }

    let mut base = vec![2, 1, 3, 2];
    let mut perms = Vec::new();
    let len = base.len();
    permutations(&mut base, len, &mut perms);
    assert_eq!(perms.len(), 24);

    let expected = Outcome::Sorted(ints(&[1, 2, 2, 3]));
    for perm in perms {
        let input = ints(&perm);
        assert_eq!(*sorting::bubble_sort(&input).expect("bubble").result(), expected);
        assert_eq!(*sorting::quick_sort(&input).expect("quick").result(), expected);
        assert_eq!(*sorting::merge_sort(&input).expect("merge").result(), expected);
        assert_eq!(*sorting::heap_sort(&input).expect("heap").result(), expected);
    }
}

#[test]
fn test_all_sorts_agree() {
    let input = ints(&[9, 1, 4, 1, 7, 3, 9, 0]);
    let expected = Outcome::Sorted(ints(&[0, 1, 1, 3, 4, 7, 9, 9]));
    assert_eq!(*sorting::bubble_sort(&input).expect("bubble").result(), expected);
    assert_eq!(*sorting::quick_sort(&input).expect("quick").result(), expected);
    assert_eq!(*sorting::merge_sort(&input).expect("merge").result(), expected);
    assert_eq!(*sorting::heap_sort(&input).expect("heap").result(), expected);
}
