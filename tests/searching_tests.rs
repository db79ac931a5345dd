// Integration tests for the search runners

use algoscope::runner::searching;
use algoscope::trace::{BoundDecision, Element, Outcome, StepKind};

fn ints(values: &[i64]) -> Vec<Element> {
    values.iter().map(|&n| Element::Int(n)).collect()
}

#[test]
fn test_linear_search_words() {
    let arr = vec![
        Element::Word("b".to_string()),
        Element::Word("a".to_string()),
        Element::Word("c".to_string()),
    ];
    let trace = searching::linear_search(&arr, &Element::Word("a".to_string()))
        .expect("run failed");

    // Two probes, then the terminal Found step
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.get(0).expect("probe").kind, StepKind::Probe { index: 0 });
    assert_eq!(trace.get(0).expect("probe").label, "Checking index 0: b");
    assert_eq!(trace.get(2).expect("found").kind, StepKind::Found { index: 1 });
    assert_eq!(*trace.result(), Outcome::Found(1));
}

#[test]
fn test_linear_search_stops_at_first_match() {
    let arr = ints(&[7, 7, 7]);
    let trace = searching::linear_search(&arr, &Element::Int(7)).expect("run failed");
    assert_eq!(*trace.result(), Outcome::Found(0));
    assert_eq!(trace.len(), 2); // one probe plus the Found step
}

#[test]
fn test_binary_search_narrowing() {
    let trace = searching::binary_search(&[1, 3, 5, 7, 9], 7).expect("run failed");

    assert_eq!(trace.len(), 2);
    let first = trace.get(0).expect("first probe");
    assert_eq!(
        first.label,
        "Checking middle index 2 (value: 5) => Discarding left half"
    );
    match first.kind {
        StepKind::Bound {
            low,
            high,
            pos,
            decision,
        } => {
            assert_eq!((low, high, pos), (0, 4, 2));
            assert_eq!(decision, BoundDecision::Right);
        }
        ref other => panic!("expected Bound, got {:?}", other),
    }

    let last = trace.get(1).expect("match probe");
    assert_eq!(
        last.label,
        "Checking middle index 3 (value: 7) => Target found at index 3!"
    );
    assert_eq!(*trace.result(), Outcome::Found(3));
}

#[test]
fn test_binary_search_sorts_its_copy_first() {
    // Unsorted input; the reported index is within the sorted order
    let trace = searching::binary_search(&[9, 1, 7, 3, 5], 7).expect("run failed");
    assert_eq!(*trace.result(), Outcome::Found(3));
}

#[test]
fn test_binary_search_not_found() {
    let trace = searching::binary_search(&[1, 3, 5, 7, 9], 4).expect("run failed");
    assert_eq!(*trace.result(), Outcome::NotFound);

    let last = trace.get(trace.len() - 1).expect("terminal step");
    assert_eq!(last.kind, StepKind::NotFound);
    assert_eq!(last.label, "Target not found in the array");
}

#[test]
fn test_binary_search_smaller_than_everything() {
    // Exercises the low-edge underflow path (mid reaches 0)
    let trace = searching::binary_search(&[2, 4, 6], 1).expect("run failed");
    assert_eq!(*trace.result(), Outcome::NotFound);
}

#[test]
fn test_interpolation_search_uniform_probe() {
    // Uniform gaps: the first probe lands exactly on the target
    let trace = searching::interpolation_search(&[2, 4, 6, 8, 10, 12], 8).expect("run failed");
    assert_eq!(trace.len(), 1);
    assert_eq!(
        trace.get(0).expect("probe").label,
        "Probing position 3 (value: 8) => Target found at index 3!"
    );
    assert_eq!(*trace.result(), Outcome::Found(3));
}

#[test]
fn test_interpolation_search_uniform_range_guard() {
    // All-equal values would divide by zero in the probe formula
    let hit = searching::interpolation_search(&[7, 7, 7], 7).expect("run failed");
    assert_eq!(*hit.result(), Outcome::Found(0));
    assert_eq!(
        hit.get(0).expect("probe").label,
        "Range is uniform => Target found at index 0!"
    );

    let miss = searching::interpolation_search(&[7, 7, 7], 5).expect("run failed");
    assert_eq!(*miss.result(), Outcome::NotFound);
}

#[test]
fn test_interpolation_search_out_of_range_target() {
    // Target outside [min, max] fails the loop condition immediately
    let trace = searching::interpolation_search(&[10, 20, 30], 50).expect("run failed");
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.get(0).expect("terminal").kind, StepKind::NotFound);
}

#[test]
fn test_searches_agree_on_presence() {
    let nums = [2, 4, 6, 8, 10, 12];
    let arr = ints(&nums);

    for target in [8i64, 7, 2, 12, 100] {
        let linear = searching::linear_search(&arr, &Element::Int(target)).expect("linear");
        let binary = searching::binary_search(&nums, target).expect("binary");
        let interp = searching::interpolation_search(&nums, target).expect("interpolation");

        let found = |o: &Outcome| matches!(o, Outcome::Found(_));
        assert_eq!(found(linear.result()), found(binary.result()));
        assert_eq!(found(binary.result()), found(interp.result()));
    }
}
