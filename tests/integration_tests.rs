use rand::Rng;
use sortscope::prelude::*;
use std::collections::BTreeSet;

fn full_range(n: usize) -> BTreeSet<usize> {
    (0..n).collect()
}

#[test]
fn test_insertion_scenario_counts() {
    let run = sort(&[5, 3, 8, 1], Strategy::Insertion);

    let last = run.final_step();
    assert_eq!(last.array, vec![1, 3, 5, 8]);
    assert_eq!(last.stats.comparisons, 5);
    assert_eq!(last.stats.swaps, 4);
    assert_eq!(last.message, "Sorting complete! Comparisons: 5, Swaps: 4");
}

#[test]
fn test_empty_input() {
    for strategy in Strategy::ALL {
        let run = sort(&[], strategy);
        assert_eq!(run.len(), 2, "{strategy}");
        assert!(run.iter().all(|s| s.array.is_empty()));
        assert!(run.iter().all(|s| s.sorted.is_empty()));
        assert_eq!(run.final_step().active_algorithm, Algorithm::Complete);
        assert_eq!(run.stats(), Stats::default());
    }
}

#[test]
fn test_single_element() {
    for strategy in Strategy::ALL {
        let run = sort(&[1], strategy);
        assert_eq!(run.len(), 2, "{strategy}");
        assert_eq!(run.final_step().array, vec![1]);
        assert_eq!(run.final_step().sorted, BTreeSet::from([0]));
        assert!(run.final_step().is_sorted_index(0));
    }
}

#[test]
fn test_all_equal_values_quicksort() {
    let input = vec![4, 4, 4, 4, 4];
    let run = sort(&input, Strategy::Quicksort);

    assert_eq!(run.final_step().array, input);
    // Nothing is strictly below the pivot, so every partition peels off one element.
    assert_eq!(run.stats().comparisons, 4 + 3 + 2 + 1);
    assert_eq!(run.stats().swaps, 4);
}

#[test]
fn test_negative_and_duplicate_values() {
    let input = vec![0, -3, 7, -3, 12, -100, 7, 7, 0, 5, -1, 42, -3];
    let mut expected = input.clone();
    expected.sort();

    for strategy in Strategy::ALL {
        let run = sort(&input, strategy);
        assert_eq!(run.final_step().array, expected, "{strategy}");
    }
}

#[test]
fn test_first_step_holds_input() {
    let input = vec![9, 2, 7, 4, 4, 1, 0, 13, 8, 6, 5, 3];
    for strategy in Strategy::ALL {
        let run = sort(&input, strategy);
        assert_eq!(run.first().array, input);
        assert_eq!(run.first().stats, Stats::default());
        assert!(run.first().comparing.is_empty());
        assert!(run.first().message.starts_with("Starting"));
    }
}

#[test]
fn test_starting_step_tags() {
    let input = [3, 2, 1];
    assert_eq!(
        sort(&input, Strategy::Hybrid).first().active_algorithm,
        Algorithm::Quicksort
    );
    assert_eq!(
        sort(&input, Strategy::Quicksort).first().active_algorithm,
        Algorithm::Quicksort
    );

    let insertion = sort(&input, Strategy::Insertion);
    assert_eq!(insertion.first().active_algorithm, Algorithm::Insertion);
    assert_eq!(insertion.first().sorted, BTreeSet::from([0]));
}

#[test]
fn test_only_final_step_is_complete() {
    let input = [8, 1, 6, 3, 9, 2, 7, 5, 4, 0, 11, 10, 13, 12];
    for strategy in Strategy::ALL {
        let run = sort(&input, strategy);
        let (last, rest) = run.steps().split_last().unwrap();
        assert_eq!(last.active_algorithm, Algorithm::Complete);
        assert!(last.comparing.is_empty());
        assert_eq!(last.sorted, full_range(input.len()));
        assert!(rest.iter().all(|s| s.active_algorithm != Algorithm::Complete));
        assert!(run.iter().all(|s| !s.message.is_empty()));
    }
}

#[test]
fn test_hybrid_threshold_boundary() {
    // Eleven distinct values: the top-level range is partitioned first.
    let eleven: Vec<Value> = vec![11, 3, 9, 1, 7, 5, 10, 2, 8, 4, 6];
    let run = sort(&eleven, Strategy::Hybrid);
    assert_eq!(run[1].active_algorithm, Algorithm::Quicksort);
    assert_eq!(run[1].message, "QuickSort: Selected pivot 6 at position 10");
    assert!(
        run.iter()
            .any(|s| s.active_algorithm == Algorithm::Insertion)
    );

    // Ten values fit under the threshold: no partition at all.
    let ten: Vec<Value> = vec![3, 9, 1, 7, 5, 10, 2, 8, 4, 6];
    let run = sort(&ten, Strategy::Hybrid);
    assert_eq!(run[1].message, "Switching to Insertion Sort (size 10 ≤ 10)");
    assert!(
        run.iter()
            .skip(1)
            .all(|s| s.active_algorithm != Algorithm::Quicksort)
    );
}

#[test]
fn test_full_sorted_set_only_at_end_for_quicksort_family() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let len = rng.random_range(2..40);
        let input: Vec<Value> = (0..len).map(|_| rng.random_range(-20..20)).collect();
        for strategy in [Strategy::Hybrid, Strategy::Quicksort] {
            let run = sort(&input, strategy);
            let full = full_range(len);
            let (_, rest) = run.steps().split_last().unwrap();
            assert!(
                rest.iter().all(|s| s.sorted != full),
                "{strategy} reached a full sorted set early for {input:?}"
            );
        }
    }
}

#[test]
fn test_steps_are_independent_snapshots() {
    let run = sort(&[4, 3, 2, 1], Strategy::Insertion);
    let arrays: Vec<&Vec<Value>> = run.iter().map(|s| &s.array).collect();
    assert_eq!(arrays[0], &vec![4, 3, 2, 1]);
    assert_eq!(arrays[arrays.len() - 1], &vec![1, 2, 3, 4]);
    assert!(arrays.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_idempotent_resort() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let len = rng.random_range(1..60);
        let input: Vec<Value> = (0..len).map(|_| rng.random_range(0..30)).collect();

        let first = sort(&input, Strategy::Hybrid);
        let again = sort(&first.final_step().array, Strategy::Insertion);
        assert_eq!(again.stats().swaps, 0);
        assert_eq!(again.stats().comparisons, len - 1);
    }
}

#[test]
fn test_custom_text_to_run() {
    let values = parse_custom_array("64, 34, 25, 12, 22, 11, 90, oops").unwrap();
    let run = sort(&values, Strategy::default());
    assert_eq!(run.final_step().array, vec![11, 12, 22, 25, 34, 64, 90]);

    assert_eq!(parse_custom_array("a,b"), Err(SortError::NoValues));
}

#[test]
fn test_generated_array_round() {
    let input = generate_random_array(30, 10, 100).unwrap();
    let run = sort(&input, Strategy::Hybrid);

    let mut expected = input.clone();
    expected.sort();
    assert_eq!(run.final_step().array, expected);

    let mut cursor = Playback::new(run.len());
    cursor.toggle_play();
    let mut shown = 1;
    while cursor.tick() {
        shown += 1;
    }
    assert_eq!(shown, run.len());
}
