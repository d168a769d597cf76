//! Sort-and-record engine (Hybrid Quicksort, pure Quicksort, pure Insertion Sort).
//!
//! This module implements the three strategies over a working copy of the
//! input, recording a [`Step`](crate::core::Step) at every comparison, move
//! and decision point:
//! - **Hybrid**: Lomuto quicksort that hands any subarray of at most
//!   [`INSERTION_THRESHOLD`] elements to insertion sort.
//! - **Quicksort**: Lomuto quicksort down to single elements.
//! - **Insertion**: Insertion sort over the whole array.
//!
//! The main entry points are [`sort`] and [`SortEngine::sort`].

use crate::core::{Algorithm, INSERTION_THRESHOLD, Run, Strategy, Value};
use crate::error::SortError;
use crate::recorder::Recorder;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Sorts a copy of `input` with `strategy` and returns the recorded run.
///
/// Builds a fresh [`SortEngine`] for the call; use an engine directly to
/// reuse its step buffer across runs.
///
/// # Examples
///
/// ```
/// use sortscope::{sort, Algorithm, Strategy};
///
/// let run = sort(&[5, 3, 8, 1], Strategy::Insertion);
///
/// assert_eq!(run.final_step().array, vec![1, 3, 5, 8]);
/// assert_eq!(run.final_step().active_algorithm, Algorithm::Complete);
/// assert_eq!(run.stats().comparisons, 5);
/// assert_eq!(run.stats().swaps, 4);
/// ```
pub fn sort(input: &[Value], strategy: Strategy) -> Run {
    SortEngine::new().sort(input, strategy)
}

/// Like [`sort`], but takes the strategy by name.
///
/// # Errors
///
/// Returns [`SortError::InvalidStrategy`] for anything other than
/// `hybrid`, `quicksort` or `insertion`.
pub fn sort_named(input: &[Value], strategy: &str) -> Result<Run, SortError> {
    let strategy = strategy.parse::<Strategy>()?;
    Ok(sort(input, strategy))
}

/// Runs sorting strategies and records every step.
///
/// Counters and the step log are scoped to the engine and reset at the start
/// of every [`sort`](SortEngine::sort) call.
#[derive(Default)]
pub struct SortEngine {
    recorder: Recorder,
}

impl SortEngine {
    /// An engine with an empty step log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts a copy of `input` and returns the full ordered step log.
    ///
    /// The log always starts with a "Starting ..." step holding the input and
    /// ends with a `complete` step holding the sorted array with every index
    /// marked sorted, so even an empty input yields two steps.
    pub fn sort(&mut self, input: &[Value], strategy: Strategy) -> Run {
        self.recorder.reset();
        debug!(%strategy, len = input.len(), "starting sort run");

        let mut pass = Pass {
            rec: &mut self.recorder,
            array: input.to_vec(),
            sorted: BTreeSet::new(),
        };
        let len = pass.array.len();

        match strategy {
            Strategy::Hybrid => {
                pass.record(
                    &[],
                    Algorithm::Quicksort,
                    "Starting Hybrid Sort (QuickSort + Insertion Sort)".to_string(),
                );
                pass.quicksort(Some(INSERTION_THRESHOLD));
            }
            Strategy::Quicksort => {
                pass.record(&[], Algorithm::Quicksort, "Starting QuickSort".to_string());
                pass.quicksort(None);
            }
            Strategy::Insertion => {
                // A one-element prefix is trivially sorted.
                if len > 0 {
                    pass.sorted.insert(0);
                }
                pass.record(&[], Algorithm::Insertion, "Starting Insertion Sort".to_string());
                if len > 1 {
                    pass.insertion_sort(0, len - 1);
                }
            }
        }

        pass.sorted.extend(0..len);
        let stats = pass.rec.stats();
        pass.record(
            &[],
            Algorithm::Complete,
            format!(
                "Sorting complete! Comparisons: {}, Swaps: {}",
                stats.comparisons, stats.swaps
            ),
        );

        let run = self.recorder.take_run();
        debug!(
            %strategy,
            len,
            steps = run.len(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "finished sort run"
        );
        run
    }
}

/// Mutable state of one run: the working array and the sorted-index set.
struct Pass<'a> {
    rec: &'a mut Recorder,
    array: Vec<Value>,
    sorted: BTreeSet<usize>,
}

impl Pass<'_> {
    #[inline]
    fn record(&mut self, comparing: &[usize], algorithm: Algorithm, message: String) {
        self.rec
            .append(&self.array, comparing, &self.sorted, algorithm, message);
    }

    /// Quicksort over the whole array.
    ///
    /// With `cutoff = Some(t)` any range of at most `t` elements goes to
    /// insertion sort instead of being partitioned.
    ///
    /// Ranges are inclusive `(low, high)` pairs on an explicit stack. The
    /// right half is pushed before the left so the left subtree is finished
    /// first, which is the order left-first recursion would record.
    fn quicksort(&mut self, cutoff: Option<usize>) {
        let len = self.array.len();
        if len == 0 {
            return;
        }

        let mut pending = vec![(0, len - 1)];
        while let Some((low, high)) = pending.pop() {
            if low == high {
                self.sorted.insert(low);
                continue;
            }

            let size = high - low + 1;
            if let Some(threshold) = cutoff.filter(|&t| size <= t) {
                trace!(low, high, size, "switching to insertion sort");
                self.record(
                    &[],
                    Algorithm::Insertion,
                    format!("Switching to Insertion Sort (size {size} ≤ {threshold})"),
                );
                self.insertion_sort(low, high);
                // insertion_sort never marks `low` itself.
                self.sorted.extend(low..=high);
                continue;
            }

            let pivot = self.partition(low, high);
            if pivot < high {
                pending.push((pivot + 1, high));
            }
            if pivot > low {
                pending.push((low, pivot - 1));
            }
        }
    }

    /// Lomuto partition of `array[low..=high]` around `array[high]`.
    ///
    /// Returns the pivot's final index, which is also marked sorted.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        assert!(
            low < high && high < self.array.len(),
            "partition range {low}..={high} invalid for length {}",
            self.array.len()
        );

        let pivot = self.array[high];
        self.record(
            &[high],
            Algorithm::Quicksort,
            format!("QuickSort: Selected pivot {pivot} at position {high}"),
        );

        // Next slot for an element smaller than the pivot.
        let mut store = low;
        for j in low..high {
            self.rec.record_comparison();
            self.record(
                &[j, high],
                Algorithm::Quicksort,
                format!("QuickSort: Comparing {} with pivot {pivot}", self.array[j]),
            );

            if self.array[j] < pivot {
                self.array.swap(store, j);
                self.rec.record_swap();
                self.record(
                    &[store, j],
                    Algorithm::Quicksort,
                    format!(
                        "QuickSort: Swapped {} and {}",
                        self.array[store], self.array[j]
                    ),
                );
                store += 1;
            }
        }

        self.array.swap(store, high);
        self.rec.record_swap();
        self.sorted.insert(store);
        trace!(low, high, pivot, position = store, "placed pivot");
        self.record(
            &[store, high],
            Algorithm::Quicksort,
            format!("QuickSort: Placed pivot {pivot} at final position {store}"),
        );

        store
    }

    /// In-place insertion sort of `array[low..=high]`.
    ///
    /// Every shift counts as one comparison and one swap. When the inner loop
    /// stops on an element that is not greater than the key, that final
    /// comparison is counted too; stopping at `low` adds nothing.
    fn insertion_sort(&mut self, low: usize, high: usize) {
        assert!(
            low <= high && high < self.array.len(),
            "insertion range {low}..={high} invalid for length {}",
            self.array.len()
        );

        for i in low + 1..=high {
            let key = self.array[i];
            self.record(
                &[i, i - 1],
                Algorithm::Insertion,
                format!("Insertion Sort: Inserting element {key} into sorted position"),
            );

            // `hole` is where `key` would land if the loop stopped now.
            let mut hole = i;
            while hole > low && self.array[hole - 1] > key {
                self.rec.record_comparison();
                self.rec.record_swap();
                self.array[hole] = self.array[hole - 1];
                hole -= 1;

                let neighbour = if hole > low { hole - 1 } else { hole };
                self.record(
                    &[hole, neighbour],
                    Algorithm::Insertion,
                    format!("Insertion Sort: Shifting element {} right", self.array[hole]),
                );
            }

            if hole > low {
                self.rec.record_comparison();
            }
            self.array[hole] = key;
            self.sorted.insert(i);
            self.record(
                &[hole],
                Algorithm::Insertion,
                format!("Insertion Sort: Placed {key} at position {hole}"),
            );
        }
    }
}
