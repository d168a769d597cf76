//! Append-only step log with running comparison/swap counters.
//!
//! The recorder is the only place a [`Step`] is constructed. Each append
//! copies the working array and index sets, so later mutation of the
//! working array never leaks into earlier snapshots.

use crate::core::{Algorithm, Run, Stats, Step, Value};
use cuneiform::cuneiform;
use std::collections::BTreeSet;

// Bumped on every comparison in the inner loops; kept on its own cache line.
#[cuneiform]
struct Counters {
    comparisons: usize,
    swaps: usize,
}

impl Counters {
    const fn zero() -> Self {
        Counters {
            comparisons: 0,
            swaps: 0,
        }
    }
}

/// Ordered history of an in-progress sort.
pub struct Recorder {
    steps: Vec<Step>,
    counters: Counters,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// An empty log with both counters at zero.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            counters: Counters::zero(),
        }
    }

    /// Clears the log and zeroes both counters.
    pub fn reset(&mut self) {
        self.steps.clear();
        self.counters = Counters::zero();
    }

    /// Counts one evaluated element-pair comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    /// Counts one element relocation (an exchange or an insertion shift).
    #[inline]
    pub fn record_swap(&mut self) {
        self.counters.swaps += 1;
    }

    /// Current cumulative counters.
    #[inline]
    pub fn stats(&self) -> Stats {
        Stats {
            comparisons: self.counters.comparisons,
            swaps: self.counters.swaps,
        }
    }

    /// Snapshots the given state together with the current counters.
    ///
    /// # Panics
    ///
    /// Panics if any index in `comparing` or `sorted` is outside `array`.
    pub fn append(
        &mut self,
        array: &[Value],
        comparing: &[usize],
        sorted: &BTreeSet<usize>,
        active_algorithm: Algorithm,
        message: impl Into<String>,
    ) {
        let len = array.len();
        assert!(
            comparing.iter().all(|&i| i < len),
            "highlighted index out of range: {comparing:?} for length {len}"
        );
        assert!(
            sorted.last().is_none_or(|&i| i < len),
            "sorted index out of range for length {len}"
        );

        self.steps.push(Step {
            array: array.to_vec(),
            comparing: comparing.to_vec(),
            sorted: sorted.clone(),
            active_algorithm,
            message: message.into(),
            stats: self.stats(),
        });
    }

    /// The log built so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Moves the log out as a [`Run`], leaving the recorder empty.
    pub(crate) fn take_run(&mut self) -> Run {
        Run::from_steps(std::mem::take(&mut self.steps))
    }
}
