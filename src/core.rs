//! Core types shared by the recorder and the sort engine.
//!
//! This module defines:
//! - [`Strategy`]: Which top-level sorting strategy a run uses.
//! - [`Algorithm`]: Which sub-algorithm produced a given step.
//! - [`Step`]: One immutable snapshot of the sort.
//! - [`Run`]: The ordered list of steps produced by one invocation.

use crate::error::SortError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Element type of every sequence the engine sorts.
pub type Value = i64;

/// Subarray size at or below which the hybrid strategy switches to insertion sort.
pub const INSERTION_THRESHOLD: usize = 10;

/// Top-level sorting strategy.
///
/// Parsing from text is case-insensitive and rejects unknown names:
///
/// ```
/// use sortscope::Strategy;
///
/// assert_eq!("Hybrid".parse::<Strategy>().unwrap(), Strategy::Hybrid);
/// assert!("bogosort".parse::<Strategy>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Quicksort that hands subarrays of at most [`INSERTION_THRESHOLD`] elements to insertion sort.
    #[default]
    Hybrid,
    /// Lomuto quicksort all the way down.
    Quicksort,
    /// Insertion sort over the whole array.
    Insertion,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Hybrid, Strategy::Quicksort, Strategy::Insertion];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Hybrid => "hybrid",
            Strategy::Quicksort => "quicksort",
            Strategy::Insertion => "insertion",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| SortError::InvalidStrategy(name.to_string()))
    }
}

/// The sub-algorithm that produced a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Quicksort,
    Insertion,
    /// Only ever set on the terminal step of a run.
    Complete,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Quicksort => "quicksort",
            Algorithm::Insertion => "insertion",
            Algorithm::Complete => "complete",
        })
    }
}

/// Cumulative counters as of a given step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// One immutable snapshot of an in-progress sort.
///
/// Every step owns its own copy of the array and index sets; nothing aliases
/// the engine's working buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Full array contents at this instant.
    pub array: Vec<Value>,
    /// Zero to two indices being compared or moved, in highlight order.
    pub comparing: Vec<usize>,
    /// Indices known to hold their final value.
    pub sorted: BTreeSet<usize>,
    pub active_algorithm: Algorithm,
    /// Human-readable narration of what just happened.
    pub message: String,
    pub stats: Stats,
}

impl Step {
    #[inline]
    pub fn is_sorted_index(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }

    #[inline]
    pub fn is_comparing(&self, index: usize) -> bool {
        self.comparing.contains(&index)
    }
}

/// The ordered, non-empty list of steps produced by one engine invocation.
///
/// The engine always records at least a starting step and a completion
/// step; deserializing or converting an empty list is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Run {
    steps: Vec<Step>,
}

impl Run {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "a run always has at least two steps");
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A run is never empty, so this only returns `false`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// The starting snapshot, holding the unsorted input.
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// The terminal `complete` snapshot, holding the sorted array.
    pub fn final_step(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Final cumulative counters of the run.
    pub fn stats(&self) -> Stats {
        self.final_step().stats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl TryFrom<Vec<Step>> for Run {
    type Error = SortError;

    fn try_from(steps: Vec<Step>) -> Result<Self, Self::Error> {
        if steps.is_empty() {
            return Err(SortError::EmptyRun);
        }
        Ok(Self { steps })
    }
}

impl<'de> Deserialize<'de> for Run {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let steps = Vec::<Step>::deserialize(deserializer)?;
        Run::try_from(steps).map_err(serde::de::Error::custom)
    }
}

impl Index<usize> for Run {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl IntoIterator for Run {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
