//! # Sortscope
//!
//! `sortscope` runs small sorting algorithms over integer arrays and records every
//! meaningful state transition as an ordered, replayable trace of [`Step`]s.
//!
//! It is built for teaching the **hybrid quicksort** strategy: Lomuto quicksort that
//! falls back to insertion sort once a subarray holds [`INSERTION_THRESHOLD`] elements
//! or fewer. Pure quicksort and pure insertion sort are available for comparison.
//!
//! ## Key Features
//!
//! - **Owned snapshots**: Every [`Step`] holds its own copy of the array, the highlighted
//!   indices and the sorted-index set, so a trace can be scrubbed in any order.
//! - **Exact counters**: Cumulative comparison and swap counts are attached to every step.
//! - **Deterministic**: The same input and [`Strategy`] always produce the same [`Run`].
//! - **Bounded stack**: Quicksort ranges live on an explicit work-list, so adversarial
//!   (already sorted) inputs cannot overflow the call stack.
//!
//! ## Usage
//!
//! ```rust
//! use sortscope::{sort, Algorithm, Strategy};
//!
//! let run = sort(&[64, 34, 25, 12, 22, 11, 90], Strategy::Hybrid);
//!
//! let last = run.final_step();
//! assert_eq!(last.array, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(last.active_algorithm, Algorithm::Complete);
//! assert_eq!(last.sorted.len(), 7);
//! ```
//!
//! ### Driving a front end
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let input = GeneratorConfig::with_len(25).generate().unwrap();
//! let run = sort(&input, Strategy::Hybrid);
//!
//! let mut cursor = Playback::new(run.len());
//! cursor.toggle_play();
//! while cursor.tick() {
//!     let _shown = &run[cursor.current()];
//! }
//! assert!(cursor.is_at_end());
//! ```
//!
//! ## Complexity
//!
//! - **Comparisons**: O(N log N) on average, O(N²) for sorted or adversarial input
//!   (the pivot is always the last element of the range).
//! - **Memory**: O(N) per recorded step, since every step copies the array.

pub mod algo;
pub mod core;
pub mod error;
pub mod generate;
pub mod input;
pub mod playback;
pub mod recorder;

pub use algo::{SortEngine, sort, sort_named};
pub use crate::core::{Algorithm, INSERTION_THRESHOLD, Run, Stats, Step, Strategy, Value};
pub use error::SortError;
pub use generate::{GeneratorConfig, generate_random_array};

pub mod prelude {
    pub use crate::algo::{SortEngine, sort, sort_named};
    pub use crate::core::{Algorithm, Run, Stats, Step, Strategy, Value};
    pub use crate::error::SortError;
    pub use crate::generate::{GeneratorConfig, generate_random_array};
    pub use crate::input::parse_custom_array;
    pub use crate::playback::Playback;
}
