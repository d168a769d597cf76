//! Random input arrays for fresh runs.

use crate::core::Value;
use crate::error::SortError;
use rand::Rng;
use serde::Deserialize;

/// Default number of generated elements.
pub const DEFAULT_LEN: usize = 20;
/// Default inclusive lower bound of generated values.
pub const DEFAULT_MIN: Value = 10;
/// Default inclusive upper bound of generated values.
pub const DEFAULT_MAX: Value = 100;

/// Parameters for [`GeneratorConfig::generate`].
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial document such as `{"len": 35}` is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub len: usize,
    pub min: Value,
    pub max: Value,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl GeneratorConfig {
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Checks that `min <= max`.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.min > self.max {
            return Err(SortError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Generates an array with the thread-local RNG.
    pub fn generate(&self) -> Result<Vec<Value>, SortError> {
        self.generate_with(&mut rand::rng())
    }

    /// Generates an array from the given RNG, for reproducible inputs.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<Value>, SortError> {
        self.validate()?;
        Ok((0..self.len)
            .map(|_| rng.random_range(self.min..=self.max))
            .collect())
    }
}

/// Draws `len` values independently and uniformly from `[min, max]`.
///
/// Duplicates are allowed.
///
/// # Errors
///
/// Returns [`SortError::InvalidRange`] if `min > max`.
///
/// # Examples
///
/// ```
/// use sortscope::generate_random_array;
///
/// let values = generate_random_array(15, 10, 100).unwrap();
/// assert_eq!(values.len(), 15);
/// assert!(values.iter().all(|v| (10..=100).contains(v)));
/// ```
pub fn generate_random_array(len: usize, min: Value, max: Value) -> Result<Vec<Value>, SortError> {
    GeneratorConfig { len, min, max }.generate()
}
