//! Timer-free playback cursor over a recorded [`Run`](crate::core::Run).
//!
//! The cursor only tracks which step is shown and whether playback is
//! running. Callers own the clock and call [`Playback::tick`] at whatever
//! cadence they display steps.

use serde::Deserialize;

/// Slider bounds for the delay between steps, in milliseconds.
pub const INTERVAL_MS_MIN: u64 = 100;
pub const INTERVAL_MS_MAX: u64 = 2000;
pub const INTERVAL_MS_STEP: u64 = 100;
pub const INTERVAL_MS_DEFAULT: u64 = 500;

/// Slider bounds for the size of generated arrays.
pub const ARRAY_LEN_MIN: usize = 10;
pub const ARRAY_LEN_MAX: usize = 50;
pub const ARRAY_LEN_STEP: usize = 5;

/// Display settings a front end keeps next to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub interval_ms: u64,
    pub array_len: usize,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            interval_ms: INTERVAL_MS_DEFAULT,
            array_len: crate::generate::DEFAULT_LEN,
        }
    }
}

impl PlaybackSettings {
    /// Snaps both values onto their slider grids.
    pub fn clamped(self) -> Self {
        Self {
            interval_ms: snap(
                self.interval_ms,
                INTERVAL_MS_MIN,
                INTERVAL_MS_MAX,
                INTERVAL_MS_STEP,
            ),
            array_len: snap(
                self.array_len as u64,
                ARRAY_LEN_MIN as u64,
                ARRAY_LEN_MAX as u64,
                ARRAY_LEN_STEP as u64,
            ) as usize,
        }
    }
}

fn snap(value: u64, min: u64, max: u64, step: u64) -> u64 {
    let clamped = value.clamp(min, max);
    min + (clamped - min) / step * step
}

/// Index state machine over a run of `len` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playback {
    len: usize,
    current: usize,
    playing: bool,
}

impl Playback {
    /// A paused cursor at step 0.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: false,
        }
    }

    /// Switches to a newly recorded run.
    pub fn load(&mut self, len: usize) {
        *self = Self::new(len);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_at_end(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Flips between playing and paused; playing from the last step rewinds first.
    pub fn toggle_play(&mut self) {
        if self.is_at_end() {
            self.current = 0;
        }
        self.playing = !self.playing;
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.playing = false;
    }

    /// Moves back one step and pauses. Returns `false` at step 0.
    pub fn step_back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.playing = false;
        true
    }

    /// Moves forward one step and pauses. Returns `false` at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current += 1;
        self.playing = false;
        true
    }

    /// Advances one step while playing; stops on reaching the last step.
    ///
    /// Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        if self.is_at_end() {
            self.playing = false;
            return false;
        }
        self.current += 1;
        if self.is_at_end() {
            self.playing = false;
        }
        true
    }
}
