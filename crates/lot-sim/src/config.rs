//! Session configuration.

use lot_core::SimClock;

use crate::camera::Viewport;
use crate::error::{SimError, SimResult};
use crate::state::{AutoStrategy, NavMode};

/// Top-level session configuration.
///
/// All durations are wall-clock milliseconds; the session converts them to
/// tick counts through `tick_duration_ms`, so changing the frame rate never
/// changes how long a drive takes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Master RNG seed.  The same seed always produces identical layouts and
    /// occupancy turnover.
    pub seed: u64,

    /// Milliseconds per tick.  Default: 50 (20 frames per second).
    pub tick_duration_ms: u32,

    /// How long a drive from selection to the slot center takes.
    /// Default: 9,000 ms.
    pub nav_duration_ms: u32,

    /// How often the occupancy simulator re-rolls slot availability.
    /// Default: 5,000 ms.
    pub occupancy_interval_ms: u32,

    /// Per-slot probability of an availability flip at each interval.
    /// Default: 0.25.
    pub flip_probability: f64,

    /// Paid parking allowance counted down after arrival.  Default: 4 h.
    pub parking_allowance_secs: u32,

    /// Mode the session starts in.  Default: auto.
    pub start_mode: NavMode,

    /// Strategy used for automatic slot picks.  Default: nearest entrance.
    pub start_strategy: AutoStrategy,

    /// Viewport the camera centers within.
    pub viewport: Viewport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed:                   0,
            tick_duration_ms:       50,
            nav_duration_ms:        9_000,
            occupancy_interval_ms:  5_000,
            flip_probability:       0.25,
            parking_allowance_secs: 4 * 3_600,
            start_mode:             NavMode::Auto,
            start_strategy:         AutoStrategy::NearestEntrance,
            viewport:               Viewport::new(390.0, 844.0),
        }
    }
}

impl SessionConfig {
    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(SimError::Config("tick_duration_ms must be nonzero".into()));
        }
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(SimError::Config(format!(
                "flip_probability {} outside [0, 1]",
                self.flip_probability
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this session.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }

    /// Drive duration in ticks (rounds up — a drive never finishes early).
    #[inline]
    pub fn nav_duration_ticks(&self) -> u64 {
        (self.nav_duration_ms as u64).div_ceil(self.tick_duration_ms as u64)
    }

    /// Occupancy re-roll interval in ticks.
    #[inline]
    pub fn occupancy_interval_ticks(&self) -> u64 {
        (self.occupancy_interval_ms as u64).div_ceil(self.tick_duration_ms as u64)
    }
}
