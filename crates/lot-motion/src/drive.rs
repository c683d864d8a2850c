//! Per-drive progress timing.

use lot_core::Tick;

/// The timing state of a single navigation run.
///
/// A drive departs at `departure_tick` and arrives at `arrival_tick`; the
/// fraction completed at any tick is a pure function of the three values, so
/// the animation driver can be a frame callback, a timer, or a test loop —
/// the timer itself never reads a clock.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveTimer {
    /// Tick at which the drive began.
    pub departure_tick: Tick,
    /// Tick at which the vehicle reaches the slot center.
    pub arrival_tick: Tick,
}

impl DriveTimer {
    /// Start a drive at `now` lasting `duration_ticks` (at least one tick, so
    /// progress always advances).
    #[inline]
    pub fn start(now: Tick, duration_ticks: u64) -> Self {
        Self {
            departure_tick: now,
            arrival_tick:   now + duration_ticks.max(1),
        }
    }

    /// Fraction of the drive completed at `now`, in `[0.0, 1.0]`.
    ///
    /// Returns `1.0` for a degenerate window (`arrival <= departure`).
    pub fn progress(&self, now: Tick) -> f32 {
        if self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.since(self.departure_tick) as f32;
        let total   = (self.arrival_tick - self.departure_tick) as f32;
        (elapsed / total).min(1.0)
    }

    /// `true` once the drive has completed at `now`.
    #[inline]
    pub fn done(&self, now: Tick) -> bool {
        now >= self.arrival_tick
    }

    /// Ticks still to go at `now` (zero once arrived).
    #[inline]
    pub fn remaining_ticks(&self, now: Tick) -> u64 {
        self.arrival_tick.since(now)
    }
}
