//! Live occupancy turnover.
//!
//! Every fixed interval each plain slot independently flips
//! `Available ↔ Occupied` with a configured probability, simulating vehicles
//! coming and going.  `Reserved`, `Pwd`, and `Ev` designations are stable —
//! a flip only ever exchanges the two plain states.  This is a display
//! effect, not a consistency mechanism: nothing downstream depends on a flip
//! landing on a particular tick.
//!
//! Each slot draws from its own [`SlotRng`] stream, so a slot's turnover
//! history depends only on the seed and its ID — never on how many other
//! slots exist or the order they are polled in.

use lot_core::{SlotCategory, SlotId, SlotRng, Tick};
use lot_map::ParkingLot;

use crate::error::SimResult;

/// Interval-driven availability flipper.
pub struct OccupancySim {
    interval_ticks:   u64,
    flip_probability: f64,
    /// One independent stream per slot, indexed by `SlotId`.
    rngs: Vec<SlotRng>,
}

impl OccupancySim {
    /// Build per-slot RNG streams for `slot_count` slots.
    pub fn new(
        seed:             u64,
        slot_count:       usize,
        interval_ticks:   u64,
        flip_probability: f64,
    ) -> Self {
        let rngs = (0..slot_count)
            .map(|i| SlotRng::new(seed, SlotId(i as u32)))
            .collect();
        Self {
            interval_ticks,
            flip_probability,
            rngs,
        }
    }

    #[inline]
    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    /// Advance the simulator to `now`.
    ///
    /// A no-op except when `now` lands on an interval boundary (tick 0 never
    /// fires — the first re-roll happens one full interval in).  Returns the
    /// IDs of the slots that flipped, for observers.
    pub fn tick(&mut self, now: Tick, lot: &mut ParkingLot) -> SimResult<Vec<SlotId>> {
        if now == Tick::ZERO || !now.is_multiple_of(self.interval_ticks) {
            return Ok(Vec::new());
        }

        let mut flipped = Vec::new();
        for i in 0..self.rngs.len() {
            let id = SlotId(i as u32);
            let Some(slot) = lot.get(id) else { continue };
            let next = match slot.category {
                SlotCategory::Available => SlotCategory::Occupied,
                SlotCategory::Occupied  => SlotCategory::Available,
                // Designated slots never churn.
                _ => continue,
            };
            if self.rngs[i].gen_bool(self.flip_probability) {
                lot.set_category(id, next)?;
                flipped.push(id);
            }
        }
        Ok(flipped)
    }
}
