//! Deterministic per-slot and session-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each slot gets its own independent `SmallRng` seeded by:
//!
//!   seed = session_seed XOR (slot_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive slot IDs uniformly across the seed space.
//! This means:
//!
//! - Slots never share RNG state, so one slot's occupancy flips never depend
//!   on how many other slots were polled before it.
//! - Growing a layout (more columns, more rows) does not disturb the streams
//!   of existing slots — runs are reproducible as layouts evolve.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::SlotId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SlotRng ──────────────────────────────────────────────────────────────────

/// Per-slot deterministic RNG.
///
/// Create one per slot at session init; store in a `Vec<SlotRng>` parallel to
/// the slot vector.  Used by the occupancy simulator for independent
/// availability flips.
pub struct SlotRng(SmallRng);

impl SlotRng {
    /// Seed deterministically from the session's seed and a slot ID.
    pub fn new(session_seed: u64, slot: SlotId) -> Self {
        let seed = session_seed ^ (slot.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SlotRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Session-level RNG for global draws (initial category assignment and any
/// other lot-wide randomness).
///
/// Single-threaded by design; give derived subsystems their own stream via
/// [`child`](Self::child) when independent sequences matter.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// giving the layout generator and the session loop independent streams.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
