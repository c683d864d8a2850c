//! Session observer trait for progress reporting and data collection.

use lot_core::{SlotId, Tick};
use lot_map::ParkingLot;

use crate::state::{NavPhase, SessionState};

/// Callbacks invoked by [`NavSession::tick`][crate::NavSession::tick] at key
/// points in the frame.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — phase printer
///
/// ```rust,ignore
/// struct PhasePrinter;
///
/// impl SessionObserver for PhasePrinter {
///     fn on_phase_change(&mut self, tick: Tick, from: NavPhase, to: NavPhase) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with read-only access to the full
    /// session state and lot, so writers can record a snapshot without the
    /// session knowing about any specific output format.
    fn on_tick_end(&mut self, _tick: Tick, _state: &SessionState, _lot: &ParkingLot) {}

    /// Called whenever the phase at the end of a tick differs from the phase
    /// at the end of the previous tick (covers event-driven transitions too).
    fn on_phase_change(&mut self, _tick: Tick, _from: NavPhase, _to: NavPhase) {}

    /// Called when the occupancy simulator flipped at least one slot.
    fn on_slot_flips(&mut self, _tick: Tick, _flipped: &[SlotId]) {}

    /// Called once when a drive completes and the vehicle parks.
    fn on_parked(&mut self, _tick: Tick, _slot: SlotId) {}
}

/// A [`SessionObserver`] that does nothing.  Use when you need to call
/// `tick` but don't want callbacks.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
