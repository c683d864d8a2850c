//! Session events — everything the outside world can ask the session to do.

use lot_core::{CategoryFilter, Point, SlotId};

use crate::state::{AutoStrategy, NavMode};

/// An input to the session reducer.
///
/// Events are produced by the embedding application (tap handlers, buttons,
/// toggles) and consumed by [`NavSession::apply`][crate::NavSession::apply].
/// Events that don't make sense in the current phase are ignored rather than
/// rejected — a tap during a drive is simply dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A tap at lot coordinates; resolves to a slot via hit-testing.
    /// Manual mode only.
    TapAt(Point),

    /// Select a specific slot by ID.  Manual mode only; the slot must be
    /// open and match the active filter.
    SelectSlot(SlotId),

    /// Begin driving to the selected slot.  Manual mode only.
    StartNavigation,

    /// Abandon an in-flight drive.  Keeps the selection when there is one.
    CancelNavigation,

    /// Leave a parked state and hand control back to the user.
    ChangeSlot,

    /// Switch between auto and manual.  Resets any selection or drive.
    SetMode(NavMode),

    /// Restrict which slots manual selection accepts.
    SetFilter(CategoryFilter),

    /// Change the origin automatic picks minimize distance from.
    SetStrategy(AutoStrategy),

    // ── Camera ────────────────────────────────────────────────────────────
    ZoomIn,
    ZoomOut,
    /// Snap the camera back onto the vehicle.
    Recenter,
}
