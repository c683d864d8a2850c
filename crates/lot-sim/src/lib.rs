//! `lot-sim` — the navigation session: a deterministic state machine driving
//! one vehicle from the entrance into a chosen slot.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`config`]    | `SessionConfig` — durations, probabilities, seed          |
//! | [`state`]     | `NavPhase`, `NavMode`, `AutoStrategy`, `SessionState`     |
//! | [`event`]     | `SessionEvent` — everything the outside world can request |
//! | [`session`]   | `NavSession` — the reducer and the per-frame tick loop    |
//! | [`occupancy`] | `OccupancySim` — live slot turnover                       |
//! | [`camera`]    | `Camera` — follow/zoom viewport state                     |
//! | [`observer`]  | `SessionObserver` callbacks, `NoopObserver`               |
//! | [`builder`]   | `SessionBuilder`                                          |
//! | [`error`]     | `SimError`, `SimResult<T>`                                |
//!
//! # Execution model
//!
//! Single-threaded and event-driven.  All external input arrives as a
//! [`SessionEvent`] through [`NavSession::apply`]; time arrives as
//! [`NavSession::tick`] calls, one per animation frame.  Both mutate one
//! explicit [`SessionState`], so every transition is atomic with respect to
//! the caller and the whole machine is testable without a renderer or a real
//! clock.
//!
//! # Phase diagram
//!
//! ```text
//!            tap / select            start
//!   Idle ──────────────────► SlotSelected ─────► Navigating ──► Parked
//!    ▲        (manual)            ▲    ◄───────────┘   │           │
//!    │                            └──── cancel ────────┘           │
//!    └────────────────── change slot / mode toggle ────────────────┘
//! ```
//!
//! Auto mode skips `SlotSelected`: whenever the session is `Idle` it polls
//! the nearest-slot selector and jumps straight to `Navigating` on a hit.

pub mod builder;
pub mod camera;
pub mod config;
pub mod error;
pub mod event;
pub mod observer;
pub mod occupancy;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SessionBuilder;
pub use camera::{Camera, Viewport};
pub use config::SessionConfig;
pub use error::{SimError, SimResult};
pub use event::SessionEvent;
pub use observer::{NoopObserver, SessionObserver};
pub use occupancy::OccupancySim;
pub use session::NavSession;
pub use state::{AutoStrategy, NavMode, NavPhase, SessionState};
