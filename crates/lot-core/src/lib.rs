//! `lot-core` — foundational types for the `rust_lot` parking navigation core.
//!
//! This crate is a dependency of every other `lot-*` crate.  It intentionally
//! has no `lot-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `SlotId`, `ColumnId`                                  |
//! | [`geo`]      | `Point`, `Rect`, Euclidean distance                   |
//! | [`category`] | `SlotCategory`, `CategoryFilter`                      |
//! | [`time`]     | `Tick`, `SimClock`                                    |
//! | [`rng`]      | `SlotRng` (per-slot), `SimRng` (session)              |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod category;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{CategoryFilter, SlotCategory};
pub use error::{CoreError, CoreResult};
pub use geo::{Point, Rect};
pub use ids::{ColumnId, SlotId};
pub use rng::{SimRng, SlotRng};
pub use time::{SimClock, Tick};
