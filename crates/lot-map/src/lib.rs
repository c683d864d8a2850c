//! `lot-map` — parking lot layout, spatial queries, and path planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`layout`]  | `LayoutConfig`, `ParkingSlot`, `Column`, the generator      |
//! | [`lot`]     | `ParkingLot` (slot vector + R-tree + code lookup)           |
//! | [`planner`] | `Planner` trait, `Path`, `LanePlanner`                      |
//! | [`error`]   | `MapError`, `MapResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod layout;
pub mod lot;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{MapError, MapResult};
pub use layout::{CategoryWeights, Column, LayoutConfig, ParkingSlot, SlotSide};
pub use lot::ParkingLot;
pub use planner::{LanePlanner, Path, Planner};
