//! `lot-scene` — what to draw and what to record.
//!
//! The session core never touches a rendering technology; this crate turns a
//! [`NavSession`][lot_sim::NavSession] into plain data two kinds of consumer
//! understand:
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`shape`]     | `Shape`, `Scene` — positioned primitives in paint order  |
//! | [`scene`]     | `build_scene` — session → `Scene`                        |
//! | [`telemetry`] | `TelemetryRow`, `CsvTelemetry` — per-tick CSV recording  |
//! | [`error`]     | `SceneError`, `SceneResult<T>`                           |
//!
//! A renderer draws the `Scene` shape list front to back; a debugging or
//! replay tool tails the telemetry CSV.  Neither feeds anything back into
//! the session.

pub mod error;
pub mod scene;
pub mod shape;
pub mod telemetry;


pub use error::{SceneError, SceneResult};
pub use scene::build_scene;
pub use shape::{DoorKind, Scene, Shape};
pub use telemetry::{CsvTelemetry, TelemetryRow};
