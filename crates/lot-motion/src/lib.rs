//! `lot-motion` — turning a planned path and a clock into a moving vehicle.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`sample`] | `Pose`, `PathSample`, arc-length sampling along a polyline |
//! | [`drive`]  | `DriveTimer` — elapsed ticks → progress fraction           |
//! | [`stats`]  | `NavStats` — speed / remaining distance / ETA / fuel saved |
//!
//! Everything here is a pure function over value types: same input, same
//! output, no hidden clocks.  The session crate owns the tick loop and calls
//! in; tests scrub progress values directly.
//!
//! This crate defines no error type on purpose — degenerate inputs (empty
//! paths, zero-length paths, out-of-range progress) produce guarded defaults
//! rather than failures, because callers poll these functions every frame.

pub mod drive;
pub mod sample;
pub mod stats;


pub use drive::DriveTimer;
pub use sample::{path_length, sample_path, PathSample, Pose, SPRITE_HEADING_OFFSET_DEG};
pub use stats::NavStats;
