//! Planning trait and the default lane-centerline planner.
//!
//! # Pluggability
//!
//! The session calls planning via the [`Planner`] trait, so applications can
//! swap in custom implementations (multi-level ramps, congestion-aware
//! routing) without touching the session core.  The default [`LanePlanner`]
//! is sufficient for single-level lots.
//!
//! # Route shape
//!
//! All travel before the final entry segment follows lane centerlines: up or
//! down to the top lane, across to the target section's lane, down that lane
//! to the entry row, then the short entry and parking moves.  A path never
//! cuts through another slot's footprint.

use lot_core::{Point, SlotId};

use crate::error::MapResult;
use crate::lot::ParkingLot;

// ── Path ─────────────────────────────────────────────────────────────────────

/// An ordered waypoint sequence from an origin to a slot center.
///
/// The constructor drops consecutive duplicate points, so a start already on
/// a routing lane yields a shorter list and downstream arc-length sampling
/// never sees a zero-length segment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Build a path, collapsing consecutive duplicate waypoints.
    pub fn new(points: Vec<Point>) -> Self {
        let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if deduped.last() != Some(&p) {
                deduped.push(p);
            }
        }
        Self { points: deduped }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` if the path has no segment to travel.
    pub fn is_trivial(&self) -> bool {
        self.points.len() < 2
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Total Euclidean length over all segments.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable path planner.
pub trait Planner {
    /// Compute a waypoint path from `start` to the center of `target`.
    ///
    /// The first point is always `start`; the last is the slot center.
    fn plan(&self, lot: &ParkingLot, start: Point, target: SlotId) -> MapResult<Path>;
}

// ── LanePlanner ──────────────────────────────────────────────────────────────

/// Deterministic lane-centerline planner.
///
/// Waypoints, in order:
///
/// 1. `start`
/// 2. `(start.x, top_lane_y)` — omitted when the start already sits on the
///    top lane (the constructor's dedup also covers coincident points)
/// 3. `(lane_x, top_lane_y)` — across the top lane to the target's section
/// 4. `(lane_x, entry.y)` — down the section lane to the entry row
/// 5. `entry` — lateral move to the slot mouth
/// 6. `center` — the final perpendicular parking move
pub struct LanePlanner;

impl Planner for LanePlanner {
    fn plan(&self, lot: &ParkingLot, start: Point, target: SlotId) -> MapResult<Path> {
        let slot = lot.slot(target)?;
        let top_y = lot.top_lane_y;

        let mut points = Vec::with_capacity(6);
        points.push(start);
        if start.y != top_y {
            points.push(Point::new(start.x, top_y));
        }
        points.push(Point::new(slot.lane_x, top_y));
        points.push(Point::new(slot.lane_x, slot.entry.y));
        points.push(slot.entry);
        points.push(slot.center);

        Ok(Path::new(points))
    }
}
