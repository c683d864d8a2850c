//! Arc-length sampling along a waypoint polyline.
//!
//! # Contract
//!
//! Given waypoints and a progress fraction `p`, [`sample_path`] walks
//! cumulative Euclidean segment lengths, finds the segment containing the
//! target arc length `p * total`, and linearly interpolates within it.
//! Position is proportional to **distance traveled**, not waypoint index, so
//! the marker moves at constant speed regardless of how waypoints are spaced.
//!
//! Heading is the direction of travel of the containing segment
//! (`atan2(dy, dx)` in degrees) plus a fixed 90° offset so a sprite drawn
//! facing up aligns with its travel direction: moving up → 0°, right → 90°,
//! down → 180°, left → 270°.
//!
//! The function is pure and total.  Degenerate inputs return guarded
//! defaults instead of failing: no waypoints → the origin with zero heading;
//! one waypoint → that point; a zero-length polyline → its first point.

use lot_core::Point;

/// Rotation added to the segment direction so an up-facing sprite points
/// along the travel direction.
pub const SPRITE_HEADING_OFFSET_DEG: f32 = 90.0;

/// A position plus the direction a vehicle sprite should face.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position:    Point,
    pub heading_deg: f32,
}

impl Pose {
    #[inline]
    pub fn at(position: Point) -> Self {
        Self { position, heading_deg: 0.0 }
    }
}

/// The result of sampling a path: the pose plus the index of the last
/// waypoint passed (used to render traversed waypoints differently).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSample {
    pub pose:    Pose,
    pub segment: usize,
}

/// Total Euclidean length of the polyline.
pub fn path_length(points: &[Point]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Sample the polyline at progress fraction `p` (clamped to [0, 1]).
pub fn sample_path(points: &[Point], progress: f32) -> PathSample {
    match points {
        []  => return PathSample::default(),
        [p] => return PathSample { pose: Pose::at(*p), segment: 0 },
        _   => {}
    }

    let mut segment_lengths = Vec::with_capacity(points.len() - 1);
    let mut total = 0.0f32;
    for w in points.windows(2) {
        let len = w[0].distance(w[1]);
        segment_lengths.push(len);
        total += len;
    }

    if total == 0.0 {
        // All waypoints coincide.
        return PathSample { pose: Pose::at(points[0]), segment: 0 };
    }

    let target = progress.clamp(0.0, 1.0) * total;
    let mut accumulated = 0.0f32;

    for (i, &len) in segment_lengths.iter().enumerate() {
        let is_last = i == segment_lengths.len() - 1;
        if target <= accumulated + len || is_last {
            let t = if len > 0.0 { (target - accumulated) / len } else { 0.0 };
            let a = points[i];
            let b = points[i + 1];
            let position = Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            let heading_deg =
                (b.y - a.y).atan2(b.x - a.x).to_degrees() + SPRITE_HEADING_OFFSET_DEG;
            return PathSample {
                pose: Pose { position, heading_deg },
                segment: i,
            };
        }
        accumulated += len;
    }

    // Unreachable: the last segment always matches above.  Kept as a guard
    // so float edge cases degrade to the path end instead of panicking.
    PathSample {
        pose: Pose::at(points[points.len() - 1]),
        segment: points.len() - 1,
    }
}
