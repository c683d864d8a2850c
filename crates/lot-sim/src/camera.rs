//! Viewport camera: follow smoothing, zoom clamps, and the parked close-up.

use lot_core::Point;

/// Zoom applied when a fresh session opens.
const DEFAULT_ZOOM: f32 = 0.85;
/// Per-step zoom delta for the zoom buttons.
const ZOOM_STEP: f32 = 0.15;
/// Interactive zoom clamp.
const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 1.5;
/// Close-up zoom applied when the vehicle parks.
const PARKED_ZOOM: f32 = 2.5;
/// Exponential follow factor per tick — the camera covers 8 % of the gap to
/// its target each frame.
const FOLLOW_SMOOTHING: f32 = 0.08;

/// The visible window the camera centers content within, in screen units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ── Camera ───────────────────────────────────────────────────────────────────

/// Pan/zoom state mapping lot coordinates to the viewport.
///
/// `offset` is the translation applied after scaling by `zoom`: a lot point
/// `p` lands on screen at `p * zoom + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pub offset: Point,
    pub zoom:   f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset: Point::ZERO,
            zoom:   DEFAULT_ZOOM,
        }
    }

    /// The offset that would center `target` in `viewport` at the current zoom.
    fn centered_offset(&self, target: Point, viewport: Viewport) -> Point {
        Point::new(
            -target.x * self.zoom + viewport.width / 2.0,
            -target.y * self.zoom + viewport.height / 2.0,
        )
    }

    /// Jump so `target` is centered immediately.
    pub fn center_on(&mut self, target: Point, viewport: Viewport) {
        self.offset = self.centered_offset(target, viewport);
    }

    /// Ease toward centering `target` — called once per tick while driving so
    /// the camera trails the vehicle instead of locking to it.
    pub fn follow(&mut self, target: Point, viewport: Viewport) {
        let want = self.centered_offset(target, viewport);
        self.offset = Point::new(
            self.offset.x + (want.x - self.offset.x) * FOLLOW_SMOOTHING,
            self.offset.y + (want.y - self.offset.y) * FOLLOW_SMOOTHING,
        );
    }

    /// Close-up on the parked vehicle.
    pub fn parked_close_up(&mut self, target: Point, viewport: Viewport) {
        self.zoom = PARKED_ZOOM;
        self.center_on(target, viewport);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
