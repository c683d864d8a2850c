//! Plain drawing primitives emitted for a presentation layer.
//!
//! Shapes carry lot-space coordinates; the renderer applies the session's
//! camera transform.  No drawing technology is implied — SVG, canvas, and
//! terminal renderers all consume the same list.

use lot_core::{Point, Rect, SlotCategory, SlotId};
use lot_motion::Pose;

/// Which door a [`Shape::Door`] marks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DoorKind {
    /// Where vehicles enter the lot.
    Entrance,
    /// Where vehicles leave.
    Exit,
    /// The pedestrian door of the venue.
    Venue,
}

/// One positioned primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A road band (the top lane or a section lane).
    Road { rect: Rect },

    /// A lane centerline guide.
    LaneLine { from: Point, to: Point },

    /// One parking slot.
    SlotRect {
        id:           SlotId,
        rect:         Rect,
        category:     SlotCategory,
        label:        String,
        rotation_deg: f32,
        selected:     bool,
    },

    /// The painted column letter circle.
    ColumnMarker {
        letter: char,
        at:     Point,
        radius: f32,
    },

    /// The active or previewed route.  Waypoints up to `passed` have been
    /// traversed and render dimmed.
    PathLine { points: Vec<Point>, passed: usize },

    /// The vehicle sprite.
    CarMarker { pose: Pose },

    /// An entrance/exit/venue door marker.
    Door { at: Point, kind: DoorKind },
}

/// A full frame's shapes in painter's order (draw front to back as listed).
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Count shapes matching a predicate — convenience for tests and debug
    /// overlays.
    pub fn count(&self, pred: impl Fn(&Shape) -> bool) -> usize {
        self.shapes.iter().filter(|s| pred(s)).count()
    }

    /// The path line, if this frame has one.
    pub fn path(&self) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| matches!(s, Shape::PathLine { .. }))
    }
}
