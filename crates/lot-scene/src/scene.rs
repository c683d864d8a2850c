//! Build a frame's shape list from a session.
//!
//! Painter's order: road bands, lane guides, slots, column markers, doors,
//! the route, then the vehicle on top.  Road geometry is derived from slot
//! extents rather than stored separately, so the scene always matches
//! whatever layout generated the lot.

use lot_core::{Point, Rect};
use lot_map::{Planner, SlotSide};
use lot_sim::NavSession;

use crate::shape::{DoorKind, Scene, Shape};

/// Per-column band geometry derived from slot extents.
struct ColumnBand {
    lane_x:     f32,
    left_edge:  f32,
    right_edge: f32,
    bottom:     f32,
}

/// Assemble the full shape list for the current frame.
pub fn build_scene<P: Planner>(session: &NavSession<P>) -> Scene {
    let lot = &session.lot;
    let state = &session.state;
    let mut shapes = Vec::with_capacity(lot.len() + 16);

    // ── Derive road geometry from slot extents ────────────────────────────
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut bands: Vec<ColumnBand> = Vec::with_capacity(lot.columns().len());

    for column in lot.columns() {
        let mut left_edge = f32::NEG_INFINITY;
        let mut right_edge = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        let mut lane_x = None;

        for slot in lot.iter().filter(|s| s.column == column.id) {
            min_x = min_x.min(slot.rect.x);
            max_x = max_x.max(slot.rect.x + slot.rect.width);
            bottom = bottom.max(slot.rect.y + slot.rect.height);
            lane_x = Some(slot.lane_x);
            match slot.side {
                SlotSide::Left  => left_edge = left_edge.max(slot.rect.x + slot.rect.width),
                SlotSide::Right => right_edge = right_edge.min(slot.rect.x),
            }
        }

        if let Some(lane_x) = lane_x {
            if left_edge.is_finite() && right_edge.is_finite() {
                bands.push(ColumnBand { lane_x, left_edge, right_edge, bottom });
            }
        }
    }

    let lane_width = bands
        .first()
        .map_or(0.0, |b| b.right_edge - b.left_edge);

    // ── Roads ─────────────────────────────────────────────────────────────
    if lane_width > 0.0 {
        // Top lane band, wide enough to reach the entrance and exit.
        let span_max = max_x.max(lot.entrance.x).max(lot.exit.x);
        shapes.push(Shape::Road {
            rect: Rect::new(
                min_x,
                lot.top_lane_y - lane_width / 2.0,
                span_max - min_x,
                lane_width,
            ),
        });
        shapes.push(Shape::LaneLine {
            from: Point::new(min_x, lot.top_lane_y),
            to:   Point::new(span_max, lot.top_lane_y),
        });

        for band in &bands {
            shapes.push(Shape::Road {
                rect: Rect::new(
                    band.left_edge,
                    lot.top_lane_y,
                    band.right_edge - band.left_edge,
                    band.bottom - lot.top_lane_y,
                ),
            });
            shapes.push(Shape::LaneLine {
                from: Point::new(band.lane_x, lot.top_lane_y),
                to:   Point::new(band.lane_x, band.bottom),
            });
        }
    }

    // ── Slots ─────────────────────────────────────────────────────────────
    for slot in lot.iter() {
        shapes.push(Shape::SlotRect {
            id:           slot.id,
            rect:         slot.rect,
            category:     slot.category,
            label:        slot.label.clone(),
            rotation_deg: slot.rotation_deg,
            selected:     state.selected == Some(slot.id),
        });
    }

    // ── Markers and doors ─────────────────────────────────────────────────
    for column in lot.columns() {
        shapes.push(Shape::ColumnMarker {
            letter: column.letter,
            at:     column.marker,
            radius: column.marker_radius,
        });
    }
    shapes.push(Shape::Door { at: lot.entrance, kind: DoorKind::Entrance });
    shapes.push(Shape::Door { at: lot.exit, kind: DoorKind::Exit });
    shapes.push(Shape::Door { at: lot.venue_door, kind: DoorKind::Venue });

    // ── Route ─────────────────────────────────────────────────────────────
    //
    // The active drive's path wins; otherwise a selection shows its preview.
    if let Some(path) = &state.path {
        shapes.push(Shape::PathLine {
            points: path.points().to_vec(),
            passed: state.passed_waypoints,
        });
    } else if let Some(preview) = session.preview_path() {
        shapes.push(Shape::PathLine {
            points: preview.points().to_vec(),
            passed: 0,
        });
    }

    // ── Vehicle ───────────────────────────────────────────────────────────
    shapes.push(Shape::CarMarker { pose: state.car });

    Scene { shapes }
}
