//! Layout constants and the procedural lot generator.
//!
//! # Geometry
//!
//! A lot is a row of **sections**, one per lane column letter.  Each section
//! is two vertical stacks of slots facing each other across a central
//! vertical lane:
//!
//! ```text
//!   ── top lane ─────────────────────────────  y = top_lane_y
//!   [L1] |          | [R1]   [L1] |      ...
//!   [L2] |   lane   | [R2]   [L2] |
//!   [L3] |    A     | [R3]   [L3] |  lane B
//!    ...               ...
//! ```
//!
//! Horizontal travel happens on the top lane centerline; vertical travel on
//! each section's lane centerline.  Every slot precomputes its `entry` point
//! (on the lane side), its `center`, and the `lane_x` centerline serving it,
//! so the planner never re-derives section arithmetic.
//!
//! # Category assignment
//!
//! Initial categories come from a weighted draw (occupied 45 %, reserved 4 %,
//! pwd 4 %, remainder available — tunable via [`CategoryWeights`]), then two
//! zoning overrides are applied: the top `ev_rows` of the first column become
//! `Ev` (charging cluster near the entrance) and the bottom `pwd_rows` of
//! every column become `Pwd` (shortest walk to the venue door).
//!
//! Generation is pure construction from constants plus the supplied RNG:
//! same config + same seed → identical lot.

use lot_core::{ColumnId, Point, Rect, SimRng, SlotCategory, SlotId};

use crate::lot::ParkingLot;

// ── SlotSide ─────────────────────────────────────────────────────────────────

/// Which side of the section lane a slot sits on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotSide {
    Left,
    Right,
}

impl SlotSide {
    /// Single-letter code used in slot codes (`A-L3`, `B-R7`).
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            SlotSide::Left  => 'L',
            SlotSide::Right => 'R',
        }
    }
}

// ── ParkingSlot ──────────────────────────────────────────────────────────────

/// One parking slot.  Geometry is immutable after generation; only
/// `category` changes over a session's lifetime.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParkingSlot {
    pub id:       SlotId,
    pub category: SlotCategory,

    /// Routing code: `<column letter>-<L|R><row>` (row is 1-based), e.g. `A-L3`.
    pub code: String,
    /// Display label: `<column letter>-<n>` with odd `n` on the left side,
    /// even on the right, e.g. `A-5`.
    pub label: String,

    pub column: ColumnId,
    pub side:   SlotSide,
    /// 0-based row within the section stack.
    pub row: u32,

    /// Slot footprint.
    pub rect: Rect,
    /// Point on the lane side of the slot used to enter and exit.
    pub entry: Point,
    /// Geometric center of the footprint.
    pub center: Point,
    /// The vertical lane centerline serving this slot.
    pub lane_x: f32,
    /// Sprite rotation for the presentation layer (slots render sideways).
    pub rotation_deg: f32,
}

// ── Column ───────────────────────────────────────────────────────────────────

/// A lane-column marker — a rendering and grouping aid, not a routing
/// constraint beyond contributing its lane centerline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub id:     ColumnId,
    pub letter: char,
    /// Marker position: lane centerline, vertically centered on the stack.
    pub marker: Point,
    /// Radius of the painted marker circle.
    pub marker_radius: f32,
}

// ── CategoryWeights ──────────────────────────────────────────────────────────

/// Probabilities for the initial weighted category draw.  The remainder
/// (`1 - occupied - reserved - pwd`) becomes `Available`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryWeights {
    pub occupied: f64,
    pub reserved: f64,
    pub pwd:      f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            occupied: 0.45,
            reserved: 0.04,
            pwd:      0.04,
        }
    }
}

impl CategoryWeights {
    /// Map one uniform draw in [0, 1) to a category.
    fn draw(&self, roll: f64) -> SlotCategory {
        if roll < self.occupied {
            SlotCategory::Occupied
        } else if roll < self.occupied + self.reserved {
            SlotCategory::Reserved
        } else if roll < self.occupied + self.reserved + self.pwd {
            SlotCategory::Pwd
        } else {
            SlotCategory::Available
        }
    }
}

// ── LayoutConfig ─────────────────────────────────────────────────────────────

/// All layout constants.  `Default` reproduces the reference lot: two
/// sections (A, B), ten rows per side, forty slots total.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub slot_width:   f32,
    pub slot_height:  f32,
    pub slot_spacing: f32,
    /// Width of the vertical lane between a section's two slot stacks.
    pub road_width: f32,
    /// Horizontal gap between adjacent sections.
    pub section_gap: f32,
    /// Rows of slots per side per section.
    pub slots_per_section: u32,
    /// One section per letter, laid out left to right.
    pub column_letters: Vec<char>,
    /// Top-left of the first section's left slot stack.
    pub origin: Point,
    /// Centerline of the horizontal lane all routes traverse.
    pub top_lane_y: f32,
    /// Where vehicles appear; sits on the top lane.
    pub entrance: Point,
    /// Where vehicles leave the lot.
    pub exit: Point,
    /// Pedestrian door of the venue; origin for "nearest to door" selection.
    pub venue_door: Point,
    /// Radius of the painted column marker circle.
    pub column_marker_radius: f32,
    /// How far the entry point sits into the lane from the slot edge.
    pub entry_inset: f32,
    /// Top rows of the first column forced to `Ev`.
    pub ev_rows: u32,
    /// Bottom rows of every column forced to `Pwd`.
    pub pwd_rows: u32,
    pub weights: CategoryWeights,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slot_width:           72.0,
            slot_height:          120.0,
            slot_spacing:         12.0,
            road_width:           280.0,
            section_gap:          60.0,
            slots_per_section:    10,
            column_letters:       vec!['A', 'B'],
            origin:               Point::new(180.0, 250.0),
            top_lane_y:           100.0,
            entrance:             Point::new(900.0, 100.0),
            exit:                 Point::new(1_100.0, 100.0),
            venue_door:           Point::new(900.0, 1_700.0),
            column_marker_radius: 35.0,
            entry_inset:          10.0,
            ev_rows:              4,
            pwd_rows:             2,
            weights:              CategoryWeights::default(),
        }
    }
}

impl LayoutConfig {
    /// Full width of one section: two slot stacks, the lane, and the gap to
    /// the next section.
    #[inline]
    pub fn section_width(&self) -> f32 {
        self.road_width + 2.0 * self.slot_width + self.section_gap
    }

    /// Vertical pitch between consecutive rows.
    #[inline]
    pub fn row_pitch(&self) -> f32 {
        self.slot_height + self.slot_spacing
    }

    /// Total number of slots this config generates.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.column_letters.len() * self.slots_per_section as usize * 2
    }

    /// Generate a [`ParkingLot`] from this config.
    ///
    /// Slot IDs are assigned in generation order: per column, per row, left
    /// side before right.  Pure construction — no error conditions.
    pub fn generate(&self, rng: &mut SimRng) -> ParkingLot {
        let mut slots: Vec<ParkingSlot> = Vec::with_capacity(self.slot_count());
        let mut columns: Vec<Column> = Vec::with_capacity(self.column_letters.len());

        for (col_idx, &letter) in self.column_letters.iter().enumerate() {
            let column = ColumnId(col_idx as u16);
            let base_x = self.origin.x + col_idx as f32 * self.section_width();
            let lane_x = base_x + self.slot_width + self.road_width / 2.0;

            columns.push(Column {
                id: column,
                letter,
                marker: Point::new(
                    lane_x,
                    self.origin.y + self.slots_per_section as f32 * self.row_pitch() / 2.0,
                ),
                marker_radius: self.column_marker_radius,
            });

            for row in 0..self.slots_per_section {
                let y = self.origin.y + row as f32 * self.row_pitch();

                for side in [SlotSide::Left, SlotSide::Right] {
                    let rect_x = match side {
                        SlotSide::Left  => base_x,
                        SlotSide::Right => base_x + self.slot_width + self.road_width,
                    };
                    let rect = Rect::new(rect_x, y, self.slot_width, self.slot_height);
                    let entry_x = match side {
                        SlotSide::Left  => rect_x + self.slot_width + self.entry_inset,
                        SlotSide::Right => rect_x - self.entry_inset,
                    };
                    // Odd display numbers on the left, even on the right.
                    let display_n = match side {
                        SlotSide::Left  => row * 2 + 1,
                        SlotSide::Right => row * 2 + 2,
                    };

                    let id = SlotId(slots.len() as u32);
                    slots.push(ParkingSlot {
                        id,
                        category: self.weights.draw(rng.gen_range(0.0..1.0)),
                        code: format!("{letter}-{}{}", side.as_char(), row + 1),
                        label: format!("{letter}-{display_n}"),
                        column,
                        side,
                        row,
                        rect,
                        entry: Point::new(entry_x, y + self.slot_height / 2.0),
                        center: rect.center(),
                        lane_x,
                        rotation_deg: 90.0,
                    });
                }
            }
        }

        // Zoning overrides: EV cluster at the top of the first column, PWD
        // rows nearest the venue door at the bottom of every column.
        let pwd_from = self.slots_per_section.saturating_sub(self.pwd_rows);
        for slot in &mut slots {
            if slot.column == ColumnId(0) && slot.row < self.ev_rows {
                slot.category = SlotCategory::Ev;
            }
            if slot.row >= pwd_from {
                slot.category = SlotCategory::Pwd;
            }
        }

        ParkingLot::new(
            slots,
            columns,
            self.top_lane_y,
            self.entrance,
            self.exit,
            self.venue_door,
        )
    }
}
