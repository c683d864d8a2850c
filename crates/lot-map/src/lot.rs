//! The `ParkingLot` model: slot storage, spatial hit-testing, and the
//! nearest-open-slot selector.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over slot footprints answers "which slot is under
//! this tap?" in O(log N).  The tree is bulk-loaded once at construction and
//! never rebuilt — slot geometry is immutable, and category changes don't
//! touch the index.
//!
//! # Selector determinism
//!
//! `nearest_open_slot` scans slots in ascending `SlotId` order and keeps the
//! strictly closer candidate, so under an exact distance tie the lowest slot
//! ID wins.  The tie-break is part of the contract — tests depend on it.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use lot_core::{CategoryFilter, Point, SlotCategory, SlotId};

use crate::error::{MapError, MapResult};
use crate::layout::{Column, ParkingSlot};

// ── R-tree slot entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a slot footprint with its ID.
#[derive(Clone)]
struct SlotEntry {
    lower: [f32; 2],
    upper: [f32; 2],
    id:    SlotId,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lower, self.upper)
    }
}

impl PointDistance for SlotEntry {
    /// Squared distance from `point` to the footprint (zero inside it).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = (self.lower[0] - point[0]).max(point[0] - self.upper[0]).max(0.0);
        let dy = (self.lower[1] - point[1]).max(point[1] - self.upper[1]).max(0.0);
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        point[0] >= self.lower[0]
            && point[0] <= self.upper[0]
            && point[1] >= self.lower[1]
            && point[1] <= self.upper[1]
    }
}

// ── ParkingLot ───────────────────────────────────────────────────────────────

/// The built lot: slots indexed by `SlotId`, column markers, the routing
/// geometry retained from layout, a spatial index, and a code lookup.
///
/// Do not construct directly; use [`LayoutConfig::generate`][crate::LayoutConfig::generate].
pub struct ParkingLot {
    slots:   Vec<ParkingSlot>,
    columns: Vec<Column>,

    // ── Routing geometry ──────────────────────────────────────────────────
    /// Centerline of the horizontal lane all routes traverse first.
    pub top_lane_y: f32,
    /// Vehicle entrance; sits on the top lane.
    pub entrance: Point,
    /// Vehicle exit.
    pub exit: Point,
    /// Pedestrian door of the venue.
    pub venue_door: Point,

    // ── Indexes ───────────────────────────────────────────────────────────
    spatial_idx: RTree<SlotEntry>,
    code_idx:    FxHashMap<String, SlotId>,
}

impl ParkingLot {
    /// Assemble a lot from generated parts and bulk-load the indexes.
    pub(crate) fn new(
        slots:      Vec<ParkingSlot>,
        columns:    Vec<Column>,
        top_lane_y: f32,
        entrance:   Point,
        exit:       Point,
        venue_door: Point,
    ) -> Self {
        let entries: Vec<SlotEntry> = slots
            .iter()
            .map(|s| SlotEntry {
                lower: [s.rect.x, s.rect.y],
                upper: [s.rect.x + s.rect.width, s.rect.y + s.rect.height],
                id:    s.id,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let code_idx = slots
            .iter()
            .map(|s| (s.code.clone(), s.id))
            .collect::<FxHashMap<_, _>>();

        Self {
            slots,
            columns,
            top_lane_y,
            entrance,
            exit,
            venue_door,
            spatial_idx,
            code_idx,
        }
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&ParkingSlot> {
        self.slots.get(id.index())
    }

    /// Panic-free lookup that surfaces a typed error for bad IDs.
    pub fn slot(&self, id: SlotId) -> MapResult<&ParkingSlot> {
        self.get(id).ok_or(MapError::SlotNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkingSlot> {
        self.slots.iter()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Resolve a routing code (`"A-L3"`) to its slot ID.
    pub fn find_by_code(&self, code: &str) -> Option<SlotId> {
        self.code_idx.get(code).copied()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Change a slot's category — the single mutation point on the model.
    pub fn set_category(&mut self, id: SlotId, category: SlotCategory) -> MapResult<()> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(MapError::SlotNotFound(id))?;
        slot.category = category;
        Ok(())
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The slot whose footprint contains `p`, if any (tap-to-select).
    pub fn slot_at(&self, p: Point) -> Option<SlotId> {
        self.spatial_idx.locate_at_point(&[p.x, p.y]).map(|e| e.id)
    }

    /// Nearest slot matching `filter` by Euclidean distance from `origin` to
    /// slot center, or `None` when no slot matches.
    ///
    /// Callers in auto mode poll this until a candidate appears; `None` is an
    /// expected steady state, not an error.  Exact distance ties resolve to
    /// the lowest `SlotId`.
    pub fn nearest_open_slot(
        &self,
        origin: Point,
        filter: CategoryFilter,
    ) -> Option<SlotId> {
        let mut best: Option<(f32, SlotId)> = None;
        for slot in &self.slots {
            if !filter.matches(slot.category) {
                continue;
            }
            let d = origin.distance_sq(slot.center);
            // Strict comparison + ascending scan order → lowest ID wins ties.
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, slot.id));
            }
        }
        best.map(|(_, id)| id)
    }

    // ── Counts ────────────────────────────────────────────────────────────

    /// Slots a driver could currently be routed into.
    pub fn open_count(&self) -> usize {
        self.slots.iter().filter(|s| s.category.is_open()).count()
    }

    pub fn count_by_category(&self, category: SlotCategory) -> usize {
        self.slots.iter().filter(|s| s.category == category).count()
    }
}
