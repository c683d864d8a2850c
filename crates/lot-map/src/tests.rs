//! Unit tests for lot-map.
//!
//! All tests use the default layout with a fixed seed so results are
//! reproducible without any external data.

#[cfg(test)]
mod helpers {
    use lot_core::SimRng;

    use crate::{LayoutConfig, ParkingLot};

    /// The reference lot: 2 sections × 10 rows × 2 sides = 40 slots.
    pub fn default_lot() -> ParkingLot {
        LayoutConfig::default().generate(&mut SimRng::new(42))
    }
}

// ── Layout generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use std::collections::HashSet;

    use lot_core::{ColumnId, SimRng, SlotCategory};

    use crate::{CategoryWeights, LayoutConfig, SlotSide};

    #[test]
    fn slot_count_and_unique_codes() {
        let lot = super::helpers::default_lot();
        assert_eq!(lot.len(), 40);

        let codes: HashSet<&str> = lot.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes.len(), 40, "codes must be unique");
        assert!(codes.contains("A-L1"));
        assert!(codes.contains("A-R10"));
        assert!(codes.contains("B-L5"));
        assert!(codes.contains("B-R10"));
    }

    #[test]
    fn labels_odd_left_even_right() {
        let lot = super::helpers::default_lot();
        let l3 = lot.slot(lot.find_by_code("A-L3").unwrap()).unwrap();
        let r3 = lot.slot(lot.find_by_code("A-R3").unwrap()).unwrap();
        assert_eq!(l3.label, "A-5"); // row 2 → 2*2+1
        assert_eq!(r3.label, "A-6");
        assert_eq!(l3.side, SlotSide::Left);
        assert_eq!(r3.side, SlotSide::Right);
    }

    #[test]
    fn ev_zone_tops_first_column_only() {
        let lot = super::helpers::default_lot();
        for slot in lot.iter() {
            let in_zone = slot.column == ColumnId(0) && slot.row < 4;
            if in_zone {
                assert_eq!(slot.category, SlotCategory::Ev, "{}", slot.code);
            } else {
                assert_ne!(slot.category, SlotCategory::Ev, "{}", slot.code);
            }
        }
    }

    #[test]
    fn pwd_zone_bottoms_every_column() {
        let lot = super::helpers::default_lot();
        for slot in lot.iter() {
            if slot.row >= 8 {
                assert_eq!(slot.category, SlotCategory::Pwd, "{}", slot.code);
            }
        }
        // 2 rows × 2 sides × 2 columns, plus whatever the weighted draw added.
        assert!(lot.count_by_category(SlotCategory::Pwd) >= 8);
    }

    #[test]
    fn generation_is_deterministic() {
        let cfg = LayoutConfig::default();
        let a = cfg.generate(&mut SimRng::new(7));
        let b = cfg.generate(&mut SimRng::new(7));
        for (sa, sb) in a.iter().zip(b.iter()) {
            assert_eq!(sa.category, sb.category);
            assert_eq!(sa.code, sb.code);
            assert_eq!(sa.rect, sb.rect);
        }
    }

    #[test]
    fn weights_saturate() {
        // Everything not zoned draws Occupied when its weight is 1.
        let cfg = LayoutConfig {
            weights: CategoryWeights { occupied: 1.0, reserved: 0.0, pwd: 0.0 },
            ..LayoutConfig::default()
        };
        let lot = cfg.generate(&mut SimRng::new(0));
        for slot in lot.iter() {
            let zoned = (slot.column == ColumnId(0) && slot.row < 4) || slot.row >= 8;
            if !zoned {
                assert_eq!(slot.category, SlotCategory::Occupied);
            }
        }
    }

    #[test]
    fn entry_points_face_the_lane() {
        let lot = super::helpers::default_lot();
        for slot in lot.iter() {
            match slot.side {
                SlotSide::Left => {
                    assert_eq!(slot.entry.x, slot.rect.x + slot.rect.width + 10.0);
                }
                SlotSide::Right => {
                    assert_eq!(slot.entry.x, slot.rect.x - 10.0);
                }
            }
            assert_eq!(slot.entry.y, slot.rect.y + slot.rect.height / 2.0);
            assert_eq!(slot.center, slot.rect.center());
        }
    }

    #[test]
    fn both_sides_share_the_lane_centerline() {
        let lot = super::helpers::default_lot();
        let left  = lot.slot(lot.find_by_code("A-L1").unwrap()).unwrap();
        let right = lot.slot(lot.find_by_code("A-R1").unwrap()).unwrap();
        assert_eq!(left.lane_x, right.lane_x);
        assert_eq!(left.lane_x, 392.0); // 180 + 72 + 280/2
    }

    #[test]
    fn column_markers_sit_on_lane_centerlines() {
        let lot = super::helpers::default_lot();
        let cols = lot.columns();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].letter, 'A');
        assert_eq!(cols[0].marker.x, 392.0);
        assert_eq!(cols[1].letter, 'B');
        assert_eq!(cols[1].marker.x, 876.0); // 180 + 484 + 72 + 140
    }
}

// ── Lot queries ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod lot {
    use lot_core::{CategoryFilter, Point, SlotCategory, SlotId};

    use crate::MapError;

    #[test]
    fn find_by_code_roundtrip() {
        let lot = super::helpers::default_lot();
        let id = lot.find_by_code("B-R7").unwrap();
        assert_eq!(lot.slot(id).unwrap().code, "B-R7");
        assert!(lot.find_by_code("Z-L1").is_none());
    }

    #[test]
    fn hit_test_inside_and_outside() {
        let lot = super::helpers::default_lot();
        let id = lot.find_by_code("A-L3").unwrap();
        let center = lot.slot(id).unwrap().center;
        assert_eq!(lot.slot_at(center), Some(id));
        // Lane centerline of section A is road, not slot.
        assert_eq!(lot.slot_at(Point::new(392.0, 500.0)), None);
        // Far outside the lot entirely.
        assert_eq!(lot.slot_at(Point::new(-50.0, -50.0)), None);
    }

    #[test]
    fn set_category_unknown_slot_errors() {
        let mut lot = super::helpers::default_lot();
        let err = lot.set_category(SlotId(999), SlotCategory::Occupied);
        assert!(matches!(err, Err(MapError::SlotNotFound(_))));
    }

    #[test]
    fn selector_returns_none_without_candidates() {
        let mut lot = super::helpers::default_lot();
        for id in 0..lot.len() {
            lot.set_category(SlotId(id as u32), SlotCategory::Occupied)
                .unwrap();
        }
        let got = lot.nearest_open_slot(lot.entrance, CategoryFilter::All);
        assert!(got.is_none());
    }

    #[test]
    fn selector_minimizes_distance() {
        let lot = super::helpers::default_lot();
        let origin = lot.entrance;
        let picked = lot.nearest_open_slot(origin, CategoryFilter::All).unwrap();
        let picked_d = origin.distance_sq(lot.slot(picked).unwrap().center);
        for slot in lot.iter() {
            if CategoryFilter::All.matches(slot.category) {
                assert!(
                    picked_d <= origin.distance_sq(slot.center),
                    "{} closer than {}",
                    slot.code,
                    lot.slot(picked).unwrap().code
                );
            }
        }
    }

    #[test]
    fn selector_respects_filter() {
        let lot = super::helpers::default_lot();
        let picked = lot
            .nearest_open_slot(lot.venue_door, CategoryFilter::Pwd)
            .unwrap();
        assert_eq!(lot.slot(picked).unwrap().category, SlotCategory::Pwd);

        let ev = lot
            .nearest_open_slot(lot.entrance, CategoryFilter::Ev)
            .unwrap();
        assert_eq!(lot.slot(ev).unwrap().category, SlotCategory::Ev);
    }

    #[test]
    fn selector_ties_break_to_lowest_id() {
        let mut lot = super::helpers::default_lot();
        for id in 0..lot.len() {
            lot.set_category(SlotId(id as u32), SlotCategory::Occupied)
                .unwrap();
        }
        // Row 5 of section A is outside both zoning bands; its left and right
        // slots are mirror images across the lane centerline.
        let left  = lot.find_by_code("A-L5").unwrap();
        let right = lot.find_by_code("A-R5").unwrap();
        lot.set_category(left, SlotCategory::Available).unwrap();
        lot.set_category(right, SlotCategory::Available).unwrap();

        let row_y = lot.slot(left).unwrap().center.y;
        let origin = Point::new(lot.slot(left).unwrap().lane_x, row_y);
        assert_eq!(
            origin.distance_sq(lot.slot(left).unwrap().center),
            origin.distance_sq(lot.slot(right).unwrap().center),
            "tie setup must be exact"
        );

        let picked = lot.nearest_open_slot(origin, CategoryFilter::All).unwrap();
        assert_eq!(picked, left.min(right));
    }

    #[test]
    fn open_count_tracks_mutation() {
        let mut lot = super::helpers::default_lot();
        let before = lot.open_count();
        let id = lot
            .nearest_open_slot(lot.entrance, CategoryFilter::All)
            .unwrap();
        lot.set_category(id, SlotCategory::Occupied).unwrap();
        assert_eq!(lot.open_count(), before - 1);
    }
}

// ── Path & planner ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use lot_core::{Point, SlotId};

    use crate::{LanePlanner, MapError, Path, Planner};

    #[test]
    fn path_dedups_consecutive_duplicates() {
        let p = Path::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 8.0),
        ]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.length(), 9.0);
    }

    #[test]
    fn path_degenerate_shapes() {
        assert!(Path::new(vec![]).is_trivial());
        assert!(Path::new(vec![Point::new(1.0, 1.0)]).is_trivial());
        assert_eq!(Path::new(vec![Point::new(1.0, 1.0)]).length(), 0.0);
    }

    #[test]
    fn entrance_to_a_l3_is_five_points() {
        let lot = super::helpers::default_lot();
        let target = lot.find_by_code("A-L3").unwrap();
        let path = LanePlanner.plan(&lot, lot.entrance, target).unwrap();

        let pts = path.points();
        assert_eq!(pts.len(), 5, "entrance sits on the top lane");
        assert_eq!(pts[0], lot.entrance);
        assert_eq!(pts[1], Point::new(392.0, 100.0));
        assert_eq!(pts[2], Point::new(392.0, 574.0));
        assert_eq!(pts[3], Point::new(262.0, 574.0));
        assert_eq!(*pts.last().unwrap(), lot.slot(target).unwrap().center);
        assert_eq!(path.length(), 1_158.0);
    }

    #[test]
    fn off_lane_start_adds_a_merge_waypoint() {
        let lot = super::helpers::default_lot();
        let target = lot.find_by_code("A-L3").unwrap();
        let start = Point::new(900.0, 400.0);
        let path = LanePlanner.plan(&lot, start, target).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.points()[1], Point::new(900.0, 100.0));
    }

    #[test]
    fn unknown_target_errors() {
        let lot = super::helpers::default_lot();
        let got = LanePlanner.plan(&lot, lot.entrance, SlotId(999));
        assert!(matches!(got, Err(MapError::SlotNotFound(_))));
    }

    #[test]
    fn segments_avoid_foreign_slots() {
        let lot = super::helpers::default_lot();
        for slot in lot.iter() {
            let path = LanePlanner.plan(&lot, lot.entrance, slot.id).unwrap();
            for w in path.points().windows(2) {
                let mid = w[0].midpoint(w[1]);
                for other in lot.iter() {
                    if other.id != slot.id {
                        assert!(
                            !other.rect.contains(mid),
                            "path to {} crosses {} at {}",
                            slot.code,
                            other.code,
                            mid
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn path_ends_at_every_slot_center() {
        let lot = super::helpers::default_lot();
        for slot in lot.iter() {
            let path = LanePlanner.plan(&lot, lot.entrance, slot.id).unwrap();
            assert_eq!(path.first(), Some(lot.entrance));
            assert_eq!(path.last(), Some(slot.center));
            assert!(path.length() > 0.0);
        }
    }
}
