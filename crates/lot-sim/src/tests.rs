//! Unit tests for lot-sim.
//!
//! All tests run headless with a 1,000 ms tick so a 9 s drive is exactly
//! nine ticks, and with flip probability 0 unless a test is about turnover.

#[cfg(test)]
mod helpers {
    use lot_core::{SlotId, Tick};
    use lot_map::{CategoryWeights, LanePlanner, LayoutConfig, ParkingLot};

    use crate::observer::SessionObserver;
    use crate::state::{NavMode, NavPhase, SessionState};
    use crate::{NavSession, SessionBuilder, SessionConfig};

    /// One-second ticks: drive = 9 ticks, occupancy interval = 5 ticks.
    pub fn test_config(mode: NavMode) -> SessionConfig {
        SessionConfig {
            seed: 42,
            tick_duration_ms: 1_000,
            flip_probability: 0.0,
            start_mode: mode,
            ..SessionConfig::default()
        }
    }

    /// A layout where the weighted draw never occupies anything, so every
    /// slot outside the zoning bands is `Available` and nearest-slot picks
    /// are exact.
    pub fn open_layout() -> LayoutConfig {
        LayoutConfig {
            weights: CategoryWeights { occupied: 0.0, reserved: 0.0, pwd: 0.0 },
            ..LayoutConfig::default()
        }
    }

    pub fn session(mode: NavMode) -> NavSession<LanePlanner> {
        SessionBuilder::new(test_config(mode))
            .layout(open_layout())
            .build()
            .unwrap()
    }

    pub fn find(lot: &ParkingLot, code: &str) -> SlotId {
        lot.find_by_code(code).unwrap()
    }

    /// Observer that records everything the session reports.
    #[derive(Default)]
    pub struct Recorder {
        pub phase_changes: Vec<(Tick, NavPhase, NavPhase)>,
        pub parked:        Vec<(Tick, SlotId)>,
        pub flips:         Vec<(Tick, usize)>,
        pub ticks:         u64,
    }

    impl SessionObserver for Recorder {
        fn on_tick_end(&mut self, _t: Tick, _s: &SessionState, _l: &ParkingLot) {
            self.ticks += 1;
        }
        fn on_phase_change(&mut self, t: Tick, from: NavPhase, to: NavPhase) {
            self.phase_changes.push((t, from, to));
        }
        fn on_slot_flips(&mut self, t: Tick, flipped: &[SlotId]) {
            self.flips.push((t, flipped.len()));
        }
        fn on_parked(&mut self, t: Tick, slot: SlotId) {
            self.parked.push((t, slot));
        }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lot_core::SimRng;
    use lot_map::LayoutConfig;

    use crate::state::{NavMode, NavPhase};
    use crate::{SessionBuilder, SessionConfig, SimError};

    #[test]
    fn defaults_build_a_forty_slot_session() {
        let session = SessionBuilder::new(SessionConfig::default()).build().unwrap();
        assert_eq!(session.lot.len(), 40);
        assert_eq!(session.state.phase, NavPhase::Idle);
        assert_eq!(session.state.mode, NavMode::Auto);
        assert_eq!(session.state.car.position, session.lot.entrance);
    }

    #[test]
    fn rejects_zero_tick_duration() {
        let config = SessionConfig { tick_duration_ms: 0, ..SessionConfig::default() };
        let got = SessionBuilder::new(config).build();
        assert!(matches!(got, Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_out_of_range_flip_probability() {
        let config = SessionConfig { flip_probability: 1.5, ..SessionConfig::default() };
        let got = SessionBuilder::new(config).build();
        assert!(matches!(got, Err(SimError::Config(_))));
    }

    #[test]
    fn prebuilt_lot_wins_over_layout() {
        let small = LayoutConfig {
            column_letters: vec!['A'],
            slots_per_section: 3,
            ..LayoutConfig::default()
        };
        let lot = small.generate(&mut SimRng::new(1));
        let session = SessionBuilder::new(SessionConfig::default())
            .lot(lot)
            .build()
            .unwrap();
        assert_eq!(session.lot.len(), 6);
    }

    #[test]
    fn duration_conversions() {
        let config = SessionConfig { tick_duration_ms: 1_000, ..SessionConfig::default() };
        assert_eq!(config.nav_duration_ticks(), 9);
        assert_eq!(config.occupancy_interval_ticks(), 5);
    }
}

// ── Auto mode ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod auto {
    use lot_core::SlotCategory;

    use crate::state::{AutoStrategy, NavMode, NavPhase};
    use crate::{NoopObserver, SessionBuilder, SessionEvent};

    use super::helpers::{self, Recorder};

    #[test]
    fn first_tick_picks_nearest_and_drives() {
        let mut session = helpers::session(NavMode::Auto);
        session.tick(&mut NoopObserver).unwrap();

        assert_eq!(session.state.phase, NavPhase::Navigating);
        let picked = session.state.selected.unwrap();
        assert_eq!(session.lot.slot(picked).unwrap().code, "B-R1");
        assert!(session.state.path.is_some());
    }

    #[test]
    fn runs_to_parked_with_observer_trail() {
        let mut session = helpers::session(NavMode::Auto);
        let mut rec = Recorder::default();
        // Pick on tick 1, drive for 9 ticks, park on tick 10.
        session.run_ticks(12, &mut rec).unwrap();

        assert_eq!(session.state.phase, NavPhase::Parked);
        assert_eq!(rec.parked.len(), 1);
        assert_eq!(rec.parked[0].0 .0, 10);

        let slot = session.lot.slot(rec.parked[0].1).unwrap();
        assert_eq!(session.state.car.position, slot.center);

        let transitions: Vec<_> = rec
            .phase_changes
            .iter()
            .map(|(_, from, to)| (*from, *to))
            .collect();
        assert_eq!(
            transitions,
            vec![
                (NavPhase::Idle, NavPhase::Navigating),
                (NavPhase::Navigating, NavPhase::Parked),
            ]
        );
    }

    #[test]
    fn polls_until_a_slot_opens() {
        // Every slot occupied, no zoning exceptions.
        let layout = lot_map::LayoutConfig {
            weights: lot_map::CategoryWeights { occupied: 1.0, reserved: 0.0, pwd: 0.0 },
            ev_rows: 0,
            pwd_rows: 0,
            ..lot_map::LayoutConfig::default()
        };
        let mut session = SessionBuilder::new(helpers::test_config(NavMode::Auto))
            .layout(layout)
            .build()
            .unwrap();

        session.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(session.state.phase, NavPhase::Idle, "nothing to pick yet");

        let id = session.lot.find_by_code("A-L7").unwrap();
        session.lot.set_category(id, SlotCategory::Available).unwrap();
        session.tick(&mut NoopObserver).unwrap();

        assert_eq!(session.state.phase, NavPhase::Navigating);
        assert_eq!(session.state.selected, Some(id));
    }

    #[test]
    fn nearest_door_strategy_starts_at_the_door() {
        let mut session = helpers::session(NavMode::Auto);
        session.apply(SessionEvent::SetStrategy(AutoStrategy::NearestDoor)).unwrap();
        session.tick(&mut NoopObserver).unwrap();

        let picked = session.state.selected.unwrap();
        assert_eq!(session.lot.slot(picked).unwrap().code, "B-R10");
        // The walk-distance strategy measures (and departs) from the door.
        let path = session.state.path.as_ref().unwrap();
        assert_eq!(path.first(), Some(session.lot.venue_door));
    }
}

// ── Manual mode ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod manual {
    use lot_core::{CategoryFilter, Point, SlotCategory, SlotId};

    use crate::state::{NavMode, NavPhase};
    use crate::{NoopObserver, SessionEvent, SimError};

    use super::helpers;

    #[test]
    fn tap_selects_an_open_slot() {
        let mut session = helpers::session(NavMode::Manual);
        let id = helpers::find(&session.lot, "A-L5");
        let center = session.lot.slot(id).unwrap().center;

        session.apply(SessionEvent::TapAt(center)).unwrap();
        assert_eq!(session.state.phase, NavPhase::SlotSelected);
        assert_eq!(session.state.selected, Some(id));
    }

    #[test]
    fn tap_on_occupied_slot_is_ignored() {
        let mut session = helpers::session(NavMode::Manual);
        let id = helpers::find(&session.lot, "A-L5");
        session.lot.set_category(id, SlotCategory::Occupied).unwrap();
        let center = session.lot.slot(id).unwrap().center;

        session.apply(SessionEvent::TapAt(center)).unwrap();
        assert_eq!(session.state.phase, NavPhase::Idle);
        assert_eq!(session.state.selected, None);
    }

    #[test]
    fn tap_on_the_lane_is_ignored() {
        let mut session = helpers::session(NavMode::Manual);
        session.apply(SessionEvent::TapAt(Point::new(392.0, 500.0))).unwrap();
        assert_eq!(session.state.selected, None);
    }

    #[test]
    fn filter_gates_selection() {
        let mut session = helpers::session(NavMode::Manual);
        session.apply(SessionEvent::SetFilter(CategoryFilter::Ev)).unwrap();

        // A plain available slot no longer qualifies…
        let plain = helpers::find(&session.lot, "A-L5");
        session.apply(SessionEvent::SelectSlot(plain)).unwrap();
        assert_eq!(session.state.selected, None);

        // …but a charging slot does.
        let ev = helpers::find(&session.lot, "A-L1");
        session.apply(SessionEvent::SelectSlot(ev)).unwrap();
        assert_eq!(session.state.selected, Some(ev));
    }

    #[test]
    fn filter_change_drops_mismatched_selection() {
        let mut session = helpers::session(NavMode::Manual);
        let plain = helpers::find(&session.lot, "A-L5");
        session.apply(SessionEvent::SelectSlot(plain)).unwrap();
        assert_eq!(session.state.phase, NavPhase::SlotSelected);

        session.apply(SessionEvent::SetFilter(CategoryFilter::Pwd)).unwrap();
        assert_eq!(session.state.selected, None);
        assert_eq!(session.state.phase, NavPhase::Idle);
    }

    #[test]
    fn start_without_selection_is_ignored() {
        let mut session = helpers::session(NavMode::Manual);
        session.apply(SessionEvent::StartNavigation).unwrap();
        assert_eq!(session.state.phase, NavPhase::Idle);
    }

    #[test]
    fn start_then_progress_then_park() {
        let mut session = helpers::session(NavMode::Manual);
        let id = helpers::find(&session.lot, "A-L3");
        session.apply(SessionEvent::SelectSlot(id)).unwrap();
        session.apply(SessionEvent::StartNavigation).unwrap();
        assert_eq!(session.state.phase, NavPhase::Navigating);

        let mut last = 0.0f32;
        for _ in 0..8 {
            session.tick(&mut NoopObserver).unwrap();
            assert!(session.state.progress >= last, "progress must not regress");
            last = session.state.progress;
            assert_eq!(session.state.phase, NavPhase::Navigating);
        }

        session.tick(&mut NoopObserver).unwrap(); // ninth tick: arrival
        assert_eq!(session.state.phase, NavPhase::Parked);
        assert_eq!(
            session.state.car.position,
            session.lot.slot(id).unwrap().center
        );
        assert!(session.state.drive.is_none());
    }

    #[test]
    fn cancel_keeps_selection_and_pose() {
        let mut session = helpers::session(NavMode::Manual);
        let id = helpers::find(&session.lot, "A-L3");
        session.apply(SessionEvent::SelectSlot(id)).unwrap();
        session.apply(SessionEvent::StartNavigation).unwrap();
        session.run_ticks(4, &mut NoopObserver).unwrap();

        let mid_drive = session.state.car.position;
        assert_ne!(mid_drive, session.lot.entrance);

        session.apply(SessionEvent::CancelNavigation).unwrap();
        assert_eq!(session.state.phase, NavPhase::SlotSelected);
        assert_eq!(session.state.selected, Some(id));
        assert!(session.state.path.is_none());
        assert_eq!(session.state.progress, 0.0);
        assert_eq!(session.state.car.position, mid_drive, "vehicle stays put");

        // A fresh start replans from where the vehicle stopped.
        session.apply(SessionEvent::StartNavigation).unwrap();
        assert_eq!(
            session.state.path.as_ref().unwrap().first(),
            Some(mid_drive)
        );
    }

    #[test]
    fn preview_path_tracks_selection() {
        let mut session = helpers::session(NavMode::Manual);
        assert!(session.preview_path().is_none());

        let id = helpers::find(&session.lot, "B-L2");
        session.apply(SessionEvent::SelectSlot(id)).unwrap();
        let preview = session.preview_path().unwrap();
        assert_eq!(preview.first(), Some(session.lot.entrance));
        assert_eq!(preview.last(), Some(session.lot.slot(id).unwrap().center));

        session.apply(SessionEvent::StartNavigation).unwrap();
        assert!(session.preview_path().is_none(), "no preview mid-drive");
    }

    #[test]
    fn mode_toggle_mid_selection_resets_to_idle() {
        let mut session = helpers::session(NavMode::Manual);
        let id = helpers::find(&session.lot, "A-L5");
        session.apply(SessionEvent::SelectSlot(id)).unwrap();
        assert_eq!(session.state.phase, NavPhase::SlotSelected);

        session.apply(SessionEvent::SetMode(NavMode::Auto)).unwrap();
        assert_eq!(session.state.phase, NavPhase::Idle);
        assert_eq!(session.state.selected, None);
        assert!(session.state.path.is_none());
        assert_eq!(session.state.car.position, session.lot.entrance);

        // Auto mode takes over on the very next frame.
        session.tick(&mut NoopObserver).unwrap();
        assert_eq!(session.state.phase, NavPhase::Navigating);
    }

    #[test]
    fn change_slot_after_parking_hands_back_manual_control() {
        let mut session = helpers::session(NavMode::Auto);
        session.run_ticks(12, &mut NoopObserver).unwrap();
        assert_eq!(session.state.phase, NavPhase::Parked);

        session.apply(SessionEvent::ChangeSlot).unwrap();
        assert_eq!(session.state.phase, NavPhase::Idle);
        assert_eq!(session.state.mode, NavMode::Manual);
        assert_eq!(session.state.selected, None);
        assert_eq!(session.state.car.position, session.lot.entrance);
        assert_eq!(
            session.state.parking_secs_remaining,
            session.config.parking_allowance_secs
        );
    }

    #[test]
    fn selection_ignored_in_auto_mode() {
        let mut session = helpers::session(NavMode::Auto);
        let id = helpers::find(&session.lot, "A-L5");
        session.apply(SessionEvent::SelectSlot(id)).unwrap();
        assert_eq!(session.state.selected, None);
    }

    #[test]
    fn selecting_unknown_slot_errors() {
        let mut session = helpers::session(NavMode::Manual);
        let got = session.apply(SessionEvent::SelectSlot(SlotId(999)));
        assert!(matches!(got, Err(SimError::Map(_))));
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use lot_core::SlotCategory;

    use crate::state::NavMode;
    use crate::{SessionBuilder, SessionConfig};

    use super::helpers::{self, Recorder};

    fn churn_config() -> SessionConfig {
        SessionConfig {
            flip_probability: 1.0,
            start_mode: NavMode::Manual,
            ..helpers::test_config(NavMode::Manual)
        }
    }

    #[test]
    fn flips_fire_only_on_interval_boundaries() {
        let mut session = SessionBuilder::new(churn_config())
            .layout(helpers::open_layout())
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        session.run_ticks(4, &mut rec).unwrap();
        assert!(rec.flips.is_empty(), "nothing before the first interval");

        session.tick(&mut rec).unwrap(); // tick 5
        assert_eq!(rec.flips.len(), 1);
        assert_eq!(rec.flips[0].0 .0, 5);
        // With probability 1 every plain slot flips: 40 minus 8 EV minus 8 PWD.
        assert_eq!(rec.flips[0].1, 24);
    }

    #[test]
    fn designated_slots_never_churn() {
        let mut session = SessionBuilder::new(churn_config())
            .layout(helpers::open_layout())
            .build()
            .unwrap();
        session.run_ticks(10, &mut crate::NoopObserver).unwrap();

        for slot in session.lot.iter() {
            match slot.category {
                SlotCategory::Ev => assert!(slot.column.0 == 0 && slot.row < 4),
                SlotCategory::Pwd => assert!(slot.row >= 8),
                SlotCategory::Reserved => panic!("no reserved slots in this layout"),
                // Two intervals with probability 1 → flipped there and back.
                SlotCategory::Available | SlotCategory::Occupied => {}
            }
        }
        assert_eq!(session.lot.count_by_category(SlotCategory::Available), 24);
    }

    #[test]
    fn turnover_is_deterministic_per_seed() {
        let config = SessionConfig {
            flip_probability: 0.25,
            ..helpers::test_config(NavMode::Manual)
        };
        let mut a = SessionBuilder::new(config.clone())
            .layout(helpers::open_layout())
            .build()
            .unwrap();
        let mut b = SessionBuilder::new(config)
            .layout(helpers::open_layout())
            .build()
            .unwrap();

        a.run_ticks(25, &mut crate::NoopObserver).unwrap();
        b.run_ticks(25, &mut crate::NoopObserver).unwrap();

        for (sa, sb) in a.lot.iter().zip(b.lot.iter()) {
            assert_eq!(sa.category, sb.category, "{} diverged", sa.code);
        }
    }
}

// ── Parked countdown ──────────────────────────────────────────────────────────

#[cfg(test)]
mod countdown {
    use crate::state::{NavMode, NavPhase};
    use crate::{NoopObserver, SessionBuilder, SessionConfig};

    use super::helpers;

    #[test]
    fn counts_down_one_second_per_second() {
        let mut session = helpers::session(NavMode::Auto);
        session.run_ticks(10, &mut NoopObserver).unwrap();
        assert_eq!(session.state.phase, NavPhase::Parked);
        let allowance = session.config.parking_allowance_secs;
        assert_eq!(session.state.parking_secs_remaining, allowance);

        // 1,000 ms ticks → one second each.
        session.run_ticks(60, &mut NoopObserver).unwrap();
        assert_eq!(session.state.parking_secs_remaining, allowance - 60);
    }

    #[test]
    fn floors_at_zero() {
        let config = SessionConfig {
            parking_allowance_secs: 5,
            ..helpers::test_config(NavMode::Auto)
        };
        let mut session = SessionBuilder::new(config)
            .layout(helpers::open_layout())
            .build()
            .unwrap();
        session.run_ticks(30, &mut NoopObserver).unwrap();
        assert_eq!(session.state.phase, NavPhase::Parked);
        assert_eq!(session.state.parking_secs_remaining, 0);
    }
}

// ── Camera ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod camera {
    use lot_core::Point;

    use crate::state::NavMode;
    use crate::{NoopObserver, SessionEvent};

    use super::helpers;

    #[test]
    fn zoom_steps_clamp() {
        let mut session = helpers::session(NavMode::Manual);
        for _ in 0..10 {
            session.apply(SessionEvent::ZoomIn).unwrap();
        }
        assert_eq!(session.state.camera.zoom, 1.5);
        for _ in 0..10 {
            session.apply(SessionEvent::ZoomOut).unwrap();
        }
        assert_eq!(session.state.camera.zoom, 0.5);
    }

    #[test]
    fn follow_trails_the_vehicle() {
        let mut session = helpers::session(NavMode::Auto);
        assert_eq!(session.state.camera.offset, Point::ZERO);
        session.run_ticks(3, &mut NoopObserver).unwrap();
        assert_ne!(session.state.camera.offset, Point::ZERO);
    }

    #[test]
    fn parking_zooms_in() {
        let mut session = helpers::session(NavMode::Auto);
        session.run_ticks(12, &mut NoopObserver).unwrap();
        assert_eq!(session.state.camera.zoom, 2.5);
    }

    #[test]
    fn recenter_centers_on_the_car() {
        let mut session = helpers::session(NavMode::Manual);
        session.apply(SessionEvent::Recenter).unwrap();
        let cam = session.state.camera;
        let car = session.state.car.position;
        let viewport = session.config.viewport;
        assert_eq!(cam.offset.x, -car.x * cam.zoom + viewport.width / 2.0);
        assert_eq!(cam.offset.y, -car.y * cam.zoom + viewport.height / 2.0);
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use crate::state::NavMode;
    use crate::NoopObserver;

    use super::helpers;

    #[test]
    fn idle_session_reports_zeroes() {
        let session = helpers::session(NavMode::Manual);
        let s = session.stats();
        assert_eq!(s.speed_kmh, 0.0);
        assert_eq!(s.remaining_km, 0.0);
        assert_eq!(s.eta_minutes, 0);
    }

    #[test]
    fn driving_stats_shrink_toward_arrival() {
        let mut session = helpers::session(NavMode::Auto);
        session.tick(&mut NoopObserver).unwrap();
        let early = session.stats();
        assert!(early.speed_kmh >= 5.0);
        assert!(early.remaining_km > 0.0);

        session.run_ticks(7, &mut NoopObserver).unwrap();
        let late = session.stats();
        assert!(late.remaining_km < early.remaining_km);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use crate::state::NavMode;
    use crate::{NoopObserver, SessionBuilder, SessionConfig};

    use super::helpers;

    #[test]
    fn same_seed_same_trajectory() {
        let config = SessionConfig {
            flip_probability: 0.25,
            ..helpers::test_config(NavMode::Auto)
        };
        let mut a = SessionBuilder::new(config.clone()).build().unwrap();
        let mut b = SessionBuilder::new(config).build().unwrap();

        for _ in 0..50 {
            a.tick(&mut NoopObserver).unwrap();
            b.tick(&mut NoopObserver).unwrap();
            assert_eq!(a.state.phase, b.state.phase);
            assert_eq!(a.state.car.position, b.state.car.position);
            assert_eq!(a.state.progress, b.state.progress);
            assert_eq!(a.state.selected, b.state.selected);
        }
        for (sa, sb) in a.lot.iter().zip(b.lot.iter()) {
            assert_eq!(sa.category, sb.category);
        }
    }
}
