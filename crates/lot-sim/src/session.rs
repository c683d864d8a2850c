//! The `NavSession` struct, its event reducer, and its tick loop.

use lot_core::{CategoryFilter, Point, SimClock, SlotId, Tick};
use lot_map::{ParkingLot, Path, Planner};
use lot_motion::{sample_path, DriveTimer, NavStats, Pose};

use crate::camera::Camera;
use crate::config::SessionConfig;
use crate::error::SimResult;
use crate::event::SessionEvent;
use crate::observer::SessionObserver;
use crate::occupancy::OccupancySim;
use crate::state::{AutoStrategy, NavMode, NavPhase, SessionState};

/// The main session runner.
///
/// `NavSession<P>` holds all session state and exposes two entry points:
///
/// - [`apply`](Self::apply) — the reducer.  Every external input (taps,
///   buttons, toggles) is a [`SessionEvent`] fed through here.  Events that
///   don't fit the current phase are ignored.
/// - [`tick`](Self::tick) — one animation frame: advance the clock, step the
///   occupancy simulator, let auto mode pick a slot, move the vehicle along
///   its path, and run the parked countdown.  Observer hooks fire at tick
///   boundaries.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct NavSession<P: Planner> {
    /// Global configuration (durations, probabilities, seed, …).
    pub config: SessionConfig,

    /// Session clock — tracks the current tick and maps to elapsed time.
    pub clock: SimClock,

    /// The lot being navigated.  Occupancy mutates its slot categories.
    pub lot: ParkingLot,

    /// The path planner.  Swap at compile time for a different routing
    /// algorithm with no runtime overhead.
    pub planner: P,

    /// Live availability turnover.
    pub occupancy: OccupancySim,

    /// The single explicit state struct every transition flows through.
    pub state: SessionState,

    /// Phase reported to observers at the previous tick boundary.
    last_observed_phase: NavPhase,
}

impl<P: Planner> NavSession<P> {
    /// Assembled by the builder; not public API.
    pub(crate) fn from_parts(
        config:    SessionConfig,
        clock:     SimClock,
        lot:       ParkingLot,
        planner:   P,
        occupancy: OccupancySim,
        state:     SessionState,
    ) -> Self {
        let last_observed_phase = state.phase;
        Self {
            config,
            clock,
            lot,
            planner,
            occupancy,
            state,
            last_observed_phase,
        }
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Event reducer ─────────────────────────────────────────────────────

    /// Apply one external event.
    ///
    /// Out-of-phase events are dropped silently — a tap mid-drive or a
    /// start press with nothing selected does nothing.  Only planner
    /// failures (a stale slot ID) surface as errors.
    pub fn apply(&mut self, event: SessionEvent) -> SimResult<()> {
        match event {
            SessionEvent::TapAt(point) => {
                if let Some(id) = self.lot.slot_at(point) {
                    self.try_select(id)?;
                }
            }
            SessionEvent::SelectSlot(id) => {
                self.try_select(id)?;
            }

            SessionEvent::StartNavigation => {
                if self.state.mode == NavMode::Manual
                    && self.state.phase == NavPhase::SlotSelected
                {
                    if let Some(target) = self.state.selected {
                        self.begin_drive(self.state.car.position, target)?;
                    }
                }
            }

            SessionEvent::CancelNavigation => {
                if self.state.phase == NavPhase::Navigating {
                    self.clear_drive();
                    self.state.phase = if self.state.selected.is_some() {
                        NavPhase::SlotSelected
                    } else {
                        NavPhase::Idle
                    };
                }
            }

            SessionEvent::ChangeSlot => {
                if self.state.phase == NavPhase::Parked {
                    self.reset_to_idle();
                    // Post-park flow hands control back to the user.
                    self.state.mode = NavMode::Manual;
                }
            }

            SessionEvent::SetMode(mode) => {
                self.reset_to_idle();
                self.state.mode = mode;
            }

            SessionEvent::SetFilter(filter) => {
                if self.state.mode == NavMode::Manual && !self.state.is_navigating() {
                    self.state.filter = filter;
                    // Drop a selection the new filter no longer admits.
                    if let Some(id) = self.state.selected {
                        let still_ok = self
                            .lot
                            .get(id)
                            .is_some_and(|s| filter.matches(s.category));
                        if !still_ok {
                            self.state.selected = None;
                            if self.state.phase == NavPhase::SlotSelected {
                                self.state.phase = NavPhase::Idle;
                            }
                        }
                    }
                }
            }

            SessionEvent::SetStrategy(strategy) => {
                self.state.strategy = strategy;
            }

            SessionEvent::ZoomIn => self.state.camera.zoom_in(),
            SessionEvent::ZoomOut => self.state.camera.zoom_out(),
            SessionEvent::Recenter => {
                self.state
                    .camera
                    .center_on(self.state.car.position, self.config.viewport);
            }
        }
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one frame.
    pub fn tick<O: SessionObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.clock.advance();
        let now = self.now();
        observer.on_tick_start(now);

        // ── Phase 1: occupancy turnover ───────────────────────────────────
        let flipped = self.occupancy.tick(now, &mut self.lot)?;
        if !flipped.is_empty() {
            observer.on_slot_flips(now, &flipped);
        }

        // ── Phase 2: automatic slot pick ──────────────────────────────────
        //
        // Auto mode polls the selector whenever the session is idle; `None`
        // (lot momentarily full) just means "try again next tick".
        if self.state.mode == NavMode::Auto && self.state.phase == NavPhase::Idle {
            let origin = self.strategy_origin();
            if let Some(id) = self.lot.nearest_open_slot(origin, CategoryFilter::All) {
                self.state.selected = Some(id);
                self.state.car = Pose::at(origin);
                self.begin_drive(origin, id)?;
            }
        }

        // ── Phase 3: advance the active drive ─────────────────────────────
        if self.state.phase == NavPhase::Navigating {
            self.advance_drive(now, observer);
        }

        // ── Phase 4: parked countdown ─────────────────────────────────────
        if self.state.phase == NavPhase::Parked {
            if let Some(parked_at) = self.state.parked_at {
                let elapsed_secs =
                    now.since(parked_at) * self.clock.tick_duration_ms as u64 / 1_000;
                self.state.parking_secs_remaining = self
                    .config
                    .parking_allowance_secs
                    .saturating_sub(elapsed_secs.min(u32::MAX as u64) as u32);
            }
        }

        // ── Phase 5: observer boundary ────────────────────────────────────
        if self.state.phase != self.last_observed_phase {
            observer.on_phase_change(now, self.last_observed_phase, self.state.phase);
            self.last_observed_phase = self.state.phase;
        }
        observer.on_tick_end(now, &self.state, &self.lot);
        Ok(())
    }

    /// Run exactly `n` ticks.  Useful for tests and headless stepping.
    pub fn run_ticks<O: SessionObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    // ── Derived values ────────────────────────────────────────────────────

    /// Live display statistics for the current frame.
    pub fn stats(&self) -> NavStats {
        let length = self.state.path.as_ref().map_or(0.0, Path::length);
        NavStats::compute(
            length,
            self.state.progress,
            self.state.is_navigating(),
            self.config.nav_duration_ms,
        )
    }

    /// The path that *would* be driven from the vehicle to the selected slot
    /// (shown as a preview before the drive starts).
    pub fn preview_path(&self) -> Option<Path> {
        if self.state.phase != NavPhase::SlotSelected {
            return None;
        }
        let target = self.state.selected?;
        self.planner
            .plan(&self.lot, self.state.car.position, target)
            .ok()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn strategy_origin(&self) -> Point {
        match self.state.strategy {
            AutoStrategy::NearestEntrance => self.lot.entrance,
            AutoStrategy::NearestDoor     => self.lot.venue_door,
        }
    }

    /// Manual selection rules: manual mode, no drive in flight, slot open
    /// and admitted by the active filter.
    fn try_select(&mut self, id: SlotId) -> SimResult<()> {
        if self.state.mode != NavMode::Manual {
            return Ok(());
        }
        if !matches!(self.state.phase, NavPhase::Idle | NavPhase::SlotSelected) {
            return Ok(());
        }
        let slot = self.lot.slot(id)?;
        if !self.state.filter.matches(slot.category) {
            return Ok(());
        }
        self.state.selected = Some(id);
        self.state.phase = NavPhase::SlotSelected;
        Ok(())
    }

    /// Plan and arm a drive from `start` to `target`.
    fn begin_drive(&mut self, start: Point, target: SlotId) -> SimResult<()> {
        let path = self.planner.plan(&self.lot, start, target)?;
        self.state.path = Some(path);
        self.state.drive = Some(DriveTimer::start(
            self.now(),
            self.config.nav_duration_ticks(),
        ));
        self.state.progress = 0.0;
        self.state.passed_waypoints = 0;
        self.state.phase = NavPhase::Navigating;
        Ok(())
    }

    /// Move the vehicle along its path for this tick and handle arrival.
    fn advance_drive<O: SessionObserver>(&mut self, now: Tick, observer: &mut O) {
        // Sample first into owned values so the path borrow ends before any
        // state mutation below.
        let sampled = match (self.state.drive, self.state.path.as_ref()) {
            (Some(drive), Some(path)) => {
                let progress = drive.progress(now);
                Some((progress, sample_path(path.points(), progress), drive.done(now)))
            }
            _ => None,
        };
        let Some((progress, sample, done)) = sampled else {
            // A drive phase without a path cannot progress; fail safe to idle.
            self.clear_drive();
            self.state.phase = NavPhase::Idle;
            return;
        };

        self.state.progress = progress;
        self.state.car = sample.pose;
        self.state.passed_waypoints = sample.segment;
        self.state
            .camera
            .follow(sample.pose.position, self.config.viewport);

        if done {
            let slot = self.state.selected.unwrap_or(SlotId::INVALID);
            self.clear_drive();
            self.state.phase = NavPhase::Parked;
            self.state.parked_at = Some(now);
            self.state.parking_secs_remaining = self.config.parking_allowance_secs;
            self.state
                .camera
                .parked_close_up(self.state.car.position, self.config.viewport);
            observer.on_parked(now, slot);
        }
    }

    /// Drop the in-flight drive without touching phase or selection.
    fn clear_drive(&mut self) {
        self.state.path = None;
        self.state.drive = None;
        self.state.progress = 0.0;
        self.state.passed_waypoints = 0;
    }

    /// Common reset used by mode switches and the post-park flow.
    fn reset_to_idle(&mut self) {
        self.clear_drive();
        self.state.selected = None;
        self.state.phase = NavPhase::Idle;
        self.state.car = Pose::at(self.lot.entrance);
        self.state.parked_at = None;
        self.state.parking_secs_remaining = self.config.parking_allowance_secs;
        self.state.camera = Camera::new();
    }
}
