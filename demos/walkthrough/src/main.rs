//! walkthrough — end-to-end demo of the rust_lot navigation core.
//!
//! Runs the full session lifecycle headless: an automatic drive from the
//! entrance into the nearest open slot, a reset, then a manual flow with a
//! category filter, a mid-drive cancellation, and a second drive to
//! completion.  Per-tick telemetry lands in `output/walkthrough/frames.csv`.

use std::path::Path;

use anyhow::Result;

use lot_core::{CategoryFilter, SlotId, Tick};
use lot_map::{LanePlanner, ParkingLot};
use lot_scene::{build_scene, CsvTelemetry, Shape};
use lot_sim::{
    NavMode, NavPhase, NavSession, SessionBuilder, SessionConfig, SessionEvent,
    SessionObserver, SessionState,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
/// Safety cap so a logic bug can't spin the demo forever.
const MAX_TICKS_PER_DRIVE: u64 = 2_000;

// ── Printing observer ─────────────────────────────────────────────────────────

/// Forwards telemetry to CSV and narrates the interesting moments.
struct Narrator {
    telemetry: CsvTelemetry,
}

impl SessionObserver for Narrator {
    fn on_tick_end(&mut self, tick: Tick, state: &SessionState, lot: &ParkingLot) {
        self.telemetry.on_tick_end(tick, state, lot);
    }

    fn on_phase_change(&mut self, tick: Tick, from: NavPhase, to: NavPhase) {
        println!("  {tick}: {from} -> {to}");
    }

    fn on_slot_flips(&mut self, tick: Tick, flipped: &[SlotId]) {
        println!("  {tick}: occupancy re-roll flipped {} slots", flipped.len());
    }

    fn on_parked(&mut self, tick: Tick, _slot: SlotId) {
        println!("  {tick}: parked");
    }
}

// ── Drive loop ────────────────────────────────────────────────────────────────

/// Tick until the session parks (or the cap trips).
fn drive_to_park(session: &mut NavSession<LanePlanner>, obs: &mut Narrator) -> Result<()> {
    for _ in 0..MAX_TICKS_PER_DRIVE {
        session.tick(obs)?;
        if session.state.phase == NavPhase::Parked {
            return Ok(());
        }
    }
    anyhow::bail!("drive did not complete within {MAX_TICKS_PER_DRIVE} ticks");
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== walkthrough — rust_lot navigation core ===");

    let config = SessionConfig { seed: SEED, ..SessionConfig::default() };
    println!(
        "Seed: {SEED}  |  tick: {} ms  |  drive: {} ms  |  occupancy re-roll: {} ms",
        config.tick_duration_ms, config.nav_duration_ms, config.occupancy_interval_ms
    );

    let mut session = SessionBuilder::new(config).build()?;
    println!(
        "Lot: {} slots across {} columns, {} open",
        session.lot.len(),
        session.lot.columns().len(),
        session.lot.open_count()
    );

    std::fs::create_dir_all("output/walkthrough")?;
    let telemetry = CsvTelemetry::create(Path::new("output/walkthrough/frames.csv"))?;
    let mut obs = Narrator { telemetry };

    // ── 1. Automatic drive ────────────────────────────────────────────────
    println!("\n[auto] nearest-entrance pick:");
    drive_to_park(&mut session, &mut obs)?;

    let parked_in = session.state.selected.expect("parked implies a slot");
    println!(
        "  parked in {} ({}), allowance {} s",
        session.lot.slot(parked_in)?.code,
        session.lot.slot(parked_in)?.label,
        session.state.parking_secs_remaining
    );

    // ── 2. Reset and switch to manual with an EV filter ───────────────────
    println!("\n[manual] change slot, filter to EV:");
    session.apply(SessionEvent::ChangeSlot)?;
    session.apply(SessionEvent::SetFilter(CategoryFilter::Ev))?;
    assert_eq!(session.state.mode, NavMode::Manual);

    let ev = session
        .lot
        .nearest_open_slot(session.lot.entrance, CategoryFilter::Ev)
        .expect("layout always zones EV slots");
    let tap = session.lot.slot(ev)?.center;
    session.apply(SessionEvent::TapAt(tap))?;
    println!("  tapped {} at {}", session.lot.slot(ev)?.code, tap);

    session.apply(SessionEvent::StartNavigation)?;

    // Drive partway, report, then abandon and commit to a fresh start.
    for _ in 0..30 {
        session.tick(&mut obs)?;
    }
    let stats = session.stats();
    println!(
        "  mid-drive at {}: {:.0}% done, speed {:.1} km/h, remaining {:.2} km, eta {} min",
        session.state.car.position,
        session.state.progress * 100.0,
        stats.speed_kmh,
        stats.remaining_km,
        stats.eta_minutes
    );
    session.apply(SessionEvent::CancelNavigation)?;
    println!("  cancelled; restarting from where the car stopped");
    session.apply(SessionEvent::StartNavigation)?;
    drive_to_park(&mut session, &mut obs)?;

    let ev_slot = session.state.selected.expect("parked implies a slot");
    println!(
        "  arrived at {} with {} s of allowance, fuel saved {:.2} l",
        session.lot.slot(ev_slot)?.code,
        session.state.parking_secs_remaining,
        stats.fuel_saved_l
    );

    // ── 3. Scene summary ──────────────────────────────────────────────────
    let scene = build_scene(&session);
    println!("\nScene: {} shapes", scene.shapes.len());
    println!(
        "  slots: {}  roads: {}  lane guides: {}  doors: {}",
        scene.count(|s| matches!(s, Shape::SlotRect { .. })),
        scene.count(|s| matches!(s, Shape::Road { .. })),
        scene.count(|s| matches!(s, Shape::LaneLine { .. })),
        scene.count(|s| matches!(s, Shape::Door { .. })),
    );

    obs.telemetry.finish()?;
    println!("\nTelemetry written to output/walkthrough/frames.csv");
    Ok(())
}
