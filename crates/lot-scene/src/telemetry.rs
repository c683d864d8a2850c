//! Per-tick CSV telemetry.
//!
//! One row per tick: where the vehicle is, what phase the session is in, and
//! how full the lot looks.  Intended for replay and debugging — tail the
//! file while a session runs, or diff two runs with the same seed to catch a
//! determinism regression.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use lot_core::Tick;
use lot_map::ParkingLot;
use lot_sim::{SessionObserver, SessionState};

use crate::error::SceneResult;

/// A snapshot of one tick, flattened for CSV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRow {
    pub tick:         u64,
    pub phase:        &'static str,
    pub x:            f32,
    pub y:            f32,
    pub heading_deg:  f32,
    pub progress:     f32,
    /// Display-kilometres left on the active path (zero when idle).
    pub remaining_km: f32,
    pub open_slots:   u32,
}

impl TelemetryRow {
    /// Flatten session state into a row.
    pub fn capture(tick: Tick, state: &SessionState, lot: &ParkingLot) -> Self {
        let remaining_km = state
            .path
            .as_ref()
            .map_or(0.0, |p| p.length() * (1.0 - state.progress) / 1_000.0);
        Self {
            tick: tick.0,
            phase: state.phase.as_str(),
            x: state.car.position.x,
            y: state.car.position.y,
            heading_deg: state.car.heading_deg,
            progress: state.progress,
            remaining_km,
            open_slots: lot.open_count() as u32,
        }
    }
}

// ── CsvTelemetry ─────────────────────────────────────────────────────────────

/// A [`SessionObserver`] writing one [`TelemetryRow`] per tick to a CSV file.
///
/// Rows are buffered by the underlying writer; call [`finish`](Self::finish)
/// (idempotent) to flush before reading the file back.
pub struct CsvTelemetry {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvTelemetry {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> SceneResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "tick",
            "phase",
            "x",
            "y",
            "heading_deg",
            "progress",
            "remaining_km",
            "open_slots",
        ])?;
        Ok(Self {
            writer,
            finished: false,
        })
    }

    fn write_row(&mut self, row: &TelemetryRow) -> SceneResult<()> {
        self.writer.write_record(&[
            row.tick.to_string(),
            row.phase.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.heading_deg.to_string(),
            row.progress.to_string(),
            row.remaining_km.to_string(),
            row.open_slots.to_string(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows.  Safe to call more than once.
    pub fn finish(&mut self) -> SceneResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

impl SessionObserver for CsvTelemetry {
    fn on_tick_end(&mut self, tick: Tick, state: &SessionState, lot: &ParkingLot) {
        let row = TelemetryRow::capture(tick, state, lot);
        // Telemetry must never take the session down; drop the row on error.
        let _ = self.write_row(&row);
    }
}
