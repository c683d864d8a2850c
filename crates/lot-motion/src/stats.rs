//! Derived, ephemeral display statistics for an active drive.
//!
//! # Scale model
//!
//! Lot coordinates are layout units, not metres.  The display scale treats
//! one unit as 0.3 m (a 72-unit slot ≈ one car width of clearance) and 1,000
//! units as one display-kilometre.  Speed is the unit rate implied by the
//! configured drive duration converted through that scale and clamped to a
//! plausible parking-lot band of 5–15 km/h; ETA and fuel savings derive from
//! the same numbers.  These are presentation values — nothing downstream
//! consumes them, and they are never persisted.

/// Physical metres represented by one layout unit.
const METERS_PER_UNIT: f32 = 0.3;
/// Layout units per display-kilometre.
const UNITS_PER_KM: f32 = 1_000.0;
/// Speed clamp for the parking-lot context, km/h.
const MIN_SPEED_KMH: f32 = 5.0;
const MAX_SPEED_KMH: f32 = 15.0;
/// Litres of fuel saved per display-km of circling avoided.
const FUEL_SAVED_L_PER_KM: f32 = 0.06;

/// Live statistics shown during navigation.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavStats {
    /// Current speed in km/h; zero when not navigating.
    pub speed_kmh: f32,
    /// Display-kilometres still to travel.
    pub remaining_km: f32,
    /// Whole minutes to arrival, rounded up.
    pub eta_minutes: u32,
    /// Estimated litres of fuel saved versus circling for a slot.
    pub fuel_saved_l: f32,
}

impl NavStats {
    /// Compute stats from a path length (layout units), the completed
    /// fraction, whether a drive is active, and the configured drive
    /// duration.
    ///
    /// Pure and total: a zero-length path or zero duration produces zeroed
    /// or clamped fields, never a failure.
    pub fn compute(
        path_length_units: f32,
        progress:          f32,
        navigating:        bool,
        duration_ms:       u32,
    ) -> NavStats {
        let distance_km  = path_length_units / UNITS_PER_KM;
        let remaining_km = distance_km * (1.0 - progress.clamp(0.0, 1.0));

        let speed_kmh = if navigating && path_length_units > 0.0 {
            let units_per_sec = if duration_ms > 0 {
                path_length_units / (duration_ms as f32 / 1_000.0)
            } else {
                f32::INFINITY
            };
            let kmh = units_per_sec * METERS_PER_UNIT * 3.6;
            kmh.clamp(MIN_SPEED_KMH, MAX_SPEED_KMH)
        } else {
            0.0
        };

        let eta_minutes = if speed_kmh > 0.0 {
            (remaining_km / speed_kmh * 60.0).ceil() as u32
        } else {
            0
        };

        NavStats {
            speed_kmh,
            remaining_km,
            eta_minutes,
            fuel_saved_l: distance_km * FUEL_SAVED_L_PER_KM,
        }
    }
}
