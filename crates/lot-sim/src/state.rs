//! The session's explicit state: phases, modes, and the single state struct.

use lot_core::{CategoryFilter, Point, SlotId, Tick};
use lot_map::Path;
use lot_motion::{DriveTimer, Pose};

use crate::camera::Camera;

// ── NavPhase ─────────────────────────────────────────────────────────────────

/// Where the session is in its select → drive → park lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavPhase {
    /// Nothing selected; auto mode polls the selector from here.
    #[default]
    Idle,
    /// A slot is chosen but the drive has not started (manual mode only).
    SlotSelected,
    /// The vehicle is moving along a planned path.
    Navigating,
    /// The vehicle reached the slot center; the allowance countdown runs.
    Parked,
}

impl NavPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            NavPhase::Idle         => "idle",
            NavPhase::SlotSelected => "slot-selected",
            NavPhase::Navigating   => "navigating",
            NavPhase::Parked       => "parked",
        }
    }
}

impl std::fmt::Display for NavPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NavMode ──────────────────────────────────────────────────────────────────

/// Who picks the slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavMode {
    /// The session picks the nearest open slot and drives immediately.
    #[default]
    Auto,
    /// The user taps a slot, then explicitly starts the drive.
    Manual,
}

impl NavMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NavMode::Auto   => "auto",
            NavMode::Manual => "manual",
        }
    }
}

impl std::fmt::Display for NavMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AutoStrategy ─────────────────────────────────────────────────────────────

/// Which origin the automatic pick minimizes distance from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoStrategy {
    /// Closest to where the vehicle enters the lot.
    #[default]
    NearestEntrance,
    /// Shortest walk to the venue door.
    NearestDoor,
}

impl AutoStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            AutoStrategy::NearestEntrance => "nearest-entrance",
            AutoStrategy::NearestDoor     => "nearest-door",
        }
    }
}

impl std::fmt::Display for AutoStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SessionState ─────────────────────────────────────────────────────────────

/// Everything mutable about a session, in one struct.
///
/// The session core owns exactly one of these and every transition flows
/// through the reducer or the tick loop, so a test (or a time-travel
/// debugger) can snapshot and compare whole states cheaply.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub phase:    NavPhase,
    pub mode:     NavMode,
    pub strategy: AutoStrategy,
    pub filter:   CategoryFilter,

    /// The chosen slot, if any.
    pub selected: Option<SlotId>,
    /// The active drive's waypoints.  `None` outside `Navigating`.
    pub path: Option<Path>,
    /// The active drive's timing.  `None` outside `Navigating`.
    pub drive: Option<DriveTimer>,

    /// Vehicle position and sprite heading.
    pub car: Pose,
    /// Fraction of the active drive completed, in [0, 1].
    pub progress: f32,
    /// Index of the last waypoint passed (for rendering traversed markers).
    pub passed_waypoints: usize,

    pub camera: Camera,

    /// Tick at which the vehicle parked; drives the allowance countdown.
    pub parked_at: Option<Tick>,
    /// Seconds left on the parking allowance (counts down while parked).
    pub parking_secs_remaining: u32,
}

impl SessionState {
    /// Fresh state: idle at the entrance with a full allowance.
    pub fn initial(
        entrance:       Point,
        mode:           NavMode,
        strategy:       AutoStrategy,
        allowance_secs: u32,
    ) -> Self {
        Self {
            phase:                  NavPhase::Idle,
            mode,
            strategy,
            filter:                 CategoryFilter::All,
            selected:               None,
            path:                   None,
            drive:                  None,
            car:                    Pose::at(entrance),
            progress:               0.0,
            passed_waypoints:       0,
            camera:                 Camera::new(),
            parked_at:              None,
            parking_secs_remaining: allowance_secs,
        }
    }

    /// `true` while a drive is in flight.
    #[inline]
    pub fn is_navigating(&self) -> bool {
        self.phase == NavPhase::Navigating
    }
}
