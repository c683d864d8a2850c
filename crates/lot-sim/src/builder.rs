//! Fluent builder for constructing a [`NavSession`].

use lot_core::SimRng;
use lot_map::{LanePlanner, LayoutConfig, ParkingLot, Planner};

use crate::config::SessionConfig;
use crate::error::SimResult;
use crate::occupancy::OccupancySim;
use crate::session::NavSession;
use crate::state::SessionState;

/// Fluent builder for [`NavSession<P>`].
///
/// # Required inputs
///
/// - [`SessionConfig`] — durations, probabilities, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                             |
/// |---------------|-----------------------------------------------------|
/// | `.lot(l)`     | generated from `.layout(..)` (or `LayoutConfig::default()`) with the config seed |
/// | `.layout(c)`  | `LayoutConfig::default()`                           |
/// | `.planner(p)` | [`LanePlanner`]                                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(SessionConfig::default()).build()?;
/// session.run_ticks(200, &mut NoopObserver)?;
/// ```
pub struct SessionBuilder<P: Planner = LanePlanner> {
    config:  SessionConfig,
    lot:     Option<ParkingLot>,
    layout:  Option<LayoutConfig>,
    planner: P,
}

impl SessionBuilder<LanePlanner> {
    /// Create a builder with the default lane planner.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            lot:     None,
            layout:  None,
            planner: LanePlanner,
        }
    }
}

impl<P: Planner> SessionBuilder<P> {
    /// Supply a prebuilt lot (wins over `.layout(..)`).
    pub fn lot(mut self, lot: ParkingLot) -> Self {
        self.lot = Some(lot);
        self
    }

    /// Supply a layout to generate the lot from, using the config seed.
    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Replace the planner.
    pub fn planner<Q: Planner>(self, planner: Q) -> SessionBuilder<Q> {
        SessionBuilder {
            config:  self.config,
            lot:     self.lot,
            layout:  self.layout,
            planner,
        }
    }

    /// Validate the config, generate the lot if none was supplied, wire the
    /// occupancy streams, and return a ready-to-run [`NavSession`].
    pub fn build(self) -> SimResult<NavSession<P>> {
        self.config.validate()?;

        let lot = match self.lot {
            Some(lot) => lot,
            None => {
                let layout = self.layout.unwrap_or_default();
                // Derived stream: the raw seed is already the base of slot
                // 0's occupancy stream, so layout must not draw from it.
                layout.generate(&mut SimRng::new(self.config.seed).child(1))
            }
        };

        let occupancy = OccupancySim::new(
            self.config.seed,
            lot.len(),
            self.config.occupancy_interval_ticks(),
            self.config.flip_probability,
        );

        let state = SessionState::initial(
            lot.entrance,
            self.config.start_mode,
            self.config.start_strategy,
            self.config.parking_allowance_secs,
        );

        let clock = self.config.make_clock();
        Ok(NavSession::from_parts(
            self.config,
            clock,
            lot,
            self.planner,
            occupancy,
            state,
        ))
    }
}
