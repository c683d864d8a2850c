//! Slot category enum and the selection filter applied to it.
//!
//! A slot's geometry never changes after layout generation; its category is
//! the only mutable attribute (the occupancy simulator exchanges `Available`
//! and `Occupied`, everything else stays fixed).

/// The current designation of a parking slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotCategory {
    /// Open to any driver.
    #[default]
    Available,
    /// A vehicle is parked here.
    Occupied,
    /// Reserved for drivers with a PWD permit.
    Pwd,
    /// Held for a specific vehicle; never offered to the selector.
    Reserved,
    /// Electric-vehicle charging slot.
    Ev,
}

impl SlotCategory {
    /// `true` for the categories a driver may be routed into.
    ///
    /// `Reserved` and `Occupied` are never open; `Pwd` and `Ev` are open to
    /// holders of the matching permit, which the filter layer enforces.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(
            self,
            SlotCategory::Available | SlotCategory::Pwd | SlotCategory::Ev
        )
    }

    /// Human-readable label, useful for CSV column values and demo output.
    pub fn as_str(self) -> &'static str {
        match self {
            SlotCategory::Available => "available",
            SlotCategory::Occupied  => "occupied",
            SlotCategory::Pwd       => "pwd",
            SlotCategory::Reserved  => "reserved",
            SlotCategory::Ev        => "ev",
        }
    }
}

impl std::fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CategoryFilter ────────────────────────────────────────────────────────────

/// Restricts which open slots the selector and manual tap-select consider.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CategoryFilter {
    /// Any open slot (`Available`, `Pwd`, or `Ev`).
    #[default]
    All,
    /// PWD slots only.
    Pwd,
    /// EV charging slots only.
    Ev,
}

impl CategoryFilter {
    /// `true` if a slot of `category` satisfies this filter.
    #[inline]
    pub fn matches(self, category: SlotCategory) -> bool {
        match self {
            CategoryFilter::All => category.is_open(),
            CategoryFilter::Pwd => category == SlotCategory::Pwd,
            CategoryFilter::Ev  => category == SlotCategory::Ev,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Pwd => "pwd",
            CategoryFilter::Ev  => "ev",
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
