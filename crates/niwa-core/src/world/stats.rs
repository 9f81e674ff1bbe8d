//! Simulation statistics collection

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Trait for collecting simulation statistics
///
/// Rule sets report what they did without knowing who is listening.
pub trait SimStats {
    /// A cell moved or swapped with a neighbor (falls, sinks, flows)
    fn record_cell_moved(&mut self);

    /// A cell changed material in place (absorption, germination, death, starvation)
    fn record_state_change(&mut self);

    /// A plant claimed a neighboring cell (spread or parasitic consumption)
    fn record_growth(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_growth(&mut self) {}
}

/// Counting implementation used by the scheduler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    pub cells_moved: u64,
    pub state_changes: u64,
    pub growth: u64,
}

impl TickStats {
    /// Whether anything happened at all
    pub fn is_idle(&self) -> bool {
        self.cells_moved == 0 && self.state_changes == 0 && self.growth == 0
    }
}

impl SimStats for TickStats {
    fn record_cell_moved(&mut self) {
        self.cells_moved += 1;
    }

    fn record_state_change(&mut self) {
        self.state_changes += 1;
    }

    fn record_growth(&mut self) {
        self.growth += 1;
    }
}

impl AddAssign for TickStats {
    fn add_assign(&mut self, other: Self) {
        self.cells_moved += other.cells_moved;
        self.state_changes += other.state_changes;
        self.growth += other.growth;
    }
}
