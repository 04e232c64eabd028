use crate::model::GRID_CELLS;
use gloo::timers::callback::Timeout;

/// Pending per-cell clear/expiry timers plus the delayed-advance timer.
///
/// `Timeout` cancels on drop, so arming a cell replaces and thereby cancels
/// whatever was scheduled for that cell before. Stamps allocated here are
/// echoed back by the scheduled actions and checked by the reducer, so a
/// handle that somehow outlives its occupancy still cannot act on a newer
/// one.
pub struct CellTimers {
    cells: Vec<Option<Timeout>>,
    advance: Option<Timeout>,
    next_stamp: u64,
}

impl CellTimers {
    pub fn new() -> Self {
        Self {
            cells: (0..GRID_CELLS).map(|_| None).collect(),
            advance: None,
            next_stamp: 0,
        }
    }

    pub fn next_stamp(&mut self) -> u64 {
        self.next_stamp += 1;
        self.next_stamp
    }

    pub fn arm_cell(&mut self, index: usize, timeout: Timeout) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = Some(timeout);
        }
    }

    pub fn arm_advance(&mut self, timeout: Timeout) {
        self.advance = Some(timeout);
    }

    pub fn cancel_all(&mut self) {
        for slot in &mut self.cells {
            slot.take();
        }
        self.advance.take();
    }
}

impl Default for CellTimers {
    fn default() -> Self {
        Self::new()
    }
}
