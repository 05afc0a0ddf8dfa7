//! Software model of the EXTI register block.
//!
//! Mirrors the hardware contract closely enough for host-side testing of
//! the driver core: pending is write-one-to-clear, a software assert is
//! gated by the line's mask bit, and an edge stimulus consults the trigger
//! selection the way the edge detector does.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::{ExtiBlock, TriggerEdges, BANK_COUNT, LINES_PER_BANK, LINE_LIMIT};

/// One simulated bank of registers.
struct SimBank {
    imr: AtomicU32,
    rtsr: AtomicU32,
    ftsr: AtomicU32,
    swier: AtomicU32,
    pr: AtomicU32,
}

impl SimBank {
    const fn new() -> Self {
        Self {
            imr: AtomicU32::new(0),
            rtsr: AtomicU32::new(0),
            ftsr: AtomicU32::new(0),
            swier: AtomicU32::new(0),
            pr: AtomicU32::new(0),
        }
    }
}

/// Host-side stand-in for the memory-mapped block.
pub struct SimExti {
    banks: [SimBank; BANK_COUNT],
}

impl SimExti {
    /// Create a block with every register zeroed.
    pub const fn new() -> Self {
        Self {
            banks: [SimBank::new(), SimBank::new()],
        }
    }

    #[inline]
    fn bank(&self, line: usize) -> &SimBank {
        debug_assert!(line < LINE_LIMIT);
        &self.banks[line / LINES_PER_BANK]
    }

    #[inline]
    fn bit(line: usize) -> u32 {
        1 << (line % LINES_PER_BANK)
    }

    /// Simulate an external edge on the line.
    ///
    /// The line pends only if its mask bit is set and the given edge is
    /// selected in the trigger configuration, matching the detector's
    /// behavior on hardware.
    pub fn edge(&self, line: usize, edge: TriggerEdges) {
        let bank = self.bank(line);
        let bit = Self::bit(line);
        if bank.imr.load(Ordering::Relaxed) & bit == 0 {
            return;
        }
        let rising = bank.rtsr.load(Ordering::Relaxed) & bit != 0;
        let falling = bank.ftsr.load(Ordering::Relaxed) & bit != 0;
        let selected = (edge.contains(TriggerEdges::RISING) && rising)
            || (edge.contains(TriggerEdges::FALLING) && falling);
        if selected {
            bank.pr.fetch_or(bit, Ordering::Relaxed);
        }
    }

    /// Raw pending word of a bank, for register-level assertions.
    pub fn pending_word(&self, bank: usize) -> u32 {
        self.banks[bank].pr.load(Ordering::Relaxed)
    }

    /// Raw mask word of a bank, for register-level assertions.
    pub fn mask_word(&self, bank: usize) -> u32 {
        self.banks[bank].imr.load(Ordering::Relaxed)
    }
}

impl ExtiBlock for SimExti {
    fn set_mask(&self, line: usize) {
        self.bank(line).imr.fetch_or(Self::bit(line), Ordering::Relaxed);
    }

    fn clear_mask(&self, line: usize) {
        self.bank(line).imr.fetch_and(!Self::bit(line), Ordering::Relaxed);
    }

    fn mask(&self, line: usize) -> bool {
        self.bank(line).imr.load(Ordering::Relaxed) & Self::bit(line) != 0
    }

    fn set_rising(&self, line: usize) {
        self.bank(line).rtsr.fetch_or(Self::bit(line), Ordering::Relaxed);
    }

    fn set_falling(&self, line: usize) {
        self.bank(line).ftsr.fetch_or(Self::bit(line), Ordering::Relaxed);
    }

    fn rising(&self, line: usize) -> bool {
        self.bank(line).rtsr.load(Ordering::Relaxed) & Self::bit(line) != 0
    }

    fn falling(&self, line: usize) -> bool {
        self.bank(line).ftsr.load(Ordering::Relaxed) & Self::bit(line) != 0
    }

    fn assert_software(&self, line: usize) {
        let bank = self.bank(line);
        let bit = Self::bit(line);
        bank.swier.fetch_or(bit, Ordering::Relaxed);
        // The mask bit gates assertion; a masked line never pends.
        if bank.imr.load(Ordering::Relaxed) & bit != 0 {
            bank.pr.fetch_or(bit, Ordering::Relaxed);
        }
    }

    fn is_pending(&self, line: usize) -> bool {
        self.bank(line).pr.load(Ordering::Relaxed) & Self::bit(line) != 0
    }

    fn clear_pending(&self, line: usize) {
        let bank = self.bank(line);
        let bit = Self::bit(line);
        bank.pr.fetch_and(!bit, Ordering::Relaxed);
        // Hardware retires the software event bit with the pending bit.
        bank.swier.fetch_and(!bit, Ordering::Relaxed);
    }
}
