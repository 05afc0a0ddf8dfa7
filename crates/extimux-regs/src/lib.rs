//! # EXTIMUX Register Contract
//!
//! Bit-per-line access to the EXTI register block. Every register is 32 bits
//! wide and covers one bank of 32 lines; devices with more lines carry a
//! second bank at a fixed stride.
//!
//! ## Register Map (per bank)
//!
//! ```text
//! Offset   Register   Purpose
//! ──────────────────────────────────────────────────────
//! 0x00     IMR        Interrupt mask (1 = line may assert)
//! 0x04     EMR        Event mask (layout only, unused here)
//! 0x08     RTSR       Rising trigger selection
//! 0x0C     FTSR       Falling trigger selection
//! 0x10     SWIER      Software interrupt event
//! 0x14     PR         Pending (write one to clear)
//! ```
//!
//! The driver core talks to the block through [`ExtiBlock`] so the same
//! logic runs against real hardware ([`MmioExti`]) and against the
//! host-side model used in tests ([`SimExti`]).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod mmio;
pub mod sim;

pub use mmio::MmioExti;
pub use sim::SimExti;

use bitflags::bitflags;

/// Number of lines covered by one register bank.
pub const LINES_PER_BANK: usize = 32;

/// Number of banks the contract addresses.
pub const BANK_COUNT: usize = 2;

/// Highest line number representable by the register contract, exclusive.
pub const LINE_LIMIT: usize = LINES_PER_BANK * BANK_COUNT;

bitflags! {
    /// Edge selection for a line's trigger configuration.
    ///
    /// Edge bits are additive: selecting one edge never clears the other.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TriggerEdges: u8 {
        /// Detect low-to-high transitions.
        const RISING = 1 << 0;
        /// Detect high-to-low transitions.
        const FALLING = 1 << 1;
    }
}

/// Access contract for the EXTI register block.
///
/// All operations are infallible bit mutations; line numbers must be below
/// [`LINE_LIMIT`]. Implementations are shared between thread context
/// (configuration) and interrupt context (pending test/clear), so every
/// method takes `&self`.
pub trait ExtiBlock {
    /// Set the line's mask bit, allowing it to assert.
    fn set_mask(&self, line: usize);

    /// Clear the line's mask bit. A cleared line cannot assert.
    fn clear_mask(&self, line: usize);

    /// Read the line's mask bit.
    fn mask(&self, line: usize) -> bool;

    /// Select the rising edge for the line.
    fn set_rising(&self, line: usize);

    /// Select the falling edge for the line.
    fn set_falling(&self, line: usize);

    /// Read the line's rising trigger bit.
    fn rising(&self, line: usize) -> bool;

    /// Read the line's falling trigger bit.
    fn falling(&self, line: usize) -> bool;

    /// Raise the line's software interrupt event.
    ///
    /// Pends the line as if its configured edge had been detected; the
    /// line's mask bit still gates the assertion.
    fn assert_software(&self, line: usize);

    /// Test the line's pending bit.
    fn is_pending(&self, line: usize) -> bool;

    /// Clear the line's pending bit.
    ///
    /// The pending register is write-one-to-clear: exactly `1 << bit` is
    /// written, leaving other lines' pending state untouched.
    fn clear_pending(&self, line: usize);
}
