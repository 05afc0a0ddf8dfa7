//! # EXTIMUX Driver Core
//!
//! Multiplexes the EXTI peripheral's edge-triggered external lines onto
//! their shared NVIC vectors and dispatches each asserted line to an
//! application-registered handler.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ExtiMux<R, P>                         │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────┐   │
//! │  │ CallbackTable │  │ Line config    │  │ Range dispatch │   │
//! │  │ (one slot per │  │ (mask/trigger/ │  │ (scan, clear,  │   │
//! │  │  line)        │  │  vector enable)│  │  invoke)       │   │
//! │  └───────────────┘  └───────┬────────┘  └───────┬────────┘   │
//! └─────────────────────────────┼───────────────────┼────────────┘
//!               R: ExtiBlock ───┘                   │
//!               P: ParentController ◄───────────────┘
//!               Family table (extimux-map) resolves line → vector
//! ```
//!
//! ## Control Flow
//!
//! The application configures a line (trigger edges, callback) and then
//! enables it; hardware pends the line on a detected edge; the NVIC fires
//! the owning vector; the dispatch routine bound to that vector at wiring
//! time scans its fixed line range, clears each pending bit, and invokes
//! the registered callback with `(line, context)`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod callback;
pub mod device;
pub mod parent;

pub use callback::{CallbackTable, LineCallback, LINE_CAPACITY};
pub use device::ExtiMux;
pub use parent::ParentController;

// Re-export the collaborating contracts for consumers.
pub use extimux_map::{f1, f3, Family, LineRange, LineSet, Vector, VectorMapping};
pub use extimux_regs::{ExtiBlock, MmioExti, SimExti, TriggerEdges};

#[cfg(any(feature = "stm32f1", feature = "stm32f3"))]
pub use extimux_map::active;
