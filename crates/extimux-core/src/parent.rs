//! Contract for the parent interrupt controller.

use extimux_map::{LineRange, Vector};

/// The upstream controller (NVIC) the driver hangs its vectors on.
///
/// `install` is called once per distinct vector while wiring; `enable` is
/// called on every line enable and must be idempotent at the controller
/// level.
pub trait ParentController {
    /// Bind `vector` to the dispatch routine for `scan` at `priority`.
    ///
    /// The range is fixed for the lifetime of the process; the controller
    /// is expected to run the driver's dispatch over exactly this range
    /// whenever the vector fires.
    fn install(&self, vector: Vector, priority: u8, scan: LineRange);

    /// Allow delivery of `vector`.
    fn enable(&self, vector: Vector);
}
