//! The driver instance: line configuration, wiring, and dispatch.

use core::sync::atomic::{AtomicBool, Ordering};

use extimux_map::{Family, LineRange, Vector};
use extimux_regs::{ExtiBlock, TriggerEdges};

use crate::callback::{CallbackTable, LineCallback};
use crate::parent::ParentController;

// ============================================================================
// Driver Instance
// ============================================================================

/// One EXTI controller.
///
/// Owns the callback table exclusively; firmware embeds a single instance
/// for the device, tests build as many as they like. `R` is the register
/// block accessor, `P` the parent interrupt controller.
///
/// The instance starts unwired; [`ExtiMux::wire`] binds every vector of
/// the family's mapping to its fixed scan range exactly once, and there
/// is no reverse transition for the lifetime of the process.
pub struct ExtiMux<R, P> {
    regs: R,
    parent: P,
    family: &'static Family,
    callbacks: CallbackTable,
    wired: AtomicBool,
}

impl<R: ExtiBlock, P: ParentController> ExtiMux<R, P> {
    /// Create an unwired instance with an all-empty callback table.
    pub const fn new(regs: R, parent: P, family: &'static Family) -> Self {
        Self {
            regs,
            parent,
            family,
            callbacks: CallbackTable::new(),
            wired: AtomicBool::new(false),
        }
    }

    /// Bind every vector in the family's mapping to its dispatch range at
    /// the parent controller, all at `priority`.
    ///
    /// Panics if called twice; the wiring happens exactly once.
    pub fn wire(&self, priority: u8) {
        assert!(
            !self.wired.swap(true, Ordering::AcqRel),
            "exti: vectors already wired"
        );
        for mapping in self.family.mappings {
            self.parent.install(mapping.vector, priority, mapping.scan);
            log::debug!(
                "exti: vector {} bound to lines [{}, {})",
                mapping.vector.position(),
                mapping.scan.start,
                mapping.scan.end
            );
        }
        log::info!(
            "exti: {} wired, {} vectors",
            self.family.name,
            self.family.mappings.len()
        );
    }

    /// Whether [`ExtiMux::wire`] has run.
    pub fn is_wired(&self) -> bool {
        self.wired.load(Ordering::Acquire)
    }

    // ========================================================================
    // Line Configuration
    // ========================================================================

    /// Enable `line`: set its mask bit and enable the owning vector at
    /// the parent controller.
    ///
    /// Re-enabling a vector shared with other lines is idempotent at the
    /// controller level. Panics if the line has no vector mapping under
    /// the active family; that is a build/family mismatch, not a runtime
    /// condition.
    pub fn enable(&self, line: usize) {
        debug_assert!(self.is_wired(), "exti: enable before wiring");
        self.regs.set_mask(line);
        let mapping = match self.family.mapping_for(line) {
            Some(m) => m,
            None => panic!(
                "exti: line {} has no vector mapping on {}",
                line, self.family.name
            ),
        };
        self.parent.enable(mapping.vector);
    }

    /// Disable `line`: clear its mask bit.
    ///
    /// The vector-level enable at the parent is left alone even if this
    /// was the vector's last active line; the remaining lines are each
    /// individually masked, so the vector can no longer assert.
    pub fn disable(&self, line: usize) {
        debug_assert!(line < self.family.line_count);
        self.regs.clear_mask(line);
    }

    /// Select trigger edges for `line`.
    ///
    /// Edge bits are set independently and additively; there is no
    /// operation to clear a previously selected edge.
    pub fn configure_trigger(&self, line: usize, edges: TriggerEdges) {
        debug_assert!(line < self.family.line_count);
        if edges.contains(TriggerEdges::RISING) {
            self.regs.set_rising(line);
        }
        if edges.contains(TriggerEdges::FALLING) {
            self.regs.set_falling(line);
        }
    }

    /// Test `line`'s pending bit.
    pub fn is_pending(&self, line: usize) -> bool {
        self.regs.is_pending(line)
    }

    /// Clear `line`'s pending bit.
    pub fn clear_pending(&self, line: usize) {
        self.regs.clear_pending(line);
    }

    /// Pend `line` through the software interrupt event register.
    pub fn software_interrupt(&self, line: usize) {
        debug_assert!(line < self.family.line_count);
        self.regs.assert_software(line);
    }

    // ========================================================================
    // Callback Registry
    // ========================================================================

    /// Register `(handler, context)` for `line`.
    ///
    /// Panics if the line already holds a handler; registration is
    /// exclusive and not stacked. Configure the line fully before
    /// [`ExtiMux::enable`]; an edge detected between a partial
    /// configuration and the enable is unspecified.
    ///
    /// # Safety
    /// `context` must stay valid until [`ExtiMux::unset_callback`] has
    /// run and any in-flight invocation has returned.
    pub unsafe fn set_callback(&self, line: usize, handler: LineCallback, context: *mut ()) {
        debug_assert!(line < self.family.line_count);
        unsafe { self.callbacks.register(line, handler, context) }
    }

    /// Clear `line`'s callback slot; safe on an empty slot.
    pub fn unset_callback(&self, line: usize) {
        self.callbacks.unregister(line);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Serve every pending line in `scan`, ascending.
    ///
    /// For each pending line the pending bit is cleared first, then the
    /// registered callback (if any) runs with `(line, context)`; an event
    /// on a line without a callback is dropped after the clear. A line
    /// that retriggers during its own handler pends again and is served
    /// on the vector's next fire, not within this pass.
    pub fn dispatch(&self, scan: LineRange) {
        for line in scan.lines() {
            if self.regs.is_pending(line) {
                self.regs.clear_pending(line);
                self.callbacks.snapshot(line).invoke(line);
            }
        }
    }

    /// Serve the fixed range bound to `vector`.
    pub fn dispatch_vector(&self, vector: Vector) {
        if let Some(scan) = self.family.scan_for(vector) {
            self.dispatch(scan);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The register block accessor.
    pub fn regs(&self) -> &R {
        &self.regs
    }

    /// The parent controller handle.
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The active family table.
    pub fn family(&self) -> &'static Family {
        self.family
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    use extimux_map::f3;
    use extimux_regs::SimExti;
    use spin::Mutex;

    /// Recording stand-in for the NVIC.
    struct FakeNvic {
        installed: Mutex<Vec<(Vector, u8, LineRange)>>,
        enabled: Mutex<Vec<Vector>>,
        enable_calls: AtomicUsize,
    }

    impl FakeNvic {
        fn new() -> Self {
            Self {
                installed: Mutex::new(Vec::new()),
                enabled: Mutex::new(Vec::new()),
                enable_calls: AtomicUsize::new(0),
            }
        }

        fn is_enabled(&self, vector: Vector) -> bool {
            self.enabled.lock().contains(&vector)
        }

        fn enabled_count(&self) -> usize {
            self.enabled.lock().len()
        }
    }

    impl ParentController for FakeNvic {
        fn install(&self, vector: Vector, priority: u8, scan: LineRange) {
            self.installed.lock().push((vector, priority, scan));
        }

        // Enabling an already-enabled vector is harmless, as on the
        // real controller.
        fn enable(&self, vector: Vector) {
            self.enable_calls.fetch_add(1, Ordering::Relaxed);
            let mut enabled = self.enabled.lock();
            if !enabled.contains(&vector) {
                enabled.push(vector);
            }
        }
    }

    /// Callback target reached through the context pointer.
    #[derive(Default)]
    struct HitLog {
        lines: Mutex<Vec<usize>>,
    }

    fn record_hit(line: usize, context: *mut ()) {
        let log = unsafe { &*(context as *const HitLog) };
        log.lines.lock().push(line);
    }

    fn f3_device() -> ExtiMux<SimExti, FakeNvic> {
        let dev = ExtiMux::new(SimExti::new(), FakeNvic::new(), &f3::FAMILY);
        dev.wire(0);
        dev
    }

    fn ctx(log: &HitLog) -> *mut () {
        log as *const HitLog as *mut ()
    }

    #[test]
    fn test_wire_installs_every_vector_once() {
        let dev = ExtiMux::new(SimExti::new(), FakeNvic::new(), &f3::FAMILY);
        dev.wire(4);
        assert!(dev.is_wired());

        let installed = dev.parent().installed.lock();
        assert_eq!(installed.len(), f3::FAMILY.mappings.len());
        assert!(installed.iter().all(|&(_, priority, _)| priority == 4));
        assert!(installed
            .iter()
            .any(|&(v, _, scan)| v == f3::COMP1_2_3 && scan == LineRange::new(21, 30)));
    }

    #[test]
    #[should_panic(expected = "already wired")]
    fn test_wiring_twice_aborts() {
        let dev = f3_device();
        dev.wire(0);
    }

    #[test]
    fn test_enable_sets_mask_and_parent_vector() {
        let dev = f3_device();
        dev.enable(7);
        assert!(dev.regs().mask(7));
        assert!(dev.parent().is_enabled(f3::EXTI9_5));
    }

    #[test]
    fn test_shared_vector_enabled_once_in_effect() {
        let dev = f3_device();
        for line in [5, 6, 7, 8, 9] {
            dev.enable(line);
        }
        assert_eq!(dev.parent().enable_calls.load(Ordering::Relaxed), 5);
        assert_eq!(dev.parent().enabled_count(), 1);
        assert!(dev.parent().is_enabled(f3::EXTI9_5));
    }

    #[test]
    #[should_panic(expected = "no vector mapping")]
    fn test_enable_unmapped_line_aborts() {
        let dev = f3_device();
        // Line 17 is not wired on this family.
        dev.enable(17);
    }

    #[test]
    fn test_disable_clears_mask_only() {
        let dev = f3_device();
        dev.enable(12);
        dev.disable(12);
        assert!(!dev.regs().mask(12));
        // The vector-level enable is never revisited.
        assert!(dev.parent().is_enabled(f3::EXTI15_10));
    }

    #[test]
    fn test_trigger_edges_accumulate() {
        let dev = f3_device();
        dev.configure_trigger(3, TriggerEdges::RISING);
        dev.configure_trigger(3, TriggerEdges::FALLING);
        assert!(dev.regs().rising(3));
        assert!(dev.regs().falling(3));
    }

    #[test]
    fn test_clear_pending_then_not_pending() {
        let dev = f3_device();
        for line in 0..f3::FAMILY.line_count {
            dev.clear_pending(line);
            assert!(!dev.is_pending(line));
        }
    }

    #[test]
    fn test_dispatch_serves_only_pending_lines() {
        let dev = f3_device();
        let hits = HitLog::default();
        for line in 5..10 {
            dev.enable(line);
            unsafe { dev.set_callback(line, record_hit, ctx(&hits)) };
        }
        dev.software_interrupt(7);

        dev.dispatch(LineRange::new(5, 10));
        assert_eq!(*hits.lines.lock(), vec![7]);
        assert!(!dev.is_pending(7));
        for line in [5, 6, 8, 9] {
            assert!(!dev.is_pending(line));
        }
    }

    #[test]
    fn test_dispatch_clears_pending_and_invokes_once() {
        let dev = f3_device();
        let hits = HitLog::default();
        dev.enable(12);
        unsafe { dev.set_callback(12, record_hit, ctx(&hits)) };
        dev.software_interrupt(12);
        assert!(dev.is_pending(12));

        dev.dispatch_vector(f3::EXTI15_10);
        assert_eq!(*hits.lines.lock(), vec![12]);
        assert!(!dev.is_pending(12));

        // A second fire with nothing pending serves nothing.
        dev.dispatch_vector(f3::EXTI15_10);
        assert_eq!(*hits.lines.lock(), vec![12]);
    }

    #[test]
    fn test_dispatch_order_is_ascending() {
        let dev = f3_device();
        let hits = HitLog::default();
        for line in [5, 6, 8, 9] {
            dev.enable(line);
            unsafe { dev.set_callback(line, record_hit, ctx(&hits)) };
        }
        dev.software_interrupt(9);
        dev.software_interrupt(5);
        dev.software_interrupt(8);

        dev.dispatch_vector(f3::EXTI9_5);
        assert_eq!(*hits.lines.lock(), vec![5, 8, 9]);
    }

    #[test]
    fn test_event_without_callback_is_dropped_after_clear() {
        let dev = f3_device();
        dev.enable(6);
        dev.software_interrupt(6);

        dev.dispatch_vector(f3::EXTI9_5);
        assert!(!dev.is_pending(6));
    }

    #[test]
    fn test_shared_comparator_vector_serves_only_line_29() {
        let dev = f3_device();
        let hits = HitLog::default();
        for line in [21, 22, 29] {
            dev.enable(line);
            unsafe { dev.set_callback(line, record_hit, ctx(&hits)) };
        }
        dev.software_interrupt(29);

        dev.dispatch_vector(f3::COMP1_2_3);
        assert_eq!(*hits.lines.lock(), vec![29]);
        assert!(!dev.is_pending(29));
        assert!(!dev.is_pending(21));
        assert!(!dev.is_pending(22));
    }

    #[test]
    fn test_retrigger_during_handler_waits_for_next_fire() {
        static HITS: AtomicUsize = AtomicUsize::new(0);

        fn retrigger(line: usize, context: *mut ()) {
            HITS.fetch_add(1, Ordering::Relaxed);
            let regs = unsafe { &*(context as *const SimExti) };
            regs.assert_software(line);
        }

        let dev = f3_device();
        dev.enable(4);
        let regs_ptr = dev.regs() as *const SimExti as *mut ();
        unsafe { dev.set_callback(4, retrigger, regs_ptr) };
        dev.software_interrupt(4);

        dev.dispatch_vector(f3::EXTI4);
        // Served once; the retrigger is captured as pending again.
        assert_eq!(HITS.load(Ordering::Relaxed), 1);
        assert!(dev.is_pending(4));

        dev.unset_callback(4);
        dev.dispatch_vector(f3::EXTI4);
        assert!(!dev.is_pending(4));
        assert_eq!(HITS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_edge_flow_from_trigger_to_callback() {
        let dev = f3_device();
        let hits = HitLog::default();
        dev.configure_trigger(0, TriggerEdges::FALLING);
        unsafe { dev.set_callback(0, record_hit, ctx(&hits)) };
        dev.enable(0);

        // The selected edge pends the line; the other does not.
        dev.regs().edge(0, TriggerEdges::RISING);
        assert!(!dev.is_pending(0));
        dev.regs().edge(0, TriggerEdges::FALLING);
        assert!(dev.is_pending(0));

        dev.dispatch_vector(f3::EXTI0);
        assert_eq!(*hits.lines.lock(), vec![0]);
    }

    #[test]
    fn test_masked_line_is_not_served() {
        let dev = f3_device();
        let hits = HitLog::default();
        dev.enable(10);
        unsafe { dev.set_callback(10, record_hit, ctx(&hits)) };
        dev.disable(10);

        // A masked line never pends, so the fire finds nothing.
        dev.software_interrupt(10);
        dev.dispatch_vector(f3::EXTI15_10);
        assert!(hits.lines.lock().is_empty());
    }

    #[test]
    fn test_f1_family_device() {
        use extimux_map::f1;

        let dev = ExtiMux::new(SimExti::new(), FakeNvic::new(), &f1::FAMILY);
        dev.wire(0);
        let hits = HitLog::default();

        dev.enable(16);
        unsafe { dev.set_callback(16, record_hit, ctx(&hits)) };
        dev.software_interrupt(16);
        dev.dispatch_vector(f1::PVD);

        assert_eq!(*hits.lines.lock(), vec![16]);
        assert!(dev.parent().is_enabled(f1::PVD));
    }
}
