//! Per-line callback registry.
//!
//! A fixed table with one slot per line. Registration is exclusive: a
//! line holds at most one `(handler, context)` pair at any time, and
//! registering over an occupied slot is a fatal programmer error.

use core::ptr;

use spin::Mutex;

/// Handler invoked when a line's pending bit is served.
pub type LineCallback = fn(line: usize, context: *mut ());

/// Slots in the table; sized for the largest supported family.
pub const LINE_CAPACITY: usize = 36;

/// One registered `(handler, context)` pair, or empty.
#[derive(Clone, Copy)]
pub struct CallbackSlot {
    handler: Option<LineCallback>,
    context: *mut (),
}

// The context pointer is only ever handed back to the handler that was
// registered with it.
unsafe impl Send for CallbackSlot {}

impl CallbackSlot {
    /// The default, unregistered state.
    pub const EMPTY: Self = Self {
        handler: None,
        context: ptr::null_mut(),
    };

    /// Invoke the handler with `(line, context)`, if one is registered.
    pub fn invoke(self, line: usize) {
        if let Some(handler) = self.handler {
            handler(line, self.context);
        }
    }

    /// Whether a handler is registered.
    pub fn is_registered(&self) -> bool {
        self.handler.is_some()
    }
}

/// The driver-wide callback table.
///
/// Shared between thread context (registration) and interrupt context
/// (dispatch); the lock is held only to copy or replace a slot, never
/// across a handler invocation.
pub struct CallbackTable {
    slots: Mutex<[CallbackSlot; LINE_CAPACITY]>,
}

impl CallbackTable {
    /// Create a table with every slot empty.
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new([CallbackSlot::EMPTY; LINE_CAPACITY]),
        }
    }

    /// Register `(handler, context)` for `line`.
    ///
    /// Registration is single-slot and not stacked; a line that already
    /// holds a handler aborts.
    ///
    /// # Safety
    /// `context` must stay valid until the registration is removed and
    /// any in-flight invocation has returned.
    pub unsafe fn register(&self, line: usize, handler: LineCallback, context: *mut ()) {
        let mut slots = self.slots.lock();
        assert!(
            !slots[line].is_registered(),
            "line {} already has a registered callback",
            line
        );
        slots[line] = CallbackSlot {
            handler: Some(handler),
            context,
        };
    }

    /// Clear `line`'s slot. Safe on an already-empty slot.
    ///
    /// Does not interrupt an invocation of the removed handler that is
    /// already executing; callers needing mutual exclusion with in-flight
    /// handlers provide it externally.
    pub fn unregister(&self, line: usize) {
        self.slots.lock()[line] = CallbackSlot::EMPTY;
    }

    /// Copy `line`'s slot out for invocation outside the lock.
    pub fn snapshot(&self, line: usize) -> CallbackSlot {
        self.slots.lock()[line]
    }
}

// ============================================================================
// Tests
// ============================================================================
