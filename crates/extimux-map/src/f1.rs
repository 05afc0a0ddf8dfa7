//! STM32F1 line-to-vector table.
//!
//! 19 lines: 0..=15 are GPIO edges, 16 is the programmable voltage
//! detector, 17 the RTC alarm, 18 the USB wakeup source.

use crate::{Family, LineRange, LineSet, Vector, VectorMapping};

/// PVD through EXTI line 16.
pub const PVD: Vector = Vector::new(1);
/// Dedicated vector for line 0.
pub const EXTI0: Vector = Vector::new(6);
/// Dedicated vector for line 1.
pub const EXTI1: Vector = Vector::new(7);
/// Dedicated vector for line 2.
pub const EXTI2: Vector = Vector::new(8);
/// Dedicated vector for line 3.
pub const EXTI3: Vector = Vector::new(9);
/// Dedicated vector for line 4.
pub const EXTI4: Vector = Vector::new(10);
/// Shared vector for lines 5..=9.
pub const EXTI9_5: Vector = Vector::new(23);
/// Shared vector for lines 10..=15.
pub const EXTI15_10: Vector = Vector::new(40);
/// RTC alarm through EXTI line 17.
pub const RTC_ALARM: Vector = Vector::new(41);
/// USB wakeup through EXTI line 18.
pub const USB_WAKEUP: Vector = Vector::new(42);

/// The STM32F1 table.
pub static FAMILY: Family = Family {
    name: "stm32f1",
    line_count: 19,
    mappings: &[
        VectorMapping {
            lines: LineSet::Single(0),
            vector: EXTI0,
            scan: LineRange::new(0, 1),
        },
        VectorMapping {
            lines: LineSet::Single(1),
            vector: EXTI1,
            scan: LineRange::new(1, 2),
        },
        VectorMapping {
            lines: LineSet::Single(2),
            vector: EXTI2,
            scan: LineRange::new(2, 3),
        },
        VectorMapping {
            lines: LineSet::Single(3),
            vector: EXTI3,
            scan: LineRange::new(3, 4),
        },
        VectorMapping {
            lines: LineSet::Single(4),
            vector: EXTI4,
            scan: LineRange::new(4, 5),
        },
        VectorMapping {
            lines: LineSet::Span { first: 5, last: 9 },
            vector: EXTI9_5,
            scan: LineRange::new(5, 10),
        },
        VectorMapping {
            lines: LineSet::Span { first: 10, last: 15 },
            vector: EXTI15_10,
            scan: LineRange::new(10, 16),
        },
        VectorMapping {
            lines: LineSet::Single(16),
            vector: PVD,
            scan: LineRange::new(16, 17),
        },
        VectorMapping {
            lines: LineSet::Single(17),
            vector: RTC_ALARM,
            scan: LineRange::new(17, 18),
        },
        VectorMapping {
            lines: LineSet::Single(18),
            vector: USB_WAKEUP,
            scan: LineRange::new(18, 19),
        },
    ],
};
