//! STM32F3 line-to-vector table.
//!
//! 36 lines. Beyond the GPIO lines 0..=15 the family fans wakeup sources
//! out over peripheral vectors (PVD, tamper, RTC, USB, I2C, USART/UART) and
//! gathers the comparator lines into two shared vectors with irregular
//! membership: {21, 22, 29} and {30, 31, 32}.
//!
//! Lines 17 and 27 are not wired on this family and have no entry.

use crate::{Family, LineRange, LineSet, Vector, VectorMapping};

/// PVD through EXTI line 16.
pub const PVD: Vector = Vector::new(1);
/// Tamper and timestamp through EXTI line 19.
pub const TAMPER: Vector = Vector::new(2);
/// RTC wakeup through EXTI line 20.
pub const RTC_WAKEUP: Vector = Vector::new(3);
/// Dedicated vector for line 0.
pub const EXTI0: Vector = Vector::new(6);
/// Dedicated vector for line 1.
pub const EXTI1: Vector = Vector::new(7);
/// Dedicated vector for line 2, shared with the touch sense controller.
pub const EXTI2_TS: Vector = Vector::new(8);
/// Dedicated vector for line 3.
pub const EXTI3: Vector = Vector::new(9);
/// Dedicated vector for line 4.
pub const EXTI4: Vector = Vector::new(10);
/// Shared vector for lines 5..=9.
pub const EXTI9_5: Vector = Vector::new(23);
/// I2C1 event, servicing wakeup line 23.
pub const I2C1_EV: Vector = Vector::new(31);
/// I2C2 event, servicing wakeup line 24.
pub const I2C2_EV: Vector = Vector::new(33);
/// USART1 global, servicing wakeup line 25.
pub const USART1: Vector = Vector::new(37);
/// USART2 global, servicing wakeup line 26.
pub const USART2: Vector = Vector::new(38);
/// USART3 global, servicing wakeup line 28.
pub const USART3: Vector = Vector::new(39);
/// Shared vector for lines 10..=15.
pub const EXTI15_10: Vector = Vector::new(40);
/// USB wakeup through EXTI line 18.
pub const USB_WAKEUP: Vector = Vector::new(42);
/// UART4 global, servicing wakeup line 34.
pub const UART4: Vector = Vector::new(52);
/// UART5 global, servicing wakeup line 35.
pub const UART5: Vector = Vector::new(53);
/// Comparators 1..3, sharing lines {21, 22, 29}.
pub const COMP1_2_3: Vector = Vector::new(64);
/// Comparators 4..6, sharing lines {30, 31, 32}.
pub const COMP4_5_6: Vector = Vector::new(65);
/// Comparator 7 through EXTI line 33.
pub const COMP7: Vector = Vector::new(66);

/// The STM32F3 table.
pub static FAMILY: Family = Family {
    name: "stm32f3",
    line_count: 36,
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
            vector: EXTI2_TS,
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
            lines: LineSet::Single(18),
            vector: USB_WAKEUP,
            scan: LineRange::new(18, 19),
        },
        VectorMapping {
            lines: LineSet::Single(19),
            vector: TAMPER,
            scan: LineRange::new(19, 20),
        },
        VectorMapping {
            lines: LineSet::Single(20),
            vector: RTC_WAKEUP,
            scan: LineRange::new(20, 21),
        },
        // The comparator group's scan covers [21, 30); the lines in
        // between belong to other vectors and stay untouched unless
        // actually pending.
        VectorMapping {
            lines: LineSet::Group(&[21, 22, 29]),
            vector: COMP1_2_3,
            scan: LineRange::new(21, 30),
        },
        VectorMapping {
            lines: LineSet::Single(23),
            vector: I2C1_EV,
            scan: LineRange::new(23, 24),
        },
        VectorMapping {
            lines: LineSet::Single(24),
            vector: I2C2_EV,
            scan: LineRange::new(24, 25),
        },
        VectorMapping {
            lines: LineSet::Single(25),
            vector: USART1,
            scan: LineRange::new(25, 26),
        },
        VectorMapping {
            lines: LineSet::Single(26),
            vector: USART2,
            scan: LineRange::new(26, 27),
        },
        VectorMapping {
            lines: LineSet::Single(28),
            vector: USART3,
            scan: LineRange::new(28, 29),
        },
        VectorMapping {
            lines: LineSet::Group(&[30, 31, 32]),
            vector: COMP4_5_6,
            scan: LineRange::new(30, 33),
        },
        VectorMapping {
            lines: LineSet::Single(33),
            vector: COMP7,
            scan: LineRange::new(33, 34),
        },
        VectorMapping {
            lines: LineSet::Single(34),
            vector: UART4,
            scan: LineRange::new(34, 35),
        },
        VectorMapping {
            lines: LineSet::Single(35),
            vector: UART5,
            scan: LineRange::new(35, 36),
        },
    ],
};
