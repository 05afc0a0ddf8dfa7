//! # EXTIMUX Vector Mapper
//!
//! Static tables resolving an EXTI line to the NVIC vector that services
//! it. Several lines may share one vector; the grouping is irregular and
//! family-specific, so each family carries an explicit table instead of
//! branch logic:
//!
//! - dedicated lines map 1:1 to their own vector;
//! - banked ranges (5..=9, 10..=15) map to one vector per band;
//! - irregular groups (e.g. {21, 22, 29}) map to one shared vector.
//!
//! The mapping is fixed data, chosen once at build time via the `stm32f1`
//! or `stm32f3` feature; it never changes at runtime. Both family tables
//! are always compiled so each stays independently testable.
//!
//! Lookups are pure and return `Option`; a missing entry is a build/family
//! mismatch that the driver layer treats as fatal.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod f1;
pub mod f3;

/// An NVIC interrupt position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vector(u16);

impl Vector {
    /// Create a vector from its NVIC position.
    pub const fn new(position: u16) -> Self {
        Self(position)
    }

    /// The NVIC position.
    pub const fn position(self) -> u16 {
        self.0
    }
}

/// Half-open range of lines `[start, end)` scanned when a vector fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    /// First line of the range.
    pub start: usize,
    /// One past the last line of the range.
    pub end: usize,
}

impl LineRange {
    /// Create a range covering `[start, end)`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `line` falls inside the range.
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }

    /// Iterate the range's lines in ascending order.
    pub fn lines(&self) -> core::ops::Range<usize> {
        self.start..self.end
    }
}

/// The lines a mapping entry claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSet {
    /// One dedicated line.
    Single(usize),
    /// A contiguous band, `first..=last`.
    Span {
        /// First line of the band.
        first: usize,
        /// Last line of the band, inclusive.
        last: usize,
    },
    /// An irregular group of lines sharing one vector.
    Group(&'static [usize]),
}

impl LineSet {
    /// Whether the set claims `line`.
    pub fn contains(&self, line: usize) -> bool {
        match *self {
            Self::Single(l) => l == line,
            Self::Span { first, last } => line >= first && line <= last,
            Self::Group(lines) => lines.contains(&line),
        }
    }
}

/// One table entry: a set of lines, the vector servicing them, and the
/// fixed range its dispatch routine scans.
///
/// For irregular groups the scan range covers the whole group; lines
/// inside the range that belong to other vectors are still served
/// correctly, since dispatch only acts on pending bits.
#[derive(Debug, Clone, Copy)]
pub struct VectorMapping {
    /// Lines this entry claims.
    pub lines: LineSet,
    /// The NVIC vector servicing them.
    pub vector: Vector,
    /// Range bound to the vector's dispatch routine at init.
    pub scan: LineRange,
}

/// A family's complete line-to-vector table.
#[derive(Debug)]
pub struct Family {
    /// Family name, for diagnostics.
    pub name: &'static str,
    /// Number of lines the family exposes; valid lines are `0..line_count`.
    pub line_count: usize,
    /// One entry per distinct vector.
    pub mappings: &'static [VectorMapping],
}

impl Family {
    /// The table entry claiming `line`, if any.
    pub fn mapping_for(&self, line: usize) -> Option<&VectorMapping> {
        self.mappings.iter().find(|m| m.lines.contains(line))
    }

    /// The vector servicing `line`, if any.
    pub fn vector_for(&self, line: usize) -> Option<Vector> {
        self.mapping_for(line).map(|m| m.vector)
    }

    /// The scan range bound to `vector`, if the family uses it.
    pub fn scan_for(&self, vector: Vector) -> Option<LineRange> {
        self.mappings
            .iter()
            .find(|m| m.vector == vector)
            .map(|m| m.scan)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "stm32f1")] {
        /// The family selected at build time.
        pub fn active() -> &'static Family {
            &f1::FAMILY
        }
    } else if #[cfg(feature = "stm32f3")] {
        /// The family selected at build time.
        pub fn active() -> &'static Family {
            &f3::FAMILY
        }
    }
}
