//! Loadable memory segment.

use serde::Serialize;

use crate::common::{hex16, offset_addr};

/// A contiguous block of program bytes and the address range it loads into.
///
/// Invariant: `end >= start` and `data.len() == end - start + 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// First load address (inclusive).
    pub start: u16,
    /// Last load address (inclusive).
    pub end: u16,
    /// Payload bytes.
    pub data: Vec<u8>,
}

impl Segment {
    /// Creates a segment loaded at `start` holding `data`.
    ///
    /// Returns `None` when `data` is empty or would extend past `$FFFF`.
    pub fn new(start: u16, data: Vec<u8>) -> Option<Self> {
        let last = data.len().checked_sub(1)?;
        let end = u16::try_from(usize::from(start) + last).ok()?;
        Some(Self { start, end, data })
    }

    /// Number of payload bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for segments produced by the loader.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if `addr` lies within `start..=end`.
    #[inline]
    pub fn contains(&self, addr: u16) -> bool {
        (self.start..=self.end).contains(&addr)
    }

    /// Returns the payload byte loaded at `addr`, if it lies in this segment.
    pub fn byte_at(&self, addr: u16) -> Option<u8> {
        if !self.contains(addr) {
            return None;
        }
        self.data.get(usize::from(addr - self.start)).copied()
    }

    /// Address of the byte `offset` bytes into the payload.
    #[inline]
    pub const fn addr_of(&self, offset: usize) -> u16 {
        offset_addr(self.start, offset)
    }

    /// Short selector label, e.g. `SEG 0: $0600 - $0601`.
    pub fn label(&self, index: usize) -> String {
        format!("SEG {index}: ${} - ${}", hex16(self.start), hex16(self.end))
    }
}
