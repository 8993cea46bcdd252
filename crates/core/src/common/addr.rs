//! 16-bit Address Arithmetic.
//!
//! The 6502 address bus is 16 bits wide. This module provides:
//! 1. **Offsetting:** Adding a byte offset to a load address with program-counter wrap at `$FFFF`.
//! 2. **Formatting:** The uppercase, zero-padded hex renderers every listing relies on.

/// Returns `base + offset` in the 16-bit address space.
///
/// The program counter wraps from `$FFFF` to `$0000`; only the low 16 bits
/// of `offset` contribute.
///
/// # Arguments
///
/// * `base` - Load address of the first byte.
/// * `offset` - Byte offset from `base`.
#[inline]
pub const fn offset_addr(base: u16, offset: usize) -> u16 {
    base.wrapping_add(offset as u16)
}

/// Formats a byte as two uppercase hex digits (`0A`).
#[inline]
pub fn hex8(value: u8) -> String {
    format!("{value:02X}")
}

/// Formats an address as four uppercase hex digits (`0600`).
#[inline]
pub fn hex16(value: u16) -> String {
    format!("{value:04X}")
}
