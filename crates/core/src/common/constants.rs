//! Global Constants.
//!
//! This module defines constants shared by the loader and the decoder. It includes:
//! 1. **Container Constants:** The optional XEX marker and the segment header size.
//! 2. **Load Constants:** The raw-image fallback address.
//! 3. **Decode Constants:** Sentinel mnemonic and fixed branch length.
//! 4. **Listing Constants:** Prompt truncation limit.

/// Optional two-byte marker at the start of an Atari executable.
pub const XEX_MARKER: [u8; 2] = [0xFF, 0xFF];

/// Size in bytes of a segment header (`start_lo start_hi end_lo end_hi`).
pub const SEGMENT_HEADER_LEN: usize = 4;

/// Minimum buffer length for the leading marker to be recognized.
pub const MARKER_MIN_BUFFER_LEN: usize = 3;

/// Load address used when a buffer holds no parseable segments.
pub const DEFAULT_LOAD_ADDRESS: u16 = 0x2000;

/// Mnemonic emitted for unknown opcodes and truncated tails.
pub const UNKNOWN_MNEMONIC: &str = "???";

/// Encoded length of every relative branch instruction.
///
/// Branch targets are computed from `pc + BRANCH_LENGTH`; no other
/// addressing mode uses this constant.
pub const BRANCH_LENGTH: u16 = 2;

/// Default number of instructions included in a prompt listing.
pub const PROMPT_INSTRUCTION_LIMIT: usize = 300;

/// Default number of bytes per row in a hex dump.
pub const HEX_ROW_WIDTH: usize = 16;

/// Size of the 16-bit address space.
pub const ADDRESS_SPACE: usize = 0x1_0000;
