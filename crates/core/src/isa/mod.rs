//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MOS 6502 opcode table, addressing modes, the decoder, and the
//! listing renderer.
//!
//! # Layout
//!
//! * `mode`: Addressing modes and their encoded lengths.
//! * `opcodes`: The 256-entry opcode table.
//! * `instruction`: The decoded instruction record.
//! * `decode`: The linear decode pass and operand formatting.
//! * `disasm`: Listing, prompt, table and hex-dump rendering.

/// Instruction decoding for byte buffers.
pub mod decode;

/// Text rendering of decoded instructions.
pub mod disasm;

/// Decoded instruction record.
pub mod instruction;

/// Addressing mode definitions.
pub mod mode;

/// Static opcode table for the documented 6502 instruction set.
pub mod opcodes;

pub use decode::decode;
pub use instruction::DecodedInstruction;
pub use mode::AddressingMode;
pub use opcodes::{OpcodeDef, lookup};
