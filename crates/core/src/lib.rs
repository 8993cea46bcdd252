//! Atari 8-bit executable loader and MOS 6502 disassembler.
//!
//! This crate turns legacy 8-bit binaries into readable listings with the following:
//! 1. **Loader:** Splits XEX containers into `(start, end, data)` segments, falling back to a raw image.
//! 2. **ISA:** A static opcode table and a gap-free linear decoder for the documented 6502 set.
//! 3. **Listing:** Address/mnemonic/operand text, prompt prefixes, tables, and hex dumps.
//! 4. **Statistics:** Coverage and instruction mix for a decode pass.
//!
//! Both the loader and the decoder are pure functions over borrowed input and
//! never fail; only file access and configuration parsing return errors.

/// Common types and constants (addresses, hex formatting, errors).
pub mod common;
/// Loader and listing configuration.
pub mod config;
/// Instruction set (opcode table, decoder, listing renderer).
pub mod isa;
/// Binary loading and XEX segment parsing.
pub mod loader;
/// Listing statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Decoded instruction record produced by [`isa::decode()`].
pub use crate::isa::DecodedInstruction;
/// Loadable segment produced by [`loader::parse_xex()`].
pub use crate::loader::Segment;
