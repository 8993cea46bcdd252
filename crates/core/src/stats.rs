//! Listing statistics collection and reporting.
//!
//! This module summarizes one decode pass. It provides:
//! 1. **Coverage:** Bytes decoded as documented opcodes versus sentinel bytes.
//! 2. **Instruction mix:** Counts by addressing mode, plus branch and jump totals.
//! 3. **Tail state:** Whether the pass ended on a truncated instruction.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::isa::{AddressingMode, DecodedInstruction, lookup};

/// Summary of a decoded instruction stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisasmStats {
    /// Number of records in the stream, sentinels included.
    pub instructions: usize,
    /// Total bytes covered by the stream.
    pub bytes: usize,
    /// Number of `"???"` records.
    pub unknown: usize,
    /// Bytes covered by `"???"` records.
    pub unknown_bytes: usize,
    /// Relative branch count.
    pub branches: usize,
    /// `JMP` and `JSR` count.
    pub jumps: usize,
    /// True when the pass ended on an incomplete encoding: the last record is
    /// a sentinel that spans several bytes or starts with a known opcode.
    pub truncated_tail: bool,
    /// Record count per addressing mode.
    pub modes: BTreeMap<AddressingMode, usize>,
}

/// Returns true when `bytes` begin a known opcode but do not complete it.
fn is_truncated_encoding(bytes: &[u8]) -> bool {
    bytes.len() > 1 || bytes.first().and_then(|&op| lookup(op)).is_some()
}

impl DisasmStats {
    /// Tallies a decoded instruction stream.
    pub fn from_instructions(instructions: &[DecodedInstruction]) -> Self {
        let mut stats = Self::default();
        for inst in instructions {
            stats.instructions += 1;
            stats.bytes += inst.encoded_len();
            *stats.modes.entry(inst.mode).or_insert(0) += 1;
            match inst.mode {
                AddressingMode::Unknown => {
                    stats.unknown += 1;
                    stats.unknown_bytes += inst.encoded_len();
                }
                AddressingMode::Relative => stats.branches += 1,
                _ if matches!(inst.mnemonic, "JMP" | "JSR") => stats.jumps += 1,
                _ => {}
            }
        }
        stats.truncated_tail = instructions
            .last()
            .is_some_and(|last| last.is_unknown() && is_truncated_encoding(&last.bytes));
        stats
    }

    /// Fraction of bytes decoded as documented instructions, in `0.0..=1.0`.
    ///
    /// An empty stream has full coverage.
    pub fn coverage(&self) -> f64 {
        if self.bytes == 0 {
            return 1.0;
        }
        (self.bytes - self.unknown_bytes) as f64 / self.bytes as f64
    }

    /// Count of records decoded with `mode`.
    pub fn mode_count(&self, mode: AddressingMode) -> usize {
        self.modes.get(&mode).copied().unwrap_or(0)
    }

    /// Renders the report printed by [`DisasmStats::print`].
    pub fn report(&self) -> String {
        let total = self.instructions.max(1) as f64;
        let mut out = String::new();
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "6502 LISTING STATISTICS");
        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "instructions             {}", self.instructions);
        let _ = writeln!(out, "bytes                    {}", self.bytes);
        let _ = writeln!(
            out,
            "unknown                  {} ({} bytes)",
            self.unknown, self.unknown_bytes
        );
        let _ = writeln!(out, "coverage                 {:.2}%", self.coverage() * 100.0);
        let _ = writeln!(out, "truncated_tail           {}", self.truncated_tail);
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "CONTROL FLOW");
        let _ = writeln!(
            out,
            "  op.branch              {} ({:.2}%)",
            self.branches,
            self.branches as f64 / total * 100.0
        );
        let _ = writeln!(
            out,
            "  op.jump                {} ({:.2}%)",
            self.jumps,
            self.jumps as f64 / total * 100.0
        );
        let _ = writeln!(out, "----------------------------------------------------------");
        let _ = writeln!(out, "ADDRESSING MODES");
        for (mode, count) in &self.modes {
            let _ = writeln!(
                out,
                "  mode.{:<17} {} ({:.2}%)",
                mode.tag(),
                count,
                *count as f64 / total * 100.0
            );
        }
        let _ = write!(out, "==========================================================");
        out
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        println!("{}", self.report());
    }
}
