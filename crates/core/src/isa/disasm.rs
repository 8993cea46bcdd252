//! Listing Renderer for decoded 6502 code.
//!
//! Converts decoded instructions into the text consumed by human-facing views
//! and by the prompt sent to an external decompilation model.
//!
//! # Formats
//!
//! - Listing line: `AAAA  MMM operand` (address, two spaces, mnemonic, space, operand)
//! - Table row: address, raw bytes, mnemonic and operand in fixed columns
//! - Prompt: a bounded listing prefix with a truncation marker
//! - Hex dump: `AAAA  XX XX ..` rows for the raw byte view
//!
//! # Usage
//!
//! ```
//! use xexray_core::isa::{decode::decode, disasm::render_listing};
//! let text = render_listing(&decode(&[0xA9, 0x05], 0x0600));
//! assert_eq!(text, "0600  LDA #$05");
//! ```

use std::fmt::Write;

use super::instruction::DecodedInstruction;
use crate::common::{hex8, hex16, offset_addr};

/// Formats one instruction as a listing line.
///
/// The separator space after the mnemonic is always present, so an
/// instruction with no operand ends in a single trailing space.
pub fn format_line(inst: &DecodedInstruction) -> String {
    format!(
        "{}  {} {}",
        hex16(inst.address),
        inst.mnemonic,
        inst.operand_text()
    )
}

/// Renders a full listing, one line per instruction, joined by `\n`.
pub fn render_listing(instructions: &[DecodedInstruction]) -> String {
    instructions
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders at most `limit` listing lines for an external prompt.
///
/// When instructions are omitted, a final line
/// `... (truncated N instructions)` records how many.
///
/// # Arguments
///
/// * `instructions` - Full decode of one segment.
/// * `limit` - Maximum number of instruction lines to include.
pub fn render_prompt(instructions: &[DecodedInstruction], limit: usize) -> String {
    let shown = instructions.len().min(limit);
    let mut text = render_listing(&instructions[..shown]);
    let omitted = instructions.len() - shown;
    if omitted > 0 {
        let _ = write!(text, "\n... (truncated {omitted} instructions)");
    }
    text
}

/// Formats one instruction as a fixed-column table row.
///
/// Columns: address (6), raw bytes (10), mnemonic (5), operand.
pub fn format_table_row(inst: &DecodedInstruction) -> String {
    format!(
        "{:<6}{:<10}{:<5}{}",
        hex16(inst.address),
        inst.bytes_hex(),
        inst.mnemonic,
        inst.operand_text()
    )
    .trim_end()
    .to_string()
}

/// Renders a full table, one row per instruction.
pub fn render_table(instructions: &[DecodedInstruction]) -> String {
    instructions
        .iter()
        .map(format_table_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders raw bytes as a hex dump.
///
/// Each row starts with the load address of its first byte and holds up to
/// `width` bytes. A `width` of zero is treated as one.
///
/// # Arguments
///
/// * `data` - Bytes to dump.
/// * `base` - Load address of `data[0]`.
/// * `width` - Bytes per row.
pub fn hex_dump(data: &[u8], base: u16, width: usize) -> String {
    let width = width.max(1);
    data.chunks(width)
        .enumerate()
        .map(|(row, chunk)| {
            let bytes = chunk.iter().map(|&b| hex8(b)).collect::<Vec<_>>().join(" ");
            format!("{}  {bytes}", hex16(offset_addr(base, row * width)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
