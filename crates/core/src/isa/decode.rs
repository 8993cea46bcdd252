//! 6502 Instruction Decoder.
//!
//! This module turns a byte buffer into a gap-free sequence of
//! `DecodedInstruction` records. It performs a single linear pass:
//! 1. **Lookup:** The byte at the cursor selects an entry in the opcode table.
//! 2. **Unknown opcodes:** Bytes with no entry become one-byte `"???"` records and decoding continues.
//! 3. **Truncated tails:** A known opcode whose operand runs past the end swallows the remaining
//!    bytes into a final `"???"` record and ends the pass.
//! 4. **Operands:** Complete encodings are rendered per addressing mode.
//!
//! Decoding never fails; every input byte appears in exactly one record.

use tracing::debug;

use super::instruction::DecodedInstruction;
use super::mode::AddressingMode;
use super::opcodes::lookup;
use crate::common::constants::BRANCH_LENGTH;
use crate::common::{hex8, hex16, offset_addr};

/// Symbol rendered for accumulator-mode operands.
const ACCUMULATOR_SYMBOL: &str = "A";

/// Decodes an entire buffer loaded at `base`.
///
/// # Arguments
///
/// * `buffer` - Raw machine code; never modified.
/// * `base` - Load address of `buffer[0]`.
///
/// # Returns
///
/// One record per instruction, in byte-offset order, covering every byte of
/// `buffer` exactly once.
pub fn decode(buffer: &[u8], base: u16) -> Vec<DecodedInstruction> {
    let mut instructions = Vec::with_capacity(buffer.len() / 2 + 1);
    let mut offset = 0;

    while let Some(inst) = decode_one(buffer, offset, base) {
        offset += inst.encoded_len();
        instructions.push(inst);
    }

    debug!(
        base = %hex16(base),
        bytes = buffer.len(),
        instructions = instructions.len(),
        unknown = instructions.iter().filter(|i| i.is_unknown()).count(),
        "decode pass complete"
    );
    instructions
}

/// Decodes the instruction starting at `offset`.
///
/// Returns `None` once `offset` reaches the end of the buffer. A truncated
/// tail consumes every remaining byte, so the following call returns `None`.
///
/// # Arguments
///
/// * `buffer` - Raw machine code.
/// * `offset` - Cursor into `buffer`.
/// * `base` - Load address of `buffer[0]`.
pub fn decode_one(buffer: &[u8], offset: usize, base: u16) -> Option<DecodedInstruction> {
    let &opcode = buffer.get(offset)?;
    let pc = offset_addr(base, offset);

    let Some(def) = lookup(opcode) else {
        return Some(DecodedInstruction::unknown(pc, vec![opcode]));
    };

    let Some(bytes) = buffer.get(offset..offset + def.len) else {
        return Some(DecodedInstruction::unknown(pc, buffer[offset..].to_vec()));
    };

    Some(DecodedInstruction {
        address: pc,
        bytes: bytes.to_vec(),
        mnemonic: def.mnemonic,
        operand: Some(format_operand(def.mode, &bytes[1..], pc)),
        mode: def.mode,
    })
}

/// Renders the operand bytes of an instruction for its addressing mode.
///
/// # Arguments
///
/// * `mode` - Addressing mode of the opcode.
/// * `operand` - Bytes following the opcode (0, 1 or 2 of them).
/// * `pc` - Address of the opcode byte; used by relative branches.
pub fn format_operand(mode: AddressingMode, operand: &[u8], pc: u16) -> String {
    let lo = operand.first().copied().unwrap_or_default();
    let hi = operand.get(1).copied().unwrap_or_default();
    let word = u16::from_le_bytes([lo, hi]);

    match mode {
        AddressingMode::Implicit | AddressingMode::Unknown => String::new(),
        AddressingMode::Accumulator => ACCUMULATOR_SYMBOL.to_string(),
        AddressingMode::Immediate => format!("#${}", hex8(lo)),
        AddressingMode::ZeroPage => format!("${}", hex8(lo)),
        AddressingMode::ZeroPageX => format!("${},X", hex8(lo)),
        AddressingMode::ZeroPageY => format!("${},Y", hex8(lo)),
        AddressingMode::Absolute => format!("${}", hex16(word)),
        AddressingMode::AbsoluteX => format!("${},X", hex16(word)),
        AddressingMode::AbsoluteY => format!("${},Y", hex16(word)),
        AddressingMode::Indirect => format!("(${})", hex16(word)),
        AddressingMode::IndexedIndirect => format!("(${},X)", hex8(lo)),
        AddressingMode::IndirectIndexed => format!("(${}),Y", hex8(lo)),
        AddressingMode::Relative => format!("${}", hex16(branch_target(pc, lo))),
    }
}

/// Computes the destination of a relative branch.
///
/// The displacement is a signed byte added to the address of the following
/// instruction (`pc + 2`). Wraps within the 16-bit address space.
///
/// # Arguments
///
/// * `pc` - Address of the branch opcode.
/// * `displacement` - Raw operand byte, interpreted as two's complement.
#[inline]
pub const fn branch_target(pc: u16, displacement: u8) -> u16 {
    pc.wrapping_add(BRANCH_LENGTH)
        .wrapping_add_signed(displacement as i8 as i16)
}
