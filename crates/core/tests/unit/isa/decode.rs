//! Instruction Decoder Unit Tests.
//!
//! Verifies mnemonic, operand text and addressing mode for one encoding of
//! every addressing mode, plus the unknown-opcode and truncated-tail sentinels.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xexray_core::isa::decode::{decode, decode_one, format_operand};
use xexray_core::isa::{AddressingMode, DecodedInstruction};

use crate::common::builder::program::ProgramBuilder;

// ══════════════════════════════════════════════════════════
// 1. One complete instruction per addressing mode
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::implicit(&[0xEA], "NOP", "", AddressingMode::Implicit)]
#[case::accumulator(&[0x0A], "ASL", "A", AddressingMode::Accumulator)]
#[case::immediate(&[0xA9, 0x05], "LDA", "#$05", AddressingMode::Immediate)]
#[case::zero_page(&[0xA5, 0x80], "LDA", "$80", AddressingMode::ZeroPage)]
#[case::zero_page_x(&[0xB5, 0x80], "LDA", "$80,X", AddressingMode::ZeroPageX)]
#[case::zero_page_y(&[0xB6, 0x80], "LDX", "$80,Y", AddressingMode::ZeroPageY)]
#[case::absolute(&[0x4C, 0x00, 0x06], "JMP", "$0600", AddressingMode::Absolute)]
#[case::absolute_x(&[0xBD, 0x00, 0xD0], "LDA", "$D000,X", AddressingMode::AbsoluteX)]
#[case::absolute_y(&[0xB9, 0x34, 0x12], "LDA", "$1234,Y", AddressingMode::AbsoluteY)]
#[case::indirect(&[0x6C, 0x00, 0x02], "JMP", "($0200)", AddressingMode::Indirect)]
#[case::indexed_indirect(&[0xA1, 0x80], "LDA", "($80,X)", AddressingMode::IndexedIndirect)]
#[case::indirect_indexed(&[0xB1, 0x80], "LDA", "($80),Y", AddressingMode::IndirectIndexed)]
#[case::relative_forward(&[0xD0, 0x05], "BNE", "$0607", AddressingMode::Relative)]
#[case::relative_backward(&[0xF0, 0xFA], "BEQ", "$05FC", AddressingMode::Relative)]
fn decodes_single_instruction(
    #[case] bytes: &[u8],
    #[case] mnemonic: &str,
    #[case] operand: &str,
    #[case] mode: AddressingMode,
) {
    let out = decode(bytes, 0x0600);
    assert_eq!(out.len(), 1, "expected one instruction for {bytes:02X?}");
    let inst = &out[0];
    assert_eq!(inst.address, 0x0600);
    assert_eq!(inst.bytes, bytes);
    assert_eq!(inst.mnemonic, mnemonic);
    assert_eq!(inst.operand.as_deref(), Some(operand));
    assert_eq!(inst.mode, mode);
}

#[test]
fn lda_immediate_record() {
    let out = decode(&[0xA9, 0x05], 0x0600);
    assert_eq!(
        out,
        vec![DecodedInstruction {
            address: 0x0600,
            bytes: vec![0xA9, 0x05],
            mnemonic: "LDA",
            operand: Some("#$05".to_string()),
            mode: AddressingMode::Immediate,
        }]
    );
}

#[test]
fn jmp_absolute_is_little_endian() {
    let out = decode(&[0x4C, 0x00, 0x06], 0x0600);
    assert_eq!(out[0].mnemonic, "JMP");
    assert_eq!(out[0].operand.as_deref(), Some("$0600"));
}

#[test]
fn hex_digits_are_uppercase() {
    // STA $D40A
    let out = decode(&[0x8D, 0x0a, 0xd4], 0x2000);
    assert_eq!(out[0].operand.as_deref(), Some("$D40A"));
}

// ══════════════════════════════════════════════════════════
// 2. Relative branches
// ══════════════════════════════════════════════════════════

#[test]
fn branch_to_self() {
    // BCC with displacement -2 loops on itself.
    let out = decode(&[0x90, 0xFE], 0x1000);
    assert_eq!(out[0].mnemonic, "BCC");
    assert_eq!(out[0].operand.as_deref(), Some("$1000"));
}

#[test]
fn branch_extremes() {
    assert_eq!(format_operand(AddressingMode::Relative, &[0x7F], 0x0600), "$0681");
    assert_eq!(format_operand(AddressingMode::Relative, &[0x80], 0x0600), "$0582");
}

#[test]
fn branch_uses_its_own_address_mid_stream() {
    let code = ProgramBuilder::new()
        .op(0xEA) // NOP
        .op8(0xA2, 0x00) // LDX #$00
        .op(0xE8) // INX
        .op8(0xD0, 0xFD) // BNE back to INX
        .build();
    let out = decode(&code, 0x0600);
    assert_eq!(out.len(), 4);
    assert_eq!(out[3].address, 0x0604);
    assert_eq!(out[3].operand.as_deref(), Some("$0603"));
}

// ══════════════════════════════════════════════════════════
// 3. Sentinels
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_opcode_is_single_byte_sentinel() {
    let out = decode(&[0x02], 0x0600);
    assert_eq!(out, vec![DecodedInstruction::unknown(0x0600, vec![0x02])]);
    assert_eq!(out[0].mnemonic, "???");
    assert_eq!(out[0].operand, None);
    assert_eq!(out[0].mode, AddressingMode::Unknown);
}

#[test]
fn decoding_continues_after_unknown_opcode() {
    let out = decode(&[0x02, 0xFF, 0xEA], 0x0600);
    assert_eq!(out.len(), 3);
    assert!(out[0].is_unknown());
    assert!(out[1].is_unknown());
    assert_eq!(out[2].mnemonic, "NOP");
    assert_eq!(out[2].address, 0x0602);
}

#[test]
fn truncated_tail_swallows_remaining_bytes() {
    let out = decode(&[0xEA, 0x4C, 0x00], 0x0600);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1], DecodedInstruction::unknown(0x0601, vec![0x4C, 0x00]));
}

#[test]
fn truncated_tail_ignores_opcodes_inside_it() {
    // JSR needs three bytes; the trailing unknown byte belongs to the tail.
    let out = decode(&[0x20, 0x02], 0x0600);
    assert_eq!(out, vec![DecodedInstruction::unknown(0x0600, vec![0x20, 0x02])]);
}

#[test]
fn lone_immediate_opcode_is_truncated() {
    let out = decode(&[0xA9], 0x0600);
    assert_eq!(out, vec![DecodedInstruction::unknown(0x0600, vec![0xA9])]);
}

// ══════════════════════════════════════════════════════════
// 4. Cursor and address handling
// ══════════════════════════════════════════════════════════

#[test]
fn decode_one_steps_through_buffer() {
    let code = [0xA9, 0x01, 0x8D, 0x00, 0x02, 0x60];
    let first = decode_one(&code, 0, 0x0600).unwrap();
    assert_eq!(first.encoded_len(), 2);
    let second = decode_one(&code, 2, 0x0600).unwrap();
    assert_eq!(second.address, 0x0602);
    assert_eq!(second.operand.as_deref(), Some("$0200"));
    let third = decode_one(&code, 5, 0x0600).unwrap();
    assert_eq!(third.mnemonic, "RTS");
    assert_eq!(decode_one(&code, 6, 0x0600), None);
}

#[test]
fn addresses_wrap_at_top_of_memory() {
    let out = decode(&[0xEA, 0xEA], 0xFFFF);
    assert_eq!(out[0].address, 0xFFFF);
    assert_eq!(out[1].address, 0x0000);
}

#[test]
fn input_buffer_is_untouched() {
    let code = vec![0xA9, 0x05, 0x02, 0x4C];
    let before = code.clone();
    let _ = decode(&code, 0x0600);
    assert_eq!(code, before);
}
