//! 6502 Opcode Table.
//!
//! The documented NMOS 6502 instruction set: 151 opcodes over 56 mnemonics.
//! Undocumented opcodes have no entry and decode as the unknown sentinel.
//!
//! The table is a flat `[Option<OpcodeDef>; 256]` built at compile time, so
//! a lookup is a single index with no hashing.

use super::mode::AddressingMode;
use super::mode::AddressingMode as M;

/// Static description of one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDef {
    /// Uppercase mnemonic (`LDA`).
    pub mnemonic: &'static str,
    /// Addressing mode selected by the opcode.
    pub mode: AddressingMode,
    /// Total encoded length in bytes (1, 2 or 3).
    pub len: usize,
}

/// Number of documented opcodes in [`OPCODES`].
pub const DOCUMENTED_COUNT: usize = DOCUMENTED.len();

/// Documented opcodes as `(byte, mnemonic, mode)`, ordered by byte value.
const DOCUMENTED: [(u8, &str, AddressingMode); 151] = [
    (0x00, "BRK", M::Implicit),
    (0x01, "ORA", M::IndexedIndirect),
    (0x05, "ORA", M::ZeroPage),
    (0x06, "ASL", M::ZeroPage),
    (0x08, "PHP", M::Implicit),
    (0x09, "ORA", M::Immediate),
    (0x0A, "ASL", M::Accumulator),
    (0x0D, "ORA", M::Absolute),
    (0x0E, "ASL", M::Absolute),
    (0x10, "BPL", M::Relative),
    (0x11, "ORA", M::IndirectIndexed),
    (0x15, "ORA", M::ZeroPageX),
    (0x16, "ASL", M::ZeroPageX),
    (0x18, "CLC", M::Implicit),
    (0x19, "ORA", M::AbsoluteY),
    (0x1D, "ORA", M::AbsoluteX),
    (0x1E, "ASL", M::AbsoluteX),
    (0x20, "JSR", M::Absolute),
    (0x21, "AND", M::IndexedIndirect),
    (0x24, "BIT", M::ZeroPage),
    (0x25, "AND", M::ZeroPage),
    (0x26, "ROL", M::ZeroPage),
    (0x28, "PLP", M::Implicit),
    (0x29, "AND", M::Immediate),
    (0x2A, "ROL", M::Accumulator),
    (0x2C, "BIT", M::Absolute),
    (0x2D, "AND", M::Absolute),
    (0x2E, "ROL", M::Absolute),
    (0x30, "BMI", M::Relative),
    (0x31, "AND", M::IndirectIndexed),
    (0x35, "AND", M::ZeroPageX),
    (0x36, "ROL", M::ZeroPageX),
    (0x38, "SEC", M::Implicit),
    (0x39, "AND", M::AbsoluteY),
    (0x3D, "AND", M::AbsoluteX),
    (0x3E, "ROL", M::AbsoluteX),
    (0x40, "RTI", M::Implicit),
    (0x41, "EOR", M::IndexedIndirect),
    (0x45, "EOR", M::ZeroPage),
    (0x46, "LSR", M::ZeroPage),
    (0x48, "PHA", M::Implicit),
    (0x49, "EOR", M::Immediate),
    (0x4A, "LSR", M::Accumulator),
    (0x4C, "JMP", M::Absolute),
    (0x4D, "EOR", M::Absolute),
    (0x4E, "LSR", M::Absolute),
    (0x50, "BVC", M::Relative),
    (0x51, "EOR", M::IndirectIndexed),
    (0x55, "EOR", M::ZeroPageX),
    (0x56, "LSR", M::ZeroPageX),
    (0x58, "CLI", M::Implicit),
    (0x59, "EOR", M::AbsoluteY),
    (0x5D, "EOR", M::AbsoluteX),
    (0x5E, "LSR", M::AbsoluteX),
    (0x60, "RTS", M::Implicit),
    (0x61, "ADC", M::IndexedIndirect),
    (0x65, "ADC", M::ZeroPage),
    (0x66, "ROR", M::ZeroPage),
    (0x68, "PLA", M::Implicit),
    (0x69, "ADC", M::Immediate),
    (0x6A, "ROR", M::Accumulator),
    (0x6C, "JMP", M::Indirect),
    (0x6D, "ADC", M::Absolute),
    (0x6E, "ROR", M::Absolute),
    (0x70, "BVS", M::Relative),
    (0x71, "ADC", M::IndirectIndexed),
    (0x75, "ADC", M::ZeroPageX),
    (0x76, "ROR", M::ZeroPageX),
    (0x78, "SEI", M::Implicit),
    (0x79, "ADC", M::AbsoluteY),
    (0x7D, "ADC", M::AbsoluteX),
    (0x7E, "ROR", M::AbsoluteX),
    (0x81, "STA", M::IndexedIndirect),
    (0x84, "STY", M::ZeroPage),
    (0x85, "STA", M::ZeroPage),
    (0x86, "STX", M::ZeroPage),
    (0x88, "DEY", M::Implicit),
    (0x8A, "TXA", M::Implicit),
    (0x8C, "STY", M::Absolute),
    (0x8D, "STA", M::Absolute),
    (0x8E, "STX", M::Absolute),
    (0x90, "BCC", M::Relative),
    (0x91, "STA", M::IndirectIndexed),
    (0x94, "STY", M::ZeroPageX),
    (0x95, "STA", M::ZeroPageX),
    (0x96, "STX", M::ZeroPageY),
    (0x98, "TYA", M::Implicit),
    (0x99, "STA", M::AbsoluteY),
    (0x9A, "TXS", M::Implicit),
    (0x9D, "STA", M::AbsoluteX),
    (0xA0, "LDY", M::Immediate),
    (0xA1, "LDA", M::IndexedIndirect),
    (0xA2, "LDX", M::Immediate),
    (0xA4, "LDY", M::ZeroPage),
    (0xA5, "LDA", M::ZeroPage),
    (0xA6, "LDX", M::ZeroPage),
    (0xA8, "TAY", M::Implicit),
    (0xA9, "LDA", M::Immediate),
    (0xAA, "TAX", M::Implicit),
    (0xAC, "LDY", M::Absolute),
    (0xAD, "LDA", M::Absolute),
    (0xAE, "LDX", M::Absolute),
    (0xB0, "BCS", M::Relative),
    (0xB1, "LDA", M::IndirectIndexed),
    (0xB4, "LDY", M::ZeroPageX),
    (0xB5, "LDA", M::ZeroPageX),
    (0xB6, "LDX", M::ZeroPageY),
    (0xB8, "CLV", M::Implicit),
    (0xB9, "LDA", M::AbsoluteY),
    (0xBA, "TSX", M::Implicit),
    (0xBC, "LDY", M::AbsoluteX),
    (0xBD, "LDA", M::AbsoluteX),
    (0xBE, "LDX", M::AbsoluteY),
    (0xC0, "CPY", M::Immediate),
    (0xC1, "CMP", M::IndexedIndirect),
    (0xC4, "CPY", M::ZeroPage),
    (0xC5, "CMP", M::ZeroPage),
    (0xC6, "DEC", M::ZeroPage),
    (0xC8, "INY", M::Implicit),
    (0xC9, "CMP", M::Immediate),
    (0xCA, "DEX", M::Implicit),
    (0xCC, "CPY", M::Absolute),
    (0xCD, "CMP", M::Absolute),
    (0xCE, "DEC", M::Absolute),
    (0xD0, "BNE", M::Relative),
    (0xD1, "CMP", M::IndirectIndexed),
    (0xD5, "CMP", M::ZeroPageX),
    (0xD6, "DEC", M::ZeroPageX),
    (0xD8, "CLD", M::Implicit),
    (0xD9, "CMP", M::AbsoluteY),
    (0xDD, "CMP", M::AbsoluteX),
    (0xDE, "DEC", M::AbsoluteX),
    (0xE0, "CPX", M::Immediate),
    (0xE1, "SBC", M::IndexedIndirect),
    (0xE4, "CPX", M::ZeroPage),
    (0xE5, "SBC", M::ZeroPage),
    (0xE6, "INC", M::ZeroPage),
    (0xE8, "INX", M::Implicit),
    (0xE9, "SBC", M::Immediate),
    (0xEA, "NOP", M::Implicit),
    (0xEC, "CPX", M::Absolute),
    (0xED, "SBC", M::Absolute),
    (0xEE, "INC", M::Absolute),
    (0xF0, "BEQ", M::Relative),
    (0xF1, "SBC", M::IndirectIndexed),
    (0xF5, "SBC", M::ZeroPageX),
    (0xF6, "INC", M::ZeroPageX),
    (0xF8, "SED", M::Implicit),
    (0xF9, "SBC", M::AbsoluteY),
    (0xFD, "SBC", M::AbsoluteX),
    (0xFE, "INC", M::AbsoluteX),
];

/// Opcode lookup table indexed by opcode byte.
pub static OPCODES: [Option<OpcodeDef>; 256] = build_table();

const fn build_table() -> [Option<OpcodeDef>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < DOCUMENTED.len() {
        let (byte, mnemonic, mode) = DOCUMENTED[i];
        table[byte as usize] = Some(OpcodeDef {
            mnemonic,
            mode,
            len: mode.encoded_len(),
        });
        i += 1;
    }
    table
}

/// Looks up the definition of an opcode byte.
///
/// Returns `None` for undocumented opcodes.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static OpcodeDef> {
    OPCODES[opcode as usize].as_ref()
}

/// Iterates over every documented opcode as `(byte, definition)`.
pub fn documented() -> impl Iterator<Item = (u8, &'static OpcodeDef)> {
    (0..=u8::MAX).filter_map(|byte| lookup(byte).map(|def| (byte, def)))
}
