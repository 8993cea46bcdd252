//! 6502 Addressing Modes.
//!
//! Each opcode selects one addressing mode, which fixes both the number of
//! operand bytes that follow it and how those bytes are rendered.

use std::fmt;

use serde::Serialize;

/// How an instruction's operand bytes map to a value or memory location.
///
/// Serializes as the short tag used in listings (`IMM`, `ZPX`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AddressingMode {
    /// No operand (`RTS`).
    #[serde(rename = "IMP")]
    Implicit,
    /// Operates on the accumulator (`ASL A`).
    #[serde(rename = "ACC")]
    Accumulator,
    /// Literal byte operand (`LDA #$05`).
    #[serde(rename = "IMM")]
    Immediate,
    /// Zero-page address (`LDA $80`).
    #[serde(rename = "ZP")]
    ZeroPage,
    /// Zero-page address indexed by X (`LDA $80,X`).
    #[serde(rename = "ZPX")]
    ZeroPageX,
    /// Zero-page address indexed by Y (`LDX $80,Y`).
    #[serde(rename = "ZPY")]
    ZeroPageY,
    /// Signed 8-bit displacement from the next instruction (`BNE $0600`).
    #[serde(rename = "REL")]
    Relative,
    /// Full 16-bit address (`JMP $0600`).
    #[serde(rename = "ABS")]
    Absolute,
    /// 16-bit address indexed by X (`LDA $D000,X`).
    #[serde(rename = "ABX")]
    AbsoluteX,
    /// 16-bit address indexed by Y (`LDA $D000,Y`).
    #[serde(rename = "ABY")]
    AbsoluteY,
    /// 16-bit pointer (`JMP ($0200)`).
    #[serde(rename = "IND")]
    Indirect,
    /// Zero-page pointer indexed by X before dereference (`LDA ($80,X)`).
    #[serde(rename = "IZX")]
    IndexedIndirect,
    /// Zero-page pointer dereferenced then indexed by Y (`LDA ($80),Y`).
    #[serde(rename = "IZY")]
    IndirectIndexed,
    /// Unrecognized opcode or truncated encoding.
    #[serde(rename = "UNK")]
    Unknown,
}

impl AddressingMode {
    /// Every addressing mode, in table order.
    pub const ALL: [Self; 14] = [
        Self::Implicit,
        Self::Accumulator,
        Self::Immediate,
        Self::ZeroPage,
        Self::ZeroPageX,
        Self::ZeroPageY,
        Self::Relative,
        Self::Absolute,
        Self::AbsoluteX,
        Self::AbsoluteY,
        Self::Indirect,
        Self::IndexedIndirect,
        Self::IndirectIndexed,
        Self::Unknown,
    ];

    /// Total encoded length (opcode plus operand bytes) for this mode.
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Implicit | Self::Accumulator | Self::Unknown => 1,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::Relative
            | Self::IndexedIndirect
            | Self::IndirectIndexed => 2,
            Self::Absolute | Self::AbsoluteX | Self::AbsoluteY | Self::Indirect => 3,
        }
    }

    /// Short listing tag (`IMP`, `ABX`, `UNK`, ...).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Implicit => "IMP",
            Self::Accumulator => "ACC",
            Self::Immediate => "IMM",
            Self::ZeroPage => "ZP",
            Self::ZeroPageX => "ZPX",
            Self::ZeroPageY => "ZPY",
            Self::Relative => "REL",
            Self::Absolute => "ABS",
            Self::AbsoluteX => "ABX",
            Self::AbsoluteY => "ABY",
            Self::Indirect => "IND",
            Self::IndexedIndirect => "IZX",
            Self::IndirectIndexed => "IZY",
            Self::Unknown => "UNK",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
