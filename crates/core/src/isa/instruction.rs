//! Decoded instruction record.
//!
//! One `DecodedInstruction` is produced per decode step. The raw bytes of
//! consecutive records, concatenated, reproduce the decoded buffer exactly.

use serde::Serialize;

use super::mode::AddressingMode;
use crate::common::constants::UNKNOWN_MNEMONIC;
use crate::common::hex8;

/// Result of decoding a single instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedInstruction {
    /// Load address of the opcode byte.
    pub address: u16,
    /// Raw bytes consumed, in encounter order.
    pub bytes: Vec<u8>,
    /// Uppercase mnemonic, or `"???"` for unknown and truncated encodings.
    pub mnemonic: &'static str,
    /// Formatted operand; `None` for the unknown sentinel.
    pub operand: Option<String>,
    /// Addressing mode the operand was decoded with.
    pub mode: AddressingMode,
}

impl DecodedInstruction {
    /// Creates the sentinel record for bytes that do not form a known instruction.
    pub fn unknown(address: u16, bytes: Vec<u8>) -> Self {
        Self {
            address,
            bytes,
            mnemonic: UNKNOWN_MNEMONIC,
            operand: None,
            mode: AddressingMode::Unknown,
        }
    }

    /// Number of bytes this record consumed.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for the `"???"` sentinel.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.mode == AddressingMode::Unknown
    }

    /// Operand text, empty when there is none.
    #[inline]
    pub fn operand_text(&self) -> &str {
        self.operand.as_deref().unwrap_or("")
    }

    /// Raw bytes as space-separated uppercase hex (`A9 05`).
    pub fn bytes_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|&b| hex8(b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
