//! Common utilities and types used throughout the loader and disassembler.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Addresses:** 16-bit address arithmetic and the fixed-width hex renderers.
//! 2. **Constants:** Container-format markers, default load address, and decode sentinels.
//! 3. **Error Handling:** Fallible-surface errors and advisory loader warnings.

/// 16-bit address arithmetic and hexadecimal formatting.
pub mod addr;

/// Container-format and disassembly constants.
pub mod constants;

/// Error types and loader advisories.
pub mod error;

pub use addr::{hex8, hex16, offset_addr};
pub use constants::{DEFAULT_LOAD_ADDRESS, UNKNOWN_MNEMONIC};
pub use error::{LoadWarning, XexError};
