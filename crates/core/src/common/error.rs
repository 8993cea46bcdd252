//! Error and Advisory definitions.
//!
//! This module defines the failure modes of the crate. It provides:
//! 1. **Surface Errors:** `XexError` for file access, segment selection, and configuration.
//! 2. **Loader Advisories:** `LoadWarning`, the non-fatal reason a segment walk stopped early.
//!
//! The pure loader and decoder never fail; only the outer surface returns `XexError`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the fallible outer surface of the crate.
#[derive(Debug, Error)]
pub enum XexError {
    /// A binary or configuration file could not be read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A caller selected a segment that was not loaded.
    #[error("segment {index} out of range ({count} segments loaded)")]
    SegmentIndex {
        /// Requested segment index.
        index: usize,
        /// Number of segments available.
        count: usize,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reason the segment walk stopped before the end of the buffer.
///
/// Advisory only: segments parsed before the stop are still returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A segment header declared `end < start`.
    #[error("malformed segment at offset {offset:#06x}: end ${end:04X} < start ${start:04X}")]
    MalformedBoundary {
        /// Buffer offset of the offending header.
        offset: usize,
        /// Declared start address.
        start: u16,
        /// Declared end address.
        end: u16,
    },

    /// A segment payload ran past the end of the buffer.
    #[error(
        "segment ${start:04X}-${end:04X} at offset {offset:#06x} truncated: \
         {declared} bytes declared, {available} available"
    )]
    TruncatedPayload {
        /// Buffer offset of the segment header.
        offset: usize,
        /// Declared start address.
        start: u16,
        /// Declared end address.
        end: u16,
        /// Payload length implied by the header.
        declared: usize,
        /// Bytes left in the buffer after the header.
        available: usize,
    },

    /// The raw-image fallback did not fit below `$FFFF` and was clipped.
    #[error("raw image of {len} bytes clipped to {kept} bytes at ${base:04X}")]
    FallbackClipped {
        /// Fallback load address.
        base: u16,
        /// Original buffer length.
        len: usize,
        /// Bytes kept in the fallback segment.
        kept: usize,
    },
}
