//! Binary Loader.
//!
//! This module turns Atari executables into loadable segments. It provides:
//! 1. **File access:** Reads a binary from disk into a byte buffer.
//! 2. **Segment walk:** Splits a buffer into `(start, end, data)` segments per the XEX header convention.
//! 3. **Raw fallback:** Treats an unrecognized buffer as one memory image at the default load address.
//! 4. **Selection:** Bounds-checked access to a segment by index.

/// Loadable segment type.
pub mod segment;

/// XEX container walk.
pub mod xex;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::XexError;
use crate::config::LoaderConfig;

pub use segment::Segment;
pub use xex::{LoadReport, parse_with, parse_with_report, parse_xex};

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Errors
///
/// Returns [`XexError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, XexError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| XexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "binary loaded");
    Ok(data)
}

/// Reads a file and splits it into segments.
///
/// # Errors
///
/// Returns [`XexError::Io`] if the file cannot be read. Parsing itself never fails.
pub fn load_file(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<LoadReport, XexError> {
    let data = load_binary(path)?;
    Ok(parse_with(&data, config))
}

/// Returns the segment at `index`.
///
/// # Errors
///
/// Returns [`XexError::SegmentIndex`] when `index` is out of range.
pub fn select(segments: &[Segment], index: usize) -> Result<&Segment, XexError> {
    segments.get(index).ok_or(XexError::SegmentIndex {
        index,
        count: segments.len(),
    })
}
