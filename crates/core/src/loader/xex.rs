//! Atari XEX Container Parser.
//!
//! The container is a flat little-endian stream:
//!
//! ```text
//! [FF FF]  start_lo start_hi end_lo end_hi  <end - start + 1 payload bytes>  ...
//! ```
//!
//! The leading marker is optional. There is no segment count and no
//! checksum; the walk ends when fewer than four bytes remain, or early on a
//! malformed or truncated segment. A buffer that yields no segment at all is
//! treated as a raw memory image at the fallback load address.

use tracing::warn;

use super::segment::Segment;
use crate::common::LoadWarning;
use crate::common::constants::{
    ADDRESS_SPACE, MARKER_MIN_BUFFER_LEN, SEGMENT_HEADER_LEN, XEX_MARKER,
};
use crate::config::LoaderConfig;

/// Outcome of a segment walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Segments in order of appearance in the buffer.
    pub segments: Vec<Segment>,
    /// Advisories raised while walking; never fatal.
    pub warnings: Vec<LoadWarning>,
    /// True when `segments` holds the raw-image fallback.
    pub fallback: bool,
}

/// Splits a buffer into segments using the default fallback address.
///
/// Never fails. Returns at least one segment for any non-empty buffer.
pub fn parse_xex(buffer: &[u8]) -> Vec<Segment> {
    parse_with_report(buffer).segments
}

/// Splits a buffer into segments and reports why the walk stopped.
pub fn parse_with_report(buffer: &[u8]) -> LoadReport {
    parse_with(buffer, &LoaderConfig::default())
}

/// Splits a buffer into segments using `config`.
///
/// # Arguments
///
/// * `buffer` - Raw file contents; never modified.
/// * `config` - Loader settings (fallback address).
pub fn parse_with(buffer: &[u8], config: &LoaderConfig) -> LoadReport {
    let mut report = LoadReport::default();
    let mut offset = if buffer.len() >= MARKER_MIN_BUFFER_LEN && buffer.starts_with(&XEX_MARKER) {
        XEX_MARKER.len()
    } else {
        0
    };

    while let Some(&[start_lo, start_hi, end_lo, end_hi]) =
        buffer.get(offset..offset + SEGMENT_HEADER_LEN)
    {
        let header_offset = offset;
        let start = u16::from_le_bytes([start_lo, start_hi]);
        let end = u16::from_le_bytes([end_lo, end_hi]);
        offset += SEGMENT_HEADER_LEN;

        if end < start {
            let warning = LoadWarning::MalformedBoundary {
                offset: header_offset,
                start,
                end,
            };
            warn!("{warning}");
            report.warnings.push(warning);
            break;
        }

        let declared = usize::from(end - start) + 1;
        let Some(payload) = buffer.get(offset..offset + declared) else {
            let warning = LoadWarning::TruncatedPayload {
                offset: header_offset,
                start,
                end,
                declared,
                available: buffer.len() - offset,
            };
            warn!("{warning}");
            report.warnings.push(warning);
            break;
        };

        report.segments.push(Segment {
            start,
            end,
            data: payload.to_vec(),
        });
        offset += declared;
    }

    if report.segments.is_empty() && !buffer.is_empty() {
        let (segment, clipped) = raw_image(buffer, config.fallback_address);
        if let Some(warning) = clipped {
            warn!("{warning}");
            report.warnings.push(warning);
        }
        report.segments.push(segment);
        report.fallback = true;
    }

    report
}

/// Wraps a non-empty buffer as a single segment loaded at `base`.
///
/// Bytes that would land past `$FFFF` are dropped and reported.
fn raw_image(buffer: &[u8], base: u16) -> (Segment, Option<LoadWarning>) {
    let room = ADDRESS_SPACE - usize::from(base);
    let kept = buffer.len().min(room);
    let data = buffer[..kept].to_vec();
    let end = base + (kept - 1) as u16;
    let clipped = (kept < buffer.len()).then_some(LoadWarning::FallbackClipped {
        base,
        len: buffer.len(),
        kept,
    });
    (
        Segment {
            start: base,
            end,
            data,
        },
        clipped,
    )
}
