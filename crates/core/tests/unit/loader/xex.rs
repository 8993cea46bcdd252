//! # XEX Segment Walk Tests
//!
//! Verifies header parsing, the optional marker, both early-stop conditions,
//! the raw-image fallback, and order preservation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use xexray_core::common::LoadWarning;
use xexray_core::config::LoaderConfig;
use xexray_core::loader::{Segment, parse_with, parse_with_report, parse_xex};

use crate::common::builder::xex::XexBuilder;
use crate::common::init_tracing;

/// Counts `WARN` events.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let _ = self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs a segment walk and returns how many warn events it emitted.
fn warn_events(buffer: &[u8]) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
    let _ = tracing::subscriber::with_default(subscriber, || parse_with_report(buffer));
    count.load(Ordering::SeqCst)
}

fn seg(start: u16, end: u16, data: &[u8]) -> Segment {
    Segment {
        start,
        end,
        data: data.to_vec(),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Well-formed containers
// ══════════════════════════════════════════════════════════

#[test]
fn single_segment_with_marker() {
    let buffer = [0xFF, 0xFF, 0x00, 0x06, 0x01, 0x06, 0xA9, 0x00];
    assert_eq!(parse_xex(&buffer), vec![seg(0x0600, 0x0601, &[0xA9, 0x00])]);
}

#[test]
fn single_segment_without_marker() {
    let buffer = XexBuilder::new().segment(0x0600, &[0xEA]).build();
    let report = parse_with_report(&buffer);
    assert_eq!(report.segments, vec![seg(0x0600, 0x0600, &[0xEA])]);
    assert!(report.warnings.is_empty());
    assert!(!report.fallback);
}

#[test]
fn segments_keep_file_order() {
    let buffer = XexBuilder::new()
        .marker()
        .segment(0x3000, &[1, 2, 3])
        .segment(0x0600, &[4])
        .segment(0x02E0, &[0x00, 0x30])
        .build();
    assert_eq!(
        parse_xex(&buffer),
        vec![
            seg(0x3000, 0x3002, &[1, 2, 3]),
            seg(0x0600, 0x0600, &[4]),
            seg(0x02E0, 0x02E1, &[0x00, 0x30]),
        ]
    );
}

#[test]
fn segment_at_top_of_memory() {
    let buffer = XexBuilder::new().marker().segment(0xFFFE, &[0x00, 0x06]).build();
    assert_eq!(parse_xex(&buffer), vec![seg(0xFFFE, 0xFFFF, &[0x00, 0x06])]);
}

#[test]
fn trailing_header_fragment_is_dropped_silently() {
    let buffer = XexBuilder::new()
        .marker()
        .segment(0x0600, &[0x60])
        .raw(&[0x00, 0x07, 0x00])
        .build();
    let report = parse_with_report(&buffer);
    assert_eq!(report.segments, vec![seg(0x0600, 0x0600, &[0x60])]);
    assert!(report.warnings.is_empty());
}

// ══════════════════════════════════════════════════════════
// 2. Early stops
// ══════════════════════════════════════════════════════════

#[test]
fn malformed_boundary_stops_walk() {
    init_tracing();
    let buffer = XexBuilder::new()
        .marker()
        .segment(0x0600, &[0xEA, 0x60])
        .header(0x0700, 0x06FF)
        .segment(0x0800, &[0x00])
        .build();
    let report = parse_with_report(&buffer);
    assert_eq!(report.segments, vec![seg(0x0600, 0x0601, &[0xEA, 0x60])]);
    assert_eq!(
        report.warnings,
        vec![LoadWarning::MalformedBoundary {
            offset: 8,
            start: 0x0700,
            end: 0x06FF,
        }]
    );
    assert!(!report.fallback);
}

#[test]
fn truncated_payload_stops_walk() {
    init_tracing();
    let buffer = XexBuilder::new()
        .marker()
        .segment(0x0600, &[0x60])
        .header(0x0700, 0x070F)
        .raw(&[0xAA; 4])
        .build();
    let report = parse_with_report(&buffer);
    assert_eq!(report.segments, vec![seg(0x0600, 0x0600, &[0x60])]);
    assert_eq!(
        report.warnings,
        vec![LoadWarning::TruncatedPayload {
            offset: 7,
            start: 0x0700,
            end: 0x070F,
            declared: 16,
            available: 4,
        }]
    );
}

#[test]
fn each_advisory_is_one_warn_event() {
    let malformed = XexBuilder::new()
        .marker()
        .segment(0x0600, &[0xEA])
        .header(0x0700, 0x06FF)
        .build();
    assert_eq!(warn_events(&malformed), 1);

    let clean = XexBuilder::new().marker().segment(0x0600, &[0xEA]).build();
    assert_eq!(warn_events(&clean), 0);
}

#[test]
fn malformed_first_segment_falls_back_to_raw_image() {
    let buffer = XexBuilder::new().marker().header(0x0601, 0x0600).build();
    let report = parse_with_report(&buffer);
    assert!(report.fallback);
    assert_eq!(report.segments, vec![seg(0x2000, 0x2005, &buffer)]);
    assert_eq!(report.warnings.len(), 1);
}

// ══════════════════════════════════════════════════════════
// 3. Raw-image fallback
// ══════════════════════════════════════════════════════════

#[test]
fn short_buffer_falls_back() {
    let buffer = [0x00, 0x01, 0x02];
    assert_eq!(parse_xex(&buffer), vec![seg(0x2000, 0x2002, &[0x00, 0x01, 0x02])]);
}

#[test]
fn bare_marker_falls_back() {
    assert_eq!(parse_xex(&[0xFF, 0xFF]), vec![seg(0x2000, 0x2001, &[0xFF, 0xFF])]);
}

#[test]
fn marker_with_fragment_falls_back_to_whole_buffer() {
    let buffer = [0xFF, 0xFF, 0x00];
    assert_eq!(parse_xex(&buffer), vec![seg(0x2000, 0x2002, &buffer)]);
}

#[test]
fn empty_buffer_has_no_segments() {
    let report = parse_with_report(&[]);
    assert!(report.segments.is_empty());
    assert!(!report.fallback);
    assert!(report.warnings.is_empty());
}

#[test]
fn fallback_address_is_configurable() {
    let config = LoaderConfig {
        fallback_address: 0x0600,
    };
    let report = parse_with(&[0xA9, 0x00, 0x60], &config);
    assert_eq!(report.segments, vec![seg(0x0600, 0x0602, &[0xA9, 0x00, 0x60])]);
}

#[test]
fn oversized_raw_image_is_clipped_to_address_space() {
    let mut buffer = vec![0x01, 0x00, 0x00, 0x00];
    buffer.resize(0xE001, 0xEA);
    let report = parse_with_report(&buffer);
    assert!(report.fallback);
    let segment = &report.segments[0];
    assert_eq!(segment.start, 0x2000);
    assert_eq!(segment.end, 0xFFFF);
    assert_eq!(segment.len(), 0xE000);
    assert_eq!(
        report.warnings.last(),
        Some(&LoadWarning::FallbackClipped {
            base: 0x2000,
            len: 0xE001,
            kept: 0xE000,
        })
    );
}

// ══════════════════════════════════════════════════════════
// 4. Segment helpers
// ══════════════════════════════════════════════════════════

#[test]
fn segment_label_and_lookup() {
    let segment = seg(0x0600, 0x0602, &[0xA9, 0x05, 0x60]);
    assert_eq!(segment.label(1), "SEG 1: $0600 - $0602");
    assert!(segment.contains(0x0602));
    assert!(!segment.contains(0x0603));
    assert_eq!(segment.byte_at(0x0601), Some(0x05));
    assert_eq!(segment.byte_at(0x05FF), None);
    assert_eq!(segment.addr_of(2), 0x0602);
}

#[test]
fn segment_new_checks_bounds() {
    assert_eq!(Segment::new(0x0600, vec![1, 2]), Some(seg(0x0600, 0x0601, &[1, 2])));
    assert_eq!(Segment::new(0x0600, vec![]), None);
    assert_eq!(Segment::new(0xFFFF, vec![1, 2]), None);
}

// ══════════════════════════════════════════════════════════
// 5. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn never_panics_and_never_empty(buffer in prop::collection::vec(any::<u8>(), 0..2048)) {
        let segments = parse_xex(&buffer);
        prop_assert_eq!(segments.is_empty(), buffer.is_empty());
        for segment in &segments {
            prop_assert!(segment.end >= segment.start);
            prop_assert_eq!(segment.len(), usize::from(segment.end - segment.start) + 1);
        }
    }

    #[test]
    fn built_containers_round_trip(
        blocks in prop::collection::vec(
            (0u16..0xF000, prop::collection::vec(any::<u8>(), 1..64)),
            1..8,
        ),
        marker in any::<bool>(),
    ) {
        let mut builder = XexBuilder::new();
        if marker {
            builder = builder.marker();
        }
        for (start, data) in &blocks {
            builder = builder.segment(*start, data);
        }
        let report = parse_with_report(&builder.build());
        prop_assert!(!report.fallback);
        prop_assert!(report.warnings.is_empty());
        prop_assert_eq!(report.segments.len(), blocks.len());
        for (segment, (start, data)) in report.segments.iter().zip(&blocks) {
            prop_assert_eq!(segment.start, *start);
            prop_assert_eq!(&segment.data, data);
        }
    }
}
