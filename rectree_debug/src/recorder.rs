// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TreeSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].

use rectree_core::recurrence::Family;
use rectree_core::trace::{
    DepthEvent, DuplicateEvent, LayoutEvent, LevelEvent, NodeLimitEvent, TreeSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_DEPTH: u8 = 1;
const TAG_LEVEL: u8 = 2;
const TAG_NODE_LIMIT: u8 = 3;
const TAG_DUPLICATES: u8 = 4;
const TAG_LAYOUT: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TreeSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Decodes everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        decode(&self.buf).collect()
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(u64::try_from(v).unwrap_or(u64::MAX));
    }

    fn write_option_u32(&mut self, v: Option<u32>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_u32(val);
            }
            None => {
                self.write_u8(0);
                self.write_u32(0);
            }
        }
    }

    fn write_family(&mut self, family: Family) {
        self.write_u8(match family {
            Family::DivideConquer => 0,
            Family::LinearShift => 1,
        });
    }
}

impl TreeSink for RecorderSink {
    fn on_depth_resolved(&mut self, e: &DepthEvent) {
        self.write_u8(TAG_DEPTH);
        self.write_family(e.family);
        self.write_u32(e.natural);
        self.write_option_u32(e.requested);
        self.write_u32(e.effective);
        self.write_u8(u8::from(e.at_horizon));
    }

    fn on_level_built(&mut self, e: &LevelEvent) {
        self.write_u8(TAG_LEVEL);
        self.write_u32(e.level);
        self.write_u32(e.nodes);
        self.write_u32(e.base_cases);
    }

    fn on_node_limit(&mut self, e: &NodeLimitEvent) {
        self.write_u8(TAG_NODE_LIMIT);
        self.write_usize(e.limit);
        self.write_usize(e.emitted);
        self.write_u32(e.level);
    }

    fn on_duplicates(&mut self, e: &DuplicateEvent) {
        self.write_u8(TAG_DUPLICATES);
        self.write_u32(e.groups);
        self.write_u32(e.annotated);
    }

    fn on_layout_finished(&mut self, e: &LayoutEvent) {
        self.write_u8(TAG_LAYOUT);
        self.write_family(e.family);
        self.write_usize(e.total_nodes);
        self.write_u32(e.total_levels);
        self.write_u8(u8::from(e.truncated));
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`DepthEvent`].
    Depth(DepthEvent),
    /// A [`LevelEvent`].
    Level(LevelEvent),
    /// A [`NodeLimitEvent`].
    NodeLimit(NodeLimitEvent),
    /// A [`DuplicateEvent`].
    Duplicates(DuplicateEvent),
    /// A [`LayoutEvent`].
    Layout(LayoutEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated record or unknown tag.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_usize(&mut self) -> Option<usize> {
        Some(usize::try_from(self.read_u64()?).unwrap_or(usize::MAX))
    }

    fn read_option_u32(&mut self) -> Option<Option<u32>> {
        let present = self.read_u8()?;
        let val = self.read_u32()?;
        Some((present != 0).then_some(val))
    }

    fn read_family(&mut self) -> Option<Family> {
        Some(match self.read_u8()? {
            0 => Family::DivideConquer,
            _ => Family::LinearShift,
        })
    }

    fn decode_depth(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Depth(DepthEvent {
            family: self.read_family()?,
            natural: self.read_u32()?,
            requested: self.read_option_u32()?,
            effective: self.read_u32()?,
            at_horizon: self.read_u8()? != 0,
        }))
    }

    fn decode_level(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Level(LevelEvent {
            level: self.read_u32()?,
            nodes: self.read_u32()?,
            base_cases: self.read_u32()?,
        }))
    }

    fn decode_node_limit(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::NodeLimit(NodeLimitEvent {
            limit: self.read_usize()?,
            emitted: self.read_usize()?,
            level: self.read_u32()?,
        }))
    }

    fn decode_duplicates(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Duplicates(DuplicateEvent {
            groups: self.read_u32()?,
            annotated: self.read_u32()?,
        }))
    }

    fn decode_layout(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Layout(LayoutEvent {
            family: self.read_family()?,
            total_nodes: self.read_usize()?,
            total_levels: self.read_u32()?,
            truncated: self.read_u8()? != 0,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_u8()? {
            TAG_DEPTH => self.decode_depth(),
            TAG_LEVEL => self.decode_level(),
            TAG_NODE_LIMIT => self.decode_node_limit(),
            TAG_DUPLICATES => self.decode_duplicates(),
            TAG_LAYOUT => self.decode_layout(),
            _ => None,
        }
    }
}
