// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON output.
//!
//! [`to_writer`] and [`to_value`] write a finished [`TreeLayout`] in the shape
//! graph renderers consume: `nodes`, `edges`, and `metadata`, with camelCase
//! keys. [`export_events`] turns bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) into a JSON array, one
//! object per event.

use std::io::{self, Write};

use rectree_core::TreeLayout;
use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Writes `layout` as pretty-printed JSON.
pub fn to_writer(layout: &TreeLayout, writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, layout)?;
    writeln!(writer)
}

/// Converts `layout` to a JSON value.
pub fn to_value(layout: &TreeLayout) -> serde_json::Result<Value> {
    serde_json::to_value(layout)
}

/// Converts recorded events to a JSON array.
#[must_use]
pub fn events_to_value(bytes: &[u8]) -> Value {
    let events: Vec<Value> = decode(bytes)
        .map(|recorded| match recorded {
            RecordedEvent::Depth(e) => json!({
                "event": "depth",
                "family": e.family,
                "natural": e.natural,
                "requested": e.requested,
                "effective": e.effective,
                "atHorizon": e.at_horizon,
            }),
            RecordedEvent::Level(e) => json!({
                "event": "level",
                "level": e.level,
                "nodes": e.nodes,
                "baseCases": e.base_cases,
            }),
            RecordedEvent::NodeLimit(e) => json!({
                "event": "nodeLimit",
                "limit": e.limit,
                "emitted": e.emitted,
                "level": e.level,
            }),
            RecordedEvent::Duplicates(e) => json!({
                "event": "duplicates",
                "groups": e.groups,
                "annotated": e.annotated,
            }),
            RecordedEvent::Layout(e) => json!({
                "event": "layout",
                "family": e.family,
                "totalNodes": e.total_nodes,
                "totalLevels": e.total_levels,
                "truncated": e.truncated,
            }),
        })
        .collect();
    Value::Array(events)
}

/// Writes recorded events as a pretty-printed JSON array.
pub fn export_events(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &events_to_value(bytes))?;
    writeln!(writer)
}
