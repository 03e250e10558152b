// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TreeSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use rectree_core::recurrence::Family;
use rectree_core::trace::{
    DepthEvent, DuplicateEvent, LayoutEvent, LevelEvent, NodeLimitEvent, TreeSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn family_name(family: Family) -> &'static str {
    match family {
        Family::DivideConquer => "divide-conquer",
        Family::LinearShift => "linear-shift",
    }
}

impl<W: Write> TreeSink for PrettyPrintSink<W> {
    fn on_depth_resolved(&mut self, e: &DepthEvent) {
        let requested = e
            .requested
            .map_or_else(|| String::from("none"), |d| d.to_string());
        let _ = writeln!(
            self.writer,
            "[depth] {} natural={} requested={} effective={}{}",
            family_name(e.family),
            e.natural,
            requested,
            e.effective,
            if e.at_horizon { " HORIZON" } else { "" },
        );
    }

    fn on_level_built(&mut self, e: &LevelEvent) {
        let _ = writeln!(
            self.writer,
            "[level] L{} nodes={} base={}",
            e.level, e.nodes, e.base_cases,
        );
    }

    fn on_node_limit(&mut self, e: &NodeLimitEvent) {
        let _ = writeln!(
            self.writer,
            "[limit] stopped at L{} with {} nodes (limit {})",
            e.level, e.emitted, e.limit,
        );
    }

    fn on_duplicates(&mut self, e: &DuplicateEvent) {
        let _ = writeln!(
            self.writer,
            "[dups] groups={} annotated={}",
            e.groups, e.annotated,
        );
    }

    fn on_layout_finished(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] {} nodes={} levels={}{}",
            family_name(e.family),
            e.total_nodes,
            e.total_levels,
            if e.truncated { " TRUNCATED" } else { "" },
        );
    }
}
