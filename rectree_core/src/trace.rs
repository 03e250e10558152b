// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for tree generation.
//!
//! This module provides a [`TreeSink`] trait with per-event methods that the
//! generation pipeline calls at each stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TreeSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::recurrence::Family;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once the depth budget is known, before any node is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthEvent {
    /// Which recurrence family is being expanded.
    pub family: Family,
    /// Depth at which the recurrence bottoms out on its own.
    pub natural: u32,
    /// Depth requested by the caller, if any.
    pub requested: Option<u32>,
    /// Levels below the root that will be materialized.
    pub effective: u32,
    /// Whether `natural` was clamped to the depth horizon.
    pub at_horizon: bool,
}

/// Emitted once per materialized level after the tree is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelEvent {
    /// Level index (root = 0).
    pub level: u32,
    /// Number of nodes on this level.
    pub nodes: u32,
    /// How many of them are base cases.
    pub base_cases: u32,
}

/// Emitted when the node limit stops generation early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeLimitEvent {
    /// The configured node limit.
    pub limit: usize,
    /// Nodes emitted before generation stopped.
    pub emitted: usize,
    /// Deepest level that was (at least partly) materialized.
    pub level: u32,
}

/// Emitted after duplicate detection on a linear-shift tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuplicateEvent {
    /// Distinct arguments reached by more than one call path.
    pub groups: u32,
    /// Nodes annotated with a duplicate count.
    pub annotated: u32,
}

/// Emitted when the final layout has been assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutEvent {
    /// Which recurrence family was expanded.
    pub family: Family,
    /// Total node count.
    pub total_nodes: usize,
    /// Number of levels, including the root level.
    pub total_levels: u32,
    /// Whether the node limit cut generation short.
    pub truncated: bool,
}

// ---------------------------------------------------------------------------
// TreeSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the generation pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TreeSink {
    /// Called when the depth budget has been resolved.
    fn on_depth_resolved(&mut self, e: &DepthEvent) {
        _ = e;
    }

    /// Called for each materialized level, root first.
    fn on_level_built(&mut self, e: &LevelEvent) {
        _ = e;
    }

    /// Called when the node limit stops generation.
    fn on_node_limit(&mut self, e: &NodeLimitEvent) {
        _ = e;
    }

    /// Called after duplicate detection.
    fn on_duplicates(&mut self, e: &DuplicateEvent) {
        _ = e;
    }

    /// Called once the layout has been assembled.
    fn on_layout_finished(&mut self, e: &LayoutEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TreeSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TreeSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TreeSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TreeSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TreeSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TreeSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`DepthEvent`].
    #[inline]
    pub fn depth_resolved(&mut self, e: &DepthEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_depth_resolved(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LevelEvent`].
    #[inline]
    pub fn level_built(&mut self, e: &LevelEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_level_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NodeLimitEvent`].
    #[inline]
    pub fn node_limit(&mut self, e: &NodeLimitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_node_limit(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DuplicateEvent`].
    #[inline]
    pub fn duplicates(&mut self, e: &DuplicateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_duplicates(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout_finished(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_finished(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_depth() -> DepthEvent {
        DepthEvent {
            family: Family::LinearShift,
            natural: 5,
            requested: Some(3),
            effective: 3,
            at_horizon: false,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_depth_resolved(&sample_depth());
        sink.on_level_built(&LevelEvent {
            level: 0,
            nodes: 1,
            base_cases: 0,
        });
        sink.on_layout_finished(&LayoutEvent {
            family: Family::DivideConquer,
            total_nodes: 1,
            total_levels: 1,
            truncated: false,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.depth_resolved(&sample_depth());
        tracer.duplicates(&DuplicateEvent {
            groups: 0,
            annotated: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            levels: Vec<u32>,
        }
        impl TreeSink for RecordingSink {
            fn on_level_built(&mut self, e: &LevelEvent) {
                self.levels.push(e.level);
            }
        }

        let mut sink = RecordingSink { levels: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        for level in 0..3 {
            tracer.level_built(&LevelEvent {
                level,
                nodes: 1,
                base_cases: 0,
            });
        }
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.levels, &[0, 1, 2]);
    }
}
