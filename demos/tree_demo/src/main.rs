// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generates two sample recursion trees and exercises the diagnostics
//! pipeline.
//!
//! Builds a merge-sort tree (`T(n) = 2T(n/2) + n`) and a Fibonacci tree
//! (`T(n) = T(n-1) + T(n-2) + 1`), tracing every stage to both a
//! [`PrettyPrintSink`](rectree_debug::pretty::PrettyPrintSink) on stderr and a
//! [`RecorderSink`](rectree_debug::recorder::RecorderSink). Writes each layout
//! and the recorded event log as JSON files.

use std::fs::File;
use std::io::BufWriter;

use rectree_core::trace::{
    DepthEvent, DuplicateEvent, LayoutEvent, LevelEvent, NodeLimitEvent, Tracer, TreeSink,
};
use rectree_core::{
    DivideConquer, LayoutConfig, LinearShift, Orientation, RecurrenceSpec, TreeGenerator,
    TreeLayout, ViewParams,
};

use rectree_debug::pretty::PrettyPrintSink;
use rectree_debug::recorder::RecorderSink;

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TreeSink,
    second: &'a mut dyn TreeSink,
}

impl TreeSink for Tee<'_> {
    fn on_depth_resolved(&mut self, e: &DepthEvent) {
        self.first.on_depth_resolved(e);
        self.second.on_depth_resolved(e);
    }

    fn on_level_built(&mut self, e: &LevelEvent) {
        self.first.on_level_built(e);
        self.second.on_level_built(e);
    }

    fn on_node_limit(&mut self, e: &NodeLimitEvent) {
        self.first.on_node_limit(e);
        self.second.on_node_limit(e);
    }

    fn on_duplicates(&mut self, e: &DuplicateEvent) {
        self.first.on_duplicates(e);
        self.second.on_duplicates(e);
    }

    fn on_layout_finished(&mut self, e: &LayoutEvent) {
        self.first.on_layout_finished(e);
        self.second.on_layout_finished(e);
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::stderr();
    let mut recorder = RecorderSink::new();

    // -- requests ----------------------------------------------------------
    let generator = TreeGenerator::new(LayoutConfig::standard());
    let merge_sort = RecurrenceSpec::from(DivideConquer::new(2, 2.0, "n", 1));
    let fibonacci = RecurrenceSpec::from(
        LinearShift::new(vec![1, 2], 1)
            .with_coefficients(["1", "1"])
            .with_g("1"),
    );

    let runs = [
        ("merge_sort.json", &merge_sort, ViewParams::new(16.0)),
        (
            "fibonacci.json",
            &fibonacci,
            ViewParams::new(6.0).with_orientation(Orientation::Horizontal),
        ),
    ];

    for (path, spec, params) in runs {
        let layout = {
            let mut tee = Tee {
                first: &mut pretty,
                second: &mut recorder,
            };
            let mut tracer = Tracer::new(&mut tee);
            generator
                .generate_traced(spec, &params, &mut tracer)
                .expect("sample recurrences are valid")
        };
        write_layout(path, &layout);
    }

    // -- export event log --------------------------------------------------
    let path = "events.json";
    let file = File::create(path).expect("failed to create events.json");
    let mut writer = BufWriter::new(file);
    rectree_debug::json::export_events(recorder.as_bytes(), &mut writer)
        .expect("failed to write event log");
    println!("Wrote {path}");
}

fn write_layout(path: &str, layout: &TreeLayout) {
    let file = File::create(path).expect("failed to create layout file");
    let mut writer = BufWriter::new(file);
    rectree_debug::json::to_writer(layout, &mut writer).expect("failed to write layout");
    println!(
        "Wrote {path} ({} nodes, {} levels)",
        layout.metadata.total_nodes, layout.metadata.total_levels
    );
}
