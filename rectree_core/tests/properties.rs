// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariants of generated layouts.
//!
//! 1. Divide-and-conquer levels hold exactly `a^L` nodes.
//! 2. Divide-and-conquer sizes are `n / b^L`.
//! 3. Every non-root node has exactly one incoming edge; the root has none.
//! 4. Linear-shift edges apply exactly one shift, and arguments never go
//!    negative.
//! 5. Identical requests give identical layouts.
//! 6. Toggling orientation only swaps coordinates.
//! 7. A zero depth bound yields the root alone.

use std::collections::HashMap;

use proptest::prelude::*;
use rectree_core::{
    DivideConquer, LinearShift, Orientation, RecurrenceSpec, TreeGenerator, TreeLayout,
    ViewParams,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn divide_conquer_strategy() -> impl Strategy<Value = DivideConquer> {
    (1_u32..=4, 1.5_f64..4.0, 1_i64..=3).prop_map(|(a, b, n0)| DivideConquer::new(a, b, "n", n0))
}

fn linear_shift_strategy() -> impl Strategy<Value = LinearShift> {
    (prop::collection::vec(1_u32..=4, 1..=3), -1_i64..=3)
        .prop_map(|(shifts, n0)| LinearShift::new(shifts, n0))
}

fn spec_strategy() -> impl Strategy<Value = RecurrenceSpec> {
    prop_oneof![
        divide_conquer_strategy().prop_map(RecurrenceSpec::from),
        linear_shift_strategy().prop_map(RecurrenceSpec::from),
    ]
}

fn generate(spec: &RecurrenceSpec, params: &ViewParams) -> TreeLayout {
    TreeGenerator::default()
        .generate(spec, params)
        .expect("strategies only produce valid recurrences")
}

fn arguments(layout: &TreeLayout) -> HashMap<&str, f64> {
    layout
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.data.value()))
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Divide-and-conquer level widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn divide_conquer_levels_are_powers_of_a(
        dc in divide_conquer_strategy(),
        n in 1.0_f64..300.0,
        depth in prop::option::of(0_u32..8),
    ) {
        let a = u64::from(dc.a);
        let spec = RecurrenceSpec::from(dc);
        let layout = generate(&spec, &ViewParams::new(n).with_max_depth(depth));
        for (level, &count) in layout.metadata.nodes_per_level.iter().enumerate() {
            let expected = a.pow(u32::try_from(level).unwrap());
            prop_assert_eq!(u64::from(count), expected, "level {}", level);
        }
        for node in &layout.nodes {
            prop_assert_eq!(node.data.node_count, a.pow(node.data.level));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Divide-and-conquer sizes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn divide_conquer_sizes_shrink_by_b(
        dc in divide_conquer_strategy(),
        n in 1.0_f64..300.0,
    ) {
        let b = dc.b;
        let n0 = dc.n0 as f64;
        let spec = RecurrenceSpec::from(dc);
        let layout = generate(&spec, &ViewParams::new(n));
        for node in &layout.nodes {
            let expected = n / b.powi(i32::try_from(node.data.level).unwrap());
            let size = node.data.size.expect("divide-and-conquer nodes carry a size");
            prop_assert!(
                (size - expected).abs() <= 1e-9 * expected.max(1.0),
                "size {} at level {}, expected {}",
                size, node.data.level, expected
            );
            prop_assert_eq!(node.data.is_base_case, size <= n0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Exactly one parent edge per non-root node
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_parent_edge_per_node(spec in spec_strategy(), n in 0.0_f64..40.0) {
        let layout = generate(&spec, &ViewParams::new(n));
        let mut incoming: HashMap<&str, usize> = HashMap::new();
        for edge in &layout.edges {
            *incoming.entry(edge.target.as_str()).or_default() += 1;
        }
        let root = layout.root().expect("every layout has a root");
        prop_assert_eq!(root.data.level, 0);
        prop_assert!(!incoming.contains_key(root.id.as_str()), "root has a parent edge");
        for node in layout.nodes.iter().skip(1) {
            prop_assert_eq!(incoming.get(node.id.as_str()).copied(), Some(1), "{}", &node.id);
        }
        prop_assert_eq!(layout.edges.len(), layout.nodes.len() - 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Linear-shift edges apply one shift
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_shift_edges_apply_one_shift(ls in linear_shift_strategy(), n in 0_u32..20) {
        let shifts: Vec<f64> = ls.shifts.iter().map(|&s| f64::from(s)).collect();
        let spec = RecurrenceSpec::from(ls);
        let layout = generate(&spec, &ViewParams::new(f64::from(n)));
        let args = arguments(&layout);
        for edge in &layout.edges {
            let parent = args[edge.source.as_str()];
            let child = args[edge.target.as_str()];
            prop_assert!(child >= 0.0, "negative argument on {}", &edge.target);
            let delta = parent - child;
            prop_assert!(
                shifts.contains(&delta) || (child == 0.0 && shifts.iter().any(|&s| s > delta)),
                "edge {} applies {}",
                &edge.id, delta
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generation_is_deterministic(
        spec in spec_strategy(),
        n in 0.0_f64..40.0,
        depth in prop::option::of(0_u32..10),
    ) {
        let params = ViewParams::new(n).with_max_depth(depth);
        prop_assert_eq!(generate(&spec, &params), generate(&spec, &params));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Orientation swap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn orientation_swap_preserves_structure(spec in spec_strategy(), n in 0.0_f64..40.0) {
        let vertical = generate(&spec, &ViewParams::new(n));
        let horizontal = generate(
            &spec,
            &ViewParams::new(n).with_orientation(Orientation::Horizontal),
        );
        prop_assert_eq!(&vertical.edges, &horizontal.edges);
        prop_assert_eq!(vertical.nodes.len(), horizontal.nodes.len());
        for (v, h) in vertical.nodes.iter().zip(&horizontal.nodes) {
            prop_assert_eq!(&v.id, &h.id);
            prop_assert_eq!(v.data.level, h.data.level);
            prop_assert_eq!(v.position.x, h.position.y);
            prop_assert_eq!(v.position.y, h.position.x);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Zero depth
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_depth_yields_root_only(spec in spec_strategy(), n in 0.0_f64..1e6) {
        let layout = generate(&spec, &ViewParams::new(n).with_max_depth(Some(0)));
        prop_assert_eq!(layout.nodes.len(), 1);
        prop_assert!(layout.edges.is_empty(), "root-only tree has edges");
        prop_assert_eq!(layout.metadata.nodes_per_level, vec![1]);
    }
}
