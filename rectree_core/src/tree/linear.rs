// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first expansion of linear-shift recurrences.
//!
//! Each non-base node with argument `x` gets one child per shift `s`, in the
//! declared shift order, with argument `x - s`. Negative arguments are clamped
//! to 0. Argument 0 is always a base case, even when `n0` is negative, so the
//! recursion bottoms out within `initial_n` levels.
//!
//! Node ids encode the path from the root (`n`, `n.0`, `n.1.0`, ...), so the
//! same argument reached along different shift sequences yields distinct
//! nodes. Those repeated calls are exactly what the visualization wants to
//! show; they are never merged. The FIFO queue follows shift order, so equal
//! inputs always give equal ids and slot order.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::id::MAX_NODES;
use super::store::CallTree;
use crate::depth::linear_argument;
use crate::recurrence::{Family, LinearShift};
use crate::trace::{NodeLimitEvent, Tracer};

/// Builds the call tree of `ls` from `initial_n`, at most `depth` levels below
/// the root.
///
/// A node is only expanded when all of its children fit under `node_limit`;
/// otherwise generation stops and the tree is marked truncated.
pub(crate) fn build(
    ls: &LinearShift,
    initial_n: f64,
    depth: u32,
    node_limit: usize,
    tracer: &mut Tracer<'_>,
) -> CallTree {
    let limit = node_limit.min(MAX_NODES);
    let root_argument = linear_argument(initial_n);

    let mut tree = CallTree::new(Family::LinearShift);
    // Exact integer arguments, parallel to the tree's slots.
    let mut arguments: Vec<i64> = Vec::new();
    let mut queue = VecDeque::new();

    let threshold = ls.n0.max(0);
    let root_base = root_argument <= threshold;
    let root = tree.push_root(String::from("n"), root_argument as f64, root_base);
    arguments.push(root_argument);
    if !root_base {
        queue.push_back(root);
    }

    while let Some(parent) = queue.pop_front() {
        let level = tree.level(parent);
        if level >= depth {
            continue;
        }
        if tree.len() + ls.shifts.len() > limit {
            tracer.node_limit(&NodeLimitEvent {
                limit: node_limit,
                emitted: tree.len(),
                level: tree.level_count().saturating_sub(1),
            });
            tree.mark_truncated();
            break;
        }

        let x = arguments[parent.slot()];
        for (k, &shift) in ls.shifts.iter().enumerate() {
            let raw = x - i64::from(shift);
            let argument = raw.max(0);
            let base_case = argument <= threshold;
            let id = format!("{}.{k}", tree.id(parent));
            let child = tree.push_child(parent, id, argument as f64, base_case);
            arguments.push(argument);
            if !base_case {
                queue.push_back(child);
            }
        }
    }

    let widths = tree
        .levels()
        .iter()
        .map(|stats| u64::from(stats.nodes))
        .collect();
    tree.set_level_widths(widths);
    tree
}
