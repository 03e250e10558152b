// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-by-level expansion of divide-and-conquer recurrences.
//!
//! The tree is regular, so it is generated one level at a time instead of by
//! recursion: level `L` holds `a^L` nodes of size `n / b^L`. The node at
//! index `i` on level `L` is the child of index `i / a` on level `L - 1`.
//!
//! Generation stops after the first level whose size is at or below `n0`, at
//! the depth budget, or before a level that would exceed the node limit.
//! Only whole levels are ever emitted.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::id::{MAX_NODES, NodeIx};
use super::store::CallTree;
use crate::error::TreeError;
use crate::recurrence::{DivideConquer, Family};
use crate::trace::{NodeLimitEvent, Tracer};

/// Slot range of one emitted level.
#[derive(Clone, Copy, Debug)]
struct LevelSpan {
    first: u32,
    count: u64,
}

/// Builds the call tree of `dc` from `initial_n`, at most `depth` levels below
/// the root.
///
/// # Errors
///
/// Returns [`TreeError::LayoutInconsistency`] if a node cannot be matched to
/// a parent on the previous level. Valid inputs never produce this.
pub(crate) fn build(
    dc: &DivideConquer,
    initial_n: f64,
    depth: u32,
    node_limit: usize,
    tracer: &mut Tracer<'_>,
) -> Result<CallTree, TreeError> {
    let limit = node_limit.min(MAX_NODES);
    let threshold = dc.n0 as f64;
    let a = u64::from(dc.a);

    let mut tree = CallTree::new(Family::DivideConquer);
    let mut spans: Vec<LevelSpan> = Vec::new();
    let mut widths: Vec<u64> = Vec::new();
    let mut size = initial_n;
    let mut width: u64 = 1;

    for level in 0..=depth {
        if level > 0 {
            size /= dc.b;
            let fits = width
                .checked_mul(a)
                .filter(|&next| next <= limit.saturating_sub(tree.len()) as u64);
            let Some(next) = fits else {
                tracer.node_limit(&NodeLimitEvent {
                    limit: node_limit,
                    emitted: tree.len(),
                    level: level - 1,
                });
                tree.mark_truncated();
                break;
            };
            width = next;
        }

        let base_case = size <= threshold;
        let first = tree.len;

        if level == 0 {
            tree.push_root(String::from("d-0-0"), size, base_case);
        } else {
            let prev = spans[level as usize - 1];
            for index in 0..width {
                let parent_index = index / a;
                let parent = u32::try_from(parent_index)
                    .ok()
                    .filter(|_| parent_index < prev.count)
                    .ok_or(TreeError::LayoutInconsistency { level, index })?;
                let parent = NodeIx(prev.first + parent);
                tree.push_child(parent, format!("d-{level}-{index}"), size, base_case);
            }
        }

        spans.push(LevelSpan {
            first,
            count: width,
        });
        widths.push(width);

        if base_case {
            break;
        }
    }

    tree.set_level_widths(widths);
    Ok(tree)
}
