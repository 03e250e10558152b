// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced levels.

use alloc::vec;
use alloc::vec::Vec;

use super::Placement;
use crate::tree::CallTree;

/// Places the `i`-th of `k` nodes on a level at cross offset `i - (k - 1) / 2`.
///
/// Every level is centered on the root's axis, independently of the levels
/// above it. For a full `a`-ary tree this puts each parent over the middle of
/// its level, which is as close as a grid gets to over its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegularGrid;

impl Placement for RegularGrid {
    fn cross_slots(&self, tree: &CallTree) -> Vec<f64> {
        let levels = tree.levels();
        let mut seen = vec![0_u32; levels.len()];
        tree.nodes()
            .map(|id| {
                let level = tree.level(id) as usize;
                let index = seen[level];
                seen[level] += 1;
                let k = f64::from(levels[level].nodes);
                f64::from(index) - (k - 1.0) / 2.0
            })
            .collect()
    }
}
