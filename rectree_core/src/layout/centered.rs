// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree-width placement with parents centered over their children.

use alloc::vec;
use alloc::vec::Vec;

use super::Placement;
use crate::tree::CallTree;

/// Gives every leaf a unit slot and every internal node the sum of its
/// children's slots, then centers each parent on its children.
///
/// This is the classic post-order layout written as three linear sweeps over
/// slot order instead of recursion. Slot order puts every parent before its
/// children, so a backward sweep sees children first and a forward sweep sees
/// parents first:
///
/// 1. backward: subtree width (leaf = 1, internal = sum of children);
/// 2. forward: each child's slot range starts where its previous sibling's
///    ended, inside the parent's range;
/// 3. backward: leaves sit in the middle of their slot, internal nodes at the
///    mean of their children.
///
/// The result is shifted so the root sits at 0. Subtrees at the same level
/// occupy disjoint ranges, so nodes on one level never coincide. Very
/// unbalanced trees can still look lopsided; this is not a full tidy-tree
/// layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CenteredRecursive;

impl Placement for CenteredRecursive {
    fn cross_slots(&self, tree: &CallTree) -> Vec<f64> {
        let n = tree.len();
        if n == 0 {
            return Vec::new();
        }

        let mut width = vec![0.0_f64; n];
        for id in tree.nodes().rev() {
            let s = id.slot();
            if width[s] == 0.0 {
                width[s] = 1.0;
            }
            if let Some(parent) = tree.parent(id) {
                width[parent.slot()] += width[s];
            }
        }

        let mut start = vec![0.0_f64; n];
        let mut cursor = vec![0.0_f64; n];
        for id in tree.nodes().skip(1) {
            let Some(parent) = tree.parent(id) else {
                continue;
            };
            let s = id.slot();
            start[s] = cursor[parent.slot()];
            cursor[parent.slot()] += width[s];
            cursor[s] = start[s];
        }

        let mut cross = vec![0.0_f64; n];
        let mut child_sum = vec![0.0_f64; n];
        let mut child_count = vec![0_u32; n];
        for id in tree.nodes().rev() {
            let s = id.slot();
            cross[s] = if child_count[s] == 0 {
                start[s] + 0.5
            } else {
                child_sum[s] / f64::from(child_count[s])
            };
            if let Some(parent) = tree.parent(id) {
                child_sum[parent.slot()] += cross[s];
                child_count[parent.slot()] += 1;
            }
        }

        let offset = cross[0];
        for c in &mut cross {
            *c -= offset;
        }
        cross
    }
}
