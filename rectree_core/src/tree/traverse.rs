// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling-link walking.

use core::iter::FusedIterator;

use super::id::{INVALID, NodeIx};
use super::store::CallTree;

/// Walks a node's children along the sibling links, in the order the
/// builder attached them.
///
/// For a linear-shift tree that is shift-declaration order: the child for
/// `shifts[k]` is yielded `k`-th, whatever the shift values are. For a
/// divide-and-conquer tree it is ascending level index.
///
/// Created by [`CallTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a CallTree,
    next: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a CallTree, first: u32) -> Self {
        Self { tree, next: first }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeIx;

    fn next(&mut self) -> Option<NodeIx> {
        let slot = self.next;
        if slot == INVALID {
            return None;
        }
        self.next = self.tree.next_sibling[slot as usize];
        Some(NodeIx(slot))
    }
}

impl FusedIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;
    use crate::recurrence::Family;

    #[test]
    fn yields_attachment_order_then_stops() {
        let mut tree = CallTree::new(Family::LinearShift);
        let root = tree.push_root("n".to_string(), 6.0, false);
        // Arguments for shifts [3, 1, 2], attached in that order.
        let c = [3.0, 5.0, 4.0].map(|arg| tree.push_child(root, "c".to_string(), arg, false));
        let args: Vec<f64> = tree.children(root).map(|k| tree.argument(k)).collect();
        assert_eq!(args, [3.0, 5.0, 4.0]);
        assert_eq!(tree.children(root).collect::<Vec<_>>(), c);

        let mut kids = tree.children(c[0]);
        assert_eq!(kids.next(), None);
        assert_eq!(kids.next(), None);
    }
}
