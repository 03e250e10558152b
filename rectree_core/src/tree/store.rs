// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays call-tree storage.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use super::id::{INVALID, MAX_NODES, NodeIx};
use super::traverse::Children;
use crate::recurrence::Family;

/// Per-level counts, as returned by [`CallTree::levels`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LevelStats {
    /// Nodes on the level.
    pub nodes: u32,
    /// Base-case nodes on the level.
    pub base_cases: u32,
}

/// Struct-of-arrays storage for one tree of recursive calls.
///
/// Nodes are addressed by [`NodeIx`] handles. Slots are only ever appended,
/// and a child can only be appended after its parent, so slot order is a
/// valid parent-before-child order. The layout passes rely on this: a forward
/// sweep visits parents first and a backward sweep visits children first.
///
/// A tree is built fresh for every request and is never shared, so it needs
/// no interior mutability.
#[derive(Clone, Debug)]
pub struct CallTree {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) last_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,

    // -- Node data (set by builders) --
    pub(crate) ids: Vec<String>,
    pub(crate) argument: Vec<f64>,
    pub(crate) level: Vec<u32>,
    pub(crate) base_case: Vec<bool>,

    // -- Annotations (written by post-passes) --
    pub(crate) duplicate_count: Vec<Option<u32>>,

    // -- Whole-tree data --
    pub(crate) level_widths: Vec<u64>,
    pub(crate) family: Family,
    pub(crate) truncated: bool,
    pub(crate) len: u32,
}

impl CallTree {
    /// Creates an empty tree for the given recurrence family.
    #[must_use]
    pub fn new(family: Family) -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            last_child: Vec::new(),
            next_sibling: Vec::new(),
            ids: Vec::new(),
            argument: Vec::new(),
            level: Vec::new(),
            base_case: Vec::new(),
            duplicate_count: Vec::new(),
            level_widths: Vec::new(),
            family,
            truncated: false,
            len: 0,
        }
    }

    // -- Building API --

    /// Appends the root node.
    ///
    /// # Panics
    ///
    /// Panics if the tree already has a root.
    pub fn push_root(&mut self, id: String, argument: f64, base_case: bool) -> NodeIx {
        assert!(self.len == 0, "tree already has a root");
        self.push_slot(INVALID, id, argument, 0, base_case)
    }

    /// Appends `id` as the last child of `parent` and returns its handle.
    ///
    /// The child's level is one more than its parent's.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is out of range or the tree is full.
    pub fn push_child(
        &mut self,
        parent: NodeIx,
        id: String,
        argument: f64,
        base_case: bool,
    ) -> NodeIx {
        self.validate(parent);
        let p = parent.0;
        let level = self.level[p as usize] + 1;
        let child = self.push_slot(p, id, argument, level, base_case);
        let c = child.0;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            let last = self.last_child[p as usize];
            self.next_sibling[last as usize] = c;
        }
        self.last_child[p as usize] = c;
        child
    }

    fn push_slot(
        &mut self,
        parent: u32,
        id: String,
        argument: f64,
        level: u32,
        base_case: bool,
    ) -> NodeIx {
        assert!((self.len as usize) < MAX_NODES, "call tree is full");
        let idx = self.len;
        self.len += 1;
        self.parent.push(parent);
        self.first_child.push(INVALID);
        self.last_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.ids.push(id);
        self.argument.push(argument);
        self.level.push(level);
        self.base_case.push(base_case);
        self.duplicate_count.push(None);
        NodeIx(idx)
    }

    pub(crate) fn set_level_widths(&mut self, widths: Vec<u64>) {
        self.level_widths = widths;
    }

    pub(crate) fn set_duplicate_count(&mut self, id: NodeIx, count: u32) {
        self.duplicate_count[id.slot()] = Some(count);
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    // -- Topology API --

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeIx> {
        (self.len > 0).then_some(NodeIx(0))
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeIx) -> Option<NodeIx> {
        self.validate(id);
        let p = self.parent[id.slot()];
        (p != INVALID).then_some(NodeIx(p))
    }

    /// Returns an iterator over the direct children of a node.
    #[must_use]
    pub fn children(&self, id: NodeIx) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.slot()])
    }

    /// Returns whether a node has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeIx) -> bool {
        self.validate(id);
        self.first_child[id.slot()] == INVALID
    }

    /// Returns all nodes in slot (breadth-first) order.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = NodeIx> + ExactSizeIterator {
        (0..self.len).map(NodeIx)
    }

    // -- Node data --

    /// Returns the node's unique id.
    #[must_use]
    pub fn id(&self, id: NodeIx) -> &str {
        self.validate(id);
        &self.ids[id.slot()]
    }

    /// Returns the subproblem size (divide-and-conquer) or argument
    /// (linear-shift) of a node.
    #[must_use]
    pub fn argument(&self, id: NodeIx) -> f64 {
        self.validate(id);
        self.argument[id.slot()]
    }

    /// Returns the depth of a node (root = 0).
    #[must_use]
    pub fn level(&self, id: NodeIx) -> u32 {
        self.validate(id);
        self.level[id.slot()]
    }

    /// Returns whether a node is a base case.
    #[must_use]
    pub fn is_base_case(&self, id: NodeIx) -> bool {
        self.validate(id);
        self.base_case[id.slot()]
    }

    /// Returns how many nodes share this node's argument, if more than one do.
    #[must_use]
    pub fn duplicate_count(&self, id: NodeIx) -> Option<u32> {
        self.validate(id);
        self.duplicate_count[id.slot()]
    }

    /// Returns the sibling count reported for a node's level.
    ///
    /// For divide-and-conquer trees this is exactly `a^level`; for
    /// linear-shift trees it is the number of nodes on the level.
    #[must_use]
    pub fn node_count(&self, id: NodeIx) -> u64 {
        let level = self.level(id) as usize;
        self.level_widths.get(level).copied().unwrap_or(0)
    }

    // -- Whole-tree data --

    /// Returns the recurrence family this tree was built from.
    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Returns the reported sibling count of every level, root first.
    #[must_use]
    pub fn level_widths(&self) -> &[u64] {
        &self.level_widths
    }

    /// Returns whether the node limit stopped generation early.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the number of levels, including the root level.
    #[must_use]
    pub fn level_count(&self) -> u32 {
        self.level.iter().max().map_or(0, |&deepest| deepest + 1)
    }

    /// Counts nodes and base cases on every level, root first.
    #[must_use]
    pub fn levels(&self) -> Vec<LevelStats> {
        let mut stats = vec![LevelStats::default(); self.level_count() as usize];
        for (level, &base) in self.level.iter().zip(&self.base_case) {
            let entry = &mut stats[*level as usize];
            entry.nodes += 1;
            if base {
                entry.base_cases += 1;
            }
        }
        stats
    }

    // -- Internal helpers --

    /// Panics if the handle does not belong to this tree.
    fn validate(&self, id: NodeIx) {
        assert!(
            id.0 < self.len,
            "NodeIx out of range: {id:?} (len {})",
            self.len
        );
    }
}
