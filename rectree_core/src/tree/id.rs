// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node handle type.

use core::fmt;

/// Sentinel value indicating "no node" in index fields.
pub const INVALID: u32 = u32::MAX;

/// Largest number of nodes a [`CallTree`](super::CallTree) can hold.
pub const MAX_NODES: usize = INVALID as usize;

/// A handle to a node in a [`CallTree`](super::CallTree).
///
/// Trees are built once and never mutated structurally afterwards, so a plain
/// slot index is enough; there is no generation counter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(pub(crate) u32);

impl NodeIx {
    /// Returns the raw slot index.
    ///
    /// Slots are assigned in breadth-first order, so a parent's slot is always
    /// lower than any of its children's.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIx({})", self.0)
    }
}
