// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlapping-subproblem detection.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::id::NodeIx;
use super::store::CallTree;

/// What [`annotate_duplicates`] found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DuplicateSummary {
    /// Distinct arguments that occur on more than one node.
    pub groups: u32,
    /// Nodes that received a duplicate count.
    pub annotated: u32,
}

/// Marks every node whose argument also appears elsewhere in the tree.
///
/// Nodes are grouped by argument; each member of a group with more than one
/// node gets the group size as its duplicate count. The pass only adds
/// annotations: no node is merged or removed.
pub fn annotate_duplicates(tree: &mut CallTree) -> DuplicateSummary {
    let mut groups: BTreeMap<u64, Vec<NodeIx>> = BTreeMap::new();
    for id in tree.nodes() {
        groups.entry(argument_key(tree.argument(id))).or_default().push(id);
    }

    let mut summary = DuplicateSummary::default();
    for members in groups.values().filter(|members| members.len() > 1) {
        let count = u32::try_from(members.len()).unwrap_or(u32::MAX);
        for &id in members {
            tree.set_duplicate_count(id, count);
        }
        summary.groups += 1;
        summary.annotated += count;
    }
    summary
}

/// Grouping key for an argument. Folds `-0.0` into `0.0`.
fn argument_key(argument: f64) -> u64 {
    (argument + 0.0).to_bits()
}
