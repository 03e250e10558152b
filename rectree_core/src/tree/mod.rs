// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Call-tree data model and builders.
//!
//! A *call tree* has one node per recursive call. Each node has:
//!
//! - An identity ([`NodeIx`]) for in-process addressing, plus a string id
//!   that is stable across identical requests.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree.
//! - **Node data** set by the builder: argument (subproblem size), level, and
//!   whether the call is a base case.
//! - **Annotations** added by post-passes, currently the duplicate count
//!   produced by [`annotate_duplicates`].
//!
//! Two builders produce trees. Divide-and-conquer trees are regular and are
//! emitted level by level with parents found by index arithmetic.
//! Linear-shift trees are irregular and are expanded breadth-first. Both
//! append nodes in breadth-first order.

pub(crate) mod divide;
mod duplicates;
mod id;
pub(crate) mod linear;
mod store;
mod traverse;

pub use duplicates::{DuplicateSummary, annotate_duplicates};
pub use id::{INVALID, MAX_NODES, NodeIx};
pub use store::{CallTree, LevelStats};
pub use traverse::Children;
