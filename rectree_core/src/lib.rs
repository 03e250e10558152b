// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursion-tree generation and layout for recurrence relations.
//!
//! `rectree_core` turns a symbolic recurrence description into the tree of
//! recursive calls it induces, marks overlapping subproblems, and computes 2D
//! positions for a graph renderer. It is `no_std` compatible (with `alloc`)
//! and stores the call tree in struct-of-arrays form with index handles.
//!
//! # Architecture
//!
//! Data flows strictly forward; no stage depends on anything downstream:
//!
//! ```text
//!   RecurrenceSpec + ViewParams
//!       │
//!       ▼
//!   resolve_depth() ──► DepthBudget
//!       │
//!       ▼
//!   build (divide / linear) ──► CallTree
//!       │
//!       ▼
//!   annotate_duplicates()          (linear-shift only)
//!       │
//!       ▼
//!   Placement::place() ──► Vec<Point>
//!       │
//!       ▼
//!   assemble() ──► TreeLayout
//! ```
//!
//! **[`recurrence`]** — The two input shapes, divide-and-conquer
//! `T(n) = a·T(n/b) + f(n)` and linear-shift `T(n) = Σ cₖ·T(n − sₖ) + g(n)`,
//! with fail-fast validation.
//!
//! **[`depth`]** — How many levels to materialize.
//!
//! **[`tree`]** — The call-tree arena, both builders, and duplicate
//! detection.
//!
//! **[`layout`]** — Regular grid and centered recursive placement, with
//! orientation handling.
//!
//! **[`export`]** — The renderer-facing [`TreeLayout`](export::TreeLayout)
//! and its summary metadata.
//!
//! **[`engine`]** — [`TreeGenerator`](engine::TreeGenerator), which wires the
//! stages together.
//!
//! **[`trace`]** — [`TreeSink`](trace::TreeSink) trait and event types for
//! pipeline instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `serde` (disabled by default): Derives `Serialize`/`Deserialize` for the
//!   input and output contract types.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod depth;
pub mod engine;
pub mod error;
pub mod export;
pub mod layout;
pub mod recurrence;
pub mod trace;
pub mod tree;

pub use config::LayoutConfig;
pub use engine::{
    TreeGenerator, ViewParams, generate_linear_recursion_tree, generate_recursion_tree,
};
pub use error::{InvalidParameter, TreeError};
pub use export::TreeLayout;
pub use layout::Orientation;
pub use recurrence::{DivideConquer, LinearShift, RecurrenceSpec};
