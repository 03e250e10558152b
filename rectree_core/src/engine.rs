// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pipeline entry points.
//!
//! [`TreeGenerator`] runs the full pipeline for one request: depth
//! resolution, tree building, duplicate detection (linear-shift only),
//! placement, and assembly. Every call builds fresh local structures and
//! returns an owned [`TreeLayout`], so identical inputs always produce
//! identical output and a generator can be shared freely.

use crate::config::LayoutConfig;
use crate::depth::{DepthBudget, resolve_depth};
use crate::error::TreeError;
use crate::export::{Annotations, GrowthType, TreeLayout, assemble};
use crate::layout::{Orientation, placement_for};
use crate::recurrence::{DivideConquer, LinearShift, RecurrenceSpec};
use crate::trace::{DepthEvent, DuplicateEvent, LayoutEvent, LevelEvent, Tracer};
use crate::tree::{CallTree, DuplicateSummary, annotate_duplicates, divide, linear};

/// Display parameters supplied with every request.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewParams {
    /// Upper bound on levels below the root. `None` means the natural depth.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_depth: Option<u32>,
    /// Axis convention for positions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub orientation: Orientation,
    /// Problem size at the root.
    pub initial_n: f64,
}

impl ViewParams {
    /// Vertical, depth-unbounded parameters for the given root size.
    #[must_use]
    pub const fn new(initial_n: f64) -> Self {
        Self {
            max_depth: None,
            orientation: Orientation::Vertical,
            initial_n,
        }
    }

    /// Returns a copy with a depth bound.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy with a different orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// A call tree with everything learned while building it.
#[derive(Clone, Debug)]
pub struct BuiltTree {
    /// The call tree, duplicates already annotated.
    pub tree: CallTree,
    /// The resolved depth budget.
    pub budget: DepthBudget,
    /// Duplicate detection result. Linear-shift only.
    pub duplicates: Option<DuplicateSummary>,
    /// Growth hint. Linear-shift only.
    pub growth: Option<GrowthType>,
}

/// Generates positioned recursion trees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TreeGenerator {
    config: LayoutConfig,
}

impl TreeGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub const fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generates the layout for `spec`.
    ///
    /// # Errors
    ///
    /// Fails before doing any work if `spec` or `params.initial_n` is
    /// invalid. See [`TreeError`].
    pub fn generate(
        &self,
        spec: &RecurrenceSpec,
        params: &ViewParams,
    ) -> Result<TreeLayout, TreeError> {
        self.generate_traced(spec, params, &mut Tracer::none())
    }

    /// Like [`generate`](Self::generate), reporting each stage to `tracer`.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn generate_traced(
        &self,
        spec: &RecurrenceSpec,
        params: &ViewParams,
        tracer: &mut Tracer<'_>,
    ) -> Result<TreeLayout, TreeError> {
        let built = self.build_traced(spec, params, tracer)?;
        let tree = &built.tree;

        let positions = placement_for(tree.family()).place(tree, params.orientation, &self.config);
        let layout = assemble(
            tree,
            &positions,
            params.orientation,
            &self.config,
            &Annotations {
                duplicates: built.duplicates,
                growth: built.growth,
                effective_depth: built.budget.effective,
            },
        );

        tracer.layout_finished(&LayoutEvent {
            family: tree.family(),
            total_nodes: layout.metadata.total_nodes,
            total_levels: layout.metadata.total_levels,
            truncated: layout.metadata.truncated,
        });
        Ok(layout)
    }

    /// Runs the pipeline up to (not including) placement.
    ///
    /// # Errors
    ///
    /// See [`generate`](Self::generate).
    pub fn build(&self, spec: &RecurrenceSpec, params: &ViewParams) -> Result<BuiltTree, TreeError> {
        self.build_traced(spec, params, &mut Tracer::none())
    }

    fn build_traced(
        &self,
        spec: &RecurrenceSpec,
        params: &ViewParams,
        tracer: &mut Tracer<'_>,
    ) -> Result<BuiltTree, TreeError> {
        let budget = resolve_depth(spec, params.initial_n, params.max_depth)?;
        tracer.depth_resolved(&DepthEvent {
            family: spec.family(),
            natural: budget.natural,
            requested: budget.requested,
            effective: budget.effective,
            at_horizon: budget.at_horizon,
        });

        let limit = self.config.node_limit;
        let (mut tree, growth) = match spec {
            RecurrenceSpec::DivideConquer(dc) => (
                divide::build(dc, params.initial_n, budget.effective, limit, tracer)?,
                None,
            ),
            RecurrenceSpec::LinearShift(ls) => (
                linear::build(ls, params.initial_n, budget.effective, limit, tracer),
                Some(GrowthType::from_shift_count(ls.shifts.len())),
            ),
        };

        if budget.is_horizon_bound() {
            tree.mark_truncated();
        }

        for (level, stats) in (0..).zip(tree.levels()) {
            tracer.level_built(&LevelEvent {
                level,
                nodes: stats.nodes,
                base_cases: stats.base_cases,
            });
        }

        let duplicates = growth.map(|_| {
            let summary = annotate_duplicates(&mut tree);
            tracer.duplicates(&DuplicateEvent {
                groups: summary.groups,
                annotated: summary.annotated,
            });
            summary
        });

        Ok(BuiltTree {
            tree,
            budget,
            duplicates,
            growth,
        })
    }
}

/// Generates a divide-and-conquer tree with the standard configuration.
///
/// # Errors
///
/// See [`TreeGenerator::generate`].
pub fn generate_recursion_tree(
    dc: &DivideConquer,
    max_depth: Option<u32>,
    orientation: Orientation,
    initial_n: f64,
) -> Result<TreeLayout, TreeError> {
    let params = ViewParams::new(initial_n)
        .with_max_depth(max_depth)
        .with_orientation(orientation);
    TreeGenerator::default().generate(&RecurrenceSpec::DivideConquer(dc.clone()), &params)
}

/// Generates a linear-shift tree with the standard configuration.
///
/// # Errors
///
/// See [`TreeGenerator::generate`].
pub fn generate_linear_recursion_tree(
    ls: &LinearShift,
    max_depth: Option<u32>,
    orientation: Orientation,
    initial_n: f64,
) -> Result<TreeLayout, TreeError> {
    let params = ViewParams::new(initial_n)
        .with_max_depth(max_depth)
        .with_orientation(orientation);
    TreeGenerator::default().generate(&RecurrenceSpec::LinearShift(ls.clone()), &params)
}
