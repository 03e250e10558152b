// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node placement.
//!
//! Every placement strategy answers the same question: where along the
//! *cross* axis (the sibling axis) does each node go? The *main* axis (the
//! depth axis) is always `level * level_spacing`. [`Orientation`] decides
//! which of the two becomes `x` and which becomes `y`.
//!
//! - [`RegularGrid`] spaces each level's nodes evenly around 0. Used for
//!   divide-and-conquer trees, where every level is full.
//! - [`CenteredRecursive`] gives every leaf a unit slot and centers each
//!   parent over its children. Used for linear-shift trees, which are ragged.

mod centered;
mod grid;

use alloc::vec::Vec;

use kurbo::Point;

use crate::config::LayoutConfig;
use crate::recurrence::Family;
use crate::tree::CallTree;

pub use centered::CenteredRecursive;
pub use grid::RegularGrid;

/// Which screen axis the tree grows along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Root at the top, levels growing downwards.
    #[default]
    Vertical,
    /// Root at the left, levels growing rightwards.
    Horizontal,
}

impl Orientation {
    /// Maps main-axis and cross-axis coordinates to a point.
    #[inline]
    #[must_use]
    pub const fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }

    /// Returns the other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Side of a node where edges to its children attach.
    #[must_use]
    pub const fn source_side(self) -> Side {
        match self {
            Self::Vertical => Side::Bottom,
            Self::Horizontal => Side::Right,
        }
    }

    /// Side of a node where the edge from its parent attaches.
    #[must_use]
    pub const fn target_side(self) -> Side {
        match self {
            Self::Vertical => Side::Top,
            Self::Horizontal => Side::Left,
        }
    }
}

/// A side of a node's box, passed through to the renderer as a connector hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

/// A cross-axis placement strategy.
pub trait Placement {
    /// Returns each node's cross-axis offset, in units of sibling spacing,
    /// indexed by slot.
    fn cross_slots(&self, tree: &CallTree) -> Vec<f64>;

    /// Returns each node's position, indexed by slot.
    fn place(&self, tree: &CallTree, orientation: Orientation, config: &LayoutConfig) -> Vec<Point> {
        self.cross_slots(tree)
            .into_iter()
            .zip(tree.nodes())
            .map(|(cross, id)| {
                let main = f64::from(tree.level(id)) * config.level_spacing;
                orientation.point(main, cross * config.sibling_spacing)
            })
            .collect()
    }
}

/// Returns the placement strategy used for a recurrence family.
#[must_use]
pub fn placement_for(family: Family) -> &'static dyn Placement {
    match family {
        Family::DivideConquer => &RegularGrid,
        Family::LinearShift => &CenteredRecursive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_swaps_axes() {
        assert_eq!(Orientation::Vertical.point(100.0, -40.0), Point::new(-40.0, 100.0));
        assert_eq!(Orientation::Horizontal.point(100.0, -40.0), Point::new(100.0, -40.0));
        assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
    }

    #[test]
    fn connector_hints_follow_orientation() {
        assert_eq!(Orientation::Vertical.source_side(), Side::Bottom);
        assert_eq!(Orientation::Vertical.target_side(), Side::Top);
        assert_eq!(Orientation::Horizontal.source_side(), Side::Right);
        assert_eq!(Orientation::Horizontal.target_side(), Side::Left);
    }
}
