// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer-facing result.
//!
//! [`assemble`] joins a built [`CallTree`] with its positions into a
//! [`TreeLayout`]: one [`LayoutNode`] per call, one [`TreeEdge`] per
//! parent-child link, and a [`TreeMetadata`] summary. With the `serde`
//! feature the whole structure serializes to the JSON shape graph renderers
//! expect, with camelCase keys and absent optional fields omitted.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::config::LayoutConfig;
use crate::layout::{Orientation, Side};
use crate::recurrence::Family;
use crate::tree::{CallTree, DuplicateSummary, NodeIx};

/// A node position in layout coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Renderer node type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NodeKind {
    /// A single recursive call.
    #[default]
    RecursionNode,
}

/// How fast the number of calls grows with depth. A display hint only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GrowthType {
    /// Each call makes at most one recursive call.
    Linear,
    /// Calls branch, so levels can grow geometrically.
    Exponential,
}

impl GrowthType {
    /// Classifies a linear-shift recurrence by its number of shifts.
    #[must_use]
    pub const fn from_shift_count(shifts: usize) -> Self {
        if shifts <= 1 {
            Self::Linear
        } else {
            Self::Exponential
        }
    }
}

/// Per-node payload handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NodeData {
    /// Display text, e.g. `T(7)` or `T(2.67)`.
    pub label: String,
    /// Subproblem size. Divide-and-conquer nodes only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<f64>,
    /// Call argument. Linear-shift nodes only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub argument: Option<f64>,
    /// Depth from the root.
    pub level: u32,
    /// Number of calls on this node's level.
    pub node_count: u64,
    /// Whether the call is at or below the base-case threshold.
    pub is_base_case: bool,
    /// How many calls share this argument, if more than one.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub duplicate_count: Option<u32>,
    /// Where outgoing edges attach.
    pub source_position: Side,
    /// Where the incoming edge attaches.
    pub target_position: Side,
}

impl NodeData {
    /// Returns the numeric argument, whichever field carries it.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.size.or(self.argument).unwrap_or(0.0)
    }
}

/// One positioned node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutNode {
    /// Unique, deterministic node id.
    pub id: String,
    /// Renderer node type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    /// Node payload.
    pub data: NodeData,
    /// Position in layout coordinates.
    pub position: Position,
}

/// Raw styling hints for an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EdgeStyle {
    /// Stroke width from [`LayoutConfig::edge_stroke_width`].
    pub stroke_width: f64,
    /// Set when the edge leads to a repeated subproblem.
    pub dashed: bool,
}

/// A parent-to-child link.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeEdge {
    /// `e-{k}`, where `k` is the target's slot index. Unique because every
    /// node has at most one parent edge.
    pub id: String,
    /// Parent node id.
    pub source: String,
    /// Child node id.
    pub target: String,
    /// Styling hints.
    pub style: EdgeStyle,
}

/// Whole-tree summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeMetadata {
    /// Number of nodes.
    pub total_nodes: usize,
    /// Number of levels, root included.
    pub total_levels: u32,
    /// Node count of every level, root first.
    pub nodes_per_level: Vec<u32>,
    /// Distinct arguments occurring more than once. Linear-shift only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub duplicate_nodes: Option<u32>,
    /// Growth hint. Linear-shift only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub growth_type: Option<GrowthType>,
    /// Recurrence family the tree was built from.
    pub family: Family,
    /// Levels below the root that were allowed.
    pub effective_depth: u32,
    /// Whether the node limit cut generation short.
    pub truncated: bool,
}

/// The complete result of one generation request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TreeLayout {
    /// Nodes in breadth-first order, root first.
    pub nodes: Vec<LayoutNode>,
    /// Edges in the order of their target nodes.
    pub edges: Vec<TreeEdge>,
    /// Summary.
    pub metadata: TreeMetadata,
}

impl TreeLayout {
    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Looks up a node's position by id.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<Position> {
        self.node(id).map(|node| node.position)
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> Option<&LayoutNode> {
        self.nodes.first()
    }
}

/// Extra facts about a tree that are not stored in the [`CallTree`] itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Result of duplicate detection, if it ran.
    pub duplicates: Option<DuplicateSummary>,
    /// Growth hint, if the family has one.
    pub growth: Option<GrowthType>,
    /// Resolved depth budget.
    pub effective_depth: u32,
}

/// Builds a [`TreeLayout`] from a tree and one position per slot.
///
/// # Panics
///
/// Panics if `positions` does not have exactly one entry per node.
#[must_use]
pub fn assemble(
    tree: &CallTree,
    positions: &[Point],
    orientation: Orientation,
    config: &LayoutConfig,
    annotations: &Annotations,
) -> TreeLayout {
    assert_eq!(
        positions.len(),
        tree.len(),
        "one position per node is required"
    );

    let nodes = tree
        .nodes()
        .map(|id| LayoutNode {
            id: String::from(tree.id(id)),
            kind: NodeKind::RecursionNode,
            data: node_data(tree, id, orientation),
            position: positions[id.slot()].into(),
        })
        .collect();

    let edges = tree
        .nodes()
        .filter_map(|id| {
            let parent = tree.parent(id)?;
            let (source, target) = (tree.id(parent), tree.id(id));
            Some(TreeEdge {
                id: format!("e-{}", id.index()),
                source: String::from(source),
                target: String::from(target),
                style: EdgeStyle {
                    stroke_width: config.edge_stroke_width,
                    dashed: tree.duplicate_count(id).is_some(),
                },
            })
        })
        .collect();

    let metadata = TreeMetadata {
        total_nodes: tree.len(),
        total_levels: tree.level_count(),
        nodes_per_level: tree.levels().iter().map(|stats| stats.nodes).collect(),
        duplicate_nodes: annotations.duplicates.map(|summary| summary.groups),
        growth_type: annotations.growth,
        family: tree.family(),
        effective_depth: annotations.effective_depth,
        truncated: tree.is_truncated(),
    };

    TreeLayout {
        nodes,
        edges,
        metadata,
    }
}

fn node_data(tree: &CallTree, id: NodeIx, orientation: Orientation) -> NodeData {
    let value = tree.argument(id);
    let (size, argument) = match tree.family() {
        Family::DivideConquer => (Some(value), None),
        Family::LinearShift => (None, Some(value)),
    };
    NodeData {
        label: label(value),
        size,
        argument,
        level: tree.level(id),
        node_count: tree.node_count(id),
        is_base_case: tree.is_base_case(id),
        duplicate_count: tree.duplicate_count(id),
        source_position: orientation.source_side(),
        target_position: orientation.target_side(),
    }
}

/// Formats `T(x)` with at most two decimals.
pub(crate) fn label(value: f64) -> String {
    let mut digits = format!("{value:.2}");
    let trimmed = digits.trim_end_matches('0').trim_end_matches('.').len();
    digits.truncate(trimmed);
    if digits == "-0" {
        digits.remove(0);
    }
    format!("T({digits})")
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn labels_trim_trailing_zeros() {
        assert_eq!(label(8.0), "T(8)");
        assert_eq!(label(2.5), "T(2.5)");
        assert_eq!(label(8.0 / 3.0), "T(2.67)");
        assert_eq!(label(1.25), "T(1.25)");
        assert_eq!(label(10.0), "T(10)");
        assert_eq!(label(-0.0), "T(0)");
    }

    #[test]
    fn growth_follows_shift_count() {
        assert_eq!(GrowthType::from_shift_count(1), GrowthType::Linear);
        assert_eq!(GrowthType::from_shift_count(2), GrowthType::Exponential);
        assert_eq!(GrowthType::from_shift_count(5), GrowthType::Exponential);
    }

    fn small_tree() -> CallTree {
        let mut tree = CallTree::new(Family::LinearShift);
        let root = tree.push_root("n".to_string(), 2.0, false);
        let a = tree.push_child(root, "n.0".to_string(), 1.0, false);
        tree.push_child(root, "n.1".to_string(), 0.0, true);
        tree.push_child(a, "n.0.0".to_string(), 0.0, true);
        tree.set_level_widths(vec![1, 2, 1]);
        tree.set_duplicate_count(NodeIx(2), 2);
        tree.set_duplicate_count(NodeIx(3), 2);
        tree
    }

    fn positions(tree: &CallTree) -> Vec<Point> {
        tree.nodes()
            .map(|id| Point::new(f64::from(id.index()), f64::from(tree.level(id))))
            .collect()
    }

    #[test]
    fn assembles_nodes_edges_and_metadata() {
        let tree = small_tree();
        let annotations = Annotations {
            duplicates: Some(DuplicateSummary {
                groups: 1,
                annotated: 2,
            }),
            growth: Some(GrowthType::Exponential),
            effective_depth: 2,
        };
        let layout = assemble(
            &tree,
            &positions(&tree),
            Orientation::Vertical,
            &LayoutConfig::standard(),
            &annotations,
        );

        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.edges.len(), 3);
        assert_eq!(layout.edges[0].id, "e-1");
        assert_eq!(layout.edges[2].id, "e-3");
        assert_eq!(layout.edges[2].source, "n.0");
        assert_eq!(layout.edges[2].target, "n.0.0");
        assert!(layout.edges[2].style.dashed);
        assert!(!layout.edges[0].style.dashed);
        assert_eq!(layout.edges[0].style.stroke_width, 1.5);

        let meta = &layout.metadata;
        assert_eq!(meta.total_nodes, 4);
        assert_eq!(meta.total_levels, 3);
        assert_eq!(meta.nodes_per_level, [1, 2, 1]);
        assert_eq!(meta.duplicate_nodes, Some(1));
        assert_eq!(meta.growth_type, Some(GrowthType::Exponential));
        assert!(!meta.truncated);

        let leaf = layout.node("n.1").unwrap();
        assert_eq!(leaf.data.label, "T(0)");
        assert_eq!(leaf.data.argument, Some(0.0));
        assert_eq!(leaf.data.size, None);
        assert_eq!(leaf.data.node_count, 2);
        assert_eq!(leaf.data.duplicate_count, Some(2));
        assert_eq!(leaf.data.source_position, Side::Bottom);
        assert_eq!(leaf.data.target_position, Side::Top);
        assert_eq!(layout.position("n.1"), Some(Position { x: 2.0, y: 1.0 }));
    }

    #[test]
    fn horizontal_connector_hints() {
        let tree = small_tree();
        let layout = assemble(
            &tree,
            &positions(&tree),
            Orientation::Horizontal,
            &LayoutConfig::standard(),
            &Annotations::default(),
        );
        let root = layout.root().unwrap();
        assert_eq!(root.data.source_position, Side::Right);
        assert_eq!(root.data.target_position, Side::Left);
        assert_eq!(layout.metadata.duplicate_nodes, None);
    }

    #[test]
    #[should_panic(expected = "one position per node is required")]
    fn missing_positions_panic() {
        let tree = small_tree();
        let _ = assemble(
            &tree,
            &[Point::ZERO],
            Orientation::Vertical,
            &LayoutConfig::standard(),
            &Annotations::default(),
        );
    }
}
