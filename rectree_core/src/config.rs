// Copyright 2026 the Rectree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration.

/// Spacing and safety limits used by [`TreeGenerator`](crate::TreeGenerator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Distance between consecutive levels along the main (depth) axis.
    pub level_spacing: f64,
    /// Distance between neighbouring siblings along the cross axis. Also the
    /// width of one leaf slot in the centered layout.
    pub sibling_spacing: f64,
    /// Maximum number of nodes a single tree may contain, independent of the
    /// depth budget. Use `usize::MAX` to disable.
    ///
    /// This bounds node count, not memory. Linear-shift node ids spell out the
    /// path from the root, so a deep chain of `k` nodes carries `O(k²)` bytes
    /// of ids (a 4000-deep chain is roughly 16 MB of node ids alone).
    pub node_limit: usize,
    /// Stroke width passed through in every edge style.
    pub edge_stroke_width: f64,
}

impl LayoutConfig {
    /// Default spacing for full-size node cards.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            level_spacing: 100.0,
            sibling_spacing: 80.0,
            node_limit: 4096,
            edge_stroke_width: 1.5,
        }
    }

    /// Tighter spacing and a lower node limit, for thumbnails and previews.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            level_spacing: 60.0,
            sibling_spacing: 40.0,
            node_limit: 512,
            edge_stroke_width: 1.0,
        }
    }

    /// Returns a copy with a different node limit.
    #[must_use]
    pub const fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = node_limit;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::standard()
    }
}
