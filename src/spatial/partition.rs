//! Randomized binary space partitioning
//!
//! The tree is stored as a flat arena of nodes with integer child indices;
//! pre-order traversal of the arena drives sector numbering, which role
//! assignment depends on, so traversal order is part of the contract.

use crate::math::sampling::RandomSource;
use crate::spatial::rect::Rectangle;
use crate::spatial::sector::Sector;

/// Single node of the partition tree
#[derive(Debug, Clone)]
pub struct PartitionNode {
    /// Rectangle covered by this node
    pub bounds: Rectangle,
    /// Arena indices of the two children; `None` for leaves
    pub children: Option<(usize, usize)>,
}

impl PartitionNode {
    /// Whether this node is a leaf of the tree
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Direction of a binary split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitAxis {
    /// Split across the vertical extent (children stack top/bottom)
    Horizontal,
    /// Split across the horizontal extent (children sit left/right)
    Vertical,
}

/// Binary space partition tree over an arena of nodes
#[derive(Debug, Clone)]
pub struct PartitionTree {
    nodes: Vec<PartitionNode>,
    root: usize,
}

impl PartitionTree {
    /// Generate a partition tree over `root` bounds
    ///
    /// At each node a horizontal split is legal iff `height >= 2 * min_size`
    /// and a vertical split iff `width >= 2 * min_size`. Nodes at `max_depth`
    /// or with no legal split become leaves. When both directions are legal
    /// the choice is a fair coin flip; the split offset is drawn uniformly
    /// from `[min_size, dimension - min_size]` inclusive, so neither child is
    /// ever thinner than `min_size` along the split axis.
    ///
    /// Generation always terminates: depth is bounded and splittability is
    /// monotonically exhausted.
    pub fn generate(
        root: Rectangle,
        min_size: u32,
        max_depth: u32,
        rng: &mut RandomSource,
    ) -> Self {
        let mut nodes = Vec::new();
        let root_index = split_recursive(&mut nodes, root, 0, min_size, max_depth, rng);
        Self {
            nodes,
            root: root_index,
        }
    }

    /// The root node's bounds
    pub fn root_bounds(&self) -> Option<Rectangle> {
        self.nodes.get(self.root).map(|node| node.bounds)
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[PartitionNode] {
        &self.nodes
    }

    /// Collect leaf indices in pre-order (left subtree fully before right)
    pub fn collect_leaves(&self) -> Vec<usize> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root];

        while let Some(index) = stack.pop() {
            let Some(node) = self.nodes.get(index) else {
                continue;
            };
            match node.children {
                None => leaves.push(index),
                Some((left, right)) => {
                    // Right pushed first so left is visited first
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        leaves
    }

    /// Flatten leaves into sectors numbered in pre-order
    pub fn sectors(&self) -> Vec<Sector> {
        self.collect_leaves()
            .iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                self.nodes
                    .get(index)
                    .map(|node| Sector::new(position, node.bounds))
            })
            .collect()
    }

    /// Maximum leaf depth of the tree
    pub fn depth(&self) -> u32 {
        depth_below(&self.nodes, self.root)
    }
}

fn depth_below(nodes: &[PartitionNode], index: usize) -> u32 {
    match nodes.get(index).and_then(|node| node.children) {
        None => 0,
        Some((left, right)) => 1 + depth_below(nodes, left).max(depth_below(nodes, right)),
    }
}

fn split_recursive(
    nodes: &mut Vec<PartitionNode>,
    bounds: Rectangle,
    depth: u32,
    min_size: u32,
    max_depth: u32,
    rng: &mut RandomSource,
) -> usize {
    let index = nodes.len();
    nodes.push(PartitionNode {
        bounds,
        children: None,
    });

    if depth >= max_depth {
        return index;
    }

    let can_horizontal = bounds.height >= min_size * 2;
    let can_vertical = bounds.width >= min_size * 2;

    let axis = match (can_horizontal, can_vertical) {
        (false, false) => return index,
        (true, false) => SplitAxis::Horizontal,
        (false, true) => SplitAxis::Vertical,
        (true, true) => {
            if rng.coin_flip() {
                SplitAxis::Horizontal
            } else {
                SplitAxis::Vertical
            }
        }
    };

    let (first, second) = match axis {
        SplitAxis::Horizontal => {
            let offset = rng.range_inclusive(min_size, bounds.height - min_size);
            bounds.split_horizontal(offset)
        }
        SplitAxis::Vertical => {
            let offset = rng.range_inclusive(min_size, bounds.width - min_size);
            bounds.split_vertical(offset)
        }
    };

    let left = split_recursive(nodes, first, depth + 1, min_size, max_depth, rng);
    let right = split_recursive(nodes, second, depth + 1, min_size, max_depth, rng);

    if let Some(node) = nodes.get_mut(index) {
        node.children = Some((left, right));
    }

    index
}
