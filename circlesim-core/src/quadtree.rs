//! Quad-partition tree used as the collision broad phase
//!
//! The tree is an arena of nodes addressed by index. Node 0 is always the
//! root and covers the fixed world region. Each node keeps up to `capacity`
//! entries directly; once full it splits into four quadrant children and
//! forwards further entries to the first child (NE, NW, SE, SW) containing
//! them. Nodes at `max_depth` never split and accept any number of entries.
//!
//! The tree is rebuilt every frame: `clear()` truncates the arena back to
//! the root and the caller reinserts every body. Nodes hold slot indices
//! only; positions are read from the caller's slice on every query.

use crate::region::{Quadrant, Region};
use glam::Vec2;

pub const DEFAULT_CAPACITY: usize = 15;
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Children are stored in `Quadrant::INSERT_ORDER`; queries visit them as
/// NW, NE, SW, SE.
const QUERY_ORDER: [usize; 4] = [1, 0, 3, 2];

/// Anything the index can locate; queries read positions through this so
/// they see moves made after the last rebuild
pub trait Located {
    fn position(&self) -> Vec2;
}

impl Located for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

#[derive(Debug, Clone)]
struct Node {
    region: Region,
    depth: usize,
    entries: Vec<usize>,
    children: Option<[usize; 4]>,
}

impl Node {
    fn new(region: Region, depth: usize) -> Self {
        Self {
            region,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuadTree {
    nodes: Vec<Node>,
    capacity: usize,
    max_depth: usize,
    len: usize,
}

impl QuadTree {
    pub fn new(bounds: Region, capacity: usize, max_depth: usize) -> Self {
        Self {
            nodes: vec![Node::new(bounds, 0)],
            capacity,
            max_depth,
            len: 0,
        }
    }

    pub fn with_capacity(bounds: Region, capacity: usize) -> Self {
        Self::new(bounds, capacity, DEFAULT_MAX_DEPTH)
    }

    pub fn bounds(&self) -> Region {
        self.nodes[0].region
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node (the root alone is depth 0)
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn is_subdivided(&self) -> bool {
        self.nodes[0].children.is_some()
    }

    /// Regions of every node, root first
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.nodes.iter().map(|n| n.region)
    }

    /// Drop every node but the root and empty it
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[0];
        root.entries.clear();
        root.children = None;
        self.len = 0;
    }

    /// Insert a body slot index at `pos`.
    ///
    /// Returns false only when `pos` lies outside the root region.
    pub fn insert(&mut self, index: usize, pos: Vec2) -> bool {
        if !self.nodes[0].region.contains(pos) {
            return false;
        }

        let mut current = 0;
        loop {
            let node = &self.nodes[current];
            if node.entries.len() < self.capacity || node.depth >= self.max_depth {
                break;
            }
            let existing = node.children;
            let children = match existing {
                Some(children) => children,
                None => self.subdivide(current),
            };
            match children
                .into_iter()
                .find(|&child| self.nodes[child].region.contains(pos))
            {
                Some(child) => current = child,
                // Rounding in the halved regions left a sliver no child
                // covers; keep the entry here.
                None => break,
            }
        }

        self.nodes[current].entries.push(index);
        self.len += 1;
        true
    }

    fn subdivide(&mut self, node_idx: usize) -> [usize; 4] {
        let parent = &self.nodes[node_idx];
        let region = parent.region;
        let depth = parent.depth + 1;

        let first = self.nodes.len();
        for quadrant in Quadrant::INSERT_ORDER {
            self.nodes.push(Node::new(region.quadrant(quadrant), depth));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[node_idx].children = Some(children);
        children
    }

    /// Append every stored index whose current position in `items` lies in
    /// `range`. Subtrees are pruned by the regions from the last rebuild.
    pub fn query<T: Located>(&self, range: &Region, items: &[T], found: &mut Vec<usize>) {
        self.query_node(0, range, items, found);
    }

    /// Like `query`, with the appended indices sorted ascending
    pub fn query_sorted<T: Located>(&self, range: &Region, items: &[T], found: &mut Vec<usize>) {
        let start = found.len();
        self.query_node(0, range, items, found);
        found[start..].sort_unstable();
    }

    fn query_node<T: Located>(
        &self,
        node_idx: usize,
        range: &Region,
        items: &[T],
        found: &mut Vec<usize>,
    ) {
        let node = &self.nodes[node_idx];
        if !node.region.intersects(range) {
            return;
        }

        found.extend(node.entries.iter().copied().filter(|&i| {
            items
                .get(i)
                .map_or(false, |item| range.contains(item.position()))
        }));

        if let Some(children) = node.children {
            for slot in QUERY_ORDER {
                self.query_node(children[slot], range, items, found);
            }
        }
    }
}
