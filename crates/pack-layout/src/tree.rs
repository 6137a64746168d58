//! Layout tree data structures.
//!
//! Nodes live in an arena owned by [`LayoutTree`] and refer to each other by
//! [`NodeId`]. Each node carries its style, the intrinsic size reported by
//! its widget, and the geometry computed by the last layout pass.

use std::ops::{Index, IndexMut};

use pack_core::{TreeError, Visibility};
use pack_style::Pack;
use smallvec::SmallVec;

use crate::engine::compute_layout;
use crate::geometry::{Bounds, Geometry};
use crate::intrinsic::IntrinsicSize;
use crate::viewport::Viewport;

/// Unique identifier for a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its tree's arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Unique ID for this node
    pub id: NodeId,
    /// Optional name for debugging
    pub name: Option<String>,
    pub style: Pack,
    /// Natural size reported by the widget (leaves only)
    pub intrinsic: IntrinsicSize,
    /// Result of the last layout pass
    pub geometry: Geometry,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    leaf: bool,
}

impl LayoutNode {
    fn new(id: NodeId, style: Pack, intrinsic: IntrinsicSize, leaf: bool) -> Self {
        Self {
            id,
            name: None,
            style,
            intrinsic,
            geometry: Geometry::default(),
            parent: None,
            children: SmallVec::new(),
            leaf,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if the node was created as a leaf and can never hold children.
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }
}

/// An arena of layout nodes forming one or more trees.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// Create an empty layout tree.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, style: Pack, intrinsic: IntrinsicSize, leaf: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode::new(id, style, intrinsic, leaf));
        id
    }

    /// Add a widget node. Leaves report an intrinsic size and cannot have
    /// children.
    pub fn new_leaf(&mut self, style: Pack, intrinsic: IntrinsicSize) -> NodeId {
        self.push(style, intrinsic, true)
    }

    /// Add a container node whose size derives from its children.
    pub fn new_container(&mut self, style: Pack) -> NodeId {
        self.push(style, IntrinsicSize::default(), false)
    }

    /// Add a container and attach `children` to it in order.
    pub fn with_children(&mut self, style: Pack, children: &[NodeId]) -> Result<NodeId, TreeError> {
        let id = self.new_container(style);
        for &child in children {
            self.add_child(id, child)?;
        }
        Ok(id)
    }

    /// Set the debug name of a node.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self[id].name = Some(name.into());
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let index = self[parent].children.len();
        self.insert_child(parent, index, child)
    }

    /// Insert `child` at `index` in `parent`'s children. An index past the
    /// end appends.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<(), TreeError> {
        if self[parent].leaf {
            return Err(TreeError::LeafNode { node: parent.0 });
        }
        if self[child].parent.is_some() {
            return Err(TreeError::AlreadyParented { node: child.0 });
        }
        if self.root_of(parent) == child {
            return Err(TreeError::WouldCycle {
                parent: parent.0,
                child: child.0,
            });
        }

        let node = &mut self[parent];
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        node.style.mark_dirty();
        self[child].parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child stays in the arena as the
    /// root of its own tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let node = &mut self[parent];
        let position = node
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(TreeError::NotAChild {
                parent: parent.0,
                child: child.0,
            })?;
        node.children.remove(position);
        node.style.mark_dirty();
        self[child].parent = None;
        Ok(())
    }

    /// Detach every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = std::mem::take(&mut self[parent].children);
        if !children.is_empty() {
            self[parent].style.mark_dirty();
        }
        for child in children {
            self[child].parent = None;
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// The topmost ancestor of a node (the node itself if it has no parent).
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self[current].parent {
            current = parent;
        }
        current
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id.0)
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter()
    }

    /// `root` and all of its descendants, depth first, parents before
    /// children.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            result.push(id);
            stack.extend(self[id].children.iter().rev().copied());
        }
        result
    }

    /// Replace the natural size reported by a widget.
    pub fn set_intrinsic(&mut self, id: NodeId, intrinsic: IntrinsicSize) {
        let node = &mut self[id];
        if node.intrinsic != intrinsic {
            node.intrinsic = intrinsic;
            node.style.mark_dirty();
        }
    }

    /// Compute geometry for `root` and its descendants.
    pub fn layout(&mut self, root: NodeId, viewport: &Viewport) {
        compute_layout(self, root, viewport);
    }

    /// True if any style in `root`'s tree changed since the last refresh.
    pub fn needs_refresh(&self, root: NodeId) -> bool {
        self.descendants(root)
            .into_iter()
            .any(|id| self[id].style.is_dirty())
    }

    /// Lay out `root`'s tree and mark every style in it clean.
    pub fn refresh(&mut self, root: NodeId, viewport: &Viewport) {
        self.layout(root, viewport);
        for id in self.descendants(root) {
            self[id].style.mark_clean();
        }
    }

    /// The content box of a node in the coordinates of its tree's root.
    pub fn absolute_content_bounds(&self, id: NodeId) -> Bounds {
        let geometry = self[id].geometry;
        let (mut x, mut y): (i32, i32) = (0, 0);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self[node_id];
            x = x.saturating_add(node.geometry.content_left);
            y = y.saturating_add(node.geometry.content_top);
            current = node.parent;
        }
        Bounds::new(x, y, geometry.content_width, geometry.content_height)
    }

    /// Find the deepest visible node under `root` whose content box contains
    /// the point (in root coordinates).
    pub fn hit_test(&self, root: NodeId, x: i32, y: i32) -> Option<NodeId> {
        let origin = match self[root].parent {
            Some(parent) => self.absolute_content_bounds(parent),
            None => Bounds::default(),
        };
        self.hit_test_recursive(root, origin.x, origin.y, x, y)
    }

    fn hit_test_recursive(&self, id: NodeId, parent_x: i32, parent_y: i32, x: i32, y: i32) -> Option<NodeId> {
        let node = &self[id];

        if node.style.visibility() == Visibility::Hidden {
            return None;
        }

        let bounds = Bounds::new(
            parent_x.saturating_add(node.geometry.content_left),
            parent_y.saturating_add(node.geometry.content_top),
            node.geometry.content_width,
            node.geometry.content_height,
        );
        if !bounds.contains(x, y) {
            return None;
        }

        // Later children are drawn on top
        for &child in node.children.iter().rev() {
            if let Some(hit) = self.hit_test_recursive(child, bounds.x, bounds.y, x, y) {
                return Some(hit);
            }
        }

        Some(id)
    }
}

impl Index<NodeId> for LayoutTree {
    type Output = LayoutNode;

    fn index(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for LayoutTree {
    fn index_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0]
    }
}
