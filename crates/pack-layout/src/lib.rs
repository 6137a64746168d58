//! Box layout for trees of Pack-styled nodes.
//!
//! This crate computes the size and position of every node in a tree from
//! the node's [`Pack`](pack_style::Pack) style and, for leaves, the natural
//! size reported by the widget it stands for.
//!
//! # Architecture
//!
//! 1. **Tree**: an arena of nodes addressed by [`NodeId`]
//! 2. **Engine**: a single depth-first pass that sizes rows and columns,
//!    distributing leftover space to flexible children
//! 3. **Geometry**: content boxes relative to each parent, plus the minimum
//!    size each node could shrink to
//!
//! # Example
//!
//! ```
//! use pack_core::Direction;
//! use pack_layout::{Intrinsic, IntrinsicSize, LayoutTree, Viewport};
//! use pack_style::Pack;
//!
//! let mut tree = LayoutTree::new();
//! let input = tree.new_leaf(
//!     Pack::new().with_flex(1.0).with_padding(&[5]),
//!     IntrinsicSize::new(Intrinsic::AtLeast(100), 15),
//! );
//! let button = tree.new_leaf(Pack::new().with_padding(&[5]), IntrinsicSize::fixed(40, 10));
//! let root = tree
//!     .with_children(Pack::new().with_direction(Direction::Row), &[input, button])
//!     .unwrap();
//!
//! tree.layout(root, &Viewport::new(640, 480));
//! assert_eq!(tree[input].geometry.content_width, 580);
//! assert_eq!(tree[button].geometry.content_left, 595);
//! ```

mod engine;
mod geometry;
mod intrinsic;
mod tree;
mod viewport;

pub use engine::compute_layout;
pub use geometry::{Bounds, Geometry};
pub use intrinsic::{Intrinsic, IntrinsicSize};
pub use tree::{LayoutNode, LayoutTree, NodeId};
pub use viewport::{Viewport, BASELINE_DPI};
