//! The Pack box layout algorithm.
//!
//! Layout is a single depth-first traversal. Each container lays its
//! children out along its main axis in four passes:
//!
//! 1. **Fixed children**: children with an explicit size, a fixed intrinsic
//!    size, or no flex are sized immediately against the remaining space.
//!    Flexible children are deferred and their flex weights summed.
//! 2. **Quantum**: the space left (plus the minimums reserved by flexible
//!    children) is divided by the total flex. Flexible children whose
//!    minimum exceeds their share leave the pool once, and the quantum is
//!    recomputed. The correction is not iterated.
//! 3. **Flexible children**: deferred children are sized from the quantum.
//! 4. **Placement**: children are positioned along the main axis (mirrored
//!    for right-to-left rows) and aligned on the cross axis.
//!
//! Every node reports both the size it used and the smallest size it could
//! have used, so ancestors can size themselves around their content.
//!
//! Sums are taken in `i64` and clamped to `i32` when stored, so any style
//! that passes validation lays out without overflow.

use pack_core::{Alignment, Direction, TextDirection};
use pack_style::Pack;
use smallvec::SmallVec;
use tracing::{debug, debug_span, trace, trace_span};

use crate::intrinsic::{Intrinsic, IntrinsicSize};
use crate::tree::{LayoutTree, NodeId};
use crate::viewport::Viewport;

/// Padding on all sides, in pixels.
#[derive(Debug, Clone, Copy, Default)]
struct Padding {
    top: i64,
    right: i64,
    bottom: i64,
    left: i64,
}

impl Padding {
    /// Get total horizontal padding.
    fn horizontal(&self) -> i64 {
        self.left + self.right
    }

    /// Get total vertical padding.
    fn vertical(&self) -> i64 {
        self.top + self.bottom
    }
}

/// The geometry-relevant part of a style, scaled to pixels.
#[derive(Debug, Clone, Copy)]
struct BoxStyle {
    width: Option<i64>,
    height: Option<i64>,
    flex: f64,
    padding: Padding,
    direction: Direction,
    alignment: Option<Alignment>,
    text_direction: TextDirection,
}

impl BoxStyle {
    fn is_flexible(&self) -> bool {
        self.flex > 0.0
    }
}

/// A child as seen by its parent's layout passes.
#[derive(Debug, Clone, Copy)]
struct Child {
    id: NodeId,
    style: BoxStyle,
    intrinsic: IntrinsicSize,
}

/// Size a container arrived at, with the minimum it could shrink to.
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_width: i64,
    width: i64,
    min_height: i64,
    height: i64,
}

/// Context for layout computation.
struct LayoutContext<'a> {
    viewport: &'a Viewport,
}

/// Compute geometry for `root` and every node below it.
///
/// The root always fills the viewport on both axes. Its content offsets are
/// its own padding, so [`Geometry::width`](crate::Geometry::width) and
/// [`Geometry::height`](crate::Geometry::height) of the root give the total
/// space the layout needs.
pub fn compute_layout(tree: &mut LayoutTree, root: NodeId, viewport: &Viewport) {
    let _span = debug_span!(
        "compute_layout",
        root = root.index(),
        width = viewport.width,
        height = viewport.height,
        dpi = viewport.dpi
    )
    .entered();

    let ctx = LayoutContext { viewport };
    ctx.layout_node(
        tree,
        root,
        i64::from(viewport.width),
        i64::from(viewport.height),
        true,
        true,
    );

    let padding = ctx.box_style(&tree[root].style).padding;
    let geometry = &mut tree[root].geometry;
    geometry.content_top = to_px(padding.top);
    geometry.content_right = to_px(padding.right);
    geometry.content_bottom = to_px(padding.bottom);
    geometry.content_left = to_px(padding.left);

    debug!(
        width = geometry.width(),
        height = geometry.height(),
        min_width = geometry.min_width(),
        min_height = geometry.min_height(),
        "layout complete"
    );
}

impl<'a> LayoutContext<'a> {
    fn box_style(&self, style: &Pack) -> BoxStyle {
        let scale = |value: i32| i64::from(self.viewport.scale(value));
        BoxStyle {
            width: style.width().map(scale),
            height: style.height().map(scale),
            flex: style.flex(),
            padding: Padding {
                top: scale(style.padding_top()),
                right: scale(style.padding_right()),
                bottom: scale(style.padding_bottom()),
                left: scale(style.padding_left()),
            },
            direction: style.direction(),
            alignment: style.alignment(),
            text_direction: style.text_direction(),
        }
    }

    fn children(&self, tree: &LayoutTree, id: NodeId) -> SmallVec<[Child; 4]> {
        tree.children(id)
            .iter()
            .map(|&child| {
                let node = &tree[child];
                Child {
                    id: child,
                    style: self.box_style(&node.style),
                    intrinsic: node.intrinsic,
                }
            })
            .collect()
    }

    /// Size one node given the space its parent allocated, and lay out its
    /// children.
    fn layout_node(
        &self,
        tree: &mut LayoutTree,
        id: NodeId,
        alloc_width: i64,
        alloc_height: i64,
        use_all_width: bool,
        use_all_height: bool,
    ) {
        let node = &tree[id];
        let _span =
            trace_span!("layout_node", node = id.index(), name = node.name.as_deref()).entered();

        let style = self.box_style(&node.style);
        let intrinsic = node.intrinsic;
        let has_children = !node.children().is_empty();

        let (available_width, mut min_width) = available(
            style.width,
            intrinsic.width,
            alloc_width,
            style.padding.horizontal(),
        );
        let (available_height, mut min_height) = available(
            style.height,
            intrinsic.height,
            alloc_height,
            style.padding.vertical(),
        );
        let mut width = available_width;
        let mut height = available_height;

        if has_children {
            let extent = match style.direction {
                Direction::Row => self.layout_row(
                    tree,
                    id,
                    &style,
                    available_width,
                    available_height,
                    use_all_width,
                    use_all_height,
                ),
                Direction::Column => self.layout_column(
                    tree,
                    id,
                    &style,
                    available_width,
                    available_height,
                    use_all_width,
                    use_all_height,
                ),
            };
            min_width = extent.min_width;
            width = extent.width;
            min_height = extent.min_height;
            height = extent.height;
        }

        // An explicit size is authoritative.
        if let Some(explicit) = style.width {
            width = explicit;
            min_width = explicit;
        }
        if let Some(explicit) = style.height {
            height = explicit;
            min_height = explicit;
        }

        trace!(width, height, min_width, min_height, "sized");

        let geometry = &mut tree[id].geometry;
        geometry.content_width = to_px(width);
        geometry.content_height = to_px(height);
        geometry.min_content_width = to_px(min_width);
        geometry.min_content_height = to_px(min_height);
        geometry.content_right = 0;
        geometry.content_bottom = 0;
    }

    #[allow(clippy::too_many_arguments)]
    fn layout_row(
        &self,
        tree: &mut LayoutTree,
        id: NodeId,
        style: &BoxStyle,
        available_width: i64,
        available_height: i64,
        use_all_width: bool,
        use_all_height: bool,
    ) -> Extent {
        let children = self.children(tree, id);

        let mut flex_total = 0.0;
        let mut min_flex: i64 = 0;
        let mut width: i64 = 0;
        let mut min_width: i64 = 0;
        let mut remaining_width = available_width;

        // Pass 1: size everything that is not flex-deferred.
        for child in &children {
            let padding = child.style.padding.horizontal();
            let fill_height = child.style.direction == Direction::Column;

            let (used, minimum) = if child.style.width.is_some() {
                self.layout_node(tree, child.id, remaining_width, available_height, false, fill_height);
                widths(tree, child.id)
            } else if let Some(floor) = child.intrinsic.width.at_least() {
                if child.style.is_flexible() {
                    let floor = i64::from(floor);
                    flex_total += child.style.flex;
                    min_flex += padding + floor;
                    (floor, floor)
                } else {
                    self.layout_node(tree, child.id, 0, available_height, false, fill_height);
                    widths(tree, child.id)
                }
            } else if child.intrinsic.width == Intrinsic::Unset && child.style.is_flexible() {
                flex_total += child.style.flex;
                width += padding;
                min_width += padding;
                continue;
            } else {
                self.layout_node(tree, child.id, remaining_width, available_height, false, fill_height);
                widths(tree, child.id)
            };

            width += padding + used;
            min_width += padding + minimum;
            remaining_width -= padding + used;
        }

        // Pass 2: the per-flex-unit share, with one overflow correction.
        let mut quantum = 0.0;
        if flex_total > 0.0 {
            quantum = (remaining_width + min_flex) as f64 / flex_total;
            for child in &children {
                if child.style.width.is_some() || !child.style.is_flexible() {
                    continue;
                }
                if let Some(floor) = child.intrinsic.width.at_least() {
                    let reserved = child.style.padding.horizontal() + i64::from(floor);
                    if reserved as f64 > quantum * child.style.flex {
                        trace!(child = child.id.index(), reserved, "minimum exceeds flex share");
                        flex_total -= child.style.flex;
                        min_flex -= reserved;
                    }
                }
            }
            quantum = if flex_total > 0.0 {
                (min_flex + remaining_width) as f64 / flex_total
            } else {
                0.0
            };
        }
        trace!(flex_total, quantum, remaining_width, "row flex quantum");

        // Pass 3: size flexible children.
        for child in &children {
            if child.style.width.is_some() || !child.style.is_flexible() {
                continue;
            }
            let padding = child.style.padding.horizontal();
            let fill_height = child.style.direction == Direction::Column;

            match child.intrinsic.width {
                Intrinsic::AtLeast(floor) => {
                    let floor = i64::from(floor);
                    let share = quantum * child.style.flex;
                    let allocation = ((padding + floor) as f64).max(share) as i64;
                    self.layout_node(tree, child.id, allocation, available_height, true, fill_height);
                    let (used, minimum) = widths(tree, child.id);
                    width += used - floor;
                    min_width += minimum - floor;
                }
                Intrinsic::Unset => {
                    let allocation = if quantum != 0.0 {
                        (quantum * child.style.flex) as i64
                    } else {
                        padding
                    };
                    self.layout_node(tree, child.id, allocation, available_height, true, fill_height);
                    let (used, minimum) = widths(tree, child.id);
                    width += used;
                    min_width += minimum;
                }
                // Sized in the first pass.
                Intrinsic::Fixed(_) => {}
            }
        }

        if use_all_width {
            width = width.max(available_width);
        }

        // Pass 4: horizontal placement, then vertical alignment.
        let rtl = style.text_direction == TextDirection::Rtl;
        let mut offset: i64 = 0;
        let mut height: i64 = 0;
        let mut min_height: i64 = 0;
        for child in &children {
            let padding = child.style.padding;
            let (used, _) = widths(tree, child.id);
            let (child_height, child_min_height) = heights(tree, child.id);
            let content_left = if rtl {
                offset += used + padding.right;
                let left = width - offset;
                offset += padding.left;
                left
            } else {
                offset += padding.left;
                let left = offset;
                offset += used + padding.right;
                left
            };
            tree[child.id].geometry.content_left = to_px(content_left);
            height = height.max(padding.top + child_height + padding.bottom);
            min_height = min_height.max(padding.top + child_min_height + padding.bottom);
        }

        if use_all_height {
            height = height.max(available_height);
        }

        for child in &children {
            let padding = child.style.padding;
            let (child_height, _) = heights(tree, child.id);
            let extra = height - (child_height + padding.vertical());
            let content_top = match style.alignment {
                Some(alignment) if alignment.is_row_end() => extra + padding.top,
                Some(Alignment::Center) => extra.div_euclid(2) + padding.top,
                _ => padding.top,
            };
            tree[child.id].geometry.content_top = to_px(content_top);
        }

        Extent {
            min_width,
            width,
            min_height,
            height,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn layout_column(
        &self,
        tree: &mut LayoutTree,
        id: NodeId,
        style: &BoxStyle,
        available_width: i64,
        available_height: i64,
        use_all_width: bool,
        use_all_height: bool,
    ) -> Extent {
        let children = self.children(tree, id);

        let mut flex_total = 0.0;
        let mut min_flex: i64 = 0;
        let mut height: i64 = 0;
        let mut min_height: i64 = 0;
        let mut remaining_height = available_height;

        // Pass 1: size everything that is not flex-deferred.
        for child in &children {
            let padding = child.style.padding.vertical();
            let fill_width = child.style.direction == Direction::Row;

            let (used, minimum) = if child.style.height.is_some() {
                self.layout_node(tree, child.id, available_width, remaining_height, fill_width, false);
                heights(tree, child.id)
            } else if let Some(floor) = child.intrinsic.height.at_least() {
                if child.style.is_flexible() {
                    let floor = i64::from(floor);
                    flex_total += child.style.flex;
                    min_flex += padding + floor;
                    (floor, floor)
                } else {
                    self.layout_node(tree, child.id, available_width, 0, fill_width, false);
                    heights(tree, child.id)
                }
            } else if child.intrinsic.height == Intrinsic::Unset && child.style.is_flexible() {
                flex_total += child.style.flex;
                height += padding;
                min_height += padding;
                continue;
            } else {
                self.layout_node(tree, child.id, available_width, remaining_height, fill_width, false);
                heights(tree, child.id)
            };

            height += padding + used;
            min_height += padding + minimum;
            remaining_height -= padding + used;
        }

        // Pass 2: the per-flex-unit share, with one overflow correction.
        let mut quantum = 0.0;
        if flex_total > 0.0 {
            quantum = (remaining_height + min_flex) as f64 / flex_total;
            for child in &children {
                if child.style.height.is_some() || !child.style.is_flexible() {
                    continue;
                }
                if let Some(floor) = child.intrinsic.height.at_least() {
                    let reserved = child.style.padding.vertical() + i64::from(floor);
                    if reserved as f64 > quantum * child.style.flex {
                        trace!(child = child.id.index(), reserved, "minimum exceeds flex share");
                        flex_total -= child.style.flex;
                        min_flex -= reserved;
                    }
                }
            }
            quantum = if flex_total > 0.0 {
                (min_flex + remaining_height) as f64 / flex_total
            } else {
                0.0
            };
        }
        trace!(flex_total, quantum, remaining_height, "column flex quantum");

        // Pass 3: size flexible children.
        for child in &children {
            if child.style.height.is_some() || !child.style.is_flexible() {
                continue;
            }
            let padding = child.style.padding.vertical();
            let fill_width = child.style.direction == Direction::Row;

            match child.intrinsic.height {
                Intrinsic::AtLeast(floor) => {
                    let floor = i64::from(floor);
                    let share = quantum * child.style.flex;
                    let allocation = ((padding + floor) as f64).max(share) as i64;
                    self.layout_node(tree, child.id, available_width, allocation, fill_width, true);
                    let (used, minimum) = heights(tree, child.id);
                    height += used - floor;
                    min_height += minimum - floor;
                }
                Intrinsic::Unset => {
                    let allocation = if quantum != 0.0 {
                        (quantum * child.style.flex) as i64
                    } else {
                        padding
                    };
                    self.layout_node(tree, child.id, available_width, allocation, fill_width, true);
                    let (used, minimum) = heights(tree, child.id);
                    height += used;
                    min_height += minimum;
                }
                Intrinsic::Fixed(_) => {}
            }
        }

        if use_all_height {
            height = height.max(available_height);
        }

        // Pass 4: vertical placement, then horizontal alignment.
        let mut offset: i64 = 0;
        let mut width: i64 = 0;
        let mut min_width: i64 = 0;
        for child in &children {
            let padding = child.style.padding;
            let (used, _) = heights(tree, child.id);
            let (child_width, child_min_width) = widths(tree, child.id);
            offset += padding.top;
            tree[child.id].geometry.content_top = to_px(offset);
            offset += used + padding.bottom;
            width = width.max(padding.left + child_width + padding.right);
            min_width = min_width.max(padding.left + child_min_width + padding.right);
        }

        if use_all_width {
            width = width.max(available_width);
        }

        for child in &children {
            let padding = child.style.padding;
            let (child_width, _) = widths(tree, child.id);
            let extra = width - (child_width + padding.horizontal());
            let content_left = match style.alignment {
                Some(alignment) if alignment.is_column_end() => extra + padding.left,
                Some(Alignment::Center) => extra.div_euclid(2) + padding.left,
                _ => padding.left,
            };
            tree[child.id].geometry.content_left = to_px(content_left);
        }

        Extent {
            min_width,
            width,
            min_height,
            height,
        }
    }
}

/// Space available to a node on one axis, and its minimum.
fn available(explicit: Option<i64>, intrinsic: Intrinsic, alloc: i64, padding: i64) -> (i64, i64) {
    match (explicit, intrinsic) {
        (Some(size), _) => (size, size),
        (None, Intrinsic::Fixed(size)) => (i64::from(size), i64::from(size)),
        (None, Intrinsic::AtLeast(floor)) => {
            let floor = i64::from(floor);
            ((alloc - padding).max(floor), floor)
        }
        (None, Intrinsic::Unset) => ((alloc - padding).max(0), 0),
    }
}

/// A laid-out node's content width and minimum content width.
fn widths(tree: &LayoutTree, id: NodeId) -> (i64, i64) {
    let geometry = &tree[id].geometry;
    (i64::from(geometry.content_width), i64::from(geometry.min_content_width))
}

fn heights(tree: &LayoutTree, id: NodeId) -> (i64, i64) {
    let geometry = &tree[id].geometry;
    (i64::from(geometry.content_height), i64::from(geometry.min_content_height))
}

/// Clamp an engine sum to the stored pixel range.
fn to_px(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use pack_core::Visibility;
    use proptest::prelude::*;

    fn leaf(tree: &mut LayoutTree, style: Pack, width: impl Into<Intrinsic>, height: impl Into<Intrinsic>) -> NodeId {
        tree.new_leaf(style, IntrinsicSize::new(width, height))
    }

    fn boxed(tree: &mut LayoutTree, style: Pack, children: &[NodeId]) -> NodeId {
        tree.with_children(style, children).unwrap()
    }

    fn column() -> Pack {
        Pack::new().with_direction(Direction::Column)
    }

    fn rtl_row() -> Pack {
        Pack::new().with_text_direction(TextDirection::Rtl)
    }

    /// Check a node's absolute content origin and content size.
    #[track_caller]
    fn assert_layout(tree: &LayoutTree, id: NodeId, origin: (i32, i32), content: (i32, i32)) {
        let bounds = tree.absolute_content_bounds(id);
        assert_eq!(
            bounds,
            Bounds::new(origin.0, origin.1, content.0, content.1),
            "layout of node {}",
            id.index()
        );
    }

    #[track_caller]
    fn assert_total(tree: &LayoutTree, root: NodeId, size: (i32, i32)) {
        let geometry = tree[root].geometry;
        assert_eq!((geometry.width(), geometry.height()), size);
    }

    struct Tutorial1 {
        tree: LayoutTree,
        app: NodeId,
        f_box: NodeId,
        f_input: NodeId,
        f_label: NodeId,
        c_box: NodeId,
        join_label: NodeId,
        c_input: NodeId,
        c_label: NodeId,
        button: NodeId,
    }

    fn tutorial_1() -> Tutorial1 {
        let mut tree = LayoutTree::new();
        let f_input = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding_left(160),
            Intrinsic::AtLeast(100),
            15,
        );
        let f_label = leaf(
            &mut tree,
            Pack::new().with_width(100).with_padding_left(10),
            Intrinsic::AtLeast(40),
            10,
        );
        let f_box = boxed(&mut tree, Pack::new().with_padding(&[5]), &[f_input, f_label]);

        let join_label = leaf(
            &mut tree,
            Pack::new().with_width(150).with_padding_right(10),
            Intrinsic::AtLeast(80),
            10,
        );
        let c_input = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(100), 15);
        let c_label = leaf(
            &mut tree,
            Pack::new().with_width(100).with_padding_left(10),
            Intrinsic::AtLeast(40),
            10,
        );
        let c_box = boxed(&mut tree, Pack::new().with_padding(&[5]), &[join_label, c_input, c_label]);

        let button = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding(&[15]),
            Intrinsic::AtLeast(120),
            30,
        );
        let app = boxed(&mut tree, column().with_padding_top(10), &[f_box, c_box, button]);

        Tutorial1 {
            tree,
            app,
            f_box,
            f_input,
            f_label,
            c_box,
            join_label,
            c_input,
            c_label,
            button,
        }
    }

    #[test]
    fn test_tutorial_1_minimum() {
        let mut t = tutorial_1();
        compute_layout(&mut t.tree, t.app, &Viewport::new(0, 0));

        assert_total(&t.tree, t.app, (380, 120));
        assert_layout(&t.tree, t.app, (0, 10), (380, 110));
        assert_layout(&t.tree, t.f_box, (5, 15), (370, 15));
        assert_layout(&t.tree, t.f_input, (165, 15), (100, 15));
        assert_layout(&t.tree, t.f_label, (275, 15), (100, 10));
        assert_layout(&t.tree, t.c_box, (5, 40), (370, 15));
        assert_layout(&t.tree, t.join_label, (5, 40), (150, 10));
        assert_layout(&t.tree, t.c_input, (165, 40), (100, 15));
        assert_layout(&t.tree, t.c_label, (275, 40), (100, 10));
        assert_layout(&t.tree, t.button, (15, 75), (120, 30));
    }

    #[test]
    fn test_tutorial_1_window() {
        let mut t = tutorial_1();
        compute_layout(&mut t.tree, t.app, &Viewport::new(640, 480));

        assert_total(&t.tree, t.app, (640, 480));
        assert_layout(&t.tree, t.app, (0, 10), (640, 470));
        assert_layout(&t.tree, t.f_box, (5, 15), (630, 15));
        assert_layout(&t.tree, t.f_input, (165, 15), (360, 15));
        assert_layout(&t.tree, t.f_label, (535, 15), (100, 10));
        assert_layout(&t.tree, t.c_box, (5, 40), (630, 15));
        assert_layout(&t.tree, t.join_label, (5, 40), (150, 10));
        assert_layout(&t.tree, t.c_input, (165, 40), (360, 15));
        assert_layout(&t.tree, t.c_label, (535, 40), (100, 10));
        assert_layout(&t.tree, t.button, (15, 75), (610, 30));

        // Minimums are independent of the viewport.
        let geometry = t.tree[t.app].geometry;
        assert_eq!((geometry.min_content_width, geometry.min_content_height), (380, 110));
    }

    #[test]
    fn test_tutorial_1_high_dpi() {
        let mut t = tutorial_1();
        compute_layout(&mut t.tree, t.app, &Viewport::new(640, 480).with_dpi(144.0));

        assert_layout(&t.tree, t.app, (0, 15), (640, 465));
        assert_layout(&t.tree, t.f_box, (7, 22), (626, 15));
        assert_layout(&t.tree, t.f_input, (247, 22), (221, 15));
        assert_layout(&t.tree, t.f_label, (483, 22), (150, 10));
        assert_layout(&t.tree, t.join_label, (7, 51), (225, 10));
        assert_layout(&t.tree, t.c_input, (247, 51), (221, 15));
        assert_layout(&t.tree, t.c_label, (483, 51), (150, 10));
        assert_layout(&t.tree, t.button, (22, 95), (596, 30));
    }

    #[test]
    fn test_tutorial_0() {
        let mut tree = LayoutTree::new();
        let button = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding(&[50]),
            Intrinsic::AtLeast(120),
            30,
        );
        let app = boxed(&mut tree, Pack::new(), &[button]);

        compute_layout(&mut tree, app, &Viewport::default());
        assert_total(&tree, app, (220, 130));
        assert_layout(&tree, button, (50, 50), (120, 30));

        compute_layout(&mut tree, app, &Viewport::new(640, 480));
        assert_total(&tree, app, (640, 480));
        assert_layout(&tree, button, (50, 50), (540, 30));
    }

    #[test]
    fn test_tutorial_3() {
        let mut tree = LayoutTree::new();
        let input = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding(&[5]),
            Intrinsic::AtLeast(100),
            15,
        );
        let button = leaf(
            &mut tree,
            Pack::new().with_width(50).with_padding(&[5]),
            Intrinsic::AtLeast(40),
            10,
        );
        let toolbar = boxed(&mut tree, Pack::new(), &[input, button]);
        let web = leaf(
            &mut tree,
            Pack::new().with_flex(1.0),
            Intrinsic::AtLeast(100),
            Intrinsic::AtLeast(100),
        );
        let app = boxed(&mut tree, column(), &[toolbar, web]);

        compute_layout(&mut tree, app, &Viewport::default());
        assert_total(&tree, app, (170, 125));
        assert_layout(&tree, toolbar, (0, 0), (170, 25));
        assert_layout(&tree, input, (5, 5), (100, 15));
        assert_layout(&tree, button, (115, 5), (50, 10));
        assert_layout(&tree, web, (0, 25), (100, 100));

        compute_layout(&mut tree, app, &Viewport::new(640, 480));
        assert_total(&tree, app, (640, 480));
        assert_layout(&tree, toolbar, (0, 0), (640, 25));
        assert_layout(&tree, input, (5, 5), (570, 15));
        assert_layout(&tree, button, (585, 5), (50, 10));
        assert_layout(&tree, web, (0, 25), (640, 455));
    }

    #[test]
    fn test_chat_window() {
        let mut tree = LayoutTree::new();
        let history = leaf(
            &mut tree,
            Pack::new().with_flex(1.0),
            Intrinsic::AtLeast(100),
            Intrinsic::AtLeast(100),
        );
        let input = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding(&[5]),
            Intrinsic::AtLeast(100),
            15,
        );
        let send = leaf(&mut tree, Pack::new().with_padding(&[5]), Intrinsic::AtLeast(40), 10);
        let input_box = boxed(&mut tree, Pack::new(), &[input, send]);
        let app = boxed(&mut tree, column(), &[history, input_box]);

        compute_layout(&mut tree, app, &Viewport::default());
        assert_total(&tree, app, (160, 125));
        assert_layout(&tree, history, (0, 0), (100, 100));
        assert_layout(&tree, input_box, (0, 100), (160, 25));
        assert_layout(&tree, input, (5, 105), (100, 15));
        assert_layout(&tree, send, (115, 105), (40, 10));

        compute_layout(&mut tree, app, &Viewport::new(640, 480));
        assert_layout(&tree, history, (0, 0), (640, 455));
        assert_layout(&tree, input_box, (0, 455), (640, 25));
        assert_layout(&tree, input, (5, 460), (580, 15));
        assert_layout(&tree, send, (595, 460), (40, 10));
    }

    fn rtl_pair(tree: &mut LayoutTree) -> (NodeId, NodeId, NodeId) {
        let a = leaf(
            tree,
            Pack::new().with_width(30).with_height(100).with_padding(&[0, 34, 0, 32]),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let b = leaf(
            tree,
            Pack::new().with_width(36).with_height(100).with_padding(&[0, 40, 0, 38]),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(tree, rtl_row(), &[a, b]);
        (root, a, b)
    }

    #[test]
    fn test_rtl_row() {
        let mut tree = LayoutTree::new();
        let (root, a, b) = rtl_pair(&mut tree);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (210, 100));
        assert_layout(&tree, a, (146, 0), (30, 100));
        assert_layout(&tree, b, (38, 0), (36, 100));

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_layout(&tree, a, (576, 0), (30, 100));
        assert_layout(&tree, b, (468, 0), (36, 100));

        compute_layout(&mut tree, root, &Viewport::new(640, 480).with_dpi(144.0));
        assert_layout(&tree, a, (544, 0), (45, 150));
        assert_layout(&tree, b, (382, 0), (54, 150));
    }

    #[test]
    fn test_rtl_does_not_affect_columns() {
        let mut tree = LayoutTree::new();
        let a = leaf(
            &mut tree,
            Pack::new().with_width(100).with_height(30).with_padding(&[32, 0, 34, 0]),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let b = leaf(
            &mut tree,
            Pack::new().with_width(100).with_height(36).with_padding(&[38, 0, 40, 0]),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(&mut tree, column().with_text_direction(TextDirection::Rtl), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, a, (0, 32), (100, 30));
        assert_layout(&tree, b, (0, 134), (100, 36));
    }

    fn aligned_rtl_row(tree: &mut LayoutTree, alignment: Alignment) -> (NodeId, NodeId, NodeId) {
        let a = leaf(tree, Pack::new().with_width(30).with_height(100), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(tree, Pack::new().with_width(30).with_height(30), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(tree, rtl_row().with_alignment(alignment), &[a, b]);
        (root, a, b)
    }

    #[test]
    fn test_rtl_row_align_top() {
        let mut tree = LayoutTree::new();
        let (root, a, b) = aligned_rtl_row(&mut tree, Alignment::Top);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (60, 100));
        assert_layout(&tree, a, (30, 0), (30, 100));
        assert_layout(&tree, b, (0, 0), (30, 30));

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_layout(&tree, a, (610, 0), (30, 100));
        assert_layout(&tree, b, (580, 0), (30, 30));
    }

    #[test]
    fn test_rtl_row_align_bottom() {
        let mut tree = LayoutTree::new();
        let (root, a, b) = aligned_rtl_row(&mut tree, Alignment::Bottom);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, a, (30, 0), (30, 100));
        assert_layout(&tree, b, (0, 70), (30, 30));

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_layout(&tree, a, (610, 380), (30, 100));
        assert_layout(&tree, b, (580, 450), (30, 30));
    }

    #[test]
    fn test_end_alignment_matches_bottom_in_rows() {
        let mut tree = LayoutTree::new();
        let (root, _, b) = aligned_rtl_row(&mut tree, Alignment::End);
        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, b, (0, 70), (30, 30));

        // Right is a column alignment; in a row it aligns to the top.
        let (root, _, b) = aligned_rtl_row(&mut tree, Alignment::Right);
        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, b, (0, 0), (30, 30));
    }

    #[test]
    fn test_column_align_left_high_dpi() {
        let mut tree = LayoutTree::new();
        let s = leaf(&mut tree, Pack::new().with_width(100).with_height(30), Intrinsic::Unset, Intrinsic::Unset);
        let w = leaf(&mut tree, Pack::new().with_width(30).with_height(30), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(
            &mut tree,
            column()
                .with_alignment(Alignment::Left)
                .with_text_direction(TextDirection::Rtl),
            &[s, w],
        );

        compute_layout(&mut tree, root, &Viewport::default().with_dpi(144.0));
        assert_layout(&tree, s, (0, 0), (150, 45));
        assert_layout(&tree, w, (0, 45), (45, 45));
    }

    #[test]
    fn test_flex_proportionality() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_flex(2.0), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new().with_width(300), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_eq!(tree[a].geometry.content_width, 200);
        assert_eq!(tree[b].geometry.content_width, 100);
        assert_eq!(tree[a].geometry.content_left, 0);
        assert_eq!(tree[b].geometry.content_left, 200);
    }

    #[test]
    fn test_flexible_minimum_is_a_floor() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(150), 10);
        let root = boxed(&mut tree, Pack::new(), &[a]);

        compute_layout(&mut tree, root, &Viewport::new(100, 100));
        assert_eq!(tree[a].geometry.content_width, 150);
        assert_eq!(tree[root].geometry.content_width, 150);
        assert!(tree[root].geometry.min_content_width >= 150);
    }

    #[test]
    fn test_center_alignment() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_width(10).with_height(40), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(
            &mut tree,
            Pack::new().with_alignment(Alignment::Center).with_height(100),
            &[a],
        );

        compute_layout(&mut tree, root, &Viewport::default());
        assert_eq!(tree[a].geometry.content_top, 30);
    }

    #[test]
    fn test_rtl_in_explicit_width_row() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_width(50).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(&mut tree, Pack::new().with_width(30).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, rtl_row().with_width(100), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_eq!(tree[a].geometry.content_left, 50);
        assert_eq!(tree[b].geometry.content_left, 20);
    }

    #[test]
    fn test_overflowing_flex_child_leaves_the_pool() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(200), 10);
        let b = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::Unset, Intrinsic::Unset);
        let c = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new(), &[a, b, c]);

        compute_layout(&mut tree, root, &Viewport::new(300, 50));
        assert_layout(&tree, a, (0, 0), (200, 10));
        assert_layout(&tree, b, (200, 0), (50, 50));
        assert_layout(&tree, c, (250, 0), (50, 50));

        let geometry = tree[root].geometry;
        assert_eq!((geometry.min_content_width, geometry.min_content_height), (200, 10));
    }

    #[test]
    fn test_flex_correction_is_single_pass() {
        // Removing `a` from the pool lowers the quantum below `b`'s minimum,
        // but `b` is not re-examined; the row overflows the viewport instead.
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(100), 10);
        let b = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(60), 10);
        let c = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new(), &[a, b, c]);

        compute_layout(&mut tree, root, &Viewport::new(200, 50));
        assert_eq!(tree[root].geometry.content_width, 210);
        assert_layout(&tree, a, (0, 0), (100, 10));
        assert_layout(&tree, b, (100, 0), (60, 10));
        assert_layout(&tree, c, (160, 0), (50, 50));
    }

    #[test]
    fn test_padded_flex_children() {
        let mut tree = LayoutTree::new();
        let a = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding_left(10).with_padding_right(10),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let b = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding_left(10).with_padding_right(10),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(&mut tree, Pack::new(), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (40, 0));
        assert_layout(&tree, a, (10, 0), (0, 0));
        assert_layout(&tree, b, (30, 0), (0, 0));

        compute_layout(&mut tree, root, &Viewport::new(300, 50));
        assert_layout(&tree, a, (10, 0), (130, 50));
        assert_layout(&tree, b, (160, 0), (130, 50));
    }

    #[test]
    fn test_column_flex() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_height(50), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(&mut tree, Pack::new().with_flex(3.0), Intrinsic::Unset, Intrinsic::Unset);
        let d = leaf(
            &mut tree,
            Pack::new().with_flex(1.0).with_padding(&[5, 0]),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(&mut tree, column(), &[a, b, d]);

        compute_layout(&mut tree, root, &Viewport::new(100, 250));
        assert_layout(&tree, a, (0, 0), (100, 50));
        assert_layout(&tree, b, (0, 50), (100, 150));
        assert_layout(&tree, d, (0, 205), (100, 40));

        let geometry = tree[root].geometry;
        assert_eq!((geometry.min_content_width, geometry.min_content_height), (0, 60));
    }

    #[test]
    fn test_column_cross_alignment() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_width(100).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(
            &mut tree,
            Pack::new().with_width(31).with_height(10).with_padding_right(2).with_padding_left(3),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(&mut tree, column().with_alignment(Alignment::Center), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (100, 20));
        assert_layout(&tree, b, (35, 10), (31, 10));

        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_width(100).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let b = leaf(&mut tree, Pack::new().with_width(30).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, column().with_alignment(Alignment::Right), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, a, (0, 0), (100, 10));
        assert_layout(&tree, b, (70, 10), (30, 10));

        compute_layout(&mut tree, root, &Viewport::new(200, 100));
        assert_layout(&tree, a, (100, 0), (100, 10));
        assert_layout(&tree, b, (170, 10), (30, 10));
    }

    #[test]
    fn test_explicit_root_size_wins() {
        let mut tree = LayoutTree::new();
        let child = leaf(&mut tree, Pack::new().with_width(80).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new().with_width(50).with_height(20), &[child]);

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_layout(&tree, root, (0, 0), (50, 20));
        assert_layout(&tree, child, (0, 0), (80, 10));
        let geometry = tree[root].geometry;
        assert_eq!((geometry.min_content_width, geometry.min_content_height), (50, 20));
    }

    #[test]
    fn test_fixed_intrinsic_never_stretches() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new(), 40, 10);
        let b = leaf(&mut tree, Pack::new().with_flex(1.0), 30, 12);
        let c = leaf(&mut tree, Pack::new(), Intrinsic::AtLeast(20), Intrinsic::AtLeast(5));
        let root = boxed(&mut tree, Pack::new(), &[a, b, c]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (90, 12));
        assert_layout(&tree, a, (0, 0), (40, 10));
        assert_layout(&tree, b, (40, 0), (30, 12));
        assert_layout(&tree, c, (70, 0), (20, 5));

        compute_layout(&mut tree, root, &Viewport::new(200, 100));
        assert_layout(&tree, a, (0, 0), (40, 10));
        assert_layout(&tree, b, (40, 0), (30, 12));
        assert_layout(&tree, c, (70, 0), (20, 100));
    }

    #[test]
    fn test_column_inside_row_fills_height() {
        let mut tree = LayoutTree::new();
        let x = leaf(&mut tree, Pack::new().with_width(20).with_height(10), Intrinsic::Unset, Intrinsic::Unset);
        let col = boxed(&mut tree, column(), &[x]);
        let y = leaf(&mut tree, Pack::new().with_width(10).with_height(40), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new(), &[col, y]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (30, 40));
        assert_layout(&tree, col, (0, 0), (20, 10));
        assert_layout(&tree, y, (20, 0), (10, 40));
    }

    #[test]
    fn test_rtl_with_padding_and_flex() {
        let mut tree = LayoutTree::new();
        let a = leaf(
            &mut tree,
            Pack::new().with_width(50).with_height(10).with_padding_left(5).with_padding_right(2),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let b = leaf(&mut tree, Pack::new().with_flex(1.0), Intrinsic::AtLeast(30), 10);
        let root = boxed(&mut tree, rtl_row(), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_total(&tree, root, (87, 10));
        assert_layout(&tree, a, (35, 0), (50, 10));
        assert_layout(&tree, b, (0, 0), (30, 10));

        compute_layout(&mut tree, root, &Viewport::new(200, 20));
        assert_layout(&tree, a, (148, 0), (50, 10));
        assert_layout(&tree, b, (0, 0), (143, 10));
    }

    #[test]
    fn test_hidden_nodes_keep_their_space() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_visibility(Visibility::Hidden), 40, 10);
        let b = leaf(&mut tree, Pack::new(), 30, 10);
        let root = boxed(&mut tree, Pack::new(), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::default());
        assert_layout(&tree, b, (40, 0), (30, 10));
    }

    #[test]
    fn test_degenerate_space_clamps_to_zero() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_padding(&[50]), Intrinsic::Unset, Intrinsic::Unset);
        let root = boxed(&mut tree, Pack::new().with_padding(&[20]), &[a]);

        compute_layout(&mut tree, root, &Viewport::new(30, 30));
        let geometry = tree[a].geometry;
        assert_eq!((geometry.content_width, geometry.content_height), (0, 0));
        assert_eq!(geometry.content_left, 50);
    }

    #[test]
    fn test_root_offsets_are_its_padding() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new(), 10, 10);
        let root = boxed(&mut tree, Pack::new().with_padding(&[1, 2, 3, 4]), &[a]);

        compute_layout(&mut tree, root, &Viewport::default());
        let geometry = tree[root].geometry;
        assert_eq!(
            (geometry.content_top, geometry.content_right, geometry.content_bottom, geometry.content_left),
            (1, 2, 3, 4)
        );
        assert_total(&tree, root, (16, 14));
    }

    #[test]
    fn test_huge_explicit_widths_saturate() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree, Pack::new().with_width(2_000_000_000), Intrinsic::Unset, 10);
        let b = leaf(&mut tree, Pack::new().with_width(2_000_000_000), Intrinsic::Unset, 10);
        let root = boxed(&mut tree, Pack::new(), &[a, b]);

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_eq!(tree[a].geometry.content_width, 2_000_000_000);
        assert_eq!(tree[b].geometry.content_width, 2_000_000_000);
        assert_eq!(tree[b].geometry.content_left, 2_000_000_000);

        let geometry = tree[root].geometry;
        assert_eq!(geometry.content_width, i32::MAX);
        assert_eq!(geometry.min_content_width, i32::MAX);
        assert_eq!(geometry.width(), i32::MAX);
    }

    #[test]
    fn test_huge_padding_saturates() {
        let mut tree = LayoutTree::new();
        let a = leaf(
            &mut tree,
            Pack::new().with_padding_left(i32::MAX).with_padding_right(1),
            Intrinsic::Unset,
            Intrinsic::Unset,
        );
        let root = boxed(&mut tree, Pack::new(), &[a]);

        compute_layout(&mut tree, root, &Viewport::new(640, 480));
        assert_eq!(tree[a].geometry.content_width, 0);
        assert_eq!(tree[a].geometry.content_left, i32::MAX);
        assert_eq!(tree[root].geometry.content_width, i32::MAX);
        assert_eq!(tree[root].geometry.width(), i32::MAX);
    }

    // ----------------------------------------------------------------
    // Properties over random trees
    // ----------------------------------------------------------------

    #[derive(Debug, Clone)]
    struct StyleShape {
        direction: Direction,
        width: Option<i32>,
        height: Option<i32>,
        flex: f64,
        padding: [i32; 4],
        alignment: Option<Alignment>,
        rtl: bool,
    }

    impl StyleShape {
        fn to_pack(&self) -> Pack {
            let mut style = Pack::new()
                .with_direction(self.direction)
                .with_flex(self.flex)
                .with_padding(&self.padding);
            if let Some(width) = self.width {
                style = style.with_width(width);
            }
            if let Some(height) = self.height {
                style = style.with_height(height);
            }
            if let Some(alignment) = self.alignment {
                style = style.with_alignment(alignment);
            }
            if self.rtl {
                style = style.with_text_direction(TextDirection::Rtl);
            }
            style
        }
    }

    #[derive(Debug, Clone)]
    enum NodeShape {
        Leaf(StyleShape, IntrinsicSize),
        Container(StyleShape, Vec<NodeShape>),
    }

    fn style_strategy() -> impl Strategy<Value = StyleShape> {
        (
            prop_oneof![Just(Direction::Row), Just(Direction::Column)],
            prop::option::weighted(0.3, 0..200i32),
            prop::option::weighted(0.3, 0..200i32),
            prop_oneof![Just(0.0), Just(0.0), Just(1.0), Just(2.0), Just(3.0)],
            prop::array::uniform4(0..20i32),
            prop::option::of(prop::sample::select(Alignment::KEYWORDS)),
            prop::bool::weighted(0.3),
        )
            .prop_map(|(direction, width, height, flex, padding, alignment, rtl)| StyleShape {
                direction,
                width,
                height,
                flex,
                padding,
                alignment: alignment.and_then(|keyword| keyword.parse().ok()),
                rtl,
            })
    }

    fn intrinsic_strategy() -> impl Strategy<Value = Intrinsic> {
        prop_oneof![
            Just(Intrinsic::Unset),
            (0..150i32).prop_map(Intrinsic::Fixed),
            (0..150i32).prop_map(Intrinsic::AtLeast),
        ]
    }

    fn node_strategy() -> impl Strategy<Value = NodeShape> {
        let leaf = (style_strategy(), intrinsic_strategy(), intrinsic_strategy())
            .prop_map(|(style, width, height)| NodeShape::Leaf(style, IntrinsicSize { width, height }));
        leaf.prop_recursive(3, 40, 4, |inner| {
            (style_strategy(), prop::collection::vec(inner, 1..4))
                .prop_map(|(style, children)| NodeShape::Container(style, children))
        })
    }

    fn build(tree: &mut LayoutTree, shape: &NodeShape) -> NodeId {
        match shape {
            NodeShape::Leaf(style, intrinsic) => tree.new_leaf(style.to_pack(), *intrinsic),
            NodeShape::Container(style, children) => {
                let ids: Vec<NodeId> = children.iter().map(|child| build(tree, child)).collect();
                tree.with_children(style.to_pack(), &ids).unwrap()
            }
        }
    }

    proptest! {
        #[test]
        fn prop_layout_is_deterministic(shape in node_strategy(), width in 0..800i32, height in 0..600i32) {
            let mut tree = LayoutTree::new();
            let root = build(&mut tree, &shape);
            let viewport = Viewport::new(width, height);

            compute_layout(&mut tree, root, &viewport);
            let first: Vec<_> = tree.nodes().map(|node| node.geometry).collect();
            compute_layout(&mut tree, root, &viewport);
            let second: Vec<_> = tree.nodes().map(|node| node.geometry).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_explicit_sizes_are_authoritative(shape in node_strategy(), width in 0..800i32, height in 0..600i32) {
            let mut tree = LayoutTree::new();
            let root = build(&mut tree, &shape);
            compute_layout(&mut tree, root, &Viewport::new(width, height));

            for node in tree.nodes() {
                if let Some(explicit) = node.style.width() {
                    prop_assert_eq!(node.geometry.content_width, explicit);
                    prop_assert_eq!(node.geometry.min_content_width, explicit);
                }
                if let Some(explicit) = node.style.height() {
                    prop_assert_eq!(node.geometry.content_height, explicit);
                    prop_assert_eq!(node.geometry.min_content_height, explicit);
                }
            }
        }

        #[test]
        fn prop_content_is_at_least_minimum(shape in node_strategy(), width in 0..800i32, height in 0..600i32) {
            let mut tree = LayoutTree::new();
            let root = build(&mut tree, &shape);
            compute_layout(&mut tree, root, &Viewport::new(width, height));

            for node in tree.nodes() {
                prop_assert!(node.geometry.content_width >= node.geometry.min_content_width);
                prop_assert!(node.geometry.content_height >= node.geometry.min_content_height);
            }
        }

        #[test]
        fn prop_children_fit_along_main_axis(shape in node_strategy(), width in 0..800i32, height in 0..600i32) {
            let mut tree = LayoutTree::new();
            let root = build(&mut tree, &shape);
            compute_layout(&mut tree, root, &Viewport::new(width, height));

            for node in tree.nodes() {
                let children = node.children();
                if children.is_empty() {
                    continue;
                }
                match node.style.direction() {
                    Direction::Row if node.style.width().is_none() => {
                        let used: i32 = children
                            .iter()
                            .map(|&id| {
                                let child = &tree[id];
                                child.style.padding_left() + child.geometry.content_width + child.style.padding_right()
                            })
                            .sum();
                        prop_assert!(used <= node.geometry.content_width);
                    }
                    Direction::Column if node.style.height().is_none() => {
                        let used: i32 = children
                            .iter()
                            .map(|&id| {
                                let child = &tree[id];
                                child.style.padding_top() + child.geometry.content_height + child.style.padding_bottom()
                            })
                            .sum();
                        prop_assert!(used <= node.geometry.content_height);
                    }
                    _ => {}
                }
            }
        }
    }
}
