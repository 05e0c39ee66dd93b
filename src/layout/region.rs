//! The region layout tree.
//!
//! A [`Region`] owns a rectangle and is either a leaf carrying an optional painter, or a split
//! node owning exactly two children. Splitting is one-way and happens at most once per node.
//! Children carry no link back to their parent; everything flows downward from the root.

use crate::error::{Result, SplitpaneError};
use crate::layout::split::{plan_split, SplitAxis};
use crate::render::Painter;
use ratatui::layout::Rect;
use std::fmt;

/// A request to partition a leaf.
pub struct SplitSpec {
    pub axis: SplitAxis,
    /// Lines (stacked) or columns (side by side) for the first child. `None` splits in half.
    pub primary: Option<u16>,
    pub first: Option<Box<dyn Painter>>,
    pub second: Option<Box<dyn Painter>>,
}

impl SplitSpec {
    /// Halve along `axis` with two blank leaves.
    pub fn new(axis: SplitAxis) -> Self {
        Self {
            axis,
            primary: None,
            first: None,
            second: None,
        }
    }

    pub fn stacked() -> Self {
        Self::new(SplitAxis::Stacked)
    }

    pub fn side_by_side() -> Self {
        Self::new(SplitAxis::SideBySide)
    }

    /// Give the first child exactly `cells` along the split axis.
    pub fn primary(mut self, cells: u16) -> Self {
        self.primary = Some(cells);
        self
    }

    pub fn painters(mut self, first: Box<dyn Painter>, second: Box<dyn Painter>) -> Self {
        self.first = Some(first);
        self.second = Some(second);
        self
    }

    pub fn first_painter(mut self, painter: Box<dyn Painter>) -> Self {
        self.first = Some(painter);
        self
    }

    pub fn second_painter(mut self, painter: Box<dyn Painter>) -> Self {
        self.second = Some(painter);
        self
    }
}

impl fmt::Debug for SplitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitSpec")
            .field("axis", &self.axis)
            .field("primary", &self.primary)
            .field("first", &self.first.is_some())
            .field("second", &self.second.is_some())
            .finish()
    }
}

pub(crate) enum Content {
    Leaf(Option<Box<dyn Painter>>),
    Split {
        axis: SplitAxis,
        children: Box<[Region; 2]>,
    },
}

/// A node of the layout tree.
pub struct Region {
    bounds: Rect,
    content: Content,
}

impl Region {
    /// A blank leaf covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            content: Content::Leaf(None),
        }
    }

    pub fn with_painter(bounds: Rect, painter: Box<dyn Painter>) -> Self {
        Self {
            bounds,
            content: Content::Leaf(Some(painter)),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    pub fn has_painter(&self) -> bool {
        matches!(self.content, Content::Leaf(Some(_)))
    }

    /// Axis of the split, or `None` for a leaf.
    pub fn axis(&self) -> Option<SplitAxis> {
        match &self.content {
            Content::Leaf(_) => None,
            Content::Split { axis, .. } => Some(*axis),
        }
    }

    /// Children in render order; empty for a leaf.
    pub fn children(&self) -> &[Region] {
        match &self.content {
            Content::Leaf(_) => &[],
            Content::Split { children, .. } => &children[..],
        }
    }

    /// Mutable access to the first (`0`) or second (`1`) child.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Region> {
        match &mut self.content {
            Content::Leaf(_) => None,
            Content::Split { children, .. } => children.get_mut(index),
        }
    }

    /// Partition this leaf into two new leaves and return them as `(first, second)`.
    ///
    /// Fails without touching the tree when the node is already split or the requested
    /// override does not fit.
    pub fn split(&mut self, spec: SplitSpec) -> Result<(&mut Region, &mut Region)> {
        if !self.is_leaf() {
            return Err(SplitpaneError::AlreadySplit {
                bounds: self.bounds,
            });
        }
        let (first_bounds, second_bounds) = plan_split(self.bounds, spec.axis, spec.primary)?;
        log::debug!(
            "split {} {:?} into {} and {}",
            self.bounds,
            spec.axis,
            first_bounds,
            second_bounds
        );

        self.content = Content::Split {
            axis: spec.axis,
            children: Box::new([
                Region {
                    bounds: first_bounds,
                    content: Content::Leaf(spec.first),
                },
                Region {
                    bounds: second_bounds,
                    content: Content::Leaf(spec.second),
                },
            ]),
        };

        match &mut self.content {
            Content::Split { children, .. } => {
                let [first, second] = &mut **children;
                Ok((first, second))
            }
            Content::Leaf(_) => unreachable!("content was replaced by a split above"),
        }
    }

    /// Attach or replace the painter of a leaf.
    pub fn set_painter(&mut self, painter: Box<dyn Painter>) -> Result<()> {
        match &mut self.content {
            Content::Leaf(slot) => {
                *slot = Some(painter);
                Ok(())
            }
            Content::Split { .. } => Err(SplitpaneError::AlreadySplit {
                bounds: self.bounds,
            }),
        }
    }

    /// Detach the painter of a leaf, leaving it blank.
    pub fn take_painter(&mut self) -> Option<Box<dyn Painter>> {
        match &mut self.content {
            Content::Leaf(slot) => slot.take(),
            Content::Split { .. } => None,
        }
    }

    /// Number of split levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        match &self.content {
            Content::Leaf(_) => 1,
            Content::Split { children, .. } => children.iter().map(Region::leaf_count).sum(),
        }
    }

    /// Bounds of every leaf in render order.
    pub fn leaf_bounds(&self) -> Vec<Rect> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaf_bounds(&mut out);
        out
    }

    fn collect_leaf_bounds(&self, out: &mut Vec<Rect>) {
        match &self.content {
            Content::Leaf(_) => out.push(self.bounds),
            Content::Split { children, .. } => {
                for child in children.iter() {
                    child.collect_leaf_bounds(out);
                }
            }
        }
    }

    pub(crate) fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Content::Leaf(painter) => f
                .debug_struct("Leaf")
                .field("bounds", &self.bounds)
                .field("painter", &painter.is_some())
                .finish(),
            Content::Split { axis, children } => f
                .debug_struct("Split")
                .field("bounds", &self.bounds)
                .field("axis", axis)
                .field("children", &&children[..])
                .finish(),
        }
    }
}
