//! Split planning: pure geometry that partitions one rectangle into two.
//!
//! Both children share the parent's extent on the secondary axis. Along the split axis the
//! first child takes `primary` cells and the second takes whatever remains, so the pair always
//! tiles the parent exactly. When no override is given `primary` is `floor(extent / 2)`, which
//! leaves `ceil(extent / 2)` for the second child instead of dropping the odd row or column.

use crate::error::{Result, SplitpaneError};
use ratatui::layout::Rect;

/// Axis along which a region is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitAxis {
    /// Row-wise: first child on top, second below. The override counts lines.
    Stacked,
    /// Column-wise: first child on the left, second to the right. The override counts columns.
    SideBySide,
}

impl SplitAxis {
    /// Extent of `rect` along this axis.
    pub fn extent(self, rect: Rect) -> u16 {
        match self {
            SplitAxis::Stacked => rect.height,
            SplitAxis::SideBySide => rect.width,
        }
    }
}

/// Compute the two child rectangles for a split of `parent`.
///
/// A `primary` of `None` or `Some(0)` splits in half. An override larger than the extent is
/// rejected; an override equal to the extent yields an empty second child.
pub fn plan_split(parent: Rect, axis: SplitAxis, primary: Option<u16>) -> Result<(Rect, Rect)> {
    let extent = axis.extent(parent);
    let primary = match primary {
        Some(requested) if requested > 0 => {
            if requested > extent {
                return Err(SplitpaneError::invalid_split(format!(
                    "requested {requested} cells but {parent} only has {extent} along {axis:?}"
                )));
            }
            requested
        }
        _ => extent / 2,
    };
    let remainder = extent - primary;

    let pair = match axis {
        SplitAxis::Stacked => (
            Rect {
                height: primary,
                ..parent
            },
            Rect {
                y: parent.y.saturating_add(primary),
                height: remainder,
                ..parent
            },
        ),
        SplitAxis::SideBySide => (
            Rect {
                width: primary,
                ..parent
            },
            Rect {
                x: parent.x.saturating_add(primary),
                width: remainder,
                ..parent
            },
        ),
    };
    Ok(pair)
}
