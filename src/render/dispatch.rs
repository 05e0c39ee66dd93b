//! Recursive render dispatch over the region tree.
//!
//! Split nodes render their children first-then-second with the same event. Leaves are
//! cleared, painted through a [`Pane`] clipped to their rectangle, and presented. Everything
//! runs on the caller's thread, so each leaf's clear/paint/present sequence completes before
//! the next leaf starts.

use crate::error::SplitpaneError;
use crate::input::InputEvent;
use crate::layout::region::{Content, Region};
use crate::render::painter::Painter;
use crate::render::panic_hook::painting;
use crate::render::surface::{Pane, Surface};
use ratatui::layout::Rect;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Summary of one render pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Leaves visited, blank ones included.
    pub leaves: usize,
    /// Painters invoked.
    pub painted: usize,
    /// Painters that returned an error or panicked.
    pub failures: usize,
}

/// Render `region` and all of its descendants onto `surface`.
pub fn render(region: &mut Region, surface: &mut dyn Surface, event: &InputEvent) -> RenderReport {
    let mut report = RenderReport::default();
    render_node(region, surface, event, &mut report);
    report
}

fn render_node(
    region: &mut Region,
    surface: &mut dyn Surface,
    event: &InputEvent,
    report: &mut RenderReport,
) {
    let bounds = region.bounds();
    match region.content_mut() {
        Content::Split { children, .. } => {
            for child in children.iter_mut() {
                render_node(child, surface, event, report);
            }
        }
        Content::Leaf(slot) => render_leaf(bounds, slot, surface, event, report),
    }
}

fn render_leaf(
    bounds: Rect,
    slot: &mut Option<Box<dyn Painter>>,
    surface: &mut dyn Surface,
    event: &InputEvent,
    report: &mut RenderReport,
) {
    report.leaves += 1;
    surface.clear(bounds);

    if let Some(painter) = slot.as_mut() {
        report.painted += 1;
        let outcome = {
            let mut pane = Pane::new(&mut *surface, bounds);
            panic::catch_unwind(AssertUnwindSafe(|| {
                painting(|| painter.paint(&mut pane, event))
            }))
        };
        let failure = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(format!("{err:#}")),
            Err(payload) => Some(panic_message(payload.as_ref())),
        };
        if let Some(message) = failure {
            report.failures += 1;
            log::warn!("{}", SplitpaneError::painter(bounds, message));
            // Whatever the painter managed to draw before failing is discarded.
            surface.clear(bounds);
        }
    }

    surface.present(bounds);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
