//! Painter capability attached to leaf regions.

use crate::input::InputEvent;
use crate::render::surface::Pane;

/// Outcome of one paint call. Painters are external code, so failures are opaque.
pub type PaintResult = anyhow::Result<()>;

/// Draws the content of one leaf given the latest input event.
pub trait Painter: Send {
    fn paint(&mut self, pane: &mut Pane<'_>, event: &InputEvent) -> PaintResult;
}

struct FnPainter<F>(F);

impl<F> Painter for FnPainter<F>
where
    F: FnMut(&mut Pane<'_>, &InputEvent) -> PaintResult + Send,
{
    fn paint(&mut self, pane: &mut Pane<'_>, event: &InputEvent) -> PaintResult {
        (self.0)(pane, event)
    }
}

/// Box a closure as a painter.
pub fn painter<F>(paint: F) -> Box<dyn Painter>
where
    F: FnMut(&mut Pane<'_>, &InputEvent) -> PaintResult + Send + 'static,
{
    Box::new(FnPainter(paint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::crossterm::event::KeyCode;
    use ratatui::layout::Rect;

    #[test]
    fn closure_painters_receive_pane_and_event() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 1,
        };
        let mut buffer = Buffer::empty(area);
        let mut echo = painter(|pane, event| {
            if let Some(KeyCode::Char(ch)) = event.code() {
                pane.write(0, 0, &ch.to_string());
            }
            Ok(())
        });

        let mut pane = Pane::new(&mut buffer, area);
        echo.paint(&mut pane, &InputEvent::key(KeyCode::Char('z')))
            .unwrap();
        assert_eq!(buffer.get(0, 0).symbol(), "z");
    }
}
