//! Drawing surfaces and the leaf-scoped [`Pane`] handed to painters.
//!
//! A [`Surface`] works in absolute screen cells. A [`Pane`] works in coordinates relative to
//! its leaf rectangle, translates them, and clips every write to that rectangle before it
//! reaches the surface.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

/// The shared drawing surface a render pass writes into.
pub trait Surface {
    /// Full area of the surface.
    fn bounds(&self) -> Rect;

    /// Reset every cell of `area` to blank.
    fn clear(&mut self, area: Rect);

    /// Write `text` starting at absolute cell (`x`, `y`), using at most `max_width` columns.
    fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style);

    /// Mark `area` as ready to be shown. Surfaces that flush per frame can ignore this.
    fn present(&mut self, _area: Rect) {}
}

/// ratatui's frame buffer is the surface the terminal host renders into. Writes outside the
/// buffer are dropped rather than indexing past its cells.
impl Surface for Buffer {
    fn bounds(&self) -> Rect {
        self.area
    }

    fn clear(&mut self, area: Rect) {
        let area = area.intersection(self.area);
        if area.is_empty() {
            return;
        }
        Clear.render(area, self);
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str, max_width: u16, style: Style) {
        let area = self.area;
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            return;
        }
        let max_width = max_width.min(area.right() - x);
        self.set_stringn(x, y, text, usize::from(max_width), style);
    }
}

/// Drawing handle scoped to one leaf.
pub struct Pane<'a> {
    surface: &'a mut dyn Surface,
    area: Rect,
}

impl<'a> Pane<'a> {
    pub fn new(surface: &'a mut dyn Surface, area: Rect) -> Self {
        Self { surface, area }
    }

    /// Absolute rectangle of this pane on the surface.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    /// Write unstyled text at pane-relative (`row`, `col`).
    pub fn write(&mut self, row: u16, col: u16, text: &str) {
        self.write_styled(row, col, text, Style::default());
    }

    /// Write text at pane-relative (`row`, `col`). Anything past the pane edge is clipped.
    pub fn write_styled(&mut self, row: u16, col: u16, text: &str, style: Style) {
        if row >= self.area.height || col >= self.area.width {
            return;
        }
        let (x, y) = (self.area.x + col, self.area.y + row);
        let visible = self.area.intersection(self.surface.bounds());
        if x < visible.left() || x >= visible.right() || y < visible.top() || y >= visible.bottom()
        {
            return;
        }
        self.surface.put_str(x, y, text, visible.right() - x, style);
    }

    /// Blank the whole pane.
    pub fn clear(&mut self) {
        self.surface.clear(self.area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (buffer.area.left()..buffer.area.right())
            .map(|x| buffer.get(x, y).symbol())
            .collect()
    }

    #[test]
    fn pane_translates_relative_coordinates() {
        let mut buffer = Buffer::empty(rect(0, 0, 10, 3));
        {
            let mut pane = Pane::new(&mut buffer, rect(4, 1, 6, 2));
            pane.write(1, 1, "hi");
        }
        assert_eq!(row_text(&buffer, 2), "     hi   ");
        assert_eq!(row_text(&buffer, 1), "          ");
    }

    #[test]
    fn pane_clips_at_right_edge() {
        let mut buffer = Buffer::empty(rect(0, 0, 10, 1));
        {
            let mut pane = Pane::new(&mut buffer, rect(0, 0, 4, 1));
            pane.write(0, 2, "overflow");
        }
        assert_eq!(row_text(&buffer, 0), "  ov      ");
    }

    #[test]
    fn pane_drops_rows_and_columns_outside() {
        let mut buffer = Buffer::empty(rect(0, 0, 6, 3));
        {
            let mut pane = Pane::new(&mut buffer, rect(0, 0, 3, 1));
            pane.write(1, 0, "below");
            pane.write(0, 3, "right");
        }
        for y in 0..3 {
            assert_eq!(row_text(&buffer, y), "      ");
        }
    }

    #[test]
    fn clear_resets_only_the_pane() {
        let mut buffer = Buffer::empty(rect(0, 0, 4, 1));
        buffer.set_string(0, 0, "abcd", Style::default());
        Pane::new(&mut buffer, rect(1, 0, 2, 1)).clear();
        assert_eq!(row_text(&buffer, 0), "a  d");
    }

    #[test]
    fn styled_writes_keep_style() {
        let mut buffer = Buffer::empty(rect(0, 0, 3, 1));
        let style = Style::default().fg(Color::White).bg(Color::Green);
        Pane::new(&mut buffer, rect(0, 0, 3, 1)).write_styled(0, 0, "x", style);
        assert_eq!(buffer.get(0, 0).fg, Color::White);
        assert_eq!(buffer.get(0, 0).bg, Color::Green);
    }

    /// Surface smaller than the panes drawn on it, recording what reaches it.
    struct Recorder {
        area: Rect,
        writes: Vec<(u16, u16, u16)>,
    }

    impl Surface for Recorder {
        fn bounds(&self) -> Rect {
            self.area
        }

        fn clear(&mut self, _area: Rect) {}

        fn put_str(&mut self, x: u16, y: u16, _text: &str, max_width: u16, _style: Style) {
            self.writes.push((x, y, max_width));
        }
    }

    #[test]
    fn pane_is_clipped_to_surface_bounds() {
        let mut surface = Recorder {
            area: rect(0, 0, 6, 2),
            writes: Vec::new(),
        };
        {
            let mut pane = Pane::new(&mut surface, rect(2, 1, 10, 4));
            pane.write(0, 0, "inside");
            pane.write(0, 5, "past right edge");
            pane.write(1, 0, "below");
        }
        assert_eq!(surface.writes, vec![(2, 1, 4)]);
    }

    #[test]
    fn buffer_ignores_writes_outside_its_area() {
        let mut buffer = Buffer::empty(rect(0, 0, 2, 2));
        buffer.put_str(5, 5, "far", 3, Style::default());
        buffer.clear(rect(10, 10, 4, 4));
        assert_eq!(row_text(&buffer, 0), "  ");
    }
}
