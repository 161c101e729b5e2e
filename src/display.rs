use crate::game::{Cell, Grid};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    DefaultTerminal,
};
use std::io;

/// Something that a game frame can be drawn on
pub(crate) trait Display {
    /// Blank out the whole drawing area
    fn clear(&mut self);

    /// Put `glyph` at `cell`.  Cells outside the drawing area are ignored.
    fn draw_cell(&mut self, cell: Cell, glyph: char);

    /// Write `text` starting at `cell`, truncated at the right edge
    fn draw_text(&mut self, cell: Cell, text: &str);

    /// Make everything drawn since the last `clear()` visible
    fn present(&mut self) -> io::Result<()>;
}

/// A bare [`Buffer`] can be drawn on; presenting it is a no-op.
impl Display for Buffer {
    fn clear(&mut self) {
        self.reset();
    }

    fn draw_cell(&mut self, cell: Cell, glyph: char) {
        if let Some(c) = self.cell_mut(Position::new(cell.col, cell.row)) {
            c.set_char(glyph);
        }
    }

    fn draw_text(&mut self, cell: Cell, text: &str) {
        let pos = Position::new(cell.col, cell.row);
        if self.area.contains(pos) {
            let room = usize::from(self.area.right() - pos.x);
            let _ = self.set_stringn(pos.x, pos.y, text, room, Style::new());
        }
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Draws game frames on the terminal.  Frames are composed in an off-screen
/// canvas the size of the grid and copied to the terminal on `present()`.
#[derive(Debug)]
pub(crate) struct TerminalDisplay {
    terminal: DefaultTerminal,
    canvas: Buffer,
}

impl TerminalDisplay {
    pub(crate) fn new(terminal: DefaultTerminal, grid: Grid) -> TerminalDisplay {
        TerminalDisplay {
            terminal,
            canvas: Buffer::empty(Rect::new(0, 0, grid.width(), grid.height())),
        }
    }
}

impl Display for TerminalDisplay {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_cell(&mut self, cell: Cell, glyph: char) {
        self.canvas.draw_cell(cell, glyph);
    }

    fn draw_text(&mut self, cell: Cell, text: &str) {
        self.canvas.draw_text(cell, text);
    }

    fn present(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let area = frame.area().intersection(canvas.area);
            let buf = frame.buffer_mut();
            for pos in area.positions() {
                if let (Some(src), Some(dest)) = (canvas.cell(pos), buf.cell_mut(pos)) {
                    *dest = src.clone();
                }
            }
        })?;
        Ok(())
    }
}
