use crate::error::{SurfaceError, SurfaceResult};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, DisableLineWrap, EnableLineWrap},
};
use std::io::{self, Stdout, Write};

/// Everything the aquarium needs from a terminal.
///
/// Any call may fail while the window is being resized; callers treat both
/// error kinds as "drop this frame".
pub trait Surface {
    /// Live size in (columns, rows).
    fn size(&self) -> SurfaceResult<(u16, u16)>;
    fn move_to(&mut self, column: u16, row: u16) -> SurfaceResult<()>;
    fn set_fg(&mut self, color: Color) -> SurfaceResult<()>;
    /// Writes at the cursor and advances it.
    fn write(&mut self, text: &str) -> SurfaceResult<()>;
    fn clear(&mut self) -> SurfaceResult<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> SurfaceResult<()>;
    /// Pushes queued output to the screen.
    fn flush(&mut self) -> SurfaceResult<()>;
}

/* -----------------------------
   crossterm over stdout
------------------------------ */

pub struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    /// Disables line wrap so writes in the last column never scroll the
    /// screen. Wrap and cursor visibility are restored on drop.
    pub fn begin() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(out, DisableLineWrap, Clear(ClearType::All))?;
        Ok(Self { out })
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> SurfaceResult<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn move_to(&mut self, column: u16, row: u16) -> SurfaceResult<()> {
        queue!(self.out, cursor::MoveTo(column, row))?;
        Ok(())
    }

    fn set_fg(&mut self, color: Color) -> SurfaceResult<()> {
        queue!(self.out, SetForegroundColor(color))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> SurfaceResult<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> SurfaceResult<()> {
        if visible {
            queue!(self.out, cursor::Show)?;
        } else {
            queue!(self.out, cursor::Hide)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> SurfaceResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = queue!(self.out, ResetColor, cursor::Show, EnableLineWrap);
        let _ = self.out.flush();
    }
}

/* -----------------------------
   In-memory cell grid
------------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
}

impl Cell {
    fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Headless surface that records what would be on screen.
///
/// The reported size and the addressable buffer can be set apart with
/// [`BufferSurface::shrink_buffer`] to reproduce a window shrinking between
/// the size query and the draw call.
pub struct BufferSurface {
    cols: u16,
    rows: u16,
    buffer_cols: u16,
    buffer_rows: u16,
    cells: Vec<Cell>,
    cursor: (u16, u16),
    fg: Color,
    cursor_visible: bool,
    failing: bool,
    clears: usize,
    flushes: usize,
}

impl BufferSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            buffer_cols: cols,
            buffer_rows: rows,
            cells: vec![Cell::blank(); cols as usize * rows as usize],
            cursor: (0, 0),
            fg: Color::Reset,
            cursor_visible: true,
            failing: false,
            clears: 0,
            flushes: 0,
        }
    }

    /// Simulates the user resizing the window. Contents are lost.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self {
            cursor_visible: self.cursor_visible,
            failing: self.failing,
            clears: self.clears,
            flushes: self.flushes,
            ..Self::new(cols, rows)
        };
    }

    /// Shrinks the addressable buffer without changing the reported size.
    pub fn shrink_buffer(&mut self, cols: u16, rows: u16) {
        self.buffer_cols = cols.min(self.cols);
        self.buffer_rows = rows.min(self.rows);
    }

    /// While set, writes and flushes fail with an I/O error.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    pub fn cell(&self, column: u16, row: u16) -> Option<Cell> {
        if column >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + column as usize).copied()
    }

    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|x| self.cell(x, row))
            .map(|c| c.ch)
            .collect()
    }

    /// All rows joined by newlines, trailing blanks trimmed.
    pub fn contents(&self) -> String {
        (0..self.rows)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    fn check_io(&self) -> SurfaceResult<()> {
        if self.failing {
            return Err(SurfaceError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal went away",
            )));
        }
        Ok(())
    }
}

impl Surface for BufferSurface {
    fn size(&self) -> SurfaceResult<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn move_to(&mut self, column: u16, row: u16) -> SurfaceResult<()> {
        if column >= self.buffer_cols || row >= self.buffer_rows {
            return Err(SurfaceError::OutOfRange { column, row });
        }
        self.cursor = (column, row);
        Ok(())
    }

    fn set_fg(&mut self, color: Color) -> SurfaceResult<()> {
        self.fg = color;
        Ok(())
    }

    fn write(&mut self, text: &str) -> SurfaceResult<()> {
        self.check_io()?;
        let (mut x, y) = self.cursor;
        for ch in text.chars() {
            if x < self.buffer_cols && y < self.buffer_rows {
                let i = y as usize * self.cols as usize + x as usize;
                if let Some(cell) = self.cells.get_mut(i) {
                    *cell = Cell { ch, fg: self.fg };
                }
            }
            x = x.saturating_add(1);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn clear(&mut self) -> SurfaceResult<()> {
        self.check_io()?;
        self.cells.fill(Cell::blank());
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> SurfaceResult<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn flush(&mut self) -> SurfaceResult<()> {
        self.check_io()?;
        self.flushes += 1;
        Ok(())
    }
}
