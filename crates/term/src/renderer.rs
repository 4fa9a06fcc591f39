//! TerminalRenderer: pushes rendered boards to the terminal.
//!
//! The first frame and any frame with new dimensions are painted in full.
//! After that each row is compared with what is already on screen and only
//! the span between its first and last changed column is rewritten; a board
//! update touches a handful of tiles, so most rows are skipped entirely.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor, event,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    on_screen: Option<FrameBuffer>,
    scratch: Vec<u8>,
    mouse: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            on_screen: None,
            scratch: Vec::with_capacity(8 * 1024),
            mouse: false,
        }
    }

    /// Capture mouse events (needed for swipes) while the renderer is active.
    pub fn with_mouse_capture(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        self.scratch
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        if self.mouse {
            self.scratch.queue(event::EnableMouseCapture)?;
        }
        self.flush_scratch()
    }

    /// Undo everything [`TerminalRenderer::enter`] changed.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        if self.mouse {
            self.scratch.queue(event::DisableMouseCapture)?;
        }
        self.scratch
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_scratch()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.on_screen = None;
    }

    /// Bring the terminal in line with `frame`.
    pub fn draw(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_frame(self.on_screen.as_ref(), frame, &mut self.scratch)?;
        self.flush_scratch()?;

        match &mut self.on_screen {
            Some(shown) => shown.clone_from(frame),
            None => self.on_screen = Some(frame.clone()),
        }
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_scratch(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Queue the commands that turn `shown` into `next`.
///
/// With no previous frame, or one of a different size, the screen is cleared
/// and every row is written. Returns how many rows were written.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<u16> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut rows = 0;
    for y in 0..next.height() {
        let Some(cells) = next.row(y) else { break };
        let span = match shown.and_then(|s| s.row(y)) {
            Some(old) => match changed_span(old, cells) {
                Some(span) => span,
                None => continue,
            },
            None => 0..cells.len(),
        };
        pen.write_span(out, span.start as u16, y, &cells[span])?;
        rows += 1;
    }

    if rows > 0 {
        out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
    }
    Ok(rows)
}

/// Columns from the first to the last cell that differ between two rows.
fn changed_span(old: &[Cell], new: &[Cell]) -> Option<Range<usize>> {
    let differs = |(a, b): (&Cell, &Cell)| a != b;
    let first = old.iter().zip(new).position(differs)?;
    let last = old.iter().zip(new).rposition(differs)?;
    Some(first..last + 1)
}

/// Tracks the style last sent to the terminal so runs of equally styled
/// cells (tile faces, the board background) need a single style change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write_span(&mut self, out: &mut Vec<u8>, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                set_style(out, cell.style)?;
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    // SGR reset clears colours too, so it has to come first.
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetColors(Colors::new(style.fg.into(), style.bg.into())))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
