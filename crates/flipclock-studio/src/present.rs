//! Text rendering of a [`FlipBoard`] for the terminal.

use std::io::{self, Write};
use std::time::Instant;

use flipclock_core::config::LabelPosition;
use flipclock_core::digit::{DigitPosition, FlipFrame};
use flipclock_core::tick::TickOrchestrator;
use flipclock_ui::board::FlipBoard;
use flipclock_ui::scene::{DrawList, ZIndex};

/// Draws the board as a five-row block of box characters: top edge, upper
/// halves, hinge, lower halves, bottom edge.
pub fn render(board: &FlipBoard, frame: impl Fn(DigitPosition) -> FlipFrame) -> Vec<String> {
    let mut rows: [String; 5] = Default::default();
    let mut last_group = None;

    for tile in board.tiles() {
        let position = tile.position();
        match last_group {
            Some(g) if g != position.group() => {
                for (i, row) in rows.iter_mut().enumerate() {
                    row.push_str(if i == 1 || i == 3 { " : " } else { "   " });
                }
            }
            Some(_) => {
                for row in rows.iter_mut() {
                    row.push(' ');
                }
            }
            None => {}
        }
        last_group = Some(position.group());

        let (upper, lower) = tile.visible_glyphs(frame(position));
        rows[0].push_str("┌───┐");
        rows[1].push_str(&format!("│ {upper} │"));
        rows[2].push_str("├───┤");
        rows[3].push_str(&format!("│ {lower} │"));
        rows[4].push_str("└───┘");
    }

    let mut lines: Vec<String> = rows.into_iter().collect();
    if let Some(label) = board.settings().label.as_deref() {
        match board.settings().label_position {
            LabelPosition::Top => lines.insert(0, label.to_string()),
            LabelPosition::Bottom => lines.push(label.to_string()),
        }
    }
    lines
}

/// Renders with each tile's frame taken from the matching orchestrator cell.
pub fn render_at(board: &FlipBoard, orchestrator: &TickOrchestrator, now: Instant) -> Vec<String> {
    render(board, |position| {
        orchestrator
            .cell(position)
            .map(|c| c.frame_at(now))
            .unwrap_or(FlipFrame::REST)
    })
}

/// Draw commands per layer, back to front.
pub fn layer_counts(scene: &DrawList) -> Vec<(ZIndex, usize)> {
    let mut counts: Vec<(ZIndex, usize)> = Vec::new();
    for item in scene.iter_in_paint_order() {
        match counts.last_mut() {
            Some((z, n)) if *z == item.key.z => *n += 1,
            _ => counts.push((item.key.z, 1)),
        }
    }
    counts
}

/// Redraws a block of lines in place, skipping unchanged frames.
pub struct TerminalPresenter<W: Write> {
    out: W,
    last: Vec<String>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: Vec::new() }
    }

    /// Returns `false` if `lines` match what is already on screen.
    pub fn present(&mut self, lines: Vec<String>) -> io::Result<bool> {
        if lines == self.last {
            return Ok(false);
        }
        if !self.last.is_empty() {
            write!(self.out, "\x1b[{}A", self.last.len())?;
        }
        for line in &lines {
            writeln!(self.out, "\x1b[2K{line}")?;
        }
        self.out.flush()?;
        self.last = lines;
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
