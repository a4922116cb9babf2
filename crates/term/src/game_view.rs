//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against snapshots. The
//! framebuffer is dumb storage; all layout and drawing lives here.

use crate::core::{mask_cells, rotation_state, GameSnapshot};
use crate::fb::{Cell, FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of one game session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames and only pay a
    /// resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background and border.
        fill_rect(fb, start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.board[y as usize][x as usize] {
                    Some(kind) => self.draw_board_cell(fb, start_x, start_y, x, y, kind),
                    None => self.draw_empty_cell(fb, start_x, start_y, x, y),
                }
            }
        }

        // Active piece (cells above the visible ceiling stay hidden).
        if let Some(active) = snap.current {
            for (dx, dy) in mask_cells(rotation_state(active.kind, active.rotation)) {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: piece_color(kind),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fill_rect(fb, px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        put_str(fb, panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        put_str(fb, panel_x, y, &snap.score.to_string(), value);
        y = y.saturating_add(2);

        put_str(fb, panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        put_str(fb, panel_x, y, &snap.level.to_string(), value);
        y = y.saturating_add(2);

        put_str(fb, panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        put_str(fb, panel_x, y, &snap.high_score.to_string(), value);
        y = y.saturating_add(2);

        put_str(fb, panel_x, y, "NEXT", label);
        fb.set(panel_x + 5, y, value.cell(snap.next.as_char()));
        y = y.saturating_add(1);

        // Preview box: the next piece's spawn-rotation mask.
        let style = Style {
            fg: piece_color(snap.next),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for (dx, dy) in mask_cells(rotation_state(snap.next, 0)) {
            let px = panel_x + (dx as u16) * self.cell_w;
            let py = y + (dy as u16) * self.cell_h;
            fill_rect(fb, px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

/// Room reserved to the right of the board for the stats panel.
const PANEL_W: u16 = 14;

fn put_str(fb: &mut FrameBuffer, x: u16, y: u16, s: &str, style: Style) {
    for (i, ch) in s.chars().enumerate() {
        fb.set(x.saturating_add(i as u16), y, style.cell(ch));
    }
}

fn fill_rect(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
    for dy in 0..h {
        for dx in 0..w {
            fb.set(
                x.saturating_add(dx),
                y.saturating_add(dy),
                style.cell(ch),
            );
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, style.cell('┌'));
    fb.set(x + w - 1, y, style.cell('┐'));
    fb.set(x, y + h - 1, style.cell('└'));
    fb.set(x + w - 1, y + h - 1, style.cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, y + h - 1, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(x + w - 1, y + dy, style.cell('│'));
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = Style {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };
    put_str(fb, x, mid_y, text, style);
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn rendered(snap: &GameSnapshot) -> String {
        let view = GameView::default();
        let fb = view.render(snap, Viewport::new(60, 24));
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.cell(x, y).ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_board_frame_and_panel() {
        let mut state = GameState::new(42);
        state.start();
        let snap = state.snapshot();
        let text = rendered(&snap);

        assert!(text.contains('┌'));
        assert!(text.contains('┘'));
        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("HIGH"));
        // The NEXT row carries the upcoming piece's letter.
        assert!(text.contains(&format!("NEXT {}", snap.next.as_char())));
        // The active piece is visible.
        assert!(text.contains('█'));
    }

    #[test]
    fn paused_overlay_wins_over_game_over() {
        let mut state = GameState::new(42);
        state.start();
        let mut snap = state.snapshot();

        snap.paused = true;
        assert!(rendered(&snap).contains("PAUSED"));

        snap.paused = false;
        snap.game_over = true;
        let text = rendered(&snap);
        assert!(text.contains("GAME OVER"));
        assert!(!text.contains("PAUSED"));
    }
}
