//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

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

/// Display color for a piece kind (carried over from the canvas palette).
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Bar => Rgb::new(0, 240, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
    }
}

/// Renders the playfield, score, and status overlays.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
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

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked grid cells.
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if let Some(Some(kind)) = state.grid().get(x, y) {
                    self.draw_grid_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece.
        if let Some(piece) = state.active() {
            for (dx, dy) in piece.shape.cells() {
                let x = piece.x + dx;
                let y = piece.y + dy;
                if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                    self.draw_grid_cell(&mut fb, start_x, start_y, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_overlay(&mut fb, state, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let color = kind_color(kind);
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
        };
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for cx in (x + 1)..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in (y + 1)..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
    ) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let panel_x = origin_x + frame_w + 2;
        fb.put_str(panel_x, origin_y + 1, "SCORE", label);
        fb.put_str(panel_x, origin_y + 2, &state.score().to_string(), value);

        fb.put_str(panel_x, origin_y + 4, "←→ move  ↑ rotate", label);
        fb.put_str(panel_x, origin_y + 5, "↓ drop  space slam", label);
        fb.put_str(panel_x, origin_y + 6, "r restart  q quit", label);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 80, 80),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let title = "GAME OVER";
        let score_line = format!("final score {}", state.score());

        let cy = origin_y + frame_h / 2;
        let tx = origin_x + frame_w.saturating_sub(title.len() as u16) / 2;
        let sx = origin_x + frame_w.saturating_sub(score_line.len() as u16) / 2;

        fb.put_str(tx, cy.saturating_sub(1), title, style);
        fb.put_str(sx, cy + 1, &score_line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Command;

    fn style_at(fb: &FrameBuffer, x: u16, y: u16) -> CellStyle {
        fb.get(x, y).unwrap().style
    }

    #[test]
    fn render_fills_viewport() {
        let mut state = GameState::new(1);
        state.start();

        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 24));

        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn active_piece_cells_are_colored() {
        let mut state = GameState::new(1);
        state.spawn_kind(PieceKind::O);

        let view = GameView::new(1, 1);
        let fb = view.render(&state, Viewport::new(40, 24));

        // Field origin: frame is 12x22 centered in 40x24.
        let origin_x = (40 - 12) / 2;
        let origin_y = (24 - 22) / 2;

        // Square spawns at (4, 0).
        let px = origin_x + 1 + 4;
        let py = origin_y + 1;
        assert_eq!(style_at(&fb, px, py).bg, kind_color(PieceKind::O));
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let mut state = GameState::new(1);
        for x in 0..GRID_WIDTH as i8 {
            state.grid_mut().set(x, 0, Some(PieceKind::Bar));
        }
        state.spawn_kind(PieceKind::O);
        assert!(state.game_over());

        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 30));

        // The overlay text must appear somewhere in the frame.
        let mut found = false;
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap().ch)
                .collect();
            if row.contains("GAME OVER") {
                found = true;
            }
        }
        assert!(found, "expected GAME OVER overlay");
        // Commands other than restart are inert now.
        assert!(!state.clone().apply(Command::MoveLeft));
    }
}
