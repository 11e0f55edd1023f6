//! GameView: maps a grid snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::ShapeKind;

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

/// Session facts shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub game_over: bool,
    pub pieces: u32,
    pub lines: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered board frame in terminal cells.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        let w = (grid.width() as u16).saturating_mul(self.cell_w);
        let h = (grid.height() as u16).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(
        &self,
        grid: &Grid,
        status: &StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(grid);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in grid.rows().enumerate() {
            for (col, &tag) in cells.iter().enumerate() {
                let (x, y) = (col as u16, row as u16);
                if tag == 0 {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                } else {
                    self.draw_filled_cell(fb, start_x, start_y, x, y, tag);
                }
            }
        }

        self.draw_side_panel(fb, status, viewport, start_x, start_y, frame_w);

        if status.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, status: &StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    /// Filled cells are drawn as bracketed squares, `[]` at the default width.
    fn draw_filled_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        tag: u8,
    ) {
        let style = CellStyle::new(Rgb::new(20, 20, 20), tag_color(tag)).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);

        if self.cell_w >= 2 {
            let px = start_x + 1 + x * self.cell_w;
            let py = start_y + 1 + y * self.cell_h;
            for dy in 0..self.cell_h {
                fb.put_char(px, py + dy, '[', style);
                fb.put_char(px + self.cell_w - 1, py + dy, ']', style);
            }
        } else {
            self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: &StatusView,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.pieces, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, status.lines, value);
        y = y.saturating_add(2);

        if let Some(seed) = status.seed {
            fb.put_str(panel_x, y, "SEED", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, &seed.to_string(), hint);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in ["←/→  move", "↓    drop", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background color for a cell's color tag. Unknown tags render gray.
fn tag_color(tag: u8) -> Rgb {
    match ShapeKind::from_color(tag) {
        Some(ShapeKind::L) => Rgb::new(255, 165, 0),
        Some(ShapeKind::T) => Rgb::new(200, 120, 220),
        Some(ShapeKind::I) => Rgb::new(80, 220, 220),
        None => Rgb::new(150, 150, 150),
    }
}
