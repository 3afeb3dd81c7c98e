/// Character-cell rasteriser for [`DrawCommand`]s.
///
/// World coordinates are scaled independently on each axis to the cell grid
/// and shapes are sampled at cell centres.  Shapes too small to cover any
/// cell centre still mark the cell under their own centre so bullets and
/// pupils never vanish on a small terminal.

use crate::entities::Rgb;
use crate::scene::{Align, DrawCommand};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Cell { ch: ' ', fg: bg, bg }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    cols: usize,
    rows: usize,
    /// Cells per world unit.
    sx: f32,
    sy: f32,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, world_width: f32, world_height: f32) -> Self {
        Canvas {
            cols,
            rows,
            sx: cols as f32 / world_width,
            sy: rows as f32 / world_height,
            cells: vec![Cell::blank(Rgb(0, 0, 0)); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    pub fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }

    pub fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear(color) => self.cells.fill(Cell::blank(*color)),
            DrawCommand::Rect { x, y, w, h, color } => self.fill_rect(*x, *y, *w, *h, *color),
            DrawCommand::Circle { x, y, radius, filled, color } => {
                self.circle(*x, *y, *radius, *filled, *color)
            }
            DrawCommand::Polygon { points, color } => self.polygon(points, *color),
            DrawCommand::Text { x, y, text, align, color } => {
                self.text(*x, *y, text, *align, *color)
            }
        }
    }

    // ── Primitives ────────────────────────────────────────────────────────────

    fn paint(&mut self, col: i64, row: i64, color: Rgb) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let idx = row as usize * self.cols + col as usize;
        self.cells[idx] = Cell::blank(color);
    }

    fn cell_of(&self, x: f32, y: f32) -> (i64, i64) {
        ((x * self.sx).floor() as i64, (y * self.sy).floor() as i64)
    }

    /// World position of the centre of a cell.
    fn centre(&self, col: i64, row: i64) -> (f32, f32) {
        ((col as f32 + 0.5) / self.sx, (row as f32 + 0.5) / self.sy)
    }

    /// Paint every cell in the bounding range whose centre satisfies `inside`;
    /// falls back to the cell under `anchor` when nothing matched.
    fn fill_where(
        &mut self,
        (min_x, min_y, max_x, max_y): (f32, f32, f32, f32),
        anchor: (f32, f32),
        color: Rgb,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let (c0, r0) = self.cell_of(min_x, min_y);
        let (c1, r1) = self.cell_of(max_x, max_y);
        let mut painted = false;
        for row in r0.max(0)..=r1.min(self.rows as i64 - 1) {
            for col in c0.max(0)..=c1.min(self.cols as i64 - 1) {
                let (wx, wy) = self.centre(col, row);
                if inside(wx, wy) {
                    self.paint(col, row, color);
                    painted = true;
                }
            }
        }
        if !painted {
            let (col, row) = self.cell_of(anchor.0, anchor.1);
            self.paint(col, row, color);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.fill_where(
            (x, y, x + w, y + h),
            (x + w / 2.0, y + h / 2.0),
            color,
            |wx, wy| wx >= x && wx < x + w && wy >= y && wy < y + h,
        );
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32, filled: bool, color: Rgb) {
        // Ring thickness of about one cell on the coarser axis.
        let band = (0.5 / self.sx).max(0.5 / self.sy);
        let bounds = (cx - radius - band, cy - radius - band, cx + radius + band, cy + radius + band);
        if filled {
            self.fill_where(bounds, (cx, cy), color, |wx, wy| {
                (wx - cx).hypot(wy - cy) <= radius
            });
        } else {
            let (c0, r0) = self.cell_of(bounds.0, bounds.1);
            let (c1, r1) = self.cell_of(bounds.2, bounds.3);
            for row in r0.max(0)..=r1.min(self.rows as i64 - 1) {
                for col in c0.max(0)..=c1.min(self.cols as i64 - 1) {
                    let (wx, wy) = self.centre(col, row);
                    if ((wx - cx).hypot(wy - cy) - radius).abs() <= band {
                        self.paint(col, row, color);
                    }
                }
            }
        }
    }

    fn polygon(&mut self, points: &[(f32, f32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        let n = points.len() as f32;
        let anchor = (
            points.iter().map(|p| p.0).sum::<f32>() / n,
            points.iter().map(|p| p.1).sum::<f32>() / n,
        );
        self.fill_where((min_x, min_y, max_x, max_y), anchor, color, |wx, wy| {
            even_odd(points, wx, wy)
        });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, align: Align, color: Rgb) {
        let (anchor, row) = self.cell_of(x, y);
        if row < 0 || row >= self.rows as i64 {
            return;
        }
        let len = text.chars().count() as i64;
        let start = match align {
            Align::Left => anchor,
            Align::Center => anchor - len / 2,
            Align::Right => anchor - len,
        };
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 || col >= self.cols as i64 {
                continue;
            }
            let idx = row as usize * self.cols + col as usize;
            let cell = &mut self.cells[idx];
            cell.ch = ch;
            cell.fg = color;
        }
    }
}

/// Even-odd point-in-polygon test.
fn even_odd(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
