/// Rendering layer: all terminal I/O lives here.
///
/// The library turns the session into draw commands and rasterises them
/// onto a [`Canvas`]; this module only translates cells into terminal
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::canvas::Canvas;
use space_invaders::entities::Rgb;
use space_invaders::scene::DrawCommand;

fn color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}

/// Rasterise `commands` at the current terminal size and flush one frame.
pub fn render<W: Write>(
    out: &mut W,
    commands: &[DrawCommand],
    world: (f32, f32),
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols as usize, rows as usize, world.0, world.1);
    canvas.draw_all(commands);
    present(out, &canvas)
}

/// Write every cell, only emitting colour changes when they differ from
/// the previous cell.
pub fn present<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let mut fg: Option<Rgb> = None;
    let mut bg: Option<Rgb> = None;
    let mut line = String::with_capacity(canvas.cols() * 4);

    for row in 0..canvas.rows() {
        out.queue(cursor::MoveTo(0, row as u16))?;
        for cell in canvas.row(row) {
            if fg != Some(cell.fg) || bg != Some(cell.bg) {
                if !line.is_empty() {
                    out.queue(Print(&line))?;
                    line.clear();
                }
                if fg != Some(cell.fg) {
                    out.queue(style::SetForegroundColor(color(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    out.queue(style::SetBackgroundColor(color(cell.bg)))?;
                    bg = Some(cell.bg);
                }
            }
            line.push(cell.ch);
        }
        if !line.is_empty() {
            out.queue(Print(&line))?;
            line.clear();
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, canvas.rows().saturating_sub(1) as u16))?;
    out.flush()?;
    Ok(())
}
