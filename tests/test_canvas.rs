use space_invaders::canvas::*;
use space_invaders::entities::Rgb;
use space_invaders::scene::{Align, DrawCommand};

const RED: Rgb = Rgb(255, 0, 0);
const BLUE: Rgb = Rgb(0, 0, 255);
const WHITE: Rgb = Rgb(255, 255, 255);

/// 10x10 cells over a 100x100 world: one cell per 10 units.
fn make_canvas() -> Canvas {
    let mut c = Canvas::new(10, 10, 100.0, 100.0);
    c.draw(&DrawCommand::Clear(BLUE));
    c
}

fn row_text(c: &Canvas, row: usize) -> String {
    c.row(row).iter().map(|cell| cell.ch).collect()
}

#[test]
fn clear_fills_background() {
    let c = make_canvas();
    assert!((0..10).all(|r| c.row(r).iter().all(|cell| cell.bg == BLUE && cell.ch == ' ')));
}

#[test]
fn rect_covers_cells_by_centre() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Rect { x: 20.0, y: 30.0, w: 20.0, h: 10.0, color: RED });
    assert_eq!(c.cell(2, 3).unwrap().bg, RED);
    assert_eq!(c.cell(3, 3).unwrap().bg, RED);
    assert_eq!(c.cell(4, 3).unwrap().bg, BLUE);
    assert_eq!(c.cell(2, 4).unwrap().bg, BLUE);
}

#[test]
fn tiny_rect_still_visible() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Rect { x: 51.0, y: 51.0, w: 2.0, h: 2.0, color: RED });
    assert_eq!(c.cell(5, 5).unwrap().bg, RED);
}

#[test]
fn filled_circle() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Circle { x: 50.0, y: 50.0, radius: 15.0, filled: true, color: RED });
    assert_eq!(c.cell(4, 4).unwrap().bg, RED);
    assert_eq!(c.cell(5, 5).unwrap().bg, RED);
    assert_eq!(c.cell(0, 0).unwrap().bg, BLUE);
}

#[test]
fn ring_leaves_centre_empty() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Circle { x: 50.0, y: 50.0, radius: 30.0, filled: false, color: RED });
    assert_eq!(c.cell(4, 4).unwrap().bg, BLUE);
    assert_eq!(c.cell(2, 5).unwrap().bg, RED);
}

#[test]
fn polygon_fill() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Polygon {
        points: vec![(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
        color: RED,
    });
    assert_eq!(c.cell(0, 0).unwrap().bg, RED);
    assert_eq!(c.cell(9, 9).unwrap().bg, BLUE);
}

#[test]
fn text_alignment() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Text { x: 0.0, y: 0.0, text: "ab".into(), align: Align::Left, color: WHITE });
    c.draw(&DrawCommand::Text { x: 50.0, y: 10.0, text: "abcd".into(), align: Align::Center, color: WHITE });
    c.draw(&DrawCommand::Text { x: 100.0, y: 20.0, text: "xy".into(), align: Align::Right, color: WHITE });
    assert_eq!(row_text(&c, 0), "ab        ");
    assert_eq!(row_text(&c, 1), "   abcd   ");
    assert_eq!(row_text(&c, 2), "        xy");
    // Text keeps the background it lands on
    assert_eq!(c.cell(0, 0).unwrap().bg, BLUE);
    assert_eq!(c.cell(0, 0).unwrap().fg, WHITE);
}

#[test]
fn out_of_bounds_is_clipped() {
    let mut c = make_canvas();
    c.draw(&DrawCommand::Rect { x: -50.0, y: -50.0, w: 60.0, h: 60.0, color: RED });
    c.draw(&DrawCommand::Text { x: 95.0, y: 500.0, text: "lost".into(), align: Align::Left, color: WHITE });
    assert_eq!(c.cell(0, 0).unwrap().bg, RED);
    assert!(c.cell(10, 0).is_none());
}
