/// Immediate-mode draw list built from the session each frame.
///
/// Coordinates are world units; the backend decides how to rasterise them.

use crate::entities::{Collectible, EffectKind, Enemy, GameStatus, Projectile, Rgb};
use crate::player::PlayerShip;
use crate::session::GameSession;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(0, 0, 20);
const C_TEXT: Rgb = Rgb(255, 255, 255);
const C_WIN: Rgb = Rgb(0, 255, 0);
const C_LOSE: Rgb = Rgb(255, 0, 0);
const C_SUIT: Rgb = Rgb(70, 70, 70);
const C_HEAD: Rgb = Rgb(200, 150, 150);
const C_GUN: Rgb = Rgb(100, 100, 100);
const C_SHOT_GLOW: Rgb = Rgb(255, 220, 100);
const C_EYE: Rgb = Rgb(255, 255, 255);
const C_PUPIL: Rgb = Rgb(0, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        filled: bool,
        color: Rgb,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        color: Rgb,
    },
    /// `x` is the anchor for `align`; `y` is the top of the line.
    Text {
        x: f32,
        y: f32,
        text: String,
        align: Align,
        color: Rgb,
    },
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: Rgb) -> DrawCommand {
    DrawCommand::Rect { x, y, w, h, color }
}

fn disc(x: f32, y: f32, radius: f32, color: Rgb) -> DrawCommand {
    DrawCommand::Circle { x, y, radius, filled: true, color }
}

fn text(x: f32, y: f32, s: impl Into<String>, align: Align, color: Rgb) -> DrawCommand {
    DrawCommand::Text { x, y, text: s.into(), align, color }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Full frame: gameplay while running, a message screen once terminal.
pub fn build(session: &GameSession) -> Vec<DrawCommand> {
    let mut out = vec![DrawCommand::Clear(C_BACKGROUND)];
    match session.status {
        GameStatus::Running => draw_gameplay(&mut out, session),
        GameStatus::Won => draw_message(&mut out, session, "Congratulations! You Won!", C_WIN),
        GameStatus::GameOver => draw_message(&mut out, session, "GAME OVER", C_LOSE),
    }
    out
}

fn draw_gameplay(out: &mut Vec<DrawCommand>, session: &GameSession) {
    draw_player(out, &session.player);
    for projectile in &session.player.projectiles {
        draw_projectile(out, projectile);
    }
    for enemy in &session.wave.enemies {
        draw_enemy(out, enemy);
    }
    for item in &session.collectibles {
        draw_collectible(out, item);
    }
    draw_hud(out, session);
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player(out: &mut Vec<DrawCommand>, player: &PlayerShip) {
    let (x, y) = (player.body.x, player.body.y);
    // Body, head, arms, gun
    out.push(rect(x + 20.0, y + 30.0, 20.0, 30.0, C_SUIT));
    out.push(disc(x + 30.0, y + 20.0, 10.0, C_HEAD));
    out.push(rect(x + 10.0, y + 35.0, 10.0, 20.0, C_SUIT));
    out.push(rect(x + 40.0, y + 35.0, 10.0, 20.0, C_SUIT));
    out.push(rect(x + 35.0, y + 25.0, 25.0, 8.0, C_GUN));

    if player.shielded() {
        let (cx, cy) = player.body.center();
        out.push(DrawCommand::Circle {
            x: cx,
            y: cy,
            radius: 45.0,
            filled: false,
            color: EffectKind::Shield.color(),
        });
    }
}

fn draw_projectile(out: &mut Vec<DrawCommand>, projectile: &Projectile) {
    let b = &projectile.body;
    out.push(rect(b.x, b.y, b.width, b.height, b.color));
    let (cx, cy) = b.center();
    out.push(disc(cx, cy, 4.0, C_SHOT_GLOW));
}

fn draw_enemy(out: &mut Vec<DrawCommand>, enemy: &Enemy) {
    let (x, y) = (enemy.body.x, enemy.body.y);
    let bob = enemy.phase.sin() * 3.0;
    out.push(DrawCommand::Polygon {
        points: vec![
            (x + 20.0, y + bob),
            (x, y + 20.0),
            (x + 40.0, y + 20.0),
            (x + 35.0, y + 40.0),
            (x + 5.0, y + 40.0),
        ],
        color: enemy.body.color,
    });
    for eye_x in [x + 15.0, x + 25.0] {
        out.push(disc(eye_x, y + 15.0, 5.0, C_EYE));
        out.push(disc(eye_x, y + 15.0, 2.0, C_PUPIL));
    }
}

fn draw_collectible(out: &mut Vec<DrawCommand>, item: &Collectible) {
    let b = &item.body;
    out.push(rect(b.x, b.y, b.width, b.height, b.color));
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(out: &mut Vec<DrawCommand>, session: &GameSession) {
    let width = session.config.screen_width;
    out.push(text(10.0, 10.0, format!("Score: {}", session.score), Align::Left, C_TEXT));
    out.push(text(
        width - 10.0,
        10.0,
        format!("Level: {}", session.level),
        Align::Right,
        C_TEXT,
    ));

    if let Some(kind) = session.player.effect {
        let seconds = session.player.effect_frames / session.config.fps.max(1);
        out.push(text(
            10.0,
            50.0,
            format!("Power-up: {} ({}s)", kind.label(), seconds),
            Align::Left,
            kind.color(),
        ));
    }
}

// ── Terminal screens ──────────────────────────────────────────────────────────

fn draw_message(out: &mut Vec<DrawCommand>, session: &GameSession, headline: &str, color: Rgb) {
    let cx = session.config.screen_width / 2.0;
    let h = session.config.screen_height;
    out.push(text(cx, h / 3.0, headline, Align::Center, color));
    out.push(text(
        cx,
        h / 2.0,
        format!("Final Score: {}", session.score),
        Align::Center,
        C_TEXT,
    ));
    out.push(text(
        cx,
        h * 2.0 / 3.0,
        "Press ESC to exit, R to play again",
        Align::Center,
        C_TEXT,
    ));
}
