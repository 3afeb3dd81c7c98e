/// Game entity types.  Every concrete entity embeds a [`Body`] rather than
/// inheriting from one; behaviour lives in the owning module.

use rand::Rng;

// ── Geometry & colour ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned bounding box in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

// ── Shared body ───────────────────────────────────────────────────────────────

/// Position, size, speed and colour shared by every entity.
/// Width and height never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Rgb,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32, color: Rgb) -> Self {
        Body { x, y, width, height, speed, color }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ── Effects ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Two projectiles per shot.
    DoubleFire,
    /// Player speed multiplied by the boost factor.
    SpeedBoost,
    /// Enemy contact is not lethal.
    Shield,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [
        EffectKind::DoubleFire,
        EffectKind::SpeedBoost,
        EffectKind::Shield,
    ];

    /// Uniform pick among the three kinds.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::DoubleFire => "Double Fire",
            EffectKind::SpeedBoost => "Speed Boost",
            EffectKind::Shield => "Shield",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            EffectKind::DoubleFire => Rgb(255, 215, 0),
            EffectKind::SpeedBoost => Rgb(0, 255, 255),
            EffectKind::Shield => Rgb(147, 112, 219),
        }
    }
}

// ── Moving objects ────────────────────────────────────────────────────────────

pub const PROJECTILE_COLOR: Rgb = Rgb(255, 200, 0);
pub const ENEMY_COLOR: Rgb = Rgb(200, 50, 50);
pub const PLAYER_COLOR: Rgb = Rgb(50, 150, 50);

/// Player shot; travels straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Projectile {
            body: Body::new(x, y, width, height, speed, PROJECTILE_COLOR),
        }
    }

    pub fn advance(&mut self) {
        self.body.y -= self.body.speed;
    }
}

/// Falling power-up.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub body: Body,
    pub kind: EffectKind,
}

impl Collectible {
    pub fn new(x: f32, y: f32, size: f32, speed: f32, kind: EffectKind) -> Self {
        Collectible {
            body: Body::new(x, y, size, size, speed, kind.color()),
            kind,
        }
    }

    pub fn advance(&mut self) {
        self.body.y += self.body.speed;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    /// Cosmetic only.
    pub phase: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, size: f32, speed: f32) -> Self {
        Enemy {
            body: Body::new(x, y, size, size, speed, ENEMY_COLOR),
            direction: 1.0,
            phase: 0.0,
        }
    }
}

// ── Session status ────────────────────────────────────────────────────────────

/// `GameOver` and `Won` are terminal; only a full reset leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
    Won,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Running
    }
}

/// Logical controls sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}
