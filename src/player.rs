/// The player's ship: movement, firing, projectile upkeep and timed effects.

use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Body, EffectKind, Projectile, PLAYER_COLOR};

/// Lateral offset of each barrel from the ship's centre under double fire.
const DOUBLE_FIRE_OFFSET: f32 = 10.0;

/// Vertical offset of the muzzle below the top of the sprite.
const MUZZLE_Y: f32 = 29.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerShip {
    pub body: Body,
    pub base_speed: f32,
    /// Exclusively owned; pruned in [`PlayerShip::update`].
    pub projectiles: Vec<Projectile>,
    /// Frames until the next shot is allowed.
    pub cooldown: u32,
    pub effect: Option<EffectKind>,
    /// Frames left on `effect`.
    pub effect_frames: u32,

    screen_width: f32,
    fire_cooldown: u32,
    effect_duration: u32,
    speed_boost_factor: f32,
    bullet: (f32, f32, f32),
}

impl PlayerShip {
    /// Ship at its starting spot: horizontally centred, 100 units above the floor.
    pub fn new(config: &GameConfig) -> Self {
        let x = (config.screen_width / 2.0).min(config.screen_width - config.player_width);
        let y = config.screen_height - 100.0;
        Self::at(config, x, y)
    }

    pub fn at(config: &GameConfig, x: f32, y: f32) -> Self {
        PlayerShip {
            body: Body::new(
                x,
                y,
                config.player_width,
                config.player_height,
                config.player_speed,
                PLAYER_COLOR,
            ),
            base_speed: config.player_speed,
            projectiles: Vec::new(),
            cooldown: 0,
            effect: None,
            effect_frames: 0,
            screen_width: config.screen_width,
            fire_cooldown: config.fire_cooldown,
            effect_duration: config.effect_duration,
            speed_boost_factor: config.speed_boost_factor,
            bullet: (config.bullet_width, config.bullet_height, config.bullet_speed),
        }
    }

    pub fn double_fire(&self) -> bool {
        self.effect == Some(EffectKind::DoubleFire)
    }

    pub fn shielded(&self) -> bool {
        self.effect == Some(EffectKind::Shield)
    }

    /// Shift by `direction * speed`.  A step that would leave
    /// `[0, screen_width - width]` is refused and the ship stays put.
    pub fn move_by(&mut self, direction: i32) {
        let direction = direction.signum() as f32;
        let max_x = self.screen_width - self.body.width;
        let new_x = self.body.x + direction * self.body.speed;
        if (0.0..=max_x).contains(&new_x) {
            self.body.x = new_x;
        }
    }

    /// Spawn one projectile (two under double fire) unless still cooling down.
    pub fn fire(&mut self) {
        if self.cooldown > 0 {
            return;
        }
        let (w, h, speed) = self.bullet;
        let (cx, _) = self.body.center();
        let y = self.body.y + MUZZLE_Y;
        let offsets: &[f32] = if self.double_fire() {
            &[-DOUBLE_FIRE_OFFSET, DOUBLE_FIRE_OFFSET]
        } else {
            &[0.0]
        };
        for dx in offsets {
            self.projectiles
                .push(Projectile::new(cx + dx - w / 2.0, y, w, h, speed));
        }
        self.cooldown = self.fire_cooldown;
    }

    /// Per-frame upkeep: cooldown, effect timer, projectile flight.
    pub fn update(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);

        if self.effect_frames > 0 {
            self.effect_frames -= 1;
            if self.effect_frames == 0 {
                self.deactivate_effects();
            }
        }

        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        self.projectiles.retain(|p| p.body.y >= 0.0);
    }

    /// Replace whatever effect is active and restart the timer.
    pub fn activate_effect(&mut self, kind: EffectKind) {
        self.deactivate_effects();
        self.effect = Some(kind);
        self.effect_frames = self.effect_duration;
        if kind == EffectKind::SpeedBoost {
            self.body.speed = self.base_speed * self.speed_boost_factor;
        }
        debug!(effect = kind.label(), frames = self.effect_frames, "effect activated");
    }

    /// Back to the plain ship.  Idempotent.
    pub fn deactivate_effects(&mut self) {
        self.effect = None;
        self.effect_frames = 0;
        self.body.speed = self.base_speed;
    }
}
