/// Top-level game state and the per-frame state machine.
///
/// `Running` moves to either `GameOver` (enemy contact without a shield) or
/// `Won` (third wave cleared).  Both are terminal until [`GameSession::reset`].

use rand::Rng;
use tracing::info;

use crate::collectibles;
use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::entities::{Collectible, Controls, GameStatus};
use crate::player::PlayerShip;
use crate::scene::{self, DrawCommand};
use crate::wave::Wave;

/// Number of waves in a session.
pub const FINAL_LEVEL: u32 = 3;

#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub player: PlayerShip,
    pub wave: Wave,
    pub collectibles: Vec<Collectible>,
    pub score: u32,
    /// 1..=FINAL_LEVEL
    pub level: u32,
    /// Speed given to the next spawned wave; escalates as waves are cleared.
    pub enemy_speed: f32,
    pub status: GameStatus,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = PlayerShip::new(&config);
        let wave = Wave::spawn(&config, config.enemy_rows, config.enemy_cols, config.enemy_speed);
        let enemy_speed = config.enemy_speed;
        info!(enemies = wave.len(), "session started");
        Ok(GameSession {
            config,
            player,
            wave,
            collectibles: Vec::new(),
            score: 0,
            level: 1,
            enemy_speed,
            status: GameStatus::Running,
        })
    }

    /// Full reset to level 1; the only way out of a terminal state.
    pub fn reset(&mut self) {
        let config = &self.config;
        self.player = PlayerShip::new(config);
        self.wave = Wave::spawn(config, config.enemy_rows, config.enemy_cols, config.enemy_speed);
        self.collectibles.clear();
        self.score = 0;
        self.level = 1;
        self.enemy_speed = config.enemy_speed;
        self.status = GameStatus::Running;
        info!("session reset");
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Apply this frame's held controls to the ship.  Ignored once terminal.
    pub fn handle_input(&mut self, controls: Controls) {
        if self.status.is_terminal() {
            return;
        }
        if controls.left {
            self.player.move_by(-1);
        }
        if controls.right {
            self.player.move_by(1);
        }
        if controls.fire {
            self.player.fire();
        }
    }

    /// Advance the simulation by one frame.  All randomness comes through
    /// `rng` so tests can seed it.
    pub fn step(&mut self, rng: &mut impl Rng) {
        if self.status.is_terminal() {
            return;
        }

        self.player.update();
        self.wave
            .advance(self.config.screen_width, self.config.enemy_drop);
        collectibles::update(&mut self.collectibles, &mut self.player, &self.config, rng);

        let killed =
            collision::projectiles_vs_enemies(&mut self.player.projectiles, &mut self.wave.enemies);
        self.score += killed as u32 * self.config.score_per_enemy;

        if collision::enemy_reaches_player(&self.player, &self.wave.enemies) {
            self.status = GameStatus::GameOver;
            info!(score = self.score, level = self.level, "game over");
        }

        self.check_wave_cleared();
    }

    fn check_wave_cleared(&mut self) {
        if self.status.is_terminal() || !self.wave.is_empty() {
            return;
        }
        if self.level >= FINAL_LEVEL {
            self.status = GameStatus::Won;
            info!(score = self.score, "final wave cleared");
            return;
        }
        self.level += 1;
        self.enemy_speed += self.config.speed_increment;
        self.wave = Wave::spawn(
            &self.config,
            self.config.enemy_rows,
            self.config.enemy_cols,
            self.enemy_speed,
        );
        info!(level = self.level, enemy_speed = self.enemy_speed, "wave cleared");
    }

    /// Draw list for this frame; also ticks the enemies' cosmetic animation.
    pub fn render(&mut self) -> Vec<DrawCommand> {
        if !self.status.is_terminal() {
            self.wave.animate();
        }
        scene::build(self)
    }
}
