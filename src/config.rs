/// Fixed world constants, read by every component and never mutated.
///
/// Speed escalation between waves is tracked on the session, not here.

use std::time::Duration;

use thiserror::Error;

/// Rejected configuration, reported once at session construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("enemy grid needs at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("frame rate must be non-zero")]
    ZeroFrameRate,

    #[error("{name} must be a positive finite number (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    #[error("spawn chance must lie in [0, 1] (got {0})")]
    SpawnChance(f64),

    #[error("screen {width}x{height} cannot fit {what}")]
    DoesNotFit {
        what: &'static str,
        width: f32,
        height: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,

    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Frames between two shots.
    pub fire_cooldown: u32,

    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,

    pub enemy_speed: f32,
    pub enemy_size: f32,
    pub enemy_drop: f32,
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    /// Top-left corner of the first enemy in a fresh wave.
    pub grid_origin: (f32, f32),
    pub col_pitch: f32,
    pub row_pitch: f32,
    /// Added to the enemy speed each time a non-final wave is cleared.
    pub speed_increment: f32,

    pub collectible_speed: f32,
    pub collectible_size: f32,
    /// Per-frame probability of a new collectible appearing.
    pub collectible_spawn_chance: f64,
    /// Frames an effect stays active.
    pub effect_duration: u32,
    pub speed_boost_factor: f32,

    pub score_per_enemy: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 800.0,
            screen_height: 600.0,
            fps: 60,
            player_speed: 5.0,
            player_width: 60.0,
            player_height: 80.0,
            fire_cooldown: 15,
            bullet_speed: 7.0,
            bullet_width: 4.0,
            bullet_height: 12.0,
            enemy_speed: 2.0,
            enemy_size: 40.0,
            enemy_drop: 30.0,
            enemy_rows: 3,
            enemy_cols: 8,
            grid_origin: (100.0, 50.0),
            col_pitch: 80.0,
            row_pitch: 60.0,
            speed_increment: 0.5,
            collectible_speed: 2.0,
            collectible_size: 20.0,
            collectible_spawn_chance: 0.002,
            effect_duration: 300,
            speed_boost_factor: 1.5,
            score_per_enemy: 100,
        }
    }
}

impl GameConfig {
    /// Delay that caps the loop at `fps` frames per second.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_rows == 0 || self.enemy_cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.enemy_rows,
                cols: self.enemy_cols,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        let positives = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_speed", self.player_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("bullet_speed", self.bullet_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("enemy_speed", self.enemy_speed),
            ("enemy_size", self.enemy_size),
            ("enemy_drop", self.enemy_drop),
            ("collectible_speed", self.collectible_speed),
            ("collectible_size", self.collectible_size),
            ("speed_boost_factor", self.speed_boost_factor),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "speed_increment",
                value: self.speed_increment,
            });
        }

        if !(0.0..=1.0).contains(&self.collectible_spawn_chance) {
            return Err(ConfigError::SpawnChance(self.collectible_spawn_chance));
        }

        let does_not_fit = |what| ConfigError::DoesNotFit {
            what,
            width: self.screen_width,
            height: self.screen_height,
        };
        if self.player_width > self.screen_width || self.player_height > self.screen_height {
            return Err(does_not_fit("the player ship"));
        }
        if self.collectible_size > self.screen_width {
            return Err(does_not_fit("a collectible"));
        }
        let (ox, oy) = self.grid_origin;
        let grid_right = ox + (self.enemy_cols - 1) as f32 * self.col_pitch + self.enemy_size;
        let grid_bottom = oy + (self.enemy_rows - 1) as f32 * self.row_pitch + self.enemy_size;
        if ox < 0.0 || oy < 0.0 || grid_right > self.screen_width || grid_bottom > self.screen_height
        {
            return Err(does_not_fit("the enemy grid"));
        }
        Ok(())
    }
}
