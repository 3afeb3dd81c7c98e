use space_invaders::config::*;
use std::time::Duration;

#[test]
fn default_config_is_valid() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
}

#[test]
fn default_constants() {
    let c = GameConfig::default();
    assert_eq!((c.screen_width, c.screen_height), (800.0, 600.0));
    assert_eq!(c.enemy_rows * c.enemy_cols, 24);
    assert_eq!(c.fire_cooldown, 15);
    assert_eq!(c.effect_duration, 300);
    assert_eq!(c.enemy_speed, 2.0);
    assert_eq!(c.speed_increment, 0.5);
}

#[test]
fn frame_duration_matches_fps() {
    let c = GameConfig { fps: 50, ..GameConfig::default() };
    assert_eq!(c.frame_duration(), Duration::from_millis(20));
}

#[test]
fn zero_rows_rejected() {
    let c = GameConfig { enemy_rows: 0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::EmptyGrid { rows: 0, cols: 8 }));
}

#[test]
fn zero_fps_rejected() {
    let c = GameConfig { fps: 0, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::ZeroFrameRate));
}

#[test]
fn negative_speed_rejected() {
    let c = GameConfig { bullet_speed: -1.0, ..GameConfig::default() };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NonPositive { name: "bullet_speed", .. })
    ));
}

#[test]
fn spawn_chance_out_of_range_rejected() {
    let c = GameConfig { collectible_spawn_chance: 1.5, ..GameConfig::default() };
    assert_eq!(c.validate(), Err(ConfigError::SpawnChance(1.5)));
}

#[test]
fn oversized_grid_rejected() {
    let c = GameConfig { enemy_cols: 20, ..GameConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::DoesNotFit { .. })));
}

#[test]
fn error_messages_are_readable() {
    let msg = ConfigError::EmptyGrid { rows: 0, cols: 8 }.to_string();
    assert!(msg.contains("0x8"));
}
