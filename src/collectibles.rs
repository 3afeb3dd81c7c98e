/// Falling power-ups: random spawning, drift and pickup.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Collectible, EffectKind};
use crate::player::PlayerShip;

/// Roll the per-frame spawn chance; on success return a collectible at a
/// random column along the top edge.
pub fn maybe_spawn(config: &GameConfig, rng: &mut impl Rng) -> Option<Collectible> {
    if !rng.gen_bool(config.collectible_spawn_chance) {
        return None;
    }
    let max_x = (config.screen_width - config.collectible_size).floor() as i32;
    let x = rng.gen_range(0..=max_x.max(0)) as f32;
    Some(Collectible::new(
        x,
        0.0,
        config.collectible_size,
        config.collectible_speed,
        EffectKind::random(rng),
    ))
}

/// Spawn, move, and resolve every collectible for one frame.
///
/// Items that fall past the bottom are dropped before the pickup test; items
/// touching the player grant their effect and are dropped.  The surviving
/// collection keeps its order.
pub fn update(
    items: &mut Vec<Collectible>,
    player: &mut PlayerShip,
    config: &GameConfig,
    rng: &mut impl Rng,
) {
    if let Some(item) = maybe_spawn(config, rng) {
        items.push(item);
    }

    let player_box = player.body.bounds();
    let mut picked: Vec<EffectKind> = Vec::new();
    items.retain_mut(|item| {
        item.advance();
        if item.body.y > config.screen_height {
            false
        } else if item.body.bounds().overlaps(&player_box) {
            picked.push(item.kind);
            false
        } else {
            true
        }
    });

    for kind in picked {
        player.activate_effect(kind);
    }
}
