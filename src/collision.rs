/// Per-frame collision passes.  Exhaustive box-overlap tests; removals are
/// collected first and compacted afterwards so no element is skipped or
/// visited twice.

use crate::entities::{Enemy, Projectile};
use crate::player::PlayerShip;

/// Projectiles against enemies.  Each projectile destroys at most one enemy,
/// the first overlapping one in wave order; an enemy already destroyed this
/// frame cannot be hit again.  Returns the number of enemies destroyed.
pub fn projectiles_vs_enemies(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> usize {
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut used_projectiles: Vec<usize> = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let shot = projectile.body.bounds();
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed_enemies.contains(ei) && shot.overlaps(&enemy.body.bounds()));
        if let Some((ei, _)) = hit {
            killed_enemies.push(ei);
            used_projectiles.push(pi);
        }
    }

    if killed_enemies.is_empty() {
        return 0;
    }

    let mut index = 0;
    enemies.retain(|_| {
        let keep = !killed_enemies.contains(&index);
        index += 1;
        keep
    });
    let mut index = 0;
    projectiles.retain(|_| {
        let keep = !used_projectiles.contains(&index);
        index += 1;
        keep
    });

    killed_enemies.len()
}

/// True when an enemy touches the player and no shield is up.
pub fn enemy_reaches_player(player: &PlayerShip, enemies: &[Enemy]) -> bool {
    if player.shielded() {
        return false;
    }
    let ship = player.body.bounds();
    enemies.iter().any(|e| e.body.bounds().overlaps(&ship))
}
