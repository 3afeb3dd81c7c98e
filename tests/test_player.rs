use space_invaders::config::GameConfig;
use space_invaders::entities::EffectKind;
use space_invaders::player::PlayerShip;

fn make_player() -> PlayerShip {
    PlayerShip::new(&GameConfig::default())
}

// ── move_by ───────────────────────────────────────────────────────────────────

#[test]
fn starts_centred_above_floor() {
    let p = make_player();
    assert_eq!(p.body.x, 400.0);
    assert_eq!(p.body.y, 500.0);
    assert_eq!(p.body.speed, 5.0);
}

#[test]
fn move_left_and_right() {
    let mut p = make_player();
    p.move_by(-1);
    assert_eq!(p.body.x, 395.0);
    p.move_by(1);
    p.move_by(1);
    assert_eq!(p.body.x, 405.0);
    p.move_by(0);
    assert_eq!(p.body.x, 405.0);
}

#[test]
fn move_left_at_zero_stays_at_zero() {
    let mut p = make_player();
    p.body.x = 0.0;
    p.move_by(-1);
    assert_eq!(p.body.x, 0.0);
}

#[test]
fn move_right_past_edge_is_refused() {
    let mut p = make_player();
    p.body.x = 738.0;
    p.move_by(1);
    // 743 would exceed 800 - 60, so the ship stays put
    assert_eq!(p.body.x, 738.0);
    p.body.x = 735.0;
    p.move_by(1);
    assert_eq!(p.body.x, 740.0);
    p.move_by(1);
    assert_eq!(p.body.x, 740.0);
}

#[test]
fn move_left_past_edge_is_refused() {
    let mut p = make_player();
    p.body.x = 3.0;
    p.move_by(-1);
    assert_eq!(p.body.x, 3.0);
    p.move_by(1);
    assert_eq!(p.body.x, 8.0);
}

#[test]
fn move_never_leaves_screen() {
    let mut p = make_player();
    for start in [0.0, 1.0, 3.0, 250.0, 737.5, 740.0] {
        for dir in [-1, 0, 1] {
            p.body.x = start;
            for _ in 0..200 {
                p.move_by(dir);
                assert!(p.body.x >= 0.0 && p.body.x <= 740.0);
            }
        }
    }
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_spawns_centred_projectile_and_sets_cooldown() {
    let mut p = make_player();
    p.fire();
    assert_eq!(p.projectiles.len(), 1);
    assert_eq!(p.cooldown, 15);
    let shot = &p.projectiles[0].body;
    assert_eq!(shot.x + shot.width / 2.0, p.body.x + p.body.width / 2.0);
}

#[test]
fn fire_during_cooldown_is_noop() {
    let mut p = make_player();
    p.fire();
    p.update();
    p.fire();
    assert_eq!(p.projectiles.len(), 1);
    assert_eq!(p.cooldown, 14);
}

#[test]
fn fire_again_after_cooldown_expires() {
    let mut p = make_player();
    p.fire();
    for _ in 0..15 {
        p.update();
    }
    assert_eq!(p.cooldown, 0);
    p.fire();
    assert_eq!(p.projectiles.len(), 2);
    assert_eq!(p.cooldown, 15);
}

#[test]
fn double_fire_spawns_two_offset_projectiles() {
    let mut p = make_player();
    p.activate_effect(EffectKind::DoubleFire);
    p.fire();
    assert_eq!(p.projectiles.len(), 2);
    assert!(p.projectiles[0].body.x < p.projectiles[1].body.x);
    assert_eq!(p.cooldown, 15);
}

// ── update ────────────────────────────────────────────────────────────────────

#[test]
fn projectiles_pruned_after_leaving_top() {
    let mut p = make_player();
    p.fire();
    // Muzzle at y = 529, speed 7: 76 frames later it is above the top.
    for _ in 0..75 {
        p.update();
    }
    assert_eq!(p.projectiles.len(), 1);
    assert_eq!(p.projectiles[0].body.y, 529.0 - 75.0 * 7.0);
    p.update();
    assert!(p.projectiles.is_empty());
}

// ── effects ───────────────────────────────────────────────────────────────────

#[test]
fn speed_boost_multiplies_base_speed() {
    let mut p = make_player();
    p.activate_effect(EffectKind::SpeedBoost);
    assert_eq!(p.body.speed, 7.5);
    p.move_by(1);
    assert_eq!(p.body.x, 407.5);
}

#[test]
fn shield_lasts_exactly_effect_duration() {
    let mut p = make_player();
    p.activate_effect(EffectKind::Shield);
    assert!(p.shielded());
    assert_eq!(p.effect_frames, 300);
    for _ in 0..299 {
        p.update();
    }
    assert!(p.shielded());
    assert_eq!(p.effect_frames, 1);
    p.update();
    assert!(!p.shielded());
    assert_eq!(p.effect, None);
    assert_eq!(p.effect_frames, 0);
}

#[test]
fn new_effect_overwrites_previous() {
    let mut p = make_player();
    p.activate_effect(EffectKind::SpeedBoost);
    for _ in 0..100 {
        p.update();
    }
    p.activate_effect(EffectKind::Shield);
    assert_eq!(p.effect, Some(EffectKind::Shield));
    assert_eq!(p.effect_frames, 300);
    // Speed boost no longer applies
    assert_eq!(p.body.speed, 5.0);
    assert!(!p.double_fire());
}

#[test]
fn deactivate_is_idempotent() {
    let mut p = make_player();
    p.activate_effect(EffectKind::SpeedBoost);
    p.deactivate_effects();
    let once = p.clone();
    p.deactivate_effects();
    assert_eq!(p, once);
    assert_eq!(p.body.speed, 5.0);
    assert_eq!(p.effect, None);
}
