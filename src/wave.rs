/// The enemy swarm.  Members move as one: the whole wave reverses and drops
/// together when any member is about to leave the screen.

use crate::config::GameConfig;
use crate::entities::Enemy;

/// Per-render increment of each enemy's animation phase.
pub const ANIMATION_STEP: f32 = 0.1;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wave {
    /// Row-major spawn order; collision ties resolve in this order.
    pub enemies: Vec<Enemy>,
}

impl Wave {
    /// Fresh grid of `rows x cols` enemies moving right at `speed`.
    pub fn spawn(config: &GameConfig, rows: usize, cols: usize, speed: f32) -> Self {
        let (ox, oy) = config.grid_origin;
        let enemies = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                Enemy::new(
                    ox + col as f32 * config.col_pitch,
                    oy + row as f32 * config.row_pitch,
                    config.enemy_size,
                    speed,
                )
            })
            .collect();
        Wave { enemies }
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Whether any member's next step in its current direction would cross
    /// the left edge (moving left) or the right edge (moving right).
    pub fn at_edge(&self, screen_width: f32) -> bool {
        self.enemies.iter().any(|e| {
            let next_x = e.body.x + e.body.speed * e.direction;
            (e.direction < 0.0 && next_x < 0.0)
                || (e.direction > 0.0 && next_x > screen_width - e.body.width)
        })
    }

    /// One synchronised step: either every member reverses and drops by
    /// `drop`, or every member slides horizontally.
    pub fn advance(&mut self, screen_width: f32, drop: f32) -> bool {
        let bounce = self.at_edge(screen_width);
        for enemy in &mut self.enemies {
            if bounce {
                enemy.direction = -enemy.direction;
                enemy.body.y += drop;
            } else {
                enemy.body.x += enemy.body.speed * enemy.direction;
            }
        }
        bounce
    }

    pub fn animate(&mut self) {
        for enemy in &mut self.enemies {
            enemy.phase += ANIMATION_STEP;
        }
    }
}
