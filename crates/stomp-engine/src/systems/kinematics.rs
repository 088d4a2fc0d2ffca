//! Per-frame advance of non-player entities: enemy walkers, moving
//! platforms, and self-propelled collectibles.

use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::enemy::Enemy;
use crate::components::platform::Platform;
use crate::core::grid::CollisionGrid;
use crate::core::physics::{self, GRAVITY};

/// Horizontal distance under which a dormant enemy wakes up.
pub const ACTIVATION_RADIUS: f32 = 100.0;

/// Rising coins self-expire once their fall speed exceeds this.
const COIN_EXPIRE_SPEED: f32 = 2.0;
/// Per-frame acceleration on a popped coin's arc.
const COIN_GRAVITY: f32 = 0.1;
/// Terminal fall speed for walking mushrooms.
const MUSHROOM_MAX_FALL: f32 = 6.0;

/// Advance all enemies one frame.
///
/// Enemies use a cheaper resolution than the full axis step: integrate,
/// snap onto the ground tile under the mid-foot, then probe the leading
/// edge (center height for walls, one tile below the feet for ledges)
/// and reverse on either.
pub fn update_enemies(enemies: &mut [Enemy], player_x: f32, grid: &CollisionGrid, tile: f32) {
    for enemy in enemies.iter_mut() {
        if !enemy.alive {
            if enemy.death_timer > 0 {
                enemy.death_timer -= 1;
                if enemy.death_timer == 0 {
                    enemy.activated = false;
                }
            }
            continue;
        }

        if !enemy.activated {
            if (enemy.body.pos.x - player_x).abs() < ACTIVATION_RADIUS {
                enemy.activated = true;
            }
            continue;
        }

        enemy.body.vel.y += GRAVITY * 0.5;
        enemy.body.pos += enemy.body.vel;

        // Ground snap under the mid-foot. The in-bounds check keeps an
        // enemy that walked off the bottom of the map falling.
        let feet_row = ((enemy.body.pos.y + enemy.body.size.y) / tile).floor() as i32;
        let mid_col = ((enemy.body.pos.x + enemy.body.size.x / 2.0) / tile).floor() as i32;
        if feet_row < grid.height as i32 && grid.solid(mid_col, feet_row) {
            enemy.body.pos.y = feet_row as f32 * tile - enemy.body.size.y;
            enemy.body.vel.y = 0.0;
        }

        // Leading-edge probes, one frame ahead of the walk.
        let left_col = ((enemy.body.pos.x + enemy.body.vel.x) / tile).floor() as i32;
        let right_col =
            ((enemy.body.pos.x + enemy.body.size.x + enemy.body.vel.x) / tile).floor() as i32;
        let center_row = ((enemy.body.pos.y + enemy.body.size.y / 2.0) / tile).floor() as i32;
        let ledge_row = ((enemy.body.pos.y + enemy.body.size.y + 1.0) / tile).floor() as i32;

        let vx = enemy.body.vel.x;
        let hit_wall = (vx < 0.0 && grid.solid(left_col, center_row))
            || (vx > 0.0 && grid.solid(right_col, center_row));
        let at_edge = (vx < 0.0 && !grid.solid(left_col, ledge_row))
            || (vx > 0.0 && !grid.solid(right_col, ledge_row));

        if hit_wall || at_edge {
            enemy.body.vel.x = -vx;
        }
    }
}

/// Advance all platforms one frame.
pub fn update_platforms(platforms: &mut [Platform]) {
    for platform in platforms.iter_mut() {
        platform.advance();
    }
}

/// Advance self-propelled collectibles one frame.
///
/// Popped coins fly a short arc and expire; mushrooms pace back and
/// forth using the full grid step, reversing when horizontal motion is
/// arrested (post-step speed below half the intended walk speed).
pub fn update_collectibles(items: &mut [Collectible], grid: &CollisionGrid, tile: f32) {
    for item in items.iter_mut() {
        if item.collected {
            continue;
        }
        match item.kind {
            CollectibleKind::Coin | CollectibleKind::RotatingCoin if item.rising => {
                item.body.vel.y += COIN_GRAVITY;
                item.body.pos.y += item.body.vel.y;
                if item.body.vel.y > COIN_EXPIRE_SPEED {
                    item.collected = true;
                }
            }
            CollectibleKind::Mushroom => {
                item.body.vel.x = item.move_speed * item.move_dir;
                item.body.vel.y = (item.body.vel.y + GRAVITY).min(MUSHROOM_MAX_FALL);
                let intended = item.body.vel.x;
                physics::step(&mut item.body, grid, tile);
                if item.body.vel.x.abs() < intended.abs() * 0.5 {
                    item.move_dir = -item.move_dir;
                    item.body.vel.x = item.move_speed * item.move_dir;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const TILE: f32 = 8.0;

    /// 20x16 room with an unbroken floor at row 12.
    fn floored() -> CollisionGrid {
        let mut grid = CollisionGrid::new(20, 16);
        grid.fill_row(12, 0, 19);
        grid
    }

    /// Like [`floored`] but with a gap in the floor at columns 14..=16.
    fn gapped() -> CollisionGrid {
        let mut grid = CollisionGrid::new(20, 16);
        grid.fill_row(12, 0, 13);
        grid.fill_row(12, 17, 19);
        grid
    }

    fn enemy_on_floor(x: f32) -> Enemy {
        Enemy::new(Vec2::new(x, 96.0 - 8.0), Vec2::new(8.0, 8.0))
    }

    #[test]
    fn dormant_enemy_wakes_inside_activation_radius() {
        let grid = floored();
        let mut enemies = vec![enemy_on_floor(80.0)];

        update_enemies(&mut enemies, 80.0 + ACTIVATION_RADIUS + 10.0, &grid, TILE);
        assert!(!enemies[0].activated);
        let pos = enemies[0].body.pos;
        assert_eq!(enemies[0].body.pos, pos, "dormant enemies do not move");

        update_enemies(&mut enemies, 80.0 + ACTIVATION_RADIUS - 10.0, &grid, TILE);
        assert!(enemies[0].activated);
    }

    #[test]
    fn active_enemy_walks_and_stays_on_ground() {
        let grid = floored();
        let mut enemies = vec![enemy_on_floor(80.0)];
        enemies[0].activated = true;

        let x0 = enemies[0].body.pos.x;
        for _ in 0..10 {
            update_enemies(&mut enemies, 80.0, &grid, TILE);
        }
        assert!(enemies[0].body.pos.x < x0);
        // Snapped back onto the floor every frame.
        assert_eq!(enemies[0].body.pos.y + enemies[0].body.size.y, 96.0);
    }

    #[test]
    fn enemy_reverses_at_ledge() {
        let grid = gapped();
        // Walking left toward the gap at columns 14..=16.
        let mut enemies = vec![enemy_on_floor(140.0)];
        enemies[0].activated = true;

        for _ in 0..80 {
            update_enemies(&mut enemies, 140.0, &grid, TILE);
        }
        assert!(
            enemies[0].body.vel.x > 0.0,
            "enemy should have turned around at the gap edge"
        );
        assert!(enemies[0].body.pos.x >= 136.0 - TILE);
    }

    #[test]
    fn enemy_reverses_at_wall() {
        let mut grid = floored();
        for ty in 0..12 {
            grid.set_solid(12, ty);
        }
        // Walking left into the wall at column 12 (x = 96..104).
        let mut enemies = vec![enemy_on_floor(110.0)];
        enemies[0].activated = true;

        for _ in 0..40 {
            update_enemies(&mut enemies, 110.0, &grid, TILE);
        }
        assert!(enemies[0].body.vel.x > 0.0);
        assert!(enemies[0].body.pos.x >= 104.0 - 1.0);
    }

    #[test]
    fn dead_enemy_expires_and_deactivates() {
        let grid = floored();
        let mut enemies = vec![enemy_on_floor(80.0)];
        enemies[0].activated = true;
        enemies[0].kill();

        let pos = enemies[0].body.pos;
        for _ in 0..crate::components::enemy::DEATH_FRAMES {
            update_enemies(&mut enemies, 80.0, &grid, TILE);
        }
        assert!(!enemies[0].activated);
        assert_eq!(enemies[0].body.pos, pos, "corpses do not move");
    }

    #[test]
    fn rising_coin_arcs_then_expires() {
        let grid = floored();
        let mut items = vec![Collectible::rising_coin(
            Vec2::new(40.0, 40.0),
            Vec2::splat(TILE),
            CollectibleKind::Coin,
        )];

        let mut peak = f32::MAX;
        for _ in 0..60 {
            update_collectibles(&mut items, &grid, TILE);
            peak = peak.min(items[0].body.pos.y);
            if items[0].collected {
                break;
            }
        }
        assert!(peak < 40.0, "coin should rise before falling");
        assert!(items[0].collected, "coin should self-expire");
    }

    #[test]
    fn fixed_coin_stays_put() {
        let grid = floored();
        let mut items = vec![Collectible::fixed(
            Vec2::new(40.0, 40.0),
            Vec2::splat(TILE),
            CollectibleKind::Coin,
        )];
        for _ in 0..30 {
            update_collectibles(&mut items, &grid, TILE);
        }
        assert!(!items[0].collected);
        assert_eq!(items[0].body.pos, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn mushroom_reverses_when_blocked() {
        let mut grid = floored();
        for ty in 0..12 {
            grid.set_solid(12, ty); // wall at x = 96..104
        }
        let mut items = vec![Collectible::mushroom(
            Vec2::new(120.0, 96.0 - TILE),
            Vec2::splat(TILE),
            -1.0,
            0.0,
        )];

        for _ in 0..60 {
            update_collectibles(&mut items, &grid, TILE);
        }
        assert_eq!(items[0].move_dir, 1.0, "mushroom should bounce off the wall");
        assert!(items[0].body.pos.x > 104.0 - 1.0);
    }
}
