//! Entity interaction resolution: the player against every other entity
//! list, run once per frame after the player's own tile collision.
//!
//! Resolution order matches entity priority: enemies, boxes, bricks,
//! collectibles, portals, platforms. Static rectangles (boxes, bricks)
//! resolve along the axis of smallest interpenetration; that tie-break
//! is the contract, including its corner-clip quirks.

use glam::Vec2;
use log::debug;

use crate::api::events::SimEvent;
use crate::api::sim::Tally;
use crate::components::block::BoxContent;
use crate::components::collectible::{Collectible, CollectibleKind, COIN_POINTS};
use crate::components::player::Player;
use crate::core::physics::{aabb_overlap, overlap_depths};
use crate::input::Pad;
use crate::level::Level;

/// Max vertical penetration of the player's feet into an enemy for the
/// contact to count as a stomp.
pub const STOMP_THRESHOLD: f32 = 4.0;

/// Vertical band below a platform top within which the player is carried.
pub const CARRY_TOLERANCE: f32 = 4.0;

/// Fraction of the impact speed kept as downward bounce after heading a
/// block from below.
const HEAD_BOUNCE_DAMP: f32 = 0.2;

/// Resolve one frame of player-vs-world interactions.
pub fn resolve(
    player: &mut Player,
    level: &mut Level,
    pad: &Pad,
    tile: f32,
    tally: &mut Tally,
    events: &mut Vec<SimEvent>,
) {
    resolve_enemies(player, level, events);
    resolve_boxes(player, level, tile, tally, events);
    resolve_bricks(player, level, events);
    resolve_collectibles(player, level, tally, events);
    resolve_portals(player, level, pad, events);
    resolve_platforms(player, level);
}

fn resolve_enemies(player: &mut Player, level: &mut Level, events: &mut Vec<SimEvent>) {
    for enemy in level.enemies.iter_mut() {
        if !enemy.alive || !enemy.activated {
            continue;
        }
        if !player.body.overlaps(&enemy.body) {
            continue;
        }

        let feet_penetration = player.body.pos.y + player.body.size.y - enemy.body.pos.y;
        if player.body.vel.y > 0.0 && feet_penetration < STOMP_THRESHOLD {
            enemy.kill();
            player.bounce();
            events.push(SimEvent::EnemyStomped);
        } else if !player.dead {
            player.hit();
            if player.dead {
                events.push(SimEvent::PlayerDied);
            }
        }
    }
}

fn resolve_boxes(
    player: &mut Player,
    level: &mut Level,
    tile: f32,
    tally: &mut Tally,
    events: &mut Vec<SimEvent>,
) {
    // Spawns are deferred so the collectible list is not mutated while
    // other boxes are still being resolved.
    let mut spawned: Vec<Collectible> = Vec::new();

    for item_box in level.boxes.iter_mut() {
        if !aabb_overlap(player.body.pos, player.body.size, item_box.pos, item_box.size) {
            continue;
        }
        let depths = overlap_depths(player.body.pos, player.body.size, item_box.pos, item_box.size);

        if depths.x < depths.y {
            // Side contact: push out horizontally.
            if player.body.pos.x < item_box.pos.x {
                player.body.pos.x = item_box.pos.x - player.body.size.x;
            } else {
                player.body.pos.x = item_box.pos.x + item_box.size.x;
            }
            player.body.vel.x = 0.0;
        } else if player.body.pos.y < item_box.pos.y {
            // Landing on top.
            player.body.pos.y = item_box.pos.y - player.body.size.y;
            player.body.vel.y = 0.0;
            player.body.grounded = true;
        } else {
            // Headed from below.
            if player.body.vel.y < 0.0 {
                if let Some(content) = item_box.trigger() {
                    let above = item_box.pos - Vec2::new(0.0, tile);
                    match content {
                        BoxContent::Coin | BoxContent::RotatingCoin => {
                            tally.coins += 1;
                            tally.score += COIN_POINTS;
                            events.push(SimEvent::CoinCollected { points: COIN_POINTS });
                            let kind = if content == BoxContent::RotatingCoin {
                                CollectibleKind::RotatingCoin
                            } else {
                                CollectibleKind::Coin
                            };
                            spawned.push(Collectible::rising_coin(above, Vec2::splat(tile), kind));
                        }
                        BoxContent::Mushroom => {
                            spawned.push(Collectible::mushroom(
                                above,
                                Vec2::splat(tile),
                                player.facing as f32,
                                -3.0,
                            ));
                        }
                        BoxContent::Nothing => {}
                    }
                }
            }
            player.body.pos.y = item_box.pos.y + item_box.size.y;
            player.body.vel.y = player.body.vel.y.abs() * HEAD_BOUNCE_DAMP;
        }
    }

    level.collectibles.extend(spawned);
}

fn resolve_bricks(player: &mut Player, level: &mut Level, events: &mut Vec<SimEvent>) {
    for brick in level.bricks.iter_mut() {
        if brick.destroyed {
            continue;
        }
        if !aabb_overlap(player.body.pos, player.body.size, brick.pos, brick.size) {
            continue;
        }
        let depths = overlap_depths(player.body.pos, player.body.size, brick.pos, brick.size);

        if depths.x < depths.y {
            if player.body.pos.x < brick.pos.x {
                player.body.pos.x = brick.pos.x - player.body.size.x;
            } else {
                player.body.pos.x = brick.pos.x + brick.size.x;
            }
            player.body.vel.x = 0.0;
        } else if player.body.pos.y < brick.pos.y {
            player.body.pos.y = brick.pos.y - player.body.size.y;
            player.body.vel.y = 0.0;
            player.body.grounded = true;
        } else if player.body.vel.y < 0.0 {
            // Rising head-hit chips the brick; no repositioning, only the
            // damped downward rebound.
            player.body.vel.y = player.body.vel.y.abs() * HEAD_BOUNCE_DAMP;
            brick.strike();
            if brick.destroyed {
                events.push(SimEvent::BrickDestroyed);
            }
        } else {
            player.body.pos.y = brick.pos.y + brick.size.y;
            player.body.vel.y = player.body.vel.y.abs() * HEAD_BOUNCE_DAMP;
        }
    }
}

fn resolve_collectibles(
    player: &mut Player,
    level: &mut Level,
    tally: &mut Tally,
    events: &mut Vec<SimEvent>,
) {
    for item in level.collectibles.iter_mut() {
        if item.collected || !player.body.overlaps(&item.body) {
            continue;
        }
        if !item.collect() {
            continue;
        }
        match item.kind {
            CollectibleKind::Mushroom => {
                player.grow();
                tally.score += item.points;
                events.push(SimEvent::PowerUp);
            }
            CollectibleKind::Coin | CollectibleKind::RotatingCoin => {
                tally.coins += 1;
                tally.score += item.points;
                events.push(SimEvent::CoinCollected { points: item.points });
            }
            CollectibleKind::Other => {
                // Reserved subtypes collect silently.
            }
        }
    }
}

fn resolve_portals(player: &Player, level: &Level, pad: &Pad, events: &mut Vec<SimEvent>) {
    for portal in &level.portals {
        if !aabb_overlap(player.body.pos, player.body.size, portal.pos, portal.size) {
            continue;
        }
        if portal.accepts(pad) {
            debug!("portal taken to {}", portal.destination.level);
            events.push(SimEvent::LevelTransition {
                destination: portal.destination.clone(),
            });
        }
    }
}

fn resolve_platforms(player: &mut Player, level: &Level) {
    for platform in &level.platforms {
        let feet = player.body.pos.y + player.body.size.y;
        let horizontally_over = player.body.pos.x < platform.pos.x + platform.size.x
            && player.body.pos.x + player.body.size.x > platform.pos.x;
        let in_carry_band =
            feet > platform.pos.y && feet < platform.pos.y + platform.size.y + CARRY_TOLERANCE;

        if horizontally_over && in_carry_band && player.body.vel.y >= 0.0 {
            // Ground to the platform top, then ride its motion.
            player.body.pos.y = platform.pos.y - player.body.size.y;
            player.body.vel.y = 0.0;
            player.body.grounded = true;
            player.body.pos += platform.vel;
        }
    }
}
