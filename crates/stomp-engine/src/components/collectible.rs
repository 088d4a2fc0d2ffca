//! Pickups: coins, rotating coins, mushrooms, and reserved kinds.

use glam::Vec2;
use serde::Deserialize;

use crate::core::physics::Body;

pub const MUSHROOM_SPEED: f32 = 0.8;
pub const MUSHROOM_POINTS: u32 = 1000;
pub const COIN_POINTS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectibleKind {
    Coin,
    RotatingCoin,
    Mushroom,
    /// Reserved subtypes (flower, star, ...) collect without effect.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone)]
pub struct Collectible {
    pub body: Body,
    pub kind: CollectibleKind,
    /// Terminal, set only through [`Collectible::collect`].
    pub collected: bool,
    /// Coins popped out of boxes rise and then fall until self-expiry;
    /// coins placed in the level just sit there.
    pub rising: bool,
    /// Mushroom walk direction: -1 or +1.
    pub move_dir: f32,
    pub move_speed: f32,
    pub points: u32,
}

impl Collectible {
    /// A static coin (or reserved pickup) placed in the level.
    pub fn fixed(pos: Vec2, size: Vec2, kind: CollectibleKind) -> Self {
        Self {
            body: Body::new(pos, size),
            kind,
            collected: false,
            rising: false,
            move_dir: 0.0,
            move_speed: 0.0,
            points: COIN_POINTS,
        }
    }

    /// A coin knocked out of a box: launched upward, expires on the way down.
    pub fn rising_coin(pos: Vec2, size: Vec2, kind: CollectibleKind) -> Self {
        let mut item = Self::fixed(pos, size, kind);
        item.body.vel.y = -2.0;
        item.rising = true;
        item
    }

    /// A walking mushroom, popped upward and then pacing the ground.
    pub fn mushroom(pos: Vec2, size: Vec2, move_dir: f32, launch_vy: f32) -> Self {
        Self {
            body: {
                let mut body = Body::new(pos, size);
                body.vel.y = launch_vy;
                body
            },
            kind: CollectibleKind::Mushroom,
            collected: false,
            rising: false,
            move_dir: if move_dir < 0.0 { -1.0 } else { 1.0 },
            move_speed: MUSHROOM_SPEED,
            points: MUSHROOM_POINTS,
        }
    }

    /// One-shot collect. Returns true the first time only.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_fires_exactly_once() {
        let mut c = Collectible::fixed(Vec2::ZERO, Vec2::new(8.0, 8.0), CollectibleKind::Coin);
        assert!(c.collect());
        assert!(!c.collect());
        assert!(c.collected);
    }

    #[test]
    fn rising_coin_launches_upward() {
        let c = Collectible::rising_coin(Vec2::ZERO, Vec2::new(8.0, 8.0), CollectibleKind::Coin);
        assert!(c.rising);
        assert_eq!(c.body.vel.y, -2.0);
    }

    #[test]
    fn mushroom_direction_is_normalized() {
        let c = Collectible::mushroom(Vec2::ZERO, Vec2::new(8.0, 8.0), -3.0, -2.5);
        assert_eq!(c.move_dir, -1.0);
        assert_eq!(c.points, MUSHROOM_POINTS);
    }

    #[test]
    fn unknown_subtype_parses_as_other() {
        let kind: CollectibleKind = serde_json::from_str("\"flower\"").unwrap();
        assert_eq!(kind, CollectibleKind::Other);
    }
}
