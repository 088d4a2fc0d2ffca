//! Walking enemies.
//!
//! Enemies spawn dormant and only start simulating once the player comes
//! within the activation radius; see `systems::kinematics` for the
//! per-frame walk/gravity/probe logic.

use glam::Vec2;

use crate::core::physics::Body;

/// Horizontal drift applied at spawn. Enemies start walking left.
pub const SPAWN_SPEED: f32 = -0.5;

/// Frames a squashed enemy stays visible before deactivating.
pub const DEATH_FRAMES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAnim {
    Walk,
    Dead,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub alive: bool,
    /// Dormant until the player is near; also cleared once the death
    /// timer runs out so the renderer stops drawing the corpse.
    pub activated: bool,
    pub anim: EnemyAnim,
    pub death_timer: u32,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let mut body = Body::new(pos, size);
        body.vel.x = SPAWN_SPEED;
        Self {
            body,
            alive: true,
            activated: false,
            anim: EnemyAnim::Walk,
            death_timer: 0,
        }
    }

    /// Squash the enemy: dead animation, expiry timer armed.
    pub fn kill(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.anim = EnemyAnim::Dead;
        self.death_timer = DEATH_FRAMES;
    }
}
