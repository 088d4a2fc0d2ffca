//! The controllable character and its state machine.
//!
//! Size, death, and invulnerability transitions live here as explicit
//! methods; the interaction system calls them rather than poking fields.
//! Death is terminal for the life: input handling stops and only the
//! slow death arc keeps integrating.

use glam::Vec2;
use log::debug;

use crate::components::animation::AnimationState;
use crate::core::grid::CollisionGrid;
use crate::core::physics::{self, Body, GRAVITY};
use crate::input::Pad;

pub const WALK_SPEED: f32 = 1.2;
pub const RUN_SPEED: f32 = 2.4;
pub const BOOST_SPEED: f32 = 9.8;
pub const JUMP_IMPULSE: f32 = -6.0;
pub const DEATH_IMPULSE: f32 = -4.0;
pub const INVULNERABLE_FRAMES: u32 = 120;

/// Extra collision-box height gained by growing.
const BIG_HEIGHT_BONUS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSize {
    Small,
    Big,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Horizontal facing: -1 left, +1 right.
    pub facing: i8,
    pub size: PlayerSize,
    pub ducking: bool,
    /// Terminal, one-way.
    pub dead: bool,
    pub invulnerable_timer: u32,
    pub anim: AnimationState,
    /// Render the current clip horizontally flipped.
    pub mirror: bool,
    small_size: Vec2,
    big_size: Vec2,
}

impl Player {
    /// Spawn a small player whose feet rest at `spawn.y + size.y`.
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(spawn, size),
            facing: 1,
            size: PlayerSize::Small,
            ducking: false,
            dead: false,
            invulnerable_timer: 0,
            anim: AnimationState::new(),
            mirror: false,
            small_size: size,
            big_size: size + Vec2::new(0.0, BIG_HEIGHT_BONUS),
        }
    }

    pub fn invulnerable(&self) -> bool {
        self.invulnerable_timer > 0
    }

    /// Grow to big, keeping the feet position fixed. No-op when already big.
    pub fn grow(&mut self) {
        if self.size == PlayerSize::Big {
            return;
        }
        let delta = self.big_size.y - self.body.size.y;
        self.size = PlayerSize::Big;
        self.body.size = self.big_size;
        self.body.pos.y -= delta;
        self.ducking = false;
        debug!("player grew to big");
    }

    /// Shrink to small, keeping the feet position fixed. No-op when small.
    pub fn shrink(&mut self) {
        if self.size == PlayerSize::Small {
            return;
        }
        let delta = self.body.size.y - self.small_size.y;
        self.size = PlayerSize::Small;
        self.body.size = self.small_size;
        self.body.pos.y += delta;
        debug!("player shrank to small");
    }

    /// Take a hit. Big players shrink and get mercy frames; small players
    /// die with a fixed upward death impulse. No-op while invulnerable
    /// or already dead.
    pub fn hit(&mut self) {
        if self.dead || self.invulnerable() {
            return;
        }
        if self.size == PlayerSize::Big {
            self.shrink();
            self.invulnerable_timer = INVULNERABLE_FRAMES;
            debug!("player hit, invulnerable for {INVULNERABLE_FRAMES} frames");
        } else {
            self.dead = true;
            self.body.vel.x = 0.0;
            self.body.vel.y = DEATH_IMPULSE;
            debug!("player died");
        }
    }

    /// Upward rebound after stomping an enemy.
    pub fn bounce(&mut self) {
        self.body.vel.y = JUMP_IMPULSE * 0.5;
    }

    /// Reposition for a respawn or level transition. Vitality and size
    /// carry across levels; only the kinematic state resets.
    pub fn place_at(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.body.grounded = false;
    }

    /// One frame of input mapping plus grid-resolved movement.
    pub fn update(&mut self, pad: &Pad, grid: &CollisionGrid, tile: f32) {
        if self.invulnerable_timer > 0 {
            self.invulnerable_timer -= 1;
        }

        if self.dead {
            // Death arc: half gravity, no input, no grid resolution.
            self.body.vel.y += GRAVITY * 0.5;
            self.body.pos.y += self.body.vel.y;
            return;
        }

        let speed = if pad.run {
            RUN_SPEED
        } else if pad.boost {
            BOOST_SPEED
        } else {
            WALK_SPEED
        };
        self.body.vel.x = (pad.right as i32 - pad.left as i32) as f32 * speed;

        if pad.jump_pressed && self.body.grounded {
            self.body.vel.y = JUMP_IMPULSE;
        }
        self.ducking = pad.down && self.body.grounded && self.size == PlayerSize::Big;

        self.body.vel.y += GRAVITY;
        physics::step(&mut self.body, grid, tile);
    }
}
