//! Kinematic moving platforms: single-axis bounded oscillation.

use glam::Vec2;
use serde::Deserialize;

pub const PLATFORM_SPEED: f32 = 0.5;
pub const DEFAULT_DISTANCE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformAxis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    /// Constant-magnitude velocity on the active axis; the other component
    /// is always zero.
    pub vel: Vec2,
    pub initial: Vec2,
    /// Oscillation bound measured from the initial position.
    pub distance: f32,
    pub axis: PlatformAxis,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2, axis: PlatformAxis, distance: Option<f32>) -> Self {
        let vel = match axis {
            PlatformAxis::Vertical => Vec2::new(0.0, PLATFORM_SPEED),
            PlatformAxis::Horizontal => Vec2::new(PLATFORM_SPEED, 0.0),
        };
        Self {
            pos,
            size,
            vel,
            initial: pos,
            distance: distance.unwrap_or(DEFAULT_DISTANCE),
            axis,
        }
    }

    /// One frame of oscillation: integrate, flip the velocity sign past
    /// either bound.
    pub fn advance(&mut self) {
        match self.axis {
            PlatformAxis::Vertical => {
                self.pos.y += self.vel.y;
                if self.pos.y > self.initial.y + self.distance && self.vel.y > 0.0 {
                    self.vel.y = -self.vel.y;
                } else if self.pos.y < self.initial.y && self.vel.y < 0.0 {
                    self.vel.y = -self.vel.y;
                }
            }
            PlatformAxis::Horizontal => {
                self.pos.x += self.vel.x;
                if self.pos.x > self.initial.x + self.distance && self.vel.x > 0.0 {
                    self.vel.x = -self.vel.x;
                } else if self.pos.x < self.initial.x && self.vel.x < 0.0 {
                    self.vel.x = -self.vel.x;
                }
            }
        }
    }
}
