//! Static triggerable blocks: item boxes and destructible bricks.

use glam::Vec2;
use log::debug;
use serde::Deserialize;

/// What pops out of an item box when hit from below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxContent {
    Coin,
    RotatingCoin,
    Mushroom,
    #[serde(rename = "none")]
    Nothing,
}

/// One-shot trigger block. Stays in the world after triggering but never
/// dispenses twice.
#[derive(Debug, Clone)]
pub struct ItemBox {
    pub pos: Vec2,
    pub size: Vec2,
    pub content: BoxContent,
    /// False once triggered.
    pub active: bool,
    /// True once triggered; the renderer swaps to the spent sprite.
    pub hit: bool,
}

impl ItemBox {
    pub fn new(pos: Vec2, size: Vec2, content: BoxContent) -> Self {
        Self {
            pos,
            size,
            content,
            active: true,
            hit: false,
        }
    }

    /// Trigger the box. Returns its content the first time, `None` after.
    pub fn trigger(&mut self) -> Option<BoxContent> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.hit = true;
        debug!("box triggered: {:?}", self.content);
        Some(self.content)
    }
}

/// Destructible brick with a hit counter. `destroyed` is terminal.
#[derive(Debug, Clone)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub hits: u32,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2, hits: u32) -> Self {
        Self {
            pos,
            size,
            hits: hits.max(1),
            destroyed: false,
        }
    }

    /// One hit from below. Destroys the brick when durability reaches zero.
    pub fn strike(&mut self) {
        if self.destroyed {
            return;
        }
        self.hits = self.hits.saturating_sub(1);
        if self.hits == 0 {
            self.destroyed = true;
            debug!("brick destroyed");
        }
    }
}
