//! Level-transition trigger regions.

use glam::Vec2;
use serde::Deserialize;

use crate::input::Pad;

/// Direction the player must be holding to take the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApproachDir {
    Left,
    Right,
    Up,
    Down,
}

impl ApproachDir {
    /// Whether the pad currently holds this direction.
    pub fn held(self, pad: &Pad) -> bool {
        match self {
            ApproachDir::Left => pad.left,
            ApproachDir::Right => pad.right,
            ApproachDir::Up => pad.up,
            ApproachDir::Down => pad.down,
        }
    }
}

/// Where a portal leads: target level plus spawn point.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub level: String,
    pub spawn: Vec2,
    /// `None` means the portal fires on overlap alone (exit doors).
    pub dir: Option<ApproachDir>,
}

#[derive(Debug, Clone)]
pub struct Portal {
    pub pos: Vec2,
    pub size: Vec2,
    pub destination: Destination,
}

impl Portal {
    /// Whether an overlapping player satisfies the approach gate.
    pub fn accepts(&self, pad: &Pad) -> bool {
        match self.destination.dir {
            None => true,
            Some(dir) => dir.held(pad),
        }
    }
}
