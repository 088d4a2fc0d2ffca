//! Level aggregate and spawn descriptors.
//!
//! The simulation never reads files: the host's tilemap loader hands it
//! already-parsed JSON (or descriptor values built in code). Missing or
//! malformed object properties fall back to fixed defaults rather than
//! failing the load.

use glam::Vec2;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::components::block::{BoxContent, Brick, ItemBox};
use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::enemy::Enemy;
use crate::components::platform::{Platform, PlatformAxis};
use crate::components::portal::{ApproachDir, Destination, Portal};
use crate::core::grid::CollisionGrid;

/// Default enemy collision box, in logical units.
const ENEMY_SIZE: Vec2 = Vec2::new(8.0, 8.0);
/// Default block collision box.
const BLOCK_SIZE: Vec2 = Vec2::new(8.0, 8.0);

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("malformed level json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("collision layer is {got} cells, expected {expected} ({width}x{height})")]
    GridSize {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },
}

/// Enumerated object kinds the loader can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "goomba")]
    Goomba,
    #[serde(rename = "box")]
    ItemBox,
    #[serde(rename = "brick")]
    Brick,
    #[serde(rename = "collectible")]
    Collectible,
    #[serde(rename = "coin")]
    Coin,
    #[serde(rename = "rotatingCoin")]
    RotatingCoin,
    #[serde(rename = "portal")]
    Portal,
    #[serde(rename = "platformMovingUpAndDown")]
    PlatformVertical,
    #[serde(rename = "platformMovingLeftAndRight")]
    PlatformHorizontal,
}

/// Free-form per-object properties. Every field is optional; spawning
/// applies the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObjectProperties {
    /// Box content; missing means coin.
    pub content: Option<BoxContent>,
    /// Brick durability; missing means 1.
    pub hits: Option<u32>,
    /// Collectible subtype; missing means coin.
    #[serde(rename = "kindOfCollectible")]
    pub kind_of_collectible: Option<CollectibleKind>,
    /// Collectible walk direction or portal approach gate.
    pub direction: Option<ApproachDir>,
    /// Platform oscillation bound.
    pub distance: Option<f32>,
    /// Portal target spawn point.
    #[serde(rename = "spawnX")]
    pub spawn_x: Option<f32>,
    #[serde(rename = "spawnY")]
    pub spawn_y: Option<f32>,
    /// Portal target level name.
    pub level: Option<String>,
}

/// One spawnable object from the level's object layer.
///
/// `y` is the object's bottom edge (tile-editor convention); spawning
/// subtracts the height to get the top-left origin.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDescriptor {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: ObjectProperties,
}

/// Raw collision layer: nonzero cells are solid.
#[derive(Debug, Clone, Deserialize)]
pub struct CollisionDef {
    pub width: u32,
    pub height: u32,
    pub solids: Vec<u8>,
}

impl CollisionDef {
    pub fn build_grid(&self) -> Result<CollisionGrid, LevelError> {
        let expected = (self.width * self.height) as usize;
        if self.solids.len() != expected {
            return Err(LevelError::GridSize {
                width: self.width,
                height: self.height,
                expected,
                got: self.solids.len(),
            });
        }
        Ok(CollisionGrid::from_cells(
            self.width,
            self.height,
            self.solids.iter().map(|&c| c != 0).collect(),
        ))
    }
}

/// A whole level as handed over by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub collision: CollisionDef,
    #[serde(default)]
    pub objects: Vec<ObjectDescriptor>,
}

impl LevelDef {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// All non-player entities of the current level, owned by the simulation.
/// Cleared and repopulated on every level transition.
#[derive(Debug, Default)]
pub struct Level {
    pub enemies: Vec<Enemy>,
    pub boxes: Vec<ItemBox>,
    pub bricks: Vec<Brick>,
    pub collectibles: Vec<Collectible>,
    pub platforms: Vec<Platform>,
    pub portals: Vec<Portal>,
}

impl Level {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
        self.boxes.clear();
        self.bricks.clear();
        self.collectibles.clear();
        self.platforms.clear();
        self.portals.clear();
    }

    /// Replace the current entity population from spawn descriptors.
    pub fn populate(&mut self, objects: &[ObjectDescriptor], tile: f32) {
        self.clear();
        for object in objects {
            self.spawn(object, tile);
        }
        debug!(
            "level populated: {} enemies, {} boxes, {} bricks, {} collectibles, {} platforms, {} portals",
            self.enemies.len(),
            self.boxes.len(),
            self.bricks.len(),
            self.collectibles.len(),
            self.platforms.len(),
            self.portals.len()
        );
    }

    fn spawn(&mut self, object: &ObjectDescriptor, tile: f32) {
        let pos = Vec2::new(object.x, object.y - object.height);
        let size = |fallback: Vec2| {
            Vec2::new(
                if object.width > 0.0 { object.width } else { fallback.x },
                if object.height > 0.0 { object.height } else { fallback.y },
            )
        };

        match object.kind {
            ObjectKind::Goomba => {
                self.enemies.push(Enemy::new(pos, ENEMY_SIZE));
            }
            ObjectKind::ItemBox => {
                let content = object.properties.content.unwrap_or(BoxContent::Coin);
                self.boxes.push(ItemBox::new(pos, BLOCK_SIZE, content));
            }
            ObjectKind::Brick => {
                let hits = object.properties.hits.unwrap_or(1);
                self.bricks.push(Brick::new(pos, BLOCK_SIZE, hits));
            }
            ObjectKind::Collectible => {
                let kind = object
                    .properties
                    .kind_of_collectible
                    .unwrap_or(CollectibleKind::Coin);
                let item_size = size(Vec2::splat(tile));
                if kind == CollectibleKind::Mushroom {
                    let dir = match object.properties.direction {
                        Some(ApproachDir::Left) => -1.0,
                        _ => 1.0,
                    };
                    self.collectibles
                        .push(Collectible::mushroom(pos, item_size, dir, 0.0));
                } else {
                    self.collectibles.push(Collectible::fixed(pos, item_size, kind));
                }
            }
            ObjectKind::Coin => {
                self.collectibles.push(Collectible::fixed(
                    pos,
                    size(Vec2::splat(tile)),
                    CollectibleKind::Coin,
                ));
            }
            ObjectKind::RotatingCoin => {
                self.collectibles.push(Collectible::fixed(
                    pos,
                    size(Vec2::splat(tile)),
                    CollectibleKind::RotatingCoin,
                ));
            }
            ObjectKind::Portal => {
                let props = &object.properties;
                if props.level.is_none() && object.name.is_empty() {
                    warn!("portal at ({}, {}) has no destination, skipped", object.x, object.y);
                    return;
                }
                self.portals.push(Portal {
                    pos,
                    size: size(Vec2::splat(tile)),
                    destination: Destination {
                        level: props.level.clone().unwrap_or_else(|| object.name.clone()),
                        spawn: Vec2::new(props.spawn_x.unwrap_or(0.0), props.spawn_y.unwrap_or(0.0)),
                        dir: props.direction,
                    },
                });
            }
            ObjectKind::PlatformVertical => {
                self.platforms.push(Platform::new(
                    pos,
                    size(Vec2::splat(tile)),
                    PlatformAxis::Vertical,
                    object.properties.distance,
                ));
            }
            ObjectKind::PlatformHorizontal => {
                self.platforms.push(Platform::new(
                    pos,
                    size(Vec2::splat(tile)),
                    PlatformAxis::Horizontal,
                    object.properties.distance,
                ));
            }
        }
    }

    /// Lift tile-encoded coins out of a foreground layer: spawn a fixed
    /// coin for every matching tile id, zero the tile, and open up the
    /// collision cell. The only sanctioned grid mutation.
    pub fn lift_tile_coins(
        &mut self,
        layer: &mut [u32],
        grid: &mut CollisionGrid,
        coin_ids: &[u32],
        tile: f32,
    ) {
        for ty in 0..grid.height {
            for tx in 0..grid.width {
                let idx = (ty * grid.width + tx) as usize;
                let Some(id) = layer.get(idx).copied() else {
                    continue;
                };
                if !coin_ids.contains(&id) {
                    continue;
                }
                layer[idx] = 0;
                grid.clear_tile(tx, ty);
                self.collectibles.push(Collectible::fixed(
                    Vec2::new(tx as f32 * tile, ty as f32 * tile),
                    Vec2::splat(tile),
                    CollectibleKind::Coin,
                ));
            }
        }
    }
}
