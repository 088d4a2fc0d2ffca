//! The simulation facade the host drives once per display frame.
//!
//! Single-threaded by design: the host calls [`Simulation::update`], then
//! reads entity state for rendering. Nothing here blocks or spawns; the
//! only suspension point is the host's own frame loop.

use glam::Vec2;

use crate::api::events::SimEvent;
use crate::components::player::Player;
use crate::core::grid::CollisionGrid;
use crate::input::Pad;
use crate::level::{Level, ObjectDescriptor};
use crate::systems::{animation, interaction, kinematics};

/// Running score and coin totals, mutated only by the interaction system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub coins: u32,
}

/// Owns the player, the current level's entity lists, and the frame event
/// buffer. The collision grid stays with the host's loader and is passed
/// into each update.
pub struct Simulation {
    pub player: Player,
    pub level: Level,
    pub tally: Tally,
    events: Vec<SimEvent>,
}

impl Simulation {
    /// Create a simulation with a small player spawned at `spawn`
    /// (top-left origin) with the given collision-box size.
    pub fn new(spawn: Vec2, player_size: Vec2) -> Self {
        Self {
            player: Player::new(spawn, player_size),
            level: Level::new(),
            tally: Tally::default(),
            events: Vec::new(),
        }
    }

    /// Swap in a new level's entities and reposition the player. The
    /// player itself persists across transitions: size, vitality, and
    /// the score tally carry over.
    pub fn load_level(&mut self, objects: &[ObjectDescriptor], spawn: Vec2, tile: f32) {
        self.level.populate(objects, tile);
        self.player.place_at(spawn);
    }

    /// Advance the whole simulation by one fixed-rate frame.
    ///
    /// Order: player input/physics, then enemy, platform, and collectible
    /// kinematics, then interaction resolution, then animation selection.
    pub fn update(&mut self, pad: &Pad, grid: &CollisionGrid, tile: f32) {
        self.events.clear();

        self.player.update(pad, grid, tile);

        let player_x = self.player.body.pos.x;
        kinematics::update_enemies(&mut self.level.enemies, player_x, grid, tile);
        kinematics::update_platforms(&mut self.level.platforms);
        kinematics::update_collectibles(&mut self.level.collectibles, grid, tile);

        interaction::resolve(
            &mut self.player,
            &mut self.level,
            pad,
            tile,
            &mut self.tally,
            &mut self.events,
        );

        animation::apply(&mut self.player);
    }

    /// Events emitted by the most recent frame.
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collectible::CollectibleKind;
    use crate::level::ObjectKind;

    const TILE: f32 = 8.0;

    fn floored_grid() -> CollisionGrid {
        let mut grid = CollisionGrid::new(32, 16);
        grid.fill_row(12, 0, 31);
        grid
    }

    fn sim_on_floor() -> Simulation {
        // Feet flush on the floor at y = 96.
        Simulation::new(Vec2::new(16.0, 96.0 - 14.0), Vec2::new(8.0, 14.0))
    }

    #[test]
    fn events_clear_every_frame() {
        let grid = floored_grid();
        let mut sim = sim_on_floor();
        let json = r#"[{ "type": "coin", "x": 16, "y": 96, "width": 8, "height": 8 }]"#;
        let objects: Vec<ObjectDescriptor> = serde_json::from_str(json).unwrap();
        sim.load_level(&objects, Vec2::new(16.0, 96.0 - 14.0), TILE);

        sim.update(&Pad::default(), &grid, TILE);
        assert_eq!(sim.events().len(), 1);
        assert_eq!(sim.tally.coins, 1);

        sim.update(&Pad::default(), &grid, TILE);
        assert!(sim.events().is_empty());
        assert_eq!(sim.tally.coins, 1);
    }

    #[test]
    fn load_level_replaces_entities_and_keeps_tally() {
        let grid = floored_grid();
        let mut sim = sim_on_floor();
        let json = r#"[{ "type": "coin", "x": 16, "y": 96, "width": 8, "height": 8 }]"#;
        let objects: Vec<ObjectDescriptor> = serde_json::from_str(json).unwrap();
        sim.load_level(&objects, Vec2::new(16.0, 96.0 - 14.0), TILE);
        sim.update(&Pad::default(), &grid, TILE);
        assert_eq!(sim.tally.coins, 1);

        sim.load_level(&[], Vec2::new(40.0, 40.0), TILE);
        assert!(sim.level.collectibles.is_empty());
        assert_eq!(sim.tally.coins, 1, "tally persists across levels");
        assert_eq!(sim.player.body.pos, Vec2::new(40.0, 40.0));
        assert_eq!(sim.player.body.vel, Vec2::ZERO);
    }

    #[test]
    fn frame_ends_with_animation_selected() {
        let grid = floored_grid();
        let mut sim = sim_on_floor();
        // Settle, then walk right.
        for _ in 0..10 {
            sim.update(&Pad::default(), &grid, TILE);
        }
        let pad = Pad {
            right: true,
            ..Pad::default()
        };
        sim.update(&pad, &grid, TILE);
        assert_eq!(sim.player.anim.current, "small_walk");
        assert!(!sim.player.mirror);
    }

    #[test]
    fn popped_coins_join_the_collectible_list() {
        let grid = floored_grid();
        let mut sim = sim_on_floor();
        let json = r#"[{ "type": "box", "x": 16, "y": 72, "height": 8 }]"#;
        let objects: Vec<ObjectDescriptor> = serde_json::from_str(json).unwrap();
        sim.load_level(&objects, Vec2::new(16.0, 96.0 - 14.0), TILE);

        // Settle, then jump into the box overhead (top at y = 64, head at 82).
        for _ in 0..10 {
            sim.update(&Pad::default(), &grid, TILE);
        }
        let jump = Pad {
            jump: true,
            jump_pressed: true,
            ..Pad::default()
        };
        sim.update(&jump, &grid, TILE);
        let mut triggered = false;
        for _ in 0..30 {
            sim.update(&Pad::default(), &grid, TILE);
            if !sim.level.boxes[0].active {
                triggered = true;
                break;
            }
        }
        assert!(triggered, "jump should reach the box");
        assert_eq!(sim.tally.coins, 1);
        assert_eq!(sim.level.collectibles.len(), 1);
        assert_eq!(sim.level.collectibles[0].kind, CollectibleKind::Coin);
    }
}
