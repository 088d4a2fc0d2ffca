//! Headless demo: runs a scripted input tape through a tiny level and
//! prints the events each frame produces.
//!
//! Run with `RUST_LOG=debug cargo run -p headless-run` to also see the
//! engine's own tracing.

use glam::Vec2;
use log::info;
use stomp_engine::{LevelDef, Pad, PadTracker, SimEvent, Simulation};

const TILE: f32 = 8.0;
const PLAYER_SIZE: Vec2 = Vec2::new(8.0, 14.0);
const FRAMES: u32 = 400;

/// 40x16-tile room: floor along the bottom, an item box overhead, a coin,
/// a patrolling enemy, and a down-gated portal at the far end.
fn demo_level() -> LevelDef {
    let mut solids = vec![0u8; 40 * 16];
    for tx in 0..40 {
        solids[12 * 40 + tx] = 1;
    }
    let json = serde_json::json!({
        "collision": { "width": 40, "height": 16, "solids": solids },
        "objects": [
            { "type": "coin", "x": 64, "y": 96, "width": 8, "height": 8 },
            { "type": "box", "x": 96, "y": 72, "height": 8,
              "properties": { "content": "mushroom" } },
            { "type": "goomba", "x": 200, "y": 96, "height": 8 },
            { "type": "portal", "x": 288, "y": 96, "width": 16, "height": 16,
              "properties": {
                  "level": "demo-2", "spawnX": 16, "spawnY": 80, "direction": "down"
              } }
        ]
    });
    LevelDef::from_json(&json.to_string()).expect("demo level json is well formed")
}

/// Scripted controller: walk right, hop into the box, keep walking, then
/// hold down at the end to take the portal.
fn tape(frame: u32) -> Pad {
    let mut held = Pad::default();
    held.right = frame < 320;
    held.run = frame >= 120;
    held.jump = matches!(frame, 60..=75 | 150..=170);
    held.down = frame >= 320;
    held
}

fn main() {
    env_logger::init();

    let def = demo_level();
    let grid = def.collision.build_grid().expect("collision layer is consistent");
    let spawn = Vec2::new(16.0, 96.0 - PLAYER_SIZE.y);

    let mut sim = Simulation::new(spawn, PLAYER_SIZE);
    sim.load_level(&def.objects, spawn, TILE);

    let mut pads = PadTracker::new();
    for frame in 0..FRAMES {
        let pad = pads.snapshot(tape(frame));
        sim.update(&pad, &grid, TILE);

        for event in sim.events() {
            match event {
                SimEvent::CoinCollected { points } => {
                    info!("frame {frame}: coin (+{points})");
                }
                SimEvent::PowerUp => info!("frame {frame}: powered up"),
                SimEvent::EnemyStomped => info!("frame {frame}: enemy stomped"),
                SimEvent::BrickDestroyed => info!("frame {frame}: brick destroyed"),
                SimEvent::PlayerDied => info!("frame {frame}: player died"),
                SimEvent::LevelTransition { destination } => {
                    info!(
                        "frame {frame}: portal to {} at ({}, {})",
                        destination.level, destination.spawn.x, destination.spawn.y
                    );
                }
            }
        }
        if sim.events().iter().any(|e| matches!(e, SimEvent::LevelTransition { .. })) {
            break;
        }
    }

    println!(
        "final: score {} coins {} at ({:.1}, {:.1})",
        sim.tally.score, sim.tally.coins, sim.player.body.pos.x, sim.player.body.pos.y
    );
}
