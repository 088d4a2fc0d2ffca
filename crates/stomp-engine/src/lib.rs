pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod level;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::events::SimEvent;
pub use api::sim::{Simulation, Tally};
pub use components::animation::{AnimationState, ClipDef};
pub use components::block::{BoxContent, Brick, ItemBox};
pub use components::collectible::{Collectible, CollectibleKind};
pub use components::enemy::{Enemy, EnemyAnim};
pub use components::platform::{Platform, PlatformAxis};
pub use components::player::{Player, PlayerSize, INVULNERABLE_FRAMES, JUMP_IMPULSE};
pub use components::portal::{ApproachDir, Destination, Portal};
pub use crate::core::grid::CollisionGrid;
pub use crate::core::physics::{aabb_overlap, overlap_depths, step, Body, GRAVITY, PUSHOUT_STEP};
pub use input::{Pad, PadTracker};
pub use level::{CollisionDef, Level, LevelDef, LevelError, ObjectDescriptor, ObjectKind};
pub use systems::animation::{apply as apply_animation, select as select_animation, MOVE_EPSILON};
pub use systems::interaction::{CARRY_TOLERANCE, STOMP_THRESHOLD};
pub use systems::kinematics::ACTIVATION_RADIUS;
