//! Frame events emitted by the simulation for the host to consume.

use crate::components::portal::Destination;

/// One notable thing that happened during a frame. The buffer is cleared
/// at the start of every `update`, so hosts must drain it each frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A coin was banked, from a pickup or a box.
    CoinCollected { points: u32 },
    /// The player collected a mushroom and grew.
    PowerUp,
    /// An enemy was squashed from above.
    EnemyStomped,
    /// A brick's durability ran out.
    BrickDestroyed,
    /// The player entered the terminal death state this frame.
    PlayerDied,
    /// The player took a qualifying portal. The host owns level loading;
    /// it should build the next level and call `Simulation::load_level`.
    LevelTransition { destination: Destination },
}
