//! Per-tick systems, run in a strict pipeline order by the engine:
//! AI → timers → movement → detection → resolution → death/cleanup.

pub mod ai;
pub mod death;
pub mod detection;
pub mod movement;
pub mod resolve;
pub mod snapshot;
pub mod timers;

use hecs::{Entity, World};

use arena_core::components::Player;

/// First (and only) player entity, if one exists.
pub fn player_entity(world: &World) -> Option<Entity> {
    world.query::<&Player>().iter().next().map(|(e, _)| e)
}
