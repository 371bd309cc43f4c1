//! Kinematic integration system.
//!
//! Updates position from velocity each tick, applying the entity's speed
//! factor and any active slow. Non-projectile bodies are kept inside the
//! arena bounds.

use hecs::World;

use arena_core::components::{Death, Motion, Projectile, Slowed};
use arena_core::constants::ARENA_HALF_EXTENT;

/// Integrate all moving bodies. Dying entities have zeroed velocity but
/// are skipped anyway so a corpse never drifts.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (motion, slowed, projectile, death)) in world
        .query_mut::<(&mut Motion, Option<&Slowed>, Option<&Projectile>, Option<&Death>)>()
    {
        if death.is_some() {
            continue;
        }
        let slow = slowed.map_or(1.0, |s| s.factor);
        let step = motion.vel * motion.speed_factor * slow * dt;
        motion.pos += step;

        if projectile.is_none() {
            motion.pos.x = motion.pos.x.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
            motion.pos.y = motion.pos.y.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
        }
    }
}
