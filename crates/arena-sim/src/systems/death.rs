//! Entity teardown: corpse timers, short-lived hitboxes, and projectiles
//! that left the arena. The only system that despawns entities, so all
//! registry and AI-schedule cleanup funnels through here.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use arena_core::components::{Death, Expiry, Motion, Projectile};
use arena_core::constants::{ARENA_HALF_EXTENT, PROJECTILE_CULL_MARGIN};

use arena_ai::BehaviorTree;

use crate::registry::CollisionRegistry;

pub fn run(
    world: &mut World,
    registry: &mut CollisionRegistry,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    dt: f32,
) {
    let mut corpses: Vec<Entity> = Vec::new();
    for (entity, death) in world.query_mut::<&mut Death>() {
        death.remaining_secs -= dt;
        if death.remaining_secs <= 0.0 {
            corpses.push(entity);
        }
    }
    for entity in corpses {
        remove(world, registry, ai, entity);
    }

    // Expiring hitboxes are removed outright, no dying transition. A
    // dying entity keeps its corpse timer instead.
    let mut expired: Vec<Entity> = Vec::new();
    for (entity, (expiry, death)) in world.query_mut::<(&mut Expiry, Option<&Death>)>() {
        if death.is_some() {
            continue;
        }
        expiry.remaining_secs -= dt;
        if expiry.remaining_secs <= 0.0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        remove(world, registry, ai, entity);
    }

    // Projectiles well past the arena edge will never hit anything.
    let bound = ARENA_HALF_EXTENT + PROJECTILE_CULL_MARGIN;
    let escaped: Vec<Entity> = world
        .query::<(&Projectile, &Motion)>()
        .iter()
        .filter(|(_, (_, motion))| motion.pos.x.abs() > bound || motion.pos.y.abs() > bound)
        .map(|(entity, _)| entity)
        .collect();
    for entity in escaped {
        remove(world, registry, ai, entity);
    }
}

fn remove(
    world: &mut World,
    registry: &mut CollisionRegistry,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    entity: Entity,
) {
    registry.remove_entity(entity);
    ai.remove(&entity);
    let _ = world.despawn(entity);
}
