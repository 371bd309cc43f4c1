//! Broad/narrow-phase collision detector.
//!
//! Runs after movement, before resolution. The broad phase AABB-tests
//! every unordered pair of live bodies and records overlaps in the
//! collision registry. The narrow phase is a separating-axis mesh test
//! exposed here for the resolver, which re-confirms player-involving
//! pairs before applying damage. Both phases are observation-only.

use hecs::{Entity, World};

use arena_core::components::{Death, MeshCollider, Motion};

use crate::geometry::{mesh_overlaps_aabb, Aabb};
use crate::mesh::MeshLibrary;
use crate::registry::CollisionRegistry;

/// Broad phase: register every overlapping body pair. Entities marked
/// dying are skipped entirely, as subject and as partner.
pub fn run(world: &World, registry: &mut CollisionRegistry) {
    let bodies: Vec<(Entity, Aabb)> = world
        .query::<&Motion>()
        .without::<&Death>()
        .iter()
        .map(|(entity, motion)| (entity, body_aabb(motion)))
        .collect();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, ref box_a) = bodies[i];
            let (b, ref box_b) = bodies[j];
            if box_a.overlaps(box_b) {
                registry.register(a, b);
            }
        }
    }
}

/// Scaled AABB for a body.
pub fn body_aabb(motion: &Motion) -> Aabb {
    Aabb::new(motion.pos, motion.collider * motion.scale)
}

/// Narrow phase: precise mesh-vs-box confirmation for a mesh-carrying
/// entity against a box-only partner. Broad-phase presence is necessary
/// but not sufficient for these pairs.
///
/// A missing mesh (library gap) degrades to the broad-phase result
/// rather than dropping the hit.
pub fn narrow_phase_confirm(
    world: &World,
    meshes: &MeshLibrary,
    mesh_holder: Entity,
    partner: Entity,
) -> bool {
    let Ok(holder_motion) = world.get::<&Motion>(mesh_holder).map(|m| *m) else {
        return false;
    };
    let Ok(partner_motion) = world.get::<&Motion>(partner).map(|m| *m) else {
        return false;
    };
    let Ok(collider) = world.get::<&MeshCollider>(mesh_holder) else {
        // No mesh collider: the AABB test already passed.
        return true;
    };
    let Some(triangles) = meshes.get(&collider.mesh) else {
        return true;
    };

    mesh_overlaps_aabb(
        triangles,
        holder_motion.pos,
        holder_motion.scale,
        holder_motion.angle,
        &body_aabb(&partner_motion),
    )
}
