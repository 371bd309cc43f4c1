//! Scalar countdowns advanced by elapsed time each tick: attack cooldowns,
//! invulnerability windows, status effects, and projectile travel/decay.

use hecs::{Entity, World};

use arena_core::components::*;
use arena_core::constants::PROJECTILE_LINGER_SECS;

/// Advance all countdown timers. Status components that expire are
/// removed after the query loops (hecs forbids structural changes
/// mid-iteration).
pub fn run(world: &mut World, dt: f32) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.primary_cooldown -= dt;
        enemy.secondary_cooldown -= dt;
    }

    for (_entity, on_hit) in world.query_mut::<&mut OnHit>() {
        if on_hit.all_immune_secs > 0.0 {
            on_hit.all_immune_secs = (on_hit.all_immune_secs - dt).max(0.0);
        }
        for timer in on_hit.attackers.values_mut() {
            *timer -= dt;
        }
        on_hit.attackers.retain(|_, timer| *timer > 0.0);
    }

    let mut expired_slows: Vec<Entity> = Vec::new();
    for (entity, slowed) in world.query_mut::<&mut Slowed>() {
        slowed.remaining_secs -= dt;
        if slowed.remaining_secs <= 0.0 {
            expired_slows.push(entity);
        }
    }
    for entity in expired_slows {
        let _ = world.remove_one::<Slowed>(entity);
    }

    let mut expired_roots: Vec<Entity> = Vec::new();
    for (entity, rooted) in world.query_mut::<&mut Rooted>() {
        rooted.remaining_secs -= dt;
        if rooted.remaining_secs <= 0.0 {
            expired_roots.push(entity);
        }
    }
    for entity in expired_roots {
        let _ = world.remove_one::<Rooted>(entity);
    }

    decay_projectiles(world, dt);
}

/// Track projectile travel distance. A projectile past its range is
/// deactivated and lingers as a visual for a short window; the death
/// system removes it when the timer elapses. Range 0 means the hitbox
/// never expires by distance (swings, area effects — they carry their
/// own Expiry).
fn decay_projectiles(world: &mut World, dt: f32) {
    let mut spent: Vec<Entity> = Vec::new();
    for (entity, (projectile, motion)) in world.query_mut::<(&mut Projectile, &Motion)>() {
        if projectile.range <= 0.0 {
            continue;
        }
        projectile.traveled += motion.vel.length() * dt;
        if projectile.traveled >= projectile.range && projectile.active {
            projectile.active = false;
            spent.push(entity);
        }
    }
    for entity in spent {
        // Lingering decay window before removal.
        let _ = world.insert_one(
            entity,
            Expiry {
                remaining_secs: PROJECTILE_LINGER_SECS,
            },
        );
    }
}
