//! Snapshot projection: flattens the ECS into the serializable views the
//! frontend consumes. Runs last, after all state changes for the tick.

use hecs::World;

use arena_core::components::*;
use arena_core::events::AudioEvent;
use arena_core::state::*;
use arena_core::enums::EncounterPhase;
use arena_core::types::SimTime;

use crate::progression::SpellProgression;

pub fn build(
    world: &World,
    time: SimTime,
    phase: EncounterPhase,
    progression: &SpellProgression,
    audio_events: Vec<AudioEvent>,
) -> EncounterSnapshot {
    let player = world
        .query::<(&Player, &Motion, &Health, Option<&Barrier>, Option<&OnHit>)>()
        .iter()
        .map(|(_, (_, motion, health, barrier, on_hit))| PlayerView {
            pos: motion.pos,
            health: health.current,
            max_health: health.max,
            barrier_tier: barrier.map(|b| b.tier),
            immune_secs: on_hit.map_or(0.0, |o| o.all_immune_secs),
        })
        .next();

    let enemies = world
        .query::<(&Enemy, &Motion, &Health, Option<&Death>)>()
        .iter()
        .map(|(_, (enemy, motion, health, death))| EnemyView {
            pos: motion.pos,
            vel: motion.vel,
            archetype: enemy.archetype,
            health: health.current,
            max_health: health.max,
            dying: death.is_some(),
        })
        .collect();

    let projectiles = world
        .query::<(&Projectile, &Motion, Option<&SpellProjectile>)>()
        .iter()
        .map(|(_, (projectile, motion, spell))| ProjectileView {
            pos: motion.pos,
            spell: spell.map(|s| s.spell),
            level: spell.map_or(0, |s| s.level),
            active: projectile.active,
            aftershock: spell.is_some_and(|s| s.aftershock),
        })
        .collect();

    EncounterSnapshot {
        time,
        phase,
        player,
        enemies,
        projectiles,
        progression: progression.view(),
        audio_events,
    }
}
