//! Damage resolution sweep.
//!
//! Drains the collision registry in three initiator groups: projectiles,
//! then adversary bodies, then interactables. Order matters because later
//! groups observe invulnerability state armed by earlier ones. Every
//! examined pairing is unregistered whether or not it was actionable, so
//! a pair is considered at most once per tick.
//!
//! Structural consequences (projectile deactivation, entity teardown,
//! deferred area effects) are collected during the sweep and applied once
//! after it, so a max-level hit on several victims in the same tick still
//! batches into a single effect spawn.

use std::collections::BTreeMap;

use glam::Vec2;
use hecs::{Entity, World};

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::{DamageKind, EffectKind, SpellType};
use arena_core::events::AudioEvent;

use arena_ai::profiles::profile;
use arena_ai::BehaviorTree;

use crate::mesh::MeshLibrary;
use crate::progression::SpellProgression;
use crate::registry::CollisionRegistry;
use crate::spawn;
use crate::systems::detection::narrow_phase_confirm;

/// What kind of body the victim side of a pairing is.
#[derive(Clone, Copy, PartialEq, Eq)]
enum VictimClass {
    Player,
    Enemy,
    Projectile,
}

/// Deferred area-effect spawn, batched across all hits of one tick.
struct PendingEffect {
    /// Interaction point of the first hit that queued the effect.
    pos: Vec2,
    /// Positions of every victim struck in the batch.
    victims: Vec<Vec2>,
}

/// Per-sweep bookkeeping, applied after the pairings are processed.
struct Sweep {
    player: Option<Entity>,
    kill_tally: [u32; SpellType::COUNT],
    pending: BTreeMap<EffectKind, PendingEffect>,
    /// Spell projectiles spent this tick; they linger inert as visuals.
    to_deactivate: Vec<Entity>,
    /// Entities consumed outright (bolts, swings, absorbed portals).
    to_delete: Vec<Entity>,
}

/// Resolve every registered overlap into its combat consequences.
pub fn run(
    world: &mut World,
    registry: &mut CollisionRegistry,
    meshes: &MeshLibrary,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    progression: &mut SpellProgression,
    audio: &mut Vec<AudioEvent>,
) {
    let mut sweep = Sweep {
        player: super::player_entity(world),
        kill_tally: [0; SpellType::COUNT],
        pending: BTreeMap::new(),
        to_deactivate: Vec::new(),
        to_delete: Vec::new(),
    };

    let projectiles: Vec<Entity> = world
        .query::<(&Projectile, &Deadly)>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for initiator in projectiles {
        for victim in registry.overlapping(initiator) {
            registry.unregister(initiator, victim);
            resolve_pair(world, registry, meshes, ai, audio, &mut sweep, initiator, victim);
        }
    }

    let enemies: Vec<Entity> = world
        .query::<(&Enemy, &Deadly)>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for initiator in enemies {
        for victim in registry.overlapping(initiator) {
            registry.unregister(initiator, victim);
            resolve_pair(world, registry, meshes, ai, audio, &mut sweep, initiator, victim);
        }
    }

    let pickups: Vec<(Entity, f32)> = world
        .query::<&Pickup>()
        .iter()
        .map(|(entity, pickup)| (entity, pickup.heal))
        .collect();
    for (pickup, heal) in pickups {
        for partner in registry.overlapping(pickup) {
            registry.unregister(pickup, partner);
            if Some(partner) != sweep.player {
                continue;
            }
            if let Ok(mut health) = world.get::<&mut Health>(partner) {
                health.current = (health.current + heal).min(health.max);
            }
            audio.push(AudioEvent::Pickup);
            sweep.to_delete.push(pickup);
        }
    }

    finish(world, registry, ai, progression, &mut sweep);
}

/// Resolve one overlap pairing. The pair arrives unordered; the side whose
/// `Deadly` flags permit the pairing acts as the attacker. A pairing
/// neither side permits is dropped without effect.
#[allow(clippy::too_many_arguments)]
fn resolve_pair(
    world: &mut World,
    registry: &mut CollisionRegistry,
    meshes: &MeshLibrary,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    audio: &mut Vec<AudioEvent>,
    sweep: &mut Sweep,
    a: Entity,
    b: Entity,
) {
    // Dying entities neither deal nor take new hits.
    if world.get::<&Death>(a).is_ok() || world.get::<&Death>(b).is_ok() {
        return;
    }

    let Some((attacker, victim, class)) = orient(world, sweep.player, a, b) else {
        return;
    };

    // A spent projectile lingers visually but resolves nothing new.
    if let Ok(projectile) = world.get::<&Projectile>(attacker) {
        if !projectile.active {
            return;
        }
    }

    // Player hits need narrow-phase confirmation against the hull mesh.
    if class == VictimClass::Player && !narrow_phase_confirm(world, meshes, victim, attacker) {
        return;
    }

    let Ok(damage) = world.get::<&Damage>(attacker).map(|d| *d) else {
        return;
    };

    // A projectile victim is simply consumed by the permitted side.
    if class == VictimClass::Projectile {
        sweep.to_delete.push(victim);
        return;
    }

    // Portal bolts bypass the damage path entirely: teleport the victim
    // back to the cast position and slow it.
    if damage.kind == DamageKind::Portal {
        let source = world
            .get::<&SpellProjectile>(attacker)
            .ok()
            .map(|s| s.source_pos);
        if let Some(source) = source {
            if let Ok(mut motion) = world.get::<&mut Motion>(victim) {
                motion.pos = source;
                motion.vel = Vec2::ZERO;
            }
            let _ = world.insert_one(
                victim,
                Slowed {
                    remaining_secs: PORTAL_SLOW_SECS,
                    factor: PORTAL_SLOW_FACTOR,
                },
            );
            audio.push(AudioEvent::PortalShift);
            sweep.to_delete.push(attacker);
        }
        return;
    }

    let spell = world
        .get::<&SpellProjectile>(attacker)
        .ok()
        .map(|s| (s.spell, s.level, s.aftershock, s.affected.clone()));

    // Lingering fields never re-hit a victim they already struck.
    if damage.kind.tracks_victims() {
        if let Some((_, _, _, affected)) = &spell {
            if affected.contains(&victim) {
                return;
            }
        }
    }

    // Invulnerability: a blanket window, or a per-attacker grudge timer.
    if let Ok(on_hit) = world.get::<&OnHit>(victim) {
        if on_hit.all_immune_secs > 0.0 {
            return;
        }
        if on_hit.attackers.get(&attacker).is_some_and(|t| *t > 0.0) {
            return;
        }
    }

    // Aftershocks carry final damage; everything else scales by level.
    let mut amount = damage.amount;
    if let Some((spell_type, level, aftershock, _)) = &spell {
        if !aftershock {
            amount *= spell_scale(*spell_type, *level);
        }
    }

    // Sub-max fire and ice are absorbed outright by blocking archetypes.
    if class == VictimClass::Enemy
        && matches!(damage.kind, DamageKind::Fire | DamageKind::Ice)
        && spell
            .as_ref()
            .is_some_and(|(_, level, _, _)| *level < SPELL_MAX_LEVEL)
    {
        let blocks = world
            .get::<&Enemy>(victim)
            .is_ok_and(|e| profile(e.archetype).blocks_elemental);
        if blocks {
            audio.push(AudioEvent::Block);
            consume_attacker(world, sweep, attacker);
            return;
        }
    }

    // An active barrier soaks the hit and hardens one tier.
    if class == VictimClass::Player {
        let absorbed = match world.get::<&mut Barrier>(victim) {
            Ok(mut barrier) => {
                barrier.tier = (barrier.tier + 1).min(BARRIER_MAX_TIER);
                true
            }
            Err(_) => false,
        };
        if absorbed {
            audio.push(AudioEvent::Block);
            consume_attacker(world, sweep, attacker);
            return;
        }
    }

    let lethal = match world.get::<&mut Health>(victim) {
        Ok(mut health) => {
            health.current = (health.current - amount).max(0.0);
            health.current <= 0.0
        }
        Err(_) => return,
    };

    if damage.kind.tracks_victims() {
        if let Ok(mut s) = world.get::<&mut SpellProjectile>(attacker) {
            s.affected.push(victim);
        }
    }

    if lethal {
        on_lethal(world, registry, ai, audio, sweep, victim, &spell);
    } else {
        on_nonlethal(world, audio, attacker, victim, class);
    }

    let victim_pos = world
        .get::<&Motion>(victim)
        .map(|m| m.pos)
        .unwrap_or_default();
    post_hit(world, sweep, attacker, victim_pos, &spell);
}

/// Decide which side of an unordered pairing acts, and what the other
/// side is. `None` means neither side's flags permit the pairing.
fn orient(
    world: &World,
    player: Option<Entity>,
    a: Entity,
    b: Entity,
) -> Option<(Entity, Entity, VictimClass)> {
    let permitted = |attacker: Entity, victim: Entity| -> Option<VictimClass> {
        let class = classify(world, player, victim)?;
        let deadly = world.get::<&Deadly>(attacker).ok()?;
        let ok = match class {
            VictimClass::Player => deadly.to_player,
            VictimClass::Enemy => deadly.to_enemies,
            VictimClass::Projectile => deadly.to_projectiles,
        };
        ok.then_some(class)
    };
    if let Some(class) = permitted(a, b) {
        return Some((a, b, class));
    }
    if let Some(class) = permitted(b, a) {
        return Some((b, a, class));
    }
    None
}

fn classify(world: &World, player: Option<Entity>, e: Entity) -> Option<VictimClass> {
    if Some(e) == player {
        Some(VictimClass::Player)
    } else if world.get::<&Enemy>(e).is_ok() {
        Some(VictimClass::Enemy)
    } else if world.get::<&Projectile>(e).is_ok() {
        Some(VictimClass::Projectile)
    } else {
        None
    }
}

/// Spend the attacker without a landed hit (blocked or absorbed). Spell
/// projectiles linger inert; plain hitboxes are removed outright.
fn consume_attacker(world: &World, sweep: &mut Sweep, attacker: Entity) {
    let is_spell = world
        .get::<&SpellProjectile>(attacker)
        .is_ok_and(|s| !s.aftershock);
    if is_spell {
        sweep.to_deactivate.push(attacker);
    } else if world.get::<&Projectile>(attacker).is_ok() {
        sweep.to_delete.push(attacker);
    }
}

/// Victim died: mark it dying with the archetype corpse timer, detach its
/// behavior tree, and tally the kill for progression.
fn on_lethal(
    world: &mut World,
    registry: &mut CollisionRegistry,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    audio: &mut Vec<AudioEvent>,
    sweep: &mut Sweep,
    victim: Entity,
    spell: &Option<(SpellType, u8, bool, Vec<Entity>)>,
) {
    let enemy = world.get::<&Enemy>(victim).ok().map(|e| e.archetype);
    let corpse_secs = match enemy {
        Some(archetype) => profile(archetype).corpse_secs,
        None => CORPSE_SECS,
    };
    if let Ok(mut motion) = world.get::<&mut Motion>(victim) {
        motion.vel = Vec2::ZERO;
    }
    let _ = world.insert_one(
        victim,
        Death {
            remaining_secs: corpse_secs,
        },
    );
    registry.remove_entity(victim);
    ai.remove(&victim);

    match enemy {
        Some(archetype) => {
            audio.push(AudioEvent::EnemyDeath { archetype });
            if profile(archetype).boss {
                audio.push(AudioEvent::BossOverture);
            }
            if let Some((spell_type, _, _, _)) = spell {
                sweep.kill_tally[spell_type.index()] += 1;
            }
        }
        None => audio.push(AudioEvent::PlayerHit),
    }
}

/// Victim survived: play the hit cue and re-arm its invulnerability.
fn on_nonlethal(
    world: &mut World,
    audio: &mut Vec<AudioEvent>,
    attacker: Entity,
    victim: Entity,
    class: VictimClass,
) {
    match class {
        VictimClass::Player => {
            audio.push(AudioEvent::PlayerHit);
            let updated = match world.get::<&mut OnHit>(victim) {
                Ok(mut on_hit) => {
                    on_hit.all_immune_secs = PLAYER_INVULN_SECS;
                    true
                }
                Err(_) => false,
            };
            if !updated {
                let _ = world.insert_one(
                    victim,
                    OnHit {
                        all_immune_secs: PLAYER_INVULN_SECS,
                        ..OnHit::default()
                    },
                );
            }
        }
        VictimClass::Enemy => {
            if let Ok(enemy) = world.get::<&Enemy>(victim) {
                audio.push(AudioEvent::EnemyHit {
                    archetype: enemy.archetype,
                });
            }
            let updated = match world.get::<&mut OnHit>(victim) {
                Ok(mut on_hit) => {
                    on_hit.attackers.insert(attacker, ENEMY_INVULN_SECS);
                    true
                }
                Err(_) => false,
            };
            if !updated {
                let mut on_hit = OnHit::default();
                on_hit.attackers.insert(attacker, ENEMY_INVULN_SECS);
                let _ = world.insert_one(victim, on_hit);
            }
        }
        VictimClass::Projectile => {}
    }
}

/// After a landed hit: queue max-level aftershocks and decide whether the
/// attacker survives the impact. Wind and plasma fields pierce; everything
/// else is spent on the first confirmed hit.
fn post_hit(
    world: &World,
    sweep: &mut Sweep,
    attacker: Entity,
    victim_pos: Vec2,
    spell: &Option<(SpellType, u8, bool, Vec<Entity>)>,
) {
    let Some((spell_type, level, aftershock, _)) = spell else {
        if world.get::<&Projectile>(attacker).is_ok() {
            sweep.to_delete.push(attacker);
        }
        return;
    };
    if *aftershock {
        return;
    }
    match spell_type {
        SpellType::Fire if *level >= SPELL_MAX_LEVEL => {
            queue_effect(sweep, EffectKind::FlameBurst, victim_pos);
            sweep.to_deactivate.push(attacker);
        }
        SpellType::Lightning if *level >= SPELL_MAX_LEVEL => {
            queue_effect(sweep, EffectKind::StaticField, victim_pos);
            sweep.to_deactivate.push(attacker);
        }
        SpellType::Wind | SpellType::Plasma => {}
        _ => sweep.to_deactivate.push(attacker),
    }
}

fn queue_effect(sweep: &mut Sweep, kind: EffectKind, victim_pos: Vec2) {
    let pending = sweep.pending.entry(kind).or_insert_with(|| PendingEffect {
        pos: victim_pos,
        victims: Vec::new(),
    });
    pending.victims.push(victim_pos);
}

/// Apply the consequences collected during the sweep.
fn finish(
    world: &mut World,
    registry: &mut CollisionRegistry,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    progression: &mut SpellProgression,
    sweep: &mut Sweep,
) {
    for &entity in &sweep.to_deactivate {
        let spent = match world.get::<&mut Projectile>(entity) {
            Ok(mut projectile) => {
                let was_active = projectile.active;
                projectile.active = false;
                was_active
            }
            Err(_) => false,
        };
        if spent {
            let _ = world.insert_one(
                entity,
                Expiry {
                    remaining_secs: PROJECTILE_LINGER_SECS,
                },
            );
        }
    }

    for &entity in &sweep.to_delete {
        if world.contains(entity) && world.get::<&Death>(entity).is_err() {
            let _ = world.insert_one(entity, Death { remaining_secs: 0.0 });
        }
        registry.remove_entity(entity);
        ai.remove(&entity);
    }

    for (kind, effect) in &sweep.pending {
        spawn::spawn_aftershock(world, *kind, effect.pos, &effect.victims);
    }

    progression.record_kills(&sweep.kill_tally);
}
