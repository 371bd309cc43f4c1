//! Entity spawn factories.
//!
//! Creates the player, adversaries (with their behavior trees), spell and
//! adversary projectiles, deferred area effects, and pickups with the
//! component bundles appropriate to each.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::*;

use arena_ai::profiles::profile;
use arena_ai::BehaviorTree;

/// Set up a fresh encounter: player at the origin, an adversary wave on a
/// ring around it, and a couple of health pickups.
pub fn setup_encounter(
    world: &mut World,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    rng: &mut ChaCha8Rng,
) {
    spawn_player(world);
    spawn_wave(world, ai, rng);

    for _ in 0..2 {
        let bearing: f32 = rng.gen_range(0.0..TAU);
        let range: f32 = rng.gen_range(200.0..500.0);
        let pos = Vec2::new(bearing.cos(), bearing.sin()) * range;
        spawn_pickup(world, pos, 20.0);
    }
}

/// Spawn the player at the origin with full health and the narrow-phase
/// collision hull.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Motion::at(
            Vec2::ZERO,
            Vec2::new(PLAYER_HALF_EXTENTS[0], PLAYER_HALF_EXTENTS[1]),
        ),
        Health::full(PLAYER_MAX_HEALTH),
        OnHit::default(),
        MeshCollider {
            mesh: PLAYER_MESH.to_string(),
        },
    ))
}

/// Default wave: a mixed ring of adversaries at random bearings.
pub fn spawn_wave(
    world: &mut World,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    rng: &mut ChaCha8Rng,
) {
    let composition = [
        (EnemyArchetype::Thrall, 4),
        (EnemyArchetype::Wisp, 2),
        (EnemyArchetype::Sentinel, 1),
        (EnemyArchetype::Hexer, 1),
    ];
    for (archetype, count) in composition {
        for _ in 0..count {
            let bearing: f32 = rng.gen_range(0.0..TAU);
            let range: f32 = rng.gen_range(500.0..900.0);
            let pos = Vec2::new(bearing.cos(), bearing.sin()) * range;
            spawn_enemy(world, ai, archetype, pos);
        }
    }
}

/// Spawn one adversary and register its behavior tree in the AI schedule.
/// The tree's lifetime is tied to the owning entity: it leaves the
/// schedule on death and is dropped at teardown.
pub fn spawn_enemy(
    world: &mut World,
    ai: &mut BTreeMap<Entity, BehaviorTree>,
    archetype: EnemyArchetype,
    pos: Vec2,
) -> Entity {
    let p = profile(archetype);
    let entity = world.spawn((
        Enemy {
            archetype,
            range: p.engagement_range,
            primary_cooldown: p.primary_cooldown,
            secondary_cooldown: p.secondary_cooldown.unwrap_or(0.0),
        },
        Motion::at(pos, Vec2::splat(16.0)),
        Health::full(p.max_health),
        Deadly {
            to_player: true,
            to_enemies: false,
            to_projectiles: false,
        },
        Damage {
            amount: p.contact_damage,
            kind: DamageKind::Melee,
        },
        OnHit::default(),
    ));
    ai.insert(entity, BehaviorTree::enemy_combat());
    entity
}

/// Spawn a player spell projectile heading along `dir`.
pub fn spawn_spell_projectile(
    world: &mut World,
    spell: SpellType,
    level: u8,
    pos: Vec2,
    dir: Vec2,
) -> Entity {
    let dir = dir.normalize_or_zero();
    world.spawn((
        Projectile {
            range: SPELL_PROJECTILE_RANGE,
            traveled: 0.0,
            active: true,
        },
        SpellProjectile {
            spell,
            level,
            aftershock: false,
            source_pos: pos,
            affected: Vec::new(),
        },
        Motion {
            vel: dir * SPELL_PROJECTILE_SPEED,
            angle: dir.y.atan2(dir.x),
            ..Motion::at(pos, Vec2::splat(SPELL_PROJECTILE_HALF_EXTENT))
        },
        Damage {
            amount: SPELL_BASE_DAMAGE[spell.index()],
            kind: spell.damage_kind(),
        },
        Deadly {
            to_player: false,
            to_enemies: true,
            to_projectiles: true,
        },
    ))
}

/// Spawn an adversary bolt heading along `dir`.
pub fn spawn_enemy_bolt(world: &mut World, pos: Vec2, dir: Vec2, damage: f32) -> Entity {
    let dir = dir.normalize_or_zero();
    world.spawn((
        Projectile {
            range: ENEMY_BOLT_RANGE,
            traveled: 0.0,
            active: true,
        },
        Motion {
            vel: dir * ENEMY_BOLT_SPEED,
            angle: dir.y.atan2(dir.x),
            ..Motion::at(pos, Vec2::splat(ENEMY_BOLT_HALF_EXTENT))
        },
        Damage {
            amount: damage,
            kind: DamageKind::Arcane,
        },
        Deadly {
            to_player: true,
            to_enemies: false,
            to_projectiles: false,
        },
    ))
}

/// Spawn a short-lived melee swing hitbox in front of the attacker.
pub fn spawn_melee_swing(world: &mut World, attacker_pos: Vec2, dir: Vec2, damage: f32) -> Entity {
    let dir = dir.normalize_or_zero();
    world.spawn((
        Projectile {
            range: 0.0,
            traveled: 0.0,
            active: true,
        },
        Motion::at(
            attacker_pos + dir * MELEE_SWING_REACH,
            Vec2::splat(MELEE_SWING_HALF_EXTENT),
        ),
        Damage {
            amount: damage,
            kind: DamageKind::Melee,
        },
        Deadly {
            to_player: true,
            to_enemies: false,
            to_projectiles: false,
        },
        Expiry {
            remaining_secs: MELEE_SWING_SECS,
        },
    ))
}

/// Spawn a radial ring of bolts (the nova secondary ability).
pub fn spawn_nova(world: &mut World, center: Vec2, damage: f32) {
    for i in 0..NOVA_BOLT_COUNT {
        let angle = i as f32 / NOVA_BOLT_COUNT as f32 * TAU;
        let dir = Vec2::new(angle.cos(), angle.sin());
        spawn_enemy_bolt(world, center + dir * 20.0, dir, damage);
    }
}

/// Realize a deferred post-resolution effect at the recorded interaction
/// point. Carries final damage; the resolver never rescales aftershocks.
pub fn spawn_aftershock(world: &mut World, kind: EffectKind, pos: Vec2, victims: &[Vec2]) {
    match kind {
        EffectKind::FlameBurst => {
            spawn_area_effect(
                world,
                SpellType::Fire,
                pos,
                FLAME_BURST_HALF_EXTENT,
                FLAME_BURST_DAMAGE,
            );
        }
        EffectKind::StaticField => {
            spawn_area_effect(
                world,
                SpellType::Lightning,
                pos,
                STATIC_FIELD_HALF_EXTENT,
                STATIC_FIELD_DAMAGE,
            );
            // One spark per victim struck in the batch.
            for &v in victims {
                spawn_area_effect(
                    world,
                    SpellType::Lightning,
                    v,
                    STATIC_SPARK_HALF_EXTENT,
                    STATIC_FIELD_DAMAGE * 0.5,
                );
            }
        }
    }
}

fn spawn_area_effect(
    world: &mut World,
    spell: SpellType,
    pos: Vec2,
    half_extent: f32,
    damage: f32,
) -> Entity {
    world.spawn((
        Projectile {
            range: 0.0,
            traveled: 0.0,
            active: true,
        },
        SpellProjectile {
            spell,
            level: SPELL_MAX_LEVEL,
            aftershock: true,
            source_pos: pos,
            affected: Vec::new(),
        },
        Motion::at(pos, Vec2::splat(half_extent)),
        Damage {
            amount: damage,
            kind: spell.damage_kind(),
        },
        Deadly {
            to_player: false,
            to_enemies: true,
            to_projectiles: false,
        },
        Expiry {
            remaining_secs: AFTERSHOCK_SECS,
        },
    ))
}

/// Spawn a health pickup.
pub fn spawn_pickup(world: &mut World, pos: Vec2, heal: f32) -> Entity {
    world.spawn((Pickup { heal }, Motion::at(pos, Vec2::splat(12.0))))
}
