//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Save/load is out of scope, so components do not carry serde derives;
//! only the snapshot views in `state` are serialized.

use std::collections::HashMap;

use glam::Vec2;
use hecs::Entity;

use crate::enums::{DamageKind, EnemyArchetype, SpellType};

/// Kinematic state and collision extents.
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Render/collision scale applied to `collider`.
    pub scale: Vec2,
    /// AABB half extents before scaling.
    pub collider: Vec2,
    /// Facing angle in radians.
    pub angle: f32,
    /// Movement speed multiplier (1.0 = normal).
    pub speed_factor: f32,
}

impl Motion {
    pub fn at(pos: Vec2, collider: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            scale: Vec2::ONE,
            collider,
            angle: 0.0,
            speed_factor: 1.0,
        }
    }
}

/// Hit points. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Adversary combat state. Cooldowns count down to zero; an expired
/// cooldown is <= 0 and is reset by the attack action when it fires.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    /// Engagement range: attack inside, chase outside.
    pub range: f32,
    pub primary_cooldown: f32,
    /// Only meaningful for archetypes with a secondary ability.
    pub secondary_cooldown: f32,
}

/// Which overlap pairings the resolver even considers for this entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadly {
    pub to_player: bool,
    pub to_enemies: bool,
    pub to_projectiles: bool,
}

/// Damage dealt on a confirmed hit.
#[derive(Debug, Clone, Copy)]
pub struct Damage {
    pub amount: f32,
    pub kind: DamageKind,
}

/// A moving (or stationary) hitbox resolved in the projectile group.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    /// Maximum travel distance; 0 means the hitbox does not expire by range.
    pub range: f32,
    /// Distance traveled so far.
    pub traveled: f32,
    /// Inactive projectiles resolve no new hits but remain visible
    /// until the decay timer removes them.
    pub active: bool,
}

/// Spell-specific projectile state, present alongside [`Projectile`]
/// on player-sourced effects.
#[derive(Debug, Clone)]
pub struct SpellProjectile {
    pub spell: SpellType,
    /// 1-indexed spell level at cast time.
    pub level: u8,
    /// Deferred post-resolution effects carry final damage; scaling skipped.
    pub aftershock: bool,
    /// Cast position; portal shifts teleport victims back here.
    pub source_pos: Vec2,
    /// Victims already affected; lingering wind/plasma fields use this
    /// to avoid re-hitting the same target every tick.
    pub affected: Vec<Entity>,
}

/// Per-victim invulnerability bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct OnHit {
    /// While positive, all hits are rejected.
    pub all_immune_secs: f32,
    /// Per-attacker countdowns gating repeat hits from the same attacker.
    pub attackers: HashMap<Entity, f32>,
}

/// Presence marks an entity as dying; despawned when the timer elapses.
#[derive(Debug, Clone, Copy)]
pub struct Death {
    pub remaining_secs: f32,
}

/// Short-lived entities (swing hitboxes, lingering visuals) removed
/// outright when the timer elapses, with no dying transition.
#[derive(Debug, Clone, Copy)]
pub struct Expiry {
    pub remaining_secs: f32,
}

/// Reference to a named collision mesh for narrow-phase tests.
/// Only entities needing precision beyond an AABB carry one (the player).
#[derive(Debug, Clone)]
pub struct MeshCollider {
    pub mesh: String,
}

/// Marks the player entity. Exactly one exists during an encounter.
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Absorbs all damage while present; each absorbed hit raises the tier
/// (capped at BARRIER_MAX_TIER), re-skinning the visual.
#[derive(Debug, Clone, Copy)]
pub struct Barrier {
    pub tier: u8,
}

/// Timed movement slow (portal shift aftermath).
#[derive(Debug, Clone, Copy)]
pub struct Slowed {
    pub remaining_secs: f32,
    pub factor: f32,
}

/// Timed crowd control; suppresses the move-toward action entirely.
#[derive(Debug, Clone, Copy)]
pub struct Rooted {
    pub remaining_secs: f32,
}

/// Interactable: heals the player on contact.
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub heal: f32,
}
