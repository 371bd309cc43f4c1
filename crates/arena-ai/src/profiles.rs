//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype combat parameters consumed by the behavior
//! context and the spawn factories.

use arena_core::constants::*;
use arena_core::enums::EnemyArchetype;

/// Behavioral profile for an adversary archetype.
pub struct ArchetypeProfile {
    pub max_health: f32,
    /// Engagement range: attack inside, chase outside.
    pub engagement_range: f32,
    /// Fixed movement speed (units/s).
    pub speed: f32,
    /// Seconds between primary attacks.
    pub primary_cooldown: f32,
    /// Seconds between secondary attacks, for archetypes that have one.
    pub secondary_cooldown: Option<f32>,
    /// Primary is a melee swing rather than a bolt.
    pub melee: bool,
    /// Damage of the primary attack.
    pub attack_damage: f32,
    /// Body contact damage against the player.
    pub contact_damage: f32,
    /// Moves away while recovering health when fleeing.
    pub kites: bool,
    /// Absorbs fire/ice below max level.
    pub blocks_elemental: bool,
    /// Corpse lingers this long after death.
    pub corpse_secs: f32,
    /// Boss flag: music transition on death.
    pub boss: bool,
}

/// Get the behavioral profile for a given archetype.
pub fn profile(archetype: EnemyArchetype) -> ArchetypeProfile {
    match archetype {
        EnemyArchetype::Thrall => ArchetypeProfile {
            max_health: 30.0,
            engagement_range: 56.0,
            speed: 130.0,
            primary_cooldown: 1.0,
            secondary_cooldown: None,
            melee: true,
            attack_damage: 8.0,
            contact_damage: 3.0,
            kites: false,
            blocks_elemental: false,
            corpse_secs: CORPSE_SECS,
            boss: false,
        },
        EnemyArchetype::Wisp => ArchetypeProfile {
            max_health: 18.0,
            engagement_range: 380.0,
            speed: 180.0,
            primary_cooldown: 1.6,
            secondary_cooldown: None,
            melee: false,
            attack_damage: 6.0,
            contact_damage: 2.0,
            kites: true,
            blocks_elemental: false,
            corpse_secs: CORPSE_SECS,
            boss: false,
        },
        EnemyArchetype::Sentinel => ArchetypeProfile {
            max_health: 80.0,
            engagement_range: 64.0,
            speed: 80.0,
            primary_cooldown: 1.8,
            secondary_cooldown: None,
            melee: true,
            attack_damage: 14.0,
            contact_damage: 5.0,
            kites: false,
            blocks_elemental: true,
            corpse_secs: CORPSE_SECS,
            boss: false,
        },
        EnemyArchetype::Hexer => ArchetypeProfile {
            max_health: 26.0,
            engagement_range: 300.0,
            speed: 110.0,
            primary_cooldown: 1.4,
            // Nova fires regardless of range once this expires.
            secondary_cooldown: Some(5.0),
            melee: false,
            attack_damage: 7.0,
            contact_damage: 2.0,
            kites: false,
            blocks_elemental: false,
            corpse_secs: CORPSE_SECS,
            boss: false,
        },
        EnemyArchetype::Overfiend => ArchetypeProfile {
            max_health: 400.0,
            engagement_range: 340.0,
            speed: 95.0,
            primary_cooldown: 1.1,
            secondary_cooldown: Some(7.0),
            melee: false,
            attack_damage: 12.0,
            contact_damage: 8.0,
            kites: false,
            blocks_elemental: false,
            corpse_secs: BOSS_CORPSE_SECS,
            boss: true,
        },
    }
}
