//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player spell school. Levels run 1..=SPELL_MAX_LEVEL per school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellType {
    Fire,
    Ice,
    Lightning,
    Wind,
    Plasma,
    /// Utility bolt: teleports the victim back to the cast position.
    Portal,
}

impl SpellType {
    /// Number of spell schools (for fixed-size tally/level arrays).
    pub const COUNT: usize = 6;

    /// Stable index into per-spell arrays.
    pub fn index(self) -> usize {
        match self {
            SpellType::Fire => 0,
            SpellType::Ice => 1,
            SpellType::Lightning => 2,
            SpellType::Wind => 3,
            SpellType::Plasma => 4,
            SpellType::Portal => 5,
        }
    }

    /// The damage tag carried by projectiles of this school.
    pub fn damage_kind(self) -> DamageKind {
        match self {
            SpellType::Fire => DamageKind::Fire,
            SpellType::Ice => DamageKind::Ice,
            SpellType::Lightning => DamageKind::Lightning,
            SpellType::Wind => DamageKind::Wind,
            SpellType::Plasma => DamageKind::Plasma,
            SpellType::Portal => DamageKind::Portal,
        }
    }
}

/// Damage type tag. Drives scaling, blocking, and repeat-hit bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    /// Adversary melee swings and body contact.
    Melee,
    /// Adversary ranged bolts.
    Arcane,
    Fire,
    Ice,
    Lightning,
    Wind,
    Plasma,
    /// Bypasses health damage entirely; teleport + slow.
    Portal,
}

impl DamageKind {
    /// Lingering area kinds track already-hit victims so a field cannot
    /// re-hit the same target every tick it overlaps.
    pub fn tracks_victims(self) -> bool {
        matches!(self, DamageKind::Wind | DamageKind::Plasma)
    }
}

/// Adversary archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Melee chaser, the baseline adversary.
    Thrall,
    /// Fast ranged kiter; recovers health while fleeing.
    Wisp,
    /// Slow bruiser; absorbs fire/ice below max level.
    Sentinel,
    /// Mid-range caster with a range-independent nova on a second cooldown.
    Hexer,
    /// Boss. Longer corpse timer, triggers the encounter music shift.
    Overfiend,
}

/// Deferred post-resolution effect kind, queued during the damage sweep
/// and realized once after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Max-level fire: area burst at the interaction point.
    FlameBurst,
    /// Max-level lightning: static field plus a spark per victim.
    StaticField,
}

/// Encounter phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Idle,
    Active,
    Paused,
    /// Player died or the arena was cleared.
    Complete,
}
