//! Simulation constants and tuning parameters.

use crate::enums::SpellType;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena bounds ---

/// Half extent of the square arena (world units from the origin).
pub const ARENA_HALF_EXTENT: f32 = 1200.0;

/// Margin beyond the arena edge before a projectile is culled.
pub const PROJECTILE_CULL_MARGIN: f32 = 200.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Player movement speed (units/s).
pub const PLAYER_SPEED: f32 = 220.0;

/// Global immunity window after the player takes a hit (seconds).
pub const PLAYER_INVULN_SECS: f32 = 1.0;

/// Player AABB half extents before scaling.
pub const PLAYER_HALF_EXTENTS: [f32; 2] = [14.0, 20.0];

/// Name of the player's narrow-phase collision mesh.
pub const PLAYER_MESH: &str = "player_hull";

// --- Adversary AI ---

/// Health fraction at or below which the flee/recover branch engages.
pub const LOW_HEALTH_THRESHOLD: f32 = 0.25;

/// Melee reach; inside this distance fleeing holds position instead.
pub const MELEE_RANGE: f32 = 48.0;

/// Health recovered per second by kiting archetypes while fleeing.
pub const FLEE_RECOVER_RATE: f32 = 6.0;

/// Per-attacker immunity window for adversaries (seconds).
pub const ENEMY_INVULN_SECS: f32 = 0.5;

// --- Death / decay ---

/// Default corpse timer (seconds).
pub const CORPSE_SECS: f32 = 1.5;

/// Boss corpse timer (seconds).
pub const BOSS_CORPSE_SECS: f32 = 4.0;

/// How long a deactivated projectile lingers visually before removal.
pub const PROJECTILE_LINGER_SECS: f32 = 0.4;

/// Lifetime of a melee swing hitbox (seconds).
pub const MELEE_SWING_SECS: f32 = 0.15;

/// Lifetime of a post-resolution area effect (seconds).
pub const AFTERSHOCK_SECS: f32 = 0.6;

// --- Spells ---

/// Highest spell level; the distinguished "max tier".
pub const SPELL_MAX_LEVEL: u8 = 3;

/// Kills required to raise a spell school by one level.
pub const KILLS_PER_SPELL_LEVEL: u32 = 10;

/// Base damage per spell school, before level scaling.
pub const SPELL_BASE_DAMAGE: [f32; SpellType::COUNT] = [12.0, 10.0, 14.0, 8.0, 9.0, 0.0];

/// Damage multiplier per school per level (levels are 1-indexed).
/// Rows follow `SpellType::index`; Portal never deals health damage.
pub const SPELL_SCALING: [[f32; SPELL_MAX_LEVEL as usize]; SpellType::COUNT] = [
    [1.0, 1.5, 2.2], // Fire
    [1.0, 1.4, 2.0], // Ice
    [1.0, 1.6, 2.4], // Lightning
    [1.0, 1.3, 1.8], // Wind
    [1.0, 1.4, 2.1], // Plasma
    [0.0, 0.0, 0.0], // Portal
];

/// Spell projectile speed (units/s).
pub const SPELL_PROJECTILE_SPEED: f32 = 420.0;

/// Spell projectile travel range (units).
pub const SPELL_PROJECTILE_RANGE: f32 = 520.0;

/// Spell projectile AABB half extent.
pub const SPELL_PROJECTILE_HALF_EXTENT: f32 = 8.0;

// --- Barrier ---

/// Barrier tier cap; absorbed hits raise the tier up to this.
pub const BARRIER_MAX_TIER: u8 = 3;

// --- Portal ---

/// Slow applied by a portal shift (seconds, speed factor).
pub const PORTAL_SLOW_SECS: f32 = 2.5;
pub const PORTAL_SLOW_FACTOR: f32 = 0.45;

// --- Aftershocks ---

/// Final damage of a flame burst (already scaled; never rescaled).
pub const FLAME_BURST_DAMAGE: f32 = 18.0;
pub const FLAME_BURST_HALF_EXTENT: f32 = 56.0;

/// Final damage of a static field and its per-victim sparks.
pub const STATIC_FIELD_DAMAGE: f32 = 10.0;
pub const STATIC_FIELD_HALF_EXTENT: f32 = 72.0;
pub const STATIC_SPARK_HALF_EXTENT: f32 = 18.0;

// --- Adversary attacks ---

/// Adversary bolt speed and range (units/s, units).
pub const ENEMY_BOLT_SPEED: f32 = 300.0;
pub const ENEMY_BOLT_RANGE: f32 = 600.0;
pub const ENEMY_BOLT_HALF_EXTENT: f32 = 6.0;

/// Offset of a melee swing hitbox in front of the attacker.
pub const MELEE_SWING_REACH: f32 = 36.0;
pub const MELEE_SWING_HALF_EXTENT: f32 = 22.0;

/// Bolts in a nova ring.
pub const NOVA_BOLT_COUNT: usize = 8;

/// Look up the scaling multiplier for a spell at a 1-indexed level.
/// Levels outside 1..=SPELL_MAX_LEVEL clamp to the table edges.
pub fn spell_scale(spell: SpellType, level: u8) -> f32 {
    let idx = (level.clamp(1, SPELL_MAX_LEVEL) - 1) as usize;
    SPELL_SCALING[spell.index()][idx]
}
