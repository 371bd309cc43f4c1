//! Encounter snapshot — the visible state projected to the frontend each
//! tick. Rendering and audio read these views; they never touch the ECS.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete encounter state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub phase: EncounterPhase,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub progression: ProgressionView,
    pub audio_events: Vec<AudioEvent>,
}

/// Player state for the HUD and renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Current barrier tier, if a barrier is up.
    pub barrier_tier: Option<u8>,
    /// Remaining global immunity (drives the hit-flash effect).
    pub immune_secs: f32,
}

/// Adversary state for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub archetype: EnemyArchetype,
    pub health: f32,
    pub max_health: f32,
    /// In the dying state (corpse timer running).
    pub dying: bool,
}

/// Projectile/effect state for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    /// None for adversary-sourced bolts and swings.
    pub spell: Option<SpellType>,
    pub level: u8,
    pub active: bool,
    pub aftershock: bool,
}

/// Spell progression for the HUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionView {
    /// Level per school, indexed by `SpellType::index`.
    pub levels: [u8; SpellType::COUNT],
    /// Lifetime kills per school.
    pub kills: [u32; SpellType::COUNT],
}

impl Default for ProgressionView {
    fn default() -> Self {
        Self {
            levels: [1; SpellType::COUNT],
            kills: [0; SpellType::COUNT],
        }
    }
}
