//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Sound cues for the frontend audio system. Fire-and-forget; the core
/// never consumes a return value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Player took damage.
    PlayerHit,
    /// An adversary took damage.
    EnemyHit { archetype: EnemyArchetype },
    /// A hit was absorbed (sentinel plating or player barrier).
    Block,
    /// An adversary died.
    EnemyDeath { archetype: EnemyArchetype },
    /// One-shot music transition when the boss falls.
    BossOverture,
    /// Spell leaving the player's hands.
    SpellCast { spell: SpellType },
    /// A portal shift fired.
    PortalShift,
    /// Player collected a pickup.
    Pickup,
}
