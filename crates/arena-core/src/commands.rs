//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::SpellType;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Encounter control ---
    /// Set up a fresh encounter and activate the simulation.
    StartEncounter,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },

    // --- Player control ---
    /// Set the player's movement direction (normalized internally).
    Move { dir: Vec2 },
    /// Stop the player.
    Halt,
    /// Cast a spell toward `dir` at the school's current level.
    CastSpell { spell: SpellType, dir: Vec2 },
}
