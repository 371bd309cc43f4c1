//! Spell progression: kills by spell school raise that school's level.
//!
//! The resolver tallies kills during its sweep and feeds them here as one
//! batch after it completes, never per-kill.

use arena_core::constants::{KILLS_PER_SPELL_LEVEL, SPELL_MAX_LEVEL};
use arena_core::enums::SpellType;
use arena_core::state::ProgressionView;

#[derive(Debug, Clone)]
pub struct SpellProgression {
    levels: [u8; SpellType::COUNT],
    kills: [u32; SpellType::COUNT],
}

impl Default for SpellProgression {
    fn default() -> Self {
        Self {
            levels: [1; SpellType::COUNT],
            kills: [0; SpellType::COUNT],
        }
    }
}

impl SpellProgression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level of a school (1..=SPELL_MAX_LEVEL).
    pub fn level(&self, spell: SpellType) -> u8 {
        self.levels[spell.index()]
    }

    pub fn kills(&self, spell: SpellType) -> u32 {
        self.kills[spell.index()]
    }

    /// Fold in one resolution sweep's kill tally.
    pub fn record_kills(&mut self, tally: &[u32; SpellType::COUNT]) {
        for i in 0..SpellType::COUNT {
            self.kills[i] += tally[i];
            while self.levels[i] < SPELL_MAX_LEVEL
                && self.kills[i] >= self.levels[i] as u32 * KILLS_PER_SPELL_LEVEL
            {
                self.levels[i] += 1;
            }
        }
    }

    pub fn view(&self) -> ProgressionView {
        ProgressionView {
            levels: self.levels,
            kills: self.kills,
        }
    }
}
