//! Headless simulation engine.
//!
//! Owns the world, the collision registry, the AI schedule, and the RNG.
//! Callers queue commands between ticks and receive a snapshot per tick;
//! two engines with the same seed and command stream produce identical
//! snapshot streams.

use std::collections::{BTreeMap, VecDeque};

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::PlayerCommand;
use arena_core::components::{Death, Enemy, Motion};
use arena_core::constants::{DT, PLAYER_SPEED};
use arena_core::enums::EncounterPhase;
use arena_core::events::AudioEvent;
use arena_core::state::EncounterSnapshot;
use arena_core::types::SimTime;

use arena_ai::BehaviorTree;

use crate::mesh::MeshLibrary;
use crate::progression::SpellProgression;
use crate::registry::CollisionRegistry;
use crate::spawn;
use crate::systems;

/// Engine construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed; the same seed and command stream replay identically.
    pub seed: u64,
    pub time_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

pub struct ArenaEngine {
    world: World,
    time: SimTime,
    phase: EncounterPhase,
    time_scale: f32,
    rng: ChaCha8Rng,
    commands: VecDeque<PlayerCommand>,
    registry: CollisionRegistry,
    /// Behavior trees keyed by owner. Ordered map so the AI system visits
    /// adversaries in a stable order regardless of hash state.
    ai: BTreeMap<Entity, BehaviorTree>,
    meshes: MeshLibrary,
    progression: SpellProgression,
    audio_events: Vec<AudioEvent>,
}

impl ArenaEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: EncounterPhase::Idle,
            time_scale: config.time_scale.clamp(0.1, 8.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            commands: VecDeque::new(),
            registry: CollisionRegistry::new(),
            ai: BTreeMap::new(),
            meshes: MeshLibrary::with_defaults(),
            progression: SpellProgression::new(),
            audio_events: Vec::new(),
        }
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn progression(&self) -> &SpellProgression {
        &self.progression
    }

    /// Queue a command for the next tick. Commands are applied in queue
    /// order before the systems run.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.commands.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.commands.extend(commands);
    }

    /// Advance the simulation one tick and return the resulting snapshot.
    /// A paused or idle engine still drains commands and snapshots, but
    /// runs no systems and does not advance time.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            let dt = DT * self.time_scale;
            systems::ai::run(&mut self.world, &mut self.ai, dt);
            systems::timers::run(&mut self.world, dt);
            systems::movement::run(&mut self.world, dt);
            systems::detection::run(&self.world, &mut self.registry);
            systems::resolve::run(
                &mut self.world,
                &mut self.registry,
                &self.meshes,
                &mut self.ai,
                &mut self.progression,
                &mut self.audio_events,
            );
            systems::death::run(&mut self.world, &mut self.registry, &mut self.ai, dt);
            self.time.advance(dt);

            if self.encounter_over() {
                self.phase = EncounterPhase::Complete;
            }
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            &self.progression,
            audio_events,
        )
    }

    /// Over when the player is dead (or gone) or no adversary is left
    /// standing. Lingering corpses do not keep an encounter alive.
    fn encounter_over(&self) -> bool {
        let player_down = match systems::player_entity(&self.world) {
            Some(player) => self.world.get::<&Death>(player).is_ok(),
            None => true,
        };
        if player_down {
            return true;
        }
        self.world
            .query::<&Enemy>()
            .without::<&Death>()
            .iter()
            .next()
            .is_none()
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            match command {
                PlayerCommand::StartEncounter => self.start_encounter(),
                PlayerCommand::Pause => {
                    if self.phase == EncounterPhase::Active {
                        self.phase = EncounterPhase::Paused;
                    }
                }
                PlayerCommand::Resume => {
                    if self.phase == EncounterPhase::Paused {
                        self.phase = EncounterPhase::Active;
                    }
                }
                PlayerCommand::SetTimeScale { scale } => {
                    self.time_scale = scale.clamp(0.1, 8.0);
                }
                PlayerCommand::Move { dir } => self.set_player_velocity(dir),
                PlayerCommand::Halt => self.set_player_velocity(Vec2::ZERO),
                PlayerCommand::CastSpell { spell, dir } => {
                    if self.phase != EncounterPhase::Active {
                        continue;
                    }
                    let pos = systems::player_entity(&self.world)
                        .and_then(|p| self.world.get::<&Motion>(p).ok().map(|m| m.pos));
                    if let Some(pos) = pos {
                        let level = self.progression.level(spell);
                        spawn::spawn_spell_projectile(&mut self.world, spell, level, pos, dir);
                        self.audio_events.push(AudioEvent::SpellCast { spell });
                    }
                }
            }
        }
    }

    /// Tear down any previous encounter and set up a fresh one. The RNG
    /// carries across encounters, so consecutive waves differ.
    fn start_encounter(&mut self) {
        self.world.clear();
        self.registry.clear();
        self.ai.clear();
        self.audio_events.clear();
        self.time = SimTime::default();
        spawn::setup_encounter(&mut self.world, &mut self.ai, &mut self.rng);
        self.phase = EncounterPhase::Active;
    }

    fn set_player_velocity(&mut self, dir: Vec2) {
        let Some(player) = systems::player_entity(&self.world) else {
            return;
        };
        if self.world.get::<&Death>(player).is_ok() {
            return;
        }
        if let Ok(mut motion) = self.world.get::<&mut Motion>(player) {
            let dir = dir.normalize_or_zero();
            motion.vel = dir * PLAYER_SPEED;
            if dir != Vec2::ZERO {
                motion.angle = dir.y.atan2(dir.x);
            }
        }
    }
}

impl Default for ArenaEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
