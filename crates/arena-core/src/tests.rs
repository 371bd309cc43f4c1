#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::EncounterSnapshot;
    use crate::types::SimTime;

    #[test]
    fn test_spell_type_serde() {
        let variants = vec![
            SpellType::Fire,
            SpellType::Ice,
            SpellType::Lightning,
            SpellType::Wind,
            SpellType::Plasma,
            SpellType::Portal,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SpellType = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_spell_indices_are_distinct() {
        let all = [
            SpellType::Fire,
            SpellType::Ice,
            SpellType::Lightning,
            SpellType::Wind,
            SpellType::Plasma,
            SpellType::Portal,
        ];
        let mut seen = [false; SpellType::COUNT];
        for s in all {
            assert!(!seen[s.index()], "{s:?} index collides");
            seen[s.index()] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn test_enemy_archetype_serde() {
        let variants = vec![
            EnemyArchetype::Thrall,
            EnemyArchetype::Wisp,
            EnemyArchetype::Sentinel,
            EnemyArchetype::Hexer,
            EnemyArchetype::Overfiend,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartEncounter,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::SetTimeScale { scale: 2.0 },
            PlayerCommand::Move {
                dir: Vec2::new(1.0, -1.0),
            },
            PlayerCommand::Halt,
            PlayerCommand::CastSpell {
                spell: SpellType::Fire,
                dir: Vec2::X,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::PlayerHit,
            AudioEvent::EnemyHit {
                archetype: EnemyArchetype::Thrall,
            },
            AudioEvent::Block,
            AudioEvent::EnemyDeath {
                archetype: EnemyArchetype::Overfiend,
            },
            AudioEvent::BossOverture,
            AudioEvent::SpellCast {
                spell: SpellType::Plasma,
            },
            AudioEvent::PortalShift,
            AudioEvent::Pickup,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = EncounterSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Scaling is monotonically non-decreasing in level for every
    /// damage-dealing school, and zero for Portal.
    #[test]
    fn test_spell_scaling_table() {
        for spell in [
            SpellType::Fire,
            SpellType::Ice,
            SpellType::Lightning,
            SpellType::Wind,
            SpellType::Plasma,
        ] {
            let mut prev = 0.0;
            for level in 1..=SPELL_MAX_LEVEL {
                let s = spell_scale(spell, level);
                assert!(s >= prev, "{spell:?} scaling dips at level {level}");
                prev = s;
            }
            assert_eq!(spell_scale(spell, 1), 1.0);
        }
        for level in 1..=SPELL_MAX_LEVEL {
            assert_eq!(spell_scale(SpellType::Portal, level), 0.0);
        }
    }

    /// Out-of-range levels clamp rather than index out of bounds.
    #[test]
    fn test_spell_scaling_clamps() {
        assert_eq!(
            spell_scale(SpellType::Fire, 0),
            spell_scale(SpellType::Fire, 1)
        );
        assert_eq!(
            spell_scale(SpellType::Fire, SPELL_MAX_LEVEL + 5),
            spell_scale(SpellType::Fire, SPELL_MAX_LEVEL)
        );
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }
}
