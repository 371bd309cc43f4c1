//! Adversary AI system: ticks each scheduled behavior tree once per step.
//!
//! The tree engine is world-agnostic; this module supplies the
//! [`BehaviorContext`] that reads and mutates ECS state. Missing entities
//! or components always surface as `None`/`Failure`, never as errors —
//! trees must tolerate entities destroyed between construction and tick.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use arena_core::components::{Death, Enemy, Health, Motion, Rooted};
use arena_core::constants::{FLEE_RECOVER_RATE, LOW_HEALTH_THRESHOLD, MELEE_RANGE};

use arena_ai::profiles::profile;
use arena_ai::{ActionKind, BehaviorContext, BehaviorTree, ConditionKind, NodeState};

use crate::spawn;

/// Tick every scheduled tree. Root return values are discarded — root
/// completion has no caller.
pub fn run(world: &mut World, ai: &mut BTreeMap<Entity, BehaviorTree>, dt: f32) {
    let player = super::player_entity(world);
    for (&entity, tree) in ai.iter_mut() {
        // Dying entities leave the schedule at resolution time; this guard
        // covers same-tick ordering only.
        if world.get::<&Death>(entity).is_ok() {
            continue;
        }
        let mut ctx = EnemyBehavior {
            world: &mut *world,
            entity,
            player,
        };
        let _ = tree.tick(dt, &mut ctx);
    }
}

/// World access for one adversary's tree walk.
pub struct EnemyBehavior<'w> {
    pub world: &'w mut World,
    pub entity: Entity,
    pub player: Option<Entity>,
}

impl EnemyBehavior<'_> {
    fn pos_of(&self, entity: Entity) -> Option<glam::Vec2> {
        self.world.get::<&Motion>(entity).ok().map(|m| m.pos)
    }

    fn set_velocity(&mut self, vel: glam::Vec2) {
        if let Ok(mut motion) = self.world.get::<&mut Motion>(self.entity) {
            motion.vel = vel;
            if vel.length_squared() > f32::EPSILON {
                motion.angle = vel.y.atan2(vel.x);
            }
        }
    }

    fn flee_recover(&mut self, dt: f32) -> NodeState {
        let Some(target) = self.player else {
            return NodeState::Failure;
        };
        let (Some(my_pos), Some(target_pos)) = (self.pos_of(self.entity), self.pos_of(target))
        else {
            return NodeState::Failure;
        };
        let Ok(enemy) = self.world.get::<&Enemy>(self.entity).map(|e| *e) else {
            return NodeState::Failure;
        };

        let dist = my_pos.distance(target_pos);
        // Inside melee range fleeing is pointless: hold position and let
        // the attack branch take over next tick.
        if dist <= MELEE_RANGE {
            return NodeState::Success;
        }
        // Out of danger.
        if dist > 2.0 * enemy.range {
            self.set_velocity(glam::Vec2::ZERO);
            return NodeState::Success;
        }

        let p = profile(enemy.archetype);
        if p.kites {
            let away = (my_pos - target_pos).normalize_or_zero();
            self.set_velocity(away * p.speed);
            if let Ok(mut health) = self.world.get::<&mut Health>(self.entity) {
                health.current = (health.current + FLEE_RECOVER_RATE * dt).min(health.max);
            }
            return NodeState::Running;
        }

        // Non-kiting archetypes just stop.
        self.set_velocity(glam::Vec2::ZERO);
        NodeState::Success
    }

    fn attack(&mut self) -> NodeState {
        let Some(target) = self.player else {
            return NodeState::Failure;
        };
        let (Some(my_pos), Some(target_pos)) = (self.pos_of(self.entity), self.pos_of(target))
        else {
            return NodeState::Failure;
        };
        let Ok(enemy) = self.world.get::<&Enemy>(self.entity).map(|e| *e) else {
            return NodeState::Failure;
        };

        let p = profile(enemy.archetype);
        let dir = target_pos - my_pos;

        // Primary and secondary are independent checks; both can fire in
        // the same tick.
        if enemy.primary_cooldown <= 0.0 {
            if p.melee {
                spawn::spawn_melee_swing(self.world, my_pos, dir, p.attack_damage);
            } else {
                let muzzle = my_pos + dir.normalize_or_zero() * 20.0;
                spawn::spawn_enemy_bolt(self.world, muzzle, dir, p.attack_damage);
            }
            if let Ok(mut e) = self.world.get::<&mut Enemy>(self.entity) {
                e.primary_cooldown = p.primary_cooldown;
            }
        }

        if let Some(secondary_cd) = p.secondary_cooldown {
            if enemy.secondary_cooldown <= 0.0 {
                spawn::spawn_nova(self.world, my_pos, p.attack_damage);
                if let Ok(mut e) = self.world.get::<&mut Enemy>(self.entity) {
                    e.secondary_cooldown = secondary_cd;
                }
            }
        }

        NodeState::Success
    }

    fn move_toward_target(&mut self) -> NodeState {
        let Some(target) = self.player else {
            return NodeState::Failure;
        };
        let (Some(my_pos), Some(target_pos)) = (self.pos_of(self.entity), self.pos_of(target))
        else {
            return NodeState::Failure;
        };
        let Ok(enemy) = self.world.get::<&Enemy>(self.entity).map(|e| *e) else {
            return NodeState::Failure;
        };

        if my_pos.distance(target_pos) <= enemy.range {
            return NodeState::Success;
        }
        // Crowd control suppresses movement outright.
        if self.world.get::<&Rooted>(self.entity).is_ok() {
            return NodeState::Failure;
        }

        let p = profile(enemy.archetype);
        self.set_velocity((target_pos - my_pos).normalize_or_zero() * p.speed);
        // Observed engine behavior: a pure-movement tick reports Failure
        // up the tree even though velocity was set. Preserved as-is.
        NodeState::Failure
    }
}

impl BehaviorContext for EnemyBehavior<'_> {
    fn check(&mut self, condition: ConditionKind, _dt: f32) -> Option<bool> {
        match condition {
            ConditionKind::LowHealth => {
                let health = self.world.get::<&Health>(self.entity).ok().map(|h| *h)?;
                Some(health.current / health.max <= LOW_HEALTH_THRESHOLD)
            }
            ConditionKind::TargetInRange => {
                let enemy = self.world.get::<&Enemy>(self.entity).ok().map(|e| *e)?;
                let target = self.player?;
                let my_pos = self.pos_of(self.entity)?;
                let target_pos = self.pos_of(target)?;

                let in_range = my_pos.distance(target_pos) < enemy.range;
                // Archetypes with a secondary ability may attack from any
                // distance once it is off cooldown.
                let secondary_ready = profile(enemy.archetype).secondary_cooldown.is_some()
                    && enemy.secondary_cooldown <= 0.0;
                Some(in_range || secondary_ready)
            }
        }
    }

    fn perform(&mut self, action: ActionKind, dt: f32) -> NodeState {
        match action {
            ActionKind::FleeRecover => self.flee_recover(dt),
            ActionKind::Attack => self.attack(),
            ActionKind::MoveTowardTarget => self.move_toward_target(),
        }
    }
}
