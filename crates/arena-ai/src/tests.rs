#[cfg(test)]
mod tests {
    use arena_core::enums::EnemyArchetype;

    use crate::node::{ActionKind, ConditionKind, Node, NodeState, Strategy};
    use crate::profiles::profile;
    use crate::tree::{BehaviorContext, BehaviorTree, NodeId};

    /// Scripted context: fixed result per condition/action kind, with a
    /// log of everything that was actually evaluated.
    struct Scripted {
        conditions: Vec<(ConditionKind, Option<bool>)>,
        actions: Vec<(ActionKind, NodeState)>,
        performed: Vec<ActionKind>,
    }

    impl Scripted {
        fn new() -> Self {
            Self {
                conditions: Vec::new(),
                actions: Vec::new(),
                performed: Vec::new(),
            }
        }

        fn condition(mut self, kind: ConditionKind, result: Option<bool>) -> Self {
            self.conditions.push((kind, result));
            self
        }

        fn action(mut self, kind: ActionKind, result: NodeState) -> Self {
            self.actions.push((kind, result));
            self
        }

        fn times_performed(&self, kind: ActionKind) -> usize {
            self.performed.iter().filter(|&&k| k == kind).count()
        }
    }

    impl BehaviorContext for Scripted {
        fn check(&mut self, condition: ConditionKind, _dt: f32) -> Option<bool> {
            self.conditions
                .iter()
                .find(|(k, _)| *k == condition)
                .and_then(|(_, r)| *r)
        }

        fn perform(&mut self, action: ActionKind, _dt: f32) -> NodeState {
            self.performed.push(action);
            self.actions
                .iter()
                .find(|(k, _)| *k == action)
                .map(|(_, r)| *r)
                .unwrap_or(NodeState::Success)
        }
    }

    /// Build a control node over freshly pushed action leaves, one per
    /// scripted kind.
    fn control_of_actions(strategy: Strategy, kinds: &[ActionKind]) -> BehaviorTree {
        let mut nodes = Vec::new();
        let mut children = Vec::new();
        for &kind in kinds {
            nodes.push(Node::action(kind, 0.0, true));
            children.push(NodeId(nodes.len() - 1));
        }
        nodes.push(Node::control(strategy, children));
        let root = NodeId(nodes.len() - 1);
        BehaviorTree::new(nodes, root)
    }

    // ---- Sequence ----

    #[test]
    fn test_sequence_short_circuits_on_failure() {
        // Children [Success, Failure, Success]: Failure this tick, and the
        // third child is never ticked.
        let mut tree = control_of_actions(
            Strategy::Sequence,
            &[
                ActionKind::FleeRecover,
                ActionKind::Attack,
                ActionKind::MoveTowardTarget,
            ],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Success)
            .action(ActionKind::Attack, NodeState::Failure)
            .action(ActionKind::MoveTowardTarget, NodeState::Success);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
        assert_eq!(
            ctx.performed,
            vec![ActionKind::FleeRecover, ActionKind::Attack]
        );
    }

    #[test]
    fn test_sequence_succeeds_when_all_succeed() {
        let mut tree = control_of_actions(
            Strategy::Sequence,
            &[ActionKind::FleeRecover, ActionKind::Attack],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Success)
            .action(ActionKind::Attack, NodeState::Success);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
    }

    /// The sequence has no cross-tick memory: a Running child does not
    /// become a resume point. Documented quirk, preserved deliberately.
    #[test]
    fn test_sequence_restarts_from_first_child_every_tick() {
        let mut tree = control_of_actions(
            Strategy::Sequence,
            &[ActionKind::FleeRecover, ActionKind::Attack],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Success)
            .action(ActionKind::Attack, NodeState::Running);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
        // First child re-evaluated on the second tick.
        assert_eq!(ctx.times_performed(ActionKind::FleeRecover), 2);
    }

    // ---- Selector ----

    #[test]
    fn test_selector_resumes_at_running_child() {
        let mut tree = control_of_actions(
            Strategy::Selector,
            &[ActionKind::FleeRecover, ActionKind::Attack],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Failure)
            .action(ActionKind::Attack, NodeState::Running);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
        // The first child was only evaluated on the first tick; the
        // remembered index never advanced past the Running child.
        assert_eq!(ctx.times_performed(ActionKind::FleeRecover), 1);
        assert_eq!(ctx.times_performed(ActionKind::Attack), 3);
    }

    #[test]
    fn test_selector_resets_on_success() {
        let mut tree = control_of_actions(
            Strategy::Selector,
            &[ActionKind::FleeRecover, ActionKind::Attack],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Failure)
            .action(ActionKind::Attack, NodeState::Success);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
        // Index reset: the next tick starts from the first child again.
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
        assert_eq!(ctx.times_performed(ActionKind::FleeRecover), 2);
    }

    #[test]
    fn test_selector_exhaustion_fails_and_resets() {
        let mut tree = control_of_actions(
            Strategy::Selector,
            &[ActionKind::FleeRecover, ActionKind::Attack],
        );
        let mut ctx = Scripted::new()
            .action(ActionKind::FleeRecover, NodeState::Failure)
            .action(ActionKind::Attack, NodeState::Failure);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
        // Both children evaluated on both ticks.
        assert_eq!(ctx.times_performed(ActionKind::FleeRecover), 2);
        assert_eq!(ctx.times_performed(ActionKind::Attack), 2);
    }

    // ---- Parallel ----

    #[test]
    fn test_parallel_is_deterministic_placeholder() {
        let mut tree = control_of_actions(Strategy::Parallel, &[ActionKind::Attack]);
        let mut ctx = Scripted::new().action(ActionKind::Attack, NodeState::Failure);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
        assert!(ctx.performed.is_empty(), "Parallel must have no side effects");
    }

    // ---- Condition ----

    #[test]
    fn test_condition_matches_expected() {
        let nodes = vec![Node::condition(ConditionKind::LowHealth, true)];
        let mut tree = BehaviorTree::new(nodes, NodeId(0));

        let mut ctx = Scripted::new().condition(ConditionKind::LowHealth, Some(true));
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);

        let mut ctx = Scripted::new().condition(ConditionKind::LowHealth, Some(false));
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
    }

    #[test]
    fn test_condition_missing_state_is_failure() {
        // Entity/component gone mid-walk: predicate yields None.
        let nodes = vec![Node::condition(ConditionKind::LowHealth, false)];
        let mut tree = BehaviorTree::new(nodes, NodeId(0));
        let mut ctx = Scripted::new().condition(ConditionKind::LowHealth, None);
        // Even with expected=false, an unanswerable predicate fails.
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
    }

    // ---- Action duration gate ----

    #[test]
    fn test_action_duration_gate() {
        let nodes = vec![Node::action(ActionKind::Attack, 0.5, false)];
        let mut tree = BehaviorTree::new(nodes, NodeId(0));
        let mut ctx = Scripted::new().action(ActionKind::Attack, NodeState::Failure);

        for tick in 1..=4 {
            assert_eq!(
                tree.tick(0.1, &mut ctx),
                NodeState::Running,
                "tick {tick} should be Running"
            );
        }
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
        // The wrapped action ran every tick, its own result discarded.
        assert_eq!(ctx.times_performed(ActionKind::Attack), 5);

        // The node reset to Ready and accepts a fresh cycle.
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
    }

    #[test]
    fn test_action_zero_duration_is_passthrough() {
        let nodes = vec![Node::action(ActionKind::Attack, 0.0, false)];
        let mut tree = BehaviorTree::new(nodes, NodeId(0));

        let mut ctx = Scripted::new().action(ActionKind::Attack, NodeState::Failure);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);

        let mut ctx = Scripted::new().action(ActionKind::Attack, NodeState::Running);
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Running);
    }

    // ---- Combat tree shape ----

    #[test]
    fn test_enemy_combat_flee_branch_first() {
        let mut tree = BehaviorTree::enemy_combat();
        let mut ctx = Scripted::new()
            .condition(ConditionKind::LowHealth, Some(true))
            .action(ActionKind::FleeRecover, NodeState::Success);

        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Success);
        assert_eq!(ctx.performed, vec![ActionKind::FleeRecover]);
    }

    #[test]
    fn test_enemy_combat_falls_through_to_chase() {
        let mut tree = BehaviorTree::enemy_combat();
        let mut ctx = Scripted::new()
            .condition(ConditionKind::LowHealth, Some(false))
            .condition(ConditionKind::TargetInRange, Some(false))
            .action(ActionKind::MoveTowardTarget, NodeState::Failure);

        // Both guarded branches fail, the chase action engages, and a
        // pure-movement tick reports a net Failure at the root.
        assert_eq!(tree.tick(0.1, &mut ctx), NodeState::Failure);
        assert_eq!(ctx.performed, vec![ActionKind::MoveTowardTarget]);
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_populated() {
        let archetypes = [
            EnemyArchetype::Thrall,
            EnemyArchetype::Wisp,
            EnemyArchetype::Sentinel,
            EnemyArchetype::Hexer,
            EnemyArchetype::Overfiend,
        ];
        for archetype in archetypes {
            let p = profile(archetype);
            assert!(p.max_health > 0.0, "{archetype:?} needs health");
            assert!(p.speed > 0.0, "{archetype:?} needs speed");
            assert!(p.engagement_range > 0.0, "{archetype:?} needs range");
            assert!(p.primary_cooldown > 0.0, "{archetype:?} needs a cooldown");
            assert!(p.corpse_secs > 0.0, "{archetype:?} needs a corpse timer");
        }
        assert!(profile(EnemyArchetype::Wisp).kites);
        assert!(profile(EnemyArchetype::Sentinel).blocks_elemental);
        assert!(profile(EnemyArchetype::Hexer).secondary_cooldown.is_some());
        assert!(profile(EnemyArchetype::Overfiend).boss);
    }
}
