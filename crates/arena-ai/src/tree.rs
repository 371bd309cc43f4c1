//! Tree storage and the tick algorithm.

use crate::node::{ActionKind, ConditionKind, Node, NodeState, Strategy};

/// Handle into a tree's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

/// World access for condition predicates and actions. Implemented by the
/// simulation crate; the tree itself stays ECS-free.
pub trait BehaviorContext {
    /// Evaluate a predicate. `None` means a referenced entity or component
    /// is gone; the condition node treats that as Failure, never an error.
    fn check(&mut self, condition: ConditionKind, dt: f32) -> Option<bool>;

    /// Perform an action and report its state.
    fn perform(&mut self, action: ActionKind, dt: f32) -> NodeState;
}

/// A behavior tree: an arena of nodes plus a root handle. One tree per
/// AI-controlled entity; teardown is dropping the tree.
#[derive(Debug, Clone)]
pub struct BehaviorTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl BehaviorTree {
    /// Build a tree from pre-assembled nodes. `root` must index into `nodes`.
    pub fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        debug_assert!(root.0 < nodes.len());
        Self { nodes, root }
    }

    /// The shared adversary combat tree:
    ///
    /// ```text
    /// Selector
    ///  ├─ Sequence [LowHealth?, FleeRecover]
    ///  ├─ Sequence [TargetInRange?, Attack]
    ///  └─ MoveTowardTarget
    /// ```
    pub fn enemy_combat() -> Self {
        let mut nodes = Vec::with_capacity(8);
        let mut push = |nodes: &mut Vec<Node>, n: Node| {
            nodes.push(n);
            NodeId(nodes.len() - 1)
        };

        let low_health = push(&mut nodes, Node::condition(ConditionKind::LowHealth, true));
        let flee = push(
            &mut nodes,
            Node::action(ActionKind::FleeRecover, 0.0, true),
        );
        let flee_seq = push(
            &mut nodes,
            Node::control(Strategy::Sequence, vec![low_health, flee]),
        );

        let in_range = push(
            &mut nodes,
            Node::condition(ConditionKind::TargetInRange, true),
        );
        let attack = push(&mut nodes, Node::action(ActionKind::Attack, 0.0, false));
        let attack_seq = push(
            &mut nodes,
            Node::control(Strategy::Sequence, vec![in_range, attack]),
        );

        let chase = push(
            &mut nodes,
            Node::action(ActionKind::MoveTowardTarget, 0.0, true),
        );
        let root = push(
            &mut nodes,
            Node::control(Strategy::Selector, vec![flee_seq, attack_seq, chase]),
        );

        Self::new(nodes, root)
    }

    /// Tick the root. The return value has no caller at the top level, but
    /// is exposed for tests.
    pub fn tick(&mut self, dt: f32, ctx: &mut dyn BehaviorContext) -> NodeState {
        self.tick_node(self.root, dt, ctx)
    }

    fn tick_node(&mut self, id: NodeId, dt: f32, ctx: &mut dyn BehaviorContext) -> NodeState {
        match &mut self.nodes[id.0] {
            Node::Condition { kind, expected } => {
                let (kind, expected) = (*kind, *expected);
                match ctx.check(kind, dt) {
                    Some(value) if value == expected => NodeState::Success,
                    _ => NodeState::Failure,
                }
            }
            Node::Action {
                kind,
                duration,
                elapsed,
                state,
                ..
            } => {
                let (kind, duration) = (*kind, *duration);
                if duration > 0.0 {
                    // Entering the node resets the accumulator.
                    if *state == NodeState::Ready {
                        *elapsed = 0.0;
                        *state = NodeState::Running;
                    }
                    *elapsed += dt;
                    let done = *elapsed >= duration;
                    // The wrapped action still runs every tick while the
                    // gate is open; its own result is discarded.
                    let _ = ctx.perform(kind, dt);
                    if done {
                        *state = NodeState::Ready;
                        NodeState::Success
                    } else {
                        NodeState::Running
                    }
                } else {
                    let result = ctx.perform(kind, dt);
                    *state = result;
                    result
                }
            }
            Node::Control {
                strategy, children, ..
            } => {
                let strategy = *strategy;
                let children = children.clone();
                match strategy {
                    Strategy::Sequence => self.tick_sequence(&children, dt, ctx),
                    Strategy::Selector => self.tick_selector(id, &children, dt, ctx),
                    // Reserved strategy: deterministic placeholder, children
                    // untouched.
                    Strategy::Parallel => NodeState::Success,
                }
            }
        }
    }

    /// Sequence: restart from the first child every tick it is reached.
    /// First Failure short-circuits; a Running child propagates Running
    /// without being remembered.
    fn tick_sequence(
        &mut self,
        children: &[NodeId],
        dt: f32,
        ctx: &mut dyn BehaviorContext,
    ) -> NodeState {
        for &child in children {
            match self.tick_node(child, dt, ctx) {
                NodeState::Failure => return NodeState::Failure,
                NodeState::Running => return NodeState::Running,
                NodeState::Success | NodeState::Ready => {}
            }
        }
        NodeState::Success
    }

    /// Selector: resume at the remembered child; Running preserves the
    /// index, Success resets it, Failure advances, exhaustion resets and
    /// fails.
    fn tick_selector(
        &mut self,
        id: NodeId,
        children: &[NodeId],
        dt: f32,
        ctx: &mut dyn BehaviorContext,
    ) -> NodeState {
        loop {
            let index = self.resume_index(id);
            if index >= children.len() {
                self.set_resume_index(id, 0);
                return NodeState::Failure;
            }
            match self.tick_node(children[index], dt, ctx) {
                NodeState::Running => return NodeState::Running,
                NodeState::Success => {
                    self.set_resume_index(id, 0);
                    return NodeState::Success;
                }
                NodeState::Failure | NodeState::Ready => {
                    self.set_resume_index(id, index + 1);
                }
            }
        }
    }

    fn resume_index(&self, id: NodeId) -> usize {
        match &self.nodes[id.0] {
            Node::Control { resume_index, .. } => *resume_index,
            _ => 0,
        }
    }

    fn set_resume_index(&mut self, id: NodeId, value: usize) {
        if let Node::Control { resume_index, .. } = &mut self.nodes[id.0] {
            *resume_index = value;
        }
    }
}
