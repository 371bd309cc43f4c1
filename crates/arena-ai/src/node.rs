//! Node variants and their tick-time state.

use crate::tree::NodeId;

/// Result of ticking a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not yet entered (or reset after completing a timed cycle).
    Ready,
    Running,
    Success,
    Failure,
}

/// Control-node sub-strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Ticks children in order every tick it is reached; first Failure
    /// short-circuits. No cross-tick memory.
    Sequence,
    /// Resumes at the remembered child while it reports Running; the one
    /// stateful control flow in the engine.
    Selector,
    /// Reserved extension point: deterministic Success, no side effects.
    Parallel,
}

/// Predicates evaluated against live world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    /// Health fraction at or below the low-health threshold.
    LowHealth,
    /// Target inside engagement range, or a range-independent secondary
    /// ability is off cooldown.
    TargetInRange,
}

/// Operations an action node can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    FleeRecover,
    Attack,
    MoveTowardTarget,
}

/// A single node in a behavior tree arena.
#[derive(Debug, Clone)]
pub enum Node {
    Control {
        strategy: Strategy,
        /// Selector resume point; unused by other strategies.
        resume_index: usize,
        children: Vec<NodeId>,
    },
    Condition {
        kind: ConditionKind,
        expected: bool,
    },
    Action {
        kind: ActionKind,
        /// Positive duration gates the node: it reports Running until the
        /// accumulator reaches the duration, then Success for one tick.
        /// Zero or negative is a passthrough.
        duration: f32,
        /// Stored tree data; scheduling currently never consults it.
        interruptible: bool,
        elapsed: f32,
        state: NodeState,
    },
}

impl Node {
    pub fn action(kind: ActionKind, duration: f32, interruptible: bool) -> Self {
        Node::Action {
            kind,
            duration,
            interruptible,
            elapsed: 0.0,
            state: NodeState::Ready,
        }
    }

    pub fn condition(kind: ConditionKind, expected: bool) -> Self {
        Node::Condition { kind, expected }
    }

    pub fn control(strategy: Strategy, children: Vec<NodeId>) -> Self {
        Node::Control {
            strategy,
            resume_index: 0,
            children,
        }
    }
}
