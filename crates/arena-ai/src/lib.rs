//! Behavior-tree engine for adversary AI.
//!
//! Trees are arenas of nodes indexed by handle, ticked once per simulation
//! step. The tree itself never queries the ECS; world access happens through
//! the [`tree::BehaviorContext`] trait implemented by the simulation crate.

pub mod node;
pub mod profiles;
pub mod tree;

pub use node::{ActionKind, ConditionKind, Node, NodeState, Strategy};
pub use tree::{BehaviorContext, BehaviorTree, NodeId};

#[cfg(test)]
mod tests;
