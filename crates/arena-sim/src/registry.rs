//! Collision registry: which entities currently overlap.
//!
//! A symmetric adjacency map rebuilt by the detector each tick and drained
//! by the resolver. Registration is idempotent and strictly symmetric:
//! `b ∈ reg[a] ⟺ a ∈ reg[b]` at every observation point.

use std::collections::{HashMap, HashSet};

use hecs::Entity;

#[derive(Debug, Default)]
pub struct CollisionRegistry {
    map: HashMap<Entity, HashSet<Entity>>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `a` and `b` overlap. Inserts both directions in one
    /// operation; a pair already present is left untouched.
    pub fn register(&mut self, a: Entity, b: Entity) {
        if a == b || self.contains(a, b) {
            return;
        }
        self.map.entry(a).or_default().insert(b);
        self.map.entry(b).or_default().insert(a);
    }

    /// Remove a pairing. Checks both directions before mutating; removing
    /// an absent pair is a no-op, not an error.
    pub fn unregister(&mut self, a: Entity, b: Entity) {
        if !self.contains(a, b) {
            return;
        }
        if let Some(set) = self.map.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.map.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// True if the pair is recorded (in both directions by construction).
    pub fn contains(&self, a: Entity, b: Entity) -> bool {
        self.map.get(&a).is_some_and(|s| s.contains(&b))
            && self.map.get(&b).is_some_and(|s| s.contains(&a))
    }

    /// Entities currently overlapping `e`. Empty for a never-registered
    /// entity, never a missing-key fault. Sorted so resolution order does
    /// not depend on hash state.
    pub fn overlapping(&self, e: Entity) -> Vec<Entity> {
        let mut partners: Vec<Entity> = self
            .map
            .get(&e)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default();
        partners.sort_unstable();
        partners
    }

    /// Drop `e` and every reverse edge pointing at it (entity teardown).
    pub fn remove_entity(&mut self, e: Entity) {
        if let Some(partners) = self.map.remove(&e) {
            for p in partners {
                if let Some(set) = self.map.get_mut(&p) {
                    set.remove(&e);
                }
            }
        }
    }

    /// Empty all sets. Used once per new encounter.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Symmetry invariant check, for tests and debug assertions.
    pub fn is_symmetric(&self) -> bool {
        self.map.iter().all(|(a, partners)| {
            partners
                .iter()
                .all(|b| self.map.get(b).is_some_and(|s| s.contains(a)))
        })
    }

    /// Number of entities with at least one recorded partner.
    pub fn len(&self) -> usize {
        self.map.values().filter(|s| !s.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.map.values().all(|s| s.is_empty())
    }
}
