//! Named collision meshes for narrow-phase tests.
//!
//! Stands in for the external geometry lookup: rendering-side asset
//! loading can inject real hulls; the engine ships with a built-in player
//! hull so the simulation is self-contained.

use std::collections::HashMap;

use glam::Vec2;

use arena_core::constants::PLAYER_MESH;

/// Triangle lists keyed by mesh name.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: HashMap<String, Vec<[Vec2; 3]>>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library pre-loaded with the player hull.
    pub fn with_defaults() -> Self {
        let mut lib = Self::new();
        lib.insert(PLAYER_MESH, player_hull());
        lib
    }

    pub fn insert(&mut self, name: &str, triangles: Vec<[Vec2; 3]>) {
        self.meshes.insert(name.to_string(), triangles);
    }

    pub fn get(&self, name: &str) -> Option<&[[Vec2; 3]]> {
        self.meshes.get(name).map(|v| v.as_slice())
    }
}

/// Player collision hull: a hexagonal silhouette tighter than the AABB,
/// fanned into triangles around the origin.
fn player_hull() -> Vec<[Vec2; 3]> {
    let w = arena_core::constants::PLAYER_HALF_EXTENTS[0];
    let h = arena_core::constants::PLAYER_HALF_EXTENTS[1];
    let ring = [
        Vec2::new(0.0, h),
        Vec2::new(w, h * 0.4),
        Vec2::new(w, -h * 0.4),
        Vec2::new(0.0, -h),
        Vec2::new(-w, -h * 0.4),
        Vec2::new(-w, h * 0.4),
    ];
    let center = Vec2::ZERO;
    (0..ring.len())
        .map(|i| [center, ring[i], ring[(i + 1) % ring.len()]])
        .collect()
}
