//! Headless arena combat simulation.
//!
//! Owns the hecs world and runs the per-tick pipeline:
//! AI decisions, timers, movement, collision detection, damage resolution,
//! death and cleanup. No rendering, audio, or I/O — external collaborators
//! consume snapshots and audio events.

pub mod engine;
pub mod geometry;
pub mod mesh;
pub mod progression;
pub mod registry;
pub mod spawn;
pub mod systems;
