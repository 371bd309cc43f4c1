//! Overlap tests: axis-aligned boxes for the broad phase, separating-axis
//! triangle-vs-box for the narrow phase.

use glam::Vec2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
    }

    fn corners(&self) -> [Vec2; 4] {
        [
            self.center + Vec2::new(-self.half.x, -self.half.y),
            self.center + Vec2::new(self.half.x, -self.half.y),
            self.center + Vec2::new(self.half.x, self.half.y),
            self.center + Vec2::new(-self.half.x, self.half.y),
        ]
    }
}

/// Project points onto an axis, returning the (min, max) interval.
fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        let d = p.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Separating-axis test between one triangle and a box. Candidate axes:
/// the two box axes plus the three edge normals of the triangle. Overlap
/// is reported iff no separating axis exists among the five.
pub fn triangle_overlaps_aabb(tri: &[Vec2; 3], aabb: &Aabb) -> bool {
    let corners = aabb.corners();

    let mut axes = [Vec2::X, Vec2::Y, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];
    for i in 0..3 {
        let edge = tri[(i + 1) % 3] - tri[i];
        axes[2 + i] = Vec2::new(-edge.y, edge.x);
    }

    for axis in axes {
        if axis.length_squared() < f32::EPSILON {
            continue; // degenerate edge
        }
        let (tri_min, tri_max) = project(tri, axis);
        let (box_min, box_max) = project(&corners, axis);
        if tri_max < box_min || box_max < tri_min {
            return false;
        }
    }
    true
}

/// Transform a mesh triangle by position/scale/rotation and test it
/// against a box. One-directional: mesh holder vs box-only partner.
pub fn mesh_overlaps_aabb(
    triangles: &[[Vec2; 3]],
    pos: Vec2,
    scale: Vec2,
    angle: f32,
    aabb: &Aabb,
) -> bool {
    let (sin, cos) = angle.sin_cos();
    triangles.iter().any(|tri| {
        let mut world = [Vec2::ZERO; 3];
        for (out, v) in world.iter_mut().zip(tri.iter()) {
            let scaled = *v * scale;
            let rotated = Vec2::new(
                scaled.x * cos - scaled.y * sin,
                scaled.x * sin + scaled.y * cos,
            );
            *out = pos + rotated;
        }
        triangle_overlaps_aabb(&world, aabb)
    })
}
