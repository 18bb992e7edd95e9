//! Sphere primitive for ray tracing.
//!
//! Implements closed-form ray-sphere intersection using the projection /
//! perpendicular-distance form of the quadratic.

use glam::Vec3A;

use crate::material::Material;
use crate::ray::Ray;

/// Minimum positive hit distance, rejecting self-intersections ("acne").
pub const HIT_EPSILON: f32 = 0.001;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (positive).
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Test the ray against this sphere, returning the hit distance.
    ///
    /// Projects the center onto the ray and rejects when the perpendicular
    /// squared distance exceeds radius². Prefers the smaller root; either
    /// root must exceed [`HIT_EPSILON`] to count. The ray direction must be
    /// a unit vector.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Vector from ray origin to sphere center
        let oc = self.center - ray.origin;
        let tca = oc.dot(ray.direction);
        let d2 = oc.dot(oc) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        if t0 > HIT_EPSILON {
            Some(t0)
        } else if t1 > HIT_EPSILON {
            Some(t1)
        } else {
            None
        }
    }
}
