//! Material model for ray tracing.
//!
//! A material blends four light contributions (diffuse, specular, reflection,
//! refraction) through per-channel albedo weights. Two canonical presets,
//! [`MIRROR`] and [`GLASS`], are shared by the fixed demo spheres.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Surface material: refractive index, albedo weights, diffuse color and
/// Phong specular exponent.
///
/// The albedo channels weight, in order, the diffuse, specular, reflected and
/// refracted contributions of [`cast_ray`](crate::trace::cast_ray). They are
/// not required to sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Index of refraction (1.0 = air/vacuum, 1.5 = glass).
    pub refraction: f32,
    /// Blend weights for the diffuse, specular, reflection and refraction
    /// contributions.
    pub albedo: [f32; 4],
    /// Base diffuse color, linear RGB.
    pub diffuse: Color,
    /// Phong specular exponent; larger values give sharper highlights.
    pub specular: f32,
}

impl Default for Material {
    /// The ground-plane material: purely diffuse with an over-unity diffuse
    /// weight, color filled in per hit point by the checkerboard.
    fn default() -> Self {
        Self {
            refraction: 1.0,
            albedo: [2.0, 0.0, 0.0, 0.0],
            diffuse: Vec3A::ZERO,
            specular: 0.0,
        }
    }
}

/// Perfect mirror: nearly all reflection with a very sharp highlight.
pub const MIRROR: Material = Material {
    refraction: 1.0,
    albedo: [0.0, 16.0, 0.8, 0.0],
    diffuse: Vec3A::new(1.0, 1.0, 1.0),
    specular: 1425.0,
};

/// Glass: mostly refraction with a specular sheen.
pub const GLASS: Material = Material {
    refraction: 1.5,
    albedo: [0.0, 0.9, 0.1, 0.8],
    diffuse: Vec3A::new(0.6, 0.7, 0.8),
    specular: 125.0,
};
