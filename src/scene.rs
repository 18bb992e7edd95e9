//! Scene model and closest-hit query.
//!
//! A scene is a flat list of spheres plus point lights. The checkerboard
//! ground plane at y = -4 is part of the geometry but not part of the data:
//! it is folded directly into the closest-hit search.

use glam::Vec3A;
use rand::Rng;

use crate::material::{Color, Material, GLASS, MIRROR};
use crate::random;
use crate::ray::Ray;
use crate::sphere::{Sphere, HIT_EPSILON};

/// Height of the ground plane.
const PLANE_Y: f32 = -4.0;
/// Nearest-hit distances at or above this sentinel mean "no intersection".
const NO_HIT_DISTANCE: f32 = 1000.0;

/// Ray-scene intersection information: hit point, outward unit normal and
/// the surface material (with the checkerboard color already resolved for
/// plane hits).
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Point where the ray meets the surface.
    pub point: Vec3A,
    /// Outward unit normal at the hit point.
    pub normal: Vec3A,
    /// Material of the surface at the hit point.
    pub material: Material,
}

/// Static scene: spheres and point lights.
///
/// Fully built before rendering starts and read-only afterwards, so it can be
/// shared freely across the parallel pixel loop.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// All spheres; intersection iterates every one of them.
    pub spheres: Vec<Sphere>,
    /// Point light positions. Every light has uniform intensity 1.0 and no
    /// distance falloff.
    pub lights: Vec<Vec3A>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the closest intersection of the ray with the ground plane or any
    /// sphere.
    ///
    /// The plane at y = -4 only counts where the ray is not parallel to it
    /// (|dir.y| > 0.001) and the hit lands inside |x| < 100, -100 < z < 50;
    /// its diffuse color comes from the checkerboard. Sphere hits past the
    /// 1000-unit sentinel are treated as misses. The ray direction must be a
    /// unit vector.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest = 1e10_f32;
        let mut hit = None;

        if ray.direction.y.abs() > HIT_EPSILON {
            let d = -(ray.origin.y - PLANE_Y) / ray.direction.y;
            let p = ray.at(d);
            if d > HIT_EPSILON && d < nearest && p.x.abs() < 100.0 && p.z < 50.0 && p.z > -100.0 {
                nearest = d;
                hit = Some(Hit {
                    point: p,
                    normal: Vec3A::Y,
                    material: Material {
                        diffuse: checkerboard(p),
                        ..Material::default()
                    },
                });
            }
        }

        for sphere in &self.spheres {
            let Some(d) = sphere.intersect(ray) else {
                continue;
            };
            if d > nearest {
                continue;
            }
            nearest = d;
            let point = ray.at(d);
            hit = Some(Hit {
                point,
                normal: (point - sphere.center).normalize(),
                material: sphere.material,
            });
        }

        if nearest < NO_HIT_DISTANCE {
            hit
        } else {
            None
        }
    }

    /// Build the demo scene: the two fixed mirror and glass spheres, plus
    /// `n_spheres` randomized diffuse spheres resting near the ground and
    /// `n_lights` random lights placed above the scene.
    pub fn generate(n_spheres: usize, n_lights: usize, rng: &mut impl Rng) -> Self {
        let mut scene = Self::new();

        // Constant between scenes to provide mirror and dielectric views
        scene
            .spheres
            .push(Sphere::new(Vec3A::new(7.0, 5.0, -18.0), 3.0, MIRROR));
        scene
            .spheres
            .push(Sphere::new(Vec3A::new(-1.0, -2.0, -12.0), 2.0, GLASS));

        for _ in 0..n_spheres {
            scene.spheres.push(random_sphere(rng));
        }
        for _ in 0..n_lights {
            scene.lights.push(random_light(rng));
        }

        scene
    }
}

/// Procedural ground-plane color from the parity of floor(x/2) + floor(z/2).
fn checkerboard(p: Vec3A) -> Color {
    let parity = ((0.5 * p.x).floor() + (0.5 * p.z).floor()) as i64 & 1;
    if parity == 0 {
        Vec3A::new(0.3, 0.3, 0.3)
    } else {
        Vec3A::new(0.3, 0.2, 0.1)
    }
}

/// A matte sphere with random position and color, radius tied to its height
/// so it sits close to the ground plane.
fn random_sphere(rng: &mut impl Rng) -> Sphere {
    let x = rng.random_range(-20.0..20.0);
    let y = rng.random_range(-3.5..-2.0);
    let z = rng.random_range(-40.0..-5.0);

    let material = Material {
        refraction: 1.0,
        albedo: [0.9, 0.5, 0.1, 0.0],
        diffuse: random::random_color(rng),
        specular: 50.0,
    };

    Sphere::new(Vec3A::new(x, y, z), y + 4.0, material)
}

/// A point light somewhere above the scene, on integer coordinates.
fn random_light(rng: &mut impl Rng) -> Vec3A {
    Vec3A::new(
        rng.random_range(-30..=30) as f32,
        rng.random_range(20..=50) as f32,
        rng.random_range(-30..=30) as f32,
    )
}
