//! Recursive light transport.
//!
//! [`cast_ray`] is the heart of the renderer: it finds the closest surface,
//! recurses for the reflected and refracted rays, probes each light for
//! shadowing and blends the four contributions through the material's albedo.

use glam::Vec3A;

use crate::material::Color;
use crate::ray::Ray;
use crate::scene::Scene;

/// Color returned for rays that leave the scene or exhaust the recursion
/// budget.
pub const SKY_COLOR: Color = Vec3A::new(0.2, 0.7, 0.8);

/// Deepest recursion level that still evaluates shading; one past this
/// short-circuits to [`SKY_COLOR`].
const MAX_DEPTH: u32 = 4;

/// Mirror reflection of `ray` about the surface `normal`.
///
/// Assumes `ray` points toward the surface and `normal` is unit length. The
/// result is not normalized.
pub fn reflect(ray: Vec3A, normal: Vec3A) -> Vec3A {
    ray - normal * 2.0 * ray.dot(normal)
}

/// Snell's-law refraction of `ray` crossing into the medium behind `normal`.
///
/// `eta_normal` is the refractive index on the far side of the surface and
/// `eta_ray` the index of the medium the ray travels in (1.0 for air). When
/// the ray arrives from behind the surface, the normal is flipped and the two
/// indices swapped, exactly once. Under total internal reflection there is no
/// transmitted ray and the fixed fallback direction {1,0,0} is returned.
pub fn refract(ray: Vec3A, normal: Vec3A, eta_normal: f32, eta_ray: f32) -> Vec3A {
    let cos_ray = -ray.dot(normal).clamp(-1.0, 1.0);

    if cos_ray < 0.0 {
        // Exiting the medium: flip the normal and swap the indices
        return refract(ray, -normal, eta_ray, eta_normal);
    }

    let eta = eta_ray / eta_normal;
    let k = 1.0 - eta * eta * (1.0 - cos_ray * cos_ray);

    if k < 0.0 {
        Vec3A::new(1.0, 0.0, 0.0)
    } else {
        ray * eta + normal * (eta * cos_ray - k.sqrt())
    }
}

/// Trace a ray through the scene and return its linear RGB color.
///
/// Returns [`SKY_COLOR`] when the recursion depth exceeds the limit or
/// nothing is hit. Otherwise both a reflection and a refraction ray are
/// traced unconditionally, every light is tested for occlusion with a raw
/// distance comparison (no falloff), and the final color is
///
/// ```text
/// diffuse * intensity * albedo[0] + white * specular * albedo[1]
///     + reflected * albedo[2] + refracted * albedo[3]
/// ```
///
/// Channels are not clamped and may exceed 1.0.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    let hit = match scene.intersect(ray) {
        Some(hit) if depth <= MAX_DEPTH => hit,
        _ => return SKY_COLOR,
    };

    let reflect_dir = reflect(ray.direction, hit.normal).normalize();
    let refract_dir = refract(ray.direction, hit.normal, hit.material.refraction, 1.0).normalize();
    let reflect_color = cast_ray(scene, &Ray::new(hit.point, reflect_dir), depth + 1);
    let refract_color = cast_ray(scene, &Ray::new(hit.point, refract_dir), depth + 1);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for &light in &scene.lights {
        let light_dir = (light - hit.point).normalize();

        // Shadow probe: an occluder closer than the light blocks it entirely
        let shadow_ray = Ray::new(hit.point, light_dir);
        if let Some(shadow) = scene.intersect(&shadow_ray) {
            if (shadow.point - hit.point).length() < (light - hit.point).length() {
                continue;
            }
        }

        diffuse_intensity += light_dir.dot(hit.normal).max(0.0);
        specular_intensity += (-reflect(-light_dir, hit.normal))
            .dot(ray.direction)
            .max(0.0)
            .powf(hit.material.specular);
    }

    let albedo = hit.material.albedo;
    hit.material.diffuse * diffuse_intensity * albedo[0]
        + Vec3A::ONE * specular_intensity * albedo[1]
        + reflect_color * albedo[2]
        + refract_color * albedo[3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;

    const GLASS_ETA: f32 = 1.5;

    fn approx(a: Vec3A, b: Vec3A, tol: f32) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn reflection_preserves_magnitude() {
        let normals = [
            Vec3A::Y,
            Vec3A::new(0.0, 0.0, 1.0),
            Vec3A::new(1.0, 1.0, 1.0).normalize(),
        ];
        let dirs = [
            Vec3A::new(0.0, -1.0, 0.0),
            Vec3A::new(0.6, -0.8, 0.0),
            Vec3A::new(0.3, -0.5, -0.9).normalize(),
        ];

        for n in normals {
            for d in dirs {
                let r = reflect(d, n);
                assert!((r.length() - d.length()).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn reflection_of_grazing_ray_flips_normal_component() {
        let d = Vec3A::new(0.6, -0.8, 0.0);
        let r = reflect(d, Vec3A::Y);
        assert!(approx(r, Vec3A::new(0.6, 0.8, 0.0), 1e-5));
    }

    #[test]
    fn refraction_round_trips_through_a_parallel_slab() {
        let n = Vec3A::new(0.0, 0.0, 1.0);
        let d = Vec3A::new(0.3, 0.1, -1.0).normalize();

        // Into the glass through the front face, out through the parallel
        // back face (outward normal -n)
        let inside = refract(d, n, GLASS_ETA, 1.0).normalize();
        let out = refract(inside, -n, GLASS_ETA, 1.0).normalize();

        assert!(approx(out, d, 1e-3), "out = {out:?}");
    }

    #[test]
    fn refraction_bends_toward_the_normal_entering_dense_medium() {
        let n = Vec3A::new(0.0, 0.0, 1.0);
        let d = Vec3A::new(0.5, 0.0, -1.0).normalize();

        let t = refract(d, n, GLASS_ETA, 1.0).normalize();
        // Transmitted ray makes a smaller angle with -n than the incident ray
        assert!(t.z < d.z);
    }

    #[test]
    fn total_internal_reflection_returns_sentinel() {
        // Inside glass, hitting the surface at ~53 degrees, past the ~41.8
        // degree critical angle
        let d = Vec3A::new(0.8, 0.0, 0.6);
        let n = Vec3A::new(0.0, 0.0, 1.0);

        let t = refract(d, n, GLASS_ETA, 1.0);
        assert_eq!(t, Vec3A::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn depth_exhaustion_returns_sky_even_with_geometry_in_front() {
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(
            Vec3A::new(0.0, 0.0, -5.0),
            1.0,
            Material::default(),
        ));
        scene.lights.push(Vec3A::new(0.0, 30.0, 0.0));

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(cast_ray(&scene, &ray, 5), SKY_COLOR);
        assert_eq!(cast_ray(&scene, &ray, 17), SKY_COLOR);
    }

    #[test]
    fn empty_scene_returns_sky_for_every_ray() {
        let scene = Scene::new();
        let dirs = [
            Vec3A::new(0.0, 0.0, -1.0),
            Vec3A::new(0.0, 1.0, 0.0),
            Vec3A::new(0.3, 0.2, -0.9).normalize(),
        ];

        for d in dirs {
            assert_eq!(cast_ray(&scene, &Ray::new(Vec3A::ZERO, d), 0), SKY_COLOR);
        }
    }

    #[test]
    fn diffuse_sphere_shades_its_near_pole() {
        // Fully diffuse white sphere, lit from above and in front so the
        // near pole actually faces the light
        let mut scene = Scene::new();
        scene.spheres.push(Sphere::new(
            Vec3A::new(0.0, 0.0, -5.0),
            1.0,
            Material {
                refraction: 1.0,
                albedo: [1.0, 0.0, 0.0, 0.0],
                diffuse: Vec3A::ONE,
                specular: 10.0,
            },
        ));
        scene.lights.push(Vec3A::new(0.0, 5.0, 0.0));

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let hit = scene.intersect(&ray).expect("must hit the near pole");
        assert!(approx(hit.normal, Vec3A::new(0.0, 0.0, 1.0), 1e-4));

        let color = cast_ray(&scene, &ray, 0);
        // Pure diffuse white: all channels equal and positive, and with zero
        // reflect/refract weights the recursion contributes nothing
        assert!(color.x > 0.0);
        assert!((color.x - color.y).abs() < 1e-6);
        assert!((color.y - color.z).abs() < 1e-6);

        let expected = (Vec3A::new(0.0, 5.0, 0.0) - hit.point)
            .normalize()
            .dot(hit.normal);
        assert!((color.x - expected).abs() < 1e-4);
    }

    #[test]
    fn occluded_light_contributes_nothing() {
        // Target sphere straight ahead, occluder between it and the light
        let target = Sphere::new(
            Vec3A::new(0.0, 0.0, -10.0),
            1.0,
            Material {
                refraction: 1.0,
                albedo: [1.0, 1.0, 0.0, 0.0],
                diffuse: Vec3A::ONE,
                specular: 20.0,
            },
        );
        let light = Vec3A::new(0.0, 10.0, -5.0);

        let mut open = Scene::new();
        open.spheres.push(target);
        open.lights.push(light);

        // Occluder sitting on the segment between the shaded point and the light
        let mut blocked = open.clone();
        blocked.spheres.push(Sphere::new(
            Vec3A::new(0.0, 5.0, -7.0),
            2.0,
            Material::default(),
        ));

        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let lit = cast_ray(&open, &ray, 0);
        let shadowed = cast_ray(&blocked, &ray, 0);

        assert!(lit.length() > 0.0);
        assert_eq!(shadowed, Vec3A::ZERO);
    }
}
