//! Camera for ray generation and scene rendering.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::ray::Ray;
use crate::scene::Scene;
use crate::trace::cast_ray;

/// Pinhole camera fixed at the origin, looking down -z.
///
/// Each pixel maps to exactly one primary ray; there is no multi-sampling.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
    /// Vertical field of view in radians.
    pub fov: f32,
}

impl Camera {
    /// Create a camera for the given image size and vertical field of view
    /// (radians).
    pub fn new(width: u32, height: u32, fov: f32) -> Self {
        Self { width, height, fov }
    }

    /// Render the scene into a linear f32 RGB framebuffer.
    ///
    /// Pixels are independent, so the loop runs data-parallel over the
    /// framebuffer with each worker writing its own cell. The scene must be
    /// fully built before this is called; it is only read here.
    ///
    /// Returns an HDR image buffer with unclamped linear RGB values.
    pub fn render(&self, scene: &Scene) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::new(self.width, self.height);

        info!("Rendering using {} CPU cores...", rayon::current_num_threads());
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.width * self.height) as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

        image.enumerate_pixels_mut().par_bridge().for_each(|(px, py, pixel)| {
            let ray = self.primary_ray(px, py);
            let color = cast_ray(scene, &ray, 0);
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());

        image
    }

    /// Primary ray through the center of pixel (px, py).
    fn primary_ray(&self, px: u32, py: u32) -> Ray {
        let dir_x = (px as f32 + 0.5) - self.width as f32 / 2.0;
        let dir_y = -(py as f32 + 0.5) + self.height as f32 / 2.0;
        let dir_z = -(self.height as f32) / (2.0 * (self.fov / 2.0).tan());
        Ray::new(Vec3A::ZERO, Vec3A::new(dir_x, dir_y, dir_z).normalize())
    }
}
