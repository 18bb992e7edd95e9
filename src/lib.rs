//! Prismray recursive ray tracer
//!
//! Renders a sphere scene over a checkerboard ground plane with reflection,
//! refraction, diffuse and specular shading. Outputs PNG and EXR formats with
//! optional TEV viewer integration.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod logger;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod trace;
