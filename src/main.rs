use clap::Parser;
use log::info;

use prismray::camera::Camera;
use prismray::cli::Args;
use prismray::logger::init_logger;
use prismray::output::{save_image_as_exr, save_image_as_png, send_image_to_tev};
use prismray::random;
use prismray::scene::Scene;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("Prismray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, scene: {} random spheres, {} lights",
        args.width, args.height, args.spheres, args.lights
    );

    // The scene is fully built before rendering; read-only afterwards
    let mut rng = random::scene_rng(args.seed);
    let scene = Scene::generate(args.spheres, args.lights, &mut rng);

    let camera = Camera::new(args.width, args.height, args.fov.to_radians());
    let image = camera.render(&scene);

    // Send image to TEV if requested
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&image, tev_address, args.width, args.height);
    }

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output, args.width, args.height);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output, args.width, args.height);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
