//! # Output Module
//!
//! Turns the renderer's linear f32 framebuffer into something viewable:
//! - PNG export with the renderer's max-channel tone map and 8-bit quantization
//! - EXR export preserving full linear HDR precision
//! - Real-time visualization via TEV (The EXR Viewer) over TCP
//!
//! The PNG tone map is part of the renderer's visual contract: each pixel is
//! divided by `max(1, max(r, g, b))`, so in-gamut colors pass through
//! unchanged and over-bright colors are normalized by their brightest channel
//! instead of clipping per channel.

use exr::prelude::*;
use image::{ImageBuffer, Rgb};
use log::{debug, info, warn};
use std::net::TcpStream;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Tone-map one linear pixel: divide by max(1, max-channel).
///
/// Colors inside [0, 1] are returned unchanged; brighter colors are scaled so
/// their largest channel lands exactly on 1.0, preserving hue.
pub fn tone_map(pixel: [f32; 3]) -> [f32; 3] {
    let max = 1.0_f32.max(pixel[0]).max(pixel[1]).max(pixel[2]);
    [pixel[0] / max, pixel[1] / max, pixel[2] / max]
}

/// Save an f32 RGB image as an 8-bit PNG.
///
/// Applies [`tone_map`] per pixel and quantizes each channel to `255 * c`.
/// I/O errors are logged as warnings rather than panicking.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str, width: u32, height: u32) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        let mapped = tone_map([pixel[0], pixel[1], pixel[2]]);
        Rgb([
            (255.0 * mapped[0]) as u8,
            (255.0 * mapped[1]) as u8,
            (255.0 * mapped[2]) as u8,
        ])
    });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save an f32 RGB image as EXR with full HDR precision.
///
/// No tone mapping or quantization: the linear light values go to disk as-is,
/// for viewing in TEV or downstream grading. Errors are logged as warnings.
pub fn save_image_as_exr(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str, width: u32, height: u32) {
    let pixels = image
        .pixels()
        .map(|rgb| (rgb[0], rgb[1], rgb[2]))
        .collect::<Vec<(f32, f32, f32)>>();

    let result = write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        pixels[y * (width as usize) + x]
    });

    match result {
        Ok(_) => info!("HDR image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}

/// Send an f32 RGB image to a TEV viewer for real-time visualization.
///
/// Connects over TCP (default port 14158 when none is given), creates the
/// image in TEV, then streams the framebuffer converted from interleaved
/// RGB to TEV's channel-wise layout. Connection or protocol failures are
/// logged and otherwise ignored: a missing viewer never fails a render.
pub fn send_image_to_tev(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, tev_address: &str, width: u32, height: u32) {
    // Add default port if not specified
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let create_packet = PacketCreateImage {
        image_name: "prismray_output",
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    // Convert image data from interleaved (RGBRGB...) to planar (RRR...GGG...BBB...) for TEV
    let pixel_count = (width * height) as usize;
    let mut rgb_data = Vec::with_capacity(pixel_count * 3);
    for channel in 0..3 {
        for pixel in image.pixels() {
            rgb_data.push(pixel[channel]);
        }
    }

    debug!(
        "Sending {} pixels to TEV ({:.1} MB)",
        pixel_count,
        rgb_data.len() as f32 * 4.0 / 1_000_000.0
    );
    let start_time = std::time::Instant::now();

    let update_packet = PacketUpdateImage {
        image_name: "prismray_output",
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, (width * height) as u64, (2 * width * height) as u64],
        channel_strides: &[1, 1, 1],
        data: &rgb_data,
    };

    match client.send(update_packet) {
        Ok(_) => info!(
            "Image data sent to TEV at {} successfully in {:.2?}",
            tev_address,
            start_time.elapsed()
        ),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}
