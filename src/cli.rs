//! Command-line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal progress output
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "prismray")]
#[command(about = "A minimal recursive ray tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1200", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "800", help = "Image height in pixels")]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "60.0", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Number of randomized spheres added to the two fixed demo spheres
    #[arg(long, default_value = "20", help = "Number of randomized spheres")]
    pub spheres: usize,

    /// Number of randomized point lights
    #[arg(long, default_value = "3", help = "Number of randomized point lights")]
    pub lights: usize,

    /// RNG seed for reproducible scene generation
    #[arg(long, help = "RNG seed for reproducible scene generation")]
    pub seed: Option<u64>,

    /// Send image to TEV for real-time visualization
    #[arg(long, help = "Send image to TEV for real-time visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png for tone-mapped 8-bit, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png for tone-mapped 8-bit, .exr for HDR linear)")]
    pub output: String,
}
