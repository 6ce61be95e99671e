//! Shared argument types and helpers for subcommands.

use std::path::Path;

use clap::{Args, ValueEnum};

use velolink::settings::{SchemeKind, UpSource};
use velolink::{DisplayInfo, DisplaySettings, GeoPoint};

use crate::error::CliError;

/// Color scheme choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    Dark,
    Light,
}

impl From<SchemeArg> for SchemeKind {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Dark => SchemeKind::Dark,
            SchemeArg::Light => SchemeKind::Light,
        }
    }
}

/// Rotation mode choice on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UpArg {
    North,
    SystemCourse,
    CustomCourse,
    Heading,
}

impl From<UpArg> for UpSource {
    fn from(arg: UpArg) -> Self {
        match arg {
            UpArg::North => UpSource::NorthUp,
            UpArg::SystemCourse => UpSource::SystemCourseUp,
            UpArg::CustomCourse => UpSource::CustomCourseUp,
            UpArg::Heading => UpSource::HeadingUp,
        }
    }
}

/// Rendering options shared by every subcommand.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Zoom scale in meters per pixel
    #[arg(long, default_value_t = 1.5)]
    pub meters_per_pixel: f64,

    /// Stroke-width multiplier
    #[arg(long, default_value_t = 2.0)]
    pub line_width: f64,

    /// Color scheme
    #[arg(long, value_enum, default_value = "dark")]
    pub scheme: SchemeArg,

    /// Rotation mode
    #[arg(long, value_enum, default_value = "custom-course")]
    pub up: UpArg,

    /// Display width in pixels
    #[arg(long, default_value_t = 128)]
    pub width: u16,

    /// Display height in pixels
    #[arg(long, default_value_t = 128)]
    pub height: u16,
}

impl RenderArgs {
    /// Build display settings from the arguments.
    pub fn settings(&self) -> Result<DisplaySettings, CliError> {
        let settings = DisplaySettings {
            meters_per_pixel: self.meters_per_pixel,
            line_width_scale: self.line_width,
            up_source: self.up.into(),
            color_scheme: self.scheme.into(),
            ..DisplaySettings::default()
        };
        settings
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(settings)
    }

    /// Build display info from the arguments.
    pub fn display(&self) -> DisplayInfo {
        DisplayInfo::new(self.width, self.height)
    }
}

/// Load a route from a JSON file of `[[lat, lon], ...]` pairs.
pub fn load_route(path: &Path) -> Result<Vec<GeoPoint>, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&contents)?;
    Ok(pairs
        .into_iter()
        .map(|[lat, lon]| GeoPoint::new(lat, lon))
        .collect())
}

/// A short demo route along the Hamburg Alster, used when no route file
/// is given.
pub fn demo_route() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(53.5576, 9.9965),
        GeoPoint::new(53.5590, 9.9981),
        GeoPoint::new(53.5607, 9.9999),
        GeoPoint::new(53.5625, 10.0012),
        GeoPoint::new(53.5645, 10.0018),
        GeoPoint::new(53.5667, 10.0009),
    ]
}

/// Render a byte sequence as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
