//! Frame command - compose a single frame and dump its commands.

use std::path::PathBuf;

use clap::Args;

use velolink::{
    encode_frame, CourseEstimator, FrameComposer, GeoPoint, LocationSample, RiderState,
};

use super::common::{load_route, to_hex, RenderArgs};
use crate::error::CliError;

/// Arguments for the frame command.
#[derive(Debug, Args)]
pub struct FrameArgs {
    /// Rider latitude in degrees
    #[arg(long)]
    pub lat: f64,

    /// Rider longitude in degrees
    #[arg(long)]
    pub lon: f64,

    /// Horizontal accuracy in meters
    #[arg(long, default_value_t = 10.0)]
    pub accuracy: f64,

    /// Compass heading in degrees, if any
    #[arg(long)]
    pub heading: Option<f64>,

    /// Route file: JSON array of [lat, lon] pairs
    #[arg(long)]
    pub route: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Run the frame command.
pub fn run(args: FrameArgs) -> Result<(), CliError> {
    let route = match &args.route {
        Some(path) => load_route(path)?,
        None => Vec::new(),
    };

    let composer = FrameComposer::new(args.render.settings()?, args.render.display());
    let rider = RiderState {
        fix: Some(LocationSample::new(
            GeoPoint::new(args.lat, args.lon),
            args.accuracy,
        )),
        compass_heading: args.heading,
        ..RiderState::default()
    };

    let mut estimator = CourseEstimator::new();
    let primitives = composer.compose(&rider, &route, &mut estimator);
    let bytes = encode_frame(&primitives);

    println!("Frame: {} commands, {} bytes", primitives.len(), bytes.len());
    println!();
    for primitive in &primitives {
        println!("  {:?}", primitive);
    }
    println!();
    println!("{}", to_hex(&bytes));
    Ok(())
}
