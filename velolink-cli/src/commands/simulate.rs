//! Simulate command - ride a route and watch the frames go by.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use clap::Args;
use tracing::info;

use velolink::geo::{destination_point, distance_meters, initial_bearing};
use velolink::{
    DisplaySession, FrameSink, GeoPoint, LocationSample, SessionConfig, VERSION,
};

use super::common::{demo_route, load_route, to_hex, RenderArgs};
use crate::error::CliError;

/// Arguments for the simulate command.
#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Route file: JSON array of [lat, lon] pairs (demo route if omitted)
    #[arg(long)]
    pub route: Option<PathBuf>,

    /// Number of position fixes to feed
    #[arg(long, default_value_t = 60)]
    pub fixes: u32,

    /// Wall-clock time between fixes, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Simulated ground speed in meters per second
    #[arg(long, default_value_t = 6.0)]
    pub speed: f64,

    /// Simulated horizontal accuracy in meters
    #[arg(long, default_value_t = 10.0)]
    pub accuracy: f64,

    /// Print each frame as hex instead of just its size
    #[arg(long)]
    pub hex: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Transport stand-in that prints what would go over the link.
struct PrintSink {
    hex: bool,
    frames: AtomicU64,
    bytes: AtomicU64,
}

impl PrintSink {
    fn new(hex: bool) -> Self {
        Self {
            hex,
            frames: AtomicU64::new(0),
            bytes: AtomicU64::new(0),
        }
    }
}

impl FrameSink for PrintSink {
    fn send_frame(&self, frame: Bytes) {
        let n = self.frames.fetch_add(1, Ordering::Relaxed) + 1;
        self.bytes.fetch_add(frame.len() as u64, Ordering::Relaxed);
        if self.hex {
            println!("frame {:>4}  {:>3}B  {}", n, frame.len(), to_hex(&frame));
        } else {
            println!("frame {:>4}  {:>3}B", n, frame.len());
        }
    }
}

/// Run the simulate command.
pub async fn run(args: SimulateArgs) -> Result<(), CliError> {
    let route = match &args.route {
        Some(path) => load_route(path)?,
        None => demo_route(),
    };
    if route.len() < 2 {
        return Err(CliError::Config(
            "route needs at least two points".to_string(),
        ));
    }
    if args.speed <= 0.0 {
        return Err(CliError::Config("speed must be positive".to_string()));
    }

    let config = SessionConfig {
        settings: args.render.settings()?,
        display: args.render.display(),
        ..SessionConfig::default()
    };

    println!("VeloLink Ride Simulation v{}", VERSION);
    println!("=============================");
    println!();
    println!("Route:    {} points", route.len());
    println!("Fixes:    {} at {} ms", args.fixes, args.interval_ms);
    println!("Speed:    {} m/s", args.speed);
    println!("Display:  {}x{}", config.display.width, config.display.height);
    println!();

    let sink = Arc::new(PrintSink::new(args.hex));
    let session = DisplaySession::new(config, sink.clone());
    session.set_route(route.clone());

    let stop = Arc::new(AtomicBool::new(false));
    let stop_handler = Arc::clone(&stop);
    ctrlc::set_handler(move || stop_handler.store(true, Ordering::SeqCst))
        .map_err(|e| CliError::Config(format!("could not install Ctrl-C handler: {}", e)))?;

    // Walk the route at constant speed, one fix per interval. The GPS
    // interval is decoupled from the frame rate: the scheduler decides
    // what actually reaches the wire.
    let step_m = args.speed * args.interval_ms as f64 / 1000.0;
    let mut travelled = 0.0;
    for _ in 0..args.fixes {
        if stop.load(Ordering::SeqCst) {
            info!("interrupted, stopping ride");
            break;
        }

        let Some((position, leg_bearing)) = point_along(&route, travelled) else {
            info!("end of route reached");
            break;
        };
        session.update_location(LocationSample::new(position, args.accuracy));
        session.update_compass_heading(leg_bearing);

        travelled += step_m;
        tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
    }

    println!();
    println!(
        "Pushed {} frames, {} bytes total",
        sink.frames.load(Ordering::Relaxed),
        sink.bytes.load(Ordering::Relaxed)
    );
    Ok(())
}

/// Position and leg bearing after travelling `distance_m` along the
/// route polyline, or None past its end.
fn point_along(route: &[GeoPoint], distance_m: f64) -> Option<(GeoPoint, f64)> {
    let mut remaining = distance_m;
    for pair in route.windows(2) {
        let leg = distance_meters(pair[0], pair[1]);
        let bearing = initial_bearing(pair[0], pair[1]);
        if remaining <= leg {
            return Some((destination_point(pair[0], bearing, remaining), bearing));
        }
        remaining -= leg;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_along_start() {
        let route = demo_route();
        let (p, _) = point_along(&route, 0.0).unwrap();
        assert!(distance_meters(p, route[0]) < 0.01);
    }

    #[test]
    fn test_point_along_interpolates_first_leg() {
        let route = demo_route();
        let leg = distance_meters(route[0], route[1]);
        let (p, bearing) = point_along(&route, leg / 2.0).unwrap();
        assert!((distance_meters(route[0], p) - leg / 2.0).abs() < 1.0);
        assert!((bearing - initial_bearing(route[0], route[1])).abs() < 0.5);
    }

    #[test]
    fn test_point_along_past_end_is_none() {
        let route = demo_route();
        assert!(point_along(&route, 1.0e9).is_none());
    }
}
