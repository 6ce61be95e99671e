//! Display session: the redraw pipeline behind the transport boundary.
//!
//! A [`DisplaySession`] owns everything that persists across frames: the
//! current settings, the stored route, the latest rider state, and the
//! course history. Every event entry point funnels into one coalesced
//! redraw request, so composition and transmission are serialized and the
//! link never sees more than one in-flight frame per cool-down window.
//!
//! # Architecture
//!
//! ```text
//!  location / heading / settings / route events
//!        │
//!        ▼
//!  ┌──────────────────┐   at most one pending   ┌────────────────┐
//!  │ DisplaySession   │ ──────────────────────► │ Coalescing     │
//!  │ (locked state)   │        redraw           │ Scheduler      │
//!  └──────────────────┘                         └───────┬────────┘
//!        ▲                                              │ fires
//!        │ lock, compose, encode                        ▼
//!        └────────────────────────────── FrameComposer + encoder
//!                                                       │ bytes
//!                                                       ▼
//!                                               dyn FrameSink (transport)
//! ```
//!
//! The sink call is fire-and-forget: the session does not wait for an
//! on-wire acknowledgement before the next scheduled run may compose.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::compose::{FrameComposer, RiderState};
use crate::course::{CourseEstimator, LocationSample};
use crate::geo::GeoPoint;
use crate::protocol::encode_frame;
use crate::scheduler::{CoalescingScheduler, TaskOutcome, DEFAULT_COOL_DOWN};
use crate::settings::{DisplayInfo, DisplaySettings};

/// Byte-sink boundary to the wireless transport.
///
/// Implementations receive one completed frame at a time and report
/// nothing back; write failures surface through the transport's own
/// connection management, outside this core.
pub trait FrameSink: Send + Sync {
    /// Hand one encoded frame to the transport.
    fn send_frame(&self, frame: Bytes);
}

/// Configuration for a display session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial rendering settings.
    pub settings: DisplaySettings,
    /// Target display capabilities.
    pub display: DisplayInfo,
    /// Minimum time between frame pushes.
    pub cool_down: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settings: DisplaySettings::default(),
            display: DisplayInfo::default(),
            cool_down: DEFAULT_COOL_DOWN,
        }
    }
}

/// State shared between event entry points and the redraw task.
///
/// This is the single mutual-exclusion domain of the pipeline: redraw
/// requests may originate from several independent event sources, and the
/// course history must only ever be touched under this lock.
struct SessionState {
    settings: DisplaySettings,
    display: DisplayInfo,
    route: Vec<GeoPoint>,
    rider: RiderState,
    estimator: CourseEstimator,
}

impl SessionState {
    fn compose_and_encode(&mut self) -> (Bytes, usize) {
        let composer = FrameComposer::new(self.settings.clone(), self.display);
        let primitives = composer.compose(&self.rider, &self.route, &mut self.estimator);
        let count = primitives.len();
        (encode_frame(&primitives), count)
    }
}

/// Owns the redraw pipeline for one remote display.
///
/// Construct with a transport sink, feed it events, drop it to shut down.
/// Dropping cancels the cool-down timer; a pending redraw is discarded
/// without running.
pub struct DisplaySession {
    state: Arc<Mutex<SessionState>>,
    scheduler: CoalescingScheduler,
    sink: Arc<dyn FrameSink>,
}

impl DisplaySession {
    /// Create a session pushing frames into `sink`.
    pub fn new(config: SessionConfig, sink: Arc<dyn FrameSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                settings: config.settings,
                display: config.display,
                route: Vec::new(),
                rider: RiderState::default(),
                estimator: CourseEstimator::new(),
            })),
            scheduler: CoalescingScheduler::new(config.cool_down),
            sink,
        }
    }

    /// Feed a new GPS fix.
    pub fn update_location(&self, fix: LocationSample) {
        self.state.lock().rider.fix = Some(fix);
        self.schedule_redraw();
    }

    /// Feed a device-reported course over ground, in degrees.
    pub fn update_device_course(&self, course_deg: f64) {
        self.state.lock().rider.device_course = Some(course_deg);
        self.schedule_redraw();
    }

    /// Feed a compass heading, in degrees.
    pub fn update_compass_heading(&self, heading_deg: f64) {
        self.state.lock().rider.compass_heading = Some(heading_deg);
        self.schedule_redraw();
    }

    /// Replace the stored route.
    pub fn set_route(&self, route: Vec<GeoPoint>) {
        self.state.lock().route = route;
        self.schedule_redraw();
    }

    /// Move the fallback projection center (e.g. a map crosshair).
    pub fn set_fallback_point(&self, point: GeoPoint) {
        self.state.lock().rider.fallback_point = point;
        self.schedule_redraw();
    }

    /// Mark the controlling app backgrounded or foregrounded.
    pub fn set_backgrounded(&self, backgrounded: bool) {
        self.state.lock().rider.backgrounded = backgrounded;
        self.schedule_redraw();
    }

    /// Mutate the settings and recompose.
    ///
    /// The owning surface calls this whenever a settings value changes;
    /// there is no observer machinery in the core.
    pub fn update_settings(&self, apply: impl FnOnce(&mut DisplaySettings)) {
        apply(&mut self.state.lock().settings);
        self.schedule_redraw();
    }

    /// Replace the target display capabilities.
    pub fn set_display_info(&self, display: DisplayInfo) {
        self.state.lock().display = display;
        self.schedule_redraw();
    }

    /// Request a redraw without changing any input (e.g. a manual tap or
    /// a reconnected display).
    pub fn request_redraw(&self) {
        self.schedule_redraw();
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> DisplaySettings {
        self.state.lock().settings.clone()
    }

    fn schedule_redraw(&self) {
        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        self.scheduler.schedule(move |outcome| match outcome {
            TaskOutcome::Superseded => trace!("redraw superseded by newer request"),
            TaskOutcome::Ran => {
                let (frame, primitive_count) = state.lock().compose_and_encode();
                debug!(
                    bytes = frame.len(),
                    primitives = primitive_count,
                    "frame pushed to transport"
                );
                sink.send_frame(frame);
            }
        });
    }
}
