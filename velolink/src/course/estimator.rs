//! Bounded location history and smoothed course derivation.

use std::collections::VecDeque;
use std::time::Instant;

use crate::geo::{distance_meters, initial_bearing, GeoPoint};

/// Maximum samples retained in the history.
pub const HISTORY_CAPACITY: usize = 21;

/// Minimum distance from the last retained sample for a new sample to be
/// recorded, in meters.
pub const MIN_SAMPLE_SPACING_M: f64 = 5.0;

/// Number of history entries feeding one course computation.
const COURSE_WINDOW: usize = 3;

/// Most-recent entries skipped when computing the course.
const SKIP_LATEST: usize = 1;

/// Accuracy below this many meters is treated as this many meters.
const ACCURACY_FLOOR_M: f64 = 2.0;

/// One observed rider position.
#[derive(Debug, Clone, Copy)]
pub struct LocationSample {
    /// Where the rider was.
    pub point: GeoPoint,
    /// Reported horizontal accuracy in meters (radius of uncertainty).
    pub horizontal_accuracy_m: f64,
    /// When the sample was taken.
    pub timestamp: Instant,
}

impl LocationSample {
    /// Create a sample stamped with the current time.
    pub fn new(point: GeoPoint, horizontal_accuracy_m: f64) -> Self {
        Self {
            point,
            horizontal_accuracy_m,
            timestamp: Instant::now(),
        }
    }

    /// Create a sample with an explicit timestamp.
    pub fn with_timestamp(point: GeoPoint, horizontal_accuracy_m: f64, timestamp: Instant) -> Self {
        Self {
            point,
            horizontal_accuracy_m,
            timestamp,
        }
    }
}

/// Bounded FIFO history of positions with smoothed course derivation.
#[derive(Debug)]
pub struct CourseEstimator {
    /// Retained samples, oldest first.
    samples: VecDeque<LocationSample>,
}

impl Default for CourseEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseEstimator {
    /// Create an empty estimator.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Record a sample if it is far enough from the last retained one.
    ///
    /// The first sample is always retained. Returns true if the sample was
    /// recorded.
    pub fn add_sample_if_moved(&mut self, sample: LocationSample) -> bool {
        if let Some(last) = self.samples.back() {
            if distance_meters(last.point, sample.point) <= MIN_SAMPLE_SPACING_M {
                return false;
            }
        }

        self.samples.push_back(sample);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        true
    }

    /// Smoothed forward bearing in degrees (0 = North, 90 = East).
    ///
    /// Needs at least four retained samples; with fewer there is no course
    /// signal yet and 0.0 is returned. The estimate projects an imagined
    /// target ahead of `current` by accumulating recency-weighted deltas
    /// from a three-sample window that excludes the most recent entry,
    /// then takes the great-circle bearing from `current` to that target.
    /// Weights shrink as the reported accuracy degrades.
    pub fn compute_course(&self, current: &LocationSample) -> f64 {
        let needed = COURSE_WINDOW + SKIP_LATEST;
        let count = self.samples.len();
        if count < needed {
            return 0.0;
        }

        let accuracy_coefficient =
            ACCURACY_FLOOR_M / current.horizontal_accuracy_m.max(ACCURACY_FLOOR_M);

        let mut target = current.point;
        let window_start = count - needed;
        for i in 0..COURSE_WINDOW {
            let sample = &self.samples[window_start + i];
            let weight = 1.0 + accuracy_coefficient * 2.0 * i as f64;
            target.latitude += weight * (current.point.latitude - sample.point.latitude);
            target.longitude += weight * (current.point.longitude - sample.point.longitude);
        }

        initial_bearing(current.point, target)
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &LocationSample> {
        self.samples.iter()
    }

    /// Discard all history.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
