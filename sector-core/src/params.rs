use std::{f64::consts::PI, fmt::{self, Display}, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::ParamsError;

/// Sector angle range, in degrees.
pub const ANGLE: RangeInclusive<f64> = 10.0..=360.0;
/// Number of slices the sector is cut into.
pub const SEGMENTS: RangeInclusive<usize> = 2..=100;
pub const RADIUS: RangeInclusive<f64> = 1.0..=10.0;

/// Input granularity: whole degrees, half units of radius.
pub const ANGLE_STEP: f64 = 1.;
pub const RADIUS_STEP: f64 = 0.5;

/// The three inputs of a sector decomposition.
///
/// Owned by whoever drives the visualization (slider panel, CLI flags, a JSON file); the geometry
/// functions only ever borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    /// Central angle in degrees.
    pub angle: f64,
    pub segments: usize,
    pub radius: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            angle: 180.,
            segments: 12,
            radius: 5.,
        }
    }
}

impl Params {
    pub fn new(angle: f64, segments: usize, radius: f64) -> Self {
        Params { angle, segments, radius }
    }

    /// Restore the default parameters in place.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if !ANGLE.contains(&self.angle) {
            return Err(ParamsError::Angle(self.angle));
        }
        if !SEGMENTS.contains(&self.segments) {
            return Err(ParamsError::Segments(self.segments));
        }
        if !RADIUS.contains(&self.radius) {
            return Err(ParamsError::Radius(self.radius));
        }
        Ok(())
    }

    /// Clamp each parameter into its range and snap it to its input step, the way a slider would.
    /// NaN inputs stay NaN and are left for [`Params::validate`] to reject.
    pub fn clamped(self) -> Self {
        let angle = (self.angle / ANGLE_STEP).round() * ANGLE_STEP;
        let radius = (self.radius / RADIUS_STEP).round() * RADIUS_STEP;
        Params {
            angle: angle.clamp(*ANGLE.start(), *ANGLE.end()),
            segments: self.segments.clamp(*SEGMENTS.start(), *SEGMENTS.end()),
            radius: radius.clamp(*RADIUS.start(), *RADIUS.end()),
        }
    }

    /// Central angle in radians.
    pub fn theta(&self) -> f64 {
        self.angle * PI / 180.
    }

    /// Angle subtended by each slice, in radians; 0 for a zero segment count.
    pub fn angle_per_segment(&self) -> f64 {
        if self.segments > 0 {
            self.theta() / self.segments as f64
        } else {
            0.
        }
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "θ={}°, n={}, r={}", self.angle, self.segments, self.radius)
    }
}
