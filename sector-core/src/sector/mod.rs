//! Slicing a circular sector and laying the slices out as a near-rectangle.
//!
//! A sector of angle θ and radius r is cut into n equal slices. Side by side with alternating
//! orientation, the slices form a strip whose width tends to the half arc length r·θ/2 and whose
//! height tends to r as n grows, so its area tends to ½r²θ.

mod original;
mod rearranged;

pub use original::*;
pub use rearranged::*;

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{params::Params, polygon::Polygon, r2::R2, sample::fan};

/// Arc points per slice. Only affects how smooth the curved edges look.
pub const DEFAULT_SAMPLES: usize = 30;

/// Values the rearranged strip approaches as the slice count grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    /// Half the arc length, r·θ/2.
    pub width: f64,
    pub height: f64,
    /// Sector area, ½r²θ.
    pub area: f64,
}

pub fn limits(params: &Params) -> Limits {
    let Params { radius, .. } = *params;
    let theta = params.theta();
    Limits {
        width: radius * theta / 2.,
        height: radius,
        area: 0.5 * radius * radius * theta,
    }
}

/// One slice centered on the +x axis, spanning `[-angle/2, angle/2]`, turned a quarter
/// counter-clockwise so that its tip is at the origin and its arc points up.
pub fn base_wedge(angle: f64, radius: f64, samples: usize) -> Polygon<f64> {
    let wedge = fan(-angle / 2., angle / 2., radius, samples);
    Polygon {
        vertices: wedge.vertices.into_iter().map(R2::perp).collect(),
    }
}

#[cfg(test)]
mod tests;
