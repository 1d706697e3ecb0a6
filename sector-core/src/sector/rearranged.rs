use log::debug;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    bounds::Bounds,
    params::Params,
    polygon::Polygon,
    r2::R2,
    transform::{CanTransform, Projection, Transform, FLIP_Y},
};

use super::base_wedge;

/// Slices laid out left to right, alternately pointing up and down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    /// One per slice, in the same order as the original sector's slices.
    pub polygons: Vec<Polygon<f64>>,
    /// Horizontal extent of the layout, including half a slice base of margin on each side.
    pub final_width: f64,
}

impl Arrangement {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(self.polygons.iter().flat_map(|p| &p.vertices))
    }

    /// Height spanned by the placed slices.
    pub fn vertical_extent(&self) -> f64 {
        self.bounds().map_or(0., |b| b.height())
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// Lay the slices of the sector side by side.
///
/// Every slice is the same upright [`base_wedge`]. Even-indexed slices keep their tip at the
/// bottom; odd-indexed slices are mirrored top to bottom, so neighbors meet along a full straight
/// edge. The tip of slice `i + 1` sits at the arc corner of slice `i`.
pub fn build_rearranged_sector(params: &Params, samples: usize) -> Arrangement {
    let radius = params.radius;
    let angle = params.angle_per_segment();
    let wedge = base_wedge(angle, radius, samples);

    let (sin, cos) = (angle / 2.).sin_cos();
    let half_base_width = radius * sin;
    let right_corner = R2 { x: radius * sin, y: radius * cos };
    let mut tip = R2 { x: half_base_width, y: half_base_width / 2. };

    let mut polygons = Vec::with_capacity(params.segments);
    for i in 0..params.segments {
        let even = i % 2 == 0;
        let placement = if even {
            Projection(vec![Transform::Translate(tip)])
        } else {
            Projection(vec![FLIP_Y, Transform::Translate(tip)])
        };
        polygons.push(wedge.apply(&placement));
        tip = tip + if even { right_corner } else { right_corner.flip_y() };
    }

    let final_width = tip.x + half_base_width;
    let arrangement = Arrangement { polygons, final_width };
    debug!(
        "rearranged sector ({}): final width {:.4}, vertical extent {:.4}",
        params,
        final_width,
        arrangement.vertical_extent(),
    );
    arrangement
}
