use log::debug;

use crate::{params::Params, polygon::Polygon, sample::fan};

/// Cut the sector into `params.segments` fan slices, in increasing angle order.
///
/// Slice `i` spans `[θ·i/n, θ·(i+1)/n]`; its vertices are the origin followed by `samples` arc
/// points. Consecutive slices share their boundary ray exactly.
pub fn build_original_sector(params: &Params, samples: usize) -> Vec<Polygon<f64>> {
    let theta = params.theta();
    let n = params.segments;
    let at = |k: usize| theta * (k as f64 / n as f64);
    let slices: Vec<_> = (0..n)
        .map(|i| fan(at(i), at(i + 1), params.radius, samples))
        .collect();
    debug!("original sector ({}): {} slices, {} samples each", params, slices.len(), samples);
    slices
}
