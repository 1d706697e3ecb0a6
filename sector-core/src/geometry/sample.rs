//! Arc sampling helpers.

use crate::{polygon::Polygon, r2::R2};

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The endpoints are reproduced exactly, so adjacent ranges sharing an endpoint sample it
/// identically.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Fan-shaped slice: the origin followed by `samples` points along the arc of radius `radius`
/// from `theta0` to `theta1` (radians).
///
/// Panics if `samples < 2`.
pub fn fan(theta0: f64, theta1: f64, radius: f64, samples: usize) -> Polygon<f64> {
    let vertices = std::iter::once(R2::ORIGIN)
        .chain(linspace(theta0, theta1, samples).into_iter().map(|t| R2::polar(radius, t)))
        .collect();
    Polygon::new(vertices)
}
