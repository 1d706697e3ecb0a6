use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::r2::R2;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Bounds {
    pub min: R2<f64>,
    pub max: R2<f64>,
}

impl Bounds {
    pub fn new(min: R2<f64>, max: R2<f64>) -> Self {
        Bounds { min, max }
    }

    /// Smallest box containing every point; `None` for an empty iterator.
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a R2<f64>>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds::new(*p, *p),
                Some(b) => b.extend(p),
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn extend(&self, p: &R2<f64>) -> Self {
        Bounds {
            min: R2 { x: self.min.x.min(p.x), y: self.min.y.min(p.y) },
            max: R2 { x: self.max.x.max(p.x), y: self.max.y.max(p.y) },
        }
    }

    pub fn union(&self, other: &Bounds) -> Self {
        self.extend(&other.min).extend(&other.max)
    }

    pub fn contains(&self, p: &R2<f64>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }
}
