use std::fmt::{self, Display};

use derive_more::From;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    bounds::Bounds,
    r2::R2,
    transform::{CanTransform, Transform, FLIP_Y},
};

#[derive(Debug, Clone, From, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Polygon<D> {
    pub vertices: Vec<R2<D>>,
}

impl<D> Polygon<D> {
    pub fn new(vertices: Vec<R2<D>>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
}

impl Polygon<f64> {
    /// Signed area via the shoelace formula; positive for counter-clockwise vertex order.
    pub fn area(&self) -> f64 {
        self.vertices
            .iter()
            .circular_tuple_windows()
            .map(|(p0, p1)| p0.x * p1.y - p1.x * p0.y)
            .sum::<f64>()
            * 0.5
    }

    pub fn bounds(&self) -> Bounds {
        // `new` guarantees at least one vertex
        Bounds::of_points(&self.vertices).unwrap_or(Bounds::new(R2::ORIGIN, R2::ORIGIN))
    }

    /// Vertex centroid (mean of the vertices, not the area centroid).
    pub fn center(&self) -> R2<f64> {
        let n = self.vertices.len() as f64;
        let sum = self.vertices.iter().fold(R2::ORIGIN, |acc, v| acc + *v);
        R2 { x: sum.x / n, y: sum.y / n }
    }
}

impl CanTransform<f64> for Polygon<f64> {
    fn transform(&self, transform: &Transform<f64>) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|p| p.transform(transform)).collect(),
        }
    }
}

impl<D: Display> Display for Polygon<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verts: Vec<String> = self
            .vertices
            .iter()
            .map(|v| format!("({:.3}, {:.3})", v.x, v.y))
            .collect();
        write!(f, "Polygon[{}]", verts.join(", "))
    }
}
