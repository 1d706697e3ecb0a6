use std::ops::{Neg, Div};

use crate::r2::R2;

#[derive(Debug, Clone, PartialEq)]
pub enum Transform<D> {
    Translate(R2<D>),
    Scale(R2<D>),
    /// Counter-clockwise rotation about the origin, in radians.
    Rotate(D),
}

/// Vertical mirror: `(x, y) -> (x, -y)`.
pub const FLIP_Y: Transform<f64> = Transform::Scale(R2 { x: 1., y: -1. });

impl<D: Neg<Output = D>> Neg for Transform<D>
where
R2<D>: Neg<Output = R2<D>>,
f64: Div<D, Output = D>,
{
    type Output = Transform<D>;
    fn neg(self) -> Self {
        match self {
            Transform::Translate(v) => Transform::Translate(-v),
            Transform::Scale(v) => Transform::Scale(R2 { x: 1. / v.x, y: 1. / v.y }),
            Transform::Rotate(a) => Transform::Rotate(-a),
        }
    }
}

/// Transforms applied in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<D>(pub Vec<Transform<D>>);

impl<D: Neg<Output = D>> Neg for Projection<D>
where
R2<D>: Neg<Output = R2<D>>,
f64: Div<D, Output = D>,
{
    type Output = Projection<D>;
    fn neg(self) -> Self {
        Projection(self.0.into_iter().rev().map(|t| -t).collect())
    }
}

pub trait CanTransform<D>: Sized {
    fn transform(&self, transform: &Transform<D>) -> Self;

    fn apply(&self, projection: &Projection<D>) -> Self
    where
        Self: Clone,
    {
        projection.0.iter().fold(self.clone(), |acc, t| acc.transform(t))
    }
}

impl CanTransform<f64> for R2<f64> {
    fn transform(&self, transform: &Transform<f64>) -> Self {
        match transform {
            Transform::Translate(v) => *self + *v,
            Transform::Scale(s) => *self * *s,
            Transform::Rotate(a) => {
                let (sin, cos) = a.sin_cos();
                R2 {
                    x: self.x * cos - self.y * sin,
                    y: self.x * sin + self.y * cos,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_point_transforms() {
        let p = R2 { x: 2., y: 1. };
        assert_eq!(p.transform(&Transform::Translate(R2 { x: 1., y: -1. })), R2 { x: 3., y: 0. });
        assert_eq!(p.transform(&FLIP_Y), R2 { x: 2., y: -1. });
        assert_abs_diff_eq!(p.transform(&Transform::Rotate(FRAC_PI_2)), p.perp(), epsilon = 1e-15);
    }

    #[test]
    fn test_projection_inverse() {
        let p = R2 { x: 0.3, y: -1.7 };
        let projection = Projection(vec![
            Transform::Rotate(0.4),
            FLIP_Y,
            Transform::Translate(R2 { x: 5., y: 2. }),
        ]);
        let there = p.apply(&projection);
        let back = there.apply(&-projection);
        assert_abs_diff_eq!(back, p, epsilon = 1e-12);
    }
}
