//! Plot windows for the two panels.

use crate::{bounds::Bounds, r2::R2};

/// Square window around the whole disk, with 10% margin.
pub fn original_view(radius: f64) -> Bounds {
    let m = radius * 1.1;
    Bounds::new(R2 { x: -m, y: -m }, R2 { x: m, y: m })
}

/// Half a unit of margin left and below, a full half radius of headroom above.
pub fn rearranged_view(final_width: f64, radius: f64) -> Bounds {
    let max_x = if final_width > 0. { final_width + 0.5 } else { 1. };
    Bounds::new(R2 { x: -0.5, y: -0.5 }, R2 { x: max_x, y: radius * 1.5 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params::Params, sector::*};

    #[test]
    fn test_views() {
        assert_eq!(original_view(5.), Bounds::new(R2 { x: -5.5, y: -5.5 }, R2 { x: 5.5, y: 5.5 }));
        assert_eq!(rearranged_view(8., 5.), Bounds::new(R2 { x: -0.5, y: -0.5 }, R2 { x: 8.5, y: 7.5 }));
        assert_eq!(rearranged_view(0., 5.).max.x, 1.);
    }

    #[test]
    fn test_views_contain_slices() {
        for p in [Params::default(), Params::new(360., 2, 1.), Params::new(10., 100, 10.), Params::new(270., 5, 3.)] {
            let view = original_view(p.radius);
            for s in build_original_sector(&p, DEFAULT_SAMPLES) {
                assert!(view.contains_bounds(&s.bounds()), "{}", p);
            }
            let a = build_rearranged_sector(&p, DEFAULT_SAMPLES);
            let view = rearranged_view(a.final_width, p.radius);
            assert!(view.contains_bounds(&a.bounds().unwrap()), "{}: {:?}", p, a.bounds());
        }
    }
}
