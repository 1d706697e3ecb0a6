use std::f64::consts::PI;

use itertools::Itertools;

use super::super::*;

/// Width and height of the rearranged strip for each slice count.
fn extents(angle: f64, radius: f64, counts: &[usize]) -> Vec<(f64, f64)> {
    counts
        .iter()
        .map(|&n| {
            let a = build_rearranged_sector(&Params::new(angle, n, radius), DEFAULT_SAMPLES);
            (a.final_width, a.vertical_extent())
        })
        .collect()
}

#[test_log::test]
fn test_half_disk_converges() {
    let limit = limits(&Params::default());
    assert_relative_eq!(limit.width, 5. * PI / 2., epsilon = 1e-12);
    assert_relative_eq!(limit.height, 5., epsilon = 1e-12);

    let ext = extents(180., 5., &[2, 12, 100]);
    let width_errors: Vec<f64> = ext.iter().map(|(w, _)| w - limit.width).collect();
    let height_errors: Vec<f64> = ext.iter().map(|(_, h)| h - limit.height).collect();
    log::debug!("width errors {:?}, height errors {:?}", width_errors, height_errors);

    // Both approach their limits from above
    assert!(width_errors.iter().all(|e| *e > 0.), "{:?}", width_errors);
    assert!(height_errors.iter().all(|e| *e > 0.), "{:?}", height_errors);
    assert!(width_errors.iter().tuple_windows().all(|(a, b)| b < a), "{:?}", width_errors);
    assert!(height_errors.iter().tuple_windows().all(|(a, b)| b < a), "{:?}", height_errors);

    // n = 100: width (n + 2)·r·sin(π/200) ≈ 8.011, height ≈ r + 6e-4
    assert!(width_errors[2] < 0.16, "{:?}", width_errors);
    assert!(height_errors[2] < 1e-3, "{:?}", height_errors);
}

#[test]
fn test_monotone_over_full_range() {
    // A full circle in 2 slices gives 4r, narrower than the 3-slice layout's 5r·sin(π/3); every
    // other step shrinks both extents.
    for (angle, radius, first) in [(10., 1., 2), (90., 2.5, 2), (180., 5., 2), (270., 7.5, 2), (360., 10., 3)] {
        let counts: Vec<usize> = (first..=100).collect();
        let ext = extents(angle, radius, &counts);
        for ((n0, (w0, h0)), (n1, (w1, h1))) in counts.iter().zip(&ext).tuple_windows() {
            assert!(w1 < w0, "θ={} r={}: width {}→{} at n={}→{}", angle, radius, w0, w1, n0, n1);
            assert!(h1 < h0, "θ={} r={}: height {}→{} at n={}→{}", angle, radius, h0, h1, n0, n1);
        }
    }
}

#[test]
fn test_many_slices_fill_rectangle() {
    // Beyond the input range, the strip becomes indistinguishable from an r × rθ/2 rectangle
    let p = Params::new(180., 10_000, 5.);
    let a = build_rearranged_sector(&p, DEFAULT_SAMPLES);
    let limit = limits(&p);
    assert_relative_eq!(a.final_width, limit.width, max_relative = 1e-3);
    assert_relative_eq!(a.vertical_extent(), limit.height, max_relative = 1e-6);
    assert_relative_eq!(a.final_width * a.vertical_extent(), limit.area, max_relative = 1e-3);
}

#[test]
fn test_rearranged_area_matches_original() {
    for n in [2, 12, 100] {
        let p = Params::new(180., n, 5.);
        let original: f64 = build_original_sector(&p, DEFAULT_SAMPLES).iter().map(|s| s.area()).sum();
        let rearranged: f64 = build_rearranged_sector(&p, DEFAULT_SAMPLES)
            .polygons
            .iter()
            .map(|s| s.area().abs())
            .sum();
        assert_relative_eq!(rearranged, original, max_relative = 1e-9);
    }
}
