mod convergence;

use crate::params::Params;

/// Spread of valid parameters, including the range corners.
fn param_grid() -> Vec<Params> {
    let mut grid = vec![
        Params::default(),
        Params::new(10., 2, 1.),
        Params::new(360., 100, 10.),
        Params::new(360., 2, 1.),
        Params::new(10., 100, 10.),
    ];
    for angle in [45., 90., 137., 270.] {
        for segments in [3, 7, 12, 50] {
            for radius in [1.5, 5., 8.5] {
                grid.push(Params::new(angle, segments, radius));
            }
        }
    }
    grid
}
