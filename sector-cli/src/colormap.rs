//! Viridis colormap, for coloring slices by index.

use palette::{LinSrgb, Mix, Srgb};

/// Viridis sampled at `k / 9`, `k = 0..=9`.
const VIRIDIS: [Srgb<u8>; 10] = [
    Srgb::new(0x44, 0x01, 0x54),
    Srgb::new(0x48, 0x28, 0x78),
    Srgb::new(0x3e, 0x4a, 0x89),
    Srgb::new(0x31, 0x68, 0x8e),
    Srgb::new(0x26, 0x82, 0x8e),
    Srgb::new(0x1f, 0x9e, 0x89),
    Srgb::new(0x35, 0xb7, 0x79),
    Srgb::new(0x6d, 0xcd, 0x59),
    Srgb::new(0xb4, 0xde, 0x2c),
    Srgb::new(0xfd, 0xe7, 0x25),
];

fn linear(c: Srgb<u8>) -> LinSrgb {
    c.into_format::<f32>().into_linear()
}

/// Color at `t` in `[0, 1]` (clamped), interpolated in linear RGB between the stops.
pub fn viridis(t: f64) -> Srgb<u8> {
    let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
    let last = VIRIDIS.len() - 1;
    let pos = t * last as f64;
    let idx = (pos.floor() as usize).min(last - 1);
    let frac = (pos - idx as f64) as f32;
    let mixed = linear(VIRIDIS[idx]).mix(linear(VIRIDIS[idx + 1]), frac);
    let srgb: Srgb<f32> = Srgb::from_linear(mixed);
    srgb.into_format()
}

/// Fill color for slice `i` of `n`, as `#rrggbb`.
pub fn slice_color(i: usize, n: usize) -> String {
    let t = if n == 0 { 0. } else { i as f64 / n as f64 };
    let c = viridis(t);
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}
