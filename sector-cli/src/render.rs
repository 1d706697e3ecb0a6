//! SVG rendering of the two panels: the sliced sector and its rearrangement.

use std::fmt::{self, Write};

use sector_core::{bounds::Bounds, Decomposition, Polygon};

use crate::colormap::slice_color;

/// SVG rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width of each panel in pixels
    pub panel_width: f64,
    /// Height of each panel in pixels
    pub panel_height: f64,
    /// Gap around and between panels, in pixels
    pub margin: f64,
    /// Fill opacity (0.0 - 1.0)
    pub fill_opacity: f64,
    pub grid: bool,
    /// Print the area formula and the current width/height below the panels
    pub caption: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            panel_width: 560.0,
            panel_height: 480.0,
            margin: 40.0,
            fill_opacity: 0.9,
            grid: true,
            caption: true,
        }
    }
}

const TITLE_HEIGHT: f64 = 28.0;
const CAPTION_HEIGHT: f64 = 56.0;

/// Render both panels side by side.
///
/// Slices keep their index order in both panels, so slice `i` has the same color on the left and
/// on the right.
pub fn render_svg(d: &Decomposition, config: &RenderConfig) -> Result<String, fmt::Error> {
    let n = d.segments();
    let colors: Vec<String> = (0..n).map(|i| slice_color(i, n)).collect();

    let width = 3.0 * config.margin + 2.0 * config.panel_width;
    let caption_height = if config.caption { CAPTION_HEIGHT } else { 0.0 };
    let height = 2.0 * config.margin + TITLE_HEIGHT + config.panel_height + caption_height;

    let mut svg = String::new();
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
        width, height, width, height
    )?;
    writeln!(&mut svg, r#"  <rect width="{}" height="{}" fill="white"/>"#, width, height)?;

    let top = config.margin;
    let left = config.margin;
    panel(&mut svg, left, top, "1. origin", &d.original_view, &d.original, &colors, config)?;
    let left = 2.0 * config.margin + config.panel_width;
    panel(
        &mut svg,
        left,
        top,
        "2. repositioned",
        &d.rearranged_view,
        &d.rearranged.polygons,
        &colors,
        config,
    )?;

    if config.caption {
        let y = top + TITLE_HEIGHT + config.panel_height + 24.0;
        let l = &d.limits;
        writeln!(
            &mut svg,
            r#"  <text x="{}" y="{}" font-size="15" text-anchor="middle">Area = ½·r²·θ = {:.3}</text>"#,
            width / 2.0, y, l.area
        )?;
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-size="13" text-anchor="middle" fill="#444">width {:.3} → ½·r·θ = {:.3}, height {:.3} → r = {}</text>"##,
            width / 2.0,
            y + 22.0,
            d.rearranged.final_width,
            l.width,
            d.rearranged.vertical_extent(),
            l.height
        )?;
    }

    writeln!(&mut svg, "</svg>")?;
    Ok(svg)
}

/// One titled panel. `view` is mapped into the panel box with equal x/y scale, y pointing up.
#[allow(clippy::too_many_arguments)]
fn panel(
    svg: &mut String,
    left: f64,
    top: f64,
    title: &str,
    view: &Bounds,
    polygons: &[Polygon<f64>],
    colors: &[String],
    config: &RenderConfig,
) -> fmt::Result {
    writeln!(
        svg,
        r#"  <text x="{}" y="{}" font-size="16" text-anchor="middle">{}</text>"#,
        left + config.panel_width / 2.0,
        top + TITLE_HEIGHT - 10.0,
        title
    )?;

    // Nested viewport; flipping y inside means the viewBox y range is negated
    writeln!(
        svg,
        r#"  <svg x="{}" y="{}" width="{}" height="{}" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
        left,
        top + TITLE_HEIGHT,
        config.panel_width,
        config.panel_height,
        view.min.x,
        -view.max.y,
        view.width(),
        view.height()
    )?;
    writeln!(svg, r#"    <g transform="scale(1,-1)">"#)?;
    writeln!(
        svg,
        r##"    <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#888" vector-effect="non-scaling-stroke"/>"##,
        view.min.x, view.min.y, view.width(), view.height()
    )?;

    if config.grid {
        grid(svg, view)?;
    }

    for (polygon, color) in polygons.iter().zip(colors) {
        writeln!(
            svg,
            r#"    <path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            path_data(polygon)?,
            color,
            config.fill_opacity
        )?;
    }

    writeln!(svg, "    </g>")?;
    writeln!(svg, "  </svg>")?;
    Ok(())
}

fn grid(svg: &mut String, view: &Bounds) -> fmt::Result {
    let step = grid_step(view.width().max(view.height()));
    writeln!(svg, r##"    <g stroke="#ddd" vector-effect="non-scaling-stroke">"##)?;
    for x in ticks(view.min.x, view.max.x, step) {
        writeln!(
            svg,
            r#"      <line x1="{}" y1="{}" x2="{}" y2="{}" vector-effect="non-scaling-stroke"/>"#,
            x, view.min.y, x, view.max.y
        )?;
    }
    for y in ticks(view.min.y, view.max.y, step) {
        writeln!(
            svg,
            r#"      <line x1="{}" y1="{}" x2="{}" y2="{}" vector-effect="non-scaling-stroke"/>"#,
            view.min.x, y, view.max.x, y
        )?;
    }
    writeln!(svg, "    </g>")
}

/// Round tick spacing (1, 2 or 5 × 10^k) giving roughly 5-10 lines across `span`.
fn grid_step(span: f64) -> f64 {
    if !(span > 0.0) || !span.is_finite() {
        return 1.0;
    }
    let raw = span / 8.0;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of `step` within `[min, max]`.
fn ticks(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(move |k| k as f64 * step)
}

fn path_data(p: &Polygon<f64>) -> Result<String, fmt::Error> {
    let mut path = String::new();
    let mut vertices = p.vertices.iter();
    if let Some(v) = vertices.next() {
        write!(&mut path, "M {:.4} {:.4}", v.x, v.y)?;
    }
    for v in vertices {
        write!(&mut path, " L {:.4} {:.4}", v.x, v.y)?;
    }
    path.push_str(" Z");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sector_core::{Params, DEFAULT_SAMPLES};

    #[test]
    fn test_render_default() {
        let d = Decomposition::new(Params::default(), DEFAULT_SAMPLES).unwrap();
        let svg = render_svg(&d, &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("1. origin"));
        assert!(svg.contains("2. repositioned"));
        assert!(svg.contains("Area = ½·r²·θ"));
        // 12 slices per panel
        assert_eq!(svg.matches("<path").count(), 24);
        // First slice is dark purple in both panels
        assert_eq!(svg.matches(r##"fill="#440154""##).count(), 2);
    }

    #[test]
    fn test_render_without_extras() {
        let d = Decomposition::new(Params::new(90., 3, 2.), 4).unwrap();
        let config = RenderConfig { grid: false, caption: false, ..RenderConfig::default() };
        let svg = render_svg(&d, &config).unwrap();
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("Area ="));
        assert_eq!(svg.matches("<path").count(), 6);
    }

    #[test]
    fn test_path_data() {
        let d = Decomposition::new(Params::new(90., 2, 1.), 2).unwrap();
        let path = path_data(&d.original[0]).unwrap();
        assert!(path.starts_with("M 0.0000 0.0000 L 1.0000 0.0000 L "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn test_grid_step() {
        assert_relative_eq!(grid_step(11.0), 1.0);
        assert_relative_eq!(grid_step(22.0), 2.0);
        assert_relative_eq!(grid_step(40.0), 5.0);
        assert_relative_eq!(grid_step(2.2), 0.2, epsilon = 1e-12);
        assert_eq!(grid_step(0.0), 1.0);
        assert_eq!(grid_step(f64::NAN), 1.0);
        let ts: Vec<f64> = ticks(-5.5, 5.5, 1.0).collect();
        assert_eq!(ts.len(), 11);
        assert_eq!(ts[0], -5.0);
        assert_eq!(ts[10], 5.0);
    }
}
