//! Closed-form chart geometry: polar conversion, pie/donut arc paths, gauge
//! sweep and bar layout. Angles are in degrees, 0° at 12 o'clock, growing
//! clockwise (screen y points down).

use crate::core::format::coord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: cx + r * rad.cos(),
        y: cy + r * rad.sin(),
    }
}

fn is_full_turn(start: f64, end: f64) -> bool {
    end - start >= 360.0 - 1e-9
}

fn large_arc(start: f64, end: f64) -> u8 {
    u8::from(end - start > 180.0)
}

/// Closed pie wedge from `start` to `end`.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    if is_full_turn(start, end) {
        return circle_path(cx, cy, r);
    }
    let from = polar_to_cartesian(cx, cy, r, start);
    let to = polar_to_cartesian(cx, cy, r, end);
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        coord(cx),
        coord(cy),
        coord(from.x),
        coord(from.y),
        coord(r),
        coord(r),
        large_arc(start, end),
        coord(to.x),
        coord(to.y),
    )
}

/// Annular sector between `r_inner` and `r_outer`. A full turn becomes a ring
/// (render with `fill-rule="evenodd"`).
pub fn donut_path(cx: f64, cy: f64, r_outer: f64, r_inner: f64, start: f64, end: f64) -> String {
    if is_full_turn(start, end) {
        return format!(
            "{} {}",
            circle_path(cx, cy, r_outer),
            circle_path(cx, cy, r_inner)
        );
    }
    let outer_from = polar_to_cartesian(cx, cy, r_outer, start);
    let outer_to = polar_to_cartesian(cx, cy, r_outer, end);
    let inner_to = polar_to_cartesian(cx, cy, r_inner, end);
    let inner_from = polar_to_cartesian(cx, cy, r_inner, start);
    let large = large_arc(start, end);
    format!(
        "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        coord(outer_from.x),
        coord(outer_from.y),
        coord(r_outer),
        coord(r_outer),
        large,
        coord(outer_to.x),
        coord(outer_to.y),
        coord(inner_to.x),
        coord(inner_to.y),
        coord(r_inner),
        coord(r_inner),
        large,
        coord(inner_from.x),
        coord(inner_from.y),
    )
}

/// Open arc stroke (no wedge), used for gauge tracks.
pub fn stroke_arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let from = polar_to_cartesian(cx, cy, r, start);
    let to = polar_to_cartesian(cx, cy, r, end);
    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        coord(from.x),
        coord(from.y),
        coord(r),
        coord(r),
        large_arc(start, end),
        coord(to.x),
        coord(to.y),
    )
}

// A single SVG arc cannot start and end on the same point.
fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    let top = cy - r;
    let bottom = cy + r;
    format!(
        "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
        cx = coord(cx),
        top = coord(top),
        bottom = coord(bottom),
        r = coord(r),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    /// Index into the source series.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub share: f64,
}

impl SliceAngles {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Cumulative slice angles proportional to each value's share of the total.
/// Zero-valued entries produce zero-sweep slices; a zero total yields none.
pub fn slice_angles(values: &[f64]) -> Vec<SliceAngles> {
    let total: f64 = values.iter().copied().filter(|v| *v > 0.0).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let mut cursor = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let share = value.max(0.0) / total;
            let start = cursor;
            cursor += share * 360.0;
            SliceAngles {
                index,
                start,
                end: cursor,
                share,
            }
        })
        .collect()
}

/// Gauge track spans 270°, from -135° (lower left) to +135° (lower right).
pub const GAUGE_START: f64 = -135.0;
pub const GAUGE_SPAN: f64 = 270.0;

pub fn gauge_fraction(value: f64, max: f64) -> f64 {
    if !(max > 0.0) || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

pub fn gauge_sweep(fraction: f64) -> f64 {
    fraction.clamp(0.0, 1.0) * GAUGE_SPAN
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn baseline(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Evenly spaced bars scaled so the largest value fills the plot height.
/// `gap` is the fraction of each slot left empty.
pub fn bar_layout(values: &[f64], plot: PlotArea, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let slot = plot.width / values.len() as f64;
    let width = slot * (1.0 - gap.clamp(0.0, 0.9));

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let height = if max > 0.0 {
                value.max(0.0) / max * plot.height
            } else {
                0.0
            };
            BarRect {
                index,
                x: plot.x + slot * index as f64 + (slot - width) / 2.0,
                y: plot.baseline() - height,
                width,
                height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn zero_degrees_points_up_and_ninety_right() {
        let top = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
        assert!(close(top.x, 100.0) && close(top.y, 50.0));
        let right = polar_to_cartesian(100.0, 100.0, 50.0, 90.0);
        assert!(close(right.x, 150.0) && close(right.y, 100.0));
        let bottom = polar_to_cartesian(100.0, 100.0, 50.0, 180.0);
        assert!(close(bottom.x, 100.0) && close(bottom.y, 150.0));
    }

    #[test]
    fn quarter_wedge_path() {
        assert_eq!(
            arc_path(100.0, 100.0, 50.0, 0.0, 90.0),
            "M 100 100 L 100 50 A 50 50 0 0 1 150 100 Z"
        );
    }

    #[test]
    fn large_arc_flag_past_half_turn() {
        let path = arc_path(100.0, 100.0, 50.0, 0.0, 270.0);
        assert!(path.contains("A 50 50 0 1 1"), "{path}");
    }

    #[test]
    fn full_turn_is_two_half_arcs() {
        let path = arc_path(100.0, 100.0, 50.0, 0.0, 360.0);
        assert_eq!(
            path,
            "M 100 50 A 50 50 0 1 1 100 150 A 50 50 0 1 1 100 50 Z"
        );
    }

    #[test]
    fn donut_sector_returns_along_inner_radius() {
        let path = donut_path(100.0, 100.0, 50.0, 30.0, 0.0, 90.0);
        assert_eq!(
            path,
            "M 100 50 A 50 50 0 0 1 150 100 L 130 100 A 30 30 0 0 0 100 70 Z"
        );
    }

    #[test]
    fn slices_are_proportional_and_contiguous() {
        let slices = slice_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].end, 90.0));
        assert!(close(slices[1].start, 90.0));
        assert!(close(slices[2].sweep(), 180.0));
        assert!(close(slices[2].end, 360.0));
        assert!(close(slices[2].share, 0.5));
    }

    #[test]
    fn zero_total_has_no_slices() {
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
        assert!(slice_angles(&[]).is_empty());
    }

    #[test]
    fn zero_entries_keep_their_index() {
        let slices = slice_angles(&[0.0, 3.0]);
        assert_eq!(slices[0].sweep(), 0.0);
        assert_eq!(slices[1].index, 1);
        assert!(close(slices[1].sweep(), 360.0));
    }

    #[test]
    fn gauge_scales_and_clamps() {
        assert!(close(gauge_fraction(35.0, 70.0), 0.5));
        assert_eq!(gauge_fraction(90.0, 70.0), 1.0);
        assert_eq!(gauge_fraction(-4.0, 70.0), 0.0);
        assert_eq!(gauge_fraction(10.0, 0.0), 0.0);
        assert!(close(gauge_sweep(0.5), 135.0));
    }

    #[test]
    fn bars_scale_to_tallest() {
        let plot = PlotArea {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 100.0,
        };
        let bars = bar_layout(&[5.0, 10.0], plot, 0.2);
        assert!(close(bars[1].height, 100.0));
        assert!(close(bars[1].y, 0.0));
        assert!(close(bars[0].height, 50.0));
        assert!(close(bars[0].width, 80.0));
        assert!(close(bars[0].x, 10.0));
        assert!(close(bars[1].x, 110.0));
    }

    #[test]
    fn all_zero_bars_sit_on_baseline() {
        let plot = PlotArea {
            x: 0.0,
            y: 10.0,
            width: 90.0,
            height: 100.0,
        };
        let bars = bar_layout(&[0.0, 0.0, 0.0], plot, 0.25);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 110.0));
    }
}
