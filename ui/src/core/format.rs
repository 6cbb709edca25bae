//! Formatting helpers for chart labels, tooltips and CSS transforms.

pub fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub fn format_percent(share: f64) -> String {
    if !share.is_finite() {
        return "—".to_string();
    }
    format!("{:.0}%", share * 100.0)
}

/// Coordinates inside generated path data.
pub fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0" in path data.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

pub fn scale_transform(zoom: f64) -> String {
    format!("scale({zoom:.2})")
}

/// Frame transform once the pointer leaves a spotlighted chart.
pub const TILT_RESET: &str = "rotateX(0deg) rotateY(0deg)";

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    // Adding 0.0 folds -0.0 into 0.0 so a centred pointer prints "0.00".
    let (rotate_x, rotate_y) = (rotate_x + 0.0, rotate_y + 0.0);
    format!("rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
}
