//! Standalone SVG documents for export.

use std::fmt::Write;

use super::scene::{ChartScene, Shape};
use crate::core::format::coord;

const FONT_STACK: &str = "Inter, 'Segoe UI', Helvetica, Arial, sans-serif";

pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

pub fn to_svg_document(scene: &ChartScene) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{vb}" font-family="{FONT_STACK}">"#,
        w = scene.width,
        h = scene.height,
        vb = scene.view_box(),
    );
    let _ = writeln!(svg, "  <title>{}</title>", escape_text(&scene.title));
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        "#ffffff"
    );

    for shape in &scene.shapes {
        svg.push_str("  ");
        svg.push_str(&shape_markup(shape));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn shape_markup(shape: &Shape) -> String {
    match shape {
        Shape::Path {
            d,
            fill,
            stroke,
            evenodd,
            round_caps,
            ..
        } => {
            let mut attrs = format!(r#"d="{d}" fill="{fill}""#);
            if let Some((color, width)) = stroke {
                let _ = write!(attrs, r#" stroke="{color}" stroke-width="{}""#, coord(*width));
            }
            if *evenodd {
                attrs.push_str(r#" fill-rule="evenodd""#);
            }
            if *round_caps {
                attrs.push_str(r#" stroke-linecap="round""#);
            }
            format!("<path {attrs}/>")
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            ..
        } => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}"/>"#,
            coord(*x),
            coord(*y),
            coord(*width),
            coord(*height),
            coord(*rx),
        ),
        Shape::Circle { cx, cy, r, fill } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
            coord(*cx),
            coord(*cy),
            coord(*r),
        ),
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            width,
        } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{}"/>"#,
            coord(*x1),
            coord(*y1),
            coord(*x2),
            coord(*y2),
            coord(*width),
        ),
        Shape::Text {
            x,
            y,
            text,
            anchor,
            size,
            bold,
            fill,
        } => format!(
            r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" font-weight="{}" fill="{fill}">{}</text>"#,
            coord(*x),
            coord(*y),
            anchor.as_str(),
            coord(*size),
            if *bold { 700 } else { 400 },
            escape_text(text),
        ),
    }
}
