use dioxus::prelude::*;

use super::scene::{ChartScene, Shape};
use crate::core::format::coord;

/// Live SVG rendering of a [`ChartScene`] with a hover tooltip.
#[component]
pub fn ChartCanvas(scene: ChartScene, #[props(default)] faded: bool) -> Element {
    let hovered = use_signal(|| Option::<usize>::None);
    let tooltip = hovered().and_then(|idx| scene.tooltip(idx).map(str::to_string));
    let view_box = scene.view_box();
    let class = if faded {
        "chart-canvas chart-canvas--faded"
    } else {
        "chart-canvas"
    };

    rsx! {
        div { class: "{class}",
            svg {
                class: "chart-canvas__svg",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "{scene.title}",
                for (idx, shape) in scene.shapes.iter().enumerate() {
                    {render_shape(idx, shape, hovered)}
                }
            }
            if let Some(text) = tooltip {
                div { class: "chart-tooltip", role: "status", "{text}" }
            }
        }
    }
}

fn shape_class(datum: Option<usize>, hovered: Option<usize>) -> &'static str {
    match datum {
        Some(d) if hovered == Some(d) => "chart-shape chart-shape--datum chart-shape--active",
        Some(_) => "chart-shape chart-shape--datum",
        None => "chart-shape",
    }
}

fn render_shape(key: usize, shape: &Shape, mut hovered: Signal<Option<usize>>) -> Element {
    let datum = shape.datum();
    let class = shape_class(datum, hovered());
    let enter = move |_: MouseEvent| {
        if let Some(d) = datum {
            hovered.set(Some(d));
        }
    };
    let leave = move |_: MouseEvent| {
        if datum.is_some() {
            hovered.set(None);
        }
    };

    match shape {
        Shape::Path {
            d,
            fill,
            stroke,
            evenodd,
            round_caps,
            ..
        } => {
            let (stroke_color, stroke_width) = stroke
                .as_ref()
                .map(|(c, w)| (c.clone(), coord(*w)))
                .unwrap_or_else(|| ("none".to_string(), "0".to_string()));
            let fill_rule = if *evenodd { "evenodd" } else { "nonzero" };
            let linecap = if *round_caps { "round" } else { "butt" };
            rsx! {
                path {
                    key: "{key}",
                    class: "{class}",
                    d: "{d}",
                    fill: "{fill}",
                    stroke: "{stroke_color}",
                    stroke_width: "{stroke_width}",
                    fill_rule: "{fill_rule}",
                    stroke_linecap: "{linecap}",
                    onmouseenter: enter,
                    onmouseleave: leave,
                }
            }
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            ..
        } => rsx! {
            rect {
                key: "{key}",
                class: "{class}",
                x: coord(*x),
                y: coord(*y),
                width: coord(*width),
                height: coord(*height),
                rx: coord(*rx),
                fill: "{fill}",
                onmouseenter: enter,
                onmouseleave: leave,
            }
        },
        Shape::Circle { cx, cy, r, fill } => rsx! {
            circle {
                key: "{key}",
                class: "{class}",
                cx: coord(*cx),
                cy: coord(*cy),
                r: coord(*r),
                fill: "{fill}",
            }
        },
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            width,
        } => rsx! {
            line {
                key: "{key}",
                class: "{class}",
                x1: coord(*x1),
                y1: coord(*y1),
                x2: coord(*x2),
                y2: coord(*y2),
                stroke: "{stroke}",
                stroke_width: coord(*width),
            }
        },
        Shape::Text {
            x,
            y,
            text: content,
            anchor,
            size,
            bold,
            fill,
        } => {
            let weight = if *bold { "700" } else { "400" };
            rsx! {
                text {
                    key: "{key}",
                    class: "chart-shape chart-shape--text",
                    x: coord(*x),
                    y: coord(*y),
                    text_anchor: anchor.as_str(),
                    font_size: coord(*size),
                    font_weight: "{weight}",
                    fill: "{fill}",
                    "{content}"
                }
            }
        }
    }
}
