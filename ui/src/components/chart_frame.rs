use std::rc::Rc;

use dioxus::html::MountedData;
use dioxus::prelude::*;
use tracing::debug;

use super::callout::CalloutPanel;
use super::labels::{chart_title, spotlight_id};
use crate::charts::{ChartCanvas, ChartScene};
use crate::core::format::{tilt_transform, TILT_RESET};
use crate::dashboard::{DashboardState, ZoomDirection};
use crate::data::{ChartId, Survey};
use crate::t;

const SPOTLIGHT_STYLE: &str =
    "outline: 2px solid rgba(178,106,106,.20); box-shadow: 0 18px 50px rgba(0,0,0,.12);";

/// Client rect of the frame, captured when the pointer enters it.
type FrameRect = ((f64, f64), (f64, f64));

/// A chart card for the cohort currently shown in single mode: header with
/// zoom, spotlight and callout controls, the zoomable chart, and its callouts.
#[component]
pub fn ChartFrame(chart: ChartId) -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let survey = use_context::<Survey>();

    let mut frame_node = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut frame_rect = use_signal(|| Option::<FrameRect>::None);
    let mut tilt = use_signal(|| TILT_RESET.to_string());

    let title = chart_title(chart);
    let snapshot = state.read();
    let scene = ChartScene::for_chart(chart, snapshot.displayed_cohort, &survey, &title);
    let faded = snapshot.is_fading();
    let zoom = snapshot.zoom_transform(chart);
    let spotlight = snapshot.spotlight_on(chart);
    let callouts = snapshot.callout_on(chart);
    drop(snapshot);

    let frame_style = if spotlight {
        format!("{SPOTLIGHT_STYLE} transform: {};", tilt())
    } else {
        "outline: none;".to_string()
    };

    let on_enter = move |_: MouseEvent| {
        let Some(node) = frame_node() else {
            return;
        };
        spawn(async move {
            match node.get_client_rect().await {
                Ok(rect) => frame_rect.set(Some((
                    (rect.origin.x, rect.origin.y),
                    (rect.size.width, rect.size.height),
                ))),
                Err(err) => debug!("client rect unavailable: {err:?}"),
            }
        });
    };
    let on_move = move |evt: MouseEvent| {
        if !state.read().spotlight_on(chart) {
            return;
        }
        if let Some((origin, size)) = frame_rect() {
            let point = evt.client_coordinates();
            tilt.set(state.read().tilt_transform((point.x, point.y), origin, size));
        }
    };
    let on_leave = move |_: MouseEvent| tilt.set(TILT_RESET.to_string());

    rsx! {
        article {
            class: "chart-card",
            style: "{frame_style}",
            onmounted: move |evt: MountedEvent| frame_node.set(Some(evt.data())),
            onmouseenter: on_enter,
            onmousemove: on_move,
            onmouseleave: on_leave,
            header { class: "chart-card__header",
                h3 { class: "chart-card__title", "{title}" }
                div { class: "chart-card__tools",
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: t!("zoom-out"),
                        onclick: move |_| {
                            state.with_mut(|s| s.zoom_chart(chart, ZoomDirection::Out));
                        },
                        "−"
                    }
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: t!("zoom-reset"),
                        onclick: move |_| {
                            state.with_mut(|s| s.zoom_chart(chart, ZoomDirection::Reset));
                        },
                        "R"
                    }
                    button {
                        r#type: "button",
                        class: "icon-button",
                        aria_label: t!("zoom-in"),
                        onclick: move |_| {
                            state.with_mut(|s| s.zoom_chart(chart, ZoomDirection::In));
                        },
                        "+"
                    }
                    button {
                        id: spotlight_id(chart),
                        r#type: "button",
                        class: "chip",
                        aria_pressed: spotlight.to_string(),
                        onclick: move |_| {
                            state.with_mut(|s| s.set_spotlight(chart, !spotlight));
                            tilt.set(tilt_transform(0.0, 0.0));
                        },
                        {t!("spotlight-toggle")}
                    }
                    button {
                        r#type: "button",
                        class: "chip",
                        "data-callout": chart.callout_key(),
                        aria_pressed: callouts.to_string(),
                        aria_controls: "callouts-{chart.callout_key()}",
                        onclick: move |_| state.with_mut(|s| s.toggle_callouts(chart, !callouts)),
                        {t!("callouts-toggle")}
                    }
                }
            }
            div { class: "chart-card__viewport",
                div {
                    id: chart.dom_id(),
                    class: "chart-card__chart",
                    style: "transform: {zoom}; transform-origin: center top;",
                    onclick: move |_| state.with_mut(|s| s.focus_chart(chart)),
                    ChartCanvas { scene, faded }
                }
            }
            CalloutPanel { chart }
        }
    }
}
