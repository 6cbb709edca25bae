use dioxus::prelude::*;

use super::labels::{callout_text, preset_id, preset_label};
use crate::dashboard::{DashboardState, StoryPreset};
use crate::data::ChartId;
use crate::t;

#[component]
pub fn CalloutPanel(chart: ChartId) -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let class = if state.read().callout_on(chart) {
        "callouts show"
    } else {
        "callouts"
    };

    rsx! {
        aside {
            id: "callouts-{chart.callout_key()}",
            class: "{class}",
            "data-chart": chart.callout_key(),
            p { {callout_text(chart)} }
        }
    }
}

/// Narrative / Minimal / Teaching chips. Each sets several callouts at once.
#[component]
pub fn StoryPresets() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let active = state.read().preset;

    rsx! {
        div { class: "story-presets", role: "group", aria_label: t!("story-label"),
            span { class: "story-presets__label", {t!("story-label")} }
            for preset in StoryPreset::ALL {
                button {
                    key: "{preset_id(preset)}",
                    id: preset_id(preset),
                    r#type: "button",
                    class: "chip",
                    aria_pressed: (active == Some(preset)).to_string(),
                    onclick: move |_| state.with_mut(|s| s.apply_preset(preset)),
                    {preset_label(preset)}
                }
            }
        }
    }
}
