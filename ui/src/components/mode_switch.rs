use std::rc::Rc;

use dioxus::html::{MountedData, ScrollBehavior};
use dioxus::prelude::*;
use tracing::warn;

use super::labels::mode_label;
use crate::core::timing::sleep_ms;
use crate::dashboard::{DashboardState, Mode, ModeChange};
use crate::t;

/// Mounted handle of the extras section, scrolled into view by the compare button.
#[derive(Clone, Copy)]
pub struct ExtrasAnchor(pub Signal<Option<Rc<MountedData>>>);

/// Runs the fade for a cohort swap, then commits it. A swap superseded while
/// fading is dropped by the state itself.
fn run_mode_change(mut state: Signal<DashboardState>, change: ModeChange) {
    if let ModeChange::SwapCohort(cohort) = change {
        let fade_ms = state.read().config.fade_ms;
        spawn(async move {
            sleep_ms(fade_ms).await;
            state.with_mut(|s| s.commit_cohort_swap(cohort));
        });
    }
}

/// Applies a mode button press. Compare also scrolls the extras section into view.
fn pick_mode(mut state: Signal<DashboardState>, anchor: Option<ExtrasAnchor>, mode: Mode) {
    let change = match mode {
        Mode::Compare => state.with_mut(|s| s.press_compare()),
        other => state.with_mut(|s| s.set_mode(other)),
    };
    run_mode_change(state, change);

    let node = match (mode, anchor) {
        (Mode::Compare, Some(ExtrasAnchor(node))) => node(),
        _ => None,
    };
    if let Some(node) = node {
        spawn(async move {
            if let Err(err) = node.scroll_to(ScrollBehavior::Smooth).await {
                warn!("extras scroll failed: {err:?}");
            }
        });
    }
}

#[component]
pub fn ModeSwitch() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let anchor = try_use_context::<ExtrasAnchor>();

    rsx! {
        div {
            class: "mode-switch",
            role: "group",
            aria_label: t!("mode-switch-label"),
            for mode in Mode::ALL {
                button {
                    key: "{mode.button_id()}",
                    id: mode.button_id(),
                    r#type: "button",
                    class: "mode-switch__button",
                    aria_pressed: state.read().is_pressed(mode).to_string(),
                    onclick: move |_| pick_mode(state, anchor, mode),
                    {mode_label(mode)}
                }
            }
        }
    }
}
