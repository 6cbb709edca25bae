use dioxus::prelude::*;

use super::labels::{focus_label, hint_text, mode_label};
use crate::dashboard::{DashboardState, ModalKind, Theme};
use crate::t;

/// Strip under the mode switch: current mode, focus badge, keyboard hint and
/// the theme / help / sources buttons.
#[component]
pub fn SummaryBar() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let snapshot = state.read();
    let mode = mode_label(snapshot.mode);
    let tint = snapshot.mode.summary_tint();
    let focus = focus_label(snapshot.focus);
    let hint = hint_text(snapshot.hinted_chart);
    let theme_label = match snapshot.theme {
        Theme::Day => t!("theme-to-night"),
        Theme::Night => t!("theme-to-day"),
    };
    drop(snapshot);

    rsx! {
        div { id: "summary", class: "summary", style: "background: {tint};",
            div { class: "summary__status",
                span { class: "summary__eyebrow", {t!("summary-viewing")} }
                strong { id: "modeLabel", class: "summary__mode", "{mode}" }
            }
            div { class: "summary__badges",
                span { id: "focusBadge", class: "badge badge--focus", "{focus}" }
                span { id: "hintBadge", class: "badge badge--hint", "{hint}" }
            }
            div { class: "summary__actions",
                button {
                    id: "themeToggle",
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| state.with_mut(|s| s.toggle_theme()),
                    "{theme_label}"
                }
                button {
                    id: "helpBtn",
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| state.with_mut(|s| s.open_modal(ModalKind::Help)),
                    {t!("help-open")}
                }
                button {
                    id: "sourcesBtn",
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| state.with_mut(|s| s.open_modal(ModalKind::Sources)),
                    {t!("sources-open")}
                }
            }
        }
    }
}
