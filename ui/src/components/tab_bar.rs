use dioxus::prelude::*;

use super::labels::tab_label;
use crate::dashboard::{DashboardState, Tab};
use crate::t;

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let active = state.read().tab;

    rsx! {
        nav { class: "tabs", role: "tablist", aria_label: t!("tabs-label"),
            for tab in Tab::ALL {
                button {
                    key: "{tab.slug()}",
                    id: "tab-{tab.slug()}",
                    r#type: "button",
                    role: "tab",
                    class: "tabs__tab",
                    aria_selected: (tab == active).to_string(),
                    aria_controls: "panel-{tab.slug()}",
                    onclick: move |_| state.with_mut(|s| s.set_tab(tab)),
                    {tab_label(tab)}
                }
            }
        }
    }
}
