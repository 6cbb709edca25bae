use std::rc::Rc;

use dioxus::html::MountedData;
use dioxus::prelude::*;
use tracing::{debug, error, info};

use crate::components::{
    ChartFrame, CombinedCharts, CompareGrid, ExportPanel, ExtrasAnchor, Modal, ModeSwitch,
    StoryPresets, SummaryBar, TabBar,
};
use crate::dashboard::{handle_key, DashboardState, KeyCommand, Tab};
use crate::data::{ChartId, Survey};
use crate::t;

/// Parses the embedded survey once per mount. Errors are flattened to their
/// message so the result can live in a hook.
pub(crate) fn use_survey() -> Result<Survey, String> {
    use_hook(|| {
        Survey::embedded()
            .inspect(|survey| {
                info!(
                    audio = survey.audio.respondents,
                    physical = survey.physical.respondents,
                    "survey loaded"
                )
            })
            .map_err(|err| {
                error!("survey unavailable: {err}");
                err.to_string()
            })
    })
}

#[component]
pub fn Dashboard() -> Element {
    let _lang: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang.as_ref().map(|s| s()).unwrap_or_default();

    match use_survey() {
        Ok(survey) => rsx! { DashboardBody { survey } },
        Err(message) => rsx! {
            section { class: "page page-dashboard",
                div { class: "banner banner--error", role: "alert",
                    strong { {t!("error-data-title")} }
                    p { "{message}" }
                }
            }
        },
    }
}

#[component]
fn DashboardBody(survey: Survey) -> Element {
    let config = survey.config.clone();
    let mut state = use_signal(|| DashboardState::new(config));
    use_context_provider(|| state);
    use_context_provider(|| survey.clone());
    let extras_node = use_signal(|| Option::<Rc<MountedData>>::None);
    use_context_provider(|| ExtrasAnchor(extras_node));

    let theme = state.read().theme.slug();

    let on_key = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        if KeyCommand::from_key(&key).is_none() {
            return;
        }
        if let Some(command) = state.with_mut(|s| handle_key(s, &key)) {
            debug!(?command, "key command");
        }
    };

    // Shortcuts are live as soon as the page shows, without a click first.
    let on_mounted = move |evt: MountedEvent| {
        spawn(async move {
            if let Err(err) = evt.data().set_focus(true).await {
                debug!(?err, "dashboard focus unavailable");
            }
        });
    };

    rsx! {
        section {
            class: "page page-dashboard theme-{theme}",
            tabindex: 0,
            onmounted: on_mounted,
            onkeydown: on_key,
            header { class: "dashboard__intro",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-intro")} }
            }
            div { class: "dashboard__controls",
                ModeSwitch {}
                StoryPresets {}
            }
            SummaryBar {}
            TabBar {}

            TabPanel { tab: Tab::Overview, charts: vec![ChartId::Preferences, ChartId::BooksRead] }
            TabPanel { tab: Tab::Trends, charts: vec![ChartId::Timeline] }
            TabPanel { tab: Tab::Demographics, charts: vec![ChartId::Education, ChartId::Age] }
            ExtrasPanel { anchor: extras_node }

            Modal {}
        }
    }
}

#[component]
fn TabPanel(tab: Tab, charts: Vec<ChartId>) -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let visible = state.read().panel_visible(tab);

    rsx! {
        section {
            id: "panel-{tab.slug()}",
            class: "panel",
            role: "tabpanel",
            aria_labelledby: "tab-{tab.slug()}",
            hidden: !visible,
            div { class: "panel__grid",
                for chart in charts {
                    ChartFrame { key: "{chart.dom_id()}", chart }
                }
            }
        }
    }
}

#[component]
fn ExtrasPanel(anchor: Signal<Option<Rc<MountedData>>>) -> Element {
    let mut anchor = anchor;
    rsx! {
        section {
            id: "panel-{Tab::Extras.slug()}",
            class: "panel panel--extras",
            role: "tabpanel",
            aria_labelledby: "tab-{Tab::Extras.slug()}",
            onmounted: move |evt: MountedEvent| anchor.set(Some(evt.data())),
            CompareGrid {}
            CombinedCharts {}
            ExportPanel {}
        }
    }
}
