use dioxus::prelude::*;

use super::labels::cohort_name;
use crate::dashboard::{DashboardState, ModalKind};
use crate::data::{Cohort, Survey};
use crate::t;

/// Help or sources dialog. Clicking the backdrop, the close button or
/// pressing Escape (handled by the dashboard) closes it.
#[component]
pub fn Modal() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let Some(kind) = state.read().modal else {
        return rsx! {};
    };
    let (id, title) = match kind {
        ModalKind::Help => ("helpModal", t!("help-title")),
        ModalKind::Sources => ("sourcesModal", t!("sources-title")),
    };
    let body = match kind {
        ModalKind::Help => rsx! { HelpBody {} },
        ModalKind::Sources => rsx! { SourcesBody {} },
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| state.with_mut(|s| s.close_modals()),
            div {
                id: "{id}",
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "{id}-title",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                header { class: "modal__header",
                    h2 { id: "{id}-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "icon-button modal__close",
                        aria_label: t!("modal-close"),
                        onclick: move |_| state.with_mut(|s| s.close_modals()),
                        "×"
                    }
                }
                {body}
            }
        }
    }
}

#[component]
fn HelpBody() -> Element {
    rsx! {
        div { class: "modal__body",
            p { {t!("help-modes")} }
            p { {t!("help-charts")} }
            ul { class: "modal__keys",
                li { kbd { "+" } " / " kbd { "−" } " " {t!("help-key-zoom")} }
                li { kbd { "R" } " " {t!("help-key-reset")} }
                li { kbd { "Esc" } " " {t!("help-key-close")} }
            }
        }
    }
}

/// Provenance summary; shared by the sources dialog and the sources page.
#[component]
pub fn SourcesBody() -> Element {
    let survey = use_context::<Survey>();
    let collected = survey.collected.clone();

    rsx! {
        div { class: "modal__body sources",
            p { class: "sources__title", strong { "{survey.title}" } }
            if !survey.source.is_empty() {
                p { class: "sources__origin", "{survey.source}" }
            }
            if !collected.is_empty() {
                p { class: "sources__collected", {t!("sources-collected", date = collected.as_str())} }
            }
            ul { class: "sources__cohorts",
                for cohort in Cohort::ALL {
                    li { key: "{cohort.slug()}",
                        span { class: "sources__swatch", style: "background: {cohort.accent()};" }
                        strong { {cohort_name(cohort)} }
                        " "
                        {t!("sources-respondents", count = survey.cohort(cohort).respondents)}
                    }
                }
            }
            p { class: "sources__note", {t!("sources-note")} }
        }
    }
}
