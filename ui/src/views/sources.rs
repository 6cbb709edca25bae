use dioxus::prelude::*;

use super::dashboard::use_survey;
use crate::components::SourcesBody;
use crate::data::Survey;
use crate::t;

#[component]
pub fn Sources() -> Element {
    let _lang: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang.as_ref().map(|s| s()).unwrap_or_default();

    let content = match use_survey() {
        Ok(survey) => rsx! { SourcesCard { survey } },
        Err(message) => rsx! {
            div { class: "banner banner--error", role: "alert",
                strong { {t!("error-data-title")} }
                p { "{message}" }
            }
        },
    };

    rsx! {
        section { class: "page page-sources",
            h1 { {t!("sources-page-title")} }
            p { {t!("sources-page-intro")} }
            {content}
        }
    }
}

#[component]
fn SourcesCard(survey: Survey) -> Element {
    use_context_provider(|| survey.clone());
    rsx! {
        div { class: "card", SourcesBody {} }
    }
}
