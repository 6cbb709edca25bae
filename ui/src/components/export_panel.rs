use dioxus::prelude::*;
use tracing::error;

use super::labels::chart_title;
use crate::dashboard::DashboardState;
use crate::data::Survey;
use crate::export::{perform_export, ExportFormat, ExportOutcome, ExportRequest};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

fn format_name(format: ExportFormat) -> String {
    format.extension().to_ascii_uppercase()
}

fn working_label(format: ExportFormat) -> String {
    t!("export-working", format = format_name(format))
}

fn done_label(outcome: &ExportOutcome) -> String {
    let format = format_name(outcome.format);
    match &outcome.saved_to {
        Some(path) => t!("export-saved", format = format, path = path.as_str()),
        None => t!("export-started", format = format),
    }
}

fn button_label(format: ExportFormat) -> String {
    match format {
        ExportFormat::ChartSvg => t!("export-chart-svg"),
        ExportFormat::ChartPng => t!("export-chart-png"),
        ExportFormat::DataCsv => t!("export-data-csv"),
        ExportFormat::DataJson => t!("export-data-json"),
    }
}

fn start_export(
    survey: Survey,
    request: ExportRequest,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) {
    if busy() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(working_label(request.format)));

    #[cfg(target_arch = "wasm32")]
    {
        spawn(async move {
            let outcome = perform_export(survey, request).await;
            finish_export(outcome, status, busy);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(perform_export(survey, request));
        finish_export(outcome, status, busy);
    }
}

fn finish_export(
    outcome: crate::error::Result<ExportOutcome>,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) {
    match outcome {
        Ok(outcome) => status.set(ExportStatus::Done(done_label(&outcome))),
        Err(err) => {
            error!("export failed: {err}");
            status.set(ExportStatus::Error(err.to_string()));
        }
    }
    busy.set(false);
}

/// Exports the last focused chart (as drawn for the displayed cohort) and the
/// full dataset.
#[component]
pub fn ExportPanel() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let survey = use_context::<Survey>();
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let (chart, cohort) = {
        let s = state.read();
        (s.last_focused, s.displayed_cohort)
    };
    let focused_title = chart_title(chart);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("export__status".to_string(), label.clone())),
        ExportStatus::Done(message) => Some((
            "export__status export__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export__status export__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        section { class: "export", aria_labelledby: "export-title",
            h3 { id: "export-title", class: "export__title", {t!("export-title")} }
            p { class: "export__focused", {t!("export-focused", chart = focused_title.as_str())} }
            div { class: "export__actions",
                for format in ExportFormat::ALL {
                    button {
                        key: "{format.extension()}",
                        r#type: "button",
                        class: "button",
                        disabled: busy(),
                        onclick: {
                            let survey = survey.clone();
                            let title = focused_title.clone();
                            move |_| {
                                let request = ExportRequest {
                                    format,
                                    chart,
                                    cohort,
                                    title: title.clone(),
                                };
                                start_export(survey.clone(), request, status, busy);
                            }
                        },
                        {button_label(format)}
                    }
                }
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::i18n;

    fn english() {
        i18n::init();
        i18n::set_language("en-US").unwrap();
    }

    #[test]
    fn working_label_names_format() {
        english();
        assert_eq!(working_label(ExportFormat::ChartPng), "Preparing PNG…");
        assert_eq!(working_label(ExportFormat::DataJson), "Preparing JSON…");
    }

    #[test]
    fn done_label_reports_destination() {
        english();
        let saved = ExportOutcome {
            format: ExportFormat::DataCsv,
            saved_to: Some("/tmp/shelfsight-survey.csv".into()),
        };
        assert_eq!(done_label(&saved), "CSV saved to /tmp/shelfsight-survey.csv");
        let started = ExportOutcome {
            format: ExportFormat::ChartSvg,
            saved_to: None,
        };
        assert_eq!(done_label(&started), "SVG download started");
    }
}
