use dioxus::prelude::*;

use super::labels::{chart_title, cohort_name};
use crate::charts::{ChartCanvas, ChartScene};
use crate::dashboard::DashboardState;
use crate::data::{ChartId, Cohort, Survey};
use crate::t;

/// Every chart for both cohorts, physical on the left.
#[component]
pub fn CompareGrid() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let survey = use_context::<Survey>();
    let class = if state.read().compare_grid_visible() {
        "compare-grid show"
    } else {
        "compare-grid"
    };

    rsx! {
        div { id: "compareGrid", class: "{class}",
            h3 { class: "compare-grid__title", {t!("compare-title")} }
            div { class: "compare-grid__header",
                for cohort in Cohort::ALL {
                    span {
                        key: "{cohort.slug()}",
                        class: "compare-grid__cohort compare-grid__cohort--{cohort.slug()}",
                        {cohort_name(cohort)}
                    }
                }
            }
            for chart in ChartId::ALL {
                div { key: "{chart.dom_id()}", class: "compare-grid__row",
                    for cohort in Cohort::ALL {
                        div {
                            key: "{cohort.slug()}",
                            id: "{chart.dom_id()}-{cohort.slug()}",
                            class: "compare-grid__cell",
                            ChartCanvas { scene: ChartScene::for_chart(chart, cohort, &survey, &chart_title(chart)) }
                        }
                    }
                }
            }
        }
    }
}

/// Grouped bars for the charts that combine; shown only in compare mode.
#[component]
pub fn CombinedCharts() -> Element {
    let state = use_context::<Signal<DashboardState>>();
    let survey = use_context::<Survey>();
    let visible = state.read().combined_charts_visible();
    let style = if visible { "display: block;" } else { "display: none;" };

    let names = [cohort_name(Cohort::Physical), cohort_name(Cohort::Audio)];
    let scenes: Vec<(ChartId, ChartScene)> = ChartId::ALL
        .into_iter()
        .filter_map(|chart| {
            let names = [names[0].as_str(), names[1].as_str()];
            ChartScene::combined(chart, &survey, &chart_title(chart), names).map(|scene| (chart, scene))
        })
        .collect();

    rsx! {
        section { id: "combinedCharts", class: "combined-charts", style: "{style}",
            h3 { class: "combined-charts__title", {t!("combined-title")} }
            div { class: "combined-charts__grid",
                for (chart, scene) in scenes {
                    div { key: "{chart.dom_id()}", class: "combined-charts__cell",
                        ChartCanvas { scene }
                    }
                }
            }
        }
    }
}
