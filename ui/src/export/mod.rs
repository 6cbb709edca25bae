//! Chart and dataset exports.
//!
//! Charts are exported from the same [`ChartScene`] the dashboard draws, so an
//! SVG download matches what is on screen. PNGs rasterise that SVG (canvas on
//! the web, `resvg` on native). Dataset exports flatten both cohorts into one
//! row per datum.

mod deliver;
mod raster;

use serde::Serialize;
use tracing::{info, warn};

use crate::charts::svg::to_svg_document;
use crate::charts::ChartScene;
use crate::data::{ChartId, Cohort, Survey};
use crate::error::Result;

pub use deliver::{copy_to_clipboard, download_bytes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    ChartSvg,
    ChartPng,
    DataCsv,
    DataJson,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::ChartSvg,
        ExportFormat::ChartPng,
        ExportFormat::DataCsv,
        ExportFormat::DataJson,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::ChartSvg => "svg",
            ExportFormat::ChartPng => "png",
            ExportFormat::DataCsv => "csv",
            ExportFormat::DataJson => "json",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::ChartSvg => "image/svg+xml",
            ExportFormat::ChartPng => "image/png",
            ExportFormat::DataCsv => "text/csv",
            ExportFormat::DataJson => "application/json",
        }
    }

    pub fn is_chart(self) -> bool {
        matches!(self, ExportFormat::ChartSvg | ExportFormat::ChartPng)
    }
}

/// What to export. Chart formats use `chart` drawn for `cohort`; dataset
/// formats ignore both.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub chart: ChartId,
    pub cohort: Cohort,
    /// Localized chart title embedded in the SVG.
    pub title: String,
}

/// Where a finished export went. `saved_to` is the file path on native and
/// `None` when the browser took over the download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub saved_to: Option<String>,
}

/// One flattened dataset row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    pub cohort: Cohort,
    pub chart: ChartId,
    pub label: String,
    pub value: f64,
    /// Share of the series total; for the age gauge, share of the gauge max.
    pub share: f64,
}

pub fn dataset_rows(survey: &Survey) -> Vec<DatasetRow> {
    let mut rows = Vec::new();
    for cohort in Cohort::ALL {
        let data = survey.cohort(cohort);
        for chart in ChartId::ALL {
            let series = data.series(chart);
            let total = match chart {
                ChartId::Age => data.age.max,
                _ => series.iter().map(|d| d.value).sum(),
            };
            for datum in series {
                let share = if total > 0.0 { datum.value / total } else { 0.0 };
                rows.push(DatasetRow {
                    cohort,
                    chart,
                    label: datum.label,
                    value: datum.value,
                    share,
                });
            }
        }
    }
    rows
}

pub fn build_csv(survey: &Survey) -> String {
    let mut csv = String::from("cohort,chart,label,value,share\n");
    for row in dataset_rows(survey) {
        let fields = [
            row.cohort.slug().to_string(),
            row.chart.callout_key().to_string(),
            row.label,
            row.value.to_string(),
            format!("{:.4}", row.share),
        ];
        let line = fields
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

#[derive(Serialize)]
struct DatasetDocument<'a> {
    title: &'a str,
    source: &'a str,
    collected: &'a str,
    respondents: RespondentCounts,
    rows: Vec<DatasetRow>,
}

#[derive(Serialize)]
struct RespondentCounts {
    audio: u32,
    physical: u32,
}

pub fn build_json(survey: &Survey) -> Result<String> {
    let doc = DatasetDocument {
        title: &survey.title,
        source: &survey.source,
        collected: &survey.collected,
        respondents: RespondentCounts {
            audio: survey.audio.respondents,
            physical: survey.physical.respondents,
        },
        rows: dataset_rows(survey),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn escape_csv(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

pub fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

pub fn export_filename(request: &ExportRequest, slug: &str) -> String {
    let ext = request.format.extension();
    if request.format.is_chart() {
        format!(
            "shelfsight-{}-{}-{slug}.{ext}",
            request.chart.callout_key(),
            request.cohort.slug()
        )
    } else {
        format!("shelfsight-survey-{slug}.{ext}")
    }
}

/// Builds the payload for `request` and hands it to the platform.
pub async fn perform_export(survey: Survey, request: ExportRequest) -> Result<ExportOutcome> {
    let filename = export_filename(&request, &timestamp_slug());
    let bytes = match request.format {
        ExportFormat::ChartSvg => chart_svg(&survey, &request).into_bytes(),
        ExportFormat::ChartPng => raster::svg_to_png(&chart_svg(&survey, &request)).await?,
        ExportFormat::DataCsv => build_csv(&survey).into_bytes(),
        ExportFormat::DataJson => {
            let json = build_json(&survey)?;
            if let Err(err) = copy_to_clipboard(json.clone()).await {
                warn!("clipboard copy skipped: {err}");
            }
            json.into_bytes()
        }
    };

    let saved_to = download_bytes(&filename, request.format.mime(), bytes).await?;
    info!(format = ?request.format, %filename, "export delivered");
    Ok(ExportOutcome {
        format: request.format,
        saved_to,
    })
}

fn chart_svg(survey: &Survey, request: &ExportRequest) -> String {
    let scene = ChartScene::for_chart(request.chart, request.cohort, survey, &request.title);
    to_svg_document(&scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn survey() -> Survey {
        Survey::embedded().unwrap()
    }

    fn request(format: ExportFormat) -> ExportRequest {
        ExportRequest {
            format,
            chart: ChartId::Timeline,
            cohort: Cohort::Audio,
            title: "Time".into(),
        }
    }

    #[test]
    fn csv_has_a_row_per_datum() {
        let survey = survey();
        let csv = build_csv(&survey);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("cohort,chart,label,value,share"));
        let expected: usize = Cohort::ALL
            .iter()
            .map(|c| {
                ChartId::ALL
                    .iter()
                    .map(|chart| survey.cohort(*c).series(*chart).len())
                    .sum::<usize>()
            })
            .sum();
        assert_eq!(lines.count(), expected);
        assert!(csv.contains("audio,pref,Audiobooks,58,0.5800"));
    }

    #[test]
    fn csv_quotes_awkward_fields() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn age_share_is_relative_to_gauge_max() {
        let survey = survey();
        let row = dataset_rows(&survey)
            .into_iter()
            .find(|r| r.cohort == Cohort::Physical && r.chart == ChartId::Age)
            .unwrap();
        assert!((row.share - 41.0 / 70.0).abs() < 1e-9);
    }

    #[test]
    fn json_document_carries_provenance() {
        let survey = survey();
        let json = build_json(&survey).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["respondents"]["audio"], 48);
        assert_eq!(value["respondents"]["physical"], 52);
        assert_eq!(value["rows"][0]["cohort"], "physical");
        assert_eq!(value["rows"][0]["chart"], "preferences");
    }

    #[test]
    fn filenames_carry_chart_and_slug() {
        assert_eq!(
            export_filename(&request(ExportFormat::ChartPng), "20250414_101500"),
            "shelfsight-timeline-audio-20250414_101500.png"
        );
        assert_eq!(
            export_filename(&request(ExportFormat::DataCsv), "20250414_101500"),
            "shelfsight-survey-20250414_101500.csv"
        );
    }

    #[test]
    fn timestamp_slug_shape() {
        let slug = timestamp_slug();
        assert_eq!(slug.len(), 15);
        assert_eq!(slug.as_bytes()[8], b'_');
        assert!(slug.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn chart_svg_uses_request_title() {
        let svg = chart_svg(&survey(), &request(ExportFormat::ChartSvg));
        assert!(svg.contains("<title>Time</title>"));
        assert!(svg.contains("#5a6ea5"));
    }
}
