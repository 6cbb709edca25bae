//! Survey dataset: both cohorts' series plus the dashboard configuration,
//! compiled into the binary from `assets/data/survey.json`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::config::DashboardConfig;
use crate::error::{DashboardError, Result};

const EMBEDDED_SURVEY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/survey.json"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    Audio,
    Physical,
}

impl Cohort {
    pub const ALL: [Cohort; 2] = [Cohort::Physical, Cohort::Audio];

    pub fn accent(self) -> &'static str {
        match self {
            Cohort::Physical => "#b26a6a",
            Cohort::Audio => "#5a6ea5",
        }
    }

    /// Slice palette, accent first then progressively lighter tints.
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Cohort::Physical => &["#b26a6a", "#cf9a8c", "#e8c7b8", "#8a4f4f", "#f2ddd3"],
            Cohort::Audio => &["#5a6ea5", "#8c9ccb", "#bcc6e4", "#3f4f7d", "#dde3f2"],
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Cohort::Physical => "physical",
            Cohort::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Donut,
    Bar,
    Gauge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    Preferences,
    BooksRead,
    Timeline,
    Education,
    Age,
}

impl ChartId {
    pub const ALL: [ChartId; 5] = [
        ChartId::Preferences,
        ChartId::BooksRead,
        ChartId::Timeline,
        ChartId::Education,
        ChartId::Age,
    ];

    /// Element id of the chart container.
    pub fn dom_id(self) -> &'static str {
        match self {
            ChartId::Preferences => "prefChart",
            ChartId::BooksRead => "booksChart",
            ChartId::Timeline => "timelineChart",
            ChartId::Education => "eduChart",
            ChartId::Age => "ageChart",
        }
    }

    /// Key shared by the callout chip and its panel; doubles as the short name in hints.
    pub fn callout_key(self) -> &'static str {
        match self {
            ChartId::Preferences => "pref",
            ChartId::BooksRead => "books",
            ChartId::Timeline => "timeline",
            ChartId::Education => "edu",
            ChartId::Age => "age",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            ChartId::Preferences => ChartKind::Donut,
            ChartId::BooksRead | ChartId::Timeline => ChartKind::Bar,
            ChartId::Education => ChartKind::Pie,
            ChartId::Age => ChartKind::Gauge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub label: String,
    pub value: f64,
    pub max: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortData {
    pub respondents: u32,
    pub preferences: Vec<Datum>,
    pub books_read: Vec<Datum>,
    pub timeline: Vec<Datum>,
    pub education: Vec<Datum>,
    pub age: Gauge,
}

impl CohortData {
    /// Categorical series for a chart. The gauge is exposed as a single datum.
    pub fn series(&self, chart: ChartId) -> Vec<Datum> {
        match chart {
            ChartId::Preferences => self.preferences.clone(),
            ChartId::BooksRead => self.books_read.clone(),
            ChartId::Timeline => self.timeline.clone(),
            ChartId::Education => self.education.clone(),
            ChartId::Age => vec![Datum {
                label: self.age.label.clone(),
                value: self.age.value,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub collected: String,
    #[serde(default)]
    pub config: DashboardConfig,
    pub audio: CohortData,
    pub physical: CohortData,
}

impl Survey {
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SURVEY)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let survey: Survey = serde_json::from_str(raw)?;
        survey.validate()?;
        Ok(survey)
    }

    pub fn cohort(&self, cohort: Cohort) -> &CohortData {
        match cohort {
            Cohort::Audio => &self.audio,
            Cohort::Physical => &self.physical,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        for cohort in Cohort::ALL {
            let data = self.cohort(cohort);
            for chart in ChartId::ALL {
                validate_series(cohort, chart, &data.series(chart))?;
            }
            if !(data.age.max.is_finite() && data.age.max > 0.0) {
                return Err(DashboardError::Validation(format!(
                    "{} age gauge max must be positive (got {})",
                    cohort.slug(),
                    data.age.max
                )));
            }
        }

        // Compare views pair categories by index.
        for chart in ChartId::ALL {
            let audio = self.audio.series(chart).len();
            let physical = self.physical.series(chart).len();
            if audio != physical {
                return Err(DashboardError::Validation(format!(
                    "{chart:?} has {audio} audio entries but {physical} physical entries"
                )));
            }
        }

        Ok(())
    }
}

fn validate_series(cohort: Cohort, chart: ChartId, series: &[Datum]) -> Result<()> {
    if series.is_empty() {
        return Err(DashboardError::Validation(format!(
            "{} {chart:?} series is empty",
            cohort.slug()
        )));
    }

    let mut labels = HashSet::new();
    for datum in series {
        if !datum.value.is_finite() || datum.value < 0.0 {
            return Err(DashboardError::Validation(format!(
                "{} {chart:?} entry '{}' has invalid value {}",
                cohort.slug(),
                datum.label,
                datum.value
            )));
        }
        if !labels.insert(datum.label.as_str()) {
            return Err(DashboardError::Validation(format!(
                "{} {chart:?} repeats label '{}'",
                cohort.slug(),
                datum.label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn embedded_value() -> Value {
        serde_json::from_str(EMBEDDED_SURVEY).unwrap()
    }

    #[test]
    fn embedded_survey_loads() {
        let survey = Survey::embedded().expect("embedded survey is valid");
        assert_eq!(survey.audio.preferences.len(), 3);
        assert_eq!(survey.config, DashboardConfig::default());
    }

    #[test]
    fn embedded_bar_series_sum_to_respondents() {
        let survey = Survey::embedded().unwrap();
        for cohort in Cohort::ALL {
            let data = survey.cohort(cohort);
            let total: f64 = data.books_read.iter().map(|d| d.value).sum();
            assert_eq!(total as u32, data.respondents, "{cohort:?}");
        }
    }

    #[test]
    fn negative_values_rejected() {
        let mut raw = embedded_value();
        raw["audio"]["timeline"][0]["value"] = json!(-3);
        let err = Survey::from_json(&raw.to_string()).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)), "{err}");
    }

    #[test]
    fn mismatched_cohort_lengths_rejected() {
        let mut raw = embedded_value();
        raw["physical"]["education"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "label": "Doctorate", "value": 2 }));
        assert!(Survey::from_json(&raw.to_string()).is_err());
    }

    #[test]
    fn duplicate_labels_rejected() {
        let mut raw = embedded_value();
        raw["audio"]["preferences"][1]["label"] = json!("Audiobooks");
        assert!(Survey::from_json(&raw.to_string()).is_err());
    }

    #[test]
    fn zero_gauge_max_rejected() {
        let mut raw = embedded_value();
        raw["physical"]["age"]["max"] = json!(0);
        assert!(Survey::from_json(&raw.to_string()).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Survey::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }
}
