//! Tunable dashboard constants. Loaded from the `config` object of the embedded
//! survey document; every field falls back to its default when omitted.

use serde::{Deserialize, Serialize};

use crate::dashboard::{Mode, Tab, Theme};
use crate::data::ChartId;
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Zoom delta applied per zoom-in / zoom-out step.
    pub zoom_step: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Maximum spotlight tilt on each axis, in degrees.
    pub tilt_degrees: f64,
    /// Duration of the cohort swap fade.
    pub fade_ms: u64,
    pub default_mode: Mode,
    pub default_tab: Tab,
    pub default_theme: Theme,
    pub default_focus_chart: ChartId,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            zoom_step: 0.12,
            zoom_min: 0.7,
            zoom_max: 2.2,
            tilt_degrees: 3.0,
            fade_ms: 150,
            default_mode: Mode::Physical,
            default_tab: Tab::Overview,
            default_theme: Theme::Day,
            default_focus_chart: ChartId::BooksRead,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [self.zoom_step, self.zoom_min, self.zoom_max, self.tilt_degrees]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(DashboardError::Config(
                "zoom and tilt values must be finite".into(),
            ));
        }
        if self.zoom_step <= 0.0 {
            return Err(DashboardError::Config(format!(
                "zoom_step must be positive (got {})",
                self.zoom_step
            )));
        }
        if !(self.zoom_min <= 1.0 && 1.0 <= self.zoom_max) {
            return Err(DashboardError::Config(format!(
                "zoom range [{}, {}] must contain 1.0",
                self.zoom_min, self.zoom_max
            )));
        }
        if self.tilt_degrees < 0.0 {
            return Err(DashboardError::Config(format!(
                "tilt_degrees must not be negative (got {})",
                self.tilt_degrees
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        assert!(DashboardConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: DashboardConfig = serde_json::from_value(json!({ "zoom_step": 0.2 })).unwrap();
        assert_eq!(cfg.zoom_step, 0.2);
        assert_eq!(cfg.zoom_max, 2.2);
        assert_eq!(cfg.default_mode, Mode::Physical);
        assert_eq!(cfg.default_focus_chart, ChartId::BooksRead);
    }

    #[test]
    fn zoom_range_must_contain_identity() {
        let cfg = DashboardConfig {
            zoom_min: 1.2,
            ..DashboardConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DashboardError::Config(_))));
    }

    #[test]
    fn non_positive_step_rejected() {
        let cfg = DashboardConfig {
            zoom_step: 0.0,
            ..DashboardConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
