use std::collections::BTreeMap;

use tracing::debug;

use super::{Focus, ModalKind, Mode, StoryPreset, Tab, Theme, ZoomDirection};
use crate::core::config::DashboardConfig;
use crate::core::format;
use crate::data::{ChartId, Cohort};

/// Outcome of [`DashboardState::set_mode`] the view needs to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Nothing to animate.
    Steady,
    /// Single panels should fade out, then [`DashboardState::commit_cohort_swap`].
    SwapCohort(Cohort),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub config: DashboardConfig,
    pub mode: Mode,
    /// Cohort currently drawn in the single-mode panels.
    pub displayed_cohort: Cohort,
    /// Cohort waiting for the fade to finish before it is drawn.
    pub pending_cohort: Option<Cohort>,
    pub theme: Theme,
    pub tab: Tab,
    pub focus: Focus,
    pub last_focused: ChartId,
    /// Chart named in the keyboard hint after it was clicked.
    pub hinted_chart: Option<ChartId>,
    pub zoom: BTreeMap<ChartId, f64>,
    pub spotlight: BTreeMap<ChartId, bool>,
    pub callouts: BTreeMap<ChartId, bool>,
    pub preset: Option<StoryPreset>,
    pub modal: Option<ModalKind>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        let mode = config.default_mode;
        let tab = config.default_tab;
        Self {
            displayed_cohort: mode.cohort().unwrap_or(Cohort::Physical),
            pending_cohort: None,
            theme: config.default_theme,
            focus: tab.focus(),
            last_focused: config.default_focus_chart,
            hinted_chart: None,
            zoom: ChartId::ALL.into_iter().map(|c| (c, 1.0)).collect(),
            spotlight: ChartId::ALL.into_iter().map(|c| (c, false)).collect(),
            callouts: ChartId::ALL.into_iter().map(|c| (c, false)).collect(),
            preset: None,
            modal: None,
            mode,
            tab,
            config,
        }
    }

    // ---------- Mode & tab ----------

    pub fn set_mode(&mut self, next: Mode) -> ModeChange {
        debug!(?next, "set mode");
        self.mode = next;
        match next.cohort() {
            Some(cohort) if cohort != self.displayed_cohort => {
                self.pending_cohort = Some(cohort);
                ModeChange::SwapCohort(cohort)
            }
            Some(_) => {
                self.pending_cohort = None;
                ModeChange::Steady
            }
            // Compare keeps whatever the single panels last showed.
            None => ModeChange::Steady,
        }
    }

    /// Applies a swap requested by [`Self::set_mode`]. A stale swap (the mode
    /// changed again while fading) is dropped.
    pub fn commit_cohort_swap(&mut self, cohort: Cohort) {
        if self.pending_cohort == Some(cohort) {
            self.displayed_cohort = cohort;
            self.pending_cohort = None;
        }
    }

    pub fn is_fading(&self) -> bool {
        self.pending_cohort.is_some()
    }

    /// The compare button also moves the focus badge to the comparison.
    pub fn press_compare(&mut self) -> ModeChange {
        let change = self.set_mode(Mode::Compare);
        self.focus = Focus::Compare;
        change
    }

    pub fn set_tab(&mut self, next: Tab) {
        debug!(?next, "set tab");
        self.tab = next;
        self.focus = next.focus();
    }

    pub fn is_pressed(&self, mode: Mode) -> bool {
        self.mode == mode
    }

    pub fn panel_visible(&self, tab: Tab) -> bool {
        match tab {
            // The extras section is always present; only its grid is gated.
            Tab::Extras => true,
            other => self.tab == other,
        }
    }

    pub fn compare_grid_visible(&self) -> bool {
        self.mode == Mode::Compare || self.tab == Tab::Extras
    }

    pub fn combined_charts_visible(&self) -> bool {
        self.mode == Mode::Compare
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // ---------- Zoom ----------

    pub fn zoom_of(&self, chart: ChartId) -> f64 {
        self.zoom.get(&chart).copied().unwrap_or(1.0)
    }

    pub fn zoom_chart(&mut self, chart: ChartId, dir: ZoomDirection) -> f64 {
        self.last_focused = chart;
        let cfg = &self.config;
        let current = self.zoom_of(chart);
        let next = match dir {
            ZoomDirection::In => (current + cfg.zoom_step).min(cfg.zoom_max),
            ZoomDirection::Out => (current - cfg.zoom_step).max(cfg.zoom_min),
            ZoomDirection::Reset => 1.0,
        };
        self.zoom.insert(chart, next);
        debug!(?chart, ?dir, zoom = next, "zoom chart");
        next
    }

    pub fn zoom_transform(&self, chart: ChartId) -> String {
        format::scale_transform(self.zoom_of(chart))
    }

    pub fn focus_chart(&mut self, chart: ChartId) {
        self.last_focused = chart;
        self.hinted_chart = Some(chart);
    }

    // ---------- Spotlight ----------

    pub fn spotlight_on(&self, chart: ChartId) -> bool {
        self.spotlight.get(&chart).copied().unwrap_or(false)
    }

    pub fn set_spotlight(&mut self, chart: ChartId, enabled: bool) {
        self.spotlight.insert(chart, enabled);
    }

    /// Tilt for a pointer at `(x, y)` over a frame whose client rect starts at
    /// `(left, top)` with the given size.
    pub fn tilt_transform(
        &self,
        (x, y): (f64, f64),
        (left, top): (f64, f64),
        (width, height): (f64, f64),
    ) -> String {
        if width <= 0.0 || height <= 0.0 {
            return format::TILT_RESET.to_string();
        }
        let px = ((x - left) / width) - 0.5;
        let py = ((y - top) / height) - 0.5;
        let tilt = self.config.tilt_degrees;
        format::tilt_transform(-py * tilt, px * tilt)
    }

    // ---------- Callouts & presets ----------

    pub fn callout_on(&self, chart: ChartId) -> bool {
        self.callouts.get(&chart).copied().unwrap_or(false)
    }

    pub fn toggle_callouts(&mut self, chart: ChartId, pressed: bool) {
        self.callouts.insert(chart, pressed);
    }

    pub fn apply_preset(&mut self, preset: StoryPreset) {
        debug!(?preset, "story preset");
        self.preset = Some(preset);
        match preset {
            StoryPreset::Narrative => self.toggle_callouts(ChartId::Timeline, true),
            StoryPreset::Minimal => {
                for chart in ChartId::ALL {
                    self.toggle_callouts(chart, false);
                }
            }
            StoryPreset::Teaching => {
                for chart in [ChartId::Timeline, ChartId::Age, ChartId::Education] {
                    self.toggle_callouts(chart, true);
                }
            }
        }
    }

    // ---------- Modals ----------

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
    }

    pub fn close_modals(&mut self) {
        self.modal = None;
    }
}
