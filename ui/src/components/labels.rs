//! Localized labels for dashboard enums. Every lookup goes through a literal
//! key so the compile-time `fl!` check covers all of them.

use crate::dashboard::{Focus, Mode, StoryPreset, Tab};
use crate::data::{ChartId, Cohort};
use crate::t;

pub fn mode_label(mode: Mode) -> String {
    match mode {
        Mode::Audio => t!("mode-audio"),
        Mode::Physical => t!("mode-physical"),
        Mode::Compare => t!("mode-compare"),
    }
}

pub fn cohort_name(cohort: Cohort) -> String {
    match cohort {
        Cohort::Audio => t!("cohort-audio"),
        Cohort::Physical => t!("cohort-physical"),
    }
}

pub fn tab_label(tab: Tab) -> String {
    match tab {
        Tab::Overview => t!("tab-overview"),
        Tab::Trends => t!("tab-trends"),
        Tab::Demographics => t!("tab-demographics"),
        Tab::Extras => t!("tab-extras"),
    }
}

pub fn focus_label(focus: Focus) -> String {
    match focus {
        Focus::Preferences => t!("focus-preferences"),
        Focus::Timeline => t!("focus-timeline"),
        Focus::Demographics => t!("focus-demographics"),
        Focus::Compare => t!("focus-compare"),
    }
}

pub fn chart_title(chart: ChartId) -> String {
    match chart {
        ChartId::Preferences => t!("chart-preferences"),
        ChartId::BooksRead => t!("chart-books"),
        ChartId::Timeline => t!("chart-timeline"),
        ChartId::Education => t!("chart-education"),
        ChartId::Age => t!("chart-age"),
    }
}

pub fn callout_text(chart: ChartId) -> String {
    match chart {
        ChartId::Preferences => t!("callout-pref"),
        ChartId::BooksRead => t!("callout-books"),
        ChartId::Timeline => t!("callout-timeline"),
        ChartId::Education => t!("callout-edu"),
        ChartId::Age => t!("callout-age"),
    }
}

pub fn preset_label(preset: StoryPreset) -> String {
    match preset {
        StoryPreset::Narrative => t!("story-narrative"),
        StoryPreset::Minimal => t!("story-minimal"),
        StoryPreset::Teaching => t!("story-teaching"),
    }
}

pub fn preset_id(preset: StoryPreset) -> &'static str {
    match preset {
        StoryPreset::Narrative => "chipNarrative",
        StoryPreset::Minimal => "chipMinimal",
        StoryPreset::Teaching => "chipTeaching",
    }
}

/// Element id of a chart's spotlight toggle.
pub fn spotlight_id(chart: ChartId) -> &'static str {
    match chart {
        ChartId::Preferences => "sparklePref",
        ChartId::BooksRead => "sparkleBooks",
        ChartId::Timeline => "sparkleTimeline",
        ChartId::Education => "sparkleEdu",
        ChartId::Age => "sparkleAge",
    }
}

pub fn hint_text(chart: Option<ChartId>) -> String {
    match chart {
        Some(chart) => t!("hint-focused", chart = chart.callout_key()),
        None => t!("hint-default"),
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
    fn mode_labels() {
        english();
        assert_eq!(mode_label(Mode::Audio), "Audiobook");
        assert_eq!(mode_label(Mode::Physical), "Physical Books");
        assert_eq!(mode_label(Mode::Compare), "Compare");
    }

    #[test]
    fn focus_badges() {
        english();
        assert_eq!(focus_label(Focus::Preferences), "Focus: Preferences");
        assert_eq!(focus_label(Focus::Timeline), "Focus: Timeline");
        assert_eq!(focus_label(Focus::Demographics), "Focus: Demographics");
        assert_eq!(focus_label(Focus::Compare), "Focus: Compare");
    }

    #[test]
    fn hint_names_focused_chart() {
        english();
        assert_eq!(hint_text(Some(ChartId::Age)), "Tip: age focused, use + / − / R");
        assert_eq!(hint_text(Some(ChartId::Timeline)), "Tip: timeline focused, use + / − / R");
        assert!(!hint_text(None).contains('\u{2068}'));
    }
}
