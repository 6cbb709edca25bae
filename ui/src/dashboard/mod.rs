//! View state for the dashboard and the pure operations that drive it.
//!
//! Components hold a `Signal<DashboardState>` and call these operations from
//! event handlers; everything here is platform-agnostic and unit tested.

mod keys;
mod state;

pub use keys::{handle_key, KeyCommand};
pub use state::{DashboardState, ModeChange};

use serde::{Deserialize, Serialize};

use crate::data::Cohort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Physical,
    Audio,
    Compare,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Audio, Mode::Physical, Mode::Compare];

    /// Cohort shown in the single-mode panels, if the mode selects one.
    pub fn cohort(self) -> Option<Cohort> {
        match self {
            Mode::Physical => Some(Cohort::Physical),
            Mode::Audio => Some(Cohort::Audio),
            Mode::Compare => None,
        }
    }

    /// Background of the summary strip.
    pub fn summary_tint(self) -> &'static str {
        match self {
            Mode::Audio => {
                "linear-gradient(to right, rgba(90,110,165,.18), rgba(90,110,165,.06))"
            }
            Mode::Physical => {
                "linear-gradient(to right, rgba(178,106,106,.18), rgba(178,106,106,.06))"
            }
            Mode::Compare => {
                "linear-gradient(to right, rgba(178,106,106,.12), rgba(90,110,165,.12))"
            }
        }
    }

    pub fn button_id(self) -> &'static str {
        match self {
            Mode::Audio => "btnAudio",
            Mode::Physical => "btnPhysical",
            Mode::Compare => "btnCompare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Overview,
    Trends,
    Demographics,
    Extras,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Trends, Tab::Demographics, Tab::Extras];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Trends => "trends",
            Tab::Demographics => "demographics",
            Tab::Extras => "extras",
        }
    }

    pub fn focus(self) -> Focus {
        match self {
            Tab::Overview => Focus::Preferences,
            Tab::Trends => Focus::Timeline,
            Tab::Demographics => Focus::Demographics,
            Tab::Extras => Focus::Compare,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

/// Subject named by the focus badge in the summary strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Preferences,
    Timeline,
    Demographics,
    Compare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryPreset {
    Narrative,
    Minimal,
    Teaching,
}

impl StoryPreset {
    pub const ALL: [StoryPreset; 3] = [
        StoryPreset::Narrative,
        StoryPreset::Minimal,
        StoryPreset::Teaching,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Help,
    Sources,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tints_follow_mode() {
        assert_eq!(
            Mode::Audio.summary_tint(),
            "linear-gradient(to right, rgba(90,110,165,.18), rgba(90,110,165,.06))"
        );
        assert_eq!(
            Mode::Physical.summary_tint(),
            "linear-gradient(to right, rgba(178,106,106,.18), rgba(178,106,106,.06))"
        );
        assert_eq!(
            Mode::Compare.summary_tint(),
            "linear-gradient(to right, rgba(178,106,106,.12), rgba(90,110,165,.12))"
        );
    }

    #[test]
    fn tabs_map_to_focus() {
        assert_eq!(Tab::Overview.focus(), Focus::Preferences);
        assert_eq!(Tab::Trends.focus(), Focus::Timeline);
        assert_eq!(Tab::Demographics.focus(), Focus::Demographics);
        assert_eq!(Tab::Extras.focus(), Focus::Compare);
    }
}
