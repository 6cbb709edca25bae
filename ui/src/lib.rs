//! Shared UI crate for Shelfsight, the reading habits dashboard. Data, chart
//! rendering, dashboard state and every view live here; the `web` and
//! `desktop` crates only add routing and launch configuration.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

    pub mod labels;

    mod callout;
    mod chart_frame;
    mod compare;
    mod export_panel;
    mod modal;
    mod mode_switch;
    mod summary_bar;
    mod tab_bar;

    pub use callout::{CalloutPanel, StoryPresets};
    pub use chart_frame::ChartFrame;
    pub use compare::{CombinedCharts, CompareGrid};
    pub use export_panel::ExportPanel;
    pub use modal::{Modal, SourcesBody};
    pub use mode_switch::{ExtrasAnchor, ModeSwitch};
    pub use summary_bar::SummaryBar;
    pub use tab_bar::TabBar;
}

use dioxus::prelude::*;

/// Shared dashboard theme, linked by the web launcher and inlined by desktop.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
