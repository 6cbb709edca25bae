//! Keyboard shortcuts. Zoom keys act on the last focused chart.

use super::{DashboardState, ZoomDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Zoom(ZoomDirection),
    CloseModals,
}

impl KeyCommand {
    /// Maps a key value (as reported by `KeyboardEvent.key`) to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" | "=" => Some(Self::Zoom(ZoomDirection::In)),
            "-" | "_" => Some(Self::Zoom(ZoomDirection::Out)),
            "r" | "R" => Some(Self::Zoom(ZoomDirection::Reset)),
            "Escape" => Some(Self::CloseModals),
            _ => None,
        }
    }

    pub fn apply(self, state: &mut DashboardState) {
        match self {
            Self::Zoom(dir) => {
                let chart = state.last_focused;
                state.zoom_chart(chart, dir);
            }
            Self::CloseModals => state.close_modals(),
        }
    }
}

/// Applies the command bound to `key`, if any, and returns it.
pub fn handle_key(state: &mut DashboardState, key: &str) -> Option<KeyCommand> {
    let command = KeyCommand::from_key(key)?;
    command.apply(state);
    Some(command)
}
