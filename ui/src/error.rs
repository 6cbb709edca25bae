//! Error types shared by the data, configuration and export layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to parse survey data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid survey data: {0}")]
    Validation(String),
    #[error("Invalid dashboard configuration: {0}")]
    Config(String),
    #[error("Export failed: {0}")]
    Export(String),
    #[error("Export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
