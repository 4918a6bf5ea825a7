// Settings module
// User-facing configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// chrono format string used when printing the selected day
    pub date_format: String,
    /// Mark days that have a logged session in the month grid
    pub show_session_markers: bool,
    /// Read-only JSON file of sessions to load at startup
    pub seed_sessions: Option<PathBuf>,
    /// Default log filter when RUST_LOG is unset
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            show_session_markers: true,
            seed_sessions: None,
            log_level: None,
        }
    }
}
