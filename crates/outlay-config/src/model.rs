use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences for the expense tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    #[serde(default = "Config::default_summary_period_value")]
    pub default_summary_period: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for expense data. Defaults to
    /// `~/Documents/Expenses`.
    pub default_data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            default_summary_period: Self::default_summary_period_value(),
            default_data_root: None,
        }
    }
}

impl Config {
    pub fn default_summary_period_value() -> String {
        "month".into()
    }

    pub fn resolve_default_data_root(&self) -> PathBuf {
        if let Some(path) = &self.default_data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Expenses")
    }
}
