use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from nosh.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryConfig {
    pub diary: DiaryInfo,
    #[serde(default)]
    pub entries: EntriesConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryInfo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntriesConfig {
    /// Meal slots created for each day, in display order.
    /// Default: see src/templates/nosh.toml
    #[serde(default = "default_meals")]
    pub meals: Vec<String>,
    /// Default: see src/templates/nosh.toml
    #[serde(default = "default_days_to_display")]
    pub days_to_display: usize,
}

impl Default for EntriesConfig {
    fn default() -> Self {
        EntriesConfig {
            meals: default_meals(),
            days_to_display: 7,
        }
    }
}

/// Default: see src/templates/nosh.toml
fn default_meals() -> Vec<String> {
    vec!["Lunch".to_string(), "Dinner".to_string()]
}

/// Default: see src/templates/nosh.toml
fn default_days_to_display() -> usize {
    7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Seed list of foods offered by autocomplete.
    #[serde(default)]
    pub foods: Vec<String>,
    /// Append newly committed foods back into nosh.toml.
    /// Default: see src/templates/nosh.toml
    #[serde(default = "default_true")]
    pub learn: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            foods: Vec::new(),
            learn: true,
        }
    }
}

/// Default: see src/templates/nosh.toml
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
