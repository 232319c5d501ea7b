//! Planner Configuration
//!
//! Storage keys, export naming and navigation defaults. Every field has a
//! serde default so a partial config deserializes to something usable.

use serde::{Deserialize, Serialize};

use crate::domain::Day;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub storage: StorageKeys,
    #[serde(default)]
    pub export: ExportConfig,
    /// Day shown by the daily view when the query parameter is missing or invalid
    #[serde(default = "default_day")]
    pub default_day: Day,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            export: ExportConfig::default(),
            default_day: default_day(),
        }
    }
}

/// Keys under which each record lives in the key-value store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_plan_key")]
    pub plan: String,
    #[serde(default = "default_details_key")]
    pub details: String,
    #[serde(default = "default_catalog_key")]
    pub catalog: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            plan: default_plan_key(),
            details: default_details_key(),
            catalog: default_catalog_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            mime_type: default_mime_type(),
        }
    }
}

fn default_day() -> Day {
    Day::Monday
}

fn default_plan_key() -> String {
    "mealPlan".to_string()
}

fn default_details_key() -> String {
    "foodDetails".to_string()
}

fn default_catalog_key() -> String {
    "foodCatalog".to_string()
}

fn default_file_name() -> String {
    "meal-plan.csv".to_string()
}

fn default_mime_type() -> String {
    "text/csv".to_string()
}
