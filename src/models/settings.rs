use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::Params;

/// Effective value of a setting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub key: String,
    pub value: Option<String>,
    pub values: Option<Vec<String>>,
    #[serde(rename = "fieldValues")]
    pub fields_values: Option<Vec<Value>>,
    pub inherited: Option<bool>,
    pub parent_value: Option<String>,
    pub parent_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDefinition {
    pub key: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: Option<String>,
    pub default_value: Option<String>,
    pub multi_values: Option<bool>,
    pub options: Option<Vec<String>>,
    pub fields: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsListResponse {
    #[serde(default)]
    pub definitions: Vec<SettingDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsValuesResponse {
    #[serde(default)]
    pub settings: Vec<Setting>,
    pub set_secured_settings: Option<Vec<String>>,
}

/// New value of a setting, globally or on a component
///
/// Set exactly one of `value`, `values` or `field_values`.
#[derive(Debug, Clone, Default)]
pub struct SettingSetRequest {
    pub key: String,
    pub value: Option<String>,
    pub values: Option<Vec<String>>,
    /// One JSON object per entry of a property set
    pub field_values: Option<Vec<String>>,
    pub component: Option<String>,
    pub branch: Option<String>,
    pub pull_request: Option<String>,
}

impl SettingSetRequest {
    pub fn value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("key", &self.key)
            .with("branch", &self.branch)
            .with("component", &self.component)
            .with("pullRequest", &self.pull_request)
            .with("value", &self.value)
            // Entries may contain commas (globs, JSON objects).
            .with_each("values", self.values.as_deref())
            .with_each("fieldValues", self.field_values.as_deref())
    }
}
