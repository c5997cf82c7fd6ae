use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output of `api/system/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHealth {
    /// GREEN, YELLOW or RED
    pub health: String,
    pub causes: Option<Vec<String>>,
    pub nodes: Option<Vec<Value>>,
}

impl SystemHealth {
    pub fn is_green(&self) -> bool {
        self.health == "GREEN"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub id: String,
    pub version: String,
    /// STARTING, UP, DOWN, RESTARTING, DB_MIGRATION_NEEDED, DB_MIGRATION_RUNNING
    pub status: String,
}

/// Selected sections of `api/system/info`
///
/// `SystemApi::info` returns the raw document; decode it into this when the
/// common sections are enough.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(rename = "Health")]
    pub health: Option<String>,
    #[serde(rename = "Health Causes")]
    pub causes: Option<Vec<String>>,
    #[serde(rename = "System")]
    pub system: Option<Value>,
    #[serde(rename = "Database")]
    pub database: Option<Value>,
    #[serde(rename = "Plugins")]
    pub plugins: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUpgradesResponse {
    pub upgrades: Option<Vec<Value>>,
    pub update_center_refresh: Option<String>,
    pub installed_version_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_info_sections() {
        let info: SystemInfo = serde_json::from_value(json!({
            "Health": "GREEN",
            "Health Causes": [],
            "System": {"Version": "10.4"},
            "Compute Engine Tasks": {}
        }))
        .unwrap();
        assert_eq!(info.health.as_deref(), Some("GREEN"));
        assert_eq!(info.causes, Some(vec![]));
        assert!(info.plugins.is_none());
    }

    #[test]
    fn test_health() {
        let health: SystemHealth =
            serde_json::from_value(json!({"health": "RED", "causes": ["disk full"]})).unwrap();
        assert!(!health.is_green());
    }
}
