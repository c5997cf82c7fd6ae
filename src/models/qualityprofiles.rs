use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::params::Params;

/// A quality profile (set of activated rules for one language)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfile {
    pub key: String,
    pub name: String,
    pub language: String,
    pub language_name: Option<String>,
    pub is_inherited: Option<bool>,
    pub is_default: Option<bool>,
    pub is_built_in: Option<bool>,
    pub parent_key: Option<String>,
    pub parent_name: Option<String>,
    pub active_rule_count: Option<u64>,
    pub active_deprecated_rule_count: Option<u64>,
    pub rules_updated_at: Option<String>,
    pub last_used: Option<String>,
    pub user_updated_at: Option<String>,
    pub project_count: Option<u64>,
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileSearchResponse {
    #[serde(default)]
    pub profiles: Vec<QualityProfile>,
    pub actions: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileCreateResponse {
    pub profile: QualityProfile,
    pub warnings: Option<Vec<String>>,
    pub infos: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileShowResponse {
    pub profile: QualityProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileInheritanceResponse {
    pub profile: QualityProfile,
    pub ancestors: Option<Vec<QualityProfile>>,
    pub children: Option<Vec<QualityProfile>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityProfileChangelogEntry {
    pub date: String,
    pub author_login: Option<String>,
    pub author_name: Option<String>,
    /// ACTIVATED, DEACTIVATED, UPDATED
    pub action: Option<String>,
    pub rule_key: Option<String>,
    pub rule_name: Option<String>,
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileChangelogResponse {
    #[serde(default)]
    pub events: Vec<QualityProfileChangelogEntry>,
    pub paging: Option<Value>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityProfileProjectsResponse {
    pub paging: Option<Value>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Activation of a rule in one profile, as listed by `api/rules/show?actives=true`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleActivation {
    pub q_profile: String,
    pub inherit: Option<String>,
    pub severity: Option<String>,
    pub params: Option<Vec<Value>>,
}

/// Target profile plus rule filters for bulk (de)activation
///
/// `target_severity` is only sent by `activate_rules`.
#[derive(Debug, Clone, Default)]
pub struct BulkRuleActivationRequest {
    pub target_key: String,
    pub target_severity: Option<String>,
    pub active_severities: Option<Vec<String>>,
    pub asc: Option<bool>,
    pub available_since: Option<String>,
    pub inheritance: Option<Vec<String>>,
    pub is_template: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub q: Option<String>,
    pub qprofile: Option<String>,
    pub repositories: Option<Vec<String>>,
    pub rule_key: Option<String>,
    pub s: Option<String>,
    pub severities: Option<Vec<String>>,
    pub statuses: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub template_key: Option<String>,
    pub types: Option<Vec<String>>,
}

impl BulkRuleActivationRequest {
    pub fn new(target_key: impl Into<String>) -> Self {
        Self {
            target_key: target_key.into(),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self, with_severity: bool) -> Params {
        let target_severity = if with_severity {
            self.target_severity.as_deref()
        } else {
            None
        };
        Params::new()
            .with("targetKey", &self.target_key)
            .with("active_severities", &self.active_severities)
            .with("asc", self.asc)
            .with("available_since", &self.available_since)
            .with("inheritance", &self.inheritance)
            .with("is_template", self.is_template)
            .with("languages", &self.languages)
            .with("q", &self.q)
            .with("qprofile", &self.qprofile)
            .with("repositories", &self.repositories)
            .with("rule_key", &self.rule_key)
            .with("s", &self.s)
            .with("severities", &self.severities)
            .with("statuses", &self.statuses)
            .with("tags", &self.tags)
            .with("targetSeverity", target_severity)
            .with("template_key", &self.template_key)
            .with("types", &self.types)
    }
}

/// Filters for `api/qualityprofiles/changelog`
#[derive(Debug, Clone, Default)]
pub struct QualityProfileChangelogRequest {
    pub language: Option<String>,
    pub quality_profile: Option<String>,
    pub since: Option<String>,
    pub to: Option<String>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
}

impl QualityProfileChangelogRequest {
    pub fn new(language: impl Into<String>, quality_profile: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            quality_profile: Some(quality_profile.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("language", &self.language)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("qualityProfile", &self.quality_profile)
            .with("since", &self.since)
            .with("to", &self.to)
    }
}
