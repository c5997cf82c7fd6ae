use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::Paging;
use crate::params::Params;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleParam {
    pub key: String,
    pub html_desc: Option<String>,
    pub default_value: Option<String>,
    #[serde(rename = "type")]
    pub param_type: Option<String>,
}

/// A coding rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub key: String,
    pub repo: Option<String>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub html_desc: Option<String>,
    pub md_desc: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub is_template: Option<bool>,
    pub template_key: Option<String>,
    pub tags: Option<Vec<String>>,
    pub sys_tags: Option<Vec<String>>,
    pub lang: Option<String>,
    pub lang_name: Option<String>,
    pub params: Option<Vec<RuleParam>>,
    #[serde(rename = "type")]
    pub rule_type: Option<String>,
    pub internal_key: Option<String>,
    pub is_external: Option<bool>,
    pub clean_code_attribute: Option<String>,
    pub clean_code_attribute_category: Option<String>,
    pub impacts: Option<Vec<Value>>,
    pub description_sections: Option<Vec<Value>>,
    pub education_principles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSearchResponse {
    pub total: u64,
    pub p: u32,
    pub ps: u32,
    #[serde(default)]
    pub rules: Vec<Rule>,
    pub facets: Option<Vec<Value>>,
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleShowResponse {
    pub rule: Rule,
    pub actives: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRepositoriesResponse {
    #[serde(default)]
    pub repositories: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTagsResponse {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Custom rule created from a template
#[derive(Debug, Clone, Default)]
pub struct RuleCreateRequest {
    pub custom_key: String,
    pub markdown_description: String,
    pub name: String,
    pub template_key: String,
    pub clean_code_attribute: Option<String>,
    /// `SOFTWARE_QUALITY=SEVERITY` pairs separated by `;`
    pub impacts: Option<String>,
    /// `key=value` pairs separated by `;`
    pub params: Option<String>,
    pub prevent_reactivation: Option<bool>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub rule_type: Option<String>,
}

impl RuleCreateRequest {
    pub fn new(
        custom_key: impl Into<String>,
        name: impl Into<String>,
        markdown_description: impl Into<String>,
        template_key: impl Into<String>,
    ) -> Self {
        Self {
            custom_key: custom_key.into(),
            name: name.into(),
            markdown_description: markdown_description.into(),
            template_key: template_key.into(),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("customKey", &self.custom_key)
            .with("markdownDescription", &self.markdown_description)
            .with("name", &self.name)
            .with("templateKey", &self.template_key)
            .with("cleanCodeAttribute", &self.clean_code_attribute)
            .with("impacts", &self.impacts)
            .with("params", &self.params)
            .with("preventReactivation", self.prevent_reactivation)
            .with("severity", &self.severity)
            .with("status", &self.status)
            .with("type", &self.rule_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleUpdateRequest {
    pub key: String,
    pub markdown_description: Option<String>,
    pub markdown_note: Option<String>,
    pub name: Option<String>,
    pub params: Option<String>,
    pub remediation_fn_base_effort: Option<String>,
    pub remediation_fn_type: Option<String>,
    pub remediation_gap_multiplier: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl RuleUpdateRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("key", &self.key)
            .with("markdownDescription", &self.markdown_description)
            .with("markdown_note", &self.markdown_note)
            .with("name", &self.name)
            .with("params", &self.params)
            .with("remediationFnBaseEffort", &self.remediation_fn_base_effort)
            .with("remediationFnType", &self.remediation_fn_type)
            .with("remediationGapMultiplier", &self.remediation_gap_multiplier)
            .with("severity", &self.severity)
            .with("status", &self.status)
            .with("tags", &self.tags)
    }
}

/// Filters for `api/rules/search`
///
/// Wire names mix snake_case and camelCase; the server accepts exactly these.
#[derive(Debug, Clone, Default)]
pub struct RuleSearchRequest {
    pub activation: Option<bool>,
    pub active_severities: Option<Vec<String>>,
    pub asc: Option<bool>,
    pub available_since: Option<String>,
    pub clean_code_attribute_categories: Option<Vec<String>>,
    pub cwe: Option<Vec<String>>,
    /// Fields to return
    pub f: Option<Vec<String>>,
    pub facets: Option<Vec<String>>,
    pub impact_severities: Option<Vec<String>>,
    pub impact_software_qualities: Option<Vec<String>>,
    pub include_external: Option<bool>,
    pub inheritance: Option<Vec<String>>,
    pub is_template: Option<bool>,
    pub languages: Option<Vec<String>>,
    pub owasp_top10: Option<Vec<String>>,
    pub owasp_top10_2021: Option<Vec<String>>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub q: Option<String>,
    /// Quality profile key, used with `activation`
    pub qprofile: Option<String>,
    pub repositories: Option<Vec<String>>,
    pub rule_key: Option<String>,
    pub s: Option<String>,
    pub sans_top25: Option<Vec<String>>,
    pub severities: Option<Vec<String>>,
    pub sonarsource_security: Option<Vec<String>>,
    pub statuses: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub template_key: Option<String>,
    pub types: Option<Vec<String>>,
}

impl RuleSearchRequest {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("activation", self.activation)
            .with("active_severities", &self.active_severities)
            .with("asc", self.asc)
            .with("available_since", &self.available_since)
            .with(
                "cleanCodeAttributeCategories",
                &self.clean_code_attribute_categories,
            )
            .with("cwe", &self.cwe)
            .with("f", &self.f)
            .with("facets", &self.facets)
            .with("impactSeverities", &self.impact_severities)
            .with("impactSoftwareQualities", &self.impact_software_qualities)
            .with("include_external", self.include_external)
            .with("inheritance", &self.inheritance)
            .with("is_template", self.is_template)
            .with("languages", &self.languages)
            .with("owaspTop10", &self.owasp_top10)
            .with("owaspTop10-2021", &self.owasp_top10_2021)
            .with("p", self.p)
            .with("ps", self.ps)
            .with("q", &self.q)
            .with("qprofile", &self.qprofile)
            .with("repositories", &self.repositories)
            .with("rule_key", &self.rule_key)
            .with("s", &self.s)
            .with("sansTop25", &self.sans_top25)
            .with("severities", &self.severities)
            .with("sonarsourceSecurity", &self.sonarsource_security)
            .with("statuses", &self.statuses)
            .with("tags", &self.tags)
            .with("template_key", &self.template_key)
            .with("types", &self.types)
    }
}
