use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Component, Paging};
use crate::params::Params;

/// Position of an issue inside a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub start_line: u32,
    pub end_line: u32,
    pub start_offset: Option<u32>,
    pub end_offset: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLocation {
    pub component: Option<String>,
    pub text_range: Option<TextRange>,
    pub msg: Option<String>,
}

/// Secondary locations explaining an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFlow {
    #[serde(default)]
    pub locations: Vec<IssueLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueComment {
    pub key: String,
    pub login: String,
    pub html_text: Option<String>,
    pub markdown: Option<String>,
    pub created_at: Option<String>,
}

/// A code issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub key: String,
    pub rule: String,
    pub component: String,
    pub project: String,
    /// BLOCKER, CRITICAL, MAJOR, MINOR, INFO
    pub severity: Option<String>,
    pub line: Option<u32>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub resolution: Option<String>,
    /// BUG, VULNERABILITY, CODE_SMELL
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    pub effort: Option<String>,
    pub debt: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub creation_date: Option<String>,
    pub update_date: Option<String>,
    pub close_date: Option<String>,
    pub text_range: Option<TextRange>,
    pub flows: Option<Vec<IssueFlow>>,
    pub comments: Option<Vec<IssueComment>>,
    pub assignee: Option<String>,
    pub hash: Option<String>,
    pub scope: Option<String>,
    pub quick_fix_available: Option<bool>,
    pub rule_description_context_key: Option<String>,
    pub message_formattings: Option<Vec<Value>>,
    pub code_variants: Option<Vec<String>>,
    pub clean_code_attribute: Option<String>,
    pub clean_code_attribute_category: Option<String>,
    pub impacts: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSearchResponse {
    pub paging: Option<Paging>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    pub components: Option<Vec<Component>>,
    pub rules: Option<Vec<Value>>,
    pub facets: Option<Vec<Value>>,
    pub p: Option<u32>,
    pub ps: Option<u32>,
    pub total: Option<u64>,
    pub effort_total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueChangelogResponse {
    #[serde(default)]
    pub changelog: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueAuthorsResponse {
    #[serde(default)]
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTagsResponse {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Changes applied by `bulk_change`
#[derive(Debug, Clone, Default)]
pub struct IssueBulkChangeRequest {
    pub issues: Vec<String>,
    pub add_tags: Option<Vec<String>>,
    /// Login of the new assignee; an empty string unassigns
    pub assign: Option<String>,
    pub comment: Option<String>,
    pub do_transition: Option<String>,
    pub remove_tags: Option<Vec<String>>,
    pub set_severity: Option<String>,
    pub set_type: Option<String>,
}

impl IssueBulkChangeRequest {
    pub fn new(issues: Vec<String>) -> Self {
        Self {
            issues,
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("issues", &self.issues)
            .with("add_tags", &self.add_tags)
            .with("assign", &self.assign)
            .with("comment", &self.comment)
            .with("do_transition", &self.do_transition)
            .with("remove_tags", &self.remove_tags)
            .with("set_severity", &self.set_severity)
            .with("set_type", &self.set_type)
    }
}

/// Filters for `api/issues/search`
#[derive(Debug, Clone, Default)]
pub struct IssueSearchRequest {
    pub additional_fields: Option<Vec<String>>,
    pub asc: Option<bool>,
    pub assigned: Option<bool>,
    pub assignees: Option<Vec<String>>,
    pub author: Option<String>,
    pub branch: Option<String>,
    pub clean_code_attribute_categories: Option<Vec<String>>,
    pub code_variants: Option<Vec<String>>,
    pub component_keys: Option<Vec<String>>,
    pub created_after: Option<String>,
    pub created_at: Option<String>,
    pub created_before: Option<String>,
    /// Relative period such as `1m2w`
    pub created_in_last: Option<String>,
    pub directories: Option<Vec<String>>,
    pub facets: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    pub impact_severities: Option<Vec<String>>,
    pub impact_software_qualities: Option<Vec<String>>,
    pub in_new_code_period: Option<bool>,
    pub issue_statuses: Option<Vec<String>>,
    pub issues: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub on_component_only: Option<bool>,
    pub p: Option<u32>,
    /// Sent as `projects`
    pub project_keys: Option<Vec<String>>,
    pub ps: Option<u32>,
    pub pull_request: Option<String>,
    pub resolutions: Option<Vec<String>>,
    pub resolved: Option<bool>,
    pub rules: Option<Vec<String>>,
    pub s: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub severities: Option<Vec<String>>,
    pub statuses: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
}

impl IssueSearchRequest {
    pub fn for_projects(projects: Vec<String>) -> Self {
        Self {
            project_keys: Some(projects),
            ..Default::default()
        }
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("additionalFields", &self.additional_fields)
            .with("asc", self.asc)
            .with("assigned", self.assigned)
            .with("assignees", &self.assignees)
            .with("author", &self.author)
            .with("branch", &self.branch)
            .with(
                "cleanCodeAttributeCategories",
                &self.clean_code_attribute_categories,
            )
            .with("codeVariants", &self.code_variants)
            .with("componentKeys", &self.component_keys)
            .with("createdAfter", &self.created_after)
            .with("createdAt", &self.created_at)
            .with("createdBefore", &self.created_before)
            .with("createdInLast", &self.created_in_last)
            .with("directories", &self.directories)
            .with("facets", &self.facets)
            .with("files", &self.files)
            .with("impactSeverities", &self.impact_severities)
            .with("impactSoftwareQualities", &self.impact_software_qualities)
            .with("inNewCodePeriod", self.in_new_code_period)
            .with("issueStatuses", &self.issue_statuses)
            .with("issues", &self.issues)
            .with("languages", &self.languages)
            .with("onComponentOnly", self.on_component_only)
            .with("p", self.p)
            .with("projects", &self.project_keys)
            .with("ps", self.ps)
            .with("pullRequest", &self.pull_request)
            .with("resolutions", &self.resolutions)
            .with("resolved", self.resolved)
            .with("rules", &self.rules)
            .with("s", &self.s)
            .with("scopes", &self.scopes)
            .with("severities", &self.severities)
            .with("statuses", &self.statuses)
            .with("tags", &self.tags)
            .with("types", &self.types)
    }
}
