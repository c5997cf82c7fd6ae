use serde::{Deserialize, Serialize};

use super::common::{Branch, Paging};
use crate::params::Params;

/// Project membership of an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationProject {
    pub key: String,
    pub name: String,
    pub enabled: Option<bool>,
    pub selected: Option<bool>,
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationBranch {
    pub name: String,
    #[serde(default)]
    pub is_main: bool,
}

/// An application aggregating several projects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub projects: Option<Vec<ApplicationProject>>,
    pub branches: Option<Vec<ApplicationBranch>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationCreateResponse {
    pub application: Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationShowResponse {
    pub application: Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationProjectsSearchResponse {
    pub paging: Paging,
    #[serde(default)]
    pub projects: Vec<ApplicationProject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationBranchesResponse {
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// Branch definition for `create_branch` / `update_branch`
///
/// `project_branches[i]` is the branch used for `projects[i]`; projects
/// without an entry use their main branch.
#[derive(Debug, Clone, Default)]
pub struct ApplicationBranchRequest {
    pub application: String,
    pub branch: String,
    pub projects: Vec<String>,
    pub project_branches: Option<Vec<String>>,
}

impl ApplicationBranchRequest {
    pub fn new(application: impl Into<String>, branch: impl Into<String>, projects: Vec<String>) -> Self {
        Self {
            application: application.into(),
            branch: branch.into(),
            projects,
            project_branches: None,
        }
    }

    pub(crate) fn to_params(&self, new_name: Option<&str>) -> Params {
        Params::new()
            .with("application", &self.application)
            .with("branch", &self.branch)
            .with("name", new_name)
            // Matched to `projectBranch` by position
            .with_each("project", Some(self.projects.as_slice()))
            .with_each("projectBranch", self.project_branches.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_show() {
        let resp: ApplicationShowResponse = serde_json::from_value(json!({
            "application": {
                "key": "my-app",
                "name": "My App",
                "projects": [{"key": "p1", "name": "P1", "selected": true}],
                "branches": [{"name": "main", "isMain": true}, {"name": "dev"}]
            }
        }))
        .unwrap();
        let app = resp.application;
        assert_eq!(app.projects.unwrap()[0].selected, Some(true));
        let branches = app.branches.unwrap();
        assert!(branches[0].is_main);
        assert!(!branches[1].is_main);
    }

    #[test]
    fn test_branch_request_params() {
        let mut req = ApplicationBranchRequest::new("app", "release", vec!["p1".into(), "p2".into()]);
        req.project_branches = Some(vec!["release-1".into(), "release-2".into()]);

        let create = req.to_params(None);
        assert_eq!(create.get_all("project"), vec!["p1", "p2"]);
        assert_eq!(create.get_all("projectBranch"), vec!["release-1", "release-2"]);
        assert!(!create.contains("name"));

        let update = req.to_params(Some("release-v2"));
        assert_eq!(update.get("name"), Some("release-v2"));
    }
}
