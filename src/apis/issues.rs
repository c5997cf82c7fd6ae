use crate::{
    apis::unwrap_nested,
    error::SonarQubeResult,
    http::Transport,
    models::{
        Issue, IssueAuthorsResponse, IssueBulkChangeRequest, IssueChangelogResponse,
        IssueSearchRequest, IssueSearchResponse, IssueTagsResponse,
    },
    params::Params,
};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Issues API operations (`/api/issues`)
///
/// Mutations answer with `{"issue": {...}}`; the inner issue is returned.
#[derive(Debug)]
pub struct IssuesApi {
    transport: Arc<Transport>,
}

impl IssuesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn mutate(&self, path: &str, data: Params) -> SonarQubeResult<Issue> {
        let response = self.transport.post(path, &data).await?;
        unwrap_nested(response, "issue")
    }

    pub async fn add_comment(&self, issue: &str, text: &str) -> SonarQubeResult<Issue> {
        info!("Adding comment to issue {}", issue);
        let data = Params::new().with("issue", issue).with("text", text);
        self.mutate("/api/issues/add_comment", data).await
    }

    /// Assign an issue, or unassign it when `assignee` is `None`.
    pub async fn assign(&self, issue: &str, assignee: Option<&str>) -> SonarQubeResult<Issue> {
        info!("Assigning issue {} to {:?}", issue, assignee);
        let data = Params::new().with("issue", issue).with("assignee", assignee);
        self.mutate("/api/issues/assign", data).await
    }

    /// SCM authors of a project's issues
    pub async fn authors(
        &self,
        project: &str,
        ps: Option<u32>,
        q: Option<&str>,
    ) -> SonarQubeResult<IssueAuthorsResponse> {
        debug!("Listing issue authors for {}", project);
        let params = Params::new()
            .with("project", project)
            .with("ps", ps)
            .with("q", q);
        self.transport.get_model("/api/issues/authors", &params).await
    }

    /// Apply the same change to many issues. Returns the raw server summary.
    pub async fn bulk_change(&self, request: &IssueBulkChangeRequest) -> SonarQubeResult<Value> {
        info!("Bulk changing {} issues", request.issues.len());
        self.transport
            .post("/api/issues/bulk_change", &request.to_params())
            .await
    }

    pub async fn changelog(&self, issue: &str) -> SonarQubeResult<IssueChangelogResponse> {
        debug!("Getting changelog of issue {}", issue);
        let params = Params::new().with("issue", issue);
        self.transport.get_model("/api/issues/changelog", &params).await
    }

    pub async fn delete_comment(&self, comment: &str) -> SonarQubeResult<Issue> {
        info!("Deleting issue comment {}", comment);
        let data = Params::new().with("comment", comment);
        self.mutate("/api/issues/delete_comment", data).await
    }

    /// Apply a workflow transition (confirm, resolve, reopen, wontfix, falsepositive...)
    pub async fn do_transition(&self, issue: &str, transition: &str) -> SonarQubeResult<Issue> {
        info!("Applying transition {} to issue {}", transition, issue);
        let data = Params::new()
            .with("issue", issue)
            .with("transition", transition);
        self.mutate("/api/issues/do_transition", data).await
    }

    pub async fn edit_comment(&self, comment: &str, text: &str) -> SonarQubeResult<Issue> {
        info!("Editing issue comment {}", comment);
        let data = Params::new().with("comment", comment).with("text", text);
        self.mutate("/api/issues/edit_comment", data).await
    }

    /// Search issues
    ///
    /// # Arguments
    /// * `request` - Filters; unset fields are not sent
    pub async fn search(&self, request: &IssueSearchRequest) -> SonarQubeResult<IssueSearchResponse> {
        debug!("Searching issues");
        self.transport
            .get_model("/api/issues/search", &request.to_params())
            .await
    }

    pub async fn set_severity(&self, issue: &str, severity: &str) -> SonarQubeResult<Issue> {
        info!("Setting severity of issue {} to {}", issue, severity);
        let data = Params::new().with("issue", issue).with("severity", severity);
        self.mutate("/api/issues/set_severity", data).await
    }

    /// Replace the tags of an issue. An empty list clears them.
    pub async fn set_tags(&self, issue: &str, tags: &[String]) -> SonarQubeResult<Issue> {
        info!("Setting tags of issue {}", issue);
        let data = Params::new().with("issue", issue).with("tags", tags);
        self.mutate("/api/issues/set_tags", data).await
    }

    pub async fn set_type(&self, issue: &str, issue_type: &str) -> SonarQubeResult<Issue> {
        info!("Setting type of issue {} to {}", issue, issue_type);
        let data = Params::new().with("issue", issue).with("type", issue_type);
        self.mutate("/api/issues/set_type", data).await
    }

    pub async fn tags(
        &self,
        project: Option<&str>,
        ps: Option<u32>,
        q: Option<&str>,
    ) -> SonarQubeResult<IssueTagsResponse> {
        debug!("Listing issue tags");
        let params = Params::new()
            .with("project", project)
            .with("ps", ps)
            .with("q", q);
        self.transport.get_model("/api/issues/tags", &params).await
    }
}
