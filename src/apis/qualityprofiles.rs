use crate::{
    error::SonarQubeResult,
    http::Transport,
    models::{
        BulkRuleActivationRequest, QualityProfileChangelogRequest,
        QualityProfileChangelogResponse, QualityProfileCreateResponse,
        QualityProfileInheritanceResponse, QualityProfileProjectsResponse,
        QualityProfileSearchResponse, QualityProfileShowResponse,
    },
    params::Params,
};
use log::{debug, info};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Quality profiles API operations (`/api/qualityprofiles`)
#[derive(Debug)]
pub struct QualityProfilesApi {
    transport: Arc<Transport>,
}

impl QualityProfilesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    async fn post_unit(&self, path: &str, data: Params) -> SonarQubeResult<()> {
        self.transport.post(path, &data).await?;
        Ok(())
    }

    /// Activate one rule in a profile
    ///
    /// # Arguments
    /// * `key` - Profile key
    /// * `rule` - Rule key
    /// * `params` - `key=value` pairs separated by `;`
    /// * `reset` - Reset severity and params to the parent profile's
    pub async fn activate_rule(
        &self,
        key: &str,
        rule: &str,
        params: Option<&str>,
        reset: Option<bool>,
        severity: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Activating rule {} in profile {}", rule, key);
        let data = Params::new()
            .with("key", key)
            .with("rule", rule)
            .with("params", params)
            .with("reset", reset)
            .with("severity", severity);
        self.post_unit("/api/qualityprofiles/activate_rule", data).await
    }

    /// Activate every rule matching the filters. Returns the server's
    /// succeeded/failed counters.
    pub async fn activate_rules(&self, request: &BulkRuleActivationRequest) -> SonarQubeResult<Value> {
        info!("Bulk activating rules in profile {}", request.target_key);
        self.transport
            .post("/api/qualityprofiles/activate_rules", &request.to_params(true))
            .await
    }

    pub async fn add_project(&self, key: &str, project: &str) -> SonarQubeResult<()> {
        info!("Associating project {} with profile {}", project, key);
        let data = Params::new().with("key", key).with("project", project);
        self.post_unit("/api/qualityprofiles/add_project", data).await
    }

    /// Profile backup as XML text
    pub async fn backup(&self, language: &str, quality_profile: &str) -> SonarQubeResult<String> {
        debug!("Backing up profile {} ({})", quality_profile, language);
        let params = Params::new()
            .with("language", language)
            .with("qualityProfile", quality_profile);
        self.transport
            .request_text(Method::GET, "/api/qualityprofiles/backup", Some(&params))
            .await
    }

    pub async fn changelog(
        &self,
        request: &QualityProfileChangelogRequest,
    ) -> SonarQubeResult<QualityProfileChangelogResponse> {
        debug!("Getting quality profile changelog");
        self.transport
            .get_model("/api/qualityprofiles/changelog", &request.to_params())
            .await
    }

    /// Set or clear (`None`) the parent of a profile
    pub async fn change_parent(
        &self,
        language: &str,
        quality_profile: &str,
        parent_quality_profile: Option<&str>,
    ) -> SonarQubeResult<()> {
        info!("Changing parent of profile {} to {:?}", quality_profile, parent_quality_profile);
        let data = Params::new()
            .with("language", language)
            .with("qualityProfile", quality_profile)
            .with("parentQualityProfile", parent_quality_profile);
        self.post_unit("/api/qualityprofiles/change_parent", data).await
    }

    pub async fn copy(&self, from_key: &str, to_name: &str) -> SonarQubeResult<QualityProfileCreateResponse> {
        info!("Copying profile {} to {}", from_key, to_name);
        let data = Params::new().with("fromKey", from_key).with("toName", to_name);
        self.transport
            .post_model("/api/qualityprofiles/copy", &data)
            .await
    }

    pub async fn create(&self, language: &str, name: &str) -> SonarQubeResult<QualityProfileCreateResponse> {
        info!("Creating {} profile {}", language, name);
        let data = Params::new().with("language", language).with("name", name);
        self.transport
            .post_model("/api/qualityprofiles/create", &data)
            .await
    }

    pub async fn deactivate_rule(&self, key: &str, rule: &str) -> SonarQubeResult<()> {
        info!("Deactivating rule {} in profile {}", rule, key);
        let data = Params::new().with("key", key).with("rule", rule);
        self.post_unit("/api/qualityprofiles/deactivate_rule", data).await
    }

    pub async fn deactivate_rules(&self, request: &BulkRuleActivationRequest) -> SonarQubeResult<Value> {
        info!("Bulk deactivating rules in profile {}", request.target_key);
        self.transport
            .post("/api/qualityprofiles/deactivate_rules", &request.to_params(false))
            .await
    }

    pub async fn delete(&self, language: &str, quality_profile: &str) -> SonarQubeResult<()> {
        info!("Deleting profile {} ({})", quality_profile, language);
        let data = Params::new()
            .with("language", language)
            .with("qualityProfile", quality_profile);
        self.post_unit("/api/qualityprofiles/delete", data).await
    }

    pub async fn inheritance(
        &self,
        language: &str,
        quality_profile: &str,
    ) -> SonarQubeResult<QualityProfileInheritanceResponse> {
        debug!("Getting inheritance of profile {}", quality_profile);
        let params = Params::new()
            .with("language", language)
            .with("qualityProfile", quality_profile);
        self.transport
            .get_model("/api/qualityprofiles/inheritance", &params)
            .await
    }

    /// Projects associated with a profile
    ///
    /// `selected` is one of `selected`, `deselected`, `all`.
    pub async fn projects(
        &self,
        key: &str,
        p: Option<u32>,
        ps: Option<u32>,
        q: Option<&str>,
        selected: Option<&str>,
    ) -> SonarQubeResult<QualityProfileProjectsResponse> {
        debug!("Listing projects of profile {}", key);
        let params = Params::new()
            .with("key", key)
            .with("p", p)
            .with("ps", ps)
            .with("q", q)
            .with("selected", selected);
        self.transport
            .get_model("/api/qualityprofiles/projects", &params)
            .await
    }

    pub async fn remove_project(&self, key: &str, project: &str) -> SonarQubeResult<()> {
        info!("Removing project {} from profile {}", project, key);
        let data = Params::new().with("key", key).with("project", project);
        self.post_unit("/api/qualityprofiles/remove_project", data).await
    }

    pub async fn rename(&self, key: &str, name: &str) -> SonarQubeResult<()> {
        info!("Renaming profile {} to {}", key, name);
        let data = Params::new().with("key", key).with("name", name);
        self.post_unit("/api/qualityprofiles/rename", data).await
    }

    pub async fn search(
        &self,
        defaults: Option<bool>,
        language: Option<&str>,
        project: Option<&str>,
        quality_profile: Option<&str>,
    ) -> SonarQubeResult<QualityProfileSearchResponse> {
        debug!("Searching quality profiles");
        let params = Params::new()
            .with("defaults", defaults)
            .with("language", language)
            .with("project", project)
            .with("qualityProfile", quality_profile);
        self.transport
            .get_model("/api/qualityprofiles/search", &params)
            .await
    }

    pub async fn set_default(&self, language: &str, quality_profile: &str) -> SonarQubeResult<()> {
        info!("Setting default {} profile to {}", language, quality_profile);
        let data = Params::new()
            .with("language", language)
            .with("qualityProfile", quality_profile);
        self.post_unit("/api/qualityprofiles/set_default", data).await
    }

    pub async fn show(
        &self,
        key: Option<&str>,
        compare_to_sonar_way: Option<bool>,
    ) -> SonarQubeResult<QualityProfileShowResponse> {
        debug!("Showing profile {:?}", key);
        let params = Params::new()
            .with("key", key)
            .with("compareToSonarWay", compare_to_sonar_way);
        self.transport
            .get_model("/api/qualityprofiles/show", &params)
            .await
    }
}
