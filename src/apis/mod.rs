pub mod applications;
pub mod components;
pub mod hotspots;
pub mod issues;
pub mod measures;
pub mod projects;
pub mod qualitygates;
pub mod qualityprofiles;
pub mod rules;
pub mod settings;
pub mod sources;
pub mod system;
pub mod user_tokens;
pub mod users;

pub use applications::ApplicationsApi;
pub use components::ComponentsApi;
pub use hotspots::HotspotsApi;
pub use issues::IssuesApi;
pub use measures::MeasuresApi;
pub use projects::ProjectsApi;
pub use qualitygates::QualityGatesApi;
pub use qualityprofiles::QualityProfilesApi;
pub use rules::RulesApi;
pub use settings::SettingsApi;
pub use sources::SourcesApi;
pub use system::SystemApi;
pub use user_tokens::UserTokensApi;
pub use users::UsersApi;

use crate::{error::SonarQubeResult, http};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode `payload[key]` when the server wraps the object, or the whole
/// payload otherwise.
pub(crate) fn unwrap_nested<T: DeserializeOwned>(mut payload: Value, key: &str) -> SonarQubeResult<T> {
    let inner = payload.get_mut(key).map(Value::take);
    http::decode(inner.unwrap_or(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Keyed {
        key: String,
    }

    #[test]
    fn test_unwrap_nested() {
        let wrapped: Keyed = unwrap_nested(json!({"issue": {"key": "A"}}), "issue").unwrap();
        assert_eq!(wrapped.key, "A");

        let bare: Keyed = unwrap_nested(json!({"key": "B"}), "issue").unwrap();
        assert_eq!(bare.key, "B");
    }
}
