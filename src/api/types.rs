// ABOUTME: Wire and context types for the Launchpad API.
// ABOUTME: JSON bodies use camelCase field names.

use serde::{Deserialize, Serialize};

use crate::context::InvocationContext;
use crate::types::Secret;

/// The caller's tenant identity, looked up by API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub project_id: String,
    pub slug_id: String,
}

/// A registered deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub url: String,
}

/// Everything sent when registering a deployment, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    api_key: Secret,
    name: String,
    repository: String,
    branch: String,
    commit: String,
}

impl DeploymentRequest {
    pub fn new(api_key: Secret, name: impl Into<String>, context: &InvocationContext) -> Self {
        Self {
            api_key,
            name: name.into(),
            repository: context.repository.clone(),
            branch: context.branch.clone(),
            commit: context.commit_sha.clone(),
        }
    }

    pub fn api_key(&self) -> &Secret {
        &self.api_key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// JSON body for `POST /deployments`.
    pub(crate) fn body(&self) -> RegistrationBody<'_> {
        RegistrationBody {
            api_key: self.api_key.expose(),
            name: &self.name,
            branch: &self.branch,
            repository: &self.repository,
            commit: &self.commit,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationBody<'a> {
    api_key: &'a str,
    name: &'a str,
    branch: &'a str,
    repository: &'a str,
    commit: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_uses_camel_case() {
        let org: Organization =
            serde_json::from_str(r#"{"projectId":"p1","slugId":"s1"}"#).unwrap();
        assert_eq!(org.project_id, "p1");
        assert_eq!(org.slug_id, "s1");
    }

    #[test]
    fn registration_body_fields() {
        let context = InvocationContext::new("abc123", "widgets", "main");
        let request = DeploymentRequest::new(Secret::new("key-1"), "api", &context);

        let body = serde_json::to_value(request.body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "apiKey": "key-1",
                "name": "api",
                "branch": "main",
                "repository": "widgets",
                "commit": "abc123",
            })
        );
    }
}
