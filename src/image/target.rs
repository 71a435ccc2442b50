// ABOUTME: Build target identity and image tag derivation.
// ABOUTME: The tag places the image under the organization's project in the registry.

use crate::types::Secret;

/// Registry that images are pushed to.
pub const REGISTRY_HOST: &str = "gcr.io";

/// Fixed repository namespace between the project and the slug.
pub const REGISTRY_NAMESPACE: &str = "alpha-launchpad";

/// What to build and where to push it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    name: String,
    project_id: String,
    slug: String,
    service_account_key: Secret,
    commit_sha: String,
}

impl BuildTarget {
    pub fn new(
        name: impl Into<String>,
        project_id: impl Into<String>,
        slug: impl Into<String>,
        service_account_key: Secret,
        commit_sha: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project_id: project_id.into(),
            slug: slug.into(),
            service_account_key,
            commit_sha: commit_sha.into(),
        }
    }

    /// Fully-qualified image tag:
    /// `gcr.io/<project_id>/alpha-launchpad/<slug>/<name>:<commit_sha>`.
    pub fn tag(&self) -> String {
        format!(
            "{REGISTRY_HOST}/{}/{REGISTRY_NAMESPACE}/{}/{}:{}",
            self.project_id, self.slug, self.name, self.commit_sha
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    pub fn service_account_key(&self) -> &Secret {
        &self.service_account_key
    }
}
