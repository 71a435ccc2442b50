// ABOUTME: CI invocation context: commit, repository, and branch of the current run.
// ABOUTME: Read once from GitHub Actions environment variables and passed around explicitly.

use crate::error::{Error, Result};

pub const COMMIT_VAR: &str = "GITHUB_SHA";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const HEAD_REF_VAR: &str = "GITHUB_HEAD_REF";
pub const REF_VAR: &str = "GITHUB_REF";

/// Source-control metadata for the pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub commit_sha: String,
    /// Repository name without the owner.
    pub repository: String,
    pub branch: String,
}

impl InvocationContext {
    pub fn new(
        commit_sha: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            commit_sha: commit_sha.into(),
            repository: repository.into(),
            branch: branch.into(),
        }
    }

    /// Read the context from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the context through `lookup`, which maps a variable name to its value.
    ///
    /// Pull request runs set `GITHUB_HEAD_REF` to the source branch; other
    /// runs only have `GITHUB_REF`, which carries a `refs/heads/` or
    /// `refs/tags/` prefix.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::MissingEnvVar(var.to_string()))
        };

        let commit_sha = require(COMMIT_VAR)?;
        let repository = repository_name(&require(REPOSITORY_VAR)?).to_string();

        let branch = match lookup(HEAD_REF_VAR).filter(|value| !value.is_empty()) {
            Some(head_ref) => head_ref,
            None => branch_name(&require(REF_VAR)?).to_string(),
        };

        Ok(Self {
            commit_sha,
            repository,
            branch,
        })
    }
}

fn repository_name(full_name: &str) -> &str {
    full_name.rsplit('/').next().unwrap_or(full_name)
}

fn branch_name(git_ref: &str) -> &str {
    git_ref
        .strip_prefix("refs/heads/")
        .or_else(|| git_ref.strip_prefix("refs/tags/"))
        .unwrap_or(git_ref)
}
