//! GitHub REST payloads and their normalization into a snapshot.
//!
//! A [`GitHubBundle`] gathers the responses an intake client collects for
//! one repository: the repository resource, the language breakdown, the
//! root contents listing and the `Link` headers of the `per_page=1`
//! commits and contributors listings.

use crate::detect::detect;
use crate::error::IntakeError;
use crate::pagination::{commit_count, contributor_count};
use indexmap::IndexMap;
use repograde_snapshot::RepositorySnapshot;
use serde::{Deserialize, Serialize};

/// The `GET /repos/{owner}/{repo}` resource, reduced to what scoring uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubRepository {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub updated_at: String,
    pub license: Option<GitHubLicense>,
}

/// License object attached to a repository resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubLicense {
    pub key: Option<String>,
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// One entry of a contents listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    /// `file`, `dir`, `symlink` or `submodule`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Everything collected for one repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubBundle {
    pub repository: GitHubRepository,
    /// `GET /repos/{owner}/{repo}/languages`: language name to bytes.
    #[serde(default)]
    pub languages: IndexMap<String, u64>,
    /// `GET /repos/{owner}/{repo}/contents`.
    #[serde(default)]
    pub contents: Vec<ContentEntry>,
    /// `Link` header of the commits listing, if any.
    #[serde(default)]
    pub commits_link: Option<String>,
    /// `Link` header of the contributors listing, if any.
    #[serde(default)]
    pub contributors_link: Option<String>,
}

impl GitHubBundle {
    /// Parse a bundle from its JSON form.
    pub fn from_json_str(content: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Normalize into a [`RepositorySnapshot`].
    ///
    /// Entry names are lower-cased and blank entries dropped; a missing or
    /// blank primary language becomes `None`; a missing description becomes
    /// empty. The license flag is set by a license file or by the API
    /// reporting a license.
    pub fn into_snapshot(self) -> Result<RepositorySnapshot, IntakeError> {
        let GitHubBundle {
            repository,
            languages,
            contents,
            commits_link,
            contributors_link,
        } = self;

        if repository.name.trim().is_empty() {
            return Err(IntakeError::MissingField {
                field: "repository.name",
            });
        }

        let file_names: Vec<String> = contents
            .into_iter()
            .map(|entry| entry.name.to_lowercase())
            .filter(|name| !name.trim().is_empty())
            .collect();

        let mut snapshot = RepositorySnapshot::new(&repository.name);
        snapshot.description = repository.description.unwrap_or_default();
        snapshot.last_updated = repository.updated_at;
        snapshot.stars = repository.stargazers_count;
        snapshot.forks = repository.forks_count;
        snapshot.open_issues = repository.open_issues_count;
        snapshot.primary_language = repository
            .language
            .filter(|language| !language.trim().is_empty());
        snapshot.language_byte_counts = languages
            .into_iter()
            .filter(|(language, _)| !language.trim().is_empty())
            .collect();

        let mut flags = detect(&file_names);
        flags.has_license |= repository.license.is_some();
        flags.apply(&mut snapshot);

        snapshot.file_names = file_names;
        snapshot.commit_count = commit_count(commits_link.as_deref());
        snapshot.contributor_count = contributor_count(contributors_link.as_deref());

        tracing::debug!(
            target: "repograde::intake",
            repo = %snapshot.name,
            entries = snapshot.file_names.len(),
            languages = snapshot.language_byte_counts.len(),
            commits = snapshot.commit_count,
            contributors = snapshot.contributor_count,
            "Normalized GitHub bundle"
        );

        Ok(snapshot)
    }
}

impl TryFrom<GitHubBundle> for RepositorySnapshot {
    type Error = IntakeError;

    fn try_from(bundle: GitHubBundle) -> Result<Self, Self::Error> {
        bundle.into_snapshot()
    }
}
