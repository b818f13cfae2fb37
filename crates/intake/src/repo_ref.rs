//! `owner/repo` references parsed from user input.

use crate::error::IntakeError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// github.com/<owner>/<repo>, anywhere in the input (scheme and trailing path ignored)
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/\s]+)/([^/?#\s]+)").expect("valid regex")
});

// bare owner/repo
static SHORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("valid regex"));

/// A repository on the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Parse a repository URL or an `owner/repo` shorthand.
    ///
    /// A trailing `.git` is stripped from the repository name.
    pub fn parse(input: &str) -> Result<Self, IntakeError> {
        let trimmed = input.trim();
        let invalid = || IntakeError::InvalidRepositoryUrl {
            input: input.to_string(),
        };

        let captures = URL_PATTERN
            .captures(trimmed)
            .or_else(|| SHORT_PATTERN.captures(trimmed))
            .ok_or_else(invalid)?;

        let owner = &captures[1];
        let repo = captures[2].strip_suffix(".git").unwrap_or(&captures[2]);
        if repo.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `owner/repo`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// REST path of the repository resource, relative to the API root.
    pub fn api_path(&self) -> String {
        format!("repos/{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoRef {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
