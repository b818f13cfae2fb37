//! Wire-format types shared by the repograde engine, intake and CLI.
//!
//! A [`RepositorySnapshot`] goes in, an [`AnalysisResult`] comes out. Both
//! serialize with camelCase field names so the JSON aggregate can be stored
//! and replayed by persistence layers without a translation step.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized repository metadata consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySnapshot {
    /// Repository name.
    pub name: String,
    /// Repository description (empty when the host reports none).
    #[serde(default)]
    pub description: String,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub last_updated: String,
    /// Stargazer count.
    #[serde(default)]
    pub stars: u64,
    /// Fork count.
    #[serde(default)]
    pub forks: u64,
    /// Open issue count.
    #[serde(default)]
    pub open_issues: u64,
    /// Primary language reported by the host, if any.
    #[serde(default)]
    pub primary_language: Option<String>,
    /// Language name to byte count, in the order the host reported them.
    #[serde(default)]
    pub language_byte_counts: IndexMap<String, u64>,
    /// A README is present at the top level.
    #[serde(default)]
    pub has_readme: bool,
    /// A license file is present or the host reports a license.
    #[serde(default)]
    pub has_license: bool,
    /// Test files or test configuration are present.
    #[serde(default)]
    pub has_tests: bool,
    /// A CI configuration is present.
    #[serde(default)]
    pub has_ci: bool,
    /// Documentation beyond the README is present.
    #[serde(default)]
    pub has_documentation: bool,
    /// Lower-cased top-level entry names (files and directories).
    #[serde(default)]
    pub file_names: Vec<String>,
    /// Total commit count.
    #[serde(default)]
    pub commit_count: u64,
    /// Contributor count.
    #[serde(default = "default_contributor_count")]
    pub contributor_count: u64,
}

fn default_contributor_count() -> u64 {
    1
}

impl RepositorySnapshot {
    /// Create a snapshot with the documented defaults for every optional field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            last_updated: String::new(),
            stars: 0,
            forks: 0,
            open_issues: 0,
            primary_language: None,
            language_byte_counts: IndexMap::new(),
            has_readme: false,
            has_license: false,
            has_tests: false,
            has_ci: false,
            has_documentation: false,
            file_names: Vec::new(),
            commit_count: 0,
            contributor_count: default_contributor_count(),
        }
    }

    /// Returns true when `name` is one of the top-level entries.
    pub fn has_entry(&self, name: &str) -> bool {
        self.file_names.iter().any(|f| f == name)
    }
}

/// Broad technology category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Programming language.
    Language,
    /// Framework or runtime.
    Framework,
    /// Database product.
    Database,
    /// Build, deployment or operations tooling.
    Devops,
    /// Cloud platform.
    Cloud,
    /// Developer tool.
    Tool,
}

impl Category {
    /// Lower-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Cloud => "cloud",
            Self::Tool => "tool",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a technology was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Directly observed (primary language, explicit file match).
    Detected,
    /// Deduced from a weaker co-occurrence signal.
    Inferred,
}

/// Job-market demand for a technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    /// High demand.
    High,
    /// Medium demand.
    Medium,
    /// Low demand.
    Low,
}

impl Demand {
    /// Lower-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A technology detected in or inferred from a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyRecord {
    /// Technology name, unique within a result.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Detection confidence.
    pub confidence: Confidence,
    /// Market demand.
    pub market_demand: Demand,
    /// Related skills, in reference-table order.
    pub related_skills: Vec<String>,
}

/// Priority shared by skill gaps and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must fix.
    Critical,
    /// Significant impact.
    High,
    /// Moderate impact.
    Medium,
    /// Minor improvement.
    Low,
}

impl Priority {
    /// Lower-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A skill the repository does not demonstrate yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    /// Skill name.
    pub skill: String,
    /// Priority.
    pub priority: Priority,
    /// Why the gap matters.
    pub reason: String,
    /// Suggested learning resources.
    pub learning_resources: Vec<String>,
    /// Score points the gap is worth.
    pub estimated_impact: u32,
}

/// Area a recommendation improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
    /// Tests and code health.
    CodeQuality,
    /// README, docs and licensing.
    Documentation,
    /// Layout of the repository.
    Structure,
    /// Activity and community.
    Collaboration,
    /// CI and containerization.
    Deployment,
}

impl RecommendationCategory {
    /// Kebab-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeQuality => "code-quality",
            Self::Documentation => "documentation",
            Self::Structure => "structure",
            Self::Collaboration => "collaboration",
            Self::Deployment => "deployment",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated effort to act on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// A few hours.
    Low,
    /// A few days.
    Medium,
    /// Sustained work.
    High,
}

impl Effort {
    /// Lower-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// An actionable improvement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Short title.
    pub title: String,
    /// One-sentence description.
    pub description: String,
    /// Priority.
    pub priority: Priority,
    /// Area improved.
    pub category: RecommendationCategory,
    /// Effort estimate.
    pub estimated_effort: Effort,
    /// Score points gained when done.
    pub score_impact: u32,
    /// Ordered steps.
    pub action_steps: Vec<String>,
}

/// The three rubric sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Code quality score.
    pub code_quality: u8,
    /// Documentation score.
    pub documentation: u8,
    /// Project structure score.
    pub project_structure: u8,
}

/// Identity fields echoed from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    /// Repository name.
    pub name: String,
    /// Repository description.
    pub description: String,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Last update timestamp.
    pub last_updated: String,
}

impl From<&RepositorySnapshot> for RepoInfo {
    fn from(snapshot: &RepositorySnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            stars: snapshot.stars,
            forks: snapshot.forks,
            last_updated: snapshot.last_updated.clone(),
        }
    }
}

/// Career level suggested by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerLevel {
    /// Entry level.
    Junior,
    /// Intermediate.
    Mid,
    /// Experienced.
    Senior,
}

impl CareerLevel {
    /// Lower-case label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

/// Narrative summary of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Up to five strengths.
    pub strengths: Vec<String>,
    /// Up to five weaknesses.
    pub weaknesses: Vec<String>,
    /// Market alignment narrative.
    pub market_alignment: String,
    /// Suggested career level.
    pub career_level: CareerLevel,
}

/// Complete output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Weighted overall score in [0, 100].
    pub score: u8,
    /// Rubric sub-scores.
    pub metrics: Metrics,
    /// Up to 15 technologies in discovery order.
    pub technologies: Vec<TechnologyRecord>,
    /// Up to 10 skill gaps in checklist order.
    pub skill_gaps: Vec<SkillGap>,
    /// Up to 12 recommendations in checklist order.
    pub recommendations: Vec<Recommendation>,
    /// Identity echo of the snapshot.
    pub repo_info: RepoInfo,
    /// Strengths, weaknesses and career level.
    pub insights: Insights,
}
