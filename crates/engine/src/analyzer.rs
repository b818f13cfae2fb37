//! The `analyze` orchestrator and input validation.

use crate::error::AnalyzeError;
use crate::gaps::identify_skill_gaps;
use crate::insights::summarize;
use crate::metrics::{calculate_metrics, overall_score};
use crate::recommendations::generate_recommendations;
use crate::table::TechnologyTable;
use crate::technologies::extract_technologies;
use repograde_snapshot::{AnalysisResult, RepoInfo, RepositorySnapshot};
use std::sync::{Arc, LazyLock};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

static BUILTIN_TABLE: LazyLock<Arc<TechnologyTable>> =
    LazyLock::new(|| Arc::new(TechnologyTable::builtin()));

/// Stateless analyzer over an injected technology table.
///
/// Cloning is cheap (the table is shared) and an analyzer can be used from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: Arc<TechnologyTable>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            table: Arc::clone(&BUILTIN_TABLE),
        }
    }
}

impl Analyzer {
    /// Create an analyzer over `table`.
    pub fn new(table: TechnologyTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Create an analyzer over a table shared with other analyzers.
    pub fn with_shared_table(table: Arc<TechnologyTable>) -> Self {
        Self { table }
    }

    /// The reference table in use.
    pub fn table(&self) -> &TechnologyTable {
        &self.table
    }

    /// Score a snapshot.
    ///
    /// Fails only when the snapshot violates the input contract; every
    /// well-formed snapshot yields a complete result.
    pub fn analyze(&self, snapshot: &RepositorySnapshot) -> Result<AnalysisResult, AnalyzeError> {
        validate(snapshot)?;

        let metrics = calculate_metrics(snapshot);
        let score = overall_score(&metrics);
        let technologies = extract_technologies(snapshot, &self.table);
        let skill_gaps = identify_skill_gaps(snapshot, &technologies);
        let recommendations = generate_recommendations(snapshot, &metrics, &technologies);
        let insights = summarize(snapshot, score, &technologies, &skill_gaps);

        tracing::debug!(
            target: "repograde::engine",
            repo = %snapshot.name,
            score,
            code_quality = metrics.code_quality,
            documentation = metrics.documentation,
            project_structure = metrics.project_structure,
            technologies = technologies.len(),
            skill_gaps = skill_gaps.len(),
            recommendations = recommendations.len(),
            career_level = insights.career_level.as_str(),
            "Analyzed repository"
        );

        Ok(AnalysisResult {
            score,
            metrics,
            technologies,
            skill_gaps,
            recommendations,
            repo_info: RepoInfo::from(snapshot),
            insights,
        })
    }
}

/// Score a snapshot against the built-in technology table.
pub fn analyze(snapshot: &RepositorySnapshot) -> Result<AnalysisResult, AnalyzeError> {
    Analyzer::default().analyze(snapshot)
}

/// Check the input contract, naming the first violated field.
pub fn validate(snapshot: &RepositorySnapshot) -> Result<(), AnalyzeError> {
    if snapshot.name.trim().is_empty() {
        return Err(AnalyzeError::invalid("name", "must not be empty"));
    }

    for (i, name) in snapshot.file_names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(AnalyzeError::invalid(
                format!("fileNames[{i}]"),
                "must not be empty",
            ));
        }
        if name.to_lowercase() != *name {
            return Err(AnalyzeError::invalid(
                format!("fileNames[{i}]"),
                format!("must be lower-cased, got '{name}'"),
            ));
        }
    }

    if snapshot
        .language_byte_counts
        .keys()
        .any(|lang| lang.trim().is_empty())
    {
        return Err(AnalyzeError::invalid(
            "languageByteCounts",
            "language names must not be empty",
        ));
    }

    if !snapshot.last_updated.is_empty()
        && OffsetDateTime::parse(&snapshot.last_updated, &Rfc3339).is_err()
    {
        return Err(AnalyzeError::invalid(
            "lastUpdated",
            format!("must be an RFC 3339 timestamp, got '{}'", snapshot.last_updated),
        ));
    }

    Ok(())
}
