//! Rule-based scoring for repository metadata.
//!
//! This crate maps a [`RepositorySnapshot`] into an [`AnalysisResult`]:
//! - Three rubric sub-scores and a weighted overall score
//! - A technology inventory matched against a reference table
//! - Prioritized skill gaps and actionable recommendations
//! - Strengths, weaknesses, market alignment and a career level
//!
//! Everything is a pure function of the snapshot and the table. There is no
//! I/O, no shared mutable state and no clock.
//!
//! # Example
//!
//! ```rust
//! use repograde_engine::{analyze, RepositorySnapshot};
//!
//! let mut snapshot = RepositorySnapshot::new("demo");
//! snapshot.has_readme = true;
//! snapshot.file_names = vec!["readme.md".into(), "src".into()];
//!
//! let result = analyze(&snapshot).unwrap();
//! assert!(result.score <= 100);
//! println!("{} scored {}", result.repo_info.name, result.score);
//! ```

#![deny(unsafe_code)]

mod analyzer;
pub mod error;
pub mod gaps;
pub mod insights;
pub mod metrics;
pub mod recommendations;
pub mod table;
pub mod technologies;

pub use analyzer::{analyze, validate, Analyzer};
pub use error::{AnalyzeError, TableError};
pub use gaps::{identify_skill_gaps, MAX_SKILL_GAPS};
pub use insights::{career_level, market_alignment, summarize, MAX_INSIGHTS};
pub use metrics::{calculate_metrics, overall_score};
pub use recommendations::{generate_recommendations, MAX_RECOMMENDATIONS};
pub use table::{TablePartitions, TechnologyInfo, TechnologyTable};
pub use technologies::{extract_technologies, file_blob, MAX_TECHNOLOGIES};

pub use repograde_snapshot::{
    AnalysisResult, CareerLevel, Category, Confidence, Demand, Effort, Insights, Metrics, Priority,
    Recommendation, RecommendationCategory, RepoInfo, RepositorySnapshot, SkillGap,
    TechnologyRecord,
};
