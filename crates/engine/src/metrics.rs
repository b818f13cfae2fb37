//! Rubric sub-scores and the weighted overall score.
//!
//! Each calculator starts from a base and adds fixed increments for every
//! satisfied condition. Increments are additive and order-independent; the
//! clamp to 100 is the only nonlinearity.

use repograde_snapshot::{Metrics, RepositorySnapshot};

const MAX_SCORE: u32 = 100;

const CODE_QUALITY_BASE: u32 = 40;
const TESTS_POINTS: u32 = 15;
const CI_POINTS: u32 = 15;
const LICENSE_POINTS: u32 = 5;
const ACTIVE_COMMITS_POINTS: u32 = 5;
const VERY_ACTIVE_COMMITS_POINTS: u32 = 5;
const CONTRIBUTORS_POINTS: u32 = 5;
const STRONG_COLLABORATION_POINTS: u32 = 5;
const LOW_ISSUE_COUNT_POINTS: u32 = 5;

const ACTIVE_COMMITS: u64 = 50;
const VERY_ACTIVE_COMMITS: u64 = 150;
const STRONG_COLLABORATION: u64 = 5;
const LOW_ISSUE_COUNT: u64 = 15;

const DOCUMENTATION_BASE: u32 = 20;
const README_POINTS: u32 = 45;
const ADDITIONAL_DOCS_POINTS: u32 = 20;
const DESCRIPTION_POINTS: u32 = 5;
const LICENSE_DOC_POINTS: u32 = 10;

/// Descriptions at or below this many characters are treated as placeholders.
const MEANINGFUL_DESCRIPTION_CHARS: usize = 20;

const PROJECT_STRUCTURE_BASE: u32 = 30;
const CONFIG_POINTS: u32 = 15;
const SOURCE_DIR_POINTS: u32 = 15;
const PACKAGE_MANAGER_POINTS: u32 = 20;
const GITIGNORE_POINTS: u32 = 10;
const MULTI_LANGUAGE_POINTS: u32 = 10;

const SOURCE_DIRS: &[&str] = &["src", "lib", "app"];
const PACKAGE_MANIFESTS: &[&str] = &[
    "package.json",
    "requirements.txt",
    "go.mod",
    "cargo.toml",
    "pom.xml",
];

/// Weights in tenths: 0.4 / 0.3 / 0.3.
const CODE_QUALITY_WEIGHT: u32 = 4;
const DOCUMENTATION_WEIGHT: u32 = 3;
const PROJECT_STRUCTURE_WEIGHT: u32 = 3;

fn clamp(score: u32) -> u8 {
    // MAX_SCORE fits in u8
    score.min(MAX_SCORE) as u8
}

fn points(condition: bool, points: u32) -> u32 {
    if condition {
        points
    } else {
        0
    }
}

/// Code quality: tests, CI, license, activity, collaboration and issue load.
pub fn code_quality(snapshot: &RepositorySnapshot) -> u8 {
    let score = CODE_QUALITY_BASE
        + points(snapshot.has_tests, TESTS_POINTS)
        + points(snapshot.has_ci, CI_POINTS)
        + points(snapshot.has_license, LICENSE_POINTS)
        + points(snapshot.commit_count > ACTIVE_COMMITS, ACTIVE_COMMITS_POINTS)
        + points(
            snapshot.commit_count > VERY_ACTIVE_COMMITS,
            VERY_ACTIVE_COMMITS_POINTS,
        )
        + points(snapshot.contributor_count > 1, CONTRIBUTORS_POINTS)
        + points(
            snapshot.contributor_count > STRONG_COLLABORATION,
            STRONG_COLLABORATION_POINTS,
        )
        + points(snapshot.open_issues < LOW_ISSUE_COUNT, LOW_ISSUE_COUNT_POINTS);
    clamp(score)
}

/// Documentation: README, extra docs, a meaningful description and a license.
pub fn documentation(snapshot: &RepositorySnapshot) -> u8 {
    let score = DOCUMENTATION_BASE
        + points(snapshot.has_readme, README_POINTS)
        + points(snapshot.has_documentation, ADDITIONAL_DOCS_POINTS)
        + points(
            snapshot.description.chars().count() > MEANINGFUL_DESCRIPTION_CHARS,
            DESCRIPTION_POINTS,
        )
        + points(snapshot.has_license, LICENSE_DOC_POINTS);
    clamp(score)
}

fn is_config_like(name: &str) -> bool {
    name.contains("config")
        || name.ends_with(".yml")
        || (name.ends_with(".json") && name != "package.json")
}

/// Project structure: config files, source layout, manifests, `.gitignore`, language spread.
pub fn project_structure(snapshot: &RepositorySnapshot) -> u8 {
    let files = &snapshot.file_names;
    let score = PROJECT_STRUCTURE_BASE
        + points(files.iter().any(|f| is_config_like(f)), CONFIG_POINTS)
        + points(
            files.iter().any(|f| SOURCE_DIRS.contains(&f.as_str())),
            SOURCE_DIR_POINTS,
        )
        + points(
            files.iter().any(|f| PACKAGE_MANIFESTS.contains(&f.as_str())),
            PACKAGE_MANAGER_POINTS,
        )
        + points(snapshot.has_entry(".gitignore"), GITIGNORE_POINTS)
        + points(
            snapshot.language_byte_counts.len() > 2,
            MULTI_LANGUAGE_POINTS,
        );
    clamp(score)
}

/// Compute all three sub-scores.
pub fn calculate_metrics(snapshot: &RepositorySnapshot) -> Metrics {
    Metrics {
        code_quality: code_quality(snapshot),
        documentation: documentation(snapshot),
        project_structure: project_structure(snapshot),
    }
}

/// Weighted overall score, rounded half up.
///
/// Works in tenths so the rounding is exact: `(4cq + 3doc + 3ps + 5) / 10`.
pub fn overall_score(metrics: &Metrics) -> u8 {
    let tenths = CODE_QUALITY_WEIGHT * u32::from(metrics.code_quality)
        + DOCUMENTATION_WEIGHT * u32::from(metrics.documentation)
        + PROJECT_STRUCTURE_WEIGHT * u32::from(metrics.project_structure);
    clamp((tenths + 5) / 10)
}
