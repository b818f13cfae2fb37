//! Technology inventory from languages and top-level file names.
//!
//! Detection runs over a single blob: every top-level name joined with
//! spaces and lower-cased. Matching is plain substring search, so a file
//! called `docker-notes.txt` is enough to report Docker.

use crate::table::TechnologyTable;
use repograde_snapshot::{Category, Confidence, Demand, RepositorySnapshot, TechnologyRecord};

/// Maximum number of technologies reported.
pub const MAX_TECHNOLOGIES: usize = 15;

const JS_FRAMEWORKS: &[&str] = &["React", "Next.js", "Vue", "Angular", "Express", "NestJS"];
const PYTHON_FRAMEWORKS: &[&str] = &["Django", "FastAPI", "Flask"];
const DATABASES: &[&str] = &["PostgreSQL", "MongoDB", "MySQL", "Redis"];

/// A technology reported from a fixed signal rather than a table lookup.
struct Synthetic {
    name: &'static str,
    category: Category,
    confidence: Confidence,
    demand: Demand,
    related: &'static [&'static str],
}

const NODE_JS: Synthetic = Synthetic {
    name: "Node.js",
    category: Category::Framework,
    confidence: Confidence::Inferred,
    demand: Demand::High,
    related: &["JavaScript", "Express", "npm"],
};

const DOCKER: Synthetic = Synthetic {
    name: "Docker",
    category: Category::Devops,
    confidence: Confidence::Detected,
    demand: Demand::High,
    related: &["Containerization", "Kubernetes"],
};

const KUBERNETES: Synthetic = Synthetic {
    name: "Kubernetes",
    category: Category::Devops,
    confidence: Confidence::Detected,
    demand: Demand::High,
    related: &["Docker", "Orchestration", "Cloud"],
};

const GITHUB_ACTIONS: Synthetic = Synthetic {
    name: "GitHub Actions",
    category: Category::Devops,
    confidence: Confidence::Detected,
    demand: Demand::High,
    related: &["CI/CD", "Automation", "YAML"],
};

const JEST: Synthetic = Synthetic {
    name: "Jest",
    category: Category::Tool,
    confidence: Confidence::Inferred,
    demand: Demand::High,
    related: &["Testing", "JavaScript", "TDD"],
};

const PYTEST: Synthetic = Synthetic {
    name: "Pytest",
    category: Category::Tool,
    confidence: Confidence::Inferred,
    demand: Demand::High,
    related: &["Testing", "Python", "TDD"],
};

/// Ordered, name-unique collection under construction.
struct Inventory<'a> {
    table: &'a TechnologyTable,
    found: Vec<TechnologyRecord>,
}

impl<'a> Inventory<'a> {
    fn new(table: &'a TechnologyTable) -> Self {
        Self {
            table,
            found: Vec::new(),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.found.iter().any(|t| t.name == name)
    }

    fn push(&mut self, record: TechnologyRecord) {
        if self.contains(&record.name) {
            return;
        }
        tracing::trace!(
            target: "repograde::engine",
            name = %record.name,
            confidence = ?record.confidence,
            "Technology found"
        );
        self.found.push(record);
    }

    /// Add `name` from the table; misses are skipped.
    fn push_known(&mut self, name: &str, confidence: Confidence, category: Option<Category>) {
        if self.contains(name) {
            return;
        }
        let Some(info) = self.table.get(name) else {
            return;
        };
        self.push(TechnologyRecord {
            name: name.to_string(),
            category: category.unwrap_or(info.category),
            confidence,
            market_demand: info.demand,
            related_skills: info.related.clone(),
        });
    }

    fn push_synthetic(&mut self, tech: &Synthetic) {
        self.push(TechnologyRecord {
            name: tech.name.to_string(),
            category: tech.category,
            confidence: tech.confidence,
            market_demand: tech.demand,
            related_skills: tech.related.iter().map(|s| (*s).to_string()).collect(),
        });
    }

    /// Infer each candidate whose lower-cased name occurs in `blob`.
    fn infer_candidates(&mut self, blob: &str, candidates: &[&str]) {
        for name in candidates {
            if blob.contains(&name.to_lowercase()) {
                self.push_known(name, Confidence::Inferred, None);
            }
        }
    }

    fn finish(mut self) -> Vec<TechnologyRecord> {
        self.found.truncate(MAX_TECHNOLOGIES);
        self.found
    }
}

/// All top-level names joined with spaces, lower-cased.
pub fn file_blob(snapshot: &RepositorySnapshot) -> String {
    snapshot.file_names.join(" ").to_lowercase()
}

/// Build the technology inventory in discovery order, capped at [`MAX_TECHNOLOGIES`].
pub fn extract_technologies(
    snapshot: &RepositorySnapshot,
    table: &TechnologyTable,
) -> Vec<TechnologyRecord> {
    let blob = file_blob(snapshot);
    let mut inventory = Inventory::new(table);

    if let Some(language) = snapshot.primary_language.as_deref() {
        inventory.push_known(language, Confidence::Detected, None);
    }

    for language in snapshot.language_byte_counts.keys() {
        inventory.push_known(language, Confidence::Detected, None);
    }

    if blob.contains("package.json") {
        inventory.infer_candidates(&blob, JS_FRAMEWORKS);
        inventory.push_synthetic(&NODE_JS);
    }

    if blob.contains("requirements.txt") || blob.contains("pipfile") {
        inventory.infer_candidates(&blob, PYTHON_FRAMEWORKS);
    }

    if blob.contains("docker") {
        inventory.push_synthetic(&DOCKER);
    }

    if blob.contains("kubernetes") || blob.contains("k8s") {
        inventory.push_synthetic(&KUBERNETES);
    }

    if snapshot.has_ci && blob.contains(".github") {
        inventory.push_synthetic(&GITHUB_ACTIONS);
    }

    if snapshot.has_tests {
        if blob.contains("jest") || blob.contains("package.json") {
            inventory.push_synthetic(&JEST);
        }
        if blob.contains("pytest") || blob.contains("requirements.txt") {
            inventory.push_synthetic(&PYTEST);
        }
    }

    for name in DATABASES {
        if blob.contains(&name.to_lowercase()) {
            inventory.push_known(name, Confidence::Inferred, Some(Category::Database));
        }
    }

    inventory.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_files(files: &[&str]) -> RepositorySnapshot {
        let mut snapshot = RepositorySnapshot::new("demo");
        snapshot.file_names = files.iter().map(|f| (*f).to_string()).collect();
        snapshot
    }

    fn names(techs: &[TechnologyRecord]) -> Vec<&str> {
        techs.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn empty_snapshot_yields_nothing() {
        let techs = extract_technologies(&RepositorySnapshot::new("x"), &TechnologyTable::builtin());
        assert!(techs.is_empty());
    }

    #[test]
    fn primary_language_is_detected_first() {
        let mut snapshot = RepositorySnapshot::new("demo");
        snapshot.primary_language = Some("Rust".into());
        snapshot.language_byte_counts.insert("Shell".into(), 10);
        snapshot.language_byte_counts.insert("Rust".into(), 900);

        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Rust", "Shell"]);
        assert!(techs.iter().all(|t| t.confidence == Confidence::Detected));
        assert_eq!(techs[0].category, Category::Language);
    }

    #[test]
    fn unknown_languages_are_skipped() {
        let mut snapshot = RepositorySnapshot::new("demo");
        snapshot.primary_language = Some("Unknown".into());
        snapshot.language_byte_counts.insert("Makefile".into(), 10);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert!(techs.is_empty());
    }

    #[test]
    fn package_json_adds_node_and_named_frameworks() {
        let snapshot = snapshot_with_files(&["package.json", "vue.config.js", "src"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Vue", "Node.js"]);
        assert!(techs.iter().all(|t| t.confidence == Confidence::Inferred));
        assert_eq!(techs[1].category, Category::Framework);
        assert_eq!(techs[1].market_demand, Demand::High);
    }

    #[test]
    fn framework_names_need_package_json() {
        let snapshot = snapshot_with_files(&["react-app"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert!(techs.is_empty());
    }

    #[test]
    fn python_frameworks_need_manifest() {
        let snapshot = snapshot_with_files(&["requirements.txt", "django_app"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Django"]);

        let snapshot = snapshot_with_files(&["pipfile", "flask_api"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Flask"]);
    }

    #[test]
    fn docker_substring_is_enough() {
        let snapshot = snapshot_with_files(&["docker-notes.txt"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Docker"]);
        assert_eq!(techs[0].confidence, Confidence::Detected);
    }

    #[test]
    fn k8s_directory_adds_kubernetes() {
        let snapshot = snapshot_with_files(&["dockerfile", "k8s"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn github_actions_needs_ci_flag() {
        let mut snapshot = snapshot_with_files(&[".github"]);
        assert!(extract_technologies(&snapshot, &TechnologyTable::builtin()).is_empty());
        snapshot.has_ci = true;
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["GitHub Actions"]);
    }

    #[test]
    fn test_runners_need_tests_flag() {
        let mut snapshot = snapshot_with_files(&["package.json", "requirements.txt"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Node.js"]);

        snapshot.has_tests = true;
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["Node.js", "Jest", "Pytest"]);
    }

    #[test]
    fn databases_are_inferred_from_names() {
        let snapshot = snapshot_with_files(&["postgresql.conf", "redis"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(names(&techs), vec!["PostgreSQL", "Redis"]);
        assert!(techs
            .iter()
            .all(|t| t.category == Category::Database && t.confidence == Confidence::Inferred));
    }

    #[test]
    fn table_misses_skip_table_backed_steps() {
        let snapshot = snapshot_with_files(&["package.json", "react", "mongodb"]);
        let techs = extract_technologies(&snapshot, &TechnologyTable::empty());
        assert_eq!(names(&techs), vec!["Node.js"]);
    }

    #[test]
    fn first_occurrence_wins() {
        let mut snapshot = snapshot_with_files(&["package.json"]);
        snapshot.primary_language = Some("Node.js".into());
        let mut table = TechnologyTable::empty();
        table.insert_first(
            "Node.js",
            crate::table::TechnologyInfo {
                category: Category::Language,
                demand: Demand::Low,
                related: vec![],
            },
        );
        let techs = extract_technologies(&snapshot, &table);
        assert_eq!(techs.len(), 1);
        assert_eq!(techs[0].category, Category::Language);
        assert_eq!(techs[0].confidence, Confidence::Detected);
    }

    #[test]
    fn inventory_is_capped() {
        let mut snapshot = snapshot_with_files(&[
            "package.json",
            "react-next.js-vue-angular-express-nestjs",
            "docker",
            "k8s",
            "postgresql-mongodb-mysql-redis",
        ]);
        for lang in ["JavaScript", "TypeScript", "HTML", "CSS", "Shell", "Go"] {
            snapshot.language_byte_counts.insert(lang.into(), 1);
        }
        let techs = extract_technologies(&snapshot, &TechnologyTable::builtin());
        assert_eq!(techs.len(), MAX_TECHNOLOGIES);
        // six languages, six frameworks, Node.js, Docker, Kubernetes; databases cut
        assert_eq!(techs[14].name, "Kubernetes");
    }
}
