//! Actionable recommendations derived from the snapshot, metrics and technologies.

use repograde_snapshot::{
    Effort, Metrics, Priority, Recommendation, RecommendationCategory, RepositorySnapshot,
    TechnologyRecord,
};

/// Maximum number of recommendations reported.
pub const MAX_RECOMMENDATIONS: usize = 12;

/// Sub-scores below this trigger the documentation and structure recommendations.
const METRIC_TARGET: u8 = 70;

struct RecommendationSignals<'a> {
    snapshot: &'a RepositorySnapshot,
    metrics: &'a Metrics,
    technologies: &'a [TechnologyRecord],
}

struct RecommendationRule {
    applies: fn(&RecommendationSignals<'_>) -> bool,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    category: RecommendationCategory,
    effort: Effort,
    impact: u32,
    steps: &'static [&'static str],
}

impl RecommendationRule {
    fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            category: self.category,
            estimated_effort: self.effort,
            score_impact: self.impact,
            action_steps: self.steps.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |s| !s.snapshot.has_tests,
        title: "Implement Comprehensive Testing Suite",
        description: "Add unit tests, integration tests, and achieve at least 70% code coverage",
        priority: Priority::Critical,
        category: RecommendationCategory::CodeQuality,
        effort: Effort::High,
        impact: 15,
        steps: &[
            "Choose a testing framework (Jest for JS, Pytest for Python)",
            "Write unit tests for core functions and components",
            "Add integration tests for critical user flows",
            "Set up code coverage reporting",
            "Aim for 70%+ coverage before considering complete",
        ],
    },
    RecommendationRule {
        applies: |s| !s.snapshot.has_ci,
        title: "Set Up CI/CD Pipeline",
        description: "Automate testing, linting, and deployment with GitHub Actions or similar",
        priority: Priority::Critical,
        category: RecommendationCategory::Deployment,
        effort: Effort::Medium,
        impact: 12,
        steps: &[
            "Create .github/workflows/ci.yml file",
            "Configure automated testing on pull requests",
            "Add linting and code quality checks",
            "Set up automated deployment to staging",
            "Add status badges to README",
        ],
    },
    RecommendationRule {
        applies: |s| !s.snapshot.has_readme,
        title: "Create Comprehensive README",
        description: "Write a professional README with setup instructions, features, and examples",
        priority: Priority::High,
        category: RecommendationCategory::Documentation,
        effort: Effort::Low,
        impact: 15,
        steps: &[
            "Add project title and description",
            "Include installation and setup instructions",
            "Document key features with examples",
            "Add screenshots or demo GIFs",
            "Include contribution guidelines and license",
        ],
    },
    // only reachable when a README exists
    RecommendationRule {
        applies: |s| s.snapshot.has_readme && s.metrics.documentation < METRIC_TARGET,
        title: "Enhance Documentation",
        description: "Add API documentation, architecture diagrams, and contribution guidelines",
        priority: Priority::High,
        category: RecommendationCategory::Documentation,
        effort: Effort::Medium,
        impact: 10,
        steps: &[
            "Create docs/ folder with detailed documentation",
            "Add API reference documentation",
            "Include architecture diagrams",
            "Write CONTRIBUTING.md for contributors",
            "Add code examples and tutorials",
        ],
    },
    RecommendationRule {
        applies: |s| s.metrics.project_structure < METRIC_TARGET,
        title: "Improve Project Structure",
        description: "Organize code with clear separation of concerns and standard conventions",
        priority: Priority::High,
        category: RecommendationCategory::Structure,
        effort: Effort::Medium,
        impact: 12,
        steps: &[
            "Create src/ directory for source code",
            "Separate tests into tests/ or __tests__/",
            "Add config/ for configuration files",
            "Create docs/ for documentation",
            "Follow framework-specific best practices",
        ],
    },
    RecommendationRule {
        applies: |s| s.snapshot.commit_count < 50,
        title: "Increase Development Activity",
        description: "Make regular, meaningful commits to show active development",
        priority: Priority::Medium,
        category: RecommendationCategory::Collaboration,
        effort: Effort::Low,
        impact: 5,
        steps: &[
            "Commit changes regularly (daily or weekly)",
            "Write clear, descriptive commit messages",
            "Follow conventional commit format",
            "Break large changes into smaller commits",
            "Show consistent development over time",
        ],
    },
    RecommendationRule {
        applies: |s| !s.snapshot.has_license,
        title: "Add Open Source License",
        description: "Choose and add an appropriate license (MIT, Apache 2.0, GPL)",
        priority: Priority::Medium,
        category: RecommendationCategory::Documentation,
        effort: Effort::Low,
        impact: 5,
        steps: &[
            "Choose appropriate license for your project",
            "Add LICENSE file to repository root",
            "Include license badge in README",
            "Update package.json or setup.py with license info",
        ],
    },
    RecommendationRule {
        applies: |s| s.snapshot.contributor_count == 1,
        title: "Encourage Community Contributions",
        description: "Make your project contribution-friendly to attract collaborators",
        priority: Priority::Medium,
        category: RecommendationCategory::Collaboration,
        effort: Effort::Low,
        impact: 7,
        steps: &[
            "Add CONTRIBUTING.md with contribution guidelines",
            "Create issue templates for bugs and features",
            "Label issues as \"good first issue\" for newcomers",
            "Respond promptly to issues and pull requests",
            "Add CODE_OF_CONDUCT.md",
        ],
    },
    RecommendationRule {
        applies: |s| s.snapshot.stars < 10,
        title: "Increase Project Visibility",
        description: "Promote your project to gain recognition and demonstrate impact",
        priority: Priority::Low,
        category: RecommendationCategory::Collaboration,
        effort: Effort::Medium,
        impact: 5,
        steps: &[
            "Share on Twitter, LinkedIn, and Reddit",
            "Write a blog post about your project",
            "Submit to awesome lists and directories",
            "Present at local meetups or conferences",
            "Create demo videos or tutorials",
        ],
    },
    RecommendationRule {
        applies: |s| {
            !s.technologies.is_empty() && !s.technologies.iter().any(|t| t.name == "Docker")
        },
        title: "Add Docker Support",
        description: "Containerize your application for consistent deployment",
        priority: Priority::Medium,
        category: RecommendationCategory::Deployment,
        effort: Effort::Medium,
        impact: 10,
        steps: &[
            "Create Dockerfile for your application",
            "Add docker-compose.yml for multi-service setup",
            "Document Docker usage in README",
            "Test container builds in CI pipeline",
            "Consider multi-stage builds for optimization",
        ],
    },
];

/// Evaluate the recommendation checklist in order, keeping at most [`MAX_RECOMMENDATIONS`].
pub fn generate_recommendations(
    snapshot: &RepositorySnapshot,
    metrics: &Metrics,
    technologies: &[TechnologyRecord],
) -> Vec<Recommendation> {
    let signals = RecommendationSignals {
        snapshot,
        metrics,
        technologies,
    };
    RULES
        .iter()
        .filter(|rule| (rule.applies)(&signals))
        .map(RecommendationRule::to_recommendation)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use repograde_snapshot::{Category, Confidence, Demand};

    fn tech(name: &str) -> TechnologyRecord {
        TechnologyRecord {
            name: name.to_string(),
            category: Category::Language,
            confidence: Confidence::Detected,
            market_demand: Demand::High,
            related_skills: vec![],
        }
    }

    fn metrics(documentation: u8, project_structure: u8) -> Metrics {
        Metrics {
            code_quality: 50,
            documentation,
            project_structure,
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn bare_repository_recommendations_in_order() {
        let snapshot = RepositorySnapshot::new("bare");
        let recs = generate_recommendations(&snapshot, &metrics(20, 30), &[]);
        assert_eq!(
            titles(&recs),
            vec![
                "Implement Comprehensive Testing Suite",
                "Set Up CI/CD Pipeline",
                "Create Comprehensive README",
                "Improve Project Structure",
                "Increase Development Activity",
                "Add Open Source License",
                "Encourage Community Contributions",
                "Increase Project Visibility",
            ]
        );
        assert_eq!(recs[0].priority, Priority::Critical);
        assert_eq!(recs[0].estimated_effort, Effort::High);
        assert_eq!(recs[1].category, RecommendationCategory::Deployment);
        assert_eq!(recs[1].score_impact, 12);
    }

    #[test]
    fn readme_present_with_weak_docs_suggests_enhancement() {
        let mut snapshot = RepositorySnapshot::new("docs");
        snapshot.has_readme = true;
        let recs = generate_recommendations(&snapshot, &metrics(65, 100), &[]);
        assert!(titles(&recs).contains(&"Enhance Documentation"));
        assert!(!titles(&recs).contains(&"Create Comprehensive README"));

        let recs = generate_recommendations(&snapshot, &metrics(70, 100), &[]);
        assert!(!titles(&recs).contains(&"Enhance Documentation"));
    }

    #[test]
    fn missing_readme_never_also_suggests_enhancement() {
        let snapshot = RepositorySnapshot::new("docs");
        let recs = generate_recommendations(&snapshot, &metrics(20, 100), &[]);
        assert!(titles(&recs).contains(&"Create Comprehensive README"));
        assert!(!titles(&recs).contains(&"Enhance Documentation"));
    }

    #[test]
    fn structure_threshold_is_seventy() {
        let snapshot = RepositorySnapshot::new("layout");
        let recs = generate_recommendations(&snapshot, &metrics(100, 69), &[]);
        assert!(titles(&recs).contains(&"Improve Project Structure"));
        let recs = generate_recommendations(&snapshot, &metrics(100, 70), &[]);
        assert!(!titles(&recs).contains(&"Improve Project Structure"));
    }

    #[test]
    fn contributions_only_for_single_contributor() {
        let mut snapshot = RepositorySnapshot::new("solo");
        snapshot.contributor_count = 0;
        let recs = generate_recommendations(&snapshot, &metrics(100, 100), &[]);
        assert!(!titles(&recs).contains(&"Encourage Community Contributions"));
        snapshot.contributor_count = 1;
        let recs = generate_recommendations(&snapshot, &metrics(100, 100), &[]);
        assert!(titles(&recs).contains(&"Encourage Community Contributions"));
    }

    #[test]
    fn docker_recommendation_needs_some_technology() {
        let snapshot = RepositorySnapshot::new("tech");
        let recs = generate_recommendations(&snapshot, &metrics(100, 100), &[]);
        assert!(!titles(&recs).contains(&"Add Docker Support"));

        let recs = generate_recommendations(&snapshot, &metrics(100, 100), &[tech("Go")]);
        let last = recs.last().unwrap();
        assert_eq!(last.title, "Add Docker Support");
        assert_eq!(last.priority, Priority::Medium);
        assert_eq!(last.score_impact, 10);

        let recs = generate_recommendations(
            &snapshot,
            &metrics(100, 100),
            &[tech("Go"), tech("Docker")],
        );
        assert!(!titles(&recs).contains(&"Add Docker Support"));
    }

    #[test]
    fn healthy_repository_gets_nothing() {
        let mut snapshot = RepositorySnapshot::new("healthy");
        snapshot.has_tests = true;
        snapshot.has_ci = true;
        snapshot.has_readme = true;
        snapshot.has_license = true;
        snapshot.commit_count = 50;
        snapshot.contributor_count = 3;
        snapshot.stars = 10;
        let recs = generate_recommendations(&snapshot, &metrics(90, 90), &[tech("Docker")]);
        assert!(recs.is_empty());
    }
}
