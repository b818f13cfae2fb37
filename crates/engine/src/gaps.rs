//! Skill gaps: what the repository does not demonstrate yet.
//!
//! The checklist order is also the truncation order. Gaps are never
//! re-ranked by priority or impact.

use repograde_snapshot::{Category, Priority, RepositorySnapshot, SkillGap, TechnologyRecord};

/// Maximum number of skill gaps reported.
pub const MAX_SKILL_GAPS: usize = 10;

/// Inputs a gap rule may look at.
struct GapSignals<'a> {
    snapshot: &'a RepositorySnapshot,
    technologies: &'a [TechnologyRecord],
}

impl GapSignals<'_> {
    fn has_tech(&self, name: &str) -> bool {
        self.technologies.iter().any(|t| t.name == name)
    }

    fn has_category(&self, category: Category) -> bool {
        self.technologies.iter().any(|t| t.category == category)
    }
}

struct GapRule {
    applies: fn(&GapSignals<'_>) -> bool,
    skill: &'static str,
    priority: Priority,
    reason: &'static str,
    resources: &'static [&'static str],
    impact: u32,
}

impl GapRule {
    fn to_gap(&self) -> SkillGap {
        SkillGap {
            skill: self.skill.to_string(),
            priority: self.priority,
            reason: self.reason.to_string(),
            learning_resources: self.resources.iter().map(|s| (*s).to_string()).collect(),
            estimated_impact: self.impact,
        }
    }
}

const RULES: &[GapRule] = &[
    GapRule {
        applies: |s| !s.snapshot.has_tests,
        skill: "Automated Testing",
        priority: Priority::Critical,
        reason: "Testing is essential for code quality and is expected by 95% of employers",
        resources: &[
            "Jest Documentation",
            "Testing Library",
            "Test-Driven Development",
        ],
        impact: 15,
    },
    GapRule {
        applies: |s| !s.snapshot.has_ci,
        skill: "CI/CD Pipeline",
        priority: Priority::Critical,
        reason: "Continuous Integration is a standard practice in modern development teams",
        resources: &["GitHub Actions", "GitLab CI", "Jenkins"],
        impact: 15,
    },
    GapRule {
        applies: |s| !s.has_tech("Docker"),
        skill: "Docker & Containerization",
        priority: Priority::High,
        reason: "Containerization is used by 80% of companies for deployment and development",
        resources: &[
            "Docker Documentation",
            "Docker Compose",
            "Container Best Practices",
        ],
        impact: 10,
    },
    GapRule {
        applies: |s| s.has_tech("JavaScript") && !s.has_tech("TypeScript"),
        skill: "TypeScript",
        priority: Priority::High,
        reason: "TypeScript is increasingly preferred over JavaScript for large-scale applications",
        resources: &["TypeScript Handbook", "Type Safety", "Advanced Types"],
        impact: 10,
    },
    GapRule {
        applies: |s| !s.snapshot.has_documentation,
        skill: "Technical Documentation",
        priority: Priority::High,
        reason: "Good documentation demonstrates communication skills and project maturity",
        resources: &[
            "Documentation Best Practices",
            "API Documentation",
            "README Templates",
        ],
        impact: 10,
    },
    GapRule {
        applies: |s| !s.has_category(Category::Database),
        skill: "Database Management",
        priority: Priority::Medium,
        reason: "Most applications require database knowledge (SQL or NoSQL)",
        resources: &["PostgreSQL", "MongoDB", "Database Design"],
        impact: 10,
    },
    GapRule {
        applies: |s| s.has_tech("Docker") && !s.has_tech("Kubernetes"),
        skill: "Kubernetes",
        priority: Priority::Medium,
        reason: "Container orchestration is valuable for scalable applications",
        resources: &["Kubernetes Basics", "K8s Deployment", "Helm"],
        impact: 5,
    },
    GapRule {
        applies: |s| !s.has_category(Category::Cloud),
        skill: "Cloud Platform (AWS/Azure/GCP)",
        priority: Priority::Medium,
        reason: "Cloud experience is required by most modern tech companies",
        resources: &["AWS Fundamentals", "Azure Basics", "Cloud Architecture"],
        impact: 10,
    },
    GapRule {
        applies: |s| s.snapshot.commit_count < 20,
        skill: "Git Best Practices",
        priority: Priority::Low,
        reason: "Consistent commit history shows professional development habits",
        resources: &["Git Workflow", "Commit Messages", "Branching Strategies"],
        impact: 5,
    },
    GapRule {
        applies: |s| !s.snapshot.has_license,
        skill: "Open Source Licensing",
        priority: Priority::Low,
        reason: "Understanding licenses is important for professional open source work",
        resources: &["MIT License", "Apache 2.0", "License Selection"],
        impact: 3,
    },
];

/// Evaluate the gap checklist in order, keeping at most [`MAX_SKILL_GAPS`].
pub fn identify_skill_gaps(
    snapshot: &RepositorySnapshot,
    technologies: &[TechnologyRecord],
) -> Vec<SkillGap> {
    let signals = GapSignals {
        snapshot,
        technologies,
    };
    RULES
        .iter()
        .filter(|rule| (rule.applies)(&signals))
        .map(GapRule::to_gap)
        .take(MAX_SKILL_GAPS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use repograde_snapshot::{Confidence, Demand};

    fn tech(name: &str, category: Category) -> TechnologyRecord {
        TechnologyRecord {
            name: name.to_string(),
            category,
            confidence: Confidence::Detected,
            market_demand: Demand::High,
            related_skills: vec![],
        }
    }

    fn skills(gaps: &[SkillGap]) -> Vec<&str> {
        gaps.iter().map(|g| g.skill.as_str()).collect()
    }

    #[test]
    fn bare_repository_hits_every_unconditional_gap() {
        let gaps = identify_skill_gaps(&RepositorySnapshot::new("bare"), &[]);
        assert_eq!(
            skills(&gaps),
            vec![
                "Automated Testing",
                "CI/CD Pipeline",
                "Docker & Containerization",
                "Technical Documentation",
                "Database Management",
                "Cloud Platform (AWS/Azure/GCP)",
                "Git Best Practices",
                "Open Source Licensing",
            ]
        );
        assert_eq!(gaps[0].priority, Priority::Critical);
        assert_eq!(gaps[0].estimated_impact, 15);
        assert_eq!(gaps[7].estimated_impact, 3);
    }

    #[test]
    fn typescript_gap_only_for_plain_javascript() {
        let snapshot = RepositorySnapshot::new("js");
        let gaps = identify_skill_gaps(&snapshot, &[tech("JavaScript", Category::Language)]);
        let ts = gaps.iter().find(|g| g.skill == "TypeScript").unwrap();
        assert_eq!(ts.priority, Priority::High);

        let gaps = identify_skill_gaps(
            &snapshot,
            &[
                tech("JavaScript", Category::Language),
                tech("TypeScript", Category::Language),
            ],
        );
        assert!(!skills(&gaps).contains(&"TypeScript"));
    }

    #[test]
    fn kubernetes_gap_follows_docker() {
        let snapshot = RepositorySnapshot::new("ops");
        let gaps = identify_skill_gaps(&snapshot, &[tech("Docker", Category::Devops)]);
        assert!(skills(&gaps).contains(&"Kubernetes"));
        assert!(!skills(&gaps).contains(&"Docker & Containerization"));

        let gaps = identify_skill_gaps(
            &snapshot,
            &[
                tech("Docker", Category::Devops),
                tech("Kubernetes", Category::Devops),
            ],
        );
        assert!(!skills(&gaps).contains(&"Kubernetes"));
    }

    #[test]
    fn category_checks_use_category_not_name() {
        let snapshot = RepositorySnapshot::new("data");
        let gaps = identify_skill_gaps(
            &snapshot,
            &[
                tech("CockroachDB", Category::Database),
                tech("Fly.io", Category::Cloud),
            ],
        );
        assert!(!skills(&gaps).contains(&"Database Management"));
        assert!(!skills(&gaps).contains(&"Cloud Platform (AWS/Azure/GCP)"));
    }

    #[test]
    fn checklist_order_is_preserved() {
        // the Docker and Kubernetes gaps exclude each other, so nine is the most that can fire
        let snapshot = RepositorySnapshot::new("everything-missing");
        let techs = [tech("JavaScript", Category::Language)];
        let gaps = identify_skill_gaps(&snapshot, &techs);
        assert_eq!(gaps.len(), 9);
        assert_eq!(gaps[3].skill, "TypeScript");
        assert_eq!(gaps.last().unwrap().skill, "Open Source Licensing");
    }

    #[test]
    fn well_rounded_repository_has_no_gaps() {
        let mut snapshot = RepositorySnapshot::new("complete");
        snapshot.has_tests = true;
        snapshot.has_ci = true;
        snapshot.has_documentation = true;
        snapshot.has_license = true;
        snapshot.commit_count = 20;
        let techs = [
            tech("Docker", Category::Devops),
            tech("Kubernetes", Category::Devops),
            tech("Redis", Category::Database),
            tech("AWS", Category::Cloud),
        ];
        assert!(identify_skill_gaps(&snapshot, &techs).is_empty());
    }
}
