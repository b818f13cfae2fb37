//! Strengths, weaknesses, market alignment and career level.

use repograde_snapshot::{
    CareerLevel, Demand, Insights, Priority, RepositorySnapshot, SkillGap, TechnologyRecord,
};

/// Maximum number of strengths and of weaknesses reported.
pub const MAX_INSIGHTS: usize = 5;

const EXCELLENT_ALIGNMENT: &str =
    "Excellent - Your tech stack strongly aligns with current market demands";
const GOOD_ALIGNMENT: &str =
    "Good - Your skills match many employer requirements, with room for growth";
const DEVELOPING_ALIGNMENT: &str =
    "Developing - Consider adding more in-demand technologies to your portfolio";

fn high_demand(technologies: &[TechnologyRecord]) -> Vec<&str> {
    technologies
        .iter()
        .filter(|t| t.market_demand == Demand::High)
        .map(|t| t.name.as_str())
        .collect()
}

fn strengths(snapshot: &RepositorySnapshot, technologies: &[TechnologyRecord]) -> Vec<String> {
    let mut strengths = Vec::new();

    if snapshot.has_tests {
        strengths.push("Strong testing practices demonstrate code quality focus".to_string());
    }
    if snapshot.has_ci {
        strengths.push("CI/CD implementation shows DevOps awareness".to_string());
    }
    if snapshot.commit_count > 100 {
        strengths.push("Consistent development activity indicates dedication".to_string());
    }
    if snapshot.contributor_count > 5 {
        strengths.push("Collaborative project shows teamwork skills".to_string());
    }
    if snapshot.has_documentation {
        strengths.push("Comprehensive documentation demonstrates professionalism".to_string());
    }
    if technologies.len() > 5 {
        strengths.push("Diverse technology stack shows versatility".to_string());
    }

    let in_demand = high_demand(technologies);
    if in_demand.len() > 3 {
        strengths.push(format!(
            "Strong alignment with in-demand technologies ({})",
            in_demand.join(", ")
        ));
    }

    strengths.truncate(MAX_INSIGHTS);
    strengths
}

fn weaknesses(
    snapshot: &RepositorySnapshot,
    technologies: &[TechnologyRecord],
    skill_gaps: &[SkillGap],
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if !snapshot.has_tests {
        weaknesses.push("Lack of testing may raise concerns about code reliability".to_string());
    }
    if !snapshot.has_ci {
        weaknesses.push("Missing CI/CD suggests limited DevOps experience".to_string());
    }
    if snapshot.commit_count < 20 {
        weaknesses.push("Low commit count may indicate limited project scope".to_string());
    }
    if !snapshot.has_documentation {
        weaknesses.push("Insufficient documentation could hinder collaboration".to_string());
    }
    if technologies.len() < 3 {
        weaknesses.push("Limited technology diversity may restrict job opportunities".to_string());
    }

    let critical: Vec<&str> = skill_gaps
        .iter()
        .filter(|g| g.priority == Priority::Critical)
        .map(|g| g.skill.as_str())
        .collect();
    if !critical.is_empty() {
        weaknesses.push(format!("Critical skill gaps: {}", critical.join(", ")));
    }

    weaknesses.truncate(MAX_INSIGHTS);
    weaknesses
}

/// Pick the alignment narrative from the number of high-demand technologies.
pub fn market_alignment(technologies: &[TechnologyRecord]) -> &'static str {
    match high_demand(technologies).len() {
        n if n >= 4 => EXCELLENT_ALIGNMENT,
        n if n >= 2 => GOOD_ALIGNMENT,
        _ => DEVELOPING_ALIGNMENT,
    }
}

/// Single-pass decision: senior, then mid, else junior.
pub fn career_level(
    snapshot: &RepositorySnapshot,
    score: u8,
    technologies: &[TechnologyRecord],
) -> CareerLevel {
    let count = technologies.len();
    if score >= 80 && snapshot.has_tests && snapshot.has_ci && count >= 5 {
        CareerLevel::Senior
    } else if score >= 65 && (snapshot.has_tests || snapshot.has_ci) && count >= 3 {
        CareerLevel::Mid
    } else {
        CareerLevel::Junior
    }
}

/// Build the narrative summary for one analysis.
pub fn summarize(
    snapshot: &RepositorySnapshot,
    score: u8,
    technologies: &[TechnologyRecord],
    skill_gaps: &[SkillGap],
) -> Insights {
    Insights {
        strengths: strengths(snapshot, technologies),
        weaknesses: weaknesses(snapshot, technologies, skill_gaps),
        market_alignment: market_alignment(technologies).to_string(),
        career_level: career_level(snapshot, score, technologies),
    }
}
