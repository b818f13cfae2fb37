//! Human-readable rendering of an analysis.

use repograde_engine::AnalysisResult;
use std::io::{self, Write};

/// Write a short plain-text report of an analysis.
pub fn write_summary(out: &mut impl Write, result: &AnalysisResult) -> io::Result<()> {
    let metrics = &result.metrics;
    writeln!(out, "{} scored {}/100", result.repo_info.name, result.score)?;
    writeln!(out, "  code quality       {:>3}", metrics.code_quality)?;
    writeln!(out, "  documentation      {:>3}", metrics.documentation)?;
    writeln!(out, "  project structure  {:>3}", metrics.project_structure)?;
    writeln!(out)?;
    writeln!(out, "Career level: {}", result.insights.career_level.as_str())?;
    writeln!(out, "Market alignment: {}", result.insights.market_alignment)?;

    if !result.technologies.is_empty() {
        writeln!(out)?;
        writeln!(out, "Technologies ({}):", result.technologies.len())?;
        for tech in &result.technologies {
            writeln!(
                out,
                "  {} ({}, {} demand)",
                tech.name, tech.category, tech.market_demand
            )?;
        }
    }

    if !result.skill_gaps.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skill gaps:")?;
        for gap in &result.skill_gaps {
            writeln!(out, "  [{}] {}: {}", gap.priority, gap.skill, gap.reason)?;
        }
    }

    if !result.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recommendations:")?;
        for rec in &result.recommendations {
            writeln!(
                out,
                "  [{}] {} ({}, +{} points, {} effort)",
                rec.priority,
                rec.title,
                rec.category,
                rec.score_impact,
                rec.estimated_effort.as_str()
            )?;
        }
    }

    if !result.insights.strengths.is_empty() {
        writeln!(out)?;
        writeln!(out, "Strengths:")?;
        for strength in &result.insights.strengths {
            writeln!(out, "  + {strength}")?;
        }
    }

    if !result.insights.weaknesses.is_empty() {
        writeln!(out)?;
        writeln!(out, "Weaknesses:")?;
        for weakness in &result.insights.weaknesses {
            writeln!(out, "  - {weakness}")?;
        }
    }

    Ok(())
}
