//! Runs every evaluator and folds the partial scores into the final report.
//! Identical inputs give identical output.

use serde::{Deserialize, Serialize};

use crate::job_fit::conclusion::select_conclusion;
use crate::job_fit::context::PortfolioContext;
use crate::job_fit::experience::evaluate_experience;
use crate::job_fit::jd_parser::StructuredJobDescription;
use crate::job_fit::responsibilities::{evaluate_responsibilities, ProjectRelevance};
use crate::job_fit::scoring_config::ScoringConfig;
use crate::job_fit::skills::{SkillEvaluator, SkillMatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub required: f64,
    pub actual: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitAnalysisResult {
    /// Weighted fit, 0–100.
    pub score: u32,
    /// Share of required skills found, 0–100, independent of weighting.
    pub required_skills_coverage: u32,
    pub nice_to_have_skills_coverage: u32,
    pub required_matches: Vec<SkillMatch>,
    pub nice_to_have_matches: Vec<SkillMatch>,
    pub experience_match: ExperienceMatch,
    pub project_relevance: Vec<ProjectRelevance>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub conclusion: String,
}

pub fn score_fit(
    jd: &StructuredJobDescription,
    context: &PortfolioContext,
    config: &ScoringConfig,
) -> FitAnalysisResult {
    let skill_evaluator = SkillEvaluator::new(
        context,
        &config.similarity_thresholds,
        config.skills.expert_project_threshold,
    );

    let required = skill_evaluator.evaluate(&jd.required_skills, &config.skills.required, true);
    let nice_to_have =
        skill_evaluator.evaluate(&jd.nice_to_have_skills, &config.skills.nice_to_have, false);

    let actual_years = f64::from(context.user_years);
    let experience = evaluate_experience(jd.years_experience, actual_years, &config.experience);

    let responsibilities = evaluate_responsibilities(
        &jd.key_responsibilities,
        &context.projects,
        &config.responsibilities,
    );

    let numerator = required.total_score
        + nice_to_have.total_score
        + experience.score
        + responsibilities.total_score;
    let denominator = required.max_possible
        + nice_to_have.max_possible
        + experience.max_score
        + responsibilities.max_possible;

    let score = percent(numerator, denominator.max(1.0));
    let required_skills_coverage = coverage(&required.matches);
    let nice_to_have_skills_coverage = coverage(&nice_to_have.matches);

    let strengths = strengths(&required.matches, config.skills.required.expert_weight());
    let gaps = required
        .matches
        .iter()
        .filter(|m| !m.found)
        .map(|m| m.skill.clone())
        .collect();
    let conclusion =
        select_conclusion(&config.conclusions, score, required_skills_coverage).to_string();

    FitAnalysisResult {
        score,
        required_skills_coverage,
        nice_to_have_skills_coverage,
        required_matches: required.matches,
        nice_to_have_matches: nice_to_have.matches,
        experience_match: ExperienceMatch {
            required: jd.years_experience,
            actual: actual_years,
            score: experience.score,
        },
        project_relevance: responsibilities.matches,
        strengths,
        gaps,
        conclusion,
    }
}

/// `round(part / whole * 100)` clamped to `[0, 100]`.
fn percent(part: f64, whole: f64) -> u32 {
    let raw = (part / whole * 100.0).round();
    raw.clamp(0.0, 100.0) as u32
}

/// Percentage of skills found; zero for an empty list.
pub fn coverage(matches: &[SkillMatch]) -> u32 {
    if matches.is_empty() {
        return 0;
    }
    let found = matches.iter().filter(|m| m.found).count();
    percent(found as f64, matches.len() as f64)
}

/// Every found skill, tagged `(Expert)` when its weight reaches `expert_weight`.
pub fn strengths(matches: &[SkillMatch], expert_weight: f64) -> Vec<String> {
    matches
        .iter()
        .filter(|m| m.found)
        .map(|m| {
            if m.weight >= expert_weight {
                format!("{} (Expert)", m.skill)
            } else {
                m.skill.clone()
            }
        })
        .collect()
}
