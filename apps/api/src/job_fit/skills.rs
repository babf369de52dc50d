//! Scores required or nice-to-have skills against the portfolio.

use serde::{Deserialize, Serialize};

use crate::job_fit::context::PortfolioContext;
use crate::job_fit::scoring_config::{SimilarityThresholds, SkillRule};
use crate::job_fit::similarity::{find_best_match, MatchQuality};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Profile,
    Projects,
    Missing,
}

/// Outcome for one requested skill. `weight` is the signed point contribution:
/// negative for a penalty, above `maxPoints` when bonuses stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: String,
    pub found: bool,
    pub source: SkillSource,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_term: Option<String>,
    pub match_quality: MatchQuality,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillEvaluation {
    pub total_score: f64,
    pub max_possible: f64,
    pub matches: Vec<SkillMatch>,
}

pub struct SkillEvaluator<'a> {
    context: &'a PortfolioContext,
    thresholds: &'a SimilarityThresholds,
    expert_project_threshold: usize,
}

impl<'a> SkillEvaluator<'a> {
    pub fn new(
        context: &'a PortfolioContext,
        thresholds: &'a SimilarityThresholds,
        expert_project_threshold: usize,
    ) -> Self {
        Self {
            context,
            thresholds,
            expert_project_threshold,
        }
    }

    /// Scores each target independently. Project bonuses are only considered
    /// when `check_project_usage` is set and the rule defines `inProjectsBonus`.
    pub fn evaluate(
        &self,
        targets: &[String],
        rule: &SkillRule,
        check_project_usage: bool,
    ) -> SkillEvaluation {
        let mut evaluation = SkillEvaluation::default();

        for skill in targets {
            let outcome = find_best_match(skill, &self.context.known_skills, self.thresholds);

            let (mut weight, mut source) = if outcome.found {
                (
                    rule.match_base * outcome.quality.multiplier(),
                    SkillSource::Profile,
                )
            } else {
                (penalty(rule.missing_penalty), SkillSource::Missing)
            };

            if let (true, Some(in_projects_bonus)) = (check_project_usage, rule.in_projects_bonus) {
                let project_count = self.project_usage(skill);
                if project_count > 0 {
                    weight += in_projects_bonus;
                    if outcome.found {
                        source = SkillSource::Projects;
                    }
                }
                if project_count >= self.expert_project_threshold {
                    weight += rule.expert_bonus.unwrap_or(0.0);
                }
            }

            evaluation.total_score += weight;
            evaluation.max_possible += rule.max_points;
            evaluation.matches.push(SkillMatch {
                skill: skill.clone(),
                found: outcome.found,
                source,
                weight,
                matched_term: outcome.matched_term,
                match_quality: outcome.quality,
            });
        }

        evaluation
    }

    /// Number of projects whose own technology set matches the skill.
    fn project_usage(&self, skill: &str) -> usize {
        self.context
            .projects
            .iter()
            .filter(|project| find_best_match(skill, &project.tech, self.thresholds).found)
            .count()
    }
}

/// Negated penalty; a zero penalty stays `0.0` rather than `-0.0`.
fn penalty(points: f64) -> f64 {
    if points == 0.0 {
        0.0
    } else {
        -points
    }
}
