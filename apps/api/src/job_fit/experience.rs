use crate::job_fit::scoring_config::ExperienceRules;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceEvaluation {
    pub score: f64,
    /// Denominator contribution; fixed regardless of outcome.
    pub max_score: f64,
}

/// Linear reward capped at `maxScore`, minus a penalty per missing year.
/// Exceeding the requirement earns nothing beyond the cap.
pub fn evaluate_experience(
    required_years: f64,
    actual_years: f64,
    rules: &ExperienceRules,
) -> ExperienceEvaluation {
    let mut score = (actual_years * rules.point_per_year).min(rules.max_score);

    if actual_years < required_years {
        score -= (required_years - actual_years) * rules.penalty_per_missing_year;
    }

    ExperienceEvaluation {
        score,
        max_score: rules.max_score,
    }
}
