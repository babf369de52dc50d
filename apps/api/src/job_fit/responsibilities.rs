//! Responsibility relevance. Stated responsibilities that some project already
//! covers add points without adding to the denominator.

use serde::{Deserialize, Serialize};

use crate::job_fit::context::ProjectContext;
use crate::job_fit::scoring_config::ResponsibilityRules;

/// Generic words that say nothing about what a project actually did.
const STOP_WORDS: &[&str] = &[
    "manage",
    "develop",
    "create",
    "ensure",
    "system",
    "software",
    "working",
    "using",
    "application",
    "provide",
    "with",
    "the",
    "and",
    "for",
    "experience",
    "knowledge",
];

const MIN_KEYWORD_LEN: usize = 4;
const REASON_KEYWORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRelevance {
    pub project_name: String,
    pub responsibility: String,
    pub relevance_score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsibilityEvaluation {
    pub total_score: f64,
    /// Always zero; responsibilities never enlarge the denominator.
    pub max_possible: f64,
    pub matches: Vec<ProjectRelevance>,
}

/// Awards `keywordMatchScore` once per responsibility, crediting the first
/// project (in portfolio order) whose title or description mentions a keyword.
pub fn evaluate_responsibilities(
    responsibilities: &[String],
    projects: &[ProjectContext],
    rules: &ResponsibilityRules,
) -> ResponsibilityEvaluation {
    let mut evaluation = ResponsibilityEvaluation::default();

    for responsibility in responsibilities {
        let keywords = extract_keywords(responsibility);
        if keywords.is_empty() {
            continue;
        }

        let covering = projects.iter().find(|project| {
            let title = project.title.to_lowercase();
            keywords
                .iter()
                .any(|k| project.description.contains(k.as_str()) || title.contains(k.as_str()))
        });

        if let Some(project) = covering {
            evaluation.total_score += rules.keyword_match_score;
            evaluation.matches.push(ProjectRelevance {
                project_name: project.title.clone(),
                responsibility: responsibility.clone(),
                relevance_score: rules.keyword_match_score,
                reason: format!(
                    "Matches keywords: {}",
                    keywords
                        .iter()
                        .take(REASON_KEYWORDS)
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }
    }

    evaluation
}

/// Lower-cases, drops punctuation, splits on whitespace and keeps words longer
/// than three characters that are not stop words.
pub fn extract_keywords(responsibility: &str) -> Vec<String> {
    let cleaned: String = responsibility
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
