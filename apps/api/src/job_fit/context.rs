//! Flattens profile, projects and skill categories into the lookup shape the
//! evaluators read.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::portfolio::{PortfolioData, Profile};

/// Assumed experience when neither the stats nor the bio state a figure.
pub const DEFAULT_YEARS_OF_EXPERIENCE: u32 = 5;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static BIO_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*years").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContext {
    pub title: String,
    /// Lower-cased.
    pub description: String,
    /// Lower-cased technology tokens.
    pub tech: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioContext {
    /// Lower-cased skill names plus every project technology.
    pub known_skills: BTreeSet<String>,
    pub projects: Vec<ProjectContext>,
    pub user_years: u32,
}

pub fn build_portfolio_context(data: &PortfolioData) -> PortfolioContext {
    let mut known_skills: BTreeSet<String> = data
        .skills
        .iter()
        .flat_map(|category| category.skills.iter())
        .filter_map(|item| normalize_token(item.name()))
        .collect();

    let projects: Vec<ProjectContext> = data
        .projects
        .iter()
        .map(|project| ProjectContext {
            title: project.title.clone(),
            description: project.description.to_lowercase(),
            tech: project
                .technologies
                .iter()
                .filter_map(|t| normalize_token(t))
                .collect(),
        })
        .collect();

    // A technology used in a project counts as known even if never listed as a skill.
    for project in &projects {
        known_skills.extend(project.tech.iter().cloned());
    }

    PortfolioContext {
        known_skills,
        projects,
        user_years: estimate_years_of_experience(&data.profile),
    }
}

fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_lowercase();
    (!token.is_empty()).then_some(token)
}

/// First integer of the first experience/years stat (0 when that stat has no
/// digits). Without such a stat, `<N>+ years` in the short bio, else
/// [`DEFAULT_YEARS_OF_EXPERIENCE`].
pub fn estimate_years_of_experience(profile: &Profile) -> u32 {
    let stat = profile.stats.iter().find(|stat| {
        let label = stat.label.to_lowercase();
        label.contains("experience") || label.contains("years")
    });

    if let Some(stat) = stat {
        return FIRST_INTEGER
            .find(&stat.value)
            .map(|m| saturating_years(m.as_str()))
            .unwrap_or(0);
    }

    BIO_YEARS
        .captures(&profile.short_bio)
        .and_then(|caps| caps.get(1))
        .map(|m| saturating_years(m.as_str()))
        .unwrap_or(DEFAULT_YEARS_OF_EXPERIENCE)
}

/// `digits` is all ASCII digits, so the only parse failure is overflow.
fn saturating_years(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
