//! Tunable scoring rules. Every constant the evaluators use comes from here.

use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    #[serde(default)]
    pub similarity_thresholds: SimilarityThresholds,
    pub skills: SkillRules,
    pub experience: ExperienceRules,
    pub responsibilities: ResponsibilityRules,
    pub conclusions: ConclusionTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityThresholds {
    /// Scores strictly above this are strong matches.
    pub strong: f64,
    /// Scores at or above this are moderate matches.
    pub moderate: f64,
}

impl Default for SimilarityThresholds {
    fn default() -> Self {
        Self {
            strong: 0.8,
            moderate: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRules {
    pub required: SkillRule,
    pub nice_to_have: SkillRule,
    /// Minimum number of projects a skill must appear in to earn `expertBonus`.
    pub expert_project_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRule {
    /// Points awarded for a strong match; moderate matches earn 70%.
    pub match_base: f64,
    /// Points deducted when the skill is not found.
    pub missing_penalty: f64,
    /// Fixed contribution to the denominator, whatever the outcome.
    pub max_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_projects_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert_bonus: Option<f64>,
}

impl SkillRule {
    /// Weight at which a found skill is reported as an expert strength:
    /// a full base match plus the in-project bonus.
    pub fn expert_weight(&self) -> f64 {
        self.match_base + self.in_projects_bonus.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRules {
    pub max_score: f64,
    pub point_per_year: f64,
    pub penalty_per_missing_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibilityRules {
    /// Awarded once per responsibility that some project covers.
    pub keyword_match_score: f64,
}

/// Ordered rules; the first one that applies supplies the conclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConclusionTable {
    #[serde(default)]
    pub overrides: Vec<ConclusionOverride>,
    #[serde(default)]
    pub tiers: Vec<ScoreTier>,
    pub default_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConclusionMetric {
    ReqCoverage,
    Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConclusionOverride {
    pub metric: ConclusionMetric,
    pub threshold: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTier {
    pub threshold: u32,
    pub message: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_thresholds: SimilarityThresholds::default(),
            skills: SkillRules {
                required: SkillRule {
                    match_base: 10.0,
                    missing_penalty: 5.0,
                    max_points: 10.0,
                    in_projects_bonus: Some(5.0),
                    expert_bonus: Some(5.0),
                },
                nice_to_have: SkillRule {
                    match_base: 5.0,
                    missing_penalty: 0.0,
                    max_points: 5.0,
                    in_projects_bonus: None,
                    expert_bonus: None,
                },
                expert_project_threshold: 3,
            },
            experience: ExperienceRules {
                max_score: 15.0,
                point_per_year: 1.0,
                penalty_per_missing_year: 2.0,
            },
            responsibilities: ResponsibilityRules {
                keyword_match_score: 5.0,
            },
            conclusions: ConclusionTable {
                overrides: vec![
                    ConclusionOverride {
                        metric: ConclusionMetric::Score,
                        threshold: 95,
                        message: "Exceptional fit. The candidate's profile strongly aligns with the core requirements.".to_string(),
                    },
                    ConclusionOverride {
                        metric: ConclusionMetric::ReqCoverage,
                        threshold: 85,
                        message: "High Potential Match. Candidate possesses the majority of required technical skills, significantly offsetting other gaps.".to_string(),
                    },
                    ConclusionOverride {
                        metric: ConclusionMetric::Score,
                        threshold: 85,
                        message: "Strong technical fit with identifiable and learnable gaps.".to_string(),
                    },
                    ConclusionOverride {
                        metric: ConclusionMetric::ReqCoverage,
                        threshold: 70,
                        message: "Qualified Match. Good alignment with core technical stack. Gaps may be seniority-related or domain-specific.".to_string(),
                    },
                ],
                tiers: vec![
                    ScoreTier {
                        threshold: 65,
                        message: "Moderate fit. Some foundational skills are present, but specific gaps exist.".to_string(),
                    },
                    ScoreTier {
                        threshold: 40,
                        message: "Partial Match. Candidate shares significant stack overlap but may require upskilling in key areas.".to_string(),
                    },
                ],
                default_message: "Low match probability based on current portfolio data.".to_string(),
            },
        }
    }
}

impl ScoringConfig {
    /// Rejects configurations the evaluators cannot score meaningfully.
    pub fn validate(&self) -> Result<()> {
        let t = &self.similarity_thresholds;
        ensure!(
            (0.0..=1.0).contains(&t.strong) && (0.0..=1.0).contains(&t.moderate),
            "similarity thresholds must lie in [0, 1] (strong={}, moderate={})",
            t.strong,
            t.moderate
        );
        ensure!(
            t.moderate <= t.strong,
            "moderate similarity threshold {} exceeds strong threshold {}",
            t.moderate,
            t.strong
        );

        validate_rule("skills.required", &self.skills.required)?;
        validate_rule("skills.niceToHave", &self.skills.nice_to_have)?;
        ensure!(
            self.skills.expert_project_threshold >= 1,
            "skills.expertProjectThreshold must be at least 1"
        );

        let e = &self.experience;
        for (name, value) in [
            ("experience.maxScore", e.max_score),
            ("experience.pointPerYear", e.point_per_year),
            ("experience.penaltyPerMissingYear", e.penalty_per_missing_year),
            (
                "responsibilities.keywordMatchScore",
                self.responsibilities.keyword_match_score,
            ),
        ] {
            ensure_points(name, value)?;
        }

        let c = &self.conclusions;
        if c.default_message.trim().is_empty() {
            bail!("conclusions.defaultMessage must not be empty");
        }
        if let Some(rule) = c.overrides.iter().find(|o| o.message.trim().is_empty()) {
            bail!(
                "conclusion override {:?} >= {} has an empty message",
                rule.metric,
                rule.threshold
            );
        }
        if let Some(tier) = c.tiers.iter().find(|t| t.message.trim().is_empty()) {
            bail!("score tier >= {} has an empty message", tier.threshold);
        }
        Ok(())
    }
}

fn validate_rule(name: &str, rule: &SkillRule) -> Result<()> {
    ensure_points(&format!("{name}.matchBase"), rule.match_base)?;
    ensure_points(&format!("{name}.missingPenalty"), rule.missing_penalty)?;
    ensure_points(&format!("{name}.maxPoints"), rule.max_points)?;
    if let Some(bonus) = rule.in_projects_bonus {
        ensure_points(&format!("{name}.inProjectsBonus"), bonus)?;
    }
    if let Some(bonus) = rule.expert_bonus {
        ensure_points(&format!("{name}.expertBonus"), bonus)?;
    }
    Ok(())
}

fn ensure_points(name: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{name} must be a non-negative number, got {value}"
    );
    Ok(())
}

/// Where the analyzer gets its scoring rules from.
#[async_trait]
pub trait ScoringConfigSource: Send + Sync {
    async fn load(&self) -> Result<ScoringConfig>;
}

/// The rules compiled into the binary.
pub struct BuiltinScoringConfig;

#[async_trait]
impl ScoringConfigSource for BuiltinScoringConfig {
    async fn load(&self) -> Result<ScoringConfig> {
        Ok(ScoringConfig::default())
    }
}

/// Rules read from a JSON file.
pub struct FileScoringConfig {
    path: PathBuf,
}

impl FileScoringConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScoringConfigSource for FileScoringConfig {
    async fn load(&self) -> Result<ScoringConfig> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read scoring config {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed scoring config {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        ScoringConfig::default().validate().unwrap();
    }

    #[test]
    fn test_bundled_rules_match_builtin_defaults() {
        let bundled: ScoringConfig =
            serde_json::from_str(include_str!("../../data/scoring-rules.json")).unwrap();
        assert_eq!(bundled, ScoringConfig::default());
    }

    #[test]
    fn test_default_expert_weight_is_fifteen() {
        assert_eq!(ScoringConfig::default().skills.required.expert_weight(), 15.0);
        assert_eq!(ScoringConfig::default().skills.nice_to_have.expert_weight(), 5.0);
    }

    #[test]
    fn test_camel_case_json_round_trip_keeps_rule_order() {
        let json = r#"{
            "skills": {
                "required": {"matchBase": 10, "missingPenalty": 5, "maxPoints": 10, "inProjectsBonus": 5, "expertBonus": 5},
                "niceToHave": {"matchBase": 5, "missingPenalty": 0, "maxPoints": 5},
                "expertProjectThreshold": 3
            },
            "experience": {"maxScore": 15, "pointPerYear": 1, "penaltyPerMissingYear": 2},
            "responsibilities": {"keywordMatchScore": 5},
            "conclusions": {
                "overrides": [
                    {"metric": "reqCoverage", "threshold": 85, "message": "covered"},
                    {"metric": "score", "threshold": 50, "message": "half"}
                ],
                "tiers": [{"threshold": 85, "message": "tier"}],
                "defaultMessage": "none"
            }
        }"#;

        let config: ScoringConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.similarity_thresholds, SimilarityThresholds::default());
        assert_eq!(config.skills.nice_to_have.in_projects_bonus, None);
        assert_eq!(
            config.conclusions.overrides[0].metric,
            ConclusionMetric::ReqCoverage
        );
        assert_eq!(config.conclusions.overrides[1].metric, ConclusionMetric::Score);
        assert_eq!(config.conclusions.tiers[0].message, "tier");
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = ScoringConfig::default();
        config.similarity_thresholds = SimilarityThresholds {
            strong: 0.5,
            moderate: 0.7,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_points_rejected() {
        let mut config = ScoringConfig::default();
        config.skills.required.missing_penalty = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("skills.required.missingPenalty"));
    }

    #[test]
    fn test_zero_expert_threshold_rejected() {
        let mut config = ScoringConfig::default();
        config.skills.expert_project_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_default_message_rejected() {
        let mut config = ScoringConfig::default();
        config.conclusions.default_message = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_file_source_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&ScoringConfig::default()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = FileScoringConfig::new(file.path()).load().await.unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[tokio::test]
    async fn test_file_source_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"skills\": ").unwrap();

        let err = FileScoringConfig::new(file.path()).load().await.unwrap_err();
        assert!(err.to_string().contains("malformed scoring config"));
    }

    #[tokio::test]
    async fn test_file_source_reports_missing_file() {
        let err = FileScoringConfig::new("/nonexistent/scoring.json")
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read scoring config"));
    }
}
