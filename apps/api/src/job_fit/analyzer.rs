//! Analysis entry point. Fetches the structured job description, the portfolio
//! and the scoring rules, then runs the pure scoring pipeline.
//!
//! This is the one place collaborator failures are translated into
//! `AppError`s; everything below `score_fit` is total.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::job_fit::aggregate::{score_fit, FitAnalysisResult};
use crate::job_fit::context::build_portfolio_context;
use crate::job_fit::jd_parser::{JobDescriptionParser, StructuredJobDescription};
use crate::job_fit::scoring_config::{ScoringConfig, ScoringConfigSource};
use crate::portfolio::PortfolioSource;

pub struct JobFitAnalyzer {
    parser: Arc<dyn JobDescriptionParser>,
    portfolio: Arc<dyn PortfolioSource>,
    config_source: Arc<dyn ScoringConfigSource>,
    /// Filled by the first successful load; failed loads leave it empty.
    scoring_config: OnceCell<Arc<ScoringConfig>>,
}

impl JobFitAnalyzer {
    pub fn new(
        parser: Arc<dyn JobDescriptionParser>,
        portfolio: Arc<dyn PortfolioSource>,
        config_source: Arc<dyn ScoringConfigSource>,
    ) -> Self {
        Self {
            parser,
            portfolio,
            config_source,
            scoring_config: OnceCell::new(),
        }
    }

    /// Scoring rules for this analyzer, loaded and validated on first use.
    pub async fn scoring_config(&self) -> Result<Arc<ScoringConfig>, AppError> {
        self.scoring_config
            .get_or_try_init(|| async {
                let config = self
                    .config_source
                    .load()
                    .await
                    .map_err(|e| AppError::Configuration(format!("{e:#}")))?;
                config
                    .validate()
                    .map_err(|e| AppError::Configuration(format!("{e:#}")))?;
                info!(
                    overrides = config.conclusions.overrides.len(),
                    tiers = config.conclusions.tiers.len(),
                    "Scoring config loaded"
                );
                Ok::<_, AppError>(Arc::new(config))
            })
            .await
            .cloned()
    }

    /// Structured extraction only, without scoring.
    pub async fn parse(&self, job_description: &str) -> Result<StructuredJobDescription, AppError> {
        require_text(job_description)?;
        self.parse_unchecked(job_description).await
    }

    #[tracing::instrument(skip_all, fields(analysis_id = %Uuid::new_v4()))]
    pub async fn analyze(&self, job_description: &str) -> Result<FitAnalysisResult, AppError> {
        require_text(job_description)?;
        debug!(chars = job_description.len(), "Starting job fit analysis");

        let (config, jd, portfolio) = tokio::try_join!(
            self.scoring_config(),
            self.parse_unchecked(job_description),
            self.portfolio.load(),
        )?;

        let context = build_portfolio_context(&portfolio);
        debug!(
            required = jd.required_skills.len(),
            nice_to_have = jd.nice_to_have_skills.len(),
            responsibilities = jd.key_responsibilities.len(),
            known_skills = context.known_skills.len(),
            projects = context.projects.len(),
            "Inputs ready"
        );

        let result = score_fit(&jd, &context, &config);
        info!(
            score = result.score,
            required_coverage = result.required_skills_coverage,
            nice_to_have_coverage = result.nice_to_have_skills_coverage,
            "Job fit analysis complete"
        );
        Ok(result)
    }

    async fn parse_unchecked(
        &self,
        job_description: &str,
    ) -> Result<StructuredJobDescription, AppError> {
        self.parser
            .parse(job_description)
            .await
            .map_err(|e| AppError::JobDescriptionParse(e.to_string()))
    }
}

fn require_text(job_description: &str) -> Result<(), AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription must not be empty".to_string(),
        ));
    }
    Ok(())
}
