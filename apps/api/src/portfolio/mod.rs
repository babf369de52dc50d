//! Portfolio data access. The portfolio is a static JSON document; it is read
//! per analysis so edits show up without a restart.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::models::portfolio::PortfolioData;

#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn load(&self) -> Result<PortfolioData, AppError>;
}

/// Reads `{profile, projects, skills}` from a JSON file.
pub struct JsonFilePortfolio {
    path: PathBuf,
}

impl JsonFilePortfolio {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PortfolioSource for JsonFilePortfolio {
    async fn load(&self) -> Result<PortfolioData, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::PortfolioData(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let data: PortfolioData = serde_json::from_str(&raw).map_err(|e| {
            AppError::PortfolioData(format!("malformed {}: {e}", self.path.display()))
        })?;

        debug!(
            projects = data.projects.len(),
            skill_categories = data.skills.len(),
            "Portfolio data loaded"
        );
        Ok(data)
    }
}
