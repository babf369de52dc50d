//! Job description extraction. The structured form is produced by the hosted
//! model; everything downstream treats it as immutable input.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::job_fit::prompts::{JOB_PARSE_PROMPT_TEMPLATE, JOB_PARSE_SYSTEM};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

/// Structured extraction of a job description. Missing or `null` fields decode
/// to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredJobDescription {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_experience: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
}

impl StructuredJobDescription {
    /// Clamps `yearsExperience` to a finite, non-negative value.
    pub fn sanitized(mut self) -> Self {
        if !self.years_experience.is_finite() || self.years_experience < 0.0 {
            self.years_experience = 0.0;
        }
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The external extraction step. Implementations may fail; they never see the
/// portfolio or the scoring rules.
#[async_trait]
pub trait JobDescriptionParser: Send + Sync {
    async fn parse(&self, job_description: &str) -> Result<StructuredJobDescription, LlmError>;
}

/// Extraction through the hosted model in JSON mode.
pub struct LlmJobDescriptionParser {
    llm: LlmClient,
}

impl LlmJobDescriptionParser {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl JobDescriptionParser for LlmJobDescriptionParser {
    async fn parse(&self, job_description: &str) -> Result<StructuredJobDescription, LlmError> {
        let prompt = JOB_PARSE_PROMPT_TEMPLATE.replace("{job_description}", job_description);
        let system = format!("{JOB_PARSE_SYSTEM} {JSON_ONLY_SYSTEM}");
        let parsed: StructuredJobDescription = self.llm.call_json(&prompt, &system).await?;
        Ok(parsed.sanitized())
    }
}
