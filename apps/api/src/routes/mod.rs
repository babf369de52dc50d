pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::job_fit::handlers;
use crate::state::AppState;

/// Job descriptions are pasted text; anything larger is not one.
const MAX_BODY_BYTES: usize = 512 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/job-fit/analyze", post(handlers::handle_analyze))
        .route("/api/v1/job-fit/parse", post(handlers::handle_parse))
        .route("/api/v1/job-fit/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::errors::AppError;
    use crate::job_fit::analyzer::JobFitAnalyzer;
    use crate::job_fit::jd_parser::{JobDescriptionParser, StructuredJobDescription};
    use crate::job_fit::scoring_config::BuiltinScoringConfig;
    use crate::llm_client::LlmError;
    use crate::models::portfolio::{PortfolioData, Profile, Project};
    use crate::portfolio::PortfolioSource;

    /// Treats the posted text as a comma-separated list of required skills;
    /// `"garbage"` fails extraction.
    struct CsvParser;

    #[async_trait]
    impl JobDescriptionParser for CsvParser {
        async fn parse(&self, text: &str) -> Result<StructuredJobDescription, LlmError> {
            if text == "garbage" {
                return Err(LlmError::EmptyContent);
            }
            Ok(StructuredJobDescription {
                required_skills: text.split(',').map(|s| s.trim().to_string()).collect(),
                years_experience: 3.0,
                ..Default::default()
            })
        }
    }

    struct FixedPortfolio;

    #[async_trait]
    impl PortfolioSource for FixedPortfolio {
        async fn load(&self) -> Result<PortfolioData, AppError> {
            Ok(PortfolioData {
                profile: Profile {
                    name: "Ada".to_string(),
                    short_bio: "Engineer with 4 years of experience".to_string(),
                    ..Default::default()
                },
                projects: vec![Project {
                    title: "Ledger".to_string(),
                    technologies: vec!["Rust".to_string(), "Kafka".to_string()],
                    ..Default::default()
                }],
                skills: vec![],
            })
        }
    }

    fn app() -> Router {
        let analyzer = JobFitAnalyzer::new(
            Arc::new(CsvParser),
            Arc::new(FixedPortfolio),
            Arc::new(BuiltinScoringConfig),
        );
        build_router(AppState {
            analyzer: Arc::new(analyzer),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobfit-api");
    }

    #[tokio::test]
    async fn test_analyze_returns_camel_case_result() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/analyze",
                json!({"jobDescription": "Rust, Haskell"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["requiredSkillsCoverage"], 50);
        assert_eq!(body["gaps"], json!(["Haskell"]));
        assert_eq!(body["requiredMatches"][0]["matchQuality"], "strong");
        assert_eq!(body["experienceMatch"]["actual"], 4.0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_description() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/analyze",
                json!({"jobDescription": "  "}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_surfaces_parse_failure() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/analyze",
                json!({"jobDescription": "garbage"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "JOB_DESCRIPTION_PARSE_ERROR");
        assert_eq!(body["error"]["message"], "Failed to parse job description");
    }

    #[tokio::test]
    async fn test_parse_previews_extraction() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/parse",
                json!({"jobDescription": "Go, Rust"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["requiredSkills"], json!(["Go", "Rust"]));
        assert_eq!(body["yearsExperience"], 3.0);
    }

    #[tokio::test]
    async fn test_report_markdown_download() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/report?format=md",
                json!({"jobDescription": "Rust"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/markdown; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.ends_with(".md\""));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("# Job Fit Analysis Report\n"));
        assert!(text.contains("### Strengths\n- Rust"));
    }

    #[tokio::test]
    async fn test_report_rejects_unknown_format() {
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/report?format=pdf",
                json!({"jobDescription": "Rust"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let text = "a".repeat(MAX_BODY_BYTES + 1);
        let response = app()
            .oneshot(post_json(
                "/api/v1/job-fit/analyze",
                json!({ "jobDescription": text }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
