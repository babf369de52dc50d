//! Axum route handlers for the Job Fit API.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::job_fit::aggregate::FitAnalysisResult;
use crate::job_fit::jd_parser::StructuredJobDescription;
use crate::job_fit::report::{render_report, report_filename, ReportFormat};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub format: ReportFormat,
}

/// POST /api/v1/job-fit/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<FitAnalysisResult>, AppError> {
    let result = state.analyzer.analyze(&request.job_description).await?;
    Ok(Json(result))
}

/// POST /api/v1/job-fit/parse
///
/// Returns the structured extraction without scoring it.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<StructuredJobDescription>, AppError> {
    let parsed = state.analyzer.parse(&request.job_description).await?;
    Ok(Json(parsed))
}

/// POST /api/v1/job-fit/report?format=md|txt
///
/// Runs a full analysis and returns it as a downloadable document.
pub async fn handle_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = state.analyzer.analyze(&request.job_description).await?;

    let today = Utc::now().date_naive();
    let body = render_report(&result, query.format, today);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        report_filename(query.format, today)
    );

    Ok((
        [
            (header::CONTENT_TYPE, query.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
