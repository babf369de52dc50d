//! Downloadable report rendering for a finished analysis.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::job_fit::aggregate::FitAnalysisResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ReportFormat {
    #[default]
    #[serde(rename = "md")]
    Markdown,
    #[serde(rename = "txt")]
    Text,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "text/markdown; charset=utf-8",
            ReportFormat::Text => "text/plain; charset=utf-8",
        }
    }
}

/// `fit_analysis_<date>.<ext>`
pub fn report_filename(format: ReportFormat, date: NaiveDate) -> String {
    format!("fit_analysis_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

pub fn render_report(result: &FitAnalysisResult, format: ReportFormat, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d");
    let strengths = bullet_list(&result.strengths);
    let gaps = bullet_list(&result.gaps);

    match format {
        ReportFormat::Markdown => format!(
            "# Job Fit Analysis Report\nDate: {date}\n\n\
             ## Score: {score}%\n\
             **Required Skills Coverage**: {req}%\n\
             **Nice-to-Have Coverage**: {nice}%\n\n\
             ### Strengths\n{strengths}\n\n\
             ### Gaps\n{gaps}\n\n\
             ### Conclusion\n{conclusion}\n",
            score = result.score,
            req = result.required_skills_coverage,
            nice = result.nice_to_have_skills_coverage,
            conclusion = result.conclusion,
        ),
        ReportFormat::Text => format!(
            "JOB FIT ANALYSIS REPORT\nDate: {date}\n\n\
             SCORE: {score}%\n\
             REQ SKILLS COVERAGE: {req}%\n\
             NICE-TO-HAVE COVERAGE: {nice}%\n\n\
             STRENGTHS:\n{strengths}\n\n\
             GAPS:\n{gaps}\n\n\
             CONCLUSION:\n{conclusion}\n",
            score = result.score,
            req = result.required_skills_coverage,
            nice = result.nice_to_have_skills_coverage,
            conclusion = result.conclusion,
        ),
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
