use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::insights::upload::{extract_text, ResumeFormat};
use crate::insights::{extract_insights, ResumeInsights};
use crate::state::AppState;

const FILE_FIELD: &str = "resume";
const TEXT_FIELD: &str = "resume_text";

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub resume_text: String,
}

/// POST /api/v1/insights
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<ResumeInsights>, AppError> {
    validate_resume_text(&req.resume_text, state.config.max_text_chars)?;
    Ok(Json(run_extraction(&req.resume_text)))
}

/// POST /api/v1/insights/upload
///
/// Accepts a `resume` file (PDF or plain text) or a `resume_text` field. The file
/// wins when both are sent.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeInsights>, AppError> {
    let mut file_text: Option<String> = None;
    let mut pasted_text: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.is_empty() {
                    continue;
                }
                let format =
                    ResumeFormat::detect(file_name.as_deref(), content_type.as_deref(), &bytes)?;
                info!(
                    file_name = file_name.as_deref().unwrap_or("-"),
                    size = bytes.len(),
                    ?format,
                    "Received resume upload"
                );

                let text = tokio::task::spawn_blocking(move || extract_text(format, &bytes))
                    .await
                    .map_err(|e| {
                        if e.is_panic() {
                            warn!("Resume text extraction panicked: {e}");
                            AppError::UnprocessableEntity(
                                "The resume file could not be read".to_string(),
                            )
                        } else {
                            AppError::Internal(anyhow::Error::new(e))
                        }
                    })??;
                file_text = Some(text);
            }
            Some(TEXT_FIELD) => {
                pasted_text = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let text = file_text.or(pasted_text).ok_or_else(|| {
        AppError::Validation(format!(
            "Provide a '{FILE_FIELD}' file or '{TEXT_FIELD}' field"
        ))
    })?;
    validate_resume_text(&text, state.config.max_text_chars)?;
    Ok(Json(run_extraction(&text)))
}

fn run_extraction(text: &str) -> ResumeInsights {
    let insights = extract_insights(text);
    info!(
        projects = insights.projects.len(),
        achievements = insights.achievements.len(),
        "Resume insights extracted"
    );
    insights
}

fn validate_resume_text(text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::Validation(format!(
            "resume_text is {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
