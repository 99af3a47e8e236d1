use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::qa::assistant::{answer_question, QaAnswer};
use crate::resumes::handlers::parse_resume_id;
use crate::resumes::store::get_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeQaRequest {
    pub resume_id: String,
    pub question: String,
}

/// POST /api/resume-qa
pub async fn handle_resume_qa(
    State(state): State<AppState>,
    Json(req): Json<ResumeQaRequest>,
) -> Result<Json<QaAnswer>, AppError> {
    let resume_id = parse_resume_id(&req.resume_id)?;

    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Question must not be empty".to_string()));
    }

    let resume = get_resume(&state.db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let answer = answer_question(state.assistant.as_ref(), &resume, question).await;
    Ok(Json(answer))
}
