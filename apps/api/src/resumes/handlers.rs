use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::document::read_document;
use crate::extraction::parse_resume_text;
use crate::models::resume::Resume;
use crate::resumes::archive::{archive_then_insert, S3Archive};
use crate::resumes::store::{insert_resume, list_resumes};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub resume: Resume,
}

/// Resume ids arrive as path segments or JSON strings; anything but a UUID is a bad request.
pub fn parse_resume_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation("Invalid resume id".to_string()))
}

/// Pulls the `file` field out of the form. Other fields are drained and ignored.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
            return Ok((file_name, data));
        }

        let _ = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?;
    }

    Err(AppError::Validation("No file provided".to_string()))
}

/// POST /api/upload-resume
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart).await?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "File too large. Maximum size is {} bytes",
            state.config.max_upload_bytes
        )));
    }

    let text = read_document(&file_name, &data)?;
    let parsed = parse_resume_text(&text, &state.vocabulary);

    let resume_id = Uuid::new_v4();
    let archive = S3Archive::new(state.s3.clone(), state.config.s3_bucket.clone());
    let (db, source_name) = (&state.db, file_name.as_str());
    let resume = archive_then_insert(&archive, resume_id, source_name, data, |s3_key| async move {
        let resume = parsed.into_resume(resume_id, source_name, s3_key);
        insert_resume(db, &resume).await?;
        Ok(resume)
    })
    .await?;

    info!(
        "Parsed resume {} from {}: {} skills, {} experience, {} education",
        resume.id,
        file_name,
        resume.skills.len(),
        resume.experience.len(),
        resume.education.len()
    );

    Ok(Json(UploadResponse {
        message: "Resume uploaded and parsed successfully".to_string(),
        resume,
    }))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Resume>>, AppError> {
    let resumes = list_resumes(&state.db).await?;
    Ok(Json(resumes))
}
