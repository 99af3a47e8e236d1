use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{Resume, ResumeRow};

/// Most recent resumes returned by the listing endpoint.
pub const LIST_LIMIT: i64 = 100;

/// Inserts a parsed resume. Resumes are immutable once stored.
pub async fn insert_resume(pool: &PgPool, resume: &Resume) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO resumes
            (id, name, email, phone, skills, experience, education,
             raw_text, source_filename, s3_key, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(resume.id)
    .bind(&resume.name)
    .bind(&resume.email)
    .bind(&resume.phone)
    .bind(&resume.skills)
    .bind(Json(&resume.experience))
    .bind(Json(&resume.education))
    .bind(&resume.raw_text)
    .bind(&resume.source_filename)
    .bind(&resume.s3_key)
    .bind(resume.created_at)
    .execute(pool)
    .await?;

    info!(
        "Stored resume {} ({} skills, {} experience entries)",
        resume.id,
        resume.skills.len(),
        resume.experience.len()
    );
    Ok(())
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<Resume>, sqlx::Error> {
    let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(Resume::from))
}

pub async fn list_resumes(pool: &PgPool) -> Result<Vec<Resume>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes ORDER BY created_at DESC LIMIT $1",
    )
    .bind(LIST_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Resume::from).collect())
}
