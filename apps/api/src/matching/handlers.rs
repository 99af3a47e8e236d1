use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::career::{suggest_careers, CareerSuggestion, CAREER_ARCHETYPES};
use crate::matching::engine::JobMatch;
use crate::matching::whatif::{compare_skill_development, SkillComparison};
use crate::models::job::JobListing;
use crate::models::resume::Resume;
use crate::resumes::handlers::parse_resume_id;
use crate::resumes::store::get_resume;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<JobMatch>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<CareerSuggestion>,
}

#[derive(Deserialize)]
pub struct SkillQuery {
    #[serde(default)]
    pub skill_to_develop: String,
}

async fn load_resume(state: &AppState, resume_id: &str) -> Result<Resume, AppError> {
    get_resume(&state.db, parse_resume_id(resume_id)?)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobListing>> {
    Json(state.engine.catalog().jobs().to_vec())
}

/// POST /api/match-jobs/:resume_id
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<MatchesResponse>, AppError> {
    let resume = load_resume(&state, &resume_id).await?;
    Ok(Json(MatchesResponse {
        matches: state.engine.rank(&resume),
    }))
}

/// GET /api/career-suggestions/:resume_id
pub async fn handle_career_suggestions(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let resume = load_resume(&state, &resume_id).await?;
    Ok(Json(SuggestionsResponse {
        suggestions: suggest_careers(&resume.skills, CAREER_ARCHETYPES),
    }))
}

/// GET /api/skill-development-comparison/:resume_id?skill_to_develop=
pub async fn handle_skill_comparison(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
    Query(params): Query<SkillQuery>,
) -> Result<Json<SkillComparison>, AppError> {
    let skill = params.skill_to_develop.trim();
    if skill.is_empty() {
        return Err(AppError::Validation(
            "skill_to_develop must not be empty".to_string(),
        ));
    }

    let resume = load_resume(&state, &resume_id).await?;
    Ok(Json(compare_skill_development(&state.engine, &resume, skill)))
}
