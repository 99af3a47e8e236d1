use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::extraction::skills::SkillVocabulary;
use crate::matching::engine::MatchEngine;
use crate::qa::assistant::ResumeAssistant;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// Skill labels recognised during extraction. Loaded once at startup.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Job catalog plus the similarity scorer. Default scorer: TfIdfScorer.
    pub engine: MatchEngine,
    /// Pluggable Q&A backend. Default: LlmClient.
    pub assistant: Arc<dyn ResumeAssistant>,
}
