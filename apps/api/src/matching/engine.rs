//! Match Engine: scores one resume against one job listing and ranks the catalog.
//!
//! Algorithm:
//! 1. similarity = TF-IDF cosine(resume text, job text), 0.5 on scorer failure
//! 2. matching_skills = resume skills contained in, or containing, any requirement
//! 3. missing_skills = requirements no resume skill matches (first 5)
//! 4. match_score = (similarity × 0.6 + matched / max(requirements, 1) × 0.4) × 100,
//!    clamped to [0, 100]

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::matching::catalog::JobCatalog;
use crate::matching::similarity::{semantic_similarity, SimilarityScorer};
use crate::models::job::JobListing;
use crate::models::resume::Resume;

pub const SEMANTIC_WEIGHT: f64 = 0.6;
pub const SKILL_WEIGHT: f64 = 0.4;
pub const MAX_MISSING_SKILLS: usize = 5;
const MAX_SUGGESTED_SKILLS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobListing,
    pub match_score: f64, // 0 – 100
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

impl JobMatch {
    /// The result reported when scoring a job fails internally.
    fn failed(job: &JobListing) -> Self {
        JobMatch {
            job: job.clone(),
            match_score: 0.0,
            matching_skills: vec![],
            missing_skills: vec![],
            recommendations: vec!["Error calculating match score".to_string()],
        }
    }
}

#[derive(Debug, Error)]
enum MatchError {
    #[error("match score is not finite (similarity={similarity}, skill ratio={ratio})")]
    NonFiniteScore { similarity: f64, ratio: f64 },
}

/// Scores resumes against the immutable job catalog.
#[derive(Clone)]
pub struct MatchEngine {
    catalog: Arc<JobCatalog>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl MatchEngine {
    pub fn new(catalog: Arc<JobCatalog>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { catalog, scorer }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Scores every catalog job, highest first. Equal scores keep catalog order.
    pub fn rank(&self, resume: &Resume) -> Vec<JobMatch> {
        let mut matches: Vec<JobMatch> = self
            .catalog
            .jobs()
            .iter()
            .map(|job| calculate_job_match(resume, job, self.scorer.as_ref()))
            .collect();
        sort_by_score(&mut matches);
        matches
    }
}

/// Stable sort, descending by score.
pub fn sort_by_score(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}

/// Scores one resume against one job. Never fails: an internal fault yields a
/// zero-score match carrying a single explanatory recommendation.
pub fn calculate_job_match(
    resume: &Resume,
    job: &JobListing,
    scorer: &dyn SimilarityScorer,
) -> JobMatch {
    match try_job_match(resume, job, scorer) {
        Ok(m) => m,
        Err(e) => {
            error!("Error calculating match for job '{}': {e}", job.title);
            JobMatch::failed(job)
        }
    }
}

fn try_job_match(
    resume: &Resume,
    job: &JobListing,
    scorer: &dyn SimilarityScorer,
) -> Result<JobMatch, MatchError> {
    let similarity = semantic_similarity(scorer, &resume_scoring_text(resume), &job.scoring_text());
    if similarity.is_fallback() {
        debug!("Using fallback similarity for job '{}'", job.title);
    }
    let similarity = similarity.value();

    let matching_skills: Vec<String> = resume
        .skills
        .iter()
        .filter(|skill| job.requirements.iter().any(|req| skills_match(skill, req)))
        .cloned()
        .collect();

    let mut missing_skills: Vec<String> = job
        .requirements
        .iter()
        .filter(|req| !resume.skills.iter().any(|skill| skills_match(skill, req)))
        .cloned()
        .collect();

    let ratio = matching_skills.len() as f64 / job.requirements.len().max(1) as f64;
    let raw_score = (similarity * SEMANTIC_WEIGHT + ratio * SKILL_WEIGHT) * 100.0;
    if !raw_score.is_finite() {
        return Err(MatchError::NonFiniteScore { similarity, ratio });
    }
    let match_score = raw_score.clamp(0.0, 100.0);

    let recommendations = build_recommendations(match_score, &missing_skills);
    missing_skills.truncate(MAX_MISSING_SKILLS);

    Ok(JobMatch {
        job: job.clone(),
        match_score,
        matching_skills,
        missing_skills,
        recommendations,
    })
}

/// Case-insensitive substring containment in either direction.
///
/// Intentionally fuzzy: "SQL" matches "PostgreSQL" and "R" matches "React".
pub fn skills_match(skill: &str, requirement: &str) -> bool {
    let skill = skill.to_lowercase();
    let requirement = requirement.to_lowercase();
    requirement.contains(&skill) || skill.contains(&requirement)
}

/// Skills followed by experience descriptions, space-joined.
fn resume_scoring_text(resume: &Resume) -> String {
    let descriptions: Vec<&str> = resume
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    format!("{} {}", resume.skills.join(" "), descriptions.join(" "))
}

fn build_recommendations(score: f64, missing_skills: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(MAX_SUGGESTED_SKILLS)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Consider learning: {}", top.join(", ")));
    }

    let tier = if score > 70.0 {
        "Great fit! Consider applying."
    } else if score > 50.0 {
        "Good potential match with some skill development."
    } else {
        "Focus on building relevant skills for this role."
    };
    recommendations.push(tier.to_string());

    recommendations
}
