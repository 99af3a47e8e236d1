//! What-if skill development: rank the catalog with and without one extra skill.

use serde::{Deserialize, Serialize};

use crate::matching::engine::{JobMatch, MatchEngine};
use crate::models::resume::Resume;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillComparison {
    pub skill_developed: String,
    pub original_matches: Vec<JobMatch>,
    pub modified_matches: Vec<JobMatch>,
    pub original_resume_skills: Vec<String>,
    pub modified_resume_skills: Vec<String>,
}

/// `skill` must already be trimmed and non-empty; the handler validates it.
pub fn compare_skill_development(
    engine: &MatchEngine,
    resume: &Resume,
    skill: &str,
) -> SkillComparison {
    let modified = resume.with_added_skill(skill);

    SkillComparison {
        skill_developed: skill.to_string(),
        original_matches: engine.rank(resume),
        modified_matches: engine.rank(&modified),
        original_resume_skills: resume.skills.clone(),
        modified_resume_skills: modified.skills,
    }
}
