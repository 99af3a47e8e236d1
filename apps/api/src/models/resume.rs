use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One work-history block. `role` and `duration` both carry the raw line that
/// contained the year; the lines after it form the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// A parsed resume as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub raw_text: String,
    pub source_filename: String,
    pub s3_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Resume {
    /// Returns a copy with `skill` appended to the skill set. Used only for
    /// what-if comparisons; the copy is never stored.
    pub fn with_added_skill(&self, skill: &str) -> Resume {
        let mut modified = self.clone();
        if !modified.skills.iter().any(|s| s == skill) {
            modified.skills.push(skill.to_string());
        }
        modified
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub raw_text: String,
    pub source_filename: String,
    pub s3_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ResumeRow> for Resume {
    fn from(row: ResumeRow) -> Self {
        Resume {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            skills: row.skills,
            experience: row.experience.0,
            education: row.education.0,
            raw_text: row.raw_text,
            source_filename: row.source_filename,
            s3_key: row.s3_key,
            created_at: row.created_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::resume_with_skills;

    #[test]
    fn test_with_added_skill_appends_new_skill() {
        let resume = resume_with_skills(&["Python"]);
        let modified = resume.with_added_skill("Docker");
        assert_eq!(modified.skills, vec!["Python", "Docker"]);
        assert_eq!(resume.skills, vec!["Python"]);
    }

    #[test]
    fn test_with_added_skill_collapses_duplicate() {
        let resume = resume_with_skills(&["Python", "Docker"]);
        let modified = resume.with_added_skill("Docker");
        assert_eq!(modified.skills.len(), 2);
    }
}
