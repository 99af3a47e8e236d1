// Resume field extraction: file bytes -> text -> structured fields.
// Heuristic and total: malformed or empty text yields empty fields, never an error.

pub mod contact;
pub mod document;
pub mod sections;
pub mod skills;

use chrono::Utc;
use uuid::Uuid;

use crate::extraction::contact::extract_contact_info;
use crate::extraction::sections::{extract_education, extract_experience};
use crate::extraction::skills::{extract_skills, SkillVocabulary};
use crate::models::resume::{EducationEntry, ExperienceEntry, Resume};

/// Structured fields pulled out of resume text, before an id is assigned.
#[derive(Debug, Clone)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub raw_text: String,
}

impl ParsedResume {
    pub fn into_resume(self, id: Uuid, source_filename: &str, s3_key: Option<String>) -> Resume {
        Resume {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            skills: self.skills,
            experience: self.experience,
            education: self.education,
            raw_text: self.raw_text,
            source_filename: source_filename.to_string(),
            s3_key,
            created_at: Utc::now(),
        }
    }
}

pub fn parse_resume_text(text: &str, vocabulary: &SkillVocabulary) -> ParsedResume {
    let contact = extract_contact_info(text);
    ParsedResume {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        skills: extract_skills(text, vocabulary),
        experience: extract_experience(text),
        education: extract_education(text),
        raw_text: text.to_string(),
    }
}
