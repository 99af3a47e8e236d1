use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog job listing. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub experience_level: String,
}

impl JobListing {
    /// Description followed by the requirements, as fed to the similarity scorer.
    pub fn scoring_text(&self) -> String {
        format!("{} {}", self.description, self.requirements.join(" "))
    }
}
