//! Career path suggestions: fit of a skill set against a fixed archetype table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A static career path definition.
#[derive(Debug, Clone, Copy)]
pub struct CareerArchetype {
    pub career_path: &'static str,
    pub required_skills: &'static [&'static str],
    pub learning_resources: &'static [&'static str],
}

pub const CAREER_ARCHETYPES: &[CareerArchetype] = &[
    CareerArchetype {
        career_path: "Full Stack Developer",
        required_skills: &["javascript", "react", "node.js", "python", "sql"],
        learning_resources: &["Complete React Course", "Node.js Masterclass", "Database Design"],
    },
    CareerArchetype {
        career_path: "Data Scientist",
        required_skills: &["python", "machine learning", "pandas", "numpy", "sql"],
        learning_resources: &[
            "Machine Learning Specialization",
            "Data Science with Python",
            "Statistics for Data Science",
        ],
    },
    CareerArchetype {
        career_path: "DevOps Engineer",
        required_skills: &["aws", "docker", "kubernetes", "jenkins", "linux"],
        learning_resources: &["AWS Solutions Architect", "Docker Mastery", "Kubernetes Administrator"],
    },
    CareerArchetype {
        career_path: "Mobile Developer",
        required_skills: &["react native", "swift", "kotlin", "javascript"],
        learning_resources: &["React Native Complete Guide", "iOS Development", "Android Development"],
    },
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub career_path: String,
    pub current_fit: f64, // 0 – 100
    /// Archetype skills the resume does not have yet, in archetype order.
    pub required_skills: Vec<String>,
    pub learning_resources: Vec<String>,
}

/// One suggestion per archetype, best fit first. Equal fits keep table order.
pub fn suggest_careers(skills: &[String], archetypes: &[CareerArchetype]) -> Vec<CareerSuggestion> {
    let skill_set: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut suggestions: Vec<CareerSuggestion> = archetypes
        .iter()
        .map(|archetype| {
            let required: HashSet<String> = archetype
                .required_skills
                .iter()
                .map(|s| s.to_lowercase())
                .collect();
            let covered = skill_set.intersection(&required).count();

            CareerSuggestion {
                career_path: archetype.career_path.to_string(),
                current_fit: covered as f64 / required.len().max(1) as f64 * 100.0,
                required_skills: archetype
                    .required_skills
                    .iter()
                    .filter(|s| !skill_set.contains(&s.to_lowercase()))
                    .map(|s| s.to_string())
                    .collect(),
                learning_resources: archetype
                    .learning_resources
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.current_fit.total_cmp(&a.current_fit));
    suggestions
}
