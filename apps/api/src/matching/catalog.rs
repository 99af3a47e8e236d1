//! The job catalog: an immutable list of listings built once at startup and
//! shared by reference. Bundled JSON by default; `JOB_CATALOG_PATH` overrides it.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::job::JobListing;

const BUNDLED_CATALOG: &str = include_str!("../../data/jobs.json");

#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<JobListing>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobListing>) -> Self {
        Self { jobs }
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("bundled job catalog is malformed")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let jobs: Vec<JobListing> = serde_json::from_str(json)?;
        Ok(Self::new(jobs))
    }

    /// Loads from `path` when given, otherwise the bundled catalog.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let catalog = match path {
            Some(p) => {
                let json = std::fs::read_to_string(p)
                    .with_context(|| format!("failed to read job catalog from {p}"))?;
                Self::from_json(&json).with_context(|| format!("job catalog {p} is malformed"))?
            }
            None => Self::bundled()?,
        };
        if catalog.is_empty() {
            warn!("Job catalog is empty; every match request will return no matches");
        }
        info!(
            "Job catalog loaded: {} listings ({})",
            catalog.len(),
            path.unwrap_or("bundled")
        );
        Ok(catalog)
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_has_five_jobs() {
        let catalog = JobCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 5);
        let devops = catalog
            .jobs()
            .iter()
            .find(|j| j.title == "DevOps Engineer")
            .unwrap();
        assert_eq!(
            devops.requirements,
            vec!["AWS", "Docker", "Kubernetes", "Jenkins", "Python", "Linux"]
        );
    }

    #[test]
    fn test_missing_id_is_generated_and_optional_fields_default() {
        let catalog = JobCatalog::from_json(
            r#"[{"title": "SRE", "company": "Acme", "description": "Keep it up", "requirements": ["Linux"]}]"#,
        )
        .unwrap();
        let job = &catalog.jobs()[0];
        assert!(!job.id.is_nil());
        assert_eq!(job.location, "");
        assert_eq!(job.scoring_text(), "Keep it up Linux");
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "QA", "company": "Acme", "description": "Test", "requirements": []}}]"#
        )
        .unwrap();
        let catalog = JobCatalog::load(file.path().to_str()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(JobCatalog::from_json("{not json").is_err());
    }
}
