//! Experience and education extraction. Line-oriented heuristics; entries are
//! kept in document order, never re-sorted by date.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{EducationEntry, ExperienceEntry};

pub const MAX_EXPERIENCE_ENTRIES: usize = 5;
pub const MAX_EDUCATION_ENTRIES: usize = 3;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year regex"));

/// Section-heading words; lines containing them never open or extend an entry.
const EXPERIENCE_SKIP_WORDS: &[&str] = &["experience", "work", "employment", "career"];

const EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school",
    "degree",
    "bachelor",
    "master",
    "phd",
    "diploma",
];

/// A line carrying a year opens a new entry; following lines extend its
/// description until the next year line.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();
        if EXPERIENCE_SKIP_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }

        if YEAR_RE.is_match(line) {
            if let Some(open) = current.take() {
                entries.push(close_entry(open));
            }
            current = Some((line.to_string(), Vec::new()));
        } else if let Some((_, description)) = current.as_mut() {
            description.push(line);
        }
    }

    if let Some(open) = current {
        entries.push(close_entry(open));
    }

    entries.truncate(MAX_EXPERIENCE_ENTRIES);
    entries
}

fn close_entry((header, description): (String, Vec<&str>)) -> ExperienceEntry {
    ExperienceEntry {
        role: header.clone(),
        duration: header,
        description: description.join(" "),
    }
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    text.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| EDUCATION_KEYWORDS.iter().any(|kw| line.contains(kw)))
        .take(MAX_EDUCATION_ENTRIES)
        .map(|line| EducationEntry {
            institution: line.clone(),
            degree: line,
            year: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_line_opens_entry_and_collects_description() {
        let text = "Software Engineer, TechCorp Inc. 2020-2023\n\
                    Developed web applications using React\n\
                    Implemented models for data analysis\n";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "Software Engineer, TechCorp Inc. 2020-2023");
        assert_eq!(entries[0].duration, entries[0].role);
        assert_eq!(
            entries[0].description,
            "Developed web applications using React Implemented models for data analysis"
        );
    }

    #[test]
    fn test_lines_before_first_year_are_ignored() {
        let text = "Jane Smith\nProduct Designer\n2019 - 2021 Acme\nDesigned things";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "Designed things");
    }

    #[test]
    fn test_section_words_are_skipped() {
        let text = "WORK EXPERIENCE 2015\nAnalyst 2016\nCareer highlights\nBuilt reports";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "Analyst 2016");
        assert_eq!(entries[0].description, "Built reports");
    }

    #[test]
    fn test_years_outside_range_do_not_open_entries() {
        let entries = extract_experience("Founded in 1850\nSold in 2150");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_experience_capped_at_five_in_document_order() {
        let text: String = (2010..2018).map(|y| format!("Role {y}\nDid things\n")).collect();
        let entries = extract_experience(&text);
        assert_eq!(entries.len(), MAX_EXPERIENCE_ENTRIES);
        assert_eq!(entries[0].role, "Role 2010");
        assert_eq!(entries[4].role, "Role 2014");
    }

    #[test]
    fn test_education_lowercases_and_caps() {
        let text = "University of Technology\nBachelor of Science\nHigh School Diploma\nMaster of Arts";
        let entries = extract_education(text);
        assert_eq!(entries.len(), MAX_EDUCATION_ENTRIES);
        assert_eq!(entries[0].institution, "university of technology");
        assert_eq!(entries[0].degree, "university of technology");
        assert_eq!(entries[0].year, "");
        assert_eq!(entries[2].institution, "high school diploma");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_experience("").is_empty());
        assert!(extract_education("").is_empty());
    }
}
