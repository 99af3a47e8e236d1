//! Contact extraction: name, email and phone.
//!
//! Each field is resolved by an ordered list of candidate extractors. The first
//! candidate that yields a non-empty value wins; later candidates are never run.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single candidate extractor for one contact field.
pub type CandidateExtractor = fn(&str) -> Option<String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

/// Lines containing any of these are headers or contact lines, never a name.
const NAME_STOPWORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "email",
    "phone",
    "address",
    "experience",
    "education",
    "skills",
    "objective",
    "summary",
    "profile",
    "contact",
    "linkedin",
    "github",
    "portfolio",
];

const NAME_SCAN_LINES: usize = 8;
const NAME_MAX_LINE_WORDS: usize = 6;
const NAME_MAX_WORDS: usize = 4;

pub const EMAIL_EXTRACTORS: &[CandidateExtractor] = &[first_email];
pub const PHONE_EXTRACTORS: &[CandidateExtractor] = &[first_phone];
pub const NAME_EXTRACTORS: &[CandidateExtractor] = &[capitalized_header_line];

/// Runs `extractors` in order and returns the first non-empty result.
pub fn first_match(extractors: &[CandidateExtractor], text: &str) -> Option<String> {
    extractors
        .iter()
        .filter_map(|extract| extract(text))
        .find(|value| !value.is_empty())
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        name: first_match(NAME_EXTRACTORS, text).unwrap_or_default(),
        email: first_match(EMAIL_EXTRACTORS, text).unwrap_or_default(),
        phone: first_match(PHONE_EXTRACTORS, text).unwrap_or_default(),
    }
}

fn first_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// The whole match is returned, so an optional country code and the local
/// number come back as one string, formatted exactly as written.
fn first_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// First line near the top of the document that reads like a person's name:
/// 1 to 4 capitalised words, no digits, no `@`, no section keywords.
fn capitalized_header_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    let lower = line.to_lowercase();
    if NAME_STOPWORDS.iter().any(|kw| lower.contains(kw)) {
        return false;
    }
    if line.contains('@') || line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() > NAME_MAX_LINE_WORDS {
        return false;
    }
    (1..=NAME_MAX_WORDS).contains(&words.len())
        && words
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}
