//! Skill extraction against an injected vocabulary.
//!
//! The vocabulary is a plain text resource (one label per line) loaded once at
//! startup. A bundled default ships with the crate; `SKILL_VOCABULARY_PATH`
//! replaces it without touching the extraction code.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::info;

const BUNDLED_VOCABULARY: &str = include_str!("../../data/skill_vocabulary.txt");

/// Headers that introduce a dedicated skills block.
const SECTION_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "competencies",
    "expertise",
];

/// End of a skills block: the next all-caps header line, or a blank line.
static SECTION_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*[A-Z][A-Z\s]*[:\n]|\n\s*\n").expect("valid section terminator regex")
});

static SECTION_HEADER_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SECTION_HEADERS
        .iter()
        .map(|h| Regex::new(&format!(r"(?i){}[:\s]+", regex::escape(h))).expect("valid header regex"))
        .collect()
});

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read skill vocabulary from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid pattern for skill '{label}': {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("skill vocabulary is empty")]
    Empty,
}

#[derive(Debug, Clone)]
struct VocabularyEntry {
    label: String,
    lower: String,
    whole_word: Regex,
}

/// The canonical skill labels recognised during extraction.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<VocabularyEntry>,
}

impl SkillVocabulary {
    /// The vocabulary compiled into the binary.
    pub fn bundled() -> Result<Self, VocabularyError> {
        Self::parse(BUNDLED_VOCABULARY)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Loads from `path` when given, otherwise the bundled default.
    pub fn load(path: Option<&str>) -> Result<Self, VocabularyError> {
        let vocabulary = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::bundled()?,
        };
        info!(
            "Skill vocabulary loaded: {} labels ({})",
            vocabulary.len(),
            path.unwrap_or("bundled")
        );
        Ok(vocabulary)
    }

    /// Parses one label per line. Blank lines and `#` comments are skipped;
    /// labels that differ only in case collapse to the first occurrence.
    pub fn parse(contents: &str) -> Result<Self, VocabularyError> {
        let mut seen = BTreeSet::new();
        let mut entries = Vec::new();

        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lower = line.to_lowercase();
            if !seen.insert(lower.clone()) {
                continue;
            }
            let whole_word = Regex::new(&format!(r"\b{}\b", regex::escape(&lower))).map_err(
                |source| VocabularyError::Pattern {
                    label: line.to_string(),
                    source,
                },
            )?;
            entries.push(VocabularyEntry {
                label: line.to_string(),
                lower,
                whole_word,
            });
        }

        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Returns every vocabulary label found in `text`, sorted and deduplicated.
///
/// Two passes feed the same set:
/// 1. whole-word, case-insensitive match over the full text;
/// 2. substring match inside dedicated skills blocks ("Skills:", "Technologies:" ...).
///
/// The second pass is looser on purpose: a label such as "Java" is picked up
/// from "JavaScript" when it sits inside a skills block.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let mut skills = BTreeSet::new();

    for span in skill_section_spans(text) {
        let span_lower = span.to_lowercase();
        for entry in &vocabulary.entries {
            if span_lower.contains(&entry.lower) {
                skills.insert(entry.label.clone());
            }
        }
    }

    let text_lower = text.to_lowercase();
    for entry in &vocabulary.entries {
        if entry.whole_word.is_match(&text_lower) {
            skills.insert(entry.label.clone());
        }
    }

    skills.into_iter().collect()
}

/// Text following each skills header, up to the next all-caps header line,
/// blank line, or end of text.
fn skill_section_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();

    for header in SECTION_HEADER_RES.iter() {
        let mut cursor = 0;
        while let Some(m) = header.find_at(text, cursor) {
            let start = m.end();
            let end = SECTION_END_RE
                .find_at(text, start)
                .map(|t| t.start())
                .unwrap_or(text.len());
            spans.push(&text[start..end]);
            cursor = end.max(start);
            if cursor >= text.len() {
                break;
            }
        }
    }

    spans
}
