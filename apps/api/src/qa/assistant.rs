//! Resume assistant: a pluggable, trait-based backend that answers questions about a resume.
//!
//! Default: `LlmClient` (Claude). Tests swap in canned or failing assistants.
//! `AppState` holds an `Arc<dyn ResumeAssistant>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::Resume;
use crate::qa::prompts::{
    ANSWER_MARKER, FALLBACK_ANSWER, FALLBACK_SUGGESTION, RESUME_QA_SYSTEM, SUGGESTIONS_MARKER,
};

pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaAnswer {
    pub answer: String,
    pub suggestions: Vec<String>,
}

impl QaAnswer {
    pub fn fallback() -> Self {
        QaAnswer {
            answer: FALLBACK_ANSWER.to_string(),
            suggestions: vec![FALLBACK_SUGGESTION.to_string()],
        }
    }
}

#[async_trait]
pub trait ResumeAssistant: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl ResumeAssistant for LlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.call_text(prompt, system).await
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Renders the structured resume fields as the context block of the prompt.
/// Missing fields are spelled out so the model does not guess at them.
pub fn format_resume_for_prompt(resume: &Resume) -> String {
    let mut out = String::from("RESUME CONTENT:\n\nPERSONAL INFORMATION:\n");
    out.push_str(&format!("- Name: {}\n", or_placeholder(&resume.name, "Not provided")));
    out.push_str(&format!("- Email: {}\n", or_placeholder(&resume.email, "Not provided")));
    out.push_str(&format!("- Phone: {}\n", or_placeholder(&resume.phone, "Not provided")));

    out.push_str("\nSKILLS:\n");
    if resume.skills.is_empty() {
        out.push_str("No skills listed\n");
    } else {
        out.push_str(&resume.skills.join(", "));
        out.push('\n');
    }

    out.push_str("\nEXPERIENCE:\n");
    if resume.experience.is_empty() {
        out.push_str("No experience information provided\n");
    }
    for (i, exp) in resume.experience.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n",
            i + 1,
            or_placeholder(&exp.role, "Unknown Position")
        ));
        if !exp.duration.is_empty() {
            out.push_str(&format!("   Duration: {}\n", exp.duration));
        }
        if !exp.description.is_empty() {
            out.push_str(&format!("   Description: {}\n", exp.description));
        }
        out.push('\n');
    }

    out
}

fn build_prompt(resume: &Resume, question: &str) -> String {
    format!(
        "{}\n\nUser Question: {}",
        format_resume_for_prompt(resume),
        question
    )
}

/// Splits a reply of the form `ANSWER: ... SUGGESTIONS: ...`.
///
/// Every `ANSWER:` marker is removed from the answer text; anything before it
/// is kept. Without the suggestions marker the whole reply is the answer.
/// Suggestion lines lose their bullet or numbering prefix; blank lines are dropped.
pub fn parse_reply(reply: &str) -> QaAnswer {
    let reply = reply.trim();

    let (answer_part, suggestions_part) = match reply.find(SUGGESTIONS_MARKER) {
        Some(idx) => (&reply[..idx], Some(&reply[idx + SUGGESTIONS_MARKER.len()..])),
        None => (reply, None),
    };

    let answer = answer_part.replace(ANSWER_MARKER, "");

    let suggestions = suggestions_part
        .map(|part| {
            part.lines()
                .map(|line| {
                    line.trim()
                        .trim_start_matches(|c: char| {
                            matches!(c, '•' | '-' | '*' | '.') || c.is_ascii_digit() || c.is_whitespace()
                        })
                        .trim()
                })
                .filter(|line| !line.is_empty())
                .take(MAX_SUGGESTIONS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    QaAnswer {
        answer: answer.trim().to_string(),
        suggestions,
    }
}

/// Answers a question about a resume. Never fails: any assistant error yields
/// the canned fallback.
pub async fn answer_question(
    assistant: &dyn ResumeAssistant,
    resume: &Resume,
    question: &str,
) -> QaAnswer {
    let prompt = build_prompt(resume, question);

    match assistant.complete(RESUME_QA_SYSTEM, &prompt).await {
        Ok(reply) => parse_reply(&reply),
        Err(e) => {
            error!("Resume Q&A degraded for resume {}: {e}", resume.id);
            QaAnswer::fallback()
        }
    }
}
