// Prompt constants for resume question answering.

/// System prompt for resume Q&A. The reply format is parsed by `assistant::parse_reply`.
pub const RESUME_QA_SYSTEM: &str = "\
You are a helpful AI assistant that answers questions and provides useful suggestions based on the given resume.

Instructions:
- First, answer the user's question strictly based on the resume content.
- Then, if relevant, provide a short and practical suggestion or improvement \
(e.g., skills to add, a better way to present experience, and career growth tips).
- If the answer cannot be found in the resume, say: \
\"This information is not available in the resume.\" \
But still try to provide a general suggestion if possible.
- Keep answers clear, concise, and professional.
- Format your response as: ANSWER: [your answer] SUGGESTIONS: [bullet points if any]";

pub const ANSWER_MARKER: &str = "ANSWER:";
pub const SUGGESTIONS_MARKER: &str = "SUGGESTIONS:";

pub const FALLBACK_ANSWER: &str =
    "I'm sorry, I'm unable to process your question at the moment. Please try again later.";

pub const FALLBACK_SUGGESTION: &str =
    "Consider updating your resume with more specific details about your experience and skills.";
