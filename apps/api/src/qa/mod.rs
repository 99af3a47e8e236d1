// Resume Q&A: answers free-form questions about a stored resume through the LLM client.
// Any assistant failure degrades to a canned answer; callers always get a well-formed reply.

pub mod assistant;
pub mod handlers;
pub mod prompts;
