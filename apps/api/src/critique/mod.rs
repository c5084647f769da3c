// Resume critique: text extraction, prompt building, and the single-call analysis pipeline.
// All model calls go through llm_client — no direct Gemini HTTP calls here.

pub mod extract;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod upload;
