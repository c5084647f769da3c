/// LLM Client — the single point of entry for all Gemini API calls in the critiquer.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for every critique.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content: {0}")]
    EmptyContent(String),
}

/// Anything that turns a prompt into a single text completion.
///
/// Carried in `AppState` as `Arc<dyn CompletionModel>`.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GeminiResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Explains why no text came back: a prompt block reason or a finish reason.
    fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("prompt blocked ({reason})");
        }
        match self.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            Some(reason) => format!("finish reason {reason}"),
            None => "no candidates returned".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Wraps the Gemini `generateContent` endpoint. One request per call, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/models/{MODEL}:generateContent")
    }

    /// Makes a single call to the Gemini API, returning the full response object.
    /// A missing API key is not checked here; the API rejects the request instead.
    pub async fn call(&self, prompt: &str) -> Result<GeminiResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut request = self.client.post(self.endpoint()).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.header("x-goog-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(body),
            });
        }

        let body = response.text().await?;
        let gemini_response: GeminiResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(gemini_response)
    }
}

#[async_trait]
impl CompletionModel for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .text()
            .ok_or_else(|| LlmError::EmptyContent(response.empty_reason()))
    }

    fn model_name(&self) -> &str {
        MODEL
    }
}

/// Pulls `error.message` out of a Google error body, falling back to the raw body.
fn parse_error_message(body: String) -> String {
    serde_json::from_str::<GoogleError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
