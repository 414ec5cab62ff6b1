use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error};

use crate::lesson::LessonContent;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_API_VERSION: &str = "v1beta";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;
const DEFAULT_TEMPERATURE: f32 = 0.5;

const SYSTEM_INSTRUCTION: &str = "You are an expert ESL teacher designed to help Chinese speakers \
learn practical scenario-based English.";

/// Anything that can turn a scenario name into a lesson.
pub trait LessonGenerator: Send + Sync {
    fn generate_lesson(
        &self,
        scenario_name: &str,
    ) -> impl Future<Output = Result<LessonContent, GenerationError>> + Send;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_endpoint: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = env_string("GEMINI_API_KEY").or_else(|| env_string("API_KEY"));
        let model = env_string("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_endpoint = normalize_endpoint(
            env_string("GEMINI_API_ENDPOINT").unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
        );
        let temperature = env_string("GEMINI_TEMPERATURE")
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|v| (0.0..=2.0).contains(v))
            .unwrap_or(DEFAULT_TEMPERATURE);
        let timeout =
            Duration::from_millis(env_u64("GENERATION_TIMEOUT").unwrap_or(DEFAULT_TIMEOUT_MS));

        Self {
            api_key,
            model,
            api_endpoint,
            temperature,
            timeout,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_endpoint: normalize_endpoint(DEFAULT_API_ENDPOINT.to_string()),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation backend not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty response")]
    EmptyResponse,
    #[error("lesson contains no vocabulary")]
    EmptyVocabulary,
    #[error("prompt blocked: {0}")]
    Blocked(String),
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }

    fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

/// Client for the Gemini `generateContent` endpoint with structured output.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
            && !self.config.model.trim().is_empty()
            && !self.config.api_endpoint.trim().is_empty()
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn request(&self, scenario_name: &str) -> Result<LessonContent, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(GenerationError::NotConfigured("GEMINI_API_KEY"))?;

        let payload = build_request_body(scenario_name, self.config.temperature);
        debug!(scenario = scenario_name, model = %self.config.model, "requesting lesson");

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::HttpStatus { status, body });
        }

        let bytes = resp.bytes().await?;
        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                "Failed to parse generation envelope: {}. Body: {}",
                e,
                String::from_utf8_lossy(&bytes)
            );
            GenerationError::Json(e)
        })?;

        let Some(text) = envelope.first_text() else {
            if let Some(reason) = envelope.block_reason() {
                return Err(GenerationError::Blocked(reason.to_string()));
            }
            let finish = envelope
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref());
            debug!(?finish, "generation returned no text");
            return Err(GenerationError::EmptyResponse);
        };

        parse_lesson(&text)
    }
}

impl LessonGenerator for GeminiClient {
    async fn generate_lesson(&self, scenario_name: &str) -> Result<LessonContent, GenerationError> {
        self.request(scenario_name).await
    }
}

pub fn build_prompt(scenario_name: &str) -> String {
    format!(
        r#"Generate an English learning lesson for the scenario: "{scenario_name}".
1. List 10-15 useful, common vocabulary words specific to this setting.
2. Write one coherent story or practical dialogue of about 100-150 words that uses ALL of the listed words in context.
3. Translate that story or dialogue into Chinese.
4. Keep the tone practical for daily life or travel."#
    )
}

/// Declared output schema, in the backend's OpenAPI subset.
pub fn lesson_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING", "description": "The name of the scenario." },
            "words": {
                "type": "ARRAY",
                "description": "A list of 10-15 essential vocabulary words for this scenario.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "english": { "type": "STRING", "description": "The English vocabulary word." },
                        "chinese": { "type": "STRING", "description": "The concise Chinese meaning." },
                        "pronunciation": { "type": "STRING", "description": "IPA pronunciation guide." }
                    },
                    "required": ["english", "chinese"]
                }
            },
            "connectedText": {
                "type": "STRING",
                "description": "A natural, coherent paragraph or dialogue (approx 100-150 words) that uses ALL the listed words in context."
            },
            "translation": {
                "type": "STRING",
                "description": "The Chinese translation of the connected text."
            }
        },
        "required": ["topic", "words", "connectedText", "translation"]
    })
}

pub fn build_request_body(scenario_name: &str, temperature: f32) -> Value {
    json!({
        "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "contents": [{ "role": "user", "parts": [{ "text": build_prompt(scenario_name) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": lesson_schema(),
            "temperature": temperature
        }
    })
}

/// Decodes the model's text payload. Never returns a partial lesson.
pub fn parse_lesson(text: &str) -> Result<LessonContent, GenerationError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let lesson: LessonContent = serde_json::from_str(body)?;
    if lesson.words.is_empty() {
        return Err(GenerationError::EmptyVocabulary);
    }
    Ok(lesson)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}

fn normalize_endpoint(endpoint: String) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    let versioned = trimmed
        .rsplit('/')
        .next()
        .is_some_and(|seg| seg.starts_with('v') && seg[1..].starts_with(|c: char| c.is_ascii_digit()));
    if versioned {
        trimmed.to_string()
    } else {
        format!("{trimmed}/{DEFAULT_API_VERSION}")
    }
}
