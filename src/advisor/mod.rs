//! Advisory text generation
//!
//! Provides:
//! - LLM chat completions against an OpenAI-compatible API
//! - The instruction sent for each contest game
//! - The policy deciding whether a failed call aborts generation
//!
//! Suggestions are advisory. They end up in logs and the generation log, never
//! in the structural fields of a game configuration.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::brand::BrandProfile;
use crate::config::AdvisorConfig;
use crate::game::GameType;

const SYSTEM_PROMPT: &str = "You are a game contest generator. Based on the user prompt, generate appropriate game content and configuration.";

/// How a failed advisory call affects generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryPolicy {
    /// A failure aborts generation
    Required,
    /// A failure is logged and generation continues without a suggestion
    #[default]
    BestEffort,
    /// The service is never called
    Disabled,
}

impl AdvisoryPolicy {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<AdvisoryPolicy> {
        match s.to_lowercase().as_str() {
            "required" | "strict" => Some(AdvisoryPolicy::Required),
            "best-effort" | "besteffort" | "optional" => Some(AdvisoryPolicy::BestEffort),
            "disabled" | "off" | "none" => Some(AdvisoryPolicy::Disabled),
            _ => None,
        }
    }
}

/// Advisory service errors
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("advisory API key not configured")]
    NotConfigured,

    #[error("advisory request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("advisory API error: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("no response from advisory API")]
    EmptyResponse,
}

/// Chat message for LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// What the advisory instruction is built from
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRequest<'a> {
    pub prompt: &'a str,
    pub game_type: GameType,
    pub brand_url: Option<&'a str>,
    pub color: Option<&'a str>,
    pub brand: Option<&'a BrandProfile>,
}

impl AdvisoryRequest<'_> {
    /// The user message sent to the LLM
    pub fn instruction(&self) -> String {
        let mut text = format!(
            "Generate a contest game based on this prompt: {}. Detected game type: {}. Brand URL: {}. Dominant color: {}.",
            self.prompt,
            self.game_type,
            self.brand_url.unwrap_or("none"),
            self.color.unwrap_or("default"),
        );
        if let Some(brand) = self.brand {
            text.push_str(&format!(" Brand: {}.", brand.summary()));
        }
        text
    }
}

/// Advisory LLM client
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
    temperature: f32,
    policy: AdvisoryPolicy,
}

impl AdvisorClient {
    /// Create a client from configuration
    pub fn new(config: &AdvisorConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            policy: config.policy,
        })
    }

    /// Check if API key is configured
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn policy(&self) -> AdvisoryPolicy {
        self.policy
    }

    /// Send a chat completion request
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, AdvisorError> {
        let api_key = self.api_key.as_ref().ok_or(AdvisorError::NotConfigured)?;

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        debug!("Sending chat request to advisory API: {}", request.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Advisory API error: {} - {}", status, body);
            return Err(AdvisorError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AdvisorError::EmptyResponse)
    }

    /// Ask for suggestions about a contest game
    pub async fn suggest(&self, request: &AdvisoryRequest<'_>) -> Result<String, AdvisorError> {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(&request.instruction()),
        ];
        self.chat(messages).await
    }
}

/// Longest upstream error body carried in an [`AdvisorError::Status`]
const MAX_ERROR_BODY: usize = 200;

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
