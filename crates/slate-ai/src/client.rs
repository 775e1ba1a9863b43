// Rust guideline compliant 2026-08-29

//! OpenAI-compatible chat client with automatic retry for transient
//! errors.

use crate::prompts;
use serde::{Deserialize, Serialize};
use slate_app::{AppError, Result, TaskGenerator};
use std::time::Duration;

/// Configuration for the chat backend.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API key for the provider.
    pub api_key: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model name to request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Maximum attempts for transient failures.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
}

impl ClientOptions {
    /// Builds options from `SLATE_AI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SLATE_AI_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SLATE_AI_API_KEY")
            .map_err(|_| AppError::InvalidInput("SLATE_AI_API_KEY is not set".to_string()))?;
        let base_url = std::env::var("SLATE_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.deepseek.com".to_string());
        let model =
            std::env::var("SLATE_AI_MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature: 0.2,
            max_tokens: 4096,
            max_retries: 3,
            retry_delay: Duration::from_secs(5),
        })
    }
}

/// Blocking chat client for an OpenAI-compatible provider.
pub struct AiClient {
    client: reqwest::blocking::Client,
    options: ClientOptions,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl AiClient {
    /// Creates a client from the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Generation(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, options })
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client
    /// cannot be built.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    /// Sends a single-user-message chat completion request.
    ///
    /// Timeouts, connection failures, and rate limiting are retried up
    /// to `max_retries` times with a fixed delay; other failures return
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if all attempts fail or the response carries no
    /// content.
    pub fn chat(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.options.base_url.trim_end_matches('/')
        );
        let request = ChatRequest {
            model: &self.options.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.options.api_key)
                .json(&request)
                .send();

            let retryable = match &response {
                Ok(resp) => resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS,
                Err(e) => e.is_timeout() || e.is_connect(),
            };

            if retryable && attempt < self.options.max_retries {
                std::thread::sleep(self.options.retry_delay);
                continue;
            }

            let resp = response
                .map_err(|e| AppError::Generation(format!("Request failed: {}", e)))?;
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            if !status.is_success() {
                return Err(AppError::Generation(format!(
                    "Provider returned {}: {}",
                    status, body
                )));
            }

            let parsed: ChatResponse = serde_json::from_str(&body)
                .map_err(|e| AppError::Generation(format!("Unparsable response: {}", e)))?;
            let content = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|c| !c.trim().is_empty());

            return content
                .map(|c| c.trim().to_string())
                .ok_or_else(|| AppError::Generation("Empty response from provider".to_string()));
        }
    }
}

impl TaskGenerator for AiClient {
    fn generate_tasks(&self, prd: &str) -> Result<String> {
        let response = self.chat(&prompts::generate_tasks_prompt(prd))?;
        prompts::extract_json_payload(&response)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Generation("Response carried no JSON payload".to_string())
            })
    }

    fn expand_task(&self, title: &str, description: Option<&str>, context: &str) -> Result<String> {
        let response = self.chat(&prompts::expand_task_prompt(title, description, context))?;
        prompts::extract_json_payload(&response)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Generation("Response carried no JSON payload".to_string())
            })
    }
}
