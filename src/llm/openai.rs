use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::llm::provider::CompletionProvider;

/// OpenAI-compatible chat completions backend.
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAiProvider {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: config.timeout,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Network(error)
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            "Sending {} chars to {} (model {})",
            prompt.chars().count(),
            self.name(),
            self.model
        );

        let request_body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body, self.timeout));
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let text = extract_completion(&body)?;
        tracing::debug!("Raw completion: {}", text);
        Ok(text)
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}

fn status_error(status: StatusCode, body: String, timeout: Duration) -> Error {
    match status {
        StatusCode::REQUEST_TIMEOUT => Error::Timeout(timeout),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(body),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(body),
        StatusCode::BAD_REQUEST
        | StatusCode::NOT_FOUND
        | StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNPROCESSABLE_ENTITY => Error::InvalidRequest(format!("{}: {}", status, body)),
        s if s.is_server_error() => Error::ServerError {
            status: s.as_u16(),
            body,
        },
        s => Error::LLMApi(format!("OpenAI API error ({}): {}", s, body)),
    }
}

fn extract_completion(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::LLMApi(format!("Failed to parse OpenAI response: {}", e)))?;

    if let Some(error) = response.error {
        return Err(Error::LLMApi(error.message));
    }

    // A missing or blank reply is still a reply; the parser decides what it is worth.
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default())
}
