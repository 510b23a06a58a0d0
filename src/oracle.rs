//! Phrase oracle: one blocking chat-completion request per run.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Source of the run's dynamic annotation phrase.
///
/// The production implementation talks HTTP; tests substitute stubs.
pub trait PhraseSource {
    fn fetch_phrase(&self) -> Result<String>;
}

/// Configuration for the chat-completion oracle.
///
/// Everything here is a compile-time default; the program takes no flags,
/// environment variables, or config files.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Chat-completion endpoint URL
    pub endpoint: String,
    /// Static bearer token sent with the request
    pub api_key: String,
    /// Model name placed in the request body
    pub model: String,
    /// Completion length cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: "YOUR_OPENAI_API_KEY".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 16,
            temperature: 0.7,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Blocking HTTP oracle for a chat-completion style API.
///
/// Deliberately minimal: no timeout, no retry, no caching. Any transport
/// failure or unexpected response shape is returned as an error and treated
/// as fatal by the caller.
pub struct ChatCompletionOracle {
    client: Client,
    config: OracleConfig,
}

impl ChatCompletionOracle {
    pub fn new(config: OracleConfig) -> Result<Self> {
        // The request deliberately has no timeout; the blocking client
        // defaults to 30s, so that default is switched off here.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }
}

impl PhraseSource for ChatCompletionOracle {
    fn fetch_phrase(&self) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: "You are a whimsical phrase generator.",
                },
                ChatMessage {
                    role: "user",
                    content: "Generate a random short whimsical phrase:",
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let body = serde_json::to_string(&request)
            .map_err(|e| Error::Response(format!("failed to encode request: {e}")))?;

        log::info!("requesting phrase from {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .body(body)
            .send()
            .map_err(|e| Error::Network(format!("POST {} failed: {e}", self.config.endpoint)))?;

        let text = response
            .text()
            .map_err(|e| Error::Network(format!("failed to read response body: {e}")))?;

        // Diagnostic contract: the raw body goes to stdout before parsing.
        println!("API Response: {}", text);

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| Error::Response(format!("unexpected API response format: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Response("unexpected API response format: no choices".into()))?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_the_expected_shape() {
        let request = ChatRequest {
            model: "gpt-4",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 16,
            temperature: 0.7,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 16);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn response_content_is_extracted_from_the_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Moonlit marmalade"}},{"message":{"role":"assistant","content":"second"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Moonlit marmalade");
    }

    #[test]
    fn missing_content_field_fails_to_parse() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }
}
