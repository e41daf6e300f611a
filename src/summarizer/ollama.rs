// file: src/summarizer/ollama.rs
// description: ollama chat api client for article summarization
// reference: https://github.com/ollama/ollama/blob/main/docs/api.md

use crate::config::SummarizerConfig;
use crate::error::{HubError, Result};
use crate::parser::TextNormalizer;
use crate::summarizer::prompt;
use crate::utils::Validator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SHORT_CONTENT_NOTICE: &str = "Content too short to summarize.";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

pub struct OllamaClient {
    client: Client,
    normalizer: TextNormalizer,
    config: SummarizerConfig,
}

impl OllamaClient {
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            client: Client::new(),
            normalizer: TextNormalizer::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Summarizes one article through the chat endpoint. The article is
    /// reduced to the same plain text the extractor sees (markup stripped,
    /// defanging left alone), gated on a minimum word count, and truncated
    /// on a char boundary before prompting.
    pub async fn summarize(&self, content: &str) -> Result<String> {
        let clean = self.normalizer.plain_text(content);

        if clean.split_whitespace().count() < self.config.min_words {
            return Ok(SHORT_CONTENT_NOTICE.to_string());
        }

        let excerpt = Validator::truncate_text(&clean, self.config.max_prompt_chars);
        let prompt = prompt::analyst_report(&excerpt);

        let url = format!("{}/api/chat", self.config.host.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            stream: false,
        };

        debug!("Requesting summary from {} ({} prompt chars)", url, excerpt.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| HubError::Summarization(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HubError::Summarization(format!(
                "chat request failed with status {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| HubError::Summarization(format!("failed to parse chat response: {}", e)))?;

        Ok(chat.message.content)
    }

    /// Rendered by the CLI when summarization fails.
    pub fn failure_notice(&self) -> String {
        format!(
            "**Summary Failed**: could not get a response from Ollama at `{}`. Ensure Ollama is running and the model `{}` is available (`ollama pull {}`).",
            self.config.host, self.config.model, self.config.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn client() -> OllamaClient {
        OllamaClient::new(Config::default_config().summarizer)
    }

    #[tokio::test]
    async fn test_short_content_is_gated() {
        let summary = client().summarize("<p>too short</p>").await.unwrap();
        assert_eq!(summary, SHORT_CONTENT_NOTICE);
    }

    #[test]
    fn test_failure_notice_names_host_and_model() {
        let notice = client().failure_notice();
        assert!(notice.contains("127.0.0.1:11434"));
        assert!(notice.contains("llama3.2"));
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: "llama3.2".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            stream: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
