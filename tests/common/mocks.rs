use async_trait::async_trait;
use bioscribe::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient},
    pdf::TextExtractor,
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub reply: Option<String>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            reply: Some("# Mock SOP".to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = Some(reply.to_string());
        self
    }

    /// Simulates a reply without text, as returned after a content filter.
    pub fn with_blocked_reply(mut self) -> Self {
        self.reply = None;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Content of the last message of every recorded request.
    pub fn prompts(&self) -> Vec<String> {
        self.get_requests()
            .into_iter()
            .filter_map(|r| r.messages.last().map(|m| m.content.clone()))
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let finish_reason = if self.reply.is_some() { "Stop" } else { "ContentFilter" };
        Ok(ChatCompletionResponse {
            id: "chatcmpl-mock".to_string(),
            model: "mock-model".to_string(),
            choices: vec![Choice {
                index: 0,
                content: self.reply.clone(),
                finish_reason: Some(finish_reason.to_string()),
            }],
            usage: None,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec!["models/mock-model".to_string()])
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extractor that returns a fixed outcome and records what it was given.
#[derive(Debug, Clone)]
pub struct StubExtractor {
    pub text: std::result::Result<String, String>,
    pub received: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Ok(text.to_string()),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            text: Err(message.to_string()),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl TextExtractor for StubExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        self.received.lock().unwrap().push(bytes.to_vec());
        self.text.clone().map_err(Error::pdf)
    }
}
