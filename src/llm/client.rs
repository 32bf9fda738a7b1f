use super::types::*;
use crate::{Error, Result, config::{API_KEY_VAR, LlmConfig}};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    async fn list_models(&self) -> Result<Vec<String>>;

    fn model(&self) -> &str;

    fn system_prompt(&self) -> Option<&str> {
        None
    }

    fn temperature(&self) -> Option<f32> {
        None
    }

    /// Sends `prompt` as a single user turn and returns the generated text.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = self.system_prompt() {
            messages.push(ChatMessage::system(system_prompt));
        }
        messages.push(ChatMessage::user(prompt));

        let request = ChatCompletionRequest {
            model: self.model().to_string(),
            messages,
            temperature: self.temperature(),
        };

        self.create_chat_completion(request).await?.into_text()
    }
}

/// Client for any OpenAI-compatible endpoint; defaults to Gemini's.
pub struct OpenAiClient {
    /// `None` when no credential was configured.
    client: Option<Client<OpenAIConfig>>,
    model: String,
    temperature: Option<f32>,
    system_prompt: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = config.api_key.map(|api_key| {
            let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

            if !config.base_url.is_empty() {
                openai_config = openai_config.with_api_base(config.base_url);
            }

            Client::with_config(openai_config)
        });

        Self {
            client,
            model: config.model,
            temperature: config.temperature,
            system_prompt: config.system_prompt,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    fn client(&self) -> Result<&Client<OpenAIConfig>> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::config(format!("{} is not set; the model is unavailable", API_KEY_VAR)))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let client = self.client()?;

        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::with_capacity(request.messages.len());
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&request.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        let openai_request = request_builder.build()?;

        let response = client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                content: choice.message.content,
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let response = self.client()?.models().list().await?;
        Ok(response.data.into_iter().map(|m| m.id).collect())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    fn temperature(&self) -> Option<f32> {
        self.temperature
    }
}
