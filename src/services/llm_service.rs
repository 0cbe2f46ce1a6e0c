//! Single-shot completion client for the hosted LLM provider.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::Config;
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// The one suspend point of a generation request. Implementations are
/// constructed per request from the caller-supplied credential; failures are
/// surfaced immediately, never retried.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completion client against an OpenAI-compatible endpoint (Groq by
/// default). Holds the credential only inside the underlying HTTP client.
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmService {
    pub fn new(api_key: &SecretString, config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&config.llm_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
        }
    }
}

#[async_trait]
impl CompletionClient for LlmService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        log::debug!("requesting completion, prompt length {} chars", prompt.len());

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .messages([ChatCompletionRequestMessage::User(message)])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(text)
    }
}
