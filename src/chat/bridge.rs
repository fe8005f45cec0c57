use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient, Role},
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Forwards chat messages to the conversational provider.
///
/// Holds no conversation state: every call carries the full history it wants
/// the provider to see. Provider failures never reach the caller; they are
/// replaced by `fallback_message`.
pub struct ConversationBridge {
    llm_client: Arc<dyn LlmClient>,
    system_prompt: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    fallback_message: String,
}

impl ConversationBridge {
    pub fn new(llm_config: LlmConfig) -> Self {
        let llm_client = Arc::new(OpenAiClient::new(llm_config.clone()));
        Self::with_client(llm_client, llm_config)
    }

    pub fn with_client(llm_client: Arc<dyn LlmClient>, llm_config: LlmConfig) -> Self {
        Self {
            llm_client,
            system_prompt: llm_config.system_prompt,
            temperature: llm_config.temperature,
            max_tokens: llm_config.max_tokens,
            fallback_message: llm_config.fallback_message,
        }
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    pub async fn send(&self, text: &str, history: &[ChatMessage]) -> String {
        match self.complete(text, history).await {
            Ok(reply) => {
                info!("Generated chat response successfully");
                reply
            }
            Err(e) => {
                error!("Error in chat, returning fallback: {}", e);
                self.fallback_message.clone()
            }
        }
    }

    async fn complete(&self, text: &str, history: &[ChatMessage]) -> Result<String> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        if let Some(prompt) = &self.system_prompt {
            messages.push(ChatMessage::system(prompt.clone()));
        }
        // Only the configured prompt may speak as the system.
        let before = messages.len();
        messages.extend(
            history
                .iter()
                .filter(|message| message.role != Role::System)
                .cloned(),
        );
        let dropped = history.len() - (messages.len() - before);
        if dropped > 0 {
            debug!("Dropped {} system turns from caller history", dropped);
        }
        messages.push(ChatMessage::user(text));

        let request = ChatCompletionRequest {
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self.llm_client.create_chat_completion(request).await?;
        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| Error::provider(format!("empty completion from {}", response.model)))
    }
}
