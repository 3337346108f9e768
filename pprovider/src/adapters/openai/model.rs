//! OpenAI chat model over the chat-completions transport.

use std::sync::Arc;

use pcommon::GenerationOptions;
use reqwest::Client;

use crate::{ChatModel, Message, Provider, ProviderError, ProviderFuture, SecureCredentialManager};

use super::auth::resolve_api_key;
use super::transport::{OpenAiHttpTransport, OpenAiTransport};
use super::types::build_chat_request;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

/// Request plumbing shared by every chat-completions compatible provider.
#[derive(Clone)]
pub(crate) struct CompatibleChat {
    provider: Provider,
    credentials: Arc<SecureCredentialManager>,
    transport: Arc<dyn OpenAiTransport>,
    model: String,
    options: GenerationOptions,
}

impl CompatibleChat {
    pub(crate) fn new(
        provider: Provider,
        credentials: Arc<SecureCredentialManager>,
        transport: Arc<dyn OpenAiTransport>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            credentials,
            transport,
            model: model.into(),
            options: GenerationOptions::default(),
        }
    }

    pub(crate) fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub(crate) fn set_options(&mut self, options: GenerationOptions) {
        self.options = options;
    }

    pub(crate) fn provider(&self) -> Provider {
        self.provider
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn options(&self) -> GenerationOptions {
        self.options
    }

    pub(crate) async fn complete(
        &self,
        history: &[Message],
        input: &str,
    ) -> Result<String, ProviderError> {
        self.options
            .validate()
            .map_err(ProviderError::invalid_request)?;
        let api_key = resolve_api_key(&self.credentials, self.provider)?;
        let request = build_chat_request(&self.model, self.options, history, input);

        tracing::debug!(
            provider = %self.provider,
            model = %self.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let response = self.transport.complete(request, api_key).await?;

        tracing::debug!(
            provider = %self.provider,
            model = %response.model,
            finish_reason = ?response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "chat completion received"
        );

        Ok(response.content)
    }
}

#[derive(Clone)]
pub struct OpenAiChatModel {
    inner: CompatibleChat,
}

impl OpenAiChatModel {
    pub fn new(
        credentials: Arc<SecureCredentialManager>,
        transport: Arc<dyn OpenAiTransport>,
    ) -> Self {
        Self {
            inner: CompatibleChat::new(
                Provider::OpenAi,
                credentials,
                transport,
                OPENAI_DEFAULT_MODEL,
            ),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.inner.set_model(model);
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.inner.set_options(options);
        self
    }

    pub fn options(&self) -> GenerationOptions {
        self.inner.options()
    }

    pub fn default_http_transport(client: Client) -> OpenAiHttpTransport {
        OpenAiHttpTransport::new(client)
    }
}

impl std::fmt::Debug for OpenAiChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChatModel")
            .field("model", &self.inner.model())
            .finish_non_exhaustive()
    }
}

impl ChatModel for OpenAiChatModel {
    fn provider(&self) -> Provider {
        self.inner.provider()
    }

    fn model_name(&self) -> &str {
        self.inner.model()
    }

    fn complete<'a>(
        &'a self,
        history: &'a [Message],
        input: &'a str,
    ) -> ProviderFuture<'a, Result<String, ProviderError>> {
        Box::pin(self.inner.complete(history, input))
    }
}
