//! Mistral AI chat model implemented via the OpenAI-compatible transport.

use std::sync::Arc;

use pcommon::GenerationOptions;
use reqwest::Client;

use crate::adapters::openai::{CompatibleChat, OpenAiHttpTransport, OpenAiTransport};
use crate::{ChatModel, Message, Provider, ProviderError, ProviderFuture, SecureCredentialManager};

pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const MISTRAL_DEFAULT_MODEL: &str = "open-mistral-7b";

#[derive(Clone)]
pub struct MistralChatModel {
    inner: CompatibleChat,
}

impl MistralChatModel {
    pub fn new(
        credentials: Arc<SecureCredentialManager>,
        transport: Arc<dyn OpenAiTransport>,
    ) -> Self {
        Self {
            inner: CompatibleChat::new(
                Provider::MistralAi,
                credentials,
                transport,
                MISTRAL_DEFAULT_MODEL,
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
        OpenAiHttpTransport::new(client).with_base_url(MISTRAL_BASE_URL)
    }
}

impl std::fmt::Debug for MistralChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralChatModel")
            .field("model", &self.inner.model())
            .finish_non_exhaustive()
    }
}

impl ChatModel for MistralChatModel {
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

impl SecureCredentialManager {
    pub fn set_mistral_api_key(&self, api_key: impl Into<String>) -> Result<(), ProviderError> {
        let api_key: String = api_key.into();
        self.set_api_key(Provider::MistralAi, api_key.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::{MISTRAL_BASE_URL, MistralChatModel};

    #[test]
    fn default_transport_targets_mistral_endpoint() {
        let transport = MistralChatModel::default_http_transport(reqwest::Client::new());
        assert_eq!(transport.base_url(), MISTRAL_BASE_URL);
    }
}
