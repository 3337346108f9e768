//! Chat model construction from API keys and environment configuration.

use std::sync::Arc;
use std::time::Duration;

use pprovider::{ChatModel, ChatModelRegistry, Provider, ProviderError, SecureCredentialManager};
use reqwest::Client;

use crate::ParleyConfig;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Clone)]
pub struct ProviderBuildConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl ProviderBuildConfig {
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for ProviderBuildConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderBuildConfig")
            .field("provider", &self.provider)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn build_chat_model_from_api_key(
    provider: Provider,
    api_key: impl Into<String>,
) -> Result<Arc<dyn ChatModel>, ProviderError> {
    build_chat_model(ProviderBuildConfig::new(provider, api_key))
}

pub fn build_chat_model(config: ProviderBuildConfig) -> Result<Arc<dyn ChatModel>, ProviderError> {
    let api_key = config.api_key.trim().to_string();
    if api_key.is_empty() {
        return Err(ProviderError::authentication(
            "provider API key must not be empty",
        ));
    }

    let credentials = Arc::new(SecureCredentialManager::new());
    let http = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;

    match config.provider {
        Provider::OpenAi => build_openai_model(credentials, api_key, http, &config),
        Provider::MistralAi => build_mistral_model(credentials, api_key, http, &config),
        Provider::Gemini => Err(ProviderError::invalid_request(
            "no chat model adapter is available for Gemini",
        )),
    }
}

/// Builds a registry holding every provider that has an API key in `config`.
///
/// Providers without a key, or whose key or settings are rejected, are
/// skipped with a warning so the remaining providers stay usable. Gemini is
/// listed by [`Provider::ALL`] but never configured.
pub fn build_registry(config: &ParleyConfig) -> ChatModelRegistry {
    let mut builder = ChatModelRegistry::builder();

    for provider in Provider::ALL {
        let Some(settings) = config.provider_settings(provider) else {
            tracing::debug!(provider = %provider, "no adapter for provider; leaving unconfigured");
            continue;
        };

        let Some(api_key) = settings.api_key.as_deref() else {
            tracing::warn!(
                provider = %provider,
                "no API key found; {} stays unconfigured",
                provider.display_name()
            );
            continue;
        };

        let mut build = ProviderBuildConfig::new(provider, api_key).with_timeout(config.timeout);
        if let Some(model) = &settings.model {
            build = build.with_model(model.clone());
        }
        if let Some(base_url) = &settings.base_url {
            build = build.with_base_url(base_url.clone());
        }

        let model = match build_chat_model(build) {
            Ok(model) => model,
            Err(error) => {
                tracing::warn!(
                    provider = %provider,
                    error_kind = ?error.kind,
                    error = %error,
                    "rejected configuration; {} stays unconfigured",
                    provider.display_name()
                );
                continue;
            }
        };
        tracing::info!(
            provider = %provider,
            model = model.model_name(),
            "configured chat model"
        );
        builder = builder.register_shared(model);
    }

    let registry = builder.build();
    if registry.is_empty() {
        tracing::warn!(
            "no chat models configured; set {} or {}",
            crate::config::OPENAI_API_KEY,
            crate::config::MISTRAL_API_KEY
        );
    }

    registry
}

#[cfg(feature = "provider-openai")]
fn build_openai_model(
    credentials: Arc<SecureCredentialManager>,
    api_key: String,
    http: Client,
    config: &ProviderBuildConfig,
) -> Result<Arc<dyn ChatModel>, ProviderError> {
    use pprovider::adapters::openai::OpenAiChatModel;

    credentials.set_openai_api_key(api_key)?;
    let mut transport = OpenAiChatModel::default_http_transport(http);
    if let Some(base_url) = &config.base_url {
        transport = transport.with_base_url(base_url.clone());
    }

    let mut model = OpenAiChatModel::new(credentials, Arc::new(transport));
    if let Some(name) = &config.model {
        model = model.with_model(name.clone());
    }

    Ok(Arc::new(model))
}

#[cfg(not(feature = "provider-openai"))]
fn build_openai_model(
    _credentials: Arc<SecureCredentialManager>,
    _api_key: String,
    _http: Client,
    _config: &ProviderBuildConfig,
) -> Result<Arc<dyn ChatModel>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-openai feature is not enabled on parley",
    ))
}

#[cfg(feature = "provider-mistral")]
fn build_mistral_model(
    credentials: Arc<SecureCredentialManager>,
    api_key: String,
    http: Client,
    config: &ProviderBuildConfig,
) -> Result<Arc<dyn ChatModel>, ProviderError> {
    use pprovider::adapters::mistral::MistralChatModel;

    credentials.set_mistral_api_key(api_key)?;
    let mut transport = MistralChatModel::default_http_transport(http);
    if let Some(base_url) = &config.base_url {
        transport = transport.with_base_url(base_url.clone());
    }

    let mut model = MistralChatModel::new(credentials, Arc::new(transport));
    if let Some(name) = &config.model {
        model = model.with_model(name.clone());
    }

    Ok(Arc::new(model))
}

#[cfg(not(feature = "provider-mistral"))]
fn build_mistral_model(
    _credentials: Arc<SecureCredentialManager>,
    _api_key: String,
    _http: Client,
    _config: &ProviderBuildConfig,
) -> Result<Arc<dyn ChatModel>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-mistral feature is not enabled on parley",
    ))
}
