//! Key validation and lookup for OpenAI-compatible adapters.

use crate::{Provider, ProviderError, SecretString, SecureCredentialManager};

impl SecureCredentialManager {
    /// Stores an OpenAI API key.
    ///
    /// OpenAI keys are expected to start with `sk-`.
    pub fn set_openai_api_key(&self, api_key: impl Into<String>) -> Result<(), ProviderError> {
        let api_key = api_key.into();
        if !api_key.trim().starts_with("sk-") {
            return Err(ProviderError::authentication(
                "OpenAI API key must start with 'sk-'",
            ));
        }

        self.set_api_key(Provider::OpenAi, api_key.trim())
    }
}

pub(crate) fn resolve_api_key(
    credentials: &SecureCredentialManager,
    provider: Provider,
) -> Result<SecretString, ProviderError> {
    credentials.api_key(provider)?.ok_or_else(|| {
        ProviderError::authentication(format!(
            "no {} API key configured",
            provider.display_name()
        ))
    })
}
