//! In-memory API key storage with redacted debug output.
//!
//! ```rust
//! use pprovider::{Provider, SecureCredentialManager};
//!
//! let credentials = SecureCredentialManager::new();
//! credentials
//!     .set_api_key(Provider::MistralAi, "mistral-key")
//!     .expect("key should store");
//!
//! assert!(credentials.has_credentials(Provider::MistralAi).expect("lock"));
//! assert!(!credentials.has_credentials(Provider::OpenAi).expect("lock"));
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::{Provider, ProviderError};

#[derive(Clone, PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: zero bytes are valid UTF-8, so the string stays well formed.
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

#[derive(Default)]
pub struct SecureCredentialManager {
    api_keys: Mutex<HashMap<Provider, SecretString>>,
}

impl SecureCredentialManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(
        &self,
        provider: Provider,
        api_key: impl Into<String>,
    ) -> Result<(), ProviderError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(ProviderError::authentication("api key must not be empty"));
        }

        self.api_keys()?.insert(provider, api_key);
        Ok(())
    }

    pub fn has_credentials(&self, provider: Provider) -> Result<bool, ProviderError> {
        Ok(self.api_keys()?.contains_key(&provider))
    }

    pub fn api_key(&self, provider: Provider) -> Result<Option<SecretString>, ProviderError> {
        Ok(self.api_keys()?.get(&provider).cloned())
    }

    pub fn clear(&self, provider: Provider) -> Result<bool, ProviderError> {
        Ok(self.api_keys()?.remove(&provider).is_some())
    }

    fn api_keys(&self) -> Result<MutexGuard<'_, HashMap<Provider, SecretString>>, ProviderError> {
        self.api_keys
            .lock()
            .map_err(|_| ProviderError::other("credential manager lock poisoned"))
    }
}

impl std::fmt::Debug for SecureCredentialManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureCredentialManager")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{SecretString, SecureCredentialManager};
    use crate::{Provider, ProviderErrorKind};

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("sk-live-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "sk-live-123");
    }

    #[test]
    fn blank_keys_are_rejected() {
        let credentials = SecureCredentialManager::new();
        let error = credentials
            .set_api_key(Provider::OpenAi, "   ")
            .expect_err("blank key must fail");
        assert_eq!(error.kind, ProviderErrorKind::Authentication);
    }

    #[test]
    fn keys_can_be_read_and_cleared() {
        let credentials = SecureCredentialManager::new();
        credentials
            .set_api_key(Provider::MistralAi, "mistral-key")
            .expect("key should store");

        let key = credentials
            .api_key(Provider::MistralAi)
            .expect("lock")
            .expect("key should exist");
        assert_eq!(key.expose(), "mistral-key");

        assert!(credentials.clear(Provider::MistralAi).expect("lock"));
        assert!(!credentials.clear(Provider::MistralAi).expect("lock"));
        assert!(credentials.api_key(Provider::MistralAi).expect("lock").is_none());
    }
}
