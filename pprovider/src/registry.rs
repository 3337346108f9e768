//! Chat model registry keyed by [`Provider`].
//!
//! Models are registered while building; the built registry is read-only.
//!
//! ```rust
//! use pprovider::{ChatModelRegistry, Provider};
//!
//! let registry = ChatModelRegistry::builder().build();
//! assert!(registry.is_empty());
//!
//! let error = registry.resolve(Provider::Gemini).err().expect("nothing registered");
//! assert_eq!(error.provider, Provider::Gemini);
//! ```

use std::sync::Arc;

use pcommon::{Registry, RegistryBuilder};

use crate::{ChatModel, Provider, UnconfiguredProviderError};

#[derive(Default)]
pub struct ChatModelRegistryBuilder {
    models: RegistryBuilder<Provider, Arc<dyn ChatModel>>,
}

impl ChatModelRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M>(self, model: M) -> Self
    where
        M: ChatModel + 'static,
    {
        self.register_shared(Arc::new(model))
    }

    pub fn register_shared(mut self, model: Arc<dyn ChatModel>) -> Self {
        let provider = model.provider();
        tracing::debug!(
            provider = %provider,
            model = model.model_name(),
            "registered chat model"
        );

        if self.models.insert(provider, model).is_some() {
            tracing::warn!(provider = %provider, "replaced previously registered chat model");
        }

        self
    }

    pub fn build(self) -> ChatModelRegistry {
        ChatModelRegistry {
            models: self.models.build(),
        }
    }
}

#[derive(Default, Clone)]
pub struct ChatModelRegistry {
    models: Registry<Provider, Arc<dyn ChatModel>>,
}

impl ChatModelRegistry {
    pub fn builder() -> ChatModelRegistryBuilder {
        ChatModelRegistryBuilder::new()
    }

    pub fn resolve(
        &self,
        provider: Provider,
    ) -> Result<Arc<dyn ChatModel>, UnconfiguredProviderError> {
        self.models
            .get(&provider)
            .cloned()
            .ok_or(UnconfiguredProviderError::new(provider))
    }

    pub fn contains(&self, provider: Provider) -> bool {
        self.models.contains_key(&provider)
    }

    /// Configured providers in menu order.
    pub fn providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|provider| self.contains(*provider))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl std::fmt::Debug for ChatModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatModelRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}
