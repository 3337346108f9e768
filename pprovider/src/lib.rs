//! Chat model capability, provider registry, and HTTP adapters.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pprovider::{ChatModel, ChatModelRegistry, Message, Provider, ProviderError, ProviderFuture};
//!
//! struct Echo;
//!
//! impl ChatModel for Echo {
//!     fn provider(&self) -> Provider {
//!         Provider::MistralAi
//!     }
//!
//!     fn model_name(&self) -> &str {
//!         "echo"
//!     }
//!
//!     fn complete<'a>(
//!         &'a self,
//!         _history: &'a [Message],
//!         input: &'a str,
//!     ) -> ProviderFuture<'a, Result<String, ProviderError>> {
//!         Box::pin(async move { Ok(input.to_string()) })
//!     }
//! }
//!
//! let registry = ChatModelRegistry::builder().register(Echo).build();
//! assert!(registry.resolve(Provider::MistralAi).is_ok());
//! assert!(registry.resolve(Provider::OpenAi).is_err());
//! ```

pub mod adapters;
mod credentials;
mod error;
mod model;
pub mod prelude;
mod provider;
mod registry;

pub use credentials::{SecretString, SecureCredentialManager};
pub use error::{ProviderError, ProviderErrorKind, UnconfiguredProviderError};
pub use model::{Message, ParseProviderError, Provider, Role};
pub use provider::{ChatModel, ProviderFuture};
pub use registry::{ChatModelRegistry, ChatModelRegistryBuilder};

pub use pcommon::GenerationOptions;
