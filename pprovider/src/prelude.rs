//! Common `pprovider` imports for downstream crates.

pub use crate::{
    ChatModel, ChatModelRegistry, ChatModelRegistryBuilder, Message, Provider, ProviderError,
    ProviderErrorKind, ProviderFuture, Role, SecretString, SecureCredentialManager,
    UnconfiguredProviderError,
};
pub use pcommon::{BoxFuture, GenerationOptions};
