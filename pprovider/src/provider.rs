//! The chat model capability implemented by every provider adapter.

use pcommon::BoxFuture;

use crate::{Message, Provider, ProviderError};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// Turns prior turns plus one new user turn into a completion.
///
/// Implementations are built once, shared behind `Arc`, and never mutated after
/// construction. `history` holds previous turns in order, oldest first, and
/// never includes `input`.
pub trait ChatModel: Send + Sync {
    fn provider(&self) -> Provider;

    fn model_name(&self) -> &str;

    fn complete<'a>(
        &'a self,
        history: &'a [Message],
        input: &'a str,
    ) -> ProviderFuture<'a, Result<String, ProviderError>>;
}
