//! Provider-agnostic summarization session over a chat model registry.
//!
//! A [`SummarizationSession`] owns one observable [`SessionState`] cell. Each
//! non-blank submission publishes `Pending`, resolves the chat model for the
//! selected provider, optionally replays the previous successful prompt into a
//! fresh [`ConversationWindow`], and publishes `Completed` or `Failed`.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pprovider::{ChatModel, ChatModelRegistry, Message, Provider, ProviderError, ProviderFuture};
//! use psession::{RequestStatus, SubmissionOutcome, SummarizationSession};
//!
//! struct Shorten;
//!
//! impl ChatModel for Shorten {
//!     fn provider(&self) -> Provider {
//!         Provider::MistralAi
//!     }
//!
//!     fn model_name(&self) -> &str {
//!         "shorten"
//!     }
//!
//!     fn complete<'a>(
//!         &'a self,
//!         _history: &'a [Message],
//!         input: &'a str,
//!     ) -> ProviderFuture<'a, Result<String, ProviderError>> {
//!         let words = input.split_whitespace().take(2).collect::<Vec<_>>();
//!         Box::pin(async move { Ok(words.join(" ")) })
//!     }
//! }
//!
//! # tokio_test_runtime(async {
//! let registry = Arc::new(ChatModelRegistry::builder().register(Shorten).build());
//! let session = SummarizationSession::new(registry);
//!
//! let handle = session.submit("the quick brown fox").expect("prompt is not blank");
//! assert_eq!(session.state().status, RequestStatus::Pending);
//!
//! let outcome = handle.wait().await.expect("task should join");
//! assert_eq!(outcome, SubmissionOutcome::Completed("the quick".to_string()));
//! assert_eq!(session.state().status, RequestStatus::Completed("the quick".to_string()));
//! # });
//! # fn tokio_test_runtime<F: std::future::Future>(future: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(future)
//! # }
//! ```

mod chain;
mod config;
mod error;
mod hooks;
mod session;
mod state;
mod window;

pub use chain::ConversationChain;
pub use config::{ConcurrencyPolicy, SessionConfig, UnconfiguredProviderPolicy};
pub use error::{SessionError, SubmissionError};
pub use hooks::{ModelCall, NoopSessionHooks, SessionHooks};
pub use session::{
    SubmissionOutcome, SubmitHandle, SummarizationSession, SummarizationSessionBuilder,
};
pub use state::{RequestStatus, SessionState};
pub use window::{ConversationWindow, DEFAULT_WINDOW_SIZE};

pub mod prelude {
    pub use crate::{
        ConcurrencyPolicy, ConversationChain, ConversationWindow, ModelCall, NoopSessionHooks,
        RequestStatus, SessionConfig, SessionError, SessionHooks, SessionState,
        SubmissionError, SubmissionOutcome, SubmitHandle, SummarizationSession,
        UnconfiguredProviderPolicy,
    };
    pub use pcommon::SessionId;
    pub use pprovider::{ChatModel, ChatModelRegistry, Provider};
}
