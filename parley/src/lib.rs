//! Unified facade over the parley workspace crates.
//!
//! Loads provider keys and session switches from the environment, builds the
//! chat model registry, and wires a [`SummarizationSession`] with tracing and
//! metrics hooks. The `parley` binary is a terminal front end over this crate.

mod command;
mod error;

pub mod config;
pub mod prelude;
pub mod providers;
pub mod render;
pub mod repl;
pub mod runtime;
pub mod telemetry;

pub use pcommon;
pub use pobserve;
pub use pprovider;
pub use psession;

pub use command::{Command, CommandError, parse_command};
pub use config::{ParleyConfig, ProviderSettings};
pub use error::{ConfigError, ParleyError};
pub use providers::{
    DEFAULT_TIMEOUT, ProviderBuildConfig, build_chat_model, build_chat_model_from_api_key,
    build_registry,
};
pub use repl::run_repl;
pub use runtime::{build_session, default_hooks, session_with_registry};

pub use pprovider::{
    ChatModel, ChatModelRegistry, Message, Provider, ProviderError, ProviderErrorKind, Role,
};
pub use psession::{
    ConcurrencyPolicy, RequestStatus, SessionConfig, SessionState, SubmissionOutcome,
    SubmitHandle, SummarizationSession, UnconfiguredProviderPolicy,
};
