//! Common imports for applications embedding parley.

pub use crate::{
    ChatModel, ChatModelRegistry, Command, ConcurrencyPolicy, ConfigError, Message,
    ParleyConfig, ParleyError, Provider, ProviderBuildConfig, ProviderError, RequestStatus,
    SessionConfig, SessionState, SubmissionOutcome, SummarizationSession,
    UnconfiguredProviderPolicy, build_registry, build_session, parse_command, run_repl,
};
