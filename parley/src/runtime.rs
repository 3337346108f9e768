//! Session wiring helpers.

use std::sync::Arc;

use pobserve::{FanoutSessionHooks, MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks};
use pprovider::ChatModelRegistry;
use psession::{SessionConfig, SessionHooks, SummarizationSession};

use crate::providers::build_registry;
use crate::ParleyConfig;

/// Tracing and metrics hooks, each shielded from panics.
pub fn default_hooks() -> Arc<dyn SessionHooks> {
    Arc::new(
        FanoutSessionHooks::new()
            .with(Arc::new(SafeSessionHooks::new(TracingSessionHooks)))
            .with(Arc::new(SafeSessionHooks::new(MetricsSessionHooks))),
    )
}

pub fn session_with_registry(
    registry: Arc<ChatModelRegistry>,
    config: SessionConfig,
) -> SummarizationSession {
    SummarizationSession::builder(registry)
        .config(config)
        .hooks(default_hooks())
        .build()
}

pub fn build_session(config: &ParleyConfig) -> SummarizationSession {
    let registry = build_registry(config);
    session_with_registry(Arc::new(registry), config.session.clone())
}
