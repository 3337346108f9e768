//! Forwards every session callback to a list of hooks.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pobserve::{FanoutSessionHooks, MetricsSessionHooks, TracingSessionHooks};
//!
//! let hooks = FanoutSessionHooks::new()
//!     .with(Arc::new(TracingSessionHooks))
//!     .with(Arc::new(MetricsSessionHooks));
//! assert_eq!(hooks.len(), 2);
//! ```

use std::sync::Arc;
use std::time::Duration;

use pcommon::SessionId;
use pprovider::Provider;
use psession::{ModelCall, SessionHooks, SessionState, SubmissionError};

#[derive(Default, Clone)]
pub struct FanoutSessionHooks {
    hooks: Vec<Arc<dyn SessionHooks>>,
}

impl FanoutSessionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl SessionHooks for FanoutSessionHooks {
    fn on_submit(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        for hooks in &self.hooks {
            hooks.on_submit(session_id, ticket, provider);
        }
    }

    fn on_model_call(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        call: ModelCall,
    ) {
        for hooks in &self.hooks {
            hooks.on_model_call(session_id, ticket, provider, call);
        }
    }

    fn on_transition(&self, session_id: &SessionId, state: &SessionState) {
        for hooks in &self.hooks {
            hooks.on_transition(session_id, state);
        }
    }

    fn on_completed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_completed(session_id, ticket, provider, elapsed);
        }
    }

    fn on_failed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        error: &SubmissionError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_failed(session_id, ticket, provider, error, elapsed);
        }
    }

    fn on_aborted(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        for hooks in &self.hooks {
            hooks.on_aborted(session_id, ticket, provider);
        }
    }

    fn on_superseded(&self, session_id: &SessionId, ticket: u64, latest_ticket: u64) {
        for hooks in &self.hooks {
            hooks.on_superseded(session_id, ticket, latest_ticket);
        }
    }
}
