//! Tracing-based session hooks.
//!
//! ```rust
//! use pobserve::TracingSessionHooks;
//! use psession::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = TracingSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::SessionId;
use pprovider::Provider;
use psession::{ModelCall, SessionHooks, SessionState, SubmissionError};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionHooks;

impl SessionHooks for TracingSessionHooks {
    fn on_submit(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        tracing::info!(
            phase = "session",
            event = "submit",
            session_id = %session_id,
            ticket,
            provider = %provider
        );
    }

    fn on_model_call(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        call: ModelCall,
    ) {
        tracing::debug!(
            phase = "model",
            event = "call",
            session_id = %session_id,
            ticket,
            provider = %provider,
            call = call.as_str()
        );
    }

    fn on_transition(&self, session_id: &SessionId, state: &SessionState) {
        tracing::debug!(
            phase = "session",
            event = "transition",
            session_id = %session_id,
            provider = %state.selected_provider,
            status = state.status.label()
        );
    }

    fn on_completed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "session",
            event = "completed",
            session_id = %session_id,
            ticket,
            provider = %provider,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        error: &SubmissionError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "session",
            event = "failed",
            session_id = %session_id,
            ticket,
            provider = %provider,
            error_kind = %error.kind_label(),
            error = %error,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_aborted(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        tracing::warn!(
            phase = "session",
            event = "aborted",
            session_id = %session_id,
            ticket,
            provider = %provider,
            reason = "unconfigured_provider"
        );
    }

    fn on_superseded(&self, session_id: &SessionId, ticket: u64, latest_ticket: u64) {
        tracing::info!(
            phase = "session",
            event = "superseded",
            session_id = %session_id,
            ticket,
            latest_ticket
        );
    }
}
