use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pcommon::SessionId;
use pprovider::Provider;
use psession::{ModelCall, SessionHooks, SessionState, SubmissionError};

/// Swallows panics raised by the wrapped hooks.
pub struct SafeSessionHooks<H> {
    inner: H,
}

impl<H> SafeSessionHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> SessionHooks for SafeSessionHooks<H>
where
    H: SessionHooks,
{
    fn on_submit(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_submit(session_id, ticket, provider)
        }));
    }

    fn on_model_call(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        call: ModelCall,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_model_call(session_id, ticket, provider, call)
        }));
    }

    fn on_transition(&self, session_id: &SessionId, state: &SessionState) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_transition(session_id, state)
        }));
    }

    fn on_completed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_completed(session_id, ticket, provider, elapsed)
        }));
    }

    fn on_failed(
        &self,
        session_id: &SessionId,
        ticket: u64,
        provider: Provider,
        error: &SubmissionError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_failed(session_id, ticket, provider, error, elapsed)
        }));
    }

    fn on_aborted(&self, session_id: &SessionId, ticket: u64, provider: Provider) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_aborted(session_id, ticket, provider)
        }));
    }

    fn on_superseded(&self, session_id: &SessionId, ticket: u64, latest_ticket: u64) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_superseded(session_id, ticket, latest_ticket)
        }));
    }
}
