//! Callbacks for observing session submissions.
//!
//! ```rust
//! use psession::{NoopSessionHooks, SessionHooks};
//!
//! fn accepts_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = NoopSessionHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::SessionId;
use pprovider::Provider;

use crate::{SessionState, SubmissionError};

/// Which prompt a model call is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCall {
    /// The previous successful prompt, re-sent to seed the window.
    Replay,
    Prompt,
}

impl ModelCall {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replay => "replay",
            Self::Prompt => "prompt",
        }
    }
}

pub trait SessionHooks: Send + Sync {
    fn on_submit(&self, _session_id: &SessionId, _ticket: u64, _provider: Provider) {}

    fn on_model_call(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        _provider: Provider,
        _call: ModelCall,
    ) {
    }

    /// Called after every published state change.
    fn on_transition(&self, _session_id: &SessionId, _state: &SessionState) {}

    fn on_completed(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        _provider: Provider,
        _elapsed: Duration,
    ) {
    }

    fn on_failed(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        _provider: Provider,
        _error: &SubmissionError,
        _elapsed: Duration,
    ) {
    }

    /// The selected provider had no chat model and the session is set to ignore it.
    fn on_aborted(&self, _session_id: &SessionId, _ticket: u64, _provider: Provider) {}

    /// A newer submission owned the state cell when this one finished.
    fn on_superseded(&self, _session_id: &SessionId, _ticket: u64, _latest_ticket: u64) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionHooks;

impl SessionHooks for NoopSessionHooks {}
