//! Metrics-based session hooks.
//!
//! ```rust
//! use pobserve::MetricsSessionHooks;
//! use psession::SessionHooks;
//!
//! fn accepts_session_hooks(_hooks: &dyn SessionHooks) {}
//!
//! let hooks = MetricsSessionHooks;
//! accepts_session_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::SessionId;
use pprovider::Provider;
use psession::{ModelCall, SessionHooks, SubmissionError};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSessionHooks;

impl SessionHooks for MetricsSessionHooks {
    fn on_submit(&self, _session_id: &SessionId, _ticket: u64, provider: Provider) {
        metrics::counter!(
            "parley_session_submit_total",
            "provider" => provider.to_string()
        )
        .increment(1);
    }

    fn on_model_call(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        provider: Provider,
        call: ModelCall,
    ) {
        metrics::counter!(
            "parley_model_call_total",
            "provider" => provider.to_string(),
            "call" => call.as_str()
        )
        .increment(1);
    }

    fn on_completed(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        provider: Provider,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "parley_session_completed_total",
            "provider" => provider.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "parley_session_duration_seconds",
            "provider" => provider.to_string(),
            "outcome" => "completed"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failed(
        &self,
        _session_id: &SessionId,
        _ticket: u64,
        provider: Provider,
        error: &SubmissionError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "parley_session_failed_total",
            "provider" => provider.to_string(),
            "error_kind" => error.kind_label()
        )
        .increment(1);
        metrics::histogram!(
            "parley_session_duration_seconds",
            "provider" => provider.to_string(),
            "outcome" => "failed"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_aborted(&self, _session_id: &SessionId, _ticket: u64, provider: Provider) {
        metrics::counter!(
            "parley_session_aborted_total",
            "provider" => provider.to_string()
        )
        .increment(1);
    }

    fn on_superseded(&self, _session_id: &SessionId, _ticket: u64, _latest_ticket: u64) {
        metrics::counter!("parley_session_superseded_total").increment(1);
    }
}
