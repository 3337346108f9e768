//! Summarization session: provider selection, submission, and the state cell.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use pcommon::SessionId;
use pprovider::{ChatModelRegistry, Provider};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::{
    ConcurrencyPolicy, ConversationChain, ConversationWindow, ModelCall, NoopSessionHooks,
    RequestStatus, SessionConfig, SessionError, SessionHooks, SessionState, SubmissionError,
    UnconfiguredProviderPolicy,
};

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed(String),
    Failed(String),
    /// The selected provider had no chat model; nothing was published.
    Aborted,
    /// A newer submission owned the state cell; the result was dropped.
    Superseded,
}

/// Awaitable handle to a spawned submission.
#[derive(Debug)]
pub struct SubmitHandle {
    ticket: u64,
    task: JoinHandle<SubmissionOutcome>,
}

impl SubmitHandle {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn wait(self) -> Result<SubmissionOutcome, SessionError> {
        Ok(self.task.await?)
    }
}

pub struct SummarizationSessionBuilder {
    registry: Arc<ChatModelRegistry>,
    config: SessionConfig,
    hooks: Arc<dyn SessionHooks>,
    session_id: Option<SessionId>,
}

impl SummarizationSessionBuilder {
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn SessionHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn session_id(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn build(self) -> SummarizationSession {
        let id = self.session_id.unwrap_or_else(SessionId::next);
        let (state, _) = watch::channel(SessionState::new(self.config.initial_provider));

        tracing::debug!(
            session_id = %id,
            provider = %self.config.initial_provider,
            configured = ?self.registry.providers(),
            "session created"
        );

        SummarizationSession {
            inner: Arc::new(SessionInner {
                id,
                registry: self.registry,
                config: self.config,
                hooks: self.hooks,
                state,
                latest_ticket: AtomicU64::new(0),
            }),
        }
    }
}

/// Holds the current state and runs submissions against the selected provider.
///
/// Each [`submit`](Self::submit) publishes `Pending` before returning and runs
/// the model exchange on a spawned Tokio task, so it must be called from within
/// a Tokio runtime.
///
/// ```rust
/// use std::sync::Arc;
///
/// use pprovider::{ChatModelRegistry, Provider};
/// use psession::{RequestStatus, SummarizationSession};
///
/// let session = SummarizationSession::new(Arc::new(ChatModelRegistry::builder().build()));
/// assert_eq!(session.state().status, RequestStatus::Idle);
///
/// session.select_provider(Provider::OpenAi);
/// assert_eq!(session.state().selected_provider, Provider::OpenAi);
///
/// // Blank prompts are ignored without touching the runtime.
/// assert!(session.submit("   ").is_none());
/// ```
#[derive(Clone)]
pub struct SummarizationSession {
    inner: Arc<SessionInner>,
}

impl SummarizationSession {
    pub fn new(registry: Arc<ChatModelRegistry>) -> Self {
        Self::builder(registry).build()
    }

    pub fn builder(registry: Arc<ChatModelRegistry>) -> SummarizationSessionBuilder {
        SummarizationSessionBuilder {
            registry,
            config: SessionConfig::default(),
            hooks: Arc::new(NoopSessionHooks),
            session_id: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.inner.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &ChatModelRegistry {
        &self.inner.registry
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Changes the provider used by later submissions. Status and in-flight work are untouched.
    pub fn select_provider(&self, provider: Provider) {
        let mut snapshot = None;
        self.inner.state.send_if_modified(|state| {
            if state.selected_provider == provider {
                return false;
            }

            *state = state.clone().with_provider(provider);
            snapshot = Some(state.clone());
            true
        });

        if let Some(state) = snapshot {
            tracing::debug!(session_id = %self.inner.id, provider = %provider, "provider selected");
            self.inner.hooks.on_transition(&self.inner.id, &state);
        }
    }

    /// Starts a submission for `text`.
    ///
    /// Returns `None` without any state change when `text` is blank, or when
    /// no Tokio runtime is available to run the submission.
    pub fn submit(&self, text: impl Into<String>) -> Option<SubmitHandle> {
        let prompt = text.into();
        if prompt.trim().is_empty() {
            tracing::debug!(session_id = %self.inner.id, "ignored blank prompt");
            return None;
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::error!(
                session_id = %self.inner.id,
                "submit called outside a Tokio runtime; prompt dropped"
            );
            return None;
        };

        let (submission, pending) = self.inner.begin_submission(prompt);
        let ticket = submission.ticket;
        self.inner
            .hooks
            .on_submit(&self.inner.id, ticket, submission.provider);
        self.inner.hooks.on_transition(&self.inner.id, &pending);

        let span = tracing::info_span!(
            "submission",
            session_id = %self.inner.id,
            ticket,
            provider = %submission.provider
        );
        let inner = Arc::clone(&self.inner);
        let task = runtime.spawn(async move { inner.run(submission).await }.instrument(span));

        Some(SubmitHandle { ticket, task })
    }
}

impl std::fmt::Debug for SummarizationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizationSession")
            .field("id", &self.inner.id)
            .field("config", &self.inner.config)
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

struct SessionInner {
    id: SessionId,
    registry: Arc<ChatModelRegistry>,
    config: SessionConfig,
    hooks: Arc<dyn SessionHooks>,
    state: watch::Sender<SessionState>,
    latest_ticket: AtomicU64,
}

/// Everything a submission task needs, captured while `Pending` is published.
struct Submission {
    ticket: u64,
    provider: Provider,
    previous_prompt: String,
    prompt: String,
    started: Instant,
}

impl SessionInner {
    fn begin_submission(&self, prompt: String) -> (Submission, SessionState) {
        let mut ticket = 0;
        let mut pending = SessionState::default();
        self.state.send_modify(|state| {
            ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            *state = state
                .clone()
                .with_ticket(ticket)
                .with_status(RequestStatus::Pending);
            pending = state.clone();
        });

        let submission = Submission {
            ticket,
            provider: pending.selected_provider,
            previous_prompt: pending.last_prompt.clone(),
            prompt,
            started: Instant::now(),
        };

        (submission, pending)
    }

    async fn run(&self, submission: Submission) -> SubmissionOutcome {
        let model = match self.registry.resolve(submission.provider) {
            Ok(model) => model,
            Err(error) => match self.config.unconfigured {
                UnconfiguredProviderPolicy::Ignore => {
                    tracing::warn!(event = "aborted", error = %error, "submission dropped");
                    self.hooks
                        .on_aborted(&self.id, submission.ticket, submission.provider);
                    return SubmissionOutcome::Aborted;
                }
                UnconfiguredProviderPolicy::Fail => {
                    return self.finish_failure(&submission, error.into());
                }
            },
        };

        let window = ConversationWindow::new(self.config.window_size);
        let mut chain = ConversationChain::new(model, window)
            .with_system_prompt(self.config.system_prompt.clone());

        if self.config.replay_previous_prompt && !submission.previous_prompt.is_empty() {
            self.hooks.on_model_call(
                &self.id,
                submission.ticket,
                submission.provider,
                ModelCall::Replay,
            );
            tracing::debug!(event = "model_call", call = ModelCall::Replay.as_str());

            if let Err(error) = chain.execute(&submission.previous_prompt).await {
                return self.finish_failure(&submission, error.into());
            }
        }

        self.hooks.on_model_call(
            &self.id,
            submission.ticket,
            submission.provider,
            ModelCall::Prompt,
        );
        tracing::debug!(event = "model_call", call = ModelCall::Prompt.as_str());

        match chain.execute(&submission.prompt).await {
            Ok(reply) => self.finish_success(&submission, reply),
            Err(error) => self.finish_failure(&submission, error.into()),
        }
    }

    fn finish_success(&self, submission: &Submission, reply: String) -> SubmissionOutcome {
        let status = RequestStatus::Completed(reply.clone());
        let published = self.publish_terminal(submission.ticket, |state| {
            state
                .with_last_prompt(submission.prompt.clone())
                .with_status(status)
        });

        match published {
            Some(state) => {
                let elapsed = submission.started.elapsed();
                tracing::info!(
                    event = "completed",
                    elapsed_ms = elapsed.as_millis() as u64,
                    "submission completed"
                );
                self.hooks.on_transition(&self.id, &state);
                self.hooks
                    .on_completed(&self.id, submission.ticket, submission.provider, elapsed);
                SubmissionOutcome::Completed(reply)
            }
            None => self.superseded(submission),
        }
    }

    fn finish_failure(&self, submission: &Submission, error: SubmissionError) -> SubmissionOutcome {
        let message = error.user_message();
        let status = RequestStatus::Failed(message.clone());
        let published = self.publish_terminal(submission.ticket, |state| state.with_status(status));

        match published {
            Some(state) => {
                let elapsed = submission.started.elapsed();
                tracing::warn!(
                    event = "failed",
                    error_kind = %error.kind_label(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "submission failed"
                );
                self.hooks.on_transition(&self.id, &state);
                self.hooks.on_failed(
                    &self.id,
                    submission.ticket,
                    submission.provider,
                    &error,
                    elapsed,
                );
                SubmissionOutcome::Failed(message)
            }
            None => self.superseded(submission),
        }
    }

    fn superseded(&self, submission: &Submission) -> SubmissionOutcome {
        let latest = self.latest_ticket.load(Ordering::SeqCst);
        tracing::debug!(event = "superseded", latest_ticket = latest, "result dropped");
        self.hooks.on_superseded(&self.id, submission.ticket, latest);
        SubmissionOutcome::Superseded
    }

    /// Replaces the state unless the concurrency policy says a newer submission owns it.
    fn publish_terminal(
        &self,
        ticket: u64,
        next: impl FnOnce(SessionState) -> SessionState,
    ) -> Option<SessionState> {
        let mut published = None;
        self.state.send_if_modified(|state| {
            if self.config.concurrency == ConcurrencyPolicy::LatestSubmissionWins
                && self.latest_ticket.load(Ordering::SeqCst) != ticket
            {
                return false;
            }

            *state = next(state.clone()).with_ticket(ticket);
            published = Some(state.clone());
            true
        });

        published
    }
}
