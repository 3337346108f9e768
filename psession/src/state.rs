//! The single observable session state value.
//!
//! ```rust
//! use pprovider::Provider;
//! use psession::{RequestStatus, SessionState};
//!
//! let state = SessionState::new(Provider::MistralAi);
//! assert_eq!(state.status, RequestStatus::Idle);
//!
//! let pending = state.clone().with_status(RequestStatus::Pending);
//! assert!(pending.status.is_pending());
//! assert_eq!(state.status, RequestStatus::Idle);
//! ```

use std::fmt::{Display, Formatter};

use pprovider::Provider;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Completed(String),
    Failed(String),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }

    /// Short label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
        }
    }
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub selected_provider: Provider,
    /// Last prompt that completed successfully; replayed ahead of the next one.
    pub last_prompt: String,
    pub status: RequestStatus,
    /// Ticket of the submission that published `status`; zero until the first submission.
    pub ticket: u64,
}

impl SessionState {
    pub fn new(selected_provider: Provider) -> Self {
        Self {
            selected_provider,
            last_prompt: String::new(),
            status: RequestStatus::Idle,
            ticket: 0,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.selected_provider = provider;
        self
    }

    pub fn with_last_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.last_prompt = prompt.into();
        self
    }

    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_ticket(mut self, ticket: u64) -> Self {
        self.ticket = ticket;
        self
    }
}

#[cfg(test)]
mod tests {
    use pprovider::Provider;

    use super::{RequestStatus, SessionState};

    #[test]
    fn default_state_is_idle_on_mistral_with_no_prompt() {
        let state = SessionState::default();
        assert_eq!(state.selected_provider, Provider::MistralAi);
        assert!(state.last_prompt.is_empty());
        assert_eq!(state.status, RequestStatus::Idle);
        assert_eq!(state.ticket, 0);
    }

    #[test]
    fn status_labels_and_terminal_flags() {
        assert_eq!(RequestStatus::Pending.to_string(), "pending");
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Completed("ok".to_string()).is_terminal());
        assert!(RequestStatus::Failed("boom".to_string()).is_terminal());
        assert_eq!(RequestStatus::Failed("boom".to_string()).label(), "failed");
    }

    #[test]
    fn builders_replace_single_fields() {
        let state = SessionState::new(Provider::OpenAi)
            .with_last_prompt("first")
            .with_status(RequestStatus::Completed("summary".to_string()))
            .with_provider(Provider::Gemini);

        assert_eq!(state.selected_provider, Provider::Gemini);
        assert_eq!(state.last_prompt, "first");
        assert_eq!(state.status, RequestStatus::Completed("summary".to_string()));
    }
}
