//! Session behavior switches.
//!
//! ```rust
//! use psession::{ConcurrencyPolicy, SessionConfig, UnconfiguredProviderPolicy};
//!
//! let config = SessionConfig::default()
//!     .with_window_size(4)
//!     .with_unconfigured_policy(UnconfiguredProviderPolicy::Fail);
//!
//! assert_eq!(config.window_size, 4);
//! assert!(config.replay_previous_prompt);
//! assert_eq!(config.concurrency, ConcurrencyPolicy::LatestSubmissionWins);
//! ```

use pprovider::Provider;

use crate::window::DEFAULT_WINDOW_SIZE;

/// Decides which submission may publish a terminal state when several overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyPolicy {
    /// Only the most recent submission publishes; older ones finish as superseded.
    #[default]
    LatestSubmissionWins,
    /// Whichever submission finishes last publishes last.
    LastCompletionWins,
}

/// What a submission does when the selected provider has no chat model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnconfiguredProviderPolicy {
    /// Stop quietly. The state stays `Pending`.
    #[default]
    Ignore,
    /// Publish `Failed` naming the provider.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub initial_provider: Provider,
    pub window_size: usize,
    pub replay_previous_prompt: bool,
    pub system_prompt: Option<String>,
    pub concurrency: ConcurrencyPolicy,
    pub unconfigured: UnconfiguredProviderPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_provider: Provider::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            replay_previous_prompt: true,
            system_prompt: None,
            concurrency: ConcurrencyPolicy::default(),
            unconfigured: UnconfiguredProviderPolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_initial_provider(mut self, provider: Provider) -> Self {
        self.initial_provider = provider;
        self
    }

    /// Sets the conversation window bound. Values below one are raised to one.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size.max(1);
        self
    }

    pub fn with_replay(mut self, replay_previous_prompt: bool) -> Self {
        self.replay_previous_prompt = replay_previous_prompt;
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_concurrency(mut self, concurrency: ConcurrencyPolicy) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_unconfigured_policy(mut self, unconfigured: UnconfiguredProviderPolicy) -> Self {
        self.unconfigured = unconfigured;
        self
    }
}

#[cfg(test)]
mod tests {
    use pprovider::Provider;

    use super::{ConcurrencyPolicy, SessionConfig, UnconfiguredProviderPolicy};

    #[test]
    fn defaults_follow_observed_application_behavior() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_provider, Provider::MistralAi);
        assert_eq!(config.window_size, 10);
        assert!(config.replay_previous_prompt);
        assert_eq!(config.system_prompt, None);
        assert_eq!(config.unconfigured, UnconfiguredProviderPolicy::Ignore);
        assert_eq!(config.concurrency, ConcurrencyPolicy::LatestSubmissionWins);
    }

    #[test]
    fn window_size_has_floor_of_one() {
        assert_eq!(SessionConfig::default().with_window_size(0).window_size, 1);
    }
}
