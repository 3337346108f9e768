//! Plain-text rendering of session state for the terminal.

use pprovider::{ChatModelRegistry, Provider};
use psession::{RequestStatus, SessionState};

pub const HELP: &str = "\
Type text and press enter to summarize it.
  /provider <name>  select openai, gemini, or mistral
  /providers        list providers
  /help             show this message
  /quit             exit";

pub fn render_status(state: &SessionState) -> String {
    match &state.status {
        RequestStatus::Idle => format!(
            "Ready. Using {}; type a prompt to summarize.",
            state.selected_provider.display_name()
        ),
        RequestStatus::Pending => format!(
            "Summarizing with {}...",
            state.selected_provider.display_name()
        ),
        RequestStatus::Completed(summary) => summary.clone(),
        RequestStatus::Failed(message) => format!("Error: {message}"),
    }
}

/// One line per provider in menu order, marking the selection and missing configuration.
pub fn render_providers(registry: &ChatModelRegistry, selected: Provider) -> String {
    Provider::ALL
        .iter()
        .map(|provider| {
            let marker = if *provider == selected { '*' } else { ' ' };
            let note = if registry.contains(*provider) {
                ""
            } else {
                " (not configured)"
            };
            format!(
                "{marker} {:<10} /provider {}{note}",
                provider.display_name(),
                provider.slug()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
