use std::collections::HashMap;
use std::time::Duration;

use parley::{ConfigError, DEFAULT_TIMEOUT, ParleyConfig, Provider};

fn config_from(pairs: &[(&str, &str)]) -> Result<ParleyConfig, ConfigError> {
    let env = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    ParleyConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let config = config_from(&[]).expect("defaults should parse");

    assert_eq!(config, ParleyConfig::default());
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.session.initial_provider, Provider::MistralAi);
    assert_eq!(config.session.window_size, 10);
    assert!(config.session.replay_previous_prompt);
    assert!(config.openai.api_key.is_none());
}

#[test]
fn all_variables_are_read() {
    let config = config_from(&[
        ("OPENAI_API_KEY", "sk-live-1"),
        ("MISTRAL_API_KEY", " mistral-key "),
        ("PARLEY_OPENAI_MODEL", "gpt-4o-mini"),
        ("PARLEY_MISTRAL_MODEL", "mistral-small-latest"),
        ("PARLEY_OPENAI_BASE_URL", "http://localhost:8080/v1"),
        ("PARLEY_MISTRAL_BASE_URL", "http://localhost:8081/v1"),
        ("PARLEY_WINDOW_SIZE", "4"),
        ("PARLEY_TIMEOUT_SECS", "15"),
        ("PARLEY_PROVIDER", "Open Ai"),
        ("PARLEY_REPLAY", "false"),
        ("PARLEY_SYSTEM_PROMPT", "Answer in one sentence."),
    ])
    .expect("config should parse");

    assert_eq!(config.openai.api_key.as_deref(), Some("sk-live-1"));
    assert_eq!(config.mistral.api_key.as_deref(), Some("mistral-key"));
    assert_eq!(config.openai.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(
        config.mistral.base_url.as_deref(),
        Some("http://localhost:8081/v1")
    );
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert_eq!(config.session.window_size, 4);
    assert_eq!(config.session.initial_provider, Provider::OpenAi);
    assert!(!config.session.replay_previous_prompt);
    assert_eq!(
        config.session.system_prompt.as_deref(),
        Some("Answer in one sentence.")
    );
}

#[test]
fn blank_values_count_as_unset() {
    let config = config_from(&[("OPENAI_API_KEY", "   "), ("PARLEY_PROVIDER", "")])
        .expect("blank values should be ignored");

    assert!(config.openai.api_key.is_none());
    assert_eq!(config.session.initial_provider, Provider::MistralAi);
}

#[test]
fn malformed_values_name_the_variable() {
    let error = config_from(&[("PARLEY_WINDOW_SIZE", "ten")]).expect_err("must fail");
    assert!(error.to_string().starts_with("PARLEY_WINDOW_SIZE has invalid value 'ten'"));

    let error = config_from(&[("PARLEY_PROVIDER", "claude")]).expect_err("must fail");
    assert_eq!(
        error,
        ConfigError::invalid_value("PARLEY_PROVIDER", "claude", "unknown provider 'claude'")
    );

    assert!(config_from(&[("PARLEY_TIMEOUT_SECS", "0")]).is_err());
    assert!(config_from(&[("PARLEY_REPLAY", "sometimes")]).is_err());
}
