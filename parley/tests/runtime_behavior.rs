use std::sync::Arc;
use std::time::Duration;

use parley::{
    ChatModel, ChatModelRegistry, Message, ParleyConfig, Provider, ProviderBuildConfig,
    ProviderError, ProviderErrorKind, ProviderSettings, RequestStatus, SessionConfig,
    SubmissionOutcome, build_chat_model, build_registry, build_session, session_with_registry,
};
use pprovider::ProviderFuture;

struct Echo;

impl ChatModel for Echo {
    fn provider(&self) -> Provider {
        Provider::MistralAi
    }

    fn model_name(&self) -> &str {
        "echo"
    }

    fn complete<'a>(
        &'a self,
        history: &'a [Message],
        input: &'a str,
    ) -> ProviderFuture<'a, Result<String, ProviderError>> {
        Box::pin(async move { Ok(format!("{input} ({} prior)", history.len())) })
    }
}

fn settings(api_key: &str) -> ProviderSettings {
    ProviderSettings {
        api_key: Some(api_key.to_string()),
        ..ProviderSettings::default()
    }
}

#[test]
fn registry_holds_only_providers_with_keys() {
    let config = ParleyConfig {
        mistral: settings("mistral-key"),
        ..ParleyConfig::default()
    };

    let registry = build_registry(&config);
    assert_eq!(registry.providers(), vec![Provider::MistralAi]);
    assert!(!registry.contains(Provider::Gemini));
}

#[test]
fn registry_applies_model_overrides() {
    let config = ParleyConfig {
        openai: ProviderSettings {
            model: Some("gpt-4o-mini".to_string()),
            ..settings("sk-live-1")
        },
        mistral: settings("mistral-key"),
        timeout: Duration::from_secs(5),
        ..ParleyConfig::default()
    };

    let registry = build_registry(&config);
    let openai = registry.resolve(Provider::OpenAi).expect("openai configured");
    let mistral = registry.resolve(Provider::MistralAi).expect("mistral configured");

    assert_eq!(openai.model_name(), "gpt-4o-mini");
    assert_eq!(mistral.model_name(), "open-mistral-7b");
}

#[test]
fn empty_config_builds_empty_registry() {
    let registry = build_registry(&ParleyConfig::default());
    assert!(registry.is_empty());
}

#[test]
fn invalid_openai_key_is_skipped_and_keeps_mistral() {
    let config = ParleyConfig {
        openai: settings("not-an-openai-key"),
        mistral: settings("mistral-key"),
        ..ParleyConfig::default()
    };

    let registry = build_registry(&config);
    assert_eq!(registry.providers(), vec![Provider::MistralAi]);
    assert!(!registry.contains(Provider::OpenAi));

    let rejected = ProviderBuildConfig::new(Provider::OpenAi, "not-an-openai-key");
    let error = build_chat_model(rejected)
        .err()
        .expect("bad key is rejected by the builder");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);
}

#[test]
fn chat_model_builder_rejects_blank_keys_and_gemini() {
    let error = build_chat_model(ProviderBuildConfig::new(Provider::MistralAi, "  "))
        .err()
        .expect("blank key must fail");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);

    let error = build_chat_model(ProviderBuildConfig::new(Provider::Gemini, "key"))
        .err()
        .expect("gemini has no adapter");
    assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
}

#[test]
fn build_config_debug_redacts_key() {
    let config = ProviderBuildConfig::new(Provider::OpenAi, "sk-secret");
    assert!(!format!("{config:?}").contains("sk-secret"));
}

#[tokio::test]
async fn wired_session_completes_through_default_hooks() {
    let registry = Arc::new(ChatModelRegistry::builder().register(Echo).build());
    let session = session_with_registry(registry, SessionConfig::default());

    let outcome = session
        .submit("first")
        .expect("not blank")
        .wait()
        .await
        .expect("task should join");
    assert_eq!(
        outcome,
        SubmissionOutcome::Completed("first (0 prior)".to_string())
    );

    session
        .submit("second")
        .expect("not blank")
        .wait()
        .await
        .expect("task should join");
    assert_eq!(
        session.state().status,
        RequestStatus::Completed("second (2 prior)".to_string())
    );
}

#[tokio::test]
async fn built_session_starts_on_configured_provider() {
    let config = ParleyConfig {
        mistral: settings("mistral-key"),
        session: SessionConfig::default().with_initial_provider(Provider::Gemini),
        ..ParleyConfig::default()
    };

    let session = build_session(&config);
    assert_eq!(session.state().selected_provider, Provider::Gemini);
    assert!(session.registry().contains(Provider::MistralAi));
}
