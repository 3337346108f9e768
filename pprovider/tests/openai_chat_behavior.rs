#![cfg(feature = "provider-openai")]

use std::sync::{Arc, Mutex};

use pprovider::adapters::openai::{
    OPENAI_DEFAULT_MODEL, OpenAiChatModel, OpenAiFinishReason, OpenAiRequest, OpenAiResponse,
    OpenAiRole, OpenAiTransport, OpenAiUsage,
};
use pprovider::{
    ChatModel, ChatModelRegistry, GenerationOptions, Message, Provider, ProviderError,
    ProviderErrorKind, ProviderFuture, SecretString, SecureCredentialManager,
};

#[derive(Debug, Default)]
struct FakeTransport {
    captured_key: Mutex<Option<String>>,
    captured_request: Mutex<Option<OpenAiRequest>>,
    failure: Option<ProviderError>,
}

impl FakeTransport {
    fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }
}

impl OpenAiTransport for FakeTransport {
    fn complete<'a>(
        &'a self,
        request: OpenAiRequest,
        api_key: SecretString,
    ) -> ProviderFuture<'a, Result<OpenAiResponse, ProviderError>> {
        Box::pin(async move {
            *self.captured_key.lock().expect("key lock") = Some(api_key.expose().to_string());
            *self.captured_request.lock().expect("request lock") = Some(request.clone());

            if let Some(error) = &self.failure {
                return Err(error.clone());
            }

            Ok(OpenAiResponse {
                model: request.model,
                content: "a short summary".to_string(),
                finish_reason: OpenAiFinishReason::Stop,
                usage: OpenAiUsage {
                    prompt_tokens: 20,
                    completion_tokens: 4,
                    total_tokens: 24,
                },
            })
        })
    }
}

fn credentials_with_openai_key() -> Arc<SecureCredentialManager> {
    let credentials = Arc::new(SecureCredentialManager::new());
    credentials
        .set_openai_api_key("sk-live-123")
        .expect("key should set");
    credentials
}

#[tokio::test]
async fn complete_sends_history_then_input_with_bearer_key() {
    let transport = Arc::new(FakeTransport::default());
    let model = OpenAiChatModel::new(credentials_with_openai_key(), transport.clone());
    assert_eq!(model.provider(), Provider::OpenAi);
    assert_eq!(model.model_name(), OPENAI_DEFAULT_MODEL);

    let history = vec![
        Message::user("Summarize: the cat sat on the mat."),
        Message::assistant("A cat sat."),
    ];
    let reply = model
        .complete(&history, "Summarize: it rained all day.")
        .await
        .expect("completion should succeed");
    assert_eq!(reply, "a short summary");

    let key = transport
        .captured_key
        .lock()
        .expect("key lock")
        .clone()
        .expect("key should be captured");
    assert_eq!(key, "sk-live-123");

    let request = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(request.model, "gpt-4-turbo-preview");
    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[2].role, OpenAiRole::User);
    assert_eq!(request.messages[2].content, "Summarize: it rained all day.");
}

#[tokio::test]
async fn model_and_options_overrides_reach_the_request() {
    let transport = Arc::new(FakeTransport::default());
    let model = OpenAiChatModel::new(credentials_with_openai_key(), transport.clone())
        .with_model("gpt-4o-mini")
        .with_options(GenerationOptions::default().with_temperature(0.2));

    model.complete(&[], "hello").await.expect("completion should succeed");

    let request = transport
        .captured_request
        .lock()
        .expect("request lock")
        .clone()
        .expect("request should be captured");
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.temperature, Some(0.2));
}

#[tokio::test]
async fn missing_key_fails_before_reaching_transport() {
    let transport = Arc::new(FakeTransport::default());
    let model = OpenAiChatModel::new(Arc::new(SecureCredentialManager::new()), transport.clone());

    let error = model
        .complete(&[], "hello")
        .await
        .expect_err("missing key must fail");
    assert_eq!(error.kind, ProviderErrorKind::Authentication);
    assert_eq!(error.message, "no Open Ai API key configured");
    assert!(transport.captured_request.lock().expect("request lock").is_none());
}

#[tokio::test]
async fn invalid_options_are_rejected_as_invalid_request() {
    let transport = Arc::new(FakeTransport::default());
    let model = OpenAiChatModel::new(credentials_with_openai_key(), transport.clone())
        .with_options(GenerationOptions::default().with_max_tokens(0));

    let error = model
        .complete(&[], "hello")
        .await
        .expect_err("zero max tokens must fail");
    assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
    assert!(transport.captured_request.lock().expect("request lock").is_none());
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let transport = Arc::new(FakeTransport::failing(ProviderError::rate_limited(
        "Rate limit reached",
    )));
    let model = OpenAiChatModel::new(credentials_with_openai_key(), transport);

    let error = model
        .complete(&[], "hello")
        .await
        .expect_err("transport failure must propagate");
    assert_eq!(error.kind, ProviderErrorKind::RateLimited);
    assert_eq!(error.user_message(), "Rate limit reached");
}

#[tokio::test]
async fn registered_adapter_is_resolved_by_provider() {
    let model = OpenAiChatModel::new(
        credentials_with_openai_key(),
        Arc::new(FakeTransport::default()),
    );
    let registry = ChatModelRegistry::builder().register(model).build();

    let resolved = registry
        .resolve(Provider::OpenAi)
        .expect("openai should resolve");
    let reply = resolved
        .complete(&[], "hello")
        .await
        .expect("completion should succeed");
    assert_eq!(reply, "a short summary");
    assert!(registry.resolve(Provider::Gemini).is_err());
}
