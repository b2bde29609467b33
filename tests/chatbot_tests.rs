use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use twin_health_relay::config::{EmptyChoicesPolicy, RelayOptions};
use twin_health_relay::services::chatbot::{Reply, generate_reply};
use twin_health_relay::services::provider::{
    ChatMessage, CompletionProvider, CompletionResponse, ProviderError, Role,
};

fn reply_with(text: &str) -> CompletionResponse {
    serde_json::from_value(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": text}}]
    }))
    .unwrap()
}

struct ScriptedProvider {
    response: Option<CompletionResponse>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedProvider {
    fn replying(response: CompletionResponse) -> Self {
        Self { response: Some(response), calls: Mutex::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self { response: None, calls: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, ProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.response.clone().ok_or(ProviderError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "rate limited".to_string(),
        })
    }
}

#[tokio::test]
async fn test_prompt_carries_system_then_user_verbatim() {
    let provider = ScriptedProvider::replying(reply_with("Oatmeal with berries."));
    let options = RelayOptions {
        system_prompt: "Only talk about Twin Health.".to_string(),
        ..Default::default()
    };
    let message = "  What is a good breakfast for a twin study participant? 🍳\n";

    let reply = generate_reply(&provider, &options, message).await.unwrap();
    assert_eq!(reply, Reply::Text("Oatmeal with berries.".to_string()));

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0];
    assert_eq!(prompt.len(), 2);
    assert_eq!(prompt[0].role, Role::System);
    assert_eq!(prompt[0].content, "Only talk about Twin Health.");
    assert_eq!(prompt[1].role, Role::User);
    assert_eq!(prompt[1].content.as_bytes(), message.as_bytes());
}

#[tokio::test]
async fn test_empty_choices_use_fallback_text() {
    let provider = ScriptedProvider::replying(CompletionResponse::default());
    let options = RelayOptions::default();

    let reply = generate_reply(&provider, &options, "hello").await.unwrap();
    assert_eq!(reply, Reply::Text("No reply from API".to_string()));
}

#[tokio::test]
async fn test_custom_fallback_text() {
    let provider = ScriptedProvider::replying(CompletionResponse::default());
    let options = RelayOptions {
        fallback_reply_text: "Please try again.".to_string(),
        ..Default::default()
    };

    let reply = generate_reply(&provider, &options, "hello").await.unwrap();
    assert_eq!(reply, Reply::Text("Please try again.".to_string()));
}

#[tokio::test]
async fn test_empty_choices_with_warn_policy() {
    let provider = ScriptedProvider::replying(CompletionResponse::default());
    let options = RelayOptions {
        empty_choices: EmptyChoicesPolicy::Warn,
        ..Default::default()
    };

    let reply = generate_reply(&provider, &options, "hello").await.unwrap();
    assert_eq!(reply, Reply::NoChoices);
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let provider = ScriptedProvider::failing();
    let err = generate_reply(&provider, &RelayOptions::default(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Status { status, .. } if status == StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(provider.calls.lock().unwrap().len(), 1);
}
