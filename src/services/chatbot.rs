// src/services/chatbot.rs
use tracing::warn;

use crate::config::{EmptyChoicesPolicy, RelayOptions};
use crate::services::provider::{ChatMessage, CompletionProvider, ProviderError};

/// Outcome of a successful provider round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// The provider answered without any usable choice.
    NoChoices,
}

/// System entry first, then the user's message untouched.
pub fn build_prompt(system_prompt: &str, user_msg: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system_prompt), ChatMessage::user(user_msg)]
}

pub async fn generate_reply(
    provider: &dyn CompletionProvider,
    options: &RelayOptions,
    user_msg: &str,
) -> Result<Reply, ProviderError> {
    let prompt = build_prompt(&options.system_prompt, user_msg);
    let completion = provider.complete(&prompt).await?;

    match completion.first_content() {
        Some(text) => Ok(Reply::Text(text.to_string())),
        None => {
            warn!(
                choices = completion.choices.len(),
                policy = ?options.empty_choices,
                "provider returned no usable choice"
            );
            match options.empty_choices {
                EmptyChoicesPolicy::Fallback => Ok(Reply::Text(options.fallback_reply_text.clone())),
                EmptyChoicesPolicy::Warn => Ok(Reply::NoChoices),
            }
        }
    }
}
