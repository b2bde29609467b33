// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::chatbot::Reply;

pub const NO_CHOICES_WARNING: &str = "no_choices";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<Reply> for ChatResponse {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Text(text) => Self { reply: Some(text), warning: None },
            Reply::NoChoices => Self {
                reply: None,
                warning: Some(NO_CHOICES_WARNING.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
