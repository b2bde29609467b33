// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload {
        Ok(Json(ChatRequest { message: Some(message) })) if !message.is_empty() => message,
        Ok(_) => return Err(AppError::MissingMessage),
        Err(rejection) => {
            debug!(%rejection, "rejected chat payload");
            return Err(AppError::MissingMessage);
        }
    };

    let reply = generate_reply(state.provider.as_ref(), &state.relay, &message).await?;

    Ok(Json(reply.into()))
}
