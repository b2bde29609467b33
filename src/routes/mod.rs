// src/routes/mod.rs
pub mod chat;

use crate::config::ServerConfig;
use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const HEALTH_BANNER: &str = "Twin Health API is running successfully!";

pub fn create_router(server: &ServerConfig) -> Router<SharedState> {
    let index = server.frontend_dir.join("index.html");
    // Unknown paths get index.html so client-side routing works.
    let frontend = ServeDir::new(&server.frontend_dir).fallback(ServeFile::new(index));

    let mut router = Router::new().route("/chat", post(chat_handler));

    if server.health_check_enabled {
        router = router.route("/", get(|| async { HEALTH_BANNER }));
    }

    router
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
}
