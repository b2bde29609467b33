//! Sends a single "Hello" to the configured provider to check that the
//! credential in `OPENROUTER_KEY` is accepted.

use std::process::ExitCode;

use twin_health_relay::{
    config::Config,
    services::provider::{ChatMessage, CompletionProvider, OpenRouterClient},
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match check(&config).await {
        Ok(reply) => {
            println!("token is valid, {} replied: {reply}", config.provider.model);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("token check failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn check(config: &Config) -> anyhow::Result<String> {
    let client = OpenRouterClient::new(&config.provider)?;
    let completion = client.complete(&[ChatMessage::user("Hello")]).await?;
    Ok(completion
        .first_content()
        .unwrap_or(config.relay.fallback_reply_text.as_str())
        .to_string())
}
