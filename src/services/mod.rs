pub mod chatbot;
pub mod prompt;
pub mod provider;
