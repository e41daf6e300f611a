// file: src/summarizer/mod.rs
// description: llm summarization module exports
// reference: internal module structure

pub mod ollama;
pub mod prompt;

pub use ollama::OllamaClient;
