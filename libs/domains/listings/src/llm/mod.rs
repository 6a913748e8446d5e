//! LLM provider abstraction and the OpenAI implementation.

pub mod openai;
pub mod provider;

pub use openai::{OpenAiConfig, OpenAiProvider};
pub use provider::LlmProvider;
