//! Chat-completion API access.

pub mod client;
pub mod types;

pub use client::{ChatClient, MessageGenerator, parse_completion};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
