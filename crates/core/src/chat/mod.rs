//! Keyword-rule market assistant.

mod chat_model;
mod chat_rules;
mod chat_service;

pub use chat_model::{ChatIntent, ChatReply};
pub use chat_rules::{ChatRule, Predicate, CHAT_RULES, FALLBACK_RESPONSE};
pub use chat_service::{ChatService, ChatServiceTrait};
