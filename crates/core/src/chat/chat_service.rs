use log::debug;
use serde_json::Value;

use super::chat_model::{ChatIntent, ChatReply};
use super::chat_rules::{CHAT_RULES, FALLBACK_RESPONSE};

/// Trait for chat service operations
pub trait ChatServiceTrait: Send + Sync {
    /// Answers `message`. `context` is accepted for forward compatibility and
    /// currently has no effect on the reply.
    fn respond(&self, message: &str, context: Option<&Value>) -> ChatReply;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChatService;

impl ChatService {
    pub fn new() -> Self {
        ChatService
    }
}

impl ChatServiceTrait for ChatService {
    fn respond(&self, message: &str, _context: Option<&Value>) -> ChatReply {
        let lowered = message.to_lowercase();
        let (intent, response) = CHAT_RULES
            .iter()
            .find(|rule| rule.predicate.matches(&lowered))
            .map(|rule| (rule.intent, rule.response))
            .unwrap_or((ChatIntent::Fallback, FALLBACK_RESPONSE));
        debug!("Chat message matched {:?}", intent);
        ChatReply {
            intent,
            response: response.to_string(),
        }
    }
}
