use std::sync::Arc;

use crate::application::ports::{RateLimiter, TokenVerifier};
use crate::application::services::{CompletionService, ConversationService, MessageService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub conversation_service: Arc<ConversationService>,
    pub message_service: Arc<MessageService>,
    pub completion_service: Arc<CompletionService>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub settings: Settings,
}
